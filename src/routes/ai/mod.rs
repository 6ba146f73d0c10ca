pub mod chat;
pub mod enhance;
pub mod generate;

use axum::{routing::post, Router};
pub use chat::ai_chat;
pub use enhance::ai_enhance;
pub use generate::ai_generate;

use crate::setup::AppState;

pub fn ai_router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(ai_chat))
        .route("/enhance", post(ai_enhance))
        .route("/generate", post(ai_generate))
}
