pub mod submit;

use axum::{routing::post, Router};
pub use submit::submit;

use crate::setup::AppState;

pub fn submissions_router() -> Router<AppState> {
    Router::new().route("/:slug", post(submit))
}
