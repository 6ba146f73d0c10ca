pub mod ai;
pub mod auth;
pub mod forms;
pub mod links;
pub mod payments;
pub mod sheets;
pub mod submissions;

use axum::Router;

use crate::setup::AppState;

fn api_v1_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::auth_router())
        .nest("/forms", forms::forms_router())
        .nest("/submissions", submissions::submissions_router())
        .nest("/payments", payments::payments_router())
        .nest("/links", links::links_router())
        .nest("/ai", ai::ai_router())
        .nest("/sheets", sheets::sheets_router())
}

// Main router that serves as the entry point for all routes
pub fn main_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_router())
}
