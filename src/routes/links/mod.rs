pub mod analytics;
pub mod extend;
pub mod list;

pub use analytics::link_analytics;
use axum::{
    routing::{get, post},
    Router,
};
pub use extend::extend_link;
pub use list::list_links;

use crate::setup::AppState;

pub fn links_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_links))
        .route("/:id/extend", post(extend_link))
        .route("/:id/analytics", get(link_analytics))
}
