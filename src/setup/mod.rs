mod config;
mod database;
mod email_service;
mod integrations;
mod router;

pub use config::Config;
pub use database::setup_database;
pub use email_service::setup_email_service;
pub use integrations::{setup_ai_layer, setup_payment_gateway, setup_sheets_layer};
pub use router::{setup_api_router, AppState};
