use axum::{Extension, Router};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::Config;
use crate::{
    routes,
    services::{
        ai::AiLayer, database::DatabaseLayer, email::EmailLayer, payments::PaymentGatewayLayer,
        sheets::SheetsLayer,
    },
};

#[derive(Clone)]
pub struct AppState {}

pub async fn setup_api_router(
    config: &Config,
    database_layer: DatabaseLayer,
    email_layer: EmailLayer,
    ai_layer: AiLayer,
    sheets_layer: SheetsLayer,
    gateway: PaymentGatewayLayer,
) -> Result<(Router, TcpListener), std::io::Error> {
    let shared_state = AppState {};

    let app = routes::main_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(Extension(database_layer))
        .layer(Extension(email_layer))
        .layer(Extension(ai_layer))
        .layer(Extension(sheets_layer))
        .layer(Extension(gateway))
        .with_state(shared_state);

    let listener = TcpListener::bind(&config.bind_addr).await?;

    Ok((app, listener))
}
