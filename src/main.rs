use dotenv::dotenv;
use formbay_api::setup::{
    setup_ai_layer, setup_api_router, setup_database, setup_email_service, setup_payment_gateway,
    setup_sheets_layer, Config,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    let config = Config::from_env();

    let database_layer = setup_database(&config).await?;
    let email_layer = setup_email_service(&config);
    let ai_layer = setup_ai_layer(&config);
    let sheets_layer = setup_sheets_layer(&config);
    let gateway = setup_payment_gateway(&config);

    let (app, listener) = setup_api_router(
        &config,
        database_layer,
        email_layer,
        ai_layer,
        sheets_layer,
        gateway,
    )
    .await?;

    info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
