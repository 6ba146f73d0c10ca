use super::Config;
use crate::services::{ai::AiLayer, payments::PaymentGatewayLayer, sheets::SheetsLayer};

pub fn setup_ai_layer(config: &Config) -> AiLayer {
    AiLayer::new(
        config.ai_api_key.clone(),
        config.ai_base_url.clone(),
        config.ai_model.clone(),
    )
}

pub fn setup_sheets_layer(config: &Config) -> SheetsLayer {
    SheetsLayer::new(
        config.google_client_id.clone(),
        config.google_client_secret.clone(),
        config.google_redirect_url.clone(),
        config.google_service_token.clone(),
    )
}

pub fn setup_payment_gateway(config: &Config) -> PaymentGatewayLayer {
    PaymentGatewayLayer::new(
        config.gateway_key_id.clone(),
        config.gateway_key_secret.clone(),
        config.gateway_base_url.clone(),
        config.share_link_fee,
        config.share_currency.clone(),
        config.activation_days,
    )
}
