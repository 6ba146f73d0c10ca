use super::Config;
use crate::services::email::EmailLayer;

pub fn setup_email_service(config: &Config) -> EmailLayer {
    EmailLayer::new(config.resend_api_key.clone(), config.email_domain.clone())
}
