use std::env;

/// Runtime configuration, read once at startup. Secrets come from the
/// environment (usually a .env file in development); everything else has a
/// workable default.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_user: String,
    pub database_pass: String,
    pub database_namespace: String,
    pub database_name: String,

    pub resend_api_key: String,
    pub email_domain: String,

    pub ai_api_key: String,
    pub ai_base_url: String,
    pub ai_model: String,

    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_redirect_url: String,
    pub google_service_token: Option<String>,

    pub gateway_key_id: String,
    pub gateway_key_secret: String,
    pub gateway_base_url: String,
    pub share_link_fee: i64,
    pub share_currency: String,
    pub activation_days: i64,

    pub bind_addr: String,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| String::from(default))
}

fn var_or_empty(key: &str) -> String {
    var_or(key, "")
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            database_url: var_or("DATABASE_URL", "ws://127.0.0.1:8000"),
            database_user: var_or("DATABASE_USER", "root"),
            database_pass: var_or("DATABASE_PASS", "root"),
            database_namespace: var_or("DATABASE_NS", "formbay"),
            database_name: var_or("DATABASE_DB", "main"),

            resend_api_key: var_or_empty("RESEND_API_KEY"),
            email_domain: var_or("EMAIL_DOMAIN", "formbay.app"),

            ai_api_key: var_or_empty("AI_API_KEY"),
            ai_base_url: var_or("AI_BASE_URL", "https://api.openai.com/v1"),
            ai_model: var_or("AI_MODEL", "gpt-4o-mini"),

            google_client_id: var_or_empty("GOOGLE_CLIENT_ID"),
            google_client_secret: var_or_empty("GOOGLE_CLIENT_SECRET"),
            google_redirect_url: var_or_empty("GOOGLE_REDIRECT_URL"),
            google_service_token: env::var("GOOGLE_SERVICE_TOKEN").ok(),

            gateway_key_id: var_or_empty("GATEWAY_KEY_ID"),
            gateway_key_secret: var_or_empty("GATEWAY_KEY_SECRET"),
            gateway_base_url: var_or("GATEWAY_BASE_URL", "https://api.razorpay.com/v1"),
            share_link_fee: var_or("SHARE_LINK_FEE", "9900")
                .parse()
                .unwrap_or(9900),
            share_currency: var_or("SHARE_CURRENCY", "INR"),
            activation_days: var_or("ACTIVATION_DAYS", "30").parse().unwrap_or(30),

            bind_addr: var_or("BIND_ADDR", "0.0.0.0:8080"),
        }
    }
}
