pub mod checkout;
pub mod create;
pub mod detail;
pub mod history;
pub mod webhook;

use axum::{
    routing::{get, post},
    Router,
};
pub use checkout::checkout_details;
use chrono::{DateTime, Utc};
pub use create::create_payment;
pub use detail::payment_detail;
pub use history::payment_history;
use serde::Serialize;
use serde_json::Value;
pub use webhook::payment_webhook;

use crate::services::database::payment::{Payment, PaymentStatus};
use crate::setup::AppState;

pub fn payments_router() -> Router<AppState> {
    Router::new()
        .route("/", get(payment_history).post(create_payment))
        .route("/webhook", post(payment_webhook))
        .route("/checkout/:slug", get(checkout_details))
        .route("/:id", get(payment_detail))
}

#[derive(Debug, Serialize)]
pub struct PaymentOutput {
    pub id: String,
    pub order_id: String,
    pub amount: i64,
    pub currency: String,
    pub status: PaymentStatus,
    pub customer: Value,
    pub method: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Payment> for PaymentOutput {
    fn from(payment: Payment) -> Self {
        PaymentOutput {
            id: payment.id.id.to_raw(),
            order_id: payment.order_id,
            amount: payment.amount,
            currency: payment.currency,
            status: payment.status,
            customer: payment.customer,
            method: payment.method,
            created_at: payment.created_at.0,
            updated_at: payment.updated_at.0,
        }
    }
}
