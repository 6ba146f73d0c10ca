use std::str::FromStr;

use axum::{Extension, Json};
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    errors::{response::ApiError, PaymentError},
    services::{
        database::{payment::PaymentStatus, DatabaseLayer},
        email::EmailLayer,
        payments::PaymentGatewayLayer,
    },
};

#[derive(Debug, Deserialize)]
pub struct RoutePayload {
    order_id: String,
    status: String,
    #[serde(default)]
    method: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    success: bool,
}

/// Gateway callback. Unauthenticated by contract: the gateway does not hold a
/// session, and callbacks are matched on order id alone.
#[axum::debug_handler]
pub async fn payment_webhook(
    Extension(database_layer): Extension<DatabaseLayer>,
    Extension(email_layer): Extension<EmailLayer>,
    Extension(gateway): Extension<PaymentGatewayLayer>,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<PaymentError>> {
    // 1. Reject statuses the gateway never sends
    let status = PaymentStatus::from_str(&payload.status)
        .map_err(|_| ApiError(PaymentError::UnknownStatus(payload.status.clone())))?;

    // 2. Record the transition
    let payment = database_layer
        .query()
        .payment
        .update_status(payload.order_id.clone(), status, payload.method)
        .await?
        .ok_or(ApiError(PaymentError::UnknownOrder))?;
    info!(order_id = %payload.order_id, status = %status, "payment status updated");

    // 3. A paid order activates (or re-activates) the form's share link
    if status == PaymentStatus::Paid {
        let link = database_layer
            .query()
            .shared_link
            .activate(
                payment.form.clone(),
                payment.id.clone(),
                gateway.activation_days,
            )
            .await?;

        // Receipt email is best effort. Repeated callbacks for the same order
        // will send it again.
        if let Some(email) = payment.customer_email() {
            if let Err(error) = email_layer
                .send_payment_receipt(
                    email,
                    payment.order_id.clone(),
                    payment.amount,
                    payment.currency.clone(),
                    link.slug.clone(),
                )
                .await
            {
                warn!(order_id = %payment.order_id, %error, "receipt email failed");
            }
        }
    }

    Ok((StatusCode::OK, Json(RouteOutput { success: true })))
}
