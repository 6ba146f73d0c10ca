use axum::{extract::Path, Extension, Json};
use chrono::Utc;
use hyper::StatusCode;
use serde::Serialize;

use crate::{
    errors::{response::ApiError, PaymentError},
    services::{
        database::{payment::PaymentStatus, DatabaseLayer},
        payments::PaymentGatewayLayer,
    },
    utils::validation::is_valid_slug,
};

#[derive(Debug, Serialize)]
pub struct RouteOutput {
    order_id: String,
    amount: i64,
    currency: String,
    key_id: String,
    status: PaymentStatus,
}

/// Public lookup for the checkout page: the pay slug resolves to the order
/// the gateway widget needs. Stale links (24h) are refused.
#[axum::debug_handler]
pub async fn checkout_details(
    Extension(database_layer): Extension<DatabaseLayer>,
    Extension(gateway): Extension<PaymentGatewayLayer>,
    Path(slug): Path<String>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<PaymentError>> {
    if !is_valid_slug(&slug) {
        return Err(ApiError(PaymentError::NotFound));
    }

    let link = database_layer
        .query()
        .payment_link
        .get_by_slug(slug)
        .await?
        .ok_or(ApiError(PaymentError::NotFound))?;

    if link.expires_at.0 <= Utc::now() {
        return Err(ApiError(PaymentError::CheckoutExpired));
    }

    let payment = database_layer
        .query()
        .payment
        .get(link.payment)
        .await?
        .ok_or(ApiError(PaymentError::NotFound))?;

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            order_id: payment.order_id,
            amount: payment.amount,
            currency: payment.currency,
            key_id: gateway.key_id.clone(),
            status: payment.status,
        }),
    ))
}
