use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;
use surrealdb::sql::Thing;
use tracing::debug;

use crate::{
    errors::{response::ApiError, PaymentError},
    services::{database::DatabaseLayer, payments::PaymentGatewayLayer},
    utils::{auth::authenticated_user, crypto::generate_uuid},
};

#[derive(Debug, Deserialize)]
pub struct RoutePayload {
    form_id: String,
}

#[derive(Debug, Serialize)]
pub struct RouteOutput {
    payment_id: String,
    order_id: String,
    amount: i64,
    currency: String,
    key_id: String,
    pay_slug: String,
}

/// Creates a gateway order for the share-link activation fee. The client
/// completes checkout against the gateway; the webhook settles the rest.
#[axum::debug_handler]
pub async fn create_payment(
    Extension(database_layer): Extension<DatabaseLayer>,
    Extension(gateway): Extension<PaymentGatewayLayer>,
    jar: CookieJar,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<PaymentError>> {
    let user = authenticated_user(&jar, &database_layer).await?;

    // 1. The fee activates a share link for one owned form
    let form_id = Thing::from(("form".to_string(), payload.form_id));

    let form = database_layer
        .query()
        .form
        .get(form_id.clone())
        .await?
        .ok_or(ApiError(PaymentError::NotFound))?;

    if !form.is_owned_by(&user.id) {
        return Err(ApiError(PaymentError::NotOwner));
    }

    // 2. Create the order at the gateway
    let receipt = generate_uuid();

    let order = gateway
        .create_order(receipt)
        .await
        .map_err(PaymentError::Gateway)?;
    debug!(order_id = %order.id, "gateway order created");

    // 3. Record the pending payment and its checkout slug
    let customer = json!({
        "email": user.email,
        "name": user.name,
    });

    let payment = database_layer
        .query()
        .payment
        .create(
            user.id,
            form_id,
            order.id.clone(),
            order.amount,
            order.currency.clone(),
            customer,
        )
        .await?;

    let payment_link = database_layer
        .query()
        .payment_link
        .create(payment.id.clone())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RouteOutput {
            payment_id: payment.id_string(),
            order_id: order.id,
            amount: order.amount,
            currency: order.currency,
            key_id: gateway.key_id.clone(),
            pay_slug: payment_link.slug,
        }),
    ))
}
