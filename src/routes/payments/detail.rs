use axum::{extract::Path, Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use hyper::StatusCode;
use surrealdb::sql::Thing;

use super::PaymentOutput;
use crate::{
    errors::{response::ApiError, PaymentError},
    services::database::DatabaseLayer,
    utils::auth::authenticated_user,
};

#[axum::debug_handler]
pub async fn payment_detail(
    Extension(database_layer): Extension<DatabaseLayer>,
    jar: CookieJar,
    Path(payment_id): Path<String>,
) -> Result<(StatusCode, Json<PaymentOutput>), ApiError<PaymentError>> {
    let user = authenticated_user(&jar, &database_layer).await?;

    let payment_id = Thing::from(("payment".to_string(), payment_id));

    let payment = database_layer
        .query()
        .payment
        .get(payment_id)
        .await?
        .ok_or(ApiError(PaymentError::NotFound))?;

    if payment.owner != user.id {
        return Err(ApiError(PaymentError::NotOwner));
    }

    Ok((StatusCode::OK, Json(PaymentOutput::from(payment))))
}
