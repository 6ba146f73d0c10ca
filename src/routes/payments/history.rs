use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use hyper::StatusCode;
use serde::Serialize;

use super::PaymentOutput;
use crate::{
    errors::{response::ApiError, PaymentError},
    services::database::DatabaseLayer,
    utils::auth::authenticated_user,
};

#[derive(Debug, Serialize)]
pub struct RouteOutput {
    payments: Vec<PaymentOutput>,
}

#[axum::debug_handler]
pub async fn payment_history(
    Extension(database_layer): Extension<DatabaseLayer>,
    jar: CookieJar,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<PaymentError>> {
    let user = authenticated_user(&jar, &database_layer).await?;

    let payments = database_layer
        .query()
        .payment
        .list_by_owner(user.id)
        .await?
        .into_iter()
        .map(PaymentOutput::from)
        .collect();

    Ok((StatusCode::OK, Json(RouteOutput { payments })))
}
