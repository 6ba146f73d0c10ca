use axum::{Extension, Json};
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::{
    errors::{response::ApiError, CommonError},
    services::{database::DatabaseLayer, email::EmailLayer},
};

#[derive(Debug, Deserialize, Validate)]
pub struct RoutePayload {
    #[validate(email)]
    email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    message: String,
}

// The response never reveals whether the email is registered.
#[axum::debug_handler]
pub async fn password_reset_request(
    Extension(database_layer): Extension<DatabaseLayer>,
    Extension(email_layer): Extension<EmailLayer>,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<CommonError>> {
    payload.validate()?;

    if let Some(user) = database_layer
        .query()
        .user
        .get_by_email(payload.email.clone())
        .await?
    {
        let (_request, token) = database_layer
            .query()
            .password_reset_request
            .create(user.id.clone())
            .await?;

        email_layer
            .send_password_reset(user.email.clone(), token)
            .await?;
        debug!(user_id = %user.id_string(), "password reset email sent");
    }

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            message: String::from("If the email is registered, a reset link has been sent"),
        }),
    ))
}
