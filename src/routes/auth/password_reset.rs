use axum::{Extension, Json};
use chrono::Utc;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    errors::{auth::PasswordResetError, response::ApiError},
    services::database::DatabaseLayer,
    utils::crypto::{hash_password, hash_token},
};

#[derive(Debug, Deserialize, Validate)]
pub struct RoutePayload {
    #[validate(length(min = 1))]
    token: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    new_password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    message: String,
}

#[axum::debug_handler]
pub async fn password_reset(
    Extension(database_layer): Extension<DatabaseLayer>,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<PasswordResetError>> {
    payload.validate()?;

    let request = database_layer
        .query()
        .password_reset_request
        .get_by_token_hash(hash_token(&payload.token))
        .await?
        .ok_or(ApiError(PasswordResetError::InvalidToken))?;

    if request.is_expired(Utc::now()) {
        return Err(ApiError(PasswordResetError::TokenExpired));
    }

    let password_hash = hash_password(payload.new_password.clone()).await?;

    database_layer
        .query()
        .user
        .update_password(request.user_id.clone(), password_hash)
        .await?;

    database_layer
        .query()
        .password_reset_request
        .remove(request.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            message: String::from("Password updated successfully"),
        }),
    ))
}
