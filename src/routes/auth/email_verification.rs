use axum::{Extension, Json};
use chrono::Utc;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::{
    errors::{auth::EmailVerificationError, response::ApiError},
    services::database::DatabaseLayer,
    utils::validation::{
        validate_email_verification_code_format, validate_email_verification_code_length,
    },
};

#[derive(Debug, Deserialize, Validate)]
pub struct RoutePayload {
    #[validate(custom(function = "validate_email_verification_code_length"))]
    #[validate(custom(function = "validate_email_verification_code_format"))]
    code: String,
    email_verification_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    message: String,
}

#[axum::debug_handler]
pub async fn email_verification(
    Extension(database_layer): Extension<DatabaseLayer>,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<EmailVerificationError>> {
    // 1. Validate payload input
    payload.validate()?;

    // 2. Look up the pending verification
    let verification = database_layer
        .query()
        .email_verification
        .get(payload.email_verification_id.clone())
        .await?
        .ok_or(ApiError(EmailVerificationError::VerificationNotFound))?;

    if verification.is_expired(Utc::now()) {
        return Err(ApiError(EmailVerificationError::ExpiredCode));
    }

    if verification.code != payload.code {
        return Err(ApiError(EmailVerificationError::InvalidCode));
    }

    // 3. Flip the user's verified flag
    database_layer
        .query()
        .user
        .verify_email(verification.user_id.clone())
        .await?;
    debug!(user_id = %verification.user_id.id.to_raw(), "email verified");

    // 4. Remove the used verification
    database_layer
        .query()
        .email_verification
        .remove(verification.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            message: String::from("Email verified successfully"),
        }),
    ))
}
