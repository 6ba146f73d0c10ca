use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};

#[derive(Debug, Display)]
pub enum PasswordResetError {
    Common(CommonError),
    InvalidToken,
    TokenExpired,
}

impl ErrorResponse for PasswordResetError {
    fn error_name(&self) -> &str {
        match self {
            PasswordResetError::Common(e) => e.error_name(),
            PasswordResetError::InvalidToken => "Invalid Token",
            PasswordResetError::TokenExpired => "Token Expired",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            PasswordResetError::Common(e) => e.error_message(),
            PasswordResetError::InvalidToken => json!("The reset token is invalid"),
            PasswordResetError::TokenExpired => json!("The reset token has expired"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            PasswordResetError::Common(e) => e.status_code(),
            PasswordResetError::InvalidToken => StatusCode::BAD_REQUEST,
            PasswordResetError::TokenExpired => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<CommonError> for PasswordResetError {
    fn from(error: CommonError) -> Self {
        PasswordResetError::Common(error)
    }
}

impl From<PasswordResetError> for ApiError<PasswordResetError> {
    fn from(error: PasswordResetError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<validator::ValidationErrors> for ApiError<PasswordResetError> {
    fn from(error: validator::ValidationErrors) -> Self {
        ApiError(PasswordResetError::Common(CommonError::Validation(error)))
    }
}

impl From<surrealdb::Error> for ApiError<PasswordResetError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(PasswordResetError::Common(CommonError::Database(error)))
    }
}

impl From<argon2::password_hash::Error> for ApiError<PasswordResetError> {
    fn from(error: argon2::password_hash::Error) -> Self {
        ApiError(PasswordResetError::Common(CommonError::Hashing(error)))
    }
}
