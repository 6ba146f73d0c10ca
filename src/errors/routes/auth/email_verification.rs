use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};

#[derive(Debug, Display)]
pub enum EmailVerificationError {
    Common(CommonError),
    VerificationNotFound,
    InvalidCode,
    ExpiredCode,
}

impl ErrorResponse for EmailVerificationError {
    fn error_name(&self) -> &str {
        match self {
            EmailVerificationError::Common(e) => e.error_name(),
            EmailVerificationError::VerificationNotFound => "Verification Not Found",
            EmailVerificationError::InvalidCode => "Invalid Code",
            EmailVerificationError::ExpiredCode => "Expired Code",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            EmailVerificationError::Common(e) => e.error_message(),
            EmailVerificationError::VerificationNotFound => {
                json!("No pending verification matches this request")
            }
            EmailVerificationError::InvalidCode => json!("The verification code is invalid"),
            EmailVerificationError::ExpiredCode => json!("The verification code has expired"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            EmailVerificationError::Common(e) => e.status_code(),
            EmailVerificationError::VerificationNotFound => StatusCode::NOT_FOUND,
            EmailVerificationError::InvalidCode => StatusCode::BAD_REQUEST,
            EmailVerificationError::ExpiredCode => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<CommonError> for EmailVerificationError {
    fn from(error: CommonError) -> Self {
        EmailVerificationError::Common(error)
    }
}

impl From<EmailVerificationError> for ApiError<EmailVerificationError> {
    fn from(error: EmailVerificationError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<validator::ValidationErrors> for ApiError<EmailVerificationError> {
    fn from(error: validator::ValidationErrors) -> Self {
        ApiError(EmailVerificationError::Common(CommonError::Validation(
            error,
        )))
    }
}

impl From<surrealdb::Error> for ApiError<EmailVerificationError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(EmailVerificationError::Common(CommonError::Database(error)))
    }
}
