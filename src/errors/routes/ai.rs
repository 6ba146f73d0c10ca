use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};
use crate::utils::auth::AuthFailure;

#[derive(Debug, Display)]
pub enum AiError {
    Common(CommonError),
    Provider(String),
    MalformedResponse,
}

impl ErrorResponse for AiError {
    fn error_name(&self) -> &str {
        match self {
            AiError::Common(e) => e.error_name(),
            AiError::Provider(_) => "AI Provider Error",
            AiError::MalformedResponse => "Malformed AI Response",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            AiError::Common(e) => e.error_message(),
            AiError::Provider(message) => json!(message),
            AiError::MalformedResponse => {
                json!("The AI provider did not return valid form JSON")
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AiError::Common(e) => e.status_code(),
            AiError::Provider(_) => StatusCode::BAD_GATEWAY,
            AiError::MalformedResponse => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<CommonError> for AiError {
    fn from(error: CommonError) -> Self {
        AiError::Common(error)
    }
}

impl From<AiError> for ApiError<AiError> {
    fn from(error: AiError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<validator::ValidationErrors> for ApiError<AiError> {
    fn from(error: validator::ValidationErrors) -> Self {
        ApiError(AiError::Common(CommonError::Validation(error)))
    }
}

impl From<surrealdb::Error> for ApiError<AiError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(AiError::Common(CommonError::Database(error)))
    }
}

impl From<AuthFailure> for ApiError<AiError> {
    fn from(failure: AuthFailure) -> Self {
        ApiError(AiError::Common(CommonError::from(failure)))
    }
}
