use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};
use crate::utils::auth::AuthFailure;

#[derive(Debug, Display)]
pub enum FormError {
    Common(CommonError),
    NotFound,
    NotOwner,
}

impl ErrorResponse for FormError {
    fn error_name(&self) -> &str {
        match self {
            FormError::Common(e) => e.error_name(),
            FormError::NotFound => "Form Not Found",
            FormError::NotOwner => "Forbidden",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            FormError::Common(e) => e.error_message(),
            FormError::NotFound => json!("The requested form does not exist"),
            FormError::NotOwner => json!("The form belongs to another user"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            FormError::Common(e) => e.status_code(),
            FormError::NotFound => StatusCode::NOT_FOUND,
            FormError::NotOwner => StatusCode::FORBIDDEN,
        }
    }
}

impl From<CommonError> for FormError {
    fn from(error: CommonError) -> Self {
        FormError::Common(error)
    }
}

impl From<FormError> for ApiError<FormError> {
    fn from(error: FormError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<validator::ValidationErrors> for ApiError<FormError> {
    fn from(error: validator::ValidationErrors) -> Self {
        ApiError(FormError::Common(CommonError::Validation(error)))
    }
}

impl From<surrealdb::Error> for ApiError<FormError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(FormError::Common(CommonError::Database(error)))
    }
}

impl From<AuthFailure> for ApiError<FormError> {
    fn from(failure: AuthFailure) -> Self {
        ApiError(FormError::Common(CommonError::from(failure)))
    }
}
