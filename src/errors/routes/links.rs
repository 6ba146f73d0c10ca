use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};
use crate::utils::auth::AuthFailure;

#[derive(Debug, Display)]
pub enum LinkError {
    Common(CommonError),
    NotFound,
    NotOwner,
    LinkExpired,
}

impl ErrorResponse for LinkError {
    fn error_name(&self) -> &str {
        match self {
            LinkError::Common(e) => e.error_name(),
            LinkError::NotFound => "Link Not Found",
            LinkError::NotOwner => "Forbidden",
            LinkError::LinkExpired => "Link Expired",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            LinkError::Common(e) => e.error_message(),
            LinkError::NotFound => json!("The requested link does not exist"),
            LinkError::NotOwner => json!("The link belongs to another user"),
            LinkError::LinkExpired => {
                json!("An expired link cannot be extended; a new activation payment is required")
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            LinkError::Common(e) => e.status_code(),
            LinkError::NotFound => StatusCode::NOT_FOUND,
            LinkError::NotOwner => StatusCode::FORBIDDEN,
            LinkError::LinkExpired => StatusCode::CONFLICT,
        }
    }
}

impl From<CommonError> for LinkError {
    fn from(error: CommonError) -> Self {
        LinkError::Common(error)
    }
}

impl From<LinkError> for ApiError<LinkError> {
    fn from(error: LinkError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<validator::ValidationErrors> for ApiError<LinkError> {
    fn from(error: validator::ValidationErrors) -> Self {
        ApiError(LinkError::Common(CommonError::Validation(error)))
    }
}

impl From<surrealdb::Error> for ApiError<LinkError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(LinkError::Common(CommonError::Database(error)))
    }
}

impl From<AuthFailure> for ApiError<LinkError> {
    fn from(failure: AuthFailure) -> Self {
        ApiError(LinkError::Common(CommonError::from(failure)))
    }
}
