use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};

#[derive(Debug, Display)]
pub enum SubmissionError {
    Common(CommonError),
    UnknownLink,
    LinkExpired,
}

impl ErrorResponse for SubmissionError {
    fn error_name(&self) -> &str {
        match self {
            SubmissionError::Common(e) => e.error_name(),
            SubmissionError::UnknownLink => "Unknown Link",
            SubmissionError::LinkExpired => "Link Expired",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            SubmissionError::Common(e) => e.error_message(),
            SubmissionError::UnknownLink => json!("No shared form matches this link"),
            SubmissionError::LinkExpired => {
                json!("This form's share window has closed")
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            SubmissionError::Common(e) => e.status_code(),
            SubmissionError::UnknownLink => StatusCode::NOT_FOUND,
            SubmissionError::LinkExpired => StatusCode::GONE,
        }
    }
}

impl From<CommonError> for SubmissionError {
    fn from(error: CommonError) -> Self {
        SubmissionError::Common(error)
    }
}

impl From<SubmissionError> for ApiError<SubmissionError> {
    fn from(error: SubmissionError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<validator::ValidationErrors> for ApiError<SubmissionError> {
    fn from(error: validator::ValidationErrors) -> Self {
        ApiError(SubmissionError::Common(CommonError::Validation(error)))
    }
}

impl From<surrealdb::Error> for ApiError<SubmissionError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(SubmissionError::Common(CommonError::Database(error)))
    }
}
