use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};
use crate::utils::auth::AuthFailure;

#[derive(Debug, Display)]
pub enum SheetsError {
    Common(CommonError),
    NotConnected,
    Google(String),
    MissingCode,
}

impl ErrorResponse for SheetsError {
    fn error_name(&self) -> &str {
        match self {
            SheetsError::Common(e) => e.error_name(),
            SheetsError::NotConnected => "Spreadsheet Not Connected",
            SheetsError::Google(_) => "Spreadsheet API Error",
            SheetsError::MissingCode => "Missing Authorization Code",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            SheetsError::Common(e) => e.error_message(),
            SheetsError::NotConnected => {
                json!("Connect a Google account or configure a service credential first")
            }
            SheetsError::Google(message) => json!(message),
            SheetsError::MissingCode => {
                json!("The OAuth callback did not include an authorization code")
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            SheetsError::Common(e) => e.status_code(),
            SheetsError::NotConnected => StatusCode::PRECONDITION_FAILED,
            SheetsError::Google(_) => StatusCode::BAD_GATEWAY,
            SheetsError::MissingCode => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<CommonError> for SheetsError {
    fn from(error: CommonError) -> Self {
        SheetsError::Common(error)
    }
}

impl From<SheetsError> for ApiError<SheetsError> {
    fn from(error: SheetsError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<validator::ValidationErrors> for ApiError<SheetsError> {
    fn from(error: validator::ValidationErrors) -> Self {
        ApiError(SheetsError::Common(CommonError::Validation(error)))
    }
}

impl From<surrealdb::Error> for ApiError<SheetsError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(SheetsError::Common(CommonError::Database(error)))
    }
}

impl From<AuthFailure> for ApiError<SheetsError> {
    fn from(failure: AuthFailure) -> Self {
        ApiError(SheetsError::Common(CommonError::from(failure)))
    }
}
