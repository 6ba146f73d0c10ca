use derive_more::Display;
use hyper::StatusCode;
use serde_json::{json, Value};

use crate::errors::{response::ApiError, CommonError, ErrorResponse};
use crate::utils::auth::AuthFailure;

#[derive(Debug, Display)]
pub enum PaymentError {
    Common(CommonError),
    Gateway(String),
    NotFound,
    NotOwner,
    UnknownOrder,
    UnknownStatus(String),
    CheckoutExpired,
}

impl ErrorResponse for PaymentError {
    fn error_name(&self) -> &str {
        match self {
            PaymentError::Common(e) => e.error_name(),
            PaymentError::Gateway(_) => "Gateway Error",
            PaymentError::NotFound => "Payment Not Found",
            PaymentError::NotOwner => "Forbidden",
            PaymentError::UnknownOrder => "Unknown Order",
            PaymentError::UnknownStatus(_) => "Unknown Status",
            PaymentError::CheckoutExpired => "Checkout Expired",
        }
    }

    fn error_message(&self) -> Value {
        match self {
            PaymentError::Common(e) => e.error_message(),
            PaymentError::Gateway(message) => json!(message),
            PaymentError::NotFound => json!("The requested payment does not exist"),
            PaymentError::NotOwner => json!("The payment belongs to another user"),
            PaymentError::UnknownOrder => json!("No payment matches this order id"),
            PaymentError::UnknownStatus(status) => {
                json!(format!("Unsupported payment status: {status}"))
            }
            PaymentError::CheckoutExpired => {
                json!("The checkout window has closed; start a new payment")
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            PaymentError::Common(e) => e.status_code(),
            PaymentError::Gateway(_) => StatusCode::BAD_GATEWAY,
            PaymentError::NotFound => StatusCode::NOT_FOUND,
            PaymentError::NotOwner => StatusCode::FORBIDDEN,
            PaymentError::UnknownOrder => StatusCode::NOT_FOUND,
            PaymentError::UnknownStatus(_) => StatusCode::BAD_REQUEST,
            PaymentError::CheckoutExpired => StatusCode::GONE,
        }
    }
}

impl From<CommonError> for PaymentError {
    fn from(error: CommonError) -> Self {
        PaymentError::Common(error)
    }
}

impl From<PaymentError> for ApiError<PaymentError> {
    fn from(error: PaymentError) -> Self {
        ApiError(error)
    }
}

// Automatic Error Conversion

impl From<validator::ValidationErrors> for ApiError<PaymentError> {
    fn from(error: validator::ValidationErrors) -> Self {
        ApiError(PaymentError::Common(CommonError::Validation(error)))
    }
}

impl From<surrealdb::Error> for ApiError<PaymentError> {
    fn from(error: surrealdb::Error) -> Self {
        ApiError(PaymentError::Common(CommonError::Database(error)))
    }
}

impl From<resend_rs::Error> for ApiError<PaymentError> {
    fn from(error: resend_rs::Error) -> Self {
        ApiError(PaymentError::Common(CommonError::Email(error)))
    }
}

impl From<AuthFailure> for ApiError<PaymentError> {
    fn from(failure: AuthFailure) -> Self {
        ApiError(PaymentError::Common(CommonError::from(failure)))
    }
}
