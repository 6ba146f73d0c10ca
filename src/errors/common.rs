use derive_more::Display;

use crate::utils::auth::AuthFailure;

#[derive(Debug, Display)]
pub enum CommonError {
    Validation(validator::ValidationErrors),
    Database(surrealdb::Error),
    Email(resend_rs::Error),
    Hashing(argon2::password_hash::Error),
    Auth(AuthFailure),
}

impl From<surrealdb::Error> for CommonError {
    fn from(error: surrealdb::Error) -> Self {
        CommonError::Database(error)
    }
}

impl From<AuthFailure> for CommonError {
    fn from(failure: AuthFailure) -> Self {
        match failure {
            AuthFailure::Database(e) => CommonError::Database(e),
            other => CommonError::Auth(other),
        }
    }
}
