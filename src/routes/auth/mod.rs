pub mod email_verification;
pub mod me;
pub mod password_reset;
pub mod password_reset_request;
pub mod signin;
pub mod signout;
pub mod signup;

use axum::{
    routing::{get, post},
    Router,
};
pub use email_verification::email_verification;
pub use me::me;
pub use password_reset::password_reset;
pub use password_reset_request::password_reset_request;
pub use signin::signin;
pub use signout::signout;
pub use signup::signup;

use crate::setup::AppState;

pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        .route("/signout", post(signout))
        .route("/me", get(me))
        .route("/email-verification", post(email_verification))
        .route("/password-reset-request", post(password_reset_request))
        .route("/password-reset", post(password_reset))
}
