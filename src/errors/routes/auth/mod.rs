mod email_verification;
mod password_reset;
mod signin;
mod signup;

pub use email_verification::EmailVerificationError;
pub use password_reset::PasswordResetError;
pub use signin::SigninError;
pub use signup::SignupError;
