use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::{
    errors::{auth::SignupError, response::ApiError},
    services::{database::DatabaseLayer, email::EmailLayer},
    utils::{
        cookies::set_session_cookie,
        crypto::hash_password,
        random::generate_random_code,
    },
};

#[derive(Debug, Deserialize, Validate)]
pub struct RoutePayload {
    #[validate(email)]
    email: String,
    #[serde(default)]
    name: String,
    password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    message: String,
    user_id: String,
    email_verification_id: String,
}

#[axum::debug_handler]
pub async fn signup(
    Extension(database_layer): Extension<DatabaseLayer>,
    Extension(email_layer): Extension<EmailLayer>,
    jar: CookieJar,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, CookieJar, Json<RouteOutput>), ApiError<SignupError>> {
    // 1. Validate payload input
    payload.validate()?;

    if payload.password.len() < 8 {
        return Err(ApiError(SignupError::WeakPassword));
    }

    // 2. Check email availability
    let email_taken = database_layer
        .query()
        .user
        .check_if_exists(payload.email.clone())
        .await?;

    if email_taken {
        return Err(ApiError(SignupError::EmailAlreadyExists));
    }

    // 3. Create the user with a hashed password
    let password_hash = hash_password(payload.password.clone()).await?;

    let user = database_layer
        .query()
        .user
        .create(payload.email.clone(), payload.name.clone(), password_hash)
        .await?;
    debug!(user_id = %user.id_string(), "user created");

    // 4. Create an email verification and send the code
    let code = generate_random_code(6);

    let verification = database_layer
        .query()
        .email_verification
        .create(code.clone(), user.email.clone(), user.id.clone())
        .await?;

    email_layer
        .send_email_verification(user.email.clone(), code)
        .await?;

    // 5. Start an unauthorized session until the email is verified
    let (_session, token) = database_layer
        .query()
        .session
        .create(user.id.clone(), false)
        .await?;

    let jar = jar.add(set_session_cookie(token, false));

    Ok((
        StatusCode::CREATED,
        jar,
        Json(RouteOutput {
            message: String::from("Signup completed successfully!"),
            user_id: user.id_string(),
            email_verification_id: verification.id.id.to_raw(),
        }),
    ))
}
