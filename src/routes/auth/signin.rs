use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::{
    errors::{auth::SigninError, response::ApiError},
    services::database::DatabaseLayer,
    utils::{cookies::set_session_cookie, crypto::verify_password_hash},
};

#[derive(Debug, Deserialize, Validate)]
pub struct RoutePayload {
    #[validate(email)]
    email: String,
    password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    message: String,
}

#[axum::debug_handler]
pub async fn signin(
    Extension(database_layer): Extension<DatabaseLayer>,
    jar: CookieJar,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, CookieJar, Json<RouteOutput>), ApiError<SigninError>> {
    // 1. Validate payload input
    payload.validate()?;

    // 2. Retrieve the user; an unknown email reads the same as a bad password
    let user = match database_layer
        .query()
        .user
        .get_by_email(payload.email.clone())
        .await?
    {
        Some(user) => user,
        None => return Err(ApiError(SigninError::InvalidCredentials)),
    };

    // 3. Verify password
    let password_matches =
        verify_password_hash(payload.password.clone(), user.password_hash.clone()).await?;

    if !password_matches {
        return Err(ApiError(SigninError::InvalidCredentials));
    }
    debug!(user_id = %user.id_string(), "credentials verified");

    // 4. Create a session and set the cookie
    let (_session, token) = database_layer
        .query()
        .session
        .create(user.id.clone(), true)
        .await?;

    let jar = jar.add(set_session_cookie(token, true));

    Ok((
        StatusCode::OK,
        jar,
        Json(RouteOutput {
            message: String::from("Signin completed successfully!"),
        }),
    ))
}
