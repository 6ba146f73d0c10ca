use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{response::ApiError, CommonError},
    services::database::DatabaseLayer,
    utils::{
        cookies::{clear_session_cookie, SESSION_COOKIE},
        crypto::hash_token,
    },
};

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    message: String,
}

#[axum::debug_handler]
pub async fn signout(
    Extension(database_layer): Extension<DatabaseLayer>,
    jar: CookieJar,
) -> Result<(StatusCode, CookieJar, Json<RouteOutput>), ApiError<CommonError>> {
    // Deleting an already-gone session is fine; signout stays idempotent.
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let token_hash = hash_token(cookie.value());

        database_layer
            .query()
            .session
            .delete_by_token_hash(token_hash)
            .await?;
    }

    let jar = jar.add(clear_session_cookie());

    Ok((
        StatusCode::OK,
        jar,
        Json(RouteOutput {
            message: String::from("Signed out successfully!"),
        }),
    ))
}
