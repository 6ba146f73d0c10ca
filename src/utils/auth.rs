use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use derive_more::Display;

use crate::services::database::{user::User, DatabaseLayer};
use crate::utils::cookies::SESSION_COOKIE;
use crate::utils::crypto::hash_token;

#[derive(Debug, Display)]
pub enum AuthFailure {
    MissingSession,
    SessionNotFound,
    SessionExpired,
    Database(surrealdb::Error),
}

/// Resolves the session cookie to its user. Every authenticated handler
/// starts here.
pub async fn authenticated_user(
    jar: &CookieJar,
    database_layer: &DatabaseLayer,
) -> Result<User, AuthFailure> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or(AuthFailure::MissingSession)?;

    let session = database_layer
        .query()
        .session
        .get_by_token_hash(hash_token(&token))
        .await
        .map_err(AuthFailure::Database)?
        .ok_or(AuthFailure::SessionNotFound)?;

    if session.is_expired(Utc::now()) {
        return Err(AuthFailure::SessionExpired);
    }

    let user = database_layer
        .query()
        .user
        .get(session.user_id)
        .await
        .map_err(AuthFailure::Database)?
        .ok_or(AuthFailure::SessionNotFound)?;

    Ok(user)
}
