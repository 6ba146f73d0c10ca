use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use cookie::time::OffsetDateTime;

pub const SESSION_COOKIE: &str = "session_id";

pub fn set_session_cookie(session_token: String, authorized: bool) -> Cookie<'static> {
    let now = Utc::now();

    let expiration_time = if authorized {
        now + Duration::days(30)
    } else {
        now + Duration::hours(12)
    };

    let expiration_time = OffsetDateTime::from_unix_timestamp(expiration_time.timestamp())
        .unwrap_or(OffsetDateTime::UNIX_EPOCH);

    Cookie::build((SESSION_COOKIE, session_token))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(true)
        .http_only(true)
        .expires(expiration_time)
        .build()
}

pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(true)
        .http_only(true)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
}
