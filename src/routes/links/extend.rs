use axum::{extract::Path, Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use chrono::{DateTime, Utc};
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;
use validator::ValidationErrors;

use crate::{
    errors::{response::ApiError, LinkError},
    services::database::DatabaseLayer,
    utils::{
        auth::authenticated_user,
        expiry::{can_extend, remaining_label},
        validation::validate_extension_days,
    },
};

#[derive(Debug, Deserialize)]
pub struct RoutePayload {
    days: i64,
}

#[derive(Debug, Serialize)]
pub struct RouteOutput {
    id: String,
    expires_at: DateTime<Utc>,
    remaining: String,
}

/// Pushes an active link's expiry further out. Expired links are not
/// extendable; they need a fresh activation payment.
#[axum::debug_handler]
pub async fn extend_link(
    Extension(database_layer): Extension<DatabaseLayer>,
    jar: CookieJar,
    Path(link_id): Path<String>,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<LinkError>> {
    let user = authenticated_user(&jar, &database_layer).await?;

    // 1. Bound the requested extension
    if let Err(error) = validate_extension_days(payload.days) {
        let mut errors = ValidationErrors::new();
        errors.add("days", error);
        return Err(ApiError::from(errors));
    }

    // 2. The link must exist and hang off a form the caller owns
    let link_id = Thing::from(("shared_link".to_string(), link_id));

    let link = database_layer
        .query()
        .shared_link
        .get(link_id.clone())
        .await?
        .ok_or(ApiError(LinkError::NotFound))?;

    let form = database_layer
        .query()
        .form
        .get(link.form.clone())
        .await?
        .ok_or(ApiError(LinkError::NotFound))?;

    if !form.is_owned_by(&user.id) {
        return Err(ApiError(LinkError::NotOwner));
    }

    // 3. Only links that have not lapsed can be extended
    let now = Utc::now();

    if !can_extend(link.expires_at.0, now) {
        return Err(ApiError(LinkError::LinkExpired));
    }

    let extended = database_layer
        .query()
        .shared_link
        .extend(link_id, payload.days)
        .await?
        .ok_or(ApiError(LinkError::NotFound))?;

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            id: extended.id_string(),
            expires_at: extended.expires_at.0,
            remaining: remaining_label(extended.expires_at.0, now),
        }),
    ))
}
