use axum::{extract::Path, Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use chrono::{DateTime, Utc};
use hyper::StatusCode;
use serde::Serialize;
use surrealdb::sql::Thing;

use crate::{
    errors::{response::ApiError, LinkError},
    services::database::DatabaseLayer,
    utils::{
        auth::authenticated_user,
        expiry::{derive_status, remaining_label, LinkStatus},
    },
};

#[derive(Debug, Serialize)]
pub struct RouteOutput {
    link_id: String,
    form_id: String,
    submission_count: u64,
    last_submitted_at: Option<DateTime<Utc>>,
    status: LinkStatus,
    remaining: String,
}

#[axum::debug_handler]
pub async fn link_analytics(
    Extension(database_layer): Extension<DatabaseLayer>,
    jar: CookieJar,
    Path(link_id): Path<String>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<LinkError>> {
    let user = authenticated_user(&jar, &database_layer).await?;

    let link_id = Thing::from(("shared_link".to_string(), link_id));

    let link = database_layer
        .query()
        .shared_link
        .get(link_id)
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

    let submission_count = database_layer
        .query()
        .submission
        .count_by_form(link.form.clone())
        .await?;

    let last_submitted_at = database_layer
        .query()
        .submission
        .last_submitted_at(link.form.clone())
        .await?
        .map(|datetime| datetime.0);

    let now = Utc::now();

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            link_id: link.id_string(),
            form_id: link.form.id.to_raw(),
            submission_count,
            last_submitted_at,
            status: derive_status(link.expires_at.0, now),
            remaining: remaining_label(link.expires_at.0, now),
        }),
    ))
}
