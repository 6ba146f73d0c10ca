use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use chrono::{DateTime, Utc};
use hyper::StatusCode;
use serde::Serialize;

use crate::{
    errors::{response::ApiError, LinkError},
    services::database::DatabaseLayer,
    utils::{
        auth::authenticated_user,
        expiry::{derive_status, remaining_label, LinkStatus},
    },
};

#[derive(Debug, Serialize)]
pub struct LinkOutput {
    pub id: String,
    pub form_id: String,
    pub slug: String,
    pub expires_at: DateTime<Utc>,
    pub status: LinkStatus,
    pub remaining: String,
}

#[derive(Debug, Serialize)]
pub struct RouteOutput {
    links: Vec<LinkOutput>,
}

#[axum::debug_handler]
pub async fn list_links(
    Extension(database_layer): Extension<DatabaseLayer>,
    jar: CookieJar,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<LinkError>> {
    let user = authenticated_user(&jar, &database_layer).await?;

    let now = Utc::now();

    let links = database_layer
        .query()
        .shared_link
        .list_by_owner(user.id)
        .await?
        .into_iter()
        .map(|link| LinkOutput {
            id: link.id.id.to_raw(),
            form_id: link.form.id.to_raw(),
            slug: link.slug,
            expires_at: link.expires_at.0,
            status: derive_status(link.expires_at.0, now),
            remaining: remaining_label(link.expires_at.0, now),
        })
        .collect();

    Ok((StatusCode::OK, Json(RouteOutput { links })))
}
