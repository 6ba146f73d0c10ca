use axum::{extract::Path, Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use chrono::{DateTime, Utc};
use hyper::StatusCode;
use serde::Serialize;
use serde_json::Value;
use surrealdb::sql::Thing;

use crate::{
    errors::{response::ApiError, FormError},
    services::database::DatabaseLayer,
    utils::auth::authenticated_user,
};

#[derive(Debug, Serialize)]
pub struct SubmissionOutput {
    id: String,
    response: Value,
    analytics: Value,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct RouteOutput {
    submissions: Vec<SubmissionOutput>,
}

#[axum::debug_handler]
pub async fn list_form_submissions(
    Extension(database_layer): Extension<DatabaseLayer>,
    jar: CookieJar,
    Path(form_id): Path<String>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<FormError>> {
    let user = authenticated_user(&jar, &database_layer).await?;

    let form_id = Thing::from(("form".to_string(), form_id));

    let form = database_layer
        .query()
        .form
        .get(form_id.clone())
        .await?
        .ok_or(ApiError(FormError::NotFound))?;

    if !form.is_owned_by(&user.id) {
        return Err(ApiError(FormError::NotOwner));
    }

    let submissions = database_layer
        .query()
        .submission
        .list_by_form(form_id)
        .await?
        .into_iter()
        .map(|submission| SubmissionOutput {
            id: submission.id.id.to_raw(),
            response: submission.response,
            analytics: submission.analytics,
            created_at: submission.created_at.0,
        })
        .collect();

    Ok((StatusCode::OK, Json(RouteOutput { submissions })))
}
