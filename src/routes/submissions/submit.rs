use axum::{extract::Path, Extension, Json};
use chrono::Utc;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::{
    errors::{response::ApiError, SubmissionError},
    services::database::DatabaseLayer,
    utils::validation::is_valid_slug,
};

#[derive(Debug, Deserialize)]
pub struct RoutePayload {
    response: Value,
    #[serde(default)]
    analytics: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    message: String,
    submission_id: String,
}

/// Public endpoint: anyone holding an active share link can submit.
#[axum::debug_handler]
pub async fn submit(
    Extension(database_layer): Extension<DatabaseLayer>,
    Path(slug): Path<String>,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<SubmissionError>> {
    if !is_valid_slug(&slug) {
        return Err(ApiError(SubmissionError::UnknownLink));
    }

    let link = database_layer
        .query()
        .shared_link
        .get_by_slug(slug)
        .await?
        .ok_or(ApiError(SubmissionError::UnknownLink))?;

    // The paid activation window gates submissions.
    if link.is_expired(Utc::now()) {
        return Err(ApiError(SubmissionError::LinkExpired));
    }

    let analytics = payload.analytics.unwrap_or_else(|| json!({}));

    let submission = database_layer
        .query()
        .submission
        .create(link.form, payload.response, analytics)
        .await?;
    debug!(submission_id = %submission.id.id.to_raw(), "submission stored");

    Ok((
        StatusCode::CREATED,
        Json(RouteOutput {
            message: String::from("Submission recorded successfully"),
            submission_id: submission.id.id.to_raw(),
        }),
    ))
}
