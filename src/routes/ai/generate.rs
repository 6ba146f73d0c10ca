use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::{
    errors::{response::ApiError, AiError},
    services::{ai::AiLayer, database::DatabaseLayer},
    utils::auth::authenticated_user,
};

#[derive(Debug, Deserialize)]
pub struct RoutePayload {
    description: String,
}

#[derive(Debug, Serialize)]
pub struct RouteOutput {
    components: Value,
}

/// Turns a plain-text description into a component array the form editor can
/// load directly. The model is instructed to reply with JSON only; anything
/// else is rejected rather than passed through.
#[axum::debug_handler]
pub async fn ai_generate(
    Extension(database_layer): Extension<DatabaseLayer>,
    Extension(ai_layer): Extension<AiLayer>,
    jar: CookieJar,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<AiError>> {
    authenticated_user(&jar, &database_layer).await?;

    let content = ai_layer
        .generate(payload.description)
        .await
        .map_err(AiError::Provider)?;

    let components: Value = serde_json::from_str(content.trim()).map_err(|error| {
        warn!(%error, "model reply was not valid JSON");
        ApiError(AiError::MalformedResponse)
    })?;

    if !components.is_array() {
        return Err(ApiError(AiError::MalformedResponse));
    }

    Ok((StatusCode::OK, Json(RouteOutput { components })))
}
