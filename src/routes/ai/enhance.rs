use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{response::ApiError, AiError},
    services::{ai::AiLayer, database::DatabaseLayer},
    utils::auth::authenticated_user,
};

#[derive(Debug, Deserialize)]
pub struct RoutePayload {
    text: String,
}

#[derive(Debug, Serialize)]
pub struct RouteOutput {
    text: String,
}

#[axum::debug_handler]
pub async fn ai_enhance(
    Extension(database_layer): Extension<DatabaseLayer>,
    Extension(ai_layer): Extension<AiLayer>,
    jar: CookieJar,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<AiError>> {
    authenticated_user(&jar, &database_layer).await?;

    let text = ai_layer
        .enhance(payload.text)
        .await
        .map_err(AiError::Provider)?;

    Ok((StatusCode::OK, Json(RouteOutput { text })))
}
