use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{response::ApiError, AiError},
    services::{
        ai::{AiLayer, ChatMessage},
        database::DatabaseLayer,
    },
    utils::auth::authenticated_user,
};

#[derive(Debug, Deserialize)]
pub struct RoutePayload {
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct RouteOutput {
    reply: String,
}

#[axum::debug_handler]
pub async fn ai_chat(
    Extension(database_layer): Extension<DatabaseLayer>,
    Extension(ai_layer): Extension<AiLayer>,
    jar: CookieJar,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<AiError>> {
    authenticated_user(&jar, &database_layer).await?;

    let reply = ai_layer
        .chat(payload.messages)
        .await
        .map_err(AiError::Provider)?;

    Ok((StatusCode::OK, Json(RouteOutput { reply })))
}
