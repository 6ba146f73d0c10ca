use axum::{extract::Query, Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use chrono::{Duration, Utc};
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    errors::{response::ApiError, SheetsError},
    services::{database::DatabaseLayer, sheets::SheetsLayer},
    utils::auth::authenticated_user,
};

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    #[serde(default)]
    code: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    message: String,
}

#[axum::debug_handler]
pub async fn sheets_oauth_callback(
    Extension(database_layer): Extension<DatabaseLayer>,
    Extension(sheets_layer): Extension<SheetsLayer>,
    jar: CookieJar,
    Query(query): Query<RouteQuery>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<SheetsError>> {
    let user = authenticated_user(&jar, &database_layer).await?;

    // 1. Google redirects back with ?code=... on success
    let code = query.code.ok_or(ApiError(SheetsError::MissingCode))?;

    // 2. Exchange it for tokens and store them against the user
    let tokens = sheets_layer
        .exchange_code(code)
        .await
        .map_err(SheetsError::Google)?;

    let expires_at = Utc::now() + Duration::seconds(tokens.expires_in);

    database_layer
        .query()
        .sheet_credential
        .upsert(
            user.id.clone(),
            tokens.access_token,
            tokens.refresh_token,
            expires_at,
        )
        .await?;
    info!(user_id = %user.id_string(), "google account connected");

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            message: String::from("Google account connected successfully"),
        }),
    ))
}
