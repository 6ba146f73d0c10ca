use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use hyper::StatusCode;
use serde::Serialize;

use crate::{
    errors::{response::ApiError, SheetsError},
    services::{database::DatabaseLayer, sheets::SheetsLayer},
    utils::{auth::authenticated_user, crypto::generate_token},
};

#[derive(Debug, Serialize)]
pub struct RouteOutput {
    url: String,
}

/// Hands the client a Google consent URL. The state parameter is a random
/// nonce the client carries through the redirect.
#[axum::debug_handler]
pub async fn sheets_oauth_init(
    Extension(database_layer): Extension<DatabaseLayer>,
    Extension(sheets_layer): Extension<SheetsLayer>,
    jar: CookieJar,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<SheetsError>> {
    authenticated_user(&jar, &database_layer).await?;

    let state = generate_token();
    let url = sheets_layer.consent_url(&state);

    Ok((StatusCode::OK, Json(RouteOutput { url })))
}
