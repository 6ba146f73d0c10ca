use axum::{extract::Query, Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};

use super::resolve_access_token;
use crate::{
    errors::{response::ApiError, SheetsError},
    services::{database::DatabaseLayer, sheets::SheetsLayer},
    utils::auth::authenticated_user,
};

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    spreadsheet_id: String,
    range: String,
}

#[derive(Debug, Serialize)]
pub struct RouteOutput {
    rows: Vec<Vec<String>>,
}

/// Returns the current sheet contents for a range. The client polls this to
/// mirror edits made directly in the spreadsheet.
#[axum::debug_handler]
pub async fn sheet_rows(
    Extension(database_layer): Extension<DatabaseLayer>,
    Extension(sheets_layer): Extension<SheetsLayer>,
    jar: CookieJar,
    Query(query): Query<RouteQuery>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<SheetsError>> {
    let user = authenticated_user(&jar, &database_layer).await?;

    let access_token = resolve_access_token(&user, &database_layer, &sheets_layer).await?;

    let rows = sheets_layer
        .read_range(&access_token, &query.spreadsheet_id, &query.range)
        .await
        .map_err(SheetsError::Google)?;

    Ok((StatusCode::OK, Json(RouteOutput { rows })))
}
