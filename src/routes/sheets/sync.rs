use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use validator::Validate;

use super::resolve_access_token;
use crate::{
    errors::{response::ApiError, SheetsError},
    services::{database::DatabaseLayer, sheets::SheetsLayer},
    utils::{
        auth::authenticated_user,
        mapping::{mapped_columns, mapped_row, FieldMapping},
    },
};

#[derive(Debug, Deserialize, Validate)]
pub struct RoutePayload {
    #[validate(length(min = 1))]
    spreadsheet_id: String,
    #[validate(length(min = 1))]
    sheet_name: String,
    #[validate(nested)]
    #[validate(length(min = 1))]
    mapping: Vec<FieldMapping>,
    record: Map<String, Value>,
    /// Write the column headers before the row (first sync of a sheet).
    #[serde(default)]
    write_header: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    message: String,
}

/// Appends one submission record to the configured sheet. The mapping order
/// defines the column order; a failed append surfaces the Sheets error as-is
/// and the row is simply not written.
#[axum::debug_handler]
pub async fn sync_submission(
    Extension(database_layer): Extension<DatabaseLayer>,
    Extension(sheets_layer): Extension<SheetsLayer>,
    jar: CookieJar,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<SheetsError>> {
    let user = authenticated_user(&jar, &database_layer).await?;

    payload.validate()?;

    let access_token = resolve_access_token(&user, &database_layer, &sheets_layer).await?;

    let row = mapped_row(&payload.mapping, &payload.record);
    debug!(
        spreadsheet_id = %payload.spreadsheet_id,
        columns = row.len(),
        "appending synced row"
    );

    if payload.write_header {
        sheets_layer
            .append_row(
                &access_token,
                &payload.spreadsheet_id,
                &payload.sheet_name,
                mapped_columns(&payload.mapping),
            )
            .await
            .map_err(SheetsError::Google)?;
    }

    sheets_layer
        .append_row(
            &access_token,
            &payload.spreadsheet_id,
            &payload.sheet_name,
            row,
        )
        .await
        .map_err(SheetsError::Google)?;

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            message: String::from("Row appended successfully"),
        }),
    ))
}
