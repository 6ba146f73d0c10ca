use axum::{extract::Path, Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use hyper::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use surrealdb::sql::Thing;
use validator::Validate;

use crate::{
    errors::{response::ApiError, FormError},
    services::database::{
        form::{FormUpdate, SheetConfig},
        DatabaseLayer,
    },
    utils::auth::authenticated_user,
};

use super::FormOutput;

#[derive(Debug, Deserialize, Validate)]
pub struct RoutePayload {
    #[validate(length(min = 1, max = 120, message = "Form name must be 1-120 characters"))]
    name: Option<String>,
    components: Option<Value>,
    theme: Option<Value>,
    #[validate(nested)]
    sheet_config: Option<SheetConfig>,
}

#[axum::debug_handler]
pub async fn update_form(
    Extension(database_layer): Extension<DatabaseLayer>,
    jar: CookieJar,
    Path(form_id): Path<String>,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<FormOutput>), ApiError<FormError>> {
    let user = authenticated_user(&jar, &database_layer).await?;

    payload.validate()?;

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

    let changes = FormUpdate {
        name: payload.name,
        components: payload.components,
        theme: payload.theme,
        sheet_config: payload.sheet_config,
    };

    let updated = database_layer
        .query()
        .form
        .update(form_id, changes)
        .await?
        .ok_or(ApiError(FormError::NotFound))?;

    Ok((StatusCode::OK, Json(FormOutput::from(updated))))
}
