use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use hyper::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;
use validator::Validate;

use crate::{
    errors::{response::ApiError, FormError},
    services::database::DatabaseLayer,
    utils::auth::authenticated_user,
};

use super::FormOutput;

#[derive(Debug, Deserialize, Validate)]
pub struct RoutePayload {
    #[validate(length(min = 1, max = 120, message = "Form name must be 1-120 characters"))]
    name: String,
    #[serde(default)]
    components: Option<Value>,
    #[serde(default)]
    theme: Option<Value>,
}

#[axum::debug_handler]
pub async fn create_form(
    Extension(database_layer): Extension<DatabaseLayer>,
    jar: CookieJar,
    Json(payload): Json<RoutePayload>,
) -> Result<(StatusCode, Json<FormOutput>), ApiError<FormError>> {
    let user = authenticated_user(&jar, &database_layer).await?;

    payload.validate()?;

    let components = payload.components.unwrap_or_else(|| json!([]));
    let theme = payload.theme.unwrap_or_else(|| json!({}));

    let form = database_layer
        .query()
        .form
        .create(user.id, payload.name, components, theme)
        .await?;
    debug!(form_id = %form.id_string(), "form created");

    Ok((StatusCode::CREATED, Json(FormOutput::from(form))))
}
