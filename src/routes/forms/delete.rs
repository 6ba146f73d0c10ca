use axum::{extract::Path, Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use hyper::StatusCode;
use serde::Serialize;
use surrealdb::sql::Thing;
use tracing::debug;

use crate::{
    errors::{response::ApiError, FormError},
    services::database::DatabaseLayer,
    utils::auth::authenticated_user,
};

#[derive(Debug, Serialize)]
pub struct RouteOutput {
    message: String,
}

#[axum::debug_handler]
pub async fn delete_form(
    Extension(database_layer): Extension<DatabaseLayer>,
    jar: CookieJar,
    Path(form_id): Path<String>,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<FormError>> {
    let user = authenticated_user(&jar, &database_layer).await?;

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

    database_layer.query().form.delete(form_id).await?;
    debug!(form_id = %form.id_string(), "form deleted");

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            message: String::from("Form deleted successfully"),
        }),
    ))
}
