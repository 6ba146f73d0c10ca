use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use hyper::StatusCode;
use serde::Serialize;

use crate::{
    errors::{response::ApiError, FormError},
    services::database::DatabaseLayer,
    utils::auth::authenticated_user,
};

use super::FormOutput;

#[derive(Debug, Serialize)]
pub struct RouteOutput {
    forms: Vec<FormOutput>,
}

#[axum::debug_handler]
pub async fn list_forms(
    Extension(database_layer): Extension<DatabaseLayer>,
    jar: CookieJar,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<FormError>> {
    let user = authenticated_user(&jar, &database_layer).await?;

    let forms = database_layer
        .query()
        .form
        .list_by_owner(user.id)
        .await?
        .into_iter()
        .map(FormOutput::from)
        .collect();

    Ok((StatusCode::OK, Json(RouteOutput { forms })))
}
