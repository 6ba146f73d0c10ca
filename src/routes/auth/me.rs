use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{response::ApiError, CommonError},
    services::database::DatabaseLayer,
    utils::auth::authenticated_user,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteOutput {
    id: String,
    email: String,
    name: String,
    email_verified: bool,
}

#[axum::debug_handler]
pub async fn me(
    Extension(database_layer): Extension<DatabaseLayer>,
    jar: CookieJar,
) -> Result<(StatusCode, Json<RouteOutput>), ApiError<CommonError>> {
    let user = authenticated_user(&jar, &database_layer).await?;

    Ok((
        StatusCode::OK,
        Json(RouteOutput {
            id: user.id_string(),
            email: user.email,
            name: user.name,
            email_verified: user.email_verified,
        }),
    ))
}
