pub mod oauth_callback;
pub mod oauth_init;
pub mod rows;
pub mod sync;

use axum::{
    routing::{get, post},
    Router,
};
use chrono::{Duration, Utc};
pub use oauth_callback::sheets_oauth_callback;
pub use oauth_init::sheets_oauth_init;
pub use rows::sheet_rows;
pub use sync::sync_submission;

use crate::{
    errors::SheetsError,
    services::{database::user::User, database::DatabaseLayer, sheets::SheetsLayer},
    setup::AppState,
};

pub fn sheets_router() -> Router<AppState> {
    Router::new()
        .route("/oauth/init", get(sheets_oauth_init))
        .route("/oauth/callback", get(sheets_oauth_callback))
        .route("/sync", post(sync_submission))
        .route("/rows", get(sheet_rows))
}

/// Resolves a usable access token for the user, in order of preference:
/// a fresh stored credential, a stored credential refreshed through its
/// refresh token, then the deployment-wide service token.
pub async fn resolve_access_token(
    user: &User,
    database_layer: &DatabaseLayer,
    sheets_layer: &SheetsLayer,
) -> Result<String, SheetsError> {
    let credential = database_layer
        .query()
        .sheet_credential
        .get_by_user(user.id.clone())
        .await
        .map_err(|e| SheetsError::Common(e.into()))?;

    let now = Utc::now();

    if let Some(credential) = credential {
        if !credential.is_expired(now) {
            return Ok(credential.access_token);
        }

        if let Some(refresh_token) = credential.refresh_token {
            let refreshed = sheets_layer
                .refresh_access_token(refresh_token)
                .await
                .map_err(SheetsError::Google)?;

            let expires_at = now + Duration::seconds(refreshed.expires_in);

            database_layer
                .query()
                .sheet_credential
                .update_access_token(
                    user.id.clone(),
                    refreshed.access_token.clone(),
                    expires_at,
                )
                .await
                .map_err(|e| SheetsError::Common(e.into()))?;

            return Ok(refreshed.access_token);
        }
    }

    match &sheets_layer.service_token {
        Some(token) => Ok(token.clone()),
        None => Err(SheetsError::NotConnected),
    }
}
