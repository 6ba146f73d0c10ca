pub mod create;
pub mod delete;
pub mod list;
pub mod submissions;
pub mod update;

use axum::{
    routing::{get, put},
    Router,
};
use chrono::{DateTime, Utc};
pub use create::create_form;
pub use delete::delete_form;
pub use list::list_forms;
use serde::Serialize;
use serde_json::Value;
pub use submissions::list_form_submissions;
pub use update::update_form;

use crate::services::database::form::{Form, SheetConfig};
use crate::setup::AppState;

pub fn forms_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_forms).post(create_form))
        .route("/:id", put(update_form).delete(delete_form))
        .route("/:id/submissions", get(list_form_submissions))
}

#[derive(Debug, Serialize)]
pub struct FormOutput {
    pub id: String,
    pub name: String,
    pub components: Value,
    pub theme: Value,
    pub sheet_config: Option<SheetConfig>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Form> for FormOutput {
    fn from(form: Form) -> Self {
        FormOutput {
            id: form.id.id.to_raw(),
            name: form.name,
            components: form.components,
            theme: form.theme,
            sheet_config: form.sheet_config,
            created_at: form.created_at.0,
            updated_at: form.updated_at.0,
        }
    }
}
