use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use surrealdb::{
    engine::any::Any,
    sql::{Datetime, Thing},
    Surreal,
};
use validator::Validate;

use crate::utils::{crypto::generate_uuid, mapping::FieldMapping};

/// Per-form spreadsheet settings the builder UI persists alongside the form.
#[derive(Serialize, Deserialize, Validate, Debug, Clone)]
pub struct SheetConfig {
    #[validate(length(min = 1))]
    pub spreadsheet_id: String,
    #[validate(length(min = 1))]
    pub sheet_name: String,
    pub mapping: Vec<FieldMapping>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Form {
    pub id: Thing,
    pub owner: Thing,
    pub name: String,
    pub components: Value,
    pub theme: Value,
    #[serde(default)]
    pub sheet_config: Option<SheetConfig>,
    pub created_at: Datetime,
    pub updated_at: Datetime,
}

impl Form {
    pub fn id_string(&self) -> String {
        self.id.id.to_raw()
    }

    pub fn is_owned_by(&self, user_id: &Thing) -> bool {
        &self.owner == user_id
    }
}

#[derive(Debug, Default, Serialize)]
pub struct FormUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_config: Option<SheetConfig>,
}

#[derive(Clone)]
pub struct FormQuery<'a> {
    db: &'a Surreal<Any>,
}

impl<'a> FormQuery<'a> {
    pub(crate) fn new(db: &'a Surreal<Any>) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        owner: Thing,
        name: String,
        components: Value,
        theme: Value,
    ) -> Result<Form, surrealdb::Error> {
        let form_id = Thing::from(("form".to_string(), generate_uuid()));

        let now: DateTime<Utc> = Utc::now();
        let created_at = Datetime::from(now);

        let query = r#"
            CREATE type::thing("form", $id) SET
                owner = $owner,
                name = $name,
                components = $components,
                theme = $theme,
                sheet_config = NONE,
                created_at = $created_at,
                updated_at = $created_at
        "#;

        self.db
            .query(query)
            .bind(("id", form_id.id.to_raw()))
            .bind(("owner", owner.clone()))
            .bind(("name", name.clone()))
            .bind(("components", components.clone()))
            .bind(("theme", theme.clone()))
            .bind(("created_at", created_at.clone()))
            .await?;

        Ok(Form {
            id: form_id,
            owner,
            name,
            components,
            theme,
            sheet_config: None,
            created_at: created_at.clone(),
            updated_at: created_at,
        })
    }

    pub async fn get(&self, form_id: Thing) -> Result<Option<Form>, surrealdb::Error> {
        let query = r#"
            SELECT * FROM form
            WHERE id = $form_id
        "#;

        let mut response = self.db.query(query).bind(("form_id", form_id)).await?;

        let mut result: Vec<Form> = response.take(0)?;

        Ok(result.pop())
    }

    pub async fn list_by_owner(&self, owner: Thing) -> Result<Vec<Form>, surrealdb::Error> {
        let query = r#"
            SELECT * FROM form
            WHERE owner = $owner
            ORDER BY updated_at DESC
        "#;

        let mut response = self.db.query(query).bind(("owner", owner)).await?;

        let result: Vec<Form> = response.take(0)?;

        Ok(result)
    }

    pub async fn update(
        &self,
        form_id: Thing,
        changes: FormUpdate,
    ) -> Result<Option<Form>, surrealdb::Error> {
        let updated_at = Datetime::from(Utc::now());

        let query = r#"
            UPDATE $form_id MERGE $changes;
            UPDATE $form_id SET updated_at = $updated_at RETURN AFTER;
        "#;

        let mut response = self
            .db
            .query(query)
            .bind(("form_id", form_id))
            .bind(("changes", changes))
            .bind(("updated_at", updated_at))
            .await?;

        let mut result: Vec<Form> = response.take(1)?;

        Ok(result.pop())
    }

    pub async fn delete(&self, form_id: Thing) -> Result<(), surrealdb::Error> {
        let query = r#"
            DELETE FROM form
            WHERE id = $form_id
            RETURN BEFORE
        "#;

        let mut response = self.db.query(query).bind(("form_id", form_id)).await?;

        let result: Vec<Form> = response.take(0)?;

        if result.is_empty() {
            return Err(surrealdb::Error::Api(
                surrealdb::error::Api::InvalidRequest(String::from("Form doesn't exist")),
            ));
        }

        Ok(())
    }
}
