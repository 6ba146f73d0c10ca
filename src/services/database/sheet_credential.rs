use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::{
    engine::any::Any,
    sql::{Datetime, Thing},
    Surreal,
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SheetCredential {
    pub id: Thing,
    #[serde(rename = "user")]
    pub user_id: Thing,
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub expires_at: Datetime,
    pub created_at: Datetime,
}

impl SheetCredential {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.0 <= now
    }
}

#[derive(Clone)]
pub struct SheetCredentialQuery<'a> {
    db: &'a Surreal<Any>,
}

impl<'a> SheetCredentialQuery<'a> {
    pub(crate) fn new(db: &'a Surreal<Any>) -> Self {
        Self { db }
    }

    /// One credential per user: the row id is the user's record key, so a
    /// re-connect simply overwrites the previous grant.
    pub async fn upsert(
        &self,
        user_id: Thing,
        access_token: String,
        refresh_token: Option<String>,
        expires_at: DateTime<Utc>,
    ) -> Result<SheetCredential, surrealdb::Error> {
        let credential_id = Thing::from(("sheet_credential".to_string(), user_id.id.to_raw()));

        let now: DateTime<Utc> = Utc::now();
        let created_at = Datetime::from(now);
        let expires_at = Datetime::from(expires_at);

        let query = r#"
            UPSERT type::thing("sheet_credential", $id) SET
                user = $user_id,
                access_token = $access_token,
                refresh_token = $refresh_token,
                expires_at = $expires_at,
                created_at = $created_at
        "#;

        self.db
            .query(query)
            .bind(("id", credential_id.id.to_raw()))
            .bind(("user_id", user_id.clone()))
            .bind(("access_token", access_token.clone()))
            .bind(("refresh_token", refresh_token.clone()))
            .bind(("expires_at", expires_at.clone()))
            .bind(("created_at", created_at.clone()))
            .await?;

        Ok(SheetCredential {
            id: credential_id,
            user_id,
            access_token,
            refresh_token,
            expires_at,
            created_at,
        })
    }

    pub async fn get_by_user(
        &self,
        user_id: Thing,
    ) -> Result<Option<SheetCredential>, surrealdb::Error> {
        let credential: Option<SheetCredential> = self
            .db
            .select(("sheet_credential", user_id.id.to_raw()))
            .await?;

        Ok(credential)
    }

    pub async fn update_access_token(
        &self,
        user_id: Thing,
        access_token: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), surrealdb::Error> {
        let query = r#"
            UPDATE type::thing("sheet_credential", $id)
            SET access_token = $access_token, expires_at = $expires_at
        "#;

        self.db
            .query(query)
            .bind(("id", user_id.id.to_raw()))
            .bind(("access_token", access_token))
            .bind(("expires_at", Datetime::from(expires_at)))
            .await?;

        Ok(())
    }
}
