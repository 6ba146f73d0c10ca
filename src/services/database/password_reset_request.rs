use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::{
    engine::any::Any,
    sql::{Datetime, Thing},
    Surreal,
};

use crate::utils::crypto::{generate_token, hash_token};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PasswordResetRequest {
    pub id: Thing,
    #[serde(rename = "user")]
    pub user_id: Thing,
    pub created_at: Datetime,
    pub expires_at: Datetime,
}

impl PasswordResetRequest {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.0 <= now
    }
}

#[derive(Clone)]
pub struct PasswordResetRequestQuery<'a> {
    db: &'a Surreal<Any>,
}

impl<'a> PasswordResetRequestQuery<'a> {
    pub(crate) fn new(db: &'a Surreal<Any>) -> Self {
        Self { db }
    }

    /// Same token scheme as sessions: the row id is the hash, the clear
    /// token only appears in the reset email.
    pub async fn create(
        &self,
        user_id: Thing,
    ) -> Result<(PasswordResetRequest, String), surrealdb::Error> {
        let token = generate_token();
        let request_id = Thing::from(("password_reset_request".to_string(), hash_token(&token)));

        let now: DateTime<Utc> = Utc::now();
        let expires: DateTime<Utc> = now + Duration::minutes(30);

        let created_at = Datetime::from(now);
        let expires_at = Datetime::from(expires);

        let query = r#"
            CREATE type::thing("password_reset_request", $id) SET
                user = $user_id,
                created_at = $created_at,
                expires_at = $expires_at
        "#;

        self.db
            .query(query)
            .bind(("id", request_id.id.to_raw()))
            .bind(("user_id", user_id.clone()))
            .bind(("created_at", created_at.clone()))
            .bind(("expires_at", expires_at.clone()))
            .await?;

        Ok((
            PasswordResetRequest {
                id: request_id,
                user_id,
                created_at,
                expires_at,
            },
            token,
        ))
    }

    pub async fn get_by_token_hash(
        &self,
        token_hash: String,
    ) -> Result<Option<PasswordResetRequest>, surrealdb::Error> {
        let request: Option<PasswordResetRequest> = self
            .db
            .select(("password_reset_request", token_hash))
            .await?;

        Ok(request)
    }

    pub async fn remove(&self, request_id: Thing) -> Result<(), surrealdb::Error> {
        let query = r#"
            DELETE FROM password_reset_request
            WHERE id = $request_id
            RETURN BEFORE
        "#;

        let mut response = self.db.query(query).bind(("request_id", request_id)).await?;

        let _: Vec<PasswordResetRequest> = response.take(0)?;

        Ok(())
    }
}
