use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::{
    engine::any::Any,
    sql::{Datetime, Thing},
    Surreal,
};

use crate::utils::crypto::{generate_token, hash_token};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Session {
    pub id: Thing,
    #[serde(rename = "user")]
    pub user_id: Thing,
    pub created_at: Datetime,
    pub expires_at: Datetime,
    pub authorized: bool,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.0 <= now
    }
}

#[derive(Clone)]
pub struct SessionQuery<'a> {
    db: &'a Surreal<Any>,
}

impl<'a> SessionQuery<'a> {
    pub(crate) fn new(db: &'a Surreal<Any>) -> Self {
        Self { db }
    }

    /// Creates a session row keyed by the SHA-256 of a fresh opaque token and
    /// returns both. Only the token leaves the server (as a cookie); the
    /// database never stores it in clear.
    pub async fn create(
        &self,
        user_id: Thing,
        authorized: bool,
    ) -> Result<(Session, String), surrealdb::Error> {
        let token = generate_token();

        let session_id_str = hash_token(&token);
        let session_id = Thing::from(("session".to_string(), session_id_str));

        let now: DateTime<Utc> = Utc::now();
        let expires = if authorized {
            now + Duration::days(30)
        } else {
            now + Duration::hours(12)
        };

        let created_at = Datetime::from(now);
        let expires_at = Datetime::from(expires);

        let query = r#"
            CREATE type::thing("session", $id) SET
                user = $user_id,
                created_at = $created_at,
                expires_at = $expires_at,
                authorized = $authorized
        "#;

        self.db
            .query(query)
            .bind(("id", session_id.id.to_raw()))
            .bind(("user_id", user_id.clone()))
            .bind(("created_at", created_at.clone()))
            .bind(("expires_at", expires_at.clone()))
            .bind(("authorized", authorized))
            .await?;

        Ok((
            Session {
                id: session_id,
                user_id,
                created_at,
                expires_at,
                authorized,
            },
            token,
        ))
    }

    pub async fn get_by_token_hash(
        &self,
        token_hash: String,
    ) -> Result<Option<Session>, surrealdb::Error> {
        let session: Option<Session> = self.db.select(("session", token_hash)).await?;

        Ok(session)
    }

    pub async fn delete_by_token_hash(&self, token_hash: String) -> Result<(), surrealdb::Error> {
        let _: Option<Session> = self.db.delete(("session", token_hash)).await?;

        Ok(())
    }
}
