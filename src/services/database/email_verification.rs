use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::{
    engine::any::Any,
    sql::{Datetime, Thing},
    Surreal,
};

use crate::utils::crypto::generate_token;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EmailVerification {
    pub id: Thing,
    pub code: String,
    pub email: String,
    #[serde(rename = "user")]
    pub user_id: Thing,
    pub created_at: Datetime,
    pub expires_at: Datetime,
}

impl EmailVerification {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.0 <= now
    }
}

#[derive(Clone)]
pub struct EmailVerificationQuery<'a> {
    db: &'a Surreal<Any>,
}

impl<'a> EmailVerificationQuery<'a> {
    pub(crate) fn new(db: &'a Surreal<Any>) -> Self {
        Self { db }
    }

    /// Creates a fresh verification for the email, replacing any pending one
    /// so only the latest code is accepted.
    pub async fn create(
        &self,
        code: String,
        email: String,
        user_id: Thing,
    ) -> Result<EmailVerification, surrealdb::Error> {
        let verification_id = Thing::from(("email_verification".to_string(), generate_token()));

        let now: DateTime<Utc> = Utc::now();
        let expires: DateTime<Utc> = now + Duration::minutes(5);

        let created_at = Datetime::from(now);
        let expires_at = Datetime::from(expires);

        let delete_query = r#"
            DELETE FROM email_verification
            WHERE email = $email
        "#;

        self.db
            .query(delete_query)
            .bind(("email", email.clone()))
            .await?;

        let create_query = r#"
            CREATE type::thing("email_verification", $id) SET
                email = $email,
                code = $code,
                user = $user_id,
                created_at = $created_at,
                expires_at = $expires_at
        "#;

        self.db
            .query(create_query)
            .bind(("id", verification_id.id.to_raw()))
            .bind(("email", email.clone()))
            .bind(("code", code.clone()))
            .bind(("user_id", user_id.clone()))
            .bind(("created_at", created_at.clone()))
            .bind(("expires_at", expires_at.clone()))
            .await?;

        Ok(EmailVerification {
            id: verification_id,
            code,
            email,
            user_id,
            created_at,
            expires_at,
        })
    }

    pub async fn get(
        &self,
        verification_id: String,
    ) -> Result<Option<EmailVerification>, surrealdb::Error> {
        let verification: Option<EmailVerification> = self
            .db
            .select(("email_verification", verification_id))
            .await?;

        Ok(verification)
    }

    pub async fn remove(&self, verification_id: Thing) -> Result<(), surrealdb::Error> {
        let query = r#"
            DELETE FROM email_verification
            WHERE id = $verification_id
            RETURN BEFORE
        "#;

        let mut response = self
            .db
            .query(query)
            .bind(("verification_id", verification_id))
            .await?;

        let result: Vec<EmailVerification> = response.take(0)?;

        if result.is_empty() {
            return Err(surrealdb::Error::Api(
                surrealdb::error::Api::InvalidRequest(String::from(
                    "Email verification either doesn't exist or is already deleted",
                )),
            ));
        }

        Ok(())
    }
}
