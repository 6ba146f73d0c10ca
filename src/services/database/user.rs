use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::{
    engine::any::Any,
    sql::{Datetime, Thing},
    Surreal,
};

use crate::utils::crypto::generate_uuid;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub id: Thing,
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub password_hash: String,
    #[serde(default)]
    pub email_verified: bool,
    pub created_at: Datetime,
}

impl User {
    pub fn id_string(&self) -> String {
        self.id.id.to_raw()
    }
}

#[derive(Clone)]
pub struct UserQuery<'a> {
    db: &'a Surreal<Any>,
}

impl<'a> UserQuery<'a> {
    pub(crate) fn new(db: &'a Surreal<Any>) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        email: String,
        name: String,
        password_hash: String,
    ) -> Result<User, surrealdb::Error> {
        let user_id = Thing::from(("user".to_string(), generate_uuid()));

        let now: DateTime<Utc> = Utc::now();
        let created_at = Datetime::from(now);

        let query = r#"
            CREATE type::thing("user", $id) SET
                email = $email,
                name = $name,
                password_hash = $password_hash,
                email_verified = false,
                created_at = $created_at
        "#;

        self.db
            .query(query)
            .bind(("id", user_id.id.to_raw()))
            .bind(("email", email.clone()))
            .bind(("name", name.clone()))
            .bind(("password_hash", password_hash.clone()))
            .bind(("created_at", created_at.clone()))
            .await?;

        Ok(User {
            id: user_id,
            email,
            name,
            password_hash,
            email_verified: false,
            created_at,
        })
    }

    pub async fn get(&self, user_id: Thing) -> Result<Option<User>, surrealdb::Error> {
        let query = r#"
            SELECT * FROM user
            WHERE id = $user_id
        "#;

        let mut response = self.db.query(query).bind(("user_id", user_id)).await?;

        let mut result: Vec<User> = response.take(0)?;

        Ok(result.pop())
    }

    pub async fn get_by_email(&self, email: String) -> Result<Option<User>, surrealdb::Error> {
        let query = r#"
            SELECT * FROM user
            WHERE email = $user_email
        "#;

        let mut response = self.db.query(query).bind(("user_email", email)).await?;

        let mut result: Vec<User> = response.take(0)?;

        Ok(result.pop())
    }

    pub async fn check_if_exists(&self, email: String) -> Result<bool, surrealdb::Error> {
        Ok(self.get_by_email(email).await?.is_some())
    }

    pub async fn verify_email(&self, user_id: Thing) -> Result<(), surrealdb::Error> {
        let query = r#"
            UPDATE user
            SET email_verified = true
            WHERE id = $user_id
        "#;

        let mut result = self.db.query(query).bind(("user_id", user_id)).await?;

        let affected: Vec<User> = result.take(0)?;

        if affected.is_empty() {
            return Err(surrealdb::Error::Api(
                surrealdb::error::Api::InvalidRequest(String::from("User doesn't exist")),
            ));
        }

        Ok(())
    }

    pub async fn update_password(
        &self,
        user_id: Thing,
        password_hash: String,
    ) -> Result<(), surrealdb::Error> {
        let query = r#"
            UPDATE user
            SET password_hash = $password_hash
            WHERE id = $user_id
        "#;

        let mut result = self
            .db
            .query(query)
            .bind(("user_id", user_id))
            .bind(("password_hash", password_hash))
            .await?;

        let affected: Vec<User> = result.take(0)?;

        if affected.is_empty() {
            return Err(surrealdb::Error::Api(
                surrealdb::error::Api::InvalidRequest(String::from("User doesn't exist")),
            ));
        }

        Ok(())
    }
}
