use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::{
    engine::any::Any,
    sql::{Datetime, Thing},
    Surreal,
};

use crate::utils::crypto::{generate_slug, generate_uuid};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SharedLink {
    pub id: Thing,
    pub form: Thing,
    #[serde(default)]
    pub payment: Option<Thing>,
    pub slug: String,
    pub expires_at: Datetime,
    pub created_at: Datetime,
}

impl SharedLink {
    pub fn id_string(&self) -> String {
        self.id.id.to_raw()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.0 <= now
    }
}

#[derive(Clone)]
pub struct SharedLinkQuery<'a> {
    db: &'a Surreal<Any>,
}

impl<'a> SharedLinkQuery<'a> {
    pub(crate) fn new(db: &'a Surreal<Any>) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        form: Thing,
        payment: Option<Thing>,
        expires_at: DateTime<Utc>,
    ) -> Result<SharedLink, surrealdb::Error> {
        let link_id = Thing::from(("shared_link".to_string(), generate_uuid()));
        let slug = generate_slug();

        let now: DateTime<Utc> = Utc::now();
        let created_at = Datetime::from(now);
        let expires_at = Datetime::from(expires_at);

        let query = r#"
            CREATE type::thing("shared_link", $id) SET
                form = $form,
                payment = $payment,
                slug = $slug,
                expires_at = $expires_at,
                created_at = $created_at
        "#;

        self.db
            .query(query)
            .bind(("id", link_id.id.to_raw()))
            .bind(("form", form.clone()))
            .bind(("payment", payment.clone()))
            .bind(("slug", slug.clone()))
            .bind(("expires_at", expires_at.clone()))
            .bind(("created_at", created_at.clone()))
            .await?;

        Ok(SharedLink {
            id: link_id,
            form,
            payment,
            slug,
            expires_at,
            created_at,
        })
    }

    pub async fn get(&self, link_id: Thing) -> Result<Option<SharedLink>, surrealdb::Error> {
        let query = r#"
            SELECT * FROM shared_link
            WHERE id = $link_id
        "#;

        let mut response = self.db.query(query).bind(("link_id", link_id)).await?;

        let mut result: Vec<SharedLink> = response.take(0)?;

        Ok(result.pop())
    }

    pub async fn get_by_slug(&self, slug: String) -> Result<Option<SharedLink>, surrealdb::Error> {
        let query = r#"
            SELECT * FROM shared_link
            WHERE slug = $slug
        "#;

        let mut response = self.db.query(query).bind(("slug", slug)).await?;

        let mut result: Vec<SharedLink> = response.take(0)?;

        Ok(result.pop())
    }

    pub async fn get_by_form(&self, form: Thing) -> Result<Option<SharedLink>, surrealdb::Error> {
        let query = r#"
            SELECT * FROM shared_link
            WHERE form = $form
        "#;

        let mut response = self.db.query(query).bind(("form", form)).await?;

        let mut result: Vec<SharedLink> = response.take(0)?;

        Ok(result.pop())
    }

    pub async fn list_by_owner(&self, owner: Thing) -> Result<Vec<SharedLink>, surrealdb::Error> {
        let query = r#"
            SELECT * FROM shared_link
            WHERE form.owner = $owner
            ORDER BY created_at DESC
        "#;

        let mut response = self.db.query(query).bind(("owner", owner)).await?;

        let result: Vec<SharedLink> = response.take(0)?;

        Ok(result)
    }

    /// Called from the payment webhook: re-arms the form's existing link for
    /// a fresh activation window, or mints one if the form was never shared.
    pub async fn activate(
        &self,
        form: Thing,
        payment: Thing,
        activation_days: i64,
    ) -> Result<SharedLink, surrealdb::Error> {
        let expires_at = Utc::now() + Duration::days(activation_days);

        match self.get_by_form(form.clone()).await? {
            Some(existing) => {
                let query = r#"
                    UPDATE $link_id
                    SET payment = $payment, expires_at = $expires_at
                    RETURN AFTER
                "#;

                let mut response = self
                    .db
                    .query(query)
                    .bind(("link_id", existing.id.clone()))
                    .bind(("payment", payment))
                    .bind(("expires_at", Datetime::from(expires_at)))
                    .await?;

                let mut result: Vec<SharedLink> = response.take(0)?;

                Ok(result.pop().unwrap_or(existing))
            }
            None => self.create(form, Some(payment), expires_at).await,
        }
    }

    pub async fn extend(
        &self,
        link_id: Thing,
        days: i64,
    ) -> Result<Option<SharedLink>, surrealdb::Error> {
        let existing = match self.get(link_id.clone()).await? {
            Some(link) => link,
            None => return Ok(None),
        };

        let expires_at = Datetime::from(existing.expires_at.0 + Duration::days(days));

        let query = r#"
            UPDATE $link_id
            SET expires_at = $expires_at
            RETURN AFTER
        "#;

        let mut response = self
            .db
            .query(query)
            .bind(("link_id", link_id))
            .bind(("expires_at", expires_at))
            .await?;

        let mut result: Vec<SharedLink> = response.take(0)?;

        Ok(result.pop())
    }
}
