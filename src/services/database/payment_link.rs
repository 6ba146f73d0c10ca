use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::{
    engine::any::Any,
    sql::{Datetime, Thing},
    Surreal,
};

use crate::utils::crypto::{generate_slug, generate_uuid};

/// Checkout window before an unpaid order goes stale.
const PAYMENT_LINK_HOURS: i64 = 24;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PaymentLink {
    pub id: Thing,
    pub payment: Thing,
    pub slug: String,
    pub expires_at: Datetime,
    pub created_at: Datetime,
}

#[derive(Clone)]
pub struct PaymentLinkQuery<'a> {
    db: &'a Surreal<Any>,
}

impl<'a> PaymentLinkQuery<'a> {
    pub(crate) fn new(db: &'a Surreal<Any>) -> Self {
        Self { db }
    }

    pub async fn create(&self, payment: Thing) -> Result<PaymentLink, surrealdb::Error> {
        let link_id = Thing::from(("payment_link".to_string(), generate_uuid()));
        let slug = generate_slug();

        let now: DateTime<Utc> = Utc::now();
        let created_at = Datetime::from(now);
        let expires_at = Datetime::from(now + Duration::hours(PAYMENT_LINK_HOURS));

        let query = r#"
            CREATE type::thing("payment_link", $id) SET
                payment = $payment,
                slug = $slug,
                expires_at = $expires_at,
                created_at = $created_at
        "#;

        self.db
            .query(query)
            .bind(("id", link_id.id.to_raw()))
            .bind(("payment", payment.clone()))
            .bind(("slug", slug.clone()))
            .bind(("expires_at", expires_at.clone()))
            .bind(("created_at", created_at.clone()))
            .await?;

        Ok(PaymentLink {
            id: link_id,
            payment,
            slug,
            expires_at,
            created_at,
        })
    }

    pub async fn get_by_slug(&self, slug: String) -> Result<Option<PaymentLink>, surrealdb::Error> {
        let query = r#"
            SELECT * FROM payment_link
            WHERE slug = $slug
        "#;

        let mut response = self.db.query(query).bind(("slug", slug)).await?;

        let mut result: Vec<PaymentLink> = response.take(0)?;

        Ok(result.pop())
    }
}
