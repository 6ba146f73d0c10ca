use std::str::FromStr;

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use surrealdb::{
    engine::any::Any,
    sql::{Datetime, Thing},
    Surreal,
};

use crate::utils::crypto::generate_uuid;

#[derive(Serialize, Deserialize, Debug, Display, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[display("pending")]
    Pending,
    #[display("paid")]
    Paid,
    #[display("failed")]
    Failed,
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "paid" => Ok(PaymentStatus::Paid),
            "failed" => Ok(PaymentStatus::Failed),
            other => Err(format!("Unknown payment status: {other}")),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Payment {
    pub id: Thing,
    pub owner: Thing,
    pub form: Thing,
    pub order_id: String,
    pub amount: i64,
    pub currency: String,
    pub status: PaymentStatus,
    pub customer: Value,
    #[serde(default)]
    pub method: String,
    pub created_at: Datetime,
    pub updated_at: Datetime,
}

impl Payment {
    pub fn id_string(&self) -> String {
        self.id.id.to_raw()
    }

    pub fn customer_email(&self) -> Option<String> {
        self.customer
            .get("email")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }
}

#[derive(Clone)]
pub struct PaymentQuery<'a> {
    db: &'a Surreal<Any>,
}

impl<'a> PaymentQuery<'a> {
    pub(crate) fn new(db: &'a Surreal<Any>) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        owner: Thing,
        form: Thing,
        order_id: String,
        amount: i64,
        currency: String,
        customer: Value,
    ) -> Result<Payment, surrealdb::Error> {
        let payment_id = Thing::from(("payment".to_string(), generate_uuid()));

        let now: DateTime<Utc> = Utc::now();
        let created_at = Datetime::from(now);

        let query = r#"
            CREATE type::thing("payment", $id) SET
                owner = $owner,
                form = $form,
                order_id = $order_id,
                amount = $amount,
                currency = $currency,
                status = "pending",
                customer = $customer,
                method = "",
                created_at = $created_at,
                updated_at = $created_at
        "#;

        self.db
            .query(query)
            .bind(("id", payment_id.id.to_raw()))
            .bind(("owner", owner.clone()))
            .bind(("form", form.clone()))
            .bind(("order_id", order_id.clone()))
            .bind(("amount", amount))
            .bind(("currency", currency.clone()))
            .bind(("customer", customer.clone()))
            .bind(("created_at", created_at.clone()))
            .await?;

        Ok(Payment {
            id: payment_id,
            owner,
            form,
            order_id,
            amount,
            currency,
            status: PaymentStatus::Pending,
            customer,
            method: String::new(),
            created_at: created_at.clone(),
            updated_at: created_at,
        })
    }

    pub async fn get(&self, payment_id: Thing) -> Result<Option<Payment>, surrealdb::Error> {
        let query = r#"
            SELECT * FROM payment
            WHERE id = $payment_id
        "#;

        let mut response = self.db.query(query).bind(("payment_id", payment_id)).await?;

        let mut result: Vec<Payment> = response.take(0)?;

        Ok(result.pop())
    }

    pub async fn list_by_owner(&self, owner: Thing) -> Result<Vec<Payment>, surrealdb::Error> {
        let query = r#"
            SELECT * FROM payment
            WHERE owner = $owner
            ORDER BY created_at DESC
        "#;

        let mut response = self.db.query(query).bind(("owner", owner)).await?;

        let result: Vec<Payment> = response.take(0)?;

        Ok(result)
    }

    /// The webhook path: one status update keyed by the gateway order id.
    /// Returns the updated row, or `None` when the order id is unknown.
    pub async fn update_status(
        &self,
        order_id: String,
        status: PaymentStatus,
        method: String,
    ) -> Result<Option<Payment>, surrealdb::Error> {
        let updated_at = Datetime::from(Utc::now());

        let query = r#"
            UPDATE payment
            SET status = $status, method = $method, updated_at = $updated_at
            WHERE order_id = $order_id
            RETURN AFTER
        "#;

        let mut response = self
            .db
            .query(query)
            .bind(("order_id", order_id))
            .bind(("status", status.to_string()))
            .bind(("method", method))
            .bind(("updated_at", updated_at))
            .await?;

        let mut result: Vec<Payment> = response.take(0)?;

        Ok(result.pop())
    }
}
