use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use surrealdb::{
    engine::any::Any,
    sql::{Datetime, Thing},
    Surreal,
};

use crate::utils::crypto::generate_uuid;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Submission {
    pub id: Thing,
    pub form: Thing,
    pub response: Value,
    pub analytics: Value,
    pub created_at: Datetime,
}

#[derive(Deserialize, Debug)]
struct CountRow {
    count: u64,
}

#[derive(Clone)]
pub struct SubmissionQuery<'a> {
    db: &'a Surreal<Any>,
}

impl<'a> SubmissionQuery<'a> {
    pub(crate) fn new(db: &'a Surreal<Any>) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        form: Thing,
        response: Value,
        analytics: Value,
    ) -> Result<Submission, surrealdb::Error> {
        let submission_id = Thing::from(("submission".to_string(), generate_uuid()));

        let now: DateTime<Utc> = Utc::now();
        let created_at = Datetime::from(now);

        let query = r#"
            CREATE type::thing("submission", $id) SET
                form = $form,
                response = $response,
                analytics = $analytics,
                created_at = $created_at
        "#;

        self.db
            .query(query)
            .bind(("id", submission_id.id.to_raw()))
            .bind(("form", form.clone()))
            .bind(("response", response.clone()))
            .bind(("analytics", analytics.clone()))
            .bind(("created_at", created_at.clone()))
            .await?;

        Ok(Submission {
            id: submission_id,
            form,
            response,
            analytics,
            created_at,
        })
    }

    pub async fn list_by_form(&self, form: Thing) -> Result<Vec<Submission>, surrealdb::Error> {
        let query = r#"
            SELECT * FROM submission
            WHERE form = $form
            ORDER BY created_at DESC
        "#;

        let mut response = self.db.query(query).bind(("form", form)).await?;

        let result: Vec<Submission> = response.take(0)?;

        Ok(result)
    }

    pub async fn count_by_form(&self, form: Thing) -> Result<u64, surrealdb::Error> {
        let query = r#"
            SELECT count() FROM submission
            WHERE form = $form
            GROUP ALL
        "#;

        let mut response = self.db.query(query).bind(("form", form)).await?;

        let result: Vec<CountRow> = response.take(0)?;

        Ok(result.first().map(|row| row.count).unwrap_or(0))
    }

    pub async fn last_submitted_at(
        &self,
        form: Thing,
    ) -> Result<Option<Datetime>, surrealdb::Error> {
        let query = r#"
            SELECT * FROM submission
            WHERE form = $form
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let mut response = self.db.query(query).bind(("form", form)).await?;

        let result: Vec<Submission> = response.take(0)?;

        Ok(result.into_iter().next().map(|s| s.created_at))
    }
}
