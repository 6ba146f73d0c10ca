use std::str::FromStr;

use chrono::{Duration, Utc};
use formbay_api::services::database::payment::PaymentStatus;
use formbay_api::services::database::DatabaseLayer;
use formbay_api::utils::crypto::hash_token;
use formbay_api::utils::schemas::all_schemas;
use serde_json::json;

async fn test_db(database: &str) -> DatabaseLayer {
    let layer = DatabaseLayer::new(
        String::from("mem://"),
        String::new(),
        String::new(),
        String::from("test"),
        String::from(database),
    )
    .await
    .unwrap();

    layer.initialize_schemas(all_schemas()).await.unwrap();

    layer
}

#[tokio::test]
async fn duplicate_emails_are_detected() {
    let db = test_db("users").await;

    db.query()
        .user
        .create(
            String::from("ada@example.com"),
            String::from("Ada"),
            String::from("not-a-real-hash"),
        )
        .await
        .unwrap();

    assert!(db
        .query()
        .user
        .check_if_exists(String::from("ada@example.com"))
        .await
        .unwrap());
    assert!(!db
        .query()
        .user
        .check_if_exists(String::from("grace@example.com"))
        .await
        .unwrap());
}

#[tokio::test]
async fn session_tokens_round_trip_through_their_hash() {
    let db = test_db("sessions").await;

    let user = db
        .query()
        .user
        .create(
            String::from("ada@example.com"),
            String::from("Ada"),
            String::from("not-a-real-hash"),
        )
        .await
        .unwrap();

    let (session, token) = db
        .query()
        .session
        .create(user.id.clone(), true)
        .await
        .unwrap();

    let found = db
        .query()
        .session
        .get_by_token_hash(hash_token(&token))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.id, session.id);
    assert_eq!(found.user_id, user.id);
    assert!(found.authorized);
    assert!(!found.is_expired(Utc::now()));

    db.query()
        .session
        .delete_by_token_hash(hash_token(&token))
        .await
        .unwrap();

    assert!(db
        .query()
        .session
        .get_by_token_hash(hash_token(&token))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn webhook_status_updates_are_keyed_by_order_id() {
    let db = test_db("payments").await;

    let user = db
        .query()
        .user
        .create(
            String::from("ada@example.com"),
            String::from("Ada"),
            String::from("not-a-real-hash"),
        )
        .await
        .unwrap();

    let form = db
        .query()
        .form
        .create(
            user.id.clone(),
            String::from("Feedback"),
            json!([]),
            json!({}),
        )
        .await
        .unwrap();

    let payment = db
        .query()
        .payment
        .create(
            user.id.clone(),
            form.id.clone(),
            String::from("order_123"),
            9900,
            String::from("INR"),
            json!({ "email": "ada@example.com" }),
        )
        .await
        .unwrap();

    assert_eq!(payment.status, PaymentStatus::Pending);

    let updated = db
        .query()
        .payment
        .update_status(
            String::from("order_123"),
            PaymentStatus::Paid,
            String::from("card"),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.status, PaymentStatus::Paid);
    assert_eq!(updated.method, "card");
    assert_eq!(updated.id, payment.id);

    let unknown = db
        .query()
        .payment
        .update_status(
            String::from("order_unknown"),
            PaymentStatus::Paid,
            String::new(),
        )
        .await
        .unwrap();

    assert!(unknown.is_none());

    assert!(PaymentStatus::from_str("refunded").is_err());
}

#[tokio::test]
async fn activation_reuses_the_existing_link() {
    let db = test_db("links").await;

    let user = db
        .query()
        .user
        .create(
            String::from("ada@example.com"),
            String::from("Ada"),
            String::from("not-a-real-hash"),
        )
        .await
        .unwrap();

    let form = db
        .query()
        .form
        .create(
            user.id.clone(),
            String::from("Feedback"),
            json!([]),
            json!({}),
        )
        .await
        .unwrap();

    let payment_id = surrealdb::sql::Thing::from(("payment".to_string(), "p1".to_string()));

    let first = db
        .query()
        .shared_link
        .activate(form.id.clone(), payment_id.clone(), 30)
        .await
        .unwrap();

    // A second paid order re-arms the same link instead of minting a new slug.
    let second = db
        .query()
        .shared_link
        .activate(form.id.clone(), payment_id, 30)
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.slug, second.slug);
    assert!(second.expires_at.0 >= first.expires_at.0);

    let extended = db
        .query()
        .shared_link
        .extend(second.id.clone(), 10)
        .await
        .unwrap()
        .unwrap();

    let expected = second.expires_at.0 + Duration::days(10);
    assert_eq!(extended.expires_at.0, expected);
}

#[tokio::test]
async fn lapsed_links_read_as_expired() {
    let db = test_db("expiry").await;

    let user = db
        .query()
        .user
        .create(
            String::from("ada@example.com"),
            String::from("Ada"),
            String::from("not-a-real-hash"),
        )
        .await
        .unwrap();

    let form = db
        .query()
        .form
        .create(
            user.id.clone(),
            String::from("Feedback"),
            json!([]),
            json!({}),
        )
        .await
        .unwrap();

    let link = db
        .query()
        .shared_link
        .create(form.id.clone(), None, Utc::now() - Duration::days(1))
        .await
        .unwrap();

    let found = db
        .query()
        .shared_link
        .get_by_slug(link.slug.clone())
        .await
        .unwrap()
        .unwrap();

    assert!(found.is_expired(Utc::now()));
}

#[tokio::test]
async fn submissions_accumulate_per_form() {
    let db = test_db("submissions").await;

    let user = db
        .query()
        .user
        .create(
            String::from("ada@example.com"),
            String::from("Ada"),
            String::from("not-a-real-hash"),
        )
        .await
        .unwrap();

    let form = db
        .query()
        .form
        .create(
            user.id.clone(),
            String::from("Feedback"),
            json!([]),
            json!({}),
        )
        .await
        .unwrap();

    assert_eq!(
        db.query()
            .submission
            .count_by_form(form.id.clone())
            .await
            .unwrap(),
        0
    );
    assert!(db
        .query()
        .submission
        .last_submitted_at(form.id.clone())
        .await
        .unwrap()
        .is_none());

    for i in 0..3 {
        db.query()
            .submission
            .create(form.id.clone(), json!({ "rating": i }), json!({}))
            .await
            .unwrap();
    }

    assert_eq!(
        db.query()
            .submission
            .count_by_form(form.id.clone())
            .await
            .unwrap(),
        3
    );
    assert!(db
        .query()
        .submission
        .last_submitted_at(form.id)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn form_updates_merge_without_clobbering() {
    let db = test_db("forms").await;

    let user = db
        .query()
        .user
        .create(
            String::from("ada@example.com"),
            String::from("Ada"),
            String::from("not-a-real-hash"),
        )
        .await
        .unwrap();

    let components = json!([{ "id": "field_name", "type": "text", "label": "Name" }]);

    let form = db
        .query()
        .form
        .create(
            user.id.clone(),
            String::from("Feedback"),
            components.clone(),
            json!({}),
        )
        .await
        .unwrap();

    let updated = db
        .query()
        .form
        .update(
            form.id.clone(),
            formbay_api::services::database::form::FormUpdate {
                name: Some(String::from("Customer Feedback")),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Customer Feedback");
    assert_eq!(updated.components, components);
    assert!(updated.updated_at.0 >= form.updated_at.0);
}
