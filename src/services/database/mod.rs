pub mod email_verification;
pub mod form;
pub mod password_reset_request;
pub mod payment;
pub mod payment_link;
pub mod session;
pub mod shared_link;
pub mod sheet_credential;
pub mod submission;
pub mod user;

use surrealdb::{
    engine::any::{connect, Any},
    opt::auth::Root,
    Surreal,
};

#[derive(Clone)]
pub struct DatabaseQuery<'a> {
    pub user: user::UserQuery<'a>,
    pub session: session::SessionQuery<'a>,
    pub email_verification: email_verification::EmailVerificationQuery<'a>,
    pub password_reset_request: password_reset_request::PasswordResetRequestQuery<'a>,
    pub form: form::FormQuery<'a>,
    pub submission: submission::SubmissionQuery<'a>,
    pub payment: payment::PaymentQuery<'a>,
    pub payment_link: payment_link::PaymentLinkQuery<'a>,
    pub shared_link: shared_link::SharedLinkQuery<'a>,
    pub sheet_credential: sheet_credential::SheetCredentialQuery<'a>,
}

#[derive(Clone)]
pub struct DatabaseLayer {
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub db: Surreal<Any>,
}

impl DatabaseLayer {
    pub async fn new(
        url: String,
        username: String,
        password: String,
        namespace: String,
        database: String,
    ) -> Result<Self, surrealdb::Error> {
        let db = connect(url.clone()).await?;

        // The in-memory engine used by the test suite has no root user.
        if !username.is_empty() {
            db.signin(Root {
                username: username.as_str(),
                password: password.as_str(),
            })
            .await?;
        }

        db.use_ns(namespace.clone())
            .use_db(database.clone())
            .await?;

        Ok(Self {
            url,
            namespace,
            database,
            db,
        })
    }

    pub async fn initialize_schemas(&self, schemas: Vec<&str>) -> Result<(), surrealdb::Error> {
        for schema_query in schemas {
            self.db.query(schema_query).await?;
        }

        Ok(())
    }

    pub fn query(&self) -> DatabaseQuery {
        DatabaseQuery {
            user: user::UserQuery::new(&self.db),
            session: session::SessionQuery::new(&self.db),
            email_verification: email_verification::EmailVerificationQuery::new(&self.db),
            password_reset_request: password_reset_request::PasswordResetRequestQuery::new(
                &self.db,
            ),
            form: form::FormQuery::new(&self.db),
            submission: submission::SubmissionQuery::new(&self.db),
            payment: payment::PaymentQuery::new(&self.db),
            payment_link: payment_link::PaymentLinkQuery::new(&self.db),
            shared_link: shared_link::SharedLinkQuery::new(&self.db),
            sheet_credential: sheet_credential::SheetCredentialQuery::new(&self.db),
        }
    }
}
