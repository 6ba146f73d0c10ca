pub const USER_SCHEMA: &str = r#"
    DEFINE TABLE user SCHEMAFULL;

    DEFINE FIELD email ON TABLE user TYPE string;
    DEFINE FIELD name ON TABLE user TYPE string DEFAULT "";
    DEFINE FIELD email_verified ON TABLE user TYPE bool DEFAULT false;
    DEFINE FIELD password_hash ON TABLE user TYPE string;
    DEFINE FIELD created_at ON TABLE user TYPE datetime;

    DEFINE INDEX user_email ON TABLE user COLUMNS email UNIQUE;
"#;

pub const SESSION_SCHEMA: &str = r#"
    DEFINE TABLE session SCHEMAFULL;

    DEFINE FIELD authorized ON TABLE session TYPE bool;
    DEFINE FIELD created_at ON TABLE session TYPE datetime;
    DEFINE FIELD expires_at ON TABLE session TYPE datetime;

    DEFINE FIELD user ON TABLE session TYPE record<user>;
"#;

pub const EMAIL_VERIFICATION_SCHEMA: &str = r#"
    DEFINE TABLE email_verification SCHEMAFULL;

    DEFINE FIELD code ON TABLE email_verification TYPE string;
    DEFINE FIELD email ON TABLE email_verification TYPE string;
    DEFINE FIELD created_at ON TABLE email_verification TYPE datetime;
    DEFINE FIELD expires_at ON TABLE email_verification TYPE datetime;

    DEFINE FIELD user ON TABLE email_verification TYPE record<user>;
"#;

pub const PASSWORD_RESET_REQUEST_SCHEMA: &str = r#"
    DEFINE TABLE password_reset_request SCHEMAFULL;

    DEFINE FIELD created_at ON TABLE password_reset_request TYPE datetime;
    DEFINE FIELD expires_at ON TABLE password_reset_request TYPE datetime;

    DEFINE FIELD user ON TABLE password_reset_request TYPE record<user>;
"#;

pub const FORM_SCHEMA: &str = r#"
    DEFINE TABLE form SCHEMAFULL;

    DEFINE FIELD name ON TABLE form TYPE string;
    DEFINE FIELD components ON TABLE form FLEXIBLE TYPE array DEFAULT [];
    DEFINE FIELD theme ON TABLE form FLEXIBLE TYPE object DEFAULT {};
    DEFINE FIELD sheet_config ON TABLE form FLEXIBLE TYPE option<object>;
    DEFINE FIELD created_at ON TABLE form TYPE datetime;
    DEFINE FIELD updated_at ON TABLE form TYPE datetime;

    DEFINE FIELD owner ON TABLE form TYPE record<user>;
"#;

pub const SUBMISSION_SCHEMA: &str = r#"
    DEFINE TABLE submission SCHEMAFULL;

    DEFINE FIELD response ON TABLE submission FLEXIBLE TYPE object DEFAULT {};
    DEFINE FIELD analytics ON TABLE submission FLEXIBLE TYPE object DEFAULT {};
    DEFINE FIELD created_at ON TABLE submission TYPE datetime;

    DEFINE FIELD form ON TABLE submission TYPE record<form>;
"#;

pub const PAYMENT_SCHEMA: &str = r#"
    DEFINE TABLE payment SCHEMAFULL;

    DEFINE FIELD order_id ON TABLE payment TYPE string;
    DEFINE FIELD amount ON TABLE payment TYPE int;
    DEFINE FIELD currency ON TABLE payment TYPE string;
    DEFINE FIELD status ON TABLE payment TYPE string DEFAULT "pending";
    DEFINE FIELD customer ON TABLE payment FLEXIBLE TYPE object DEFAULT {};
    DEFINE FIELD method ON TABLE payment TYPE string DEFAULT "";
    DEFINE FIELD created_at ON TABLE payment TYPE datetime;
    DEFINE FIELD updated_at ON TABLE payment TYPE datetime;

    DEFINE FIELD owner ON TABLE payment TYPE record<user>;
    DEFINE FIELD form ON TABLE payment TYPE record<form>;

    DEFINE INDEX payment_order_id ON TABLE payment COLUMNS order_id UNIQUE;
"#;

pub const PAYMENT_LINK_SCHEMA: &str = r#"
    DEFINE TABLE payment_link SCHEMAFULL;

    DEFINE FIELD slug ON TABLE payment_link TYPE string;
    DEFINE FIELD expires_at ON TABLE payment_link TYPE datetime;
    DEFINE FIELD created_at ON TABLE payment_link TYPE datetime;

    DEFINE FIELD payment ON TABLE payment_link TYPE record<payment>;

    DEFINE INDEX payment_link_slug ON TABLE payment_link COLUMNS slug UNIQUE;
"#;

pub const SHARED_LINK_SCHEMA: &str = r#"
    DEFINE TABLE shared_link SCHEMAFULL;

    DEFINE FIELD slug ON TABLE shared_link TYPE string;
    DEFINE FIELD expires_at ON TABLE shared_link TYPE datetime;
    DEFINE FIELD created_at ON TABLE shared_link TYPE datetime;

    DEFINE FIELD form ON TABLE shared_link TYPE record<form>;
    DEFINE FIELD payment ON TABLE shared_link TYPE option<record<payment>>;

    DEFINE INDEX shared_link_slug ON TABLE shared_link COLUMNS slug UNIQUE;
"#;

pub const SHEET_CREDENTIAL_SCHEMA: &str = r#"
    DEFINE TABLE sheet_credential SCHEMAFULL;

    DEFINE FIELD access_token ON TABLE sheet_credential TYPE string;
    DEFINE FIELD refresh_token ON TABLE sheet_credential TYPE option<string>;
    DEFINE FIELD expires_at ON TABLE sheet_credential TYPE datetime;
    DEFINE FIELD created_at ON TABLE sheet_credential TYPE datetime;

    DEFINE FIELD user ON TABLE sheet_credential TYPE record<user>;
"#;

pub fn all_schemas() -> Vec<&'static str> {
    vec![
        USER_SCHEMA,
        SESSION_SCHEMA,
        EMAIL_VERIFICATION_SCHEMA,
        PASSWORD_RESET_REQUEST_SCHEMA,
        FORM_SCHEMA,
        SUBMISSION_SCHEMA,
        PAYMENT_SCHEMA,
        PAYMENT_LINK_SCHEMA,
        SHARED_LINK_SCHEMA,
        SHEET_CREDENTIAL_SCHEMA,
    ]
}
