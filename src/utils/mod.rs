pub mod auth;
pub mod cookies;
pub mod crypto;
pub mod expiry;
pub mod mapping;
pub mod random;
pub mod schemas;
pub mod validation;
