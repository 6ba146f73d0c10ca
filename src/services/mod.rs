pub mod ai;
pub mod database;
pub mod email;
pub mod payments;
pub mod sheets;
