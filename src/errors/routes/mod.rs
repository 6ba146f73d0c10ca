pub mod ai;
pub mod auth;
pub mod forms;
pub mod links;
pub mod payments;
pub mod sheets;
pub mod submissions;

pub use ai::AiError;
pub use forms::FormError;
pub use links::LinkError;
pub use payments::PaymentError;
pub use sheets::SheetsError;
pub use submissions::SubmissionError;
