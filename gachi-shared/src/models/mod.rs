pub mod errors;
pub mod notifications;
