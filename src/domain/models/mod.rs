pub mod query;
pub mod registration;
pub mod session;
