pub mod dashboard;
pub mod presentation;
