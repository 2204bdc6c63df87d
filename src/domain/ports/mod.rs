use crate::domain::models::{
    query::RegistrationQuery, registration::Registration, session::EventSession,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait SessionCatalog: Send + Sync {
    async fn list_sessions(&self, event_code: &str) -> Result<Vec<EventSession>, AppError>;
}

#[async_trait]
pub trait RegistrationDirectory: Send + Sync {
    async fn list_registrations(
        &self,
        query: &RegistrationQuery,
    ) -> Result<Vec<Registration>, AppError>;
}
