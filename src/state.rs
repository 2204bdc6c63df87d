use crate::config::Config;
use crate::domain::ports::{RegistrationDirectory, SessionCatalog};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<dyn SessionCatalog>,
    pub directory: Arc<dyn RegistrationDirectory>,
}
