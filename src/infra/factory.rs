use crate::config::Config;
use crate::domain::ports::{RegistrationDirectory, SessionCatalog};
use crate::infra::http::registry_client::HttpRegistryClient;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

/// Wires the shared HTTP client into both ports. `token` comes from the
/// auth collaborator that owns sign-in and refresh.
pub fn bootstrap_state(config: &Config, token: &str) -> AppState {
    let client = Arc::new(HttpRegistryClient::from_config(config, token));
    info!("Registry client targeting {}", config.api_base_url);

    let catalog: Arc<dyn SessionCatalog> = client.clone();
    let directory: Arc<dyn RegistrationDirectory> = client;

    AppState {
        config: config.clone(),
        catalog,
        directory,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::dashboard::Dashboard;

    #[test]
    fn test_bootstrap_wires_both_ports_to_one_client() {
        let config = Config {
            api_base_url: "http://localhost:9999/".to_string(),
            api_key: "key".to_string(),
            request_timeout_secs: 5,
        };

        let state = bootstrap_state(&config, "token");
        assert_eq!(state.config.api_base_url, "http://localhost:9999/");

        // The dashboard accepts the bootstrapped ports as-is.
        let _dashboard = Dashboard::new("EVT1", state.catalog, state.directory);
    }
}
