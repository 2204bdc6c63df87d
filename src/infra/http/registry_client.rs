use crate::config::Config;
use crate::domain::models::{registration::Registration, session::EventSession};
use crate::domain::ports::{RegistrationDirectory, SessionCatalog};
use crate::domain::models::query::RegistrationQuery;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::error;

/// Credentials from the auth collaborator. Always injected through the
/// constructor; the client never reads ambient storage.
#[derive(Clone)]
pub struct AuthContext {
    pub api_key: String,
    pub token: String,
}

pub struct HttpRegistryClient {
    client: Client,
    base_url: String,
    auth: AuthContext,
}

impl HttpRegistryClient {
    pub fn new(base_url: impl Into<String>, auth: AuthContext, timeout: Duration) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        }
    }

    pub fn from_config(config: &Config, token: impl Into<String>) -> Self {
        Self::new(
            config.api_base_url.clone(),
            AuthContext {
                api_key: config.api_key.clone(),
                token: token.into(),
            },
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Every list endpoint wraps its rows in `{"data": [...]}`. A body
    /// where `data` is missing or not an array counts as malformed, as does
    /// any row that fails to deserialize.
    async fn get_list<T: DeserializeOwned>(
        &self,
        url: String,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, AppError> {
        let response = self
            .client
            .get(&url)
            .query(params)
            .header("X-API-KEY", &self.auth.api_key)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.auth.token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!("Registry request to {} failed with {}: {}", url, status, text);
            return Err(AppError::Server(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::Malformed(format!("response body is not JSON: {e}")))?;

        let Some(rows) = body.get("data").and_then(Value::as_array) else {
            error!("Response from {} does not contain a data array: {}", url, body);
            return Err(AppError::Malformed("missing data array".to_string()));
        };

        rows.iter()
            .map(|row| {
                serde_json::from_value(row.clone())
                    .map_err(|e| AppError::Malformed(format!("bad row in data array: {e}")))
            })
            .collect()
    }
}

#[async_trait]
impl SessionCatalog for HttpRegistryClient {
    async fn list_sessions(&self, event_code: &str) -> Result<Vec<EventSession>, AppError> {
        let url = format!("{}/api/v1/events/{}/sessions", self.base_url, event_code);
        self.get_list(url, &[]).await
    }
}

#[async_trait]
impl RegistrationDirectory for HttpRegistryClient {
    async fn list_registrations(
        &self,
        query: &RegistrationQuery,
    ) -> Result<Vec<Registration>, AppError> {
        let url = format!("{}/api/v1/internal/events/registrations", self.base_url);
        let params = [
            ("eventCode", query.event_code.clone()),
            ("sessionCode", query.session_code.clone()),
            ("page", query.page.to_string()),
            ("limit", query.page_size.to_string()),
            ("search", query.search.clone()),
        ];
        self.get_list(url, &params).await
    }
}
