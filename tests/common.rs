use async_trait::async_trait;
use registration_dashboard::domain::models::registration::{Registration, RegistrationStatus};
use registration_dashboard::domain::models::session::EventSession;
use registration_dashboard::domain::ports::{RegistrationDirectory, SessionCatalog};
use registration_dashboard::domain::models::query::RegistrationQuery;
use registration_dashboard::error::AppError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[allow(dead_code)]
pub fn session(code: &str, name: &str, registered: u32, scanned: u32) -> EventSession {
    EventSession {
        code: code.to_string(),
        name: name.to_string(),
        registered_seats: registered,
        scanned_seats: scanned,
    }
}

#[allow(dead_code)]
pub fn reg(name: &str, session_code: &str, event_name: &str) -> Registration {
    Registration {
        name: name.to_string(),
        identifier: format!("{}-id", name),
        account_number: "0000".to_string(),
        registered_by: "staff".to_string(),
        session_code: session_code.to_string(),
        status: RegistrationStatus::Pending,
        event_name: event_name.to_string(),
    }
}

pub struct MockSessionCatalog {
    pub sessions: Vec<EventSession>,
    pub fail_with_status: Option<u16>,
}

#[async_trait]
impl SessionCatalog for MockSessionCatalog {
    async fn list_sessions(&self, _event_code: &str) -> Result<Vec<EventSession>, AppError> {
        match self.fail_with_status {
            Some(status) => Err(AppError::Server(status)),
            None => Ok(self.sessions.clone()),
        }
    }
}

enum MockResponse {
    Rows(Vec<Registration>),
    Status(u16),
}

/// Scripted registration directory. Responses are keyed by session code;
/// a gated session code blocks its response until the test releases it,
/// which is how out-of-order arrivals are staged.
#[derive(Default)]
pub struct MockRegistrationDirectory {
    queries: Mutex<Vec<RegistrationQuery>>,
    responses: Mutex<HashMap<String, MockResponse>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
}

#[allow(dead_code)]
impl MockRegistrationDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(&self, session_code: &str, rows: Vec<Registration>) {
        self.responses
            .lock()
            .unwrap()
            .insert(session_code.to_string(), MockResponse::Rows(rows));
    }

    pub fn fail_with(&self, session_code: &str, status: u16) {
        self.responses
            .lock()
            .unwrap()
            .insert(session_code.to_string(), MockResponse::Status(status));
    }

    pub fn gate(&self, session_code: &str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert(session_code.to_string(), notify.clone());
        notify
    }

    pub fn queries(&self) -> Vec<RegistrationQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegistrationDirectory for MockRegistrationDirectory {
    async fn list_registrations(
        &self,
        query: &RegistrationQuery,
    ) -> Result<Vec<Registration>, AppError> {
        self.queries.lock().unwrap().push(query.clone());

        let gate = self.gates.lock().unwrap().get(&query.session_code).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        match self.responses.lock().unwrap().get(&query.session_code) {
            Some(MockResponse::Rows(rows)) => Ok(rows.clone()),
            Some(MockResponse::Status(status)) => Err(AppError::Server(*status)),
            None => Ok(Vec::new()),
        }
    }
}
