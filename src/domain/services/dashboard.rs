use crate::domain::models::query::{RegistrationQuery, PAGE_SIZE};
use crate::domain::models::{registration::Registration, session::EventSession};
use crate::domain::ports::{RegistrationDirectory, SessionCatalog};
use crate::error::AppError;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// One issued fetch: the query to run plus the token under which its
/// response must be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: u64,
    pub query: RegistrationQuery,
}

/// State machine behind the registrations screen. Owns every piece of
/// user-driven state and decides when a fetch goes out; it performs no I/O
/// itself. Mutators hand back a `FetchTicket` when the network is needed,
/// and the shell feeds the result back through `apply_registrations`.
///
/// Responses are last-write-wins by issuance order: each ticket carries a
/// monotonically increasing token, and only the most recently issued token
/// is allowed to touch `registrations`.
pub struct DashboardState {
    event_code: String,
    selected_session_code: Option<String>,
    selected_session_name: Option<String>,
    search_query: String,
    current_page: u32,
    registrations: Vec<Registration>,
    sessions: Vec<EventSession>,
    event_name: Option<String>,
    loading: bool,
    last_issued: u64,
}

impl DashboardState {
    pub fn new(event_code: impl Into<String>) -> Self {
        Self {
            event_code: event_code.into(),
            selected_session_code: None,
            selected_session_name: None,
            search_query: String::new(),
            current_page: 1,
            registrations: Vec::new(),
            sessions: Vec::new(),
            event_name: None,
            loading: false,
            last_issued: 0,
        }
    }

    /// Mount-time fetch. No session is selected yet, so this goes out with
    /// an empty session code and the server answers with an empty page.
    /// Parity with the original screen; intentionally not skipped.
    pub fn initialize(&mut self) -> FetchTicket {
        let query = self.current_query();
        self.issue(query)
    }

    /// Selecting a session does NOT reset the current page; a page number
    /// left over from the previous session carries into the new query.
    /// Known quirk, kept on purpose.
    pub fn select_session(&mut self, code: &str, name: &str) -> Option<FetchTicket> {
        self.selected_session_code = Some(code.to_string());
        self.selected_session_name = Some(name.to_string());
        self.plan_refetch()
    }

    /// Updates the search buffer only. Search is explicit: nothing is
    /// fetched until `submit_search`.
    pub fn set_search_query(&mut self, text: &str) {
        self.search_query = text.to_string();
    }

    pub fn submit_search(&mut self) -> Option<FetchTicket> {
        self.current_page = 1;
        self.plan_refetch()
    }

    pub fn reset_search(&mut self) -> Option<FetchTicket> {
        self.search_query.clear();
        self.current_page = 1;
        self.plan_refetch()
    }

    /// Clamps to page 1 from below; no upper bound is enforced beyond what
    /// fits the page counter, the server returns an empty page past the end.
    pub fn go_to_page(&mut self, page: i64) -> Option<FetchTicket> {
        self.current_page = page.clamp(1, i64::from(u32::MAX)) as u32;
        self.plan_refetch()
    }

    pub fn apply_sessions(&mut self, result: Result<Vec<EventSession>, AppError>) {
        match result {
            Ok(sessions) => {
                self.sessions = sessions;
            }
            Err(e) => {
                error!("Error fetching sessions: {:?}", e);
                self.sessions.clear();
            }
        }
    }

    /// Applies a registrations response. Responses whose token is not the
    /// most recently issued one belong to a superseded parameter
    /// combination and are discarded without touching any state.
    pub fn apply_registrations(
        &mut self,
        token: u64,
        result: Result<Vec<Registration>, AppError>,
    ) {
        if token != self.last_issued {
            debug!(
                "Discarding stale registrations response (token {}, latest {})",
                token, self.last_issued
            );
            return;
        }
        match result {
            Ok(rows) => {
                // An empty page leaves the previously displayed event name
                // in place, matching the data source's behavior.
                if let Some(first) = rows.first() {
                    self.event_name = Some(first.event_name.clone());
                }
                self.registrations = rows;
            }
            Err(e) => {
                error!("Error fetching registrations: {:?}", e);
                self.registrations.clear();
            }
        }
        self.loading = false;
    }

    fn plan_refetch(&mut self) -> Option<FetchTicket> {
        match &self.selected_session_code {
            Some(code) if !code.is_empty() => {
                let query = self.query_for(code.clone());
                Some(self.issue(query))
            }
            _ => {
                // No session selected means no registration query is
                // meaningful; clear locally instead of calling the network.
                self.registrations.clear();
                None
            }
        }
    }

    fn current_query(&self) -> RegistrationQuery {
        self.query_for(self.selected_session_code.clone().unwrap_or_default())
    }

    fn query_for(&self, session_code: String) -> RegistrationQuery {
        RegistrationQuery {
            event_code: self.event_code.clone(),
            session_code,
            page: self.current_page,
            page_size: PAGE_SIZE,
            search: self.search_query.clone(),
        }
    }

    fn issue(&mut self, query: RegistrationQuery) -> FetchTicket {
        self.last_issued += 1;
        self.loading = true;
        FetchTicket {
            token: self.last_issued,
            query,
        }
    }

    pub fn event_code(&self) -> &str {
        &self.event_code
    }

    pub fn selected_session_code(&self) -> Option<&str> {
        self.selected_session_code.as_deref()
    }

    pub fn selected_session_name(&self) -> Option<&str> {
        self.selected_session_name.as_deref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub fn sessions(&self) -> &[EventSession] {
        &self.sessions
    }

    pub fn event_name(&self) -> Option<&str> {
        self.event_name.as_deref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }
}

/// Async shell around `DashboardState`. Each mutator locks the state,
/// records the change, and spawns the fetch the state asked for; the
/// spawned task re-locks to apply the response. In-flight requests are
/// never cancelled, superseded ones settle and get discarded by token.
///
/// Mutators return the `JoinHandle` of the spawned fetch so callers can
/// await settlement when they need to.
pub struct Dashboard {
    state: Arc<Mutex<DashboardState>>,
    catalog: Arc<dyn SessionCatalog>,
    directory: Arc<dyn RegistrationDirectory>,
}

impl Dashboard {
    pub fn new(
        event_code: impl Into<String>,
        catalog: Arc<dyn SessionCatalog>,
        directory: Arc<dyn RegistrationDirectory>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(DashboardState::new(event_code))),
            catalog,
            directory,
        }
    }

    /// Loads the session catalog and fires the mount-time registrations
    /// fetch. Returns both fetch handles.
    pub async fn initialize(&self) -> Vec<JoinHandle<()>> {
        let (event_code, ticket) = {
            let mut state = self.state.lock().await;
            (state.event_code().to_string(), state.initialize())
        };

        let catalog = self.catalog.clone();
        let state = self.state.clone();
        let sessions_task = tokio::spawn(async move {
            let result = catalog.list_sessions(&event_code).await;
            state.lock().await.apply_sessions(result);
        });

        vec![sessions_task, self.spawn_fetch(ticket)]
    }

    pub async fn select_session(&self, code: &str, name: &str) -> Option<JoinHandle<()>> {
        let ticket = self.state.lock().await.select_session(code, name);
        ticket.map(|t| self.spawn_fetch(t))
    }

    pub async fn set_search_query(&self, text: &str) {
        self.state.lock().await.set_search_query(text);
    }

    pub async fn submit_search(&self) -> Option<JoinHandle<()>> {
        let ticket = self.state.lock().await.submit_search();
        ticket.map(|t| self.spawn_fetch(t))
    }

    pub async fn reset_search(&self) -> Option<JoinHandle<()>> {
        let ticket = self.state.lock().await.reset_search();
        ticket.map(|t| self.spawn_fetch(t))
    }

    pub async fn go_to_page(&self, page: i64) -> Option<JoinHandle<()>> {
        let ticket = self.state.lock().await.go_to_page(page);
        ticket.map(|t| self.spawn_fetch(t))
    }

    /// Read access for the presentation layer; the closure runs under the
    /// state lock.
    pub async fn read<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        let state = self.state.lock().await;
        f(&state)
    }

    fn spawn_fetch(&self, ticket: FetchTicket) -> JoinHandle<()> {
        let directory = self.directory.clone();
        let state = self.state.clone();
        tokio::spawn(async move {
            let result = directory.list_registrations(&ticket.query).await;
            state.lock().await.apply_registrations(ticket.token, result);
        })
    }
}
