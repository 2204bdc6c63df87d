use crate::domain::models::registration::RegistrationStatus;
use crate::domain::models::session::EventSession;
use crate::domain::services::dashboard::DashboardState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Positive,
    Neutral,
}

/// Descriptor handed to the external ticket-verification dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyAction {
    pub session_code: String,
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRow {
    pub name: String,
    pub identifier: String,
    pub account_number: String,
    pub session_code: String,
    pub registered_by: String,
    pub status: RegistrationStatus,
    pub badge: StatusBadge,
    pub verify: VerifyAction,
}

/// View-ready projection of the dashboard state. Pure derivation: holds no
/// state of its own and never triggers a fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub event_name: Option<String>,
    pub selected_session: Option<EventSession>,
    pub selected_session_name: Option<String>,
    pub registered_count: u32,
    pub scanned_count: u32,
    pub current_page: u32,
    pub loading: bool,
    pub rows: Vec<RegistrationRow>,
}

impl DashboardView {
    pub fn project(state: &DashboardState) -> Self {
        let selected_session = state
            .selected_session_code()
            .and_then(|code| state.sessions().iter().find(|s| s.code == code))
            .cloned();

        let verify_session = state.selected_session_code().unwrap_or_default();

        let rows = state
            .registrations()
            .iter()
            .map(|r| RegistrationRow {
                name: r.name.clone(),
                identifier: r.identifier.clone(),
                account_number: r.account_number.clone(),
                session_code: r.session_code.clone(),
                registered_by: r.registered_by.clone(),
                status: r.status,
                badge: if r.status == RegistrationStatus::Fulfilled {
                    StatusBadge::Positive
                } else {
                    StatusBadge::Neutral
                },
                verify: VerifyAction {
                    session_code: verify_session.to_string(),
                    identifier: r.identifier.clone(),
                },
            })
            .collect();

        Self {
            event_name: state.event_name().map(str::to_string),
            registered_count: selected_session
                .as_ref()
                .map(|s| s.registered_seats)
                .unwrap_or(0),
            scanned_count: selected_session
                .as_ref()
                .map(|s| s.scanned_seats)
                .unwrap_or(0),
            selected_session,
            selected_session_name: state.selected_session_name().map(str::to_string),
            current_page: state.current_page(),
            loading: state.loading(),
            rows,
        }
    }
}
