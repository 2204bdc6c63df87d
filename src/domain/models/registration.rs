use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub identifier: String,
    pub account_number: String,
    pub registered_by: String,
    pub session_code: String,
    pub status: RegistrationStatus,
    // The server embeds the event name in every row; the dashboard reads
    // it off the first row of each page.
    pub event_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStatus {
    Pending,
    Fulfilled,
    #[serde(other)]
    Other,
}

impl RegistrationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "Pending",
            RegistrationStatus::Fulfilled => "Fulfilled",
            RegistrationStatus::Other => "Other",
        }
    }
}
