use serde::{Deserialize, Serialize};

/// A scheduled sub-event with its own registration and scan counters.
/// The counters are advisory server-side aggregates; the client never
/// checks `scanned_seats <= registered_seats`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventSession {
    pub code: String,
    pub name: String,
    pub registered_seats: u32,
    pub scanned_seats: u32,
}
