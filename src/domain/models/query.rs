pub const PAGE_SIZE: u32 = 10;

/// Parameter snapshot for one registrations fetch. The server answers with
/// the page for exactly this combination; the snapshot travels with the
/// request so late responses can be matched against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationQuery {
    pub event_code: String,
    pub session_code: String,
    pub page: u32,
    pub page_size: u32,
    pub search: String,
}
