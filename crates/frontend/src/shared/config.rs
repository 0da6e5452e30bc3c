//! Frontend runtime settings.

/// Where the backend lives and how often list pages refetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Backend port on the page's own host
    pub backend_port: u16,
    /// Refetch interval for list pages, milliseconds
    pub refresh_interval_ms: u32,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            backend_port: 5000,
            refresh_interval_ms: contracts::domain::a002_leave_request::REFRESH_INTERVAL_MS,
        }
    }
}

pub fn config() -> FrontendConfig {
    FrontendConfig::default()
}
