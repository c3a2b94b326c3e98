//! Shared application state

use crate::config::ServiceConfig;
use crate::monitor::ProcessMonitor;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Process monitor shared by every handler
    pub monitor: ProcessMonitor,
    /// Report termination failures with HTTP 200
    pub legacy_status_codes: bool,
}

impl AppState {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            monitor: ProcessMonitor::new(config),
            legacy_status_codes: config.legacy_status_codes,
        }
    }
}
