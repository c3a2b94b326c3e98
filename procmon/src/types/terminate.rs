//! Termination request and result types

use serde::{Deserialize, Serialize};

/// Body of a termination request
///
/// `pid` is optional so a missing field reaches the handler and is reported
/// as invalid input instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TerminateRequest {
    pub pid: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminateStatus {
    Success,
    Error,
}

/// Outcome of a termination request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminateResponse {
    pub status: TerminateStatus,
    pub message: String,
}

impl TerminateResponse {
    pub fn terminated(pid: u32) -> Self {
        Self {
            status: TerminateStatus::Success,
            message: format!("Process {} terminated.", pid),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: TerminateStatus::Error,
            message: message.into(),
        }
    }
}
