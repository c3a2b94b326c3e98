//! Process snapshot types

use serde::{Deserialize, Serialize};

/// A single entry of the process table, read at request time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessInfo {
    /// OS process identifier
    pub pid: u32,
    /// Process name as reported by the OS
    pub name: String,
    /// CPU usage since the previous sample, normalized to total capacity (0-100)
    pub cpu_percent: f32,
    /// Resident memory as a share of total physical memory (0-100)
    pub memory_percent: f64,
}
