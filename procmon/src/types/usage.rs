//! System-wide usage types

use serde::{Deserialize, Serialize};

/// Aggregate CPU and memory utilization of the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemUsage {
    /// Global CPU usage over the sampling window (0-100)
    pub cpu: f32,
    /// Memory in use, excluding reclaimable memory (0-100)
    pub memory: f64,
}
