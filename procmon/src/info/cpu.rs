//! CPU usage collection

use sysinfo::System;

/// Global CPU usage, clamped to 0-100
///
/// Only meaningful once CPU usage has been refreshed twice with at least
/// `sysinfo::MINIMUM_CPU_UPDATE_INTERVAL` in between.
pub fn get_global_cpu_percent(sys: &System) -> f32 {
    clamp_percent(sys.global_cpu_usage())
}

/// Normalize a per-process CPU reading to total machine capacity
///
/// The OS reports a busy process on N cores as N * 100%.
pub fn normalize_process_cpu(raw: f32, logical_cores: usize) -> f32 {
    clamp_percent(raw / logical_cores.max(1) as f32)
}

fn clamp_percent(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
