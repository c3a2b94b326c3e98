//! Memory usage collection

use sysinfo::System;

/// Share of physical memory in use, excluding reclaimable memory
pub fn get_memory_percent(sys: &System) -> f64 {
    let total = sys.total_memory();
    let available = sys.available_memory();
    used_percent(total.saturating_sub(available), total)
}

/// Share of `total` taken by `used`, clamped to 0-100
pub fn used_percent(used: u64, total: u64) -> f64 {
    if total > 0 {
        ((used as f64 / total as f64) * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}
