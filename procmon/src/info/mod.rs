//! Readers that turn a refreshed `System` into response types

pub mod cpu;
pub mod memory;
pub mod process;

use sysinfo::System;

use crate::types::SystemUsage;

/// Build a usage reading from a system whose CPU usage has been refreshed twice
pub fn get_system_usage(sys: &System) -> SystemUsage {
    SystemUsage {
        cpu: cpu::get_global_cpu_percent(sys),
        memory: memory::get_memory_percent(sys),
    }
}
