//! Process table snapshot

use sysinfo::{Process, ProcessStatus, System, ThreadKind};

use super::{cpu, memory};
use crate::types::ProcessInfo;

/// Read every process from a refreshed system, in table order
///
/// Entries that vanished during the refresh, userland threads of another
/// process and processes whose attributes could not be read are skipped.
/// Kernel threads are processes in their own right and stay in the list.
pub fn get_processes(sys: &System) -> Vec<ProcessInfo> {
    let total_memory = sys.total_memory();
    let logical_cores = sys.cpus().len();

    sys.processes()
        .values()
        .filter_map(|process| {
            let info = read_process(process, total_memory, logical_cores);
            if info.is_none() {
                tracing::debug!(pid = process.pid().as_u32(), "Skipping unreadable process");
            }
            info
        })
        .collect()
}

fn read_process(process: &Process, total_memory: u64, logical_cores: usize) -> Option<ProcessInfo> {
    if matches!(process.thread_kind(), Some(ThreadKind::Userland))
        || process.status() == ProcessStatus::Dead
    {
        return None;
    }

    let name = process.name().to_string_lossy();
    if name.is_empty() {
        return None;
    }

    Some(ProcessInfo {
        pid: process.pid().as_u32(),
        name: name.into_owned(),
        cpu_percent: cpu::normalize_process_cpu(process.cpu_usage(), logical_cores),
        memory_percent: memory::used_percent(process.memory(), total_memory),
    })
}
