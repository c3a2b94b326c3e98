//! Process termination
//!
//! Looks the target up in the process table, then sends it a polite
//! terminate request. On Unix this is `SIGTERM` through `libc::kill` so the
//! errno can tell a vanished process apart from a privileged one.

use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

use crate::error::{MonitorError, MonitorResult};

/// Check a raw identifier from a request and convert it to an OS pid
///
/// Zero and negative values are rejected: `kill(2)` interprets them as
/// process groups or "every process".
pub fn validate_pid(raw: Option<i64>) -> MonitorResult<u32> {
    let raw = raw.ok_or_else(|| MonitorError::invalid_input("missing required field 'pid'"))?;

    let pid = u32::try_from(raw)
        .ok()
        .filter(|pid| *pid > 0 && i32::try_from(*pid).is_ok())
        .ok_or_else(|| MonitorError::invalid_input(format!("invalid pid: {}", raw)))?;

    if pid == std::process::id() {
        return Err(MonitorError::invalid_input(format!(
            "refusing to terminate the monitor itself (pid={})",
            pid
        )));
    }

    Ok(pid)
}

/// Send a terminate request to `pid`
///
/// Blocking; call from a blocking-capable context.
pub fn terminate(pid: u32) -> MonitorResult<()> {
    let mut sys = System::new();
    let target = Pid::from_u32(pid);
    sys.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[target]),
        true,
        ProcessRefreshKind::new(),
    );

    let process = sys.process(target).ok_or(MonitorError::NotFound { pid })?;
    tracing::info!(pid, name = ?process.name(), "Sending terminate request");

    send_terminate(pid, process)
}

#[cfg(unix)]
fn send_terminate(pid: u32, _process: &sysinfo::Process) -> MonitorResult<()> {
    // pid was checked to fit in a positive i32 by validate_pid
    let rc = unsafe { libc::kill(pid as libc::pid_t, libc::SIGTERM) };
    if rc == 0 {
        return Ok(());
    }

    let err = std::io::Error::last_os_error();
    match err.raw_os_error() {
        Some(libc::ESRCH) => Err(MonitorError::NotFound { pid }),
        Some(libc::EPERM) => Err(MonitorError::PermissionDenied { pid }),
        _ => Err(MonitorError::internal(format!(
            "failed to signal process (pid={}): {}",
            pid, err
        ))),
    }
}

#[cfg(not(unix))]
fn send_terminate(pid: u32, process: &sysinfo::Process) -> MonitorResult<()> {
    match process.kill_with(sysinfo::Signal::Term) {
        Some(true) => Ok(()),
        Some(false) => Err(MonitorError::PermissionDenied { pid }),
        None => Err(MonitorError::internal(
            "terminate signal is not supported on this platform",
        )),
    }
}
