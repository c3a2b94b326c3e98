//! The process monitor service object

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use sysinfo::{
    CpuRefreshKind, MemoryRefreshKind, ProcessRefreshKind, ProcessesToUpdate, RefreshKind, System,
};
use tokio::sync::Mutex;

use crate::config::ServiceConfig;
use crate::control;
use crate::error::{MonitorError, MonitorResult};
use crate::info;
use crate::types::{ProcessInfo, SystemUsage};

/// Lists, samples and terminates processes on the local host
///
/// The process sampler is kept between listings because per-process CPU
/// usage is a delta against the previous refresh. Usage sampling uses its
/// own `System` so a one-second window never holds the sampler lock.
#[derive(Clone)]
pub struct ProcessMonitor {
    system: Arc<Mutex<System>>,
    sample_window: Duration,
    os_timeout: Duration,
}

impl ProcessMonitor {
    pub fn new(config: &ServiceConfig) -> Self {
        Self::with_timings(config.sample_window(), config.os_timeout())
    }

    pub fn with_timings(sample_window: Duration, os_timeout: Duration) -> Self {
        let system = System::new_with_specifics(
            RefreshKind::new()
                .with_cpu(CpuRefreshKind::new())
                .with_memory(MemoryRefreshKind::new().with_ram()),
        );

        Self {
            system: Arc::new(Mutex::new(system)),
            sample_window: sample_window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL),
            os_timeout,
        }
    }

    pub fn sample_window(&self) -> Duration {
        self.sample_window
    }

    /// Snapshot of every readable process, in OS enumeration order
    pub async fn list_processes(&self) -> MonitorResult<Vec<ProcessInfo>> {
        ensure_supported()?;

        let system = Arc::clone(&self.system);
        let processes = self
            .bounded("process enumeration", async move {
                tokio::task::spawn_blocking(move || {
                    let mut sys = system.blocking_lock();
                    sys.refresh_memory_specifics(MemoryRefreshKind::new().with_ram());
                    sys.refresh_processes_specifics(
                        ProcessesToUpdate::All,
                        true,
                        ProcessRefreshKind::new().with_cpu().with_memory(),
                    );
                    info::process::get_processes(&sys)
                })
                .await
                .map_err(MonitorError::from)
            })
            .await?;

        tracing::info!("Found {} processes", processes.len());
        Ok(processes)
    }

    /// Global CPU usage over the sampling window plus current memory usage
    ///
    /// Takes at least `sample_window` to complete.
    pub async fn system_usage(&self) -> MonitorResult<SystemUsage> {
        ensure_supported()?;

        let window = self.sample_window;
        self.bounded("usage sampling", async move {
            // first sample; the window itself is an async sleep, not a blocked thread
            let mut sys = tokio::task::spawn_blocking(|| {
                System::new_with_specifics(
                    RefreshKind::new()
                        .with_cpu(CpuRefreshKind::new().with_cpu_usage())
                        .with_memory(MemoryRefreshKind::new().with_ram()),
                )
            })
            .await?;

            tokio::time::sleep(window).await;

            let usage = tokio::task::spawn_blocking(move || {
                sys.refresh_cpu_usage();
                sys.refresh_memory_specifics(MemoryRefreshKind::new().with_ram());
                info::get_system_usage(&sys)
            })
            .await?;
            Ok(usage)
        })
        .await
    }

    /// Send a terminate request to the process named by `pid`
    pub async fn terminate(&self, pid: Option<i64>) -> MonitorResult<u32> {
        let pid = control::validate_pid(pid)?;

        self.bounded("process termination", async move {
            tokio::task::spawn_blocking(move || control::terminate(pid)).await?
        })
        .await?;

        tracing::info!(pid, "Process terminated");
        Ok(pid)
    }

    async fn bounded<T, F>(&self, what: &str, fut: F) -> MonitorResult<T>
    where
        F: Future<Output = MonitorResult<T>>,
    {
        match tokio::time::timeout(self.os_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(MonitorError::internal(format!(
                "{} timed out after {}s",
                what,
                self.os_timeout.as_secs_f32()
            ))),
        }
    }
}

impl Default for ProcessMonitor {
    fn default() -> Self {
        Self::new(&ServiceConfig::default())
    }
}

fn ensure_supported() -> MonitorResult<()> {
    if sysinfo::IS_SUPPORTED_SYSTEM {
        Ok(())
    } else {
        Err(MonitorError::internal(
            "process enumeration is not supported on this platform",
        ))
    }
}
