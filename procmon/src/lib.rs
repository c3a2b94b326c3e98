//! Process Monitor
//!
//! A small HTTP API for a local dashboard: list the host's processes, sample
//! system-wide CPU/memory usage, and terminate a process by pid.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use procmon::{ProcessMonitor, ServiceConfig};
//!
//! let monitor = ProcessMonitor::new(&ServiceConfig::default());
//! let processes = monitor.list_processes().await?;
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `procmon --port 5000`

pub mod config;
pub mod control;
pub mod error;
pub mod info;
pub mod init;
pub mod monitor;
pub mod types;
pub mod web;

pub use config::ServiceConfig;
pub use error::{ErrorKind, MonitorError, MonitorResult};
pub use monitor::ProcessMonitor;
pub use types::{ProcessInfo, SystemUsage, TerminateRequest, TerminateResponse, TerminateStatus};
