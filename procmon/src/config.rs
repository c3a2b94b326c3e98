//! Configuration loading

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file name looked up on disk
pub const CONFIG_FILE: &str = "procmon.toml";

/// Upper bound for the CPU sampling window
const MAX_SAMPLE_WINDOW: Duration = Duration::from_secs(10);

/// Find a config file by walking up the directory tree, then checking global config.
///
/// Search order:
/// 1. Current directory and parent directories (walking up to root)
/// 2. Global config at ~/.config/procmon/
fn find_config_file(filename: &str) -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let candidate = current.join(filename);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    let global_path = dirs::config_dir()?.join("procmon").join(filename);
    global_path.exists().then_some(global_path)
}

/// Service configuration (from procmon.toml, overridable from the command line)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Address to listen on
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// CPU sampling window for the usage endpoint, in milliseconds
    pub sample_window_ms: u64,
    /// Upper bound on any single OS query, in seconds
    pub os_timeout_secs: u64,
    /// Report termination failures with HTTP 200 and an error body
    pub legacy_status_codes: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            sample_window_ms: 1000,
            os_timeout_secs: 5,
            legacy_status_codes: false,
        }
    }
}

impl ServiceConfig {
    /// Load config from procmon.toml
    ///
    /// An explicit path must exist. Without one, the file is searched for
    /// and defaults are used when nothing is found.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match find_config_file(CONFIG_FILE) {
                Some(path) => path,
                None => {
                    tracing::debug!("No {} found, using defaults", CONFIG_FILE);
                    return Ok(Self::default());
                }
            },
        };

        let config = Self::load_from_path(&path)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn sample_window(&self) -> Duration {
        Duration::from_millis(self.sample_window_ms)
    }

    pub fn os_timeout(&self) -> Duration {
        Duration::from_secs(self.os_timeout_secs)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }

    /// Reject settings the monitor cannot honor
    pub fn validate(&self) -> Result<()> {
        let window = self.sample_window();
        if window < sysinfo::MINIMUM_CPU_UPDATE_INTERVAL {
            bail!(
                "sample_window_ms must be at least {} ms",
                sysinfo::MINIMUM_CPU_UPDATE_INTERVAL.as_millis()
            );
        }
        if window > MAX_SAMPLE_WINDOW {
            bail!(
                "sample_window_ms must be at most {} ms",
                MAX_SAMPLE_WINDOW.as_millis()
            );
        }
        if self.os_timeout() <= window {
            bail!("os_timeout_secs must exceed the sampling window");
        }
        self.socket_addr()?;
        Ok(())
    }
}
