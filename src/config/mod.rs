pub mod printer_config;

use anyhow::{anyhow, bail, ensure, Context, Result};
use tracing::{debug, error, info, trace, warn};

use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

use crate::config::printer_config::PrinterConfigOcto;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub const ENV_CONFIG_PATH: &str = "OCTO_PANEL_CONFIG";
pub const ENV_HOST: &str = "OCTOPRINT_HOST";
pub const ENV_PORT: &str = "OCTOPRINT_PORT";
pub const ENV_API_KEY: &str = "OCTOPRINT_API_KEY";
pub const ENV_POLL_SECS: &str = "OCTO_PANEL_POLL_SECS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub octoprint: PrinterConfigOcto,
    pub poll_interval_secs: u64,
    pub request_timeout_secs: u64,
    pub fullscreen: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            octoprint: PrinterConfigOcto::default(),
            poll_interval_secs: 5,
            request_timeout_secs: 10,
            fullscreen: false,
        }
    }
}

/// getters
impl AppConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// load
impl AppConfig {
    /// Reads the file named by `OCTO_PANEL_CONFIG` (or `config.toml`), then
    /// applies environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = if Path::new(&path).exists() {
            Self::load_from_file(&path)?
        } else {
            warn!("config file not found: {}, using defaults", path);
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        let config = Self::from_toml(&s).with_context(|| format!("parsing config: {}", path.display()))?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = lookup(ENV_HOST) {
            self.octoprint.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.octoprint.port = port
                .parse()
                .with_context(|| format!("invalid {}: {}", ENV_PORT, port))?;
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            self.octoprint.api_key = key;
        }
        if let Some(secs) = lookup(ENV_POLL_SECS) {
            self.poll_interval_secs = secs
                .parse()
                .with_context(|| format!("invalid {}: {}", ENV_POLL_SECS, secs))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.poll_interval_secs > 0, "poll_interval_secs must be positive");
        ensure!(!self.octoprint.host.is_empty(), "octoprint host is empty");
        if self.octoprint.api_key.is_empty() {
            warn!("no OctoPrint API key configured, requests will likely be rejected");
        }
        Ok(())
    }
}
