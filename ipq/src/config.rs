use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpqConfig {
    /// What-is-my-address echo service queried by `ipq public`
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// Seconds to wait for the public query (0 = no explicit deadline)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log directory for file-based logging; unset logs to stderr
    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_service_url() -> String {
    lookup::DEFAULT_SERVICE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for IpqConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            timeout_secs: default_timeout_secs(),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl IpqConfig {
    /// Load from a TOML file; a missing file falls back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: IpqConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
