//! Configuration management for the GOST key methods.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PmethConfig {
    /// Short names of the key methods to register (e.g. `gost2012_256`).
    pub methods: Vec<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub level: String,
    /// Emit JSON lines instead of human readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl PmethConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        tracing::debug!(methods = config.methods.len(), "configuration loaded");
        Ok(config)
    }

    /// Every method enabled, `info` logging.
    pub fn default_config() -> Self {
        Self {
            methods: vec![
                "gost94".to_string(),
                "gost2001".to_string(),
                "gost2012_256".to_string(),
                "gost2012_512".to_string(),
                "gost-mac".to_string(),
                "gost-mac-12".to_string(),
            ],
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for PmethConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
