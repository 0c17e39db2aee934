use crate::errors::{ConfigError, ConfigResult};
use crate::mma8452q::{FullScale, DEFAULT_ADDRESS};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE: &str = "mma8452q.toml";

/// Reader settings; every field is optional in the TOML file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderConfig {
    /// I2C character device, e.g. `/dev/i2c-1`
    pub bus: String,
    /// 7-bit device address
    pub address: u8,
    pub range: FullScale,
    pub settle_ms: u64,
    /// Number of read/decode/report cycles
    pub samples: u32,
    pub interval_ms: u64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            bus: "/dev/i2c-1".to_string(),
            address: DEFAULT_ADDRESS,
            range: FullScale::G2,
            settle_ms: 500,
            samples: 1,
            interval_ms: 500,
        }
    }
}

impl ReaderConfig {
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.address > 0x7F {
            return Err(ConfigError::InvalidValue {
                field: "address".to_string(),
                reason: format!("{:#04x} is not a 7-bit address", self.address),
            });
        }
        if self.samples == 0 {
            return Err(ConfigError::InvalidValue {
                field: "samples".to_string(),
                reason: "at least one sample is required".to_string(),
            });
        }
        if self.bus.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "bus".to_string(),
                reason: "bus path must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Parse and validate a TOML document
pub fn parse_reader_config(content: &str) -> ConfigResult<ReaderConfig> {
    let parsed: ReaderConfig = toml::from_str(content)?;
    parsed.validate()?;
    Ok(parsed)
}

/// Load config from a TOML file; a missing file yields the defaults
pub fn load_reader_config(path: &Path) -> ConfigResult<ReaderConfig> {
    match fs::read_to_string(path) {
        Ok(content) => parse_reader_config(&content),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(ReaderConfig::default()),
        Err(e) => Err(ConfigError::LoadError {
            path: path.display().to_string(),
            source: e,
        }),
    }
}
