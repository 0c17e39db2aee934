use thiserror::Error;
use crate::bus::i2c::I2CError;

/// Errors raised while talking to the accelerometer
#[derive(Error, Debug)]
pub enum SensorError {
    #[error("I2C communication failed: {0}")]
    I2cError(#[from] I2CError),

    #[error("Bus transport failed: {reason}")]
    Transport { reason: String },

    #[error("Bus '{bus}' not found or unavailable")]
    BusNotFound { bus: String },

    #[error("Sample length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("At least one sample must be requested")]
    NoSamples,

    #[error("SMBus block read of {requested} bytes exceeds the {max}-byte limit")]
    BlockTooLong { requested: usize, max: usize },

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read reader config '{path}': {source}")]
    LoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed reader config: {0}")]
    FormatError(#[from] toml::de::Error),

    #[error("Bad value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Top-level error for a complete reader run
#[derive(Error, Debug)]
pub enum ReaderError {
    #[error(transparent)]
    Sensor(#[from] SensorError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type aliases for convenience
pub type SensorResult<T> = Result<T, SensorError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type ReaderResult<T> = Result<T, ReaderError>;
