// Public modules
pub mod bus;
pub mod config;
pub mod errors;
pub mod mma8452q;
pub mod reader;
pub mod report;

// Re-export commonly used types
pub use bus::i2c::I2CBus;
pub use bus::RegisterBus;
pub use config::{load_reader_config, ReaderConfig};
pub use errors::{ReaderError, ReaderResult, SensorError, SensorResult};
pub use mma8452q::{Acceleration, FullScale};
pub use reader::AccelerometerReader;

use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize tracing on stderr, leaving stdout for the axis report
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Load the configuration from `config_path` and take the configured number of readings
pub async fn run_reader(config_path: &str) -> ReaderResult<Acceleration> {
    let config_file = Path::new(config_path).join(config::CONFIG_FILE);
    let config = load_reader_config(&config_file)?;
    info!(
        "[config] bus={} address={:#04x} range={} samples={}",
        config.bus, config.address, config.range, config.samples
    );

    let bus = I2CBus::new(&config.bus).map_err(|e| {
        tracing::error!("[i2c] failed to open {}: {}", config.bus, e);
        SensorError::BusNotFound { bus: config.bus.clone() }
    })?;
    info!("[i2c] opened {}", bus.path());

    let mut reader = AccelerometerReader::new(bus, config.address, config.range, config.settle());
    let mut stdout = std::io::stdout();
    let accel = reader.run(&mut stdout, config.samples, config.interval()).await?;
    Ok(accel)
}
