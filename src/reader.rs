use crate::bus::RegisterBus;
use crate::errors::{SensorError, SensorResult};
use crate::mma8452q::{decode, Acceleration, FullScale, Mma8452q};
use crate::report::report;
use std::io::Write;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

/// Drives one accelerometer through configure, settle, read, decode and report.
pub struct AccelerometerReader<B: RegisterBus> {
    bus: B,
    device: Mma8452q,
    settle: Duration,
}

impl<B: RegisterBus> AccelerometerReader<B> {
    pub fn new(bus: B, address: u8, range: FullScale, settle: Duration) -> Self {
        Self {
            bus,
            device: Mma8452q::new(address, range),
            settle,
        }
    }

    pub fn into_bus(self) -> B {
        self.bus
    }

    pub async fn configure(&mut self) -> SensorResult<()> {
        self.device.configure(&mut self.bus).await
    }

    /// Unconditional wait; the status register is not polled.
    pub async fn settle(&self) {
        debug!("[reader] settling for {:?}", self.settle);
        sleep(self.settle).await;
    }

    pub async fn read(&mut self) -> SensorResult<Acceleration> {
        let sample = self.device.read_sample(&mut self.bus).await?;
        let accel = decode(&sample);
        let [gx, gy, gz] = accel.in_g(self.device.range());
        debug!("[reader] x={} y={} z={} ({:.3}g, {:.3}g, {:.3}g)", accel.x, accel.y, accel.z, gx, gy, gz);
        Ok(accel)
    }

    pub async fn run_once<W: Write + ?Sized>(&mut self, out: &mut W) -> SensorResult<Acceleration> {
        self.run(out, 1, Duration::ZERO).await
    }

    /// Configure and settle once, then report `samples` readings spaced by `interval`.
    ///
    /// Stops at the first failure. Nothing is written for a sample that failed.
    /// `samples` must be at least one; the bus is untouched otherwise.
    pub async fn run<W: Write + ?Sized>(
        &mut self,
        out: &mut W,
        samples: u32,
        interval: Duration,
    ) -> SensorResult<Acceleration> {
        if samples == 0 {
            return Err(SensorError::NoSamples);
        }

        self.configure().await?;
        self.settle().await;

        let mut last = Acceleration::default();
        for n in 0..samples {
            if n > 0 {
                sleep(interval).await;
            }
            last = self.read().await?;
            report(out, &last)?;
        }

        info!("[reader] reported {} sample(s) from {:#04x}", samples, self.device.address());
        Ok(last)
    }
}
