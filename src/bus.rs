pub mod i2c;

use async_trait::async_trait;
use crate::errors::SensorResult;

/// Byte-oriented register transport for a device on a shared bus.
///
/// Every call carries the 7-bit device address so one handle can reach any
/// device on the bus. Implementations report a missing acknowledge or an
/// unavailable bus as an error; they never retry.
#[async_trait]
pub trait RegisterBus: Send {
    /// Write a single byte to one register.
    async fn write_byte(&mut self, address: u8, reg: u8, value: u8) -> SensorResult<()>;

    /// Read `count` bytes sequentially starting at `reg`.
    async fn read_bytes(&mut self, address: u8, reg: u8, count: usize) -> SensorResult<Vec<u8>>;
}
