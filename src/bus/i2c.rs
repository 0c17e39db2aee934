#[cfg(target_os = "linux")]
use i2cdev::linux::{LinuxI2CDevice, LinuxI2CError};
#[cfg(target_os = "linux")]
use i2cdev::core::I2CDevice;

use async_trait::async_trait;
use super::RegisterBus;
use crate::errors::{SensorError, SensorResult};

/// Error from the Linux I2C character device
#[cfg(target_os = "linux")]
pub type I2CError = LinuxI2CError;

/// Raised when opening an I2C device off Linux
#[cfg(not(target_os = "linux"))]
#[derive(thiserror::Error, Debug)]
#[error("no I2C character device support for '{0}' on this platform")]
pub struct I2CError(String);

/// Largest transfer a single SMBus block read can carry
pub const SMBUS_BLOCK_MAX: usize = 32;

/// Validate a block read length against the SMBus limit.
pub fn block_len(count: usize) -> SensorResult<u8> {
    if count > SMBUS_BLOCK_MAX {
        return Err(SensorError::BlockTooLong { requested: count, max: SMBUS_BLOCK_MAX });
    }
    Ok(count as u8)
}

/// Linux I2C character device (`/dev/i2c-N`)
#[cfg(target_os = "linux")]
pub struct I2CBus {
    path: String,
    device: LinuxI2CDevice,
}

#[cfg(not(target_os = "linux"))]
pub struct I2CBus {
    path: String,
}

impl I2CBus {
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(target_os = "linux")]
impl I2CBus {
    pub fn new(path: &str) -> Result<Self, I2CError> {
        let device = LinuxI2CDevice::new(path, 0)?;
        Ok(Self { path: path.to_string(), device })
    }
}

#[cfg(target_os = "linux")]
#[async_trait]
impl RegisterBus for I2CBus {
    async fn write_byte(&mut self, address: u8, reg: u8, value: u8) -> SensorResult<()> {
        self.device.set_slave_address(address as u16)?;
        self.device.smbus_write_byte_data(reg, value)?;
        Ok(())
    }

    async fn read_bytes(&mut self, address: u8, reg: u8, count: usize) -> SensorResult<Vec<u8>> {
        self.device.set_slave_address(address as u16)?;

        if count == 1 {
            // SMBus read byte data for single byte reads
            let byte = self.device.smbus_read_byte_data(reg)?;
            Ok(vec![byte])
        } else {
            // Reply length is not checked here; callers detect short reads
            let len = block_len(count)?;
            Ok(self.device.smbus_read_i2c_block_data(reg, len)?)
        }
    }
}

#[cfg(not(target_os = "linux"))]
impl I2CBus {
    pub fn new(path: &str) -> Result<Self, I2CError> {
        Err(I2CError(path.to_string()))
    }
}

#[cfg(not(target_os = "linux"))]
#[async_trait]
impl RegisterBus for I2CBus {
    async fn write_byte(&mut self, _address: u8, _reg: u8, _value: u8) -> SensorResult<()> {
        Err(SensorError::Transport { reason: format!("I2C is only supported on Linux ({})", self.path) })
    }

    async fn read_bytes(&mut self, _address: u8, _reg: u8, _count: usize) -> SensorResult<Vec<u8>> {
        Err(SensorError::Transport { reason: format!("I2C is only supported on Linux ({})", self.path) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_len_within_smbus_limit() {
        assert_eq!(block_len(7).unwrap(), 7);
        assert_eq!(block_len(SMBUS_BLOCK_MAX).unwrap(), 32);
    }

    #[test]
    fn test_block_len_rejects_oversized_reads() {
        for count in [33, 256, 263] {
            match block_len(count) {
                Err(SensorError::BlockTooLong { requested, max }) => {
                    assert_eq!(requested, count);
                    assert_eq!(max, 32);
                }
                other => panic!("expected BlockTooLong for {}, got {:?}", count, other),
            }
        }
    }
}
