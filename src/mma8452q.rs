//! MMA8452Q 3-axis, 12-bit digital accelerometer.
//!
//! Only the registers needed for a single polled reading are mapped: the
//! status/data block, `XYZ_DATA_CFG` for the full-scale range and
//! `CTRL_REG1` for the standby/active bit.

use crate::bus::RegisterBus;
use crate::errors::{SensorError, SensorResult};
use serde::Deserialize;
use std::fmt;
use tracing::debug;

/// Default 7-bit address (SA0 pulled low)
pub const DEFAULT_ADDRESS: u8 = 0x1C;

// Register addresses for the MMA8452Q
pub const STATUS: u8 = 0x00;
pub const XYZ_DATA_CFG: u8 = 0x0E;
pub const CTRL_REG1: u8 = 0x2A;

// CTRL_REG1 values: 800 Hz ODR, normal read mode
const CTRL_REG1_STANDBY: u8 = 0x00;
const CTRL_REG1_ACTIVE: u8 = 0x01;

/// Status byte followed by X, Y, Z as MSB/LSB pairs
pub const SAMPLE_LEN: usize = 7;

/// Full-scale measurement range selected through `XYZ_DATA_CFG`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum FullScale {
    #[default]
    #[serde(rename = "2g")]
    G2,
    #[serde(rename = "4g")]
    G4,
    #[serde(rename = "8g")]
    G8,
}

impl FullScale {
    /// Value of the FS bits in `XYZ_DATA_CFG` (high-pass output disabled)
    pub fn register_value(self) -> u8 {
        match self {
            FullScale::G2 => 0x00,
            FullScale::G4 => 0x01,
            FullScale::G8 => 0x02,
        }
    }

    /// Counts per g for a 12-bit reading
    pub fn counts_per_g(self) -> f32 {
        match self {
            FullScale::G2 => 1024.0,
            FullScale::G4 => 512.0,
            FullScale::G8 => 256.0,
        }
    }
}

impl fmt::Display for FullScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FullScale::G2 => write!(f, "+/-2g"),
            FullScale::G4 => write!(f, "+/-4g"),
            FullScale::G8 => write!(f, "+/-8g"),
        }
    }
}

/// One raw read of the data block starting at `STATUS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSample([u8; SAMPLE_LEN]);

impl RawSample {
    pub fn new(bytes: [u8; SAMPLE_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a sample from a bus reply, which must be exactly `SAMPLE_LEN` bytes.
    pub fn from_slice(bytes: &[u8]) -> SensorResult<Self> {
        let bytes: [u8; SAMPLE_LEN] = bytes.try_into().map_err(|_| SensorError::LengthMismatch {
            expected: SAMPLE_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(bytes))
    }

    pub fn status(&self) -> u8 {
        self.0[0]
    }

    pub fn bytes(&self) -> &[u8; SAMPLE_LEN] {
        &self.0
    }
}

/// Signed acceleration in device counts
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Acceleration {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Acceleration {
    pub fn in_g(&self, range: FullScale) -> [f32; 3] {
        let scale = range.counts_per_g();
        [
            self.x as f32 / scale,
            self.y as f32 / scale,
            self.z as f32 / scale,
        ]
    }
}

/// Convert one big-endian axis pair into a signed 12-bit count.
///
/// The reading is left-justified, so the low nibble of the LSB is dropped
/// and anything above 2047 is a negative two's-complement value.
pub fn decode_axis(msb: u8, lsb: u8) -> i16 {
    let raw = u16::from_be_bytes([msb, lsb]);
    let magnitude = (raw / 16) as i16;
    if magnitude > 2047 {
        magnitude - 4096
    } else {
        magnitude
    }
}

/// Decode the X/Y/Z pairs at byte offsets (1,2), (3,4), (5,6).
pub fn decode(sample: &RawSample) -> Acceleration {
    let b = sample.bytes();
    Acceleration {
        x: decode_axis(b[1], b[2]),
        y: decode_axis(b[3], b[4]),
        z: decode_axis(b[5], b[6]),
    }
}

pub struct Mma8452q {
    address: u8,
    range: FullScale,
}

impl Mma8452q {
    pub fn new(address: u8, range: FullScale) -> Self {
        Self { address, range }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn range(&self) -> FullScale {
        self.range
    }

    /// Standby, then active, then range.
    ///
    /// The range register is written while the device is already active.
    /// Nothing is read back.
    pub async fn configure<B: RegisterBus + ?Sized>(&self, bus: &mut B) -> SensorResult<()> {
        bus.write_byte(self.address, CTRL_REG1, CTRL_REG1_STANDBY).await?;
        bus.write_byte(self.address, CTRL_REG1, CTRL_REG1_ACTIVE).await?;
        bus.write_byte(self.address, XYZ_DATA_CFG, self.range.register_value()).await?;
        debug!("[mma8452q] configured at {:#04x}, range {}", self.address, self.range);
        Ok(())
    }

    pub async fn read_sample<B: RegisterBus + ?Sized>(&self, bus: &mut B) -> SensorResult<RawSample> {
        let bytes = bus.read_bytes(self.address, STATUS, SAMPLE_LEN).await?;
        let sample = RawSample::from_slice(&bytes)?;
        debug!("[mma8452q] status={:#04x} raw={:02x?}", sample.status(), sample.bytes());
        Ok(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_axis_boundaries() {
        assert_eq!(decode_axis(0x00, 0x00), 0);
        assert_eq!(decode_axis(0x7F, 0xF0), 2047);
        assert_eq!(decode_axis(0x80, 0x00), -2048);
        assert_eq!(decode_axis(0xFF, 0xF0), -1);
    }

    #[test]
    fn test_decode_axis_ignores_low_nibble() {
        assert_eq!(decode_axis(0x00, 0x1F), 1);
        assert_eq!(decode_axis(0x7F, 0xFF), 2047);
        assert_eq!(decode_axis(0xFF, 0xFF), -1);
    }

    #[test]
    fn test_decode_axis_matches_formula_for_every_raw_value() {
        for raw in 0..=u16::MAX {
            let [msb, lsb] = raw.to_be_bytes();
            let magnitude = (raw / 16) as i32;
            let expected = if magnitude > 2047 { magnitude - 4096 } else { magnitude };
            let value = decode_axis(msb, lsb) as i32;
            assert_eq!(value, expected, "raw16={:#06x}", raw);
            assert!((-2048..=2047).contains(&value));
        }
    }

    #[test]
    fn test_decode_sample() {
        let sample = RawSample::new([0x00, 0x01, 0x00, 0x02, 0x00, 0x00, 0x10]);
        assert_eq!(decode(&sample), Acceleration { x: 16, y: 32, z: 1 });
    }

    #[test]
    fn test_decode_ignores_status_byte() {
        let a = RawSample::new([0x00, 0x80, 0x00, 0x7F, 0xF0, 0xFF, 0xF0]);
        let b = RawSample::new([0xFF, 0x80, 0x00, 0x7F, 0xF0, 0xFF, 0xF0]);
        assert_eq!(decode(&a), decode(&b));
        assert_eq!(decode(&a), Acceleration { x: -2048, y: 2047, z: -1 });
    }

    #[test]
    fn test_raw_sample_rejects_wrong_length() {
        match RawSample::from_slice(&[0u8; 6]) {
            Err(SensorError::LengthMismatch { expected, actual }) => {
                assert_eq!(expected, 7);
                assert_eq!(actual, 6);
            }
            other => panic!("expected length mismatch, got {:?}", other),
        }
        assert!(RawSample::from_slice(&[0u8; 8]).is_err());
        assert!(RawSample::from_slice(&[0u8; 7]).is_ok());
    }

    #[test]
    fn test_full_scale_values() {
        assert_eq!(FullScale::default(), FullScale::G2);
        assert_eq!(FullScale::G2.register_value(), 0x00);
        assert_eq!(FullScale::G4.register_value(), 0x01);
        assert_eq!(FullScale::G8.register_value(), 0x02);

        let one_g = Acceleration { x: 1024, y: -512, z: 0 };
        assert_eq!(one_g.in_g(FullScale::G2), [1.0, -0.5, 0.0]);
    }
}
