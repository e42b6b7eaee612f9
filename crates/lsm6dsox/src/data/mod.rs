//! Sensor data readout helpers.

#[cfg(feature = "fixed")]
pub(crate) mod fixed;
pub(crate) mod scale;

pub use scale::{ScaleFactor, gyro_dps_per_lsb, gyro_mdps_per_lsb, gyro_to_dps, gyro_udps_per_lsb};

use crate::register::GYRO_OUT_LEN;

/// Raw gyroscope sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroRaw {
    /// X-axis raw count.
    pub x: i16,
    /// Y-axis raw count.
    pub y: i16,
    /// Z-axis raw count.
    pub z: i16,
}

impl GyroRaw {
    /// Creates a raw sample from axis counts.
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Reassembles the OUTX_L_G..OUTZ_H_G burst (low byte first per axis).
    pub(crate) const fn from_le_bytes(bytes: [u8; GYRO_OUT_LEN]) -> Self {
        Self {
            x: i16::from_le_bytes([bytes[0], bytes[1]]),
            y: i16::from_le_bytes([bytes[2], bytes[3]]),
            z: i16::from_le_bytes([bytes[4], bytes[5]]),
        }
    }

    /// Per-axis absolute difference to `other`, in LSB.
    pub(crate) const fn abs_diff(self, other: Self) -> GyroDelta {
        GyroDelta {
            x: self.x.abs_diff(other.x),
            y: self.y.abs_diff(other.y),
            z: self.z.abs_diff(other.z),
        }
    }
}

/// Gyroscope sample in degrees per second.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroDps {
    /// X-axis angular rate in dps.
    pub x: f32,
    /// Y-axis angular rate in dps.
    pub y: f32,
    /// Z-axis angular rate in dps.
    pub z: f32,
}

/// Per-axis magnitude of a change between two raw samples, in LSB.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroDelta {
    /// X-axis delta.
    pub x: u16,
    /// Y-axis delta.
    pub y: u16,
    /// Z-axis delta.
    pub z: u16,
}

/// Running per-axis sum of raw samples, wide enough to never overflow for
/// the sample counts the driver uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) struct GyroAccumulator {
    sum: [i32; 3],
    count: u16,
}

impl GyroAccumulator {
    pub(crate) const fn new() -> Self {
        Self {
            sum: [0; 3],
            count: 0,
        }
    }

    pub(crate) fn push(&mut self, sample: GyroRaw) {
        self.sum[0] += i32::from(sample.x);
        self.sum[1] += i32::from(sample.y);
        self.sum[2] += i32::from(sample.z);
        self.count += 1;
    }

    /// Per-axis mean, truncated toward zero. `None` when empty.
    pub(crate) fn mean(&self) -> Option<GyroRaw> {
        if self.count == 0 {
            return None;
        }
        let count = i32::from(self.count);
        Some(GyroRaw {
            x: (self.sum[0] / count) as i16,
            y: (self.sum[1] / count) as i16,
            z: (self.sum[2] / count) as i16,
        })
    }
}
