//! Fixed-point conversion helpers.

use super::GyroRaw;
use super::scale::gyro_udps_per_lsb;
use crate::config::GyroFullScale;

/// Fixed-point number type used for sensor conversions (I32F32).
pub type Fixed = crate::fixed_crate::types::I32F32;

/// Fixed-point gyroscope sample in dps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GyroFixed {
    /// X-axis angular rate in dps.
    pub x: Fixed,
    /// Y-axis angular rate in dps.
    pub y: Fixed,
    /// Z-axis angular rate in dps.
    pub z: Fixed,
}

/// Converts gyroscope raw counts to dps using integer math.
pub fn gyro_to_dps_fixed(raw: GyroRaw, full_scale: GyroFullScale) -> GyroFixed {
    // Scale first: raw * 70_000 does not fit the 32 integer bits.
    let scale = Fixed::from_num(gyro_udps_per_lsb(full_scale)) / Fixed::from_num(1_000_000);
    GyroFixed {
        x: Fixed::from_num(raw.x) * scale,
        y: Fixed::from_num(raw.y) * scale,
        z: Fixed::from_num(raw.z) * scale,
    }
}
