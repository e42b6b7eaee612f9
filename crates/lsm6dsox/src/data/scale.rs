//! Scaling helpers for raw gyroscope data.

use super::{GyroDps, GyroRaw};
use crate::config::GyroFullScale;

/// Ratio representing a scale factor without floating-point math.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaleFactor {
    /// Scale numerator.
    pub numerator: i32,
    /// Scale denominator.
    pub denominator: i32,
}

impl ScaleFactor {
    /// Creates a new scale ratio.
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

/// Returns the gyroscope sensitivity in micro-deg/s per LSB.
pub const fn gyro_udps_per_lsb(full_scale: GyroFullScale) -> i32 {
    match full_scale {
        GyroFullScale::Dps125 => 4_375,
        GyroFullScale::Dps250 => 8_750,
        GyroFullScale::Dps500 => 17_500,
        GyroFullScale::Dps1000 => 35_000,
        GyroFullScale::Dps2000 => 70_000,
    }
}

/// Returns the gyroscope scale in milli-deg/s per LSB as a ratio.
pub const fn gyro_mdps_per_lsb(full_scale: GyroFullScale) -> ScaleFactor {
    ScaleFactor::new(gyro_udps_per_lsb(full_scale), 1000)
}

/// Returns the gyroscope scale in deg/s per LSB.
pub fn gyro_dps_per_lsb(full_scale: GyroFullScale) -> f32 {
    gyro_udps_per_lsb(full_scale) as f32 / 1_000_000.0
}

/// Converts gyroscope raw counts to dps for the given full-scale.
///
/// The result is only meaningful if `full_scale` is the one the sample was
/// captured with.
pub fn gyro_to_dps(raw: GyroRaw, full_scale: GyroFullScale) -> GyroDps {
    let mdps = gyro_mdps_per_lsb(full_scale);
    let mdps_per_lsb = mdps.numerator as f32 / mdps.denominator as f32;
    let axis = |count: i16| f32::from(count) * mdps_per_lsb / 1000.0;
    GyroDps {
        x: axis(raw.x),
        y: axis(raw.y),
        z: axis(raw.z),
    }
}
