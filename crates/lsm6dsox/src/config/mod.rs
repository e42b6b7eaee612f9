//! Configuration helpers for the LSM6DSOX gyroscope.

pub(crate) mod common;
pub(crate) mod mode;

pub use common::{GyroFullScale, GyroOutputDataRate};
pub use mode::SessionState;
pub(crate) use mode::SessionStateMachine;

/// Gyroscope configuration (full-scale + output data rate).
///
/// Replacing the configuration through
/// [`Lsm6dsox::update_config`](crate::Lsm6dsox::update_config) is the only way
/// the driver changes sensor behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroConfig {
    /// Gyroscope full-scale range.
    pub full_scale: GyroFullScale,
    /// Gyroscope output data rate. `Off` powers the gyroscope down.
    pub odr: GyroOutputDataRate,
}

impl GyroConfig {
    /// Default gyroscope configuration (125 dps, 12.5 Hz).
    pub const DEFAULT: Self = Self {
        full_scale: GyroFullScale::Dps125,
        odr: GyroOutputDataRate::Hz12_5,
    };

    /// Creates a new gyroscope configuration.
    pub const fn new(full_scale: GyroFullScale, odr: GyroOutputDataRate) -> Self {
        Self { full_scale, odr }
    }

    /// Returns a new configuration with the provided full-scale.
    #[must_use]
    pub const fn with_full_scale(self, full_scale: GyroFullScale) -> Self {
        Self { full_scale, ..self }
    }

    /// Returns a new configuration with the provided output data rate.
    #[must_use]
    pub const fn with_odr(self, odr: GyroOutputDataRate) -> Self {
        Self { odr, ..self }
    }

    /// Returns a new configuration with the gyroscope powered down.
    #[must_use]
    pub const fn powered_off(self) -> Self {
        self.with_odr(GyroOutputDataRate::Off)
    }
}

impl Default for GyroConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_125_dps_at_12_5_hz() {
        let config = GyroConfig::default();
        assert_eq!(config.full_scale, GyroFullScale::Dps125);
        assert_eq!(config.odr, GyroOutputDataRate::Hz12_5);
    }

    #[test]
    fn builders_replace_single_fields() {
        let config = GyroConfig::DEFAULT
            .with_full_scale(GyroFullScale::Dps2000)
            .with_odr(GyroOutputDataRate::Hz833);
        assert_eq!(
            config,
            GyroConfig::new(GyroFullScale::Dps2000, GyroOutputDataRate::Hz833)
        );
        assert!(config.powered_off().odr.is_off());
        assert_eq!(config.powered_off().full_scale, GyroFullScale::Dps2000);
    }
}
