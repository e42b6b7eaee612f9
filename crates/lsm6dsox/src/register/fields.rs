//! Typed field-sets for the control and status registers.
//!
//! Each type wraps the raw register byte so that only the targeted fields
//! change on a read-modify-write; every other bit is carried through
//! untouched.

use super::{ctrl2_g, ctrl5_c, status_reg};
use crate::config::{GyroFullScale, GyroOutputDataRate};

/// CTRL2_G contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct Ctrl2G(u8);

impl Ctrl2G {
    pub(crate) const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub(crate) const fn bits(self) -> u8 {
        self.0
    }

    /// Decodes the full-scale. FS_125 takes precedence over FS_G.
    #[cfg(test)]
    pub(crate) const fn full_scale(self) -> GyroFullScale {
        if self.0 & ctrl2_g::FS_125 != 0 {
            return GyroFullScale::Dps125;
        }
        match (self.0 & ctrl2_g::FS_G_MASK) >> ctrl2_g::FS_G_SHIFT {
            0b00 => GyroFullScale::Dps250,
            0b01 => GyroFullScale::Dps500,
            0b10 => GyroFullScale::Dps1000,
            _ => GyroFullScale::Dps2000,
        }
    }

    /// Decodes the output data rate; reserved codes yield `None`.
    #[cfg(test)]
    pub(crate) const fn output_data_rate(self) -> Option<GyroOutputDataRate> {
        GyroOutputDataRate::from_bits((self.0 & ctrl2_g::ODR_G_MASK) >> ctrl2_g::ODR_G_SHIFT)
    }

    #[must_use]
    pub(crate) const fn with_full_scale(self, full_scale: GyroFullScale) -> Self {
        let (fs_125, fs_g) = full_scale.bits();
        let mut value = self.0 & !(ctrl2_g::FS_125 | ctrl2_g::FS_G_MASK);
        if fs_125 {
            value |= ctrl2_g::FS_125;
        }
        value |= (fs_g << ctrl2_g::FS_G_SHIFT) & ctrl2_g::FS_G_MASK;
        Self(value)
    }

    #[must_use]
    pub(crate) const fn with_output_data_rate(self, odr: GyroOutputDataRate) -> Self {
        let value = (self.0 & !ctrl2_g::ODR_G_MASK)
            | ((odr.bits() << ctrl2_g::ODR_G_SHIFT) & ctrl2_g::ODR_G_MASK);
        Self(value)
    }
}

/// Gyroscope self-test selection (CTRL5_C.ST_G).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum GyroSelfTestBits {
    /// Normal mode.
    Normal,
    /// Positive sign self-test.
    Positive,
    /// Negative sign self-test.
    Negative,
}

impl GyroSelfTestBits {
    pub(crate) const fn bits(self) -> u8 {
        match self {
            Self::Normal => 0b00,
            Self::Positive => 0b01,
            Self::Negative => 0b11,
        }
    }

    /// Reserved encoding 0b10 yields `None`.
    #[cfg(test)]
    const fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0b11 {
            0b00 => Some(Self::Normal),
            0b01 => Some(Self::Positive),
            0b11 => Some(Self::Negative),
            _ => None,
        }
    }
}

/// CTRL5_C contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct Ctrl5C(u8);

impl Ctrl5C {
    pub(crate) const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub(crate) const fn bits(self) -> u8 {
        self.0
    }

    #[cfg(test)]
    pub(crate) const fn gyro_self_test(self) -> Option<GyroSelfTestBits> {
        GyroSelfTestBits::from_bits((self.0 & ctrl5_c::ST_G_MASK) >> ctrl5_c::ST_G_SHIFT)
    }

    /// Whether burst reads of the gyroscope outputs wrap around.
    #[cfg(test)]
    pub(crate) const fn gyro_rounding(self) -> bool {
        self.0 & ctrl5_c::ROUNDING_GYRO != 0
    }

    #[must_use]
    pub(crate) const fn with_gyro_self_test(self, self_test: GyroSelfTestBits) -> Self {
        let value = (self.0 & !ctrl5_c::ST_G_MASK)
            | ((self_test.bits() << ctrl5_c::ST_G_SHIFT) & ctrl5_c::ST_G_MASK);
        Self(value)
    }

    #[must_use]
    pub(crate) const fn with_gyro_rounding(self, enable: bool) -> Self {
        if enable {
            Self(self.0 | ctrl5_c::ROUNDING_GYRO)
        } else {
            Self(self.0 & !ctrl5_c::ROUNDING_GYRO)
        }
    }
}

/// STATUS_REG contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct StatusReg(u8);

impl StatusReg {
    pub(crate) const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub(crate) const fn gyro_data_available(self) -> bool {
        self.0 & status_reg::GDA != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FULL_SCALES: [GyroFullScale; 5] = [
        GyroFullScale::Dps125,
        GyroFullScale::Dps250,
        GyroFullScale::Dps500,
        GyroFullScale::Dps1000,
        GyroFullScale::Dps2000,
    ];

    #[test]
    fn ctrl2_round_trip_preserves_reserved_bit() {
        for fs in ALL_FULL_SCALES {
            for odr in GyroOutputDataRate::ALL {
                let reg = Ctrl2G::from_bits(ctrl2_g::RESERVED_0)
                    .with_full_scale(fs)
                    .with_output_data_rate(odr);
                let decoded = Ctrl2G::from_bits(reg.bits());

                assert_eq!(decoded.full_scale(), fs);
                assert_eq!(decoded.output_data_rate(), Some(odr));
                assert_eq!(reg.bits() & ctrl2_g::RESERVED_0, ctrl2_g::RESERVED_0);
            }
        }
    }

    #[test]
    fn ctrl2_wire_values_match_datasheet() {
        let reg = Ctrl2G::from_bits(0)
            .with_full_scale(GyroFullScale::Dps2000)
            .with_output_data_rate(GyroOutputDataRate::Hz104);
        assert_eq!(reg.bits(), 0b0100_1100);

        let reg = reg.with_full_scale(GyroFullScale::Dps125);
        assert_eq!(reg.bits(), 0b0100_0010);
    }

    #[test]
    fn ctrl2_fs_125_overrides_fs_g() {
        let reg = Ctrl2G::from_bits(ctrl2_g::FS_125 | ctrl2_g::FS_G_MASK);
        assert_eq!(reg.full_scale(), GyroFullScale::Dps125);
    }

    #[test]
    fn ctrl2_reserved_odr_code_decodes_to_none() {
        let reg = Ctrl2G::from_bits(0b1011_0000);
        assert_eq!(reg.output_data_rate(), None);
    }

    #[test]
    fn ctrl5_self_test_only_touches_st_g() {
        // XL_ULP_EN, ROUNDING_STATUS and ST_XL belong to other channels.
        let untouched = 0b1001_0001;
        let reg = Ctrl5C::from_bits(untouched).with_gyro_self_test(GyroSelfTestBits::Negative);

        assert_eq!(reg.gyro_self_test(), Some(GyroSelfTestBits::Negative));
        assert_eq!(reg.bits() & !ctrl5_c::ST_G_MASK, untouched);

        let reg = reg.with_gyro_self_test(GyroSelfTestBits::Normal);
        assert_eq!(reg.bits(), untouched);
    }

    #[test]
    fn ctrl5_self_test_codes() {
        let positive = Ctrl5C::from_bits(0).with_gyro_self_test(GyroSelfTestBits::Positive);
        let negative = Ctrl5C::from_bits(0).with_gyro_self_test(GyroSelfTestBits::Negative);
        assert_eq!(positive.bits(), 0b0000_0100);
        assert_eq!(negative.bits(), 0b0000_1100);
        assert_eq!(Ctrl5C::from_bits(0b0000_1000).gyro_self_test(), None);
    }

    #[test]
    fn ctrl5_rounding_toggle_preserves_other_bits() {
        // Accelerometer-only rounding plus both ST_G bits.
        let base = 0b0010_0000 | ctrl5_c::ST_G_MASK;
        let on = Ctrl5C::from_bits(base).with_gyro_rounding(true);
        assert!(on.gyro_rounding());
        assert_eq!(on.bits(), base | ctrl5_c::ROUNDING_GYRO);

        let off = on.with_gyro_rounding(false);
        assert!(!off.gyro_rounding());
        assert_eq!(off.bits(), base);
    }

    #[test]
    fn status_flags_decode() {
        // TDA and XLDA set alongside, and alone.
        assert!(StatusReg::from_bits(status_reg::GDA | 0b0000_0101).gyro_data_available());
        assert!(!StatusReg::from_bits(0b0000_0101).gyro_data_available());
    }
}
