//! I2C address definitions for the LSM6DSOX.

/// LSM6DSOX I2C addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lsm6dsoxAddress {
    /// Primary address: 0x6A (SA0 = low).
    #[default]
    Primary,
    /// Secondary address: 0x6B (SA0 = high).
    Secondary,
}

impl Lsm6dsoxAddress {
    /// Returns the 7-bit I2C address.
    pub const fn addr(self) -> u8 {
        match self {
            Self::Primary => 0x6A,
            Self::Secondary => 0x6B,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sa0_selects_address() {
        assert_eq!(Lsm6dsoxAddress::Primary.addr(), 0x6A);
        assert_eq!(Lsm6dsoxAddress::Secondary.addr(), 0x6B);
        assert_eq!(Lsm6dsoxAddress::default(), Lsm6dsoxAddress::Primary);
    }
}
