/// Gyroscope full-scale range selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroFullScale {
    /// +/-125 deg/s.
    Dps125,
    /// +/-250 deg/s.
    Dps250,
    /// +/-500 deg/s.
    Dps500,
    /// +/-1000 deg/s.
    Dps1000,
    /// +/-2000 deg/s.
    Dps2000,
}

impl GyroFullScale {
    /// Returns the full-scale range in deg/s.
    pub const fn dps(self) -> u16 {
        match self {
            Self::Dps125 => 125,
            Self::Dps250 => 250,
            Self::Dps500 => 500,
            Self::Dps1000 => 1000,
            Self::Dps2000 => 2000,
        }
    }

    /// Returns the CTRL2_G `(FS_125, FS_G)` encoding.
    pub(crate) const fn bits(self) -> (bool, u8) {
        match self {
            Self::Dps125 => (true, 0b00),
            Self::Dps250 => (false, 0b00),
            Self::Dps500 => (false, 0b01),
            Self::Dps1000 => (false, 0b10),
            Self::Dps2000 => (false, 0b11),
        }
    }
}

/// Gyroscope output data rate selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroOutputDataRate {
    /// Gyroscope powered down.
    Off,
    /// 12.5 Hz output data rate.
    Hz12_5,
    /// 26 Hz output data rate.
    Hz26,
    /// 52 Hz output data rate.
    Hz52,
    /// 104 Hz output data rate.
    Hz104,
    /// 208 Hz output data rate.
    Hz208,
    /// 416 Hz output data rate.
    Hz416,
    /// 833 Hz output data rate.
    Hz833,
    /// 1666 Hz output data rate.
    Hz1666,
    /// 3332 Hz output data rate.
    Hz3332,
    /// 6664 Hz output data rate.
    Hz6664,
}

impl GyroOutputDataRate {
    #[cfg(test)]
    pub(crate) const ALL: [Self; 11] = [
        Self::Off,
        Self::Hz12_5,
        Self::Hz26,
        Self::Hz52,
        Self::Hz104,
        Self::Hz208,
        Self::Hz416,
        Self::Hz833,
        Self::Hz1666,
        Self::Hz3332,
        Self::Hz6664,
    ];

    /// Returns the output data rate in milli-hertz (0 when off).
    pub const fn hz_milli(self) -> u32 {
        match self {
            Self::Off => 0,
            Self::Hz12_5 => 12_500,
            Self::Hz26 => 26_000,
            Self::Hz52 => 52_000,
            Self::Hz104 => 104_000,
            Self::Hz208 => 208_000,
            Self::Hz416 => 416_000,
            Self::Hz833 => 833_000,
            Self::Hz1666 => 1_666_000,
            Self::Hz3332 => 3_332_000,
            Self::Hz6664 => 6_664_000,
        }
    }

    /// Returns true when the gyroscope is powered down.
    pub const fn is_off(self) -> bool {
        matches!(self, Self::Off)
    }

    /// Returns the longest wait for a fresh sample, in milliseconds.
    ///
    /// One and a quarter sample periods, rounded, never below 1 ms while the
    /// gyroscope runs.
    pub const fn data_ready_timeout_ms(self) -> u32 {
        match self {
            Self::Off => 0,
            Self::Hz12_5 => 100,
            Self::Hz26 => 48,
            Self::Hz52 => 24,
            Self::Hz104 => 12,
            Self::Hz208 => 6,
            Self::Hz416 => 3,
            Self::Hz833 => 2,
            Self::Hz1666 | Self::Hz3332 | Self::Hz6664 => 1,
        }
    }

    /// Returns the CTRL2_G ODR_G bits.
    pub(crate) const fn bits(self) -> u8 {
        match self {
            Self::Off => 0b0000,
            Self::Hz12_5 => 0b0001,
            Self::Hz26 => 0b0010,
            Self::Hz52 => 0b0011,
            Self::Hz104 => 0b0100,
            Self::Hz208 => 0b0101,
            Self::Hz416 => 0b0110,
            Self::Hz833 => 0b0111,
            Self::Hz1666 => 0b1000,
            Self::Hz3332 => 0b1001,
            Self::Hz6664 => 0b1010,
        }
    }

    pub(crate) const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0b0000 => Some(Self::Off),
            0b0001 => Some(Self::Hz12_5),
            0b0010 => Some(Self::Hz26),
            0b0011 => Some(Self::Hz52),
            0b0100 => Some(Self::Hz104),
            0b0101 => Some(Self::Hz208),
            0b0110 => Some(Self::Hz416),
            0b0111 => Some(Self::Hz833),
            0b1000 => Some(Self::Hz1666),
            0b1001 => Some(Self::Hz3332),
            0b1010 => Some(Self::Hz6664),
            _ => None,
        }
    }
}
