//! LSM6DSOX register definitions.
//!
//! Only the gyroscope-facing subset of the register map is listed here, plus
//! the bit masks the driver touches. Typed field-sets live in [`fields`].

pub(crate) mod fields;

pub(crate) use fields::{Ctrl2G, Ctrl5C, GyroSelfTestBits, StatusReg};

/// LSM6DSOX register addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Device identifier register.
    WhoAmI = 0x0F,
    /// Gyroscope control register (ODR, full-scale).
    Ctrl2G = 0x11,
    /// Control register 5 (rounding, self-test).
    Ctrl5C = 0x14,
    /// Status register (data-available flags).
    StatusReg = 0x1E,
    /// Gyroscope X-axis low byte, start of the output block.
    OutxLG = 0x22,
}

impl Register {
    /// Returns the register address.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// WHO_AM_I register values.
pub(crate) mod who_am_i {
    /// Expected device identifier.
    pub const EXPECTED: u8 = 0x6C;
}

/// CTRL2_G bit definitions.
pub(crate) mod ctrl2_g {
    /// Gyroscope output data rate selection.
    pub const ODR_G_MASK: u8 = 0b1111_0000;
    /// Gyroscope output data rate shift.
    pub const ODR_G_SHIFT: u8 = 4;
    /// Gyroscope full-scale selection.
    pub const FS_G_MASK: u8 = 0b0000_1100;
    /// Gyroscope full-scale shift.
    pub const FS_G_SHIFT: u8 = 2;
    /// Selects the 125 dps full-scale, overriding FS_G.
    pub const FS_125: u8 = 0b0000_0010;
    /// Reserved, must be preserved.
    #[cfg(test)]
    pub const RESERVED_0: u8 = 0b0000_0001;
}

/// CTRL5_C bit definitions.
pub(crate) mod ctrl5_c {
    /// Rounding on the gyroscope output registers only (ROUNDING = 0b10).
    pub const ROUNDING_GYRO: u8 = 0b0100_0000;
    /// Gyroscope self-test selection.
    pub const ST_G_MASK: u8 = 0b0000_1100;
    /// Gyroscope self-test shift.
    pub const ST_G_SHIFT: u8 = 2;
}

/// STATUS_REG bit definitions.
pub(crate) mod status_reg {
    /// Gyroscope data available.
    pub const GDA: u8 = 0b0000_0010;
}

/// Length of the gyroscope output burst (X, Y, Z; low byte first).
pub(crate) const GYRO_OUT_LEN: usize = 6;
