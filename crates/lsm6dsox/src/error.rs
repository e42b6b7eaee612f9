//! Error type for the LSM6DSOX driver.

/// Error type for LSM6DSOX operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Bus communication error (I2C, SPI, etc.).
    Bus,
    /// Empty transfer requested, or the transport moved fewer bytes than asked.
    InvalidLength,
    /// WHO_AM_I did not match the LSM6DSOX identifier.
    WrongDevice,
    /// The session has not been started.
    Stopped,
    /// The gyroscope output data rate is off.
    GyroPoweredOff,
    /// No fresh gyroscope sample is available yet.
    GyroDataNotReady,
    /// A bounded wait for gyroscope data expired.
    TimedOut,
}
