//! Byte transport abstraction and register framing.
//!
//! The driver frames every register access itself: a write is
//! `[address, value]`, a read is `[address]` followed by a burst read of the
//! requested length. A [`Transport`] only moves bytes.

pub(crate) mod address;
pub(crate) mod i2c;
pub(crate) mod spi;

pub use address::Lsm6dsoxAddress;
pub use i2c::I2cTransport;
pub use spi::SpiTransport;

use crate::error::Error;
use crate::register::Register;

/// Byte-level serial transport to the sensor.
///
/// `start`/`stop` bracket a session and default to no-ops for buses that need
/// no setup. Transfer methods report how many bytes actually moved; the driver
/// treats a short count as [`Error::InvalidLength`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Brings the transport up.
    async fn start(&mut self) {}

    /// Tears the transport down.
    async fn stop(&mut self) {}

    /// Writes `data`, returning the number of bytes written.
    async fn write(&mut self, data: &[u8]) -> Result<usize, Error>;

    /// Reads into `buffer`, returning the number of bytes read.
    async fn read(&mut self, buffer: &mut [u8]) -> Result<usize, Error>;

    /// Writes `data` then reads into `buffer`, returning the number of bytes
    /// read.
    ///
    /// Adapters should override this to keep both phases in one bus
    /// transaction (repeated start on I2C, chip select held on SPI).
    async fn write_read(&mut self, data: &[u8], buffer: &mut [u8]) -> Result<usize, Error> {
        let written = self.write(data).await?;
        if written != data.len() {
            return Err(Error::InvalidLength);
        }
        self.read(buffer).await
    }
}

/// Reads `buffer.len()` consecutive registers starting at `reg`.
pub(crate) async fn read_regs<T: Transport>(
    transport: &mut T,
    reg: Register,
    buffer: &mut [u8],
) -> Result<(), Error> {
    if buffer.is_empty() {
        return Err(Error::InvalidLength);
    }
    let read = transport.write_read(&[reg.addr()], buffer).await?;
    if read != buffer.len() {
        return Err(Error::InvalidLength);
    }
    Ok(())
}

/// Reads a single register.
pub(crate) async fn read_reg<T: Transport>(transport: &mut T, reg: Register) -> Result<u8, Error> {
    let mut buffer = [0u8];
    read_regs(transport, reg, &mut buffer).await?;
    Ok(buffer[0])
}

/// Writes a single register.
pub(crate) async fn write_reg<T: Transport>(
    transport: &mut T,
    reg: Register,
    value: u8,
) -> Result<(), Error> {
    let frame = [reg.addr(), value];
    let written = transport.write(&frame).await?;
    if written != frame.len() {
        return Err(Error::InvalidLength);
    }
    Ok(())
}
