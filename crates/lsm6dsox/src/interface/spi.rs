//! SPI transport adapter for the LSM6DSOX.
//!
//! The first byte of every frame is the register address; the adapter sets
//! bit 7 on reads and clears it on writes.

use embedded_hal_async::spi::{Operation, SpiDevice};

use super::Transport;
use crate::error::Error;

/// SPI byte transport (4-wire, mode 3).
pub struct SpiTransport<SPI> {
    spi: SPI,
}

impl<SPI> SpiTransport<SPI> {
    /// Creates a new SPI transport with the given device.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Releases the underlying SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

const SPI_READ_MASK: u8 = 0x80;

const fn spi_addr_read(reg: u8) -> u8 {
    (reg & 0x7F) | SPI_READ_MASK
}

const fn spi_addr_write(reg: u8) -> u8 {
    reg & 0x7F
}

impl<SPI> Transport for SpiTransport<SPI>
where
    SPI: SpiDevice,
{
    async fn write(&mut self, data: &[u8]) -> Result<usize, Error> {
        let Some((&reg, payload)) = data.split_first() else {
            return Ok(0);
        };
        let addr_buf = [spi_addr_write(reg)];
        let mut ops = [Operation::Write(&addr_buf), Operation::Write(payload)];
        self.spi.transaction(&mut ops).await.map_err(|_| Error::Bus)?;
        Ok(data.len())
    }

    async fn read(&mut self, buffer: &mut [u8]) -> Result<usize, Error> {
        self.spi.read(buffer).await.map_err(|_| Error::Bus)?;
        Ok(buffer.len())
    }

    async fn write_read(&mut self, data: &[u8], buffer: &mut [u8]) -> Result<usize, Error> {
        let Some((&reg, payload)) = data.split_first() else {
            return Err(Error::InvalidLength);
        };
        let addr_buf = [spi_addr_read(reg)];
        let mut ops = [
            Operation::Write(&addr_buf),
            Operation::Write(payload),
            Operation::Read(buffer),
        ];
        self.spi.transaction(&mut ops).await.map_err(|_| Error::Bus)?;
        Ok(buffer.len())
    }
}
