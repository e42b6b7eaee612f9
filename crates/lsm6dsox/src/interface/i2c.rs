//! I2C transport adapter for the LSM6DSOX.

use embedded_hal_async::i2c::I2c;

use super::{Lsm6dsoxAddress, Transport};
use crate::error::Error;

/// I2C byte transport.
pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cTransport<I2C> {
    /// Creates a new I2C transport with the given bus and 7-bit address.
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Creates a new I2C transport for one of the SA0-selected addresses.
    pub const fn with_address(i2c: I2C, address: Lsm6dsoxAddress) -> Self {
        Self::new(i2c, address.addr())
    }

    /// Releases the underlying I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Transport for I2cTransport<I2C>
where
    I2C: I2c,
{
    async fn write(&mut self, data: &[u8]) -> Result<usize, Error> {
        self.i2c
            .write(self.address, data)
            .await
            .map_err(|_| Error::Bus)?;
        Ok(data.len())
    }

    async fn read(&mut self, buffer: &mut [u8]) -> Result<usize, Error> {
        self.i2c
            .read(self.address, buffer)
            .await
            .map_err(|_| Error::Bus)?;
        Ok(buffer.len())
    }

    async fn write_read(&mut self, data: &[u8], buffer: &mut [u8]) -> Result<usize, Error> {
        self.i2c
            .write_read(self.address, data, buffer)
            .await
            .map_err(|_| Error::Bus)?;
        Ok(buffer.len())
    }
}
