//! LSM6DSOX gyroscope session.
//!
//! This module provides the public async driver: lifecycle, configuration,
//! sample reads and the factory self-test.

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;
use embedded_hal_async::spi::SpiDevice;

use crate::config::{GyroConfig, GyroFullScale, GyroOutputDataRate, SessionState};
use crate::data::{GyroDps, GyroRaw, gyro_to_dps};
use crate::device::DeviceCore;
use crate::error::Error;
use crate::interface::{I2cTransport, Lsm6dsoxAddress, SpiTransport, Transport};
use crate::self_test::{
    self, RegisterSnapshot, SelfTestMode, SelfTestReport, SelfTestResult, SelfTestStatus,
};

/// LSM6DSOX gyroscope driver.
///
/// The self-test verdict is published into a [`SelfTestStatus`] borrowed for
/// `'s`, so other tasks can watch it while this driver is busy.
pub struct Lsm6dsox<'s, T> {
    core: DeviceCore<T>,
    status: &'s SelfTestStatus,
    last_report: Option<SelfTestReport>,
}

/// I2C type alias for the LSM6DSOX driver.
pub type Lsm6dsoxI2c<'s, I2C> = Lsm6dsox<'s, I2cTransport<I2C>>;
/// SPI type alias for the LSM6DSOX driver.
pub type Lsm6dsoxSpi<'s, SPI> = Lsm6dsox<'s, SpiTransport<SPI>>;

impl<'s, I2C> Lsm6dsox<'s, I2cTransport<I2C>>
where
    I2C: I2c,
{
    /// Creates a new I2C-based driver with the default configuration.
    pub fn new_i2c(i2c: I2C, address: Lsm6dsoxAddress, status: &'s SelfTestStatus) -> Self {
        Self::new(I2cTransport::with_address(i2c, address), status)
    }

    /// Releases the I2C bus, consuming the driver.
    pub fn release_i2c(self) -> I2C {
        self.core.release().release()
    }
}

impl<'s, SPI> Lsm6dsox<'s, SpiTransport<SPI>>
where
    SPI: SpiDevice,
{
    /// Creates a new SPI-based driver with the default configuration.
    pub fn new_spi(spi: SPI, status: &'s SelfTestStatus) -> Self {
        Self::new(SpiTransport::new(spi), status)
    }

    /// Releases the SPI device, consuming the driver.
    pub fn release_spi(self) -> SPI {
        self.core.release().release()
    }
}

impl<'s, T> Lsm6dsox<'s, T>
where
    T: Transport,
{
    /// Creates a stopped driver over `transport` with the default
    /// configuration (125 dps, 12.5 Hz).
    pub fn new(transport: T, status: &'s SelfTestStatus) -> Self {
        Self::with_config(transport, GyroConfig::DEFAULT, status)
    }

    /// Creates a stopped driver that applies `config` on [`start`](Self::start).
    pub fn with_config(transport: T, config: GyroConfig, status: &'s SelfTestStatus) -> Self {
        Self {
            core: DeviceCore::new(transport, config),
            status,
            last_report: None,
        }
    }

    /// Starts the session: opens the transport, checks WHO_AM_I and applies
    /// the cached configuration.
    ///
    /// Returns `Ok(())` without bus traffic if already started. On an
    /// identity mismatch the transport is closed again, the driver stays
    /// stopped and [`Error::WrongDevice`] is returned.
    pub async fn start(&mut self) -> Result<(), Error> {
        self.core.start().await
    }

    /// Powers the gyroscope down and closes the transport.
    ///
    /// The driver is stopped afterwards even if the power-down write failed;
    /// that failure is still returned. A no-op when already stopped.
    pub async fn stop(&mut self) -> Result<(), Error> {
        self.core.stop().await
    }

    /// Returns true between a successful [`start`](Self::start) and
    /// [`stop`](Self::stop).
    pub const fn is_started(&self) -> bool {
        self.core.is_started()
    }

    /// Returns the session's power/data state.
    pub const fn state(&self) -> SessionState {
        self.core.state()
    }

    /// Returns the cached gyroscope configuration.
    pub const fn config(&self) -> GyroConfig {
        self.core.config()
    }

    /// Returns the configured full-scale.
    pub const fn full_scale(&self) -> GyroFullScale {
        self.core.config().full_scale
    }

    /// Returns the configured output data rate.
    pub const fn output_data_rate(&self) -> GyroOutputDataRate {
        self.core.config().odr
    }

    /// Writes a new configuration to the sensor.
    ///
    /// Only full-scale, output data rate and the gyroscope rounding bit are
    /// touched; every other register bit is preserved. The cached
    /// configuration changes only if both register writes succeed.
    pub async fn update_config(&mut self, config: GyroConfig) -> Result<(), Error> {
        self.core.apply_config(config).await
    }

    /// Reads STATUS_REG once and reports whether a gyroscope sample is
    /// available.
    pub async fn is_data_ready(&mut self) -> Result<bool, Error> {
        self.core.is_data_ready().await
    }

    /// Polls for a gyroscope sample for up to `timeout_ms`.
    ///
    /// The flag is always checked at least once. Returns `Ok(false)` if no
    /// sample showed up in time.
    pub async fn is_data_ready_with_timeout<D: DelayNs>(
        &mut self,
        delay: &mut D,
        timeout_ms: u32,
    ) -> Result<bool, Error> {
        self.core.is_data_ready_with_timeout(delay, timeout_ms).await
    }

    /// Polls for a gyroscope sample for one and a quarter sample periods at
    /// the configured output data rate.
    pub async fn is_data_ready_for_current_config<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<bool, Error> {
        self.core.is_data_ready_for_current_config(delay).await
    }

    /// Reads raw gyroscope data (X, Y, Z). Never waits.
    ///
    /// Fails with [`Error::GyroDataNotReady`] if no sample has been observed
    /// since the last configuration change and none is available now.
    pub async fn read_gyro_raw(&mut self) -> Result<GyroRaw, Error> {
        self.core.read_gyro_raw().await
    }

    /// Reads gyroscope data in dps using the configured full-scale.
    pub async fn read_gyro_dps(&mut self) -> Result<GyroDps, Error> {
        let raw = self.core.read_gyro_raw().await?;
        Ok(self.convert_raw_to_dps(raw))
    }

    /// Converts a raw sample to dps using the configured full-scale.
    ///
    /// A sample captured under a different full-scale converts to a wrong
    /// value.
    pub fn convert_raw_to_dps(&self, raw: GyroRaw) -> GyroDps {
        gyro_to_dps(raw, self.core.config().full_scale)
    }

    /// Runs the gyroscope self-test in `mode`.
    ///
    /// [`SelfTestResult::Running`] is published before the first register
    /// access. CTRL2_G and CTRL5_C are restored to their previous values on
    /// every path once they have been captured. On success the verdict
    /// ([`Passed`](SelfTestResult::Passed) or
    /// [`Failed`](SelfTestResult::Failed)) is published and `Ok(())` is
    /// returned; a timeout or bus error publishes
    /// [`None`](SelfTestResult::None) and returns the error.
    pub async fn start_self_test<D: DelayNs>(
        &mut self,
        delay: &mut D,
        mode: SelfTestMode,
    ) -> Result<(), Error> {
        self.core.ensure_started()?;
        self.core.ensure_powered()?;

        self.status.publish(SelfTestResult::Running);
        debug!("lsm6dsox: self-test {} started", mode);

        let snapshot = match RegisterSnapshot::capture(&mut self.core).await {
            Ok(snapshot) => snapshot,
            Err(err) => return Err(self.abort_self_test(err)),
        };
        let measured = self_test::measure(&mut self.core, delay, mode).await;
        let restored = snapshot.restore(&mut self.core).await;

        match (measured, restored) {
            (Ok(report), Ok(())) => {
                debug!(
                    "lsm6dsox: self-test delta x={=u16} y={=u16} z={=u16} passed={=bool}",
                    report.delta.x,
                    report.delta.y,
                    report.delta.z,
                    report.passed
                );
                self.last_report = Some(report);
                self.status.publish(report.result());
                Ok(())
            }
            (Err(err), _) | (Ok(_), Err(err)) => Err(self.abort_self_test(err)),
        }
    }

    /// Returns the most recent self-test verdict.
    pub fn self_test_result(&self) -> SelfTestResult {
        self.status.result()
    }

    /// Returns the measurements behind the most recent completed self-test.
    pub const fn last_self_test_report(&self) -> Option<SelfTestReport> {
        self.last_report
    }

    /// Releases the transport, consuming the driver.
    pub fn release(self) -> T {
        self.core.release()
    }

    fn abort_self_test(&self, err: Error) -> Error {
        warn!("lsm6dsox: self-test aborted: {}", err);
        self.status.publish(SelfTestResult::None);
        err
    }
}
