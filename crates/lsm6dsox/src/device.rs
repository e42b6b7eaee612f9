//! Device core operations for the LSM6DSOX gyroscope.

use embedded_hal_async::delay::DelayNs;

use crate::config::{GyroConfig, GyroOutputDataRate, SessionState, SessionStateMachine};
use crate::data::{GyroAccumulator, GyroRaw};
use crate::error::Error;
use crate::interface::{self, Transport};
use crate::poll::PollPolicy;
use crate::register::{Ctrl2G, Ctrl5C, GYRO_OUT_LEN, Register, StatusReg, who_am_i};

pub(crate) struct DeviceCore<T> {
    transport: T,
    config: GyroConfig,
    state: SessionStateMachine,
    started: bool,
}

impl<T> DeviceCore<T>
where
    T: Transport,
{
    pub(crate) const fn new(transport: T, config: GyroConfig) -> Self {
        Self {
            transport,
            config,
            state: SessionStateMachine::new(),
            started: false,
        }
    }

    pub(crate) const fn config(&self) -> GyroConfig {
        self.config
    }

    pub(crate) const fn state(&self) -> SessionState {
        self.state.state()
    }

    pub(crate) const fn is_started(&self) -> bool {
        self.started
    }

    pub(crate) const fn ensure_started(&self) -> Result<(), Error> {
        if self.started {
            Ok(())
        } else {
            Err(Error::Stopped)
        }
    }

    pub(crate) fn ensure_powered(&self) -> Result<(), Error> {
        if self.state.state() == SessionState::PoweredOff {
            Err(Error::GyroPoweredOff)
        } else {
            Ok(())
        }
    }

    /// Opens the transport, checks the identity and applies the cached
    /// configuration. A no-op when already started.
    pub(crate) async fn start(&mut self) -> Result<(), Error> {
        if self.started {
            return Ok(());
        }

        self.transport.start().await;
        let config = self.config;
        let opened = match self.verify_device().await {
            Ok(()) => self.write_config(config).await,
            Err(err) => Err(err),
        };
        if let Err(err) = opened {
            self.transport.stop().await;
            self.state.stopped();
            return Err(err);
        }
        self.started = true;
        debug!("lsm6dsox: started");
        Ok(())
    }

    /// Powers the gyroscope down and closes the transport. The cached
    /// configuration is kept for the next start.
    pub(crate) async fn stop(&mut self) -> Result<(), Error> {
        if !self.started {
            return Ok(());
        }

        let result = self
            .modify_ctrl2(|reg| reg.with_output_data_rate(GyroOutputDataRate::Off))
            .await;
        self.transport.stop().await;
        self.started = false;
        self.state.stopped();
        debug!("lsm6dsox: stopped");
        result
    }

    pub(crate) async fn verify_device(&mut self) -> Result<(), Error> {
        let who = self.read_reg(Register::WhoAmI).await?;
        if who != who_am_i::EXPECTED {
            warn!("lsm6dsox: unexpected WHO_AM_I {=u8:#x}", who);
            return Err(Error::WrongDevice);
        }
        Ok(())
    }

    /// Writes full-scale and ODR to CTRL2_G, then the gyroscope rounding bit
    /// in CTRL5_C. The cached configuration only changes once both landed.
    pub(crate) async fn apply_config(&mut self, config: GyroConfig) -> Result<(), Error> {
        self.ensure_started()?;
        self.write_config(config).await
    }

    async fn write_config(&mut self, config: GyroConfig) -> Result<(), Error> {
        self.modify_ctrl2(|reg| {
            reg.with_full_scale(config.full_scale)
                .with_output_data_rate(config.odr)
        })
        .await?;
        self.modify_ctrl5(|reg| reg.with_gyro_rounding(!config.odr.is_off()))
            .await?;

        self.config = config;
        self.state.config_applied(config.odr);
        debug!(
            "lsm6dsox: config applied ({=u16} dps, {=u32} mHz)",
            config.full_scale.dps(),
            config.odr.hz_milli()
        );
        Ok(())
    }

    /// Single STATUS_REG read.
    pub(crate) async fn is_data_ready(&mut self) -> Result<bool, Error> {
        self.ensure_started()?;
        self.gyro_data_available().await
    }

    pub(crate) async fn is_data_ready_with_timeout<D: DelayNs>(
        &mut self,
        delay: &mut D,
        timeout_ms: u32,
    ) -> Result<bool, Error> {
        self.ensure_started()?;
        self.wait_data_ready(delay, PollPolicy::new(timeout_ms))
            .await
    }

    pub(crate) async fn is_data_ready_for_current_config<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<bool, Error> {
        self.ensure_started()?;
        let policy = PollPolicy::for_output_data_rate(self.config.odr);
        self.wait_data_ready(delay, policy).await
    }

    /// Reads one sample without waiting. The first read after a
    /// configuration change requires the data-available flag.
    pub(crate) async fn read_gyro_raw(&mut self) -> Result<GyroRaw, Error> {
        self.ensure_started()?;
        match self.state.state() {
            SessionState::PoweredOff => return Err(Error::GyroPoweredOff),
            SessionState::DataNotReady => {
                if !self.gyro_data_available().await? {
                    return Err(Error::GyroDataNotReady);
                }
                self.state.data_observed();
            }
            SessionState::DataReady => {}
        }
        self.read_gyro_output().await
    }

    /// Averages `count` fresh samples, each preceded by its own bounded wait
    /// at the current ODR.
    pub(crate) async fn read_gyro_average<D: DelayNs>(
        &mut self,
        delay: &mut D,
        count: u16,
    ) -> Result<GyroRaw, Error> {
        let policy = PollPolicy::for_output_data_rate(self.config.odr);
        let mut acc = GyroAccumulator::new();
        for _ in 0..count {
            if !self.wait_data_ready(delay, policy).await? {
                return Err(Error::TimedOut);
            }
            acc.push(self.read_gyro_output().await?);
        }
        acc.mean().ok_or(Error::InvalidLength)
    }

    /// Reads one sample and throws it away.
    pub(crate) async fn discard_gyro_sample(&mut self) -> Result<(), Error> {
        self.read_gyro_output().await.map(|_| ())
    }

    pub(crate) async fn read_ctrl2(&mut self) -> Result<Ctrl2G, Error> {
        self.read_reg(Register::Ctrl2G).await.map(Ctrl2G::from_bits)
    }

    pub(crate) async fn read_ctrl5(&mut self) -> Result<Ctrl5C, Error> {
        self.read_reg(Register::Ctrl5C).await.map(Ctrl5C::from_bits)
    }

    /// Read-modify-write of CTRL2_G.
    pub(crate) async fn modify_ctrl2<F>(&mut self, update: F) -> Result<(), Error>
    where
        F: FnOnce(Ctrl2G) -> Ctrl2G,
    {
        let current = self.read_ctrl2().await?;
        self.write_reg(Register::Ctrl2G, update(current).bits())
            .await
    }

    /// Read-modify-write of CTRL5_C.
    pub(crate) async fn modify_ctrl5<F>(&mut self, update: F) -> Result<(), Error>
    where
        F: FnOnce(Ctrl5C) -> Ctrl5C,
    {
        let current = self.read_ctrl5().await?;
        self.write_reg(Register::Ctrl5C, update(current).bits())
            .await
    }

    pub(crate) fn release(self) -> T {
        self.transport
    }

    #[cfg(test)]
    pub(crate) fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub(crate) async fn read_reg(&mut self, reg: Register) -> Result<u8, Error> {
        interface::read_reg(&mut self.transport, reg).await
    }

    pub(crate) async fn write_reg(&mut self, reg: Register, value: u8) -> Result<(), Error> {
        trace!("lsm6dsox: write {=u8:#x} <- {=u8:#x}", reg.addr(), value);
        interface::write_reg(&mut self.transport, reg, value).await
    }

    async fn gyro_data_available(&mut self) -> Result<bool, Error> {
        let status = self.read_reg(Register::StatusReg).await?;
        Ok(StatusReg::from_bits(status).gyro_data_available())
    }

    async fn wait_data_ready<D: DelayNs>(
        &mut self,
        delay: &mut D,
        policy: PollPolicy,
    ) -> Result<bool, Error> {
        policy
            .run(delay, async || self.gyro_data_available().await)
            .await
    }

    async fn read_gyro_output(&mut self) -> Result<GyroRaw, Error> {
        let mut buffer = [0u8; GYRO_OUT_LEN];
        interface::read_regs(&mut self.transport, Register::OutxLG, &mut buffer).await?;
        Ok(GyroRaw::from_le_bytes(buffer))
    }
}
