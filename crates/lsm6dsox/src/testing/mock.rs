extern crate std;

use std::vec::Vec;

use embedded_hal_async::delay::DelayNs;

use crate::data::GyroRaw;
use crate::error::Error;
use crate::interface::Transport;
use crate::register::{Ctrl5C, GYRO_OUT_LEN, GyroSelfTestBits, Register, status_reg, who_am_i};
use crate::self_test::{SelfTestResult, SelfTestStatus};

/// Byte-level LSM6DSOX stand-in.
///
/// Decodes `[address, value]` write frames and `[address]` + burst read
/// frames against a register file with address auto-increment. The gyroscope
/// output block and STATUS_REG.GDA are synthesized on read.
#[derive(Clone, Debug)]
pub(crate) struct MockTransport {
    regs: [u8; 128],
    pointer: u8,
    frames: Vec<Vec<u8>>,
    sample: GyroRaw,
    self_test_sample: Option<GyroRaw>,
    data_ready: bool,
    ready_budget: Option<u32>,
    bus_failure: bool,
    write_failure: bool,
    short_transfers: bool,
    pub(crate) start_calls: u32,
    pub(crate) stop_calls: u32,
    pub(crate) status_reads: u32,
    pub(crate) burst_reads: u32,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self {
            regs: [0u8; 128],
            pointer: 0,
            frames: Vec::new(),
            sample: GyroRaw::default(),
            self_test_sample: None,
            data_ready: false,
            ready_budget: None,
            bus_failure: false,
            write_failure: false,
            short_transfers: false,
            start_calls: 0,
            stop_calls: 0,
            status_reads: 0,
            burst_reads: 0,
        }
    }
}

impl MockTransport {
    /// A device answering with the LSM6DSOX identifier.
    pub(crate) fn lsm6dsox() -> Self {
        Self::default().with_reg(Register::WhoAmI, who_am_i::EXPECTED)
    }

    pub(crate) fn with_reg(mut self, reg: Register, value: u8) -> Self {
        self.regs[reg.addr() as usize] = value;
        self
    }

    /// Sample returned while the gyroscope self-test is off.
    pub(crate) fn with_sample(mut self, sample: GyroRaw) -> Self {
        self.sample = sample;
        self
    }

    /// Sample returned while CTRL5_C.ST_G selects a self-test.
    pub(crate) fn with_self_test_sample(mut self, sample: GyroRaw) -> Self {
        self.self_test_sample = Some(sample);
        self
    }

    pub(crate) fn with_data_ready(mut self, ready: bool) -> Self {
        self.data_ready = ready;
        self
    }

    /// Reports GDA for the next `reads` status reads only.
    pub(crate) fn with_ready_reads(mut self, reads: u32) -> Self {
        self.ready_budget = Some(reads);
        self
    }

    pub(crate) fn with_bus_failure(mut self) -> Self {
        self.bus_failure = true;
        self
    }

    /// Reads keep working, every write fails.
    pub(crate) fn with_write_failure(mut self) -> Self {
        self.write_failure = true;
        self
    }

    pub(crate) fn with_short_transfers(mut self) -> Self {
        self.short_transfers = true;
        self
    }

    pub(crate) fn set_data_ready(&mut self, ready: bool) {
        self.data_ready = ready;
        self.ready_budget = None;
    }

    pub(crate) fn fail_bus(&mut self, fail: bool) {
        self.bus_failure = fail;
    }

    pub(crate) fn fail_writes(&mut self, fail: bool) {
        self.write_failure = fail;
    }

    pub(crate) fn reg(&self, reg: Register) -> u8 {
        self.regs[reg.addr() as usize]
    }

    /// Every frame passed to `write`, in order.
    pub(crate) fn frames(&self) -> &[Vec<u8>] {
        &self.frames
    }

    /// Single-register writes as `(address, value)`, in order.
    pub(crate) fn writes(&self) -> Vec<(u8, u8)> {
        self.frames
            .iter()
            .filter_map(|frame| match frame.as_slice() {
                [reg, value] => Some((*reg, *value)),
                _ => None,
            })
            .collect()
    }

    fn current_sample(&self) -> GyroRaw {
        let ctrl5 = Ctrl5C::from_bits(self.reg(Register::Ctrl5C));
        match (ctrl5.gyro_self_test(), self.self_test_sample) {
            (Some(GyroSelfTestBits::Normal), _) | (_, None) => self.sample,
            (_, Some(sample)) => sample,
        }
    }

    fn status(&mut self) -> u8 {
        self.status_reads += 1;
        let ready = match self.ready_budget.as_mut() {
            Some(0) => false,
            Some(budget) => {
                *budget -= 1;
                true
            }
            None => self.data_ready,
        };
        let mut status = self.reg(Register::StatusReg) & !status_reg::GDA;
        if ready {
            status |= status_reg::GDA;
        }
        status
    }

    fn read_byte(&mut self, addr: u8) -> u8 {
        let out = Register::OutxLG.addr();
        if addr == Register::StatusReg.addr() {
            self.status()
        } else if (out..out + GYRO_OUT_LEN as u8).contains(&addr) {
            let sample = self.current_sample();
            let bytes = [sample.x, sample.y, sample.z];
            let offset = usize::from(addr - out);
            bytes[offset / 2].to_le_bytes()[offset % 2]
        } else {
            self.regs[addr as usize]
        }
    }
}

impl Transport for MockTransport {
    async fn start(&mut self) {
        self.start_calls += 1;
    }

    async fn stop(&mut self) {
        self.stop_calls += 1;
    }

    async fn write(&mut self, data: &[u8]) -> Result<usize, Error> {
        if self.bus_failure || self.write_failure {
            return Err(Error::Bus);
        }
        self.frames.push(data.to_vec());
        let Some((&reg, payload)) = data.split_first() else {
            return Ok(0);
        };
        self.pointer = reg;
        for (offset, value) in payload.iter().enumerate() {
            let addr = reg.wrapping_add(offset as u8) as usize % self.regs.len();
            self.regs[addr] = *value;
        }
        if self.short_transfers {
            return Ok(data.len() - 1);
        }
        Ok(data.len())
    }

    async fn read(&mut self, buffer: &mut [u8]) -> Result<usize, Error> {
        if self.bus_failure {
            return Err(Error::Bus);
        }
        if buffer.len() == GYRO_OUT_LEN && self.pointer == Register::OutxLG.addr() {
            self.burst_reads += 1;
        }
        for (offset, slot) in buffer.iter_mut().enumerate() {
            let addr = self.pointer.wrapping_add(offset as u8) % self.regs.len() as u8;
            *slot = self.read_byte(addr);
        }
        if self.short_transfers {
            return Ok(buffer.len().saturating_sub(1));
        }
        Ok(buffer.len())
    }

    async fn write_read(&mut self, data: &[u8], buffer: &mut [u8]) -> Result<usize, Error> {
        if self.bus_failure {
            return Err(Error::Bus);
        }
        let Some(&reg) = data.first() else {
            return Err(Error::InvalidLength);
        };
        self.pointer = reg;
        self.read(buffer).await
    }
}

/// Delay that records calls and, optionally, what a concurrent reader of the
/// self-test status would see while the driver sleeps.
#[derive(Default, Debug)]
pub(crate) struct MockDelay<'a> {
    pub(crate) calls: u32,
    pub(crate) total_ms: u32,
    pub(crate) observed: Vec<SelfTestResult>,
    monitor: Option<&'a SelfTestStatus>,
}

impl<'a> MockDelay<'a> {
    pub(crate) fn observing(status: &'a SelfTestStatus) -> Self {
        Self {
            monitor: Some(status),
            ..Self::default()
        }
    }

    fn record(&mut self) {
        self.calls += 1;
        if let Some(status) = self.monitor {
            self.observed.push(status.result());
        }
    }
}

impl DelayNs for MockDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.record();
        self.total_ms += ns / 1_000_000;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.record();
        self.total_ms += ms;
    }
}
