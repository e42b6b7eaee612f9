//! Bounded data-ready polling.

use embedded_hal_async::delay::DelayNs;

use crate::config::GyroOutputDataRate;
use crate::error::Error;

/// Retry schedule for waiting on a data-available flag.
///
/// The flag is checked, then the poller sleeps one interval, until the
/// accumulated sleep exceeds the timeout. A zero timeout still checks once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct PollPolicy {
    timeout_ms: u32,
    interval_ms: u32,
}

impl PollPolicy {
    /// Creates a policy polling about four times within `timeout_ms`.
    pub(crate) const fn new(timeout_ms: u32) -> Self {
        Self {
            timeout_ms,
            interval_ms: timeout_ms / 4 + 1,
        }
    }

    /// Policy matching one and a quarter sample periods at `odr`.
    pub(crate) const fn for_output_data_rate(odr: GyroOutputDataRate) -> Self {
        Self::new(odr.data_ready_timeout_ms())
    }

    /// Returns the total timeout in milliseconds.
    #[cfg(test)]
    pub(crate) const fn timeout_ms(self) -> u32 {
        self.timeout_ms
    }

    /// Returns the sleep between checks in milliseconds.
    #[cfg(test)]
    pub(crate) const fn interval_ms(self) -> u32 {
        self.interval_ms
    }

    /// Returns how many times the flag is checked before giving up.
    pub(crate) const fn attempts(self) -> u32 {
        self.timeout_ms / self.interval_ms + 1
    }

    /// Runs `check` until it reports `true` or the attempts are used up.
    ///
    /// Returns whether readiness was observed. Errors from `check` abort the
    /// wait immediately.
    pub(crate) async fn run<D, F>(self, delay: &mut D, mut check: F) -> Result<bool, Error>
    where
        D: DelayNs,
        F: AsyncFnMut() -> Result<bool, Error>,
    {
        for _ in 0..self.attempts() {
            if check().await? {
                return Ok(true);
            }
            delay.delay_ms(self.interval_ms).await;
        }
        Ok(false)
    }
}
