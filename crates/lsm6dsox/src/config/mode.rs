//! Gyroscope session power/data state machine.

use super::GyroOutputDataRate;

/// Power and data state of the gyroscope session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// Gyroscope powered down (ODR off, or session stopped).
    PoweredOff,
    /// Gyroscope running, no fresh sample observed since the last change.
    DataNotReady,
    /// Gyroscope running and a sample has been observed.
    DataReady,
}

/// Tracks [`SessionState`] transitions for the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SessionStateMachine {
    state: SessionState,
}

impl SessionStateMachine {
    pub(crate) const fn new() -> Self {
        Self {
            state: SessionState::PoweredOff,
        }
    }

    pub(crate) const fn state(self) -> SessionState {
        self.state
    }

    /// A new output data rate was written to the sensor.
    pub(crate) fn config_applied(&mut self, odr: GyroOutputDataRate) {
        self.state = if odr.is_off() {
            SessionState::PoweredOff
        } else {
            SessionState::DataNotReady
        };
    }

    /// A data-available flag was observed. Ignored while powered off.
    pub(crate) fn data_observed(&mut self) {
        if self.state == SessionState::DataNotReady {
            self.state = SessionState::DataReady;
        }
    }

    pub(crate) fn stopped(&mut self) {
        self.state = SessionState::PoweredOff;
    }
}

impl Default for SessionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_with_odr_off_powers_down() {
        let mut machine = SessionStateMachine::new();
        machine.config_applied(GyroOutputDataRate::Hz104);
        machine.data_observed();
        assert_eq!(machine.state(), SessionState::DataReady);

        machine.config_applied(GyroOutputDataRate::Off);
        assert_eq!(machine.state(), SessionState::PoweredOff);
    }

    #[test]
    fn new_config_requires_fresh_data() {
        let mut machine = SessionStateMachine::new();
        machine.config_applied(GyroOutputDataRate::Hz104);
        machine.data_observed();
        machine.config_applied(GyroOutputDataRate::Hz208);
        assert_eq!(machine.state(), SessionState::DataNotReady);
    }

    #[test]
    fn data_observed_does_not_power_up() {
        let mut machine = SessionStateMachine::new();
        machine.data_observed();
        assert_eq!(machine.state(), SessionState::PoweredOff);
    }
}
