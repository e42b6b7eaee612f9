//! Testing infrastructure (mock transport, delays, etc.).

pub(crate) mod mock;

pub(crate) use mock::{MockDelay, MockTransport};
