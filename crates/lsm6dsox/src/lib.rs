//! Async `#![no_std]` driver core for the gyroscope of the
//! [LSM6DSOX](https://www.st.com/en/mems-and-sensors/lsm6dsox.html) 6-axis
//! IMU from STMicroelectronics.
//!
//! The crate covers gyroscope configuration, bounded data-ready polling,
//! raw-to-dps conversion and the factory self-test. It is built on
//! `embedded-hal-async` and talks to the sensor through a byte-level
//! [`Transport`]; I2C and SPI adapters are included.
//!
//! # Quick start (I2C)
//!
//! ```rust,no_run
//! use ph_lsm6dsox::{
//!     GyroConfig, GyroFullScale, GyroOutputDataRate, Lsm6dsoxAddress, Lsm6dsoxI2c,
//!     SelfTestStatus,
//! };
//! # use embedded_hal_async::delay::DelayNs;
//! # use embedded_hal_async::i2c::I2c;
//! #
//! static SELF_TEST: SelfTestStatus = SelfTestStatus::new();
//!
//! # async fn example<I2C: I2c, D: DelayNs>(i2c: I2C, delay: &mut D) -> Result<(), ph_lsm6dsox::Error> {
//! let mut gyro: Lsm6dsoxI2c<'_, I2C> =
//!     Lsm6dsoxI2c::new_i2c(i2c, Lsm6dsoxAddress::Primary, &SELF_TEST);
//! gyro.start().await?;
//! gyro.update_config(GyroConfig::new(GyroFullScale::Dps500, GyroOutputDataRate::Hz104))
//!     .await?;
//! if gyro.is_data_ready_for_current_config(delay).await? {
//!     let _rate = gyro.read_gyro_dps().await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Self-test
//!
//! [`Lsm6dsox::start_self_test`] runs the full procedure and restores the
//! control registers afterwards. The verdict is published into a
//! [`SelfTestStatus`], which other tasks may poll while the test runs.
//!
//! # Scaling helpers
//!
//! Use [`gyro_mdps_per_lsb`] (or [`gyro_udps_per_lsb`]) to convert raw counts
//! without floating-point math, or [`gyro_to_dps`] for `f32` output.
//!
//! # Fixed-point conversions
//!
//! Enable the `fixed` feature to access `gyro_to_dps_fixed`, which converts
//! raw readings into dps using `I32F32` integer math.

#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]
// Clippy lint levels live here.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

#[cfg(feature = "fixed")]
extern crate fixed as fixed_crate;

#[macro_use]
mod macros;

mod config;
mod data;
mod device;
mod driver;
mod error;
mod interface;
mod poll;
mod register;

#[cfg(test)]
mod testing;

// Interface layer
pub use interface::Lsm6dsoxAddress;
pub use interface::Transport;
pub use interface::{I2cTransport, SpiTransport};

// Configuration
pub use config::{GyroConfig, GyroFullScale, GyroOutputDataRate, SessionState};

// Driver
pub use driver::{Lsm6dsox, Lsm6dsoxI2c, Lsm6dsoxSpi};

// Data types
pub use data::{GyroDelta, GyroDps, GyroRaw};
pub use data::{ScaleFactor, gyro_dps_per_lsb, gyro_mdps_per_lsb, gyro_to_dps, gyro_udps_per_lsb};

// Features
pub use error::Error;
pub use self_test::{SelfTestMode, SelfTestReport, SelfTestResult, SelfTestStatus, SelfTestWindow};

// Fixed-point conversions (feature-gated)
#[cfg(feature = "fixed")]
pub use data::fixed::{Fixed, GyroFixed, gyro_to_dps_fixed};
