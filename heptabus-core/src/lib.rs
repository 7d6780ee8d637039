//! Bus-master logic for a multiplexed seven-segment display
//!
//! This crate contains everything between "show this character on that
//! digit" and the bus transaction that delivers it:
//!
//! - Segment encoder (character → `DPgfedcba` pattern)
//! - Digit updater (frame transmission with throttled, bounded retry)
//! - Configuration type definitions and persistence
//!
//! The bus and clock come in through the `heptabus-hal` traits, so the same
//! code drives real hardware and host-side mocks.
//!
//! # Example
//!
//! ```ignore
//! let mut display = DigitUpdater::new(HalBus::new(i2c), EmbassyClock, 0x20);
//! display.update_digit(0, 'H')?;
//! display.update_digit_with_dp(1, '1', true)?;
//! ```

#![no_std]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod config;
pub mod encoder;
pub mod updater;

pub use config::{ConfigError, UpdaterConfig, CONFIG_VERSION};
pub use encoder::{LowercaseStyle, SegmentEncoder};
pub use updater::{AttemptFailure, Delivery, DigitUpdater, Exhaustion, RetryPolicy, UpdateError};
