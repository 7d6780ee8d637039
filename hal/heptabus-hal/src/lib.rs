//! Heptabus Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the display link consumes, so the
//! same digit-update logic runs against a real I2C peripheral, an embassy
//! time driver, or the mocks used in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Host application (clock, menus, ...)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  heptabus-core (encoder + updater)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  heptabus-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!         │                       │
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal  │       │ embassy-time  │
//! │  I2c master   │       │  (optional)   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::BusTransport`] - Addressed write with acknowledgment count
//! - [`time::Monotonic`] - Millisecond clock for retry throttling

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;
pub mod time;

// Re-export key traits at crate root for convenience
pub use i2c::{is_valid_7bit, BusTransport, HalBus, I2cConfig, MAX_7BIT_ADDRESS};
pub use time::Monotonic;

#[cfg(feature = "embassy-time")]
pub use time::EmbassyClock;
