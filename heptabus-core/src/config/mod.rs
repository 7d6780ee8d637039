//! Configuration types
//!
//! Link configuration for a single subordinate display. Stored in flash as
//! postcard-serialized binary data, or written by hand as TOML.

pub mod storage;
pub mod types;

pub use storage::*;
pub use types::*;
