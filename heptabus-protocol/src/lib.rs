//! Heptabus Display Link Protocol
//!
//! This crate defines the I2C wire format between the bus master (the host
//! MCU) and the subordinate MCU that scans a multiplexed seven-segment
//! display. The protocol is deliberately minimal: one write per digit.
//!
//! # Protocol Overview
//!
//! Every update is a single addressed I2C write of exactly two bytes:
//! ```text
//! ┌─────────────┬──────────────┐
//! │ DIGIT INDEX │ SEGMENTS     │
//! │ 1B          │ 1B DPgfedcba │
//! └─────────────┴──────────────┘
//! ```
//!
//! There is no start byte or checksum. Addressing and delivery confirmation
//! come from the bus itself: the frame counts as delivered only when the
//! subordinate acknowledges both bytes. The digit index is not range
//! checked here; an index past the end of the display is the
//! subordinate's problem to reject.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod segment;

pub use frame::{DigitFrame, FrameError, FRAME_LEN};
pub use segment::{is_lit, Segment, BLANK, DECIMAL_POINT, SEGMENTS_MASK};
