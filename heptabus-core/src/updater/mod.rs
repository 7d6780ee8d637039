//! Digit updater
//!
//! Sends one digit at a time to the subordinate display MCU. Every entry
//! point resolves its input to a segment pattern and ends in
//! [`DigitUpdater::update_digit_with_byte`], the only operation that
//! touches the bus.
//!
//! # Transmission
//!
//! Each attempt checks that the bus is ready, writes the two-byte
//! [`DigitFrame`] to the configured address, and succeeds only when the
//! peer acknowledges both bytes. Failed attempts are retried according to
//! the [`RetryPolicy`], never sooner than `interval_ms` after the previous
//! attempt started. The wait is a blocking poll of the clock.

pub mod retry;

use heptabus_hal::{BusTransport, Monotonic};
use heptabus_protocol::{DigitFrame, FRAME_LEN};

use crate::config::{ConfigError, UpdaterConfig};
use crate::encoder::SegmentEncoder;

pub use retry::{Exhaustion, RetryPolicy, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_INTERVAL_MS};

/// Why a single bus attempt failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AttemptFailure<E> {
    /// Bus was not ready to accept a write
    NotReady,
    /// Fewer bytes than the frame holds were staged or acknowledged
    Nack {
        /// Bytes the bus took before the attempt stopped
        acknowledged: usize,
    },
    /// Transport reported a fault
    Bus(E),
}

impl<E> AttemptFailure<E> {
    /// Short description for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptFailure::NotReady => "bus not ready",
            AttemptFailure::Nack { .. } => "not acknowledged",
            AttemptFailure::Bus(_) => "bus fault",
        }
    }
}

/// A digit update that could not be delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdateError<E> {
    /// The retry policy ran out before the peer acknowledged the frame
    RetriesExhausted {
        /// Which limit was hit
        reason: Exhaustion,
        /// Attempts made
        attempts: u32,
        /// Failure of the final attempt
        last: AttemptFailure<E>,
    },
}

impl<E> UpdateError<E> {
    /// Attempts made before giving up
    pub fn attempts(&self) -> u32 {
        match self {
            UpdateError::RetriesExhausted { attempts, .. } => *attempts,
        }
    }

    /// Failure of the final attempt
    pub fn last_failure(&self) -> &AttemptFailure<E> {
        match self {
            UpdateError::RetriesExhausted { last, .. } => last,
        }
    }
}

/// A delivered digit update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Delivery {
    /// Attempts needed, including the successful one
    pub attempts: u32,
}

/// Bus master for one subordinate display
///
/// Owns the bus handle, the clock used for retry throttling and its
/// encoder. The address is fixed at construction.
pub struct DigitUpdater<B, C> {
    bus: B,
    clock: C,
    address: u8,
    encoder: SegmentEncoder,
    policy: RetryPolicy,
}

impl<B: BusTransport, C: Monotonic> DigitUpdater<B, C> {
    /// Create an updater with the default retry policy
    ///
    /// # Arguments
    /// - `bus`: Transport the subordinate hangs off
    /// - `clock`: Millisecond clock for retry spacing
    /// - `address`: 7-bit bus address of the subordinate
    pub fn new(bus: B, clock: C, address: u8) -> Self {
        Self::with_policy(bus, clock, address, RetryPolicy::default())
    }

    /// Create an updater with an explicit retry policy
    pub fn with_policy(bus: B, clock: C, address: u8, policy: RetryPolicy) -> Self {
        Self {
            bus,
            clock,
            address,
            encoder: SegmentEncoder::new(),
            policy,
        }
    }

    /// Create an updater from validated configuration
    pub fn from_config(bus: B, clock: C, config: &UpdaterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            bus,
            clock,
            address: config.address,
            encoder: SegmentEncoder::with_lowercase(config.lowercase),
            policy: config.retry,
        })
    }

    /// Replace the encoder
    pub fn with_encoder(mut self, encoder: SegmentEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    /// Bus address of the subordinate
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Encoder used by the character entry points
    pub fn encoder(&self) -> &SegmentEncoder {
        &self.encoder
    }

    /// Retry policy in effect
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Tear down the updater, returning the bus and clock
    pub fn release(self) -> (B, C) {
        (self.bus, self.clock)
    }

    /// Show `character` on `digit`, decimal point off
    pub fn update_digit(
        &mut self,
        digit: u8,
        character: char,
    ) -> Result<Delivery, UpdateError<B::Error>> {
        self.update_digit_with_dp(digit, character, false)
    }

    /// Show `character` on `digit` with the decimal point set as requested
    pub fn update_digit_with_dp(
        &mut self,
        digit: u8,
        character: char,
        decimal_point: bool,
    ) -> Result<Delivery, UpdateError<B::Error>> {
        let segments = self.encoder.encode_char_with_dp(character, decimal_point);
        self.update_digit_with_byte(digit, segments)
    }

    /// Show the character with numeric code `code` on `digit`, decimal
    /// point off (`65` shows `A`)
    pub fn update_digit_code(
        &mut self,
        digit: u8,
        code: u32,
    ) -> Result<Delivery, UpdateError<B::Error>> {
        self.update_digit_code_with_dp(digit, code, false)
    }

    /// Show the character with numeric code `code` on `digit` with the
    /// decimal point set as requested
    pub fn update_digit_code_with_dp(
        &mut self,
        digit: u8,
        code: u32,
        decimal_point: bool,
    ) -> Result<Delivery, UpdateError<B::Error>> {
        let segments = self.encoder.encode_code_point_with_dp(code, decimal_point);
        self.update_digit_with_byte(digit, segments)
    }

    /// Send a raw segment pattern (`DPgfedcba`) to `digit`
    ///
    /// Use this for custom glyphs. Blocks until the frame is acknowledged
    /// or the retry policy gives up. With [`RetryPolicy::unbounded`] and an
    /// unresponsive peer, it never returns.
    pub fn update_digit_with_byte(
        &mut self,
        digit: u8,
        segments: u8,
    ) -> Result<Delivery, UpdateError<B::Error>> {
        let frame = DigitFrame::new(digit, segments);
        let interval = u64::from(self.policy.interval_ms);
        let first_start = self.clock.now_ms();
        let mut attempt_start = first_start;
        let mut attempts: u32 = 0;

        loop {
            attempts = attempts.saturating_add(1);
            trace!("digit {} attempt {}", digit, attempts);

            let failure = match self.attempt(&frame) {
                Ok(()) => return Ok(Delivery { attempts }),
                Err(failure) => failure,
            };

            let next_attempt_at = self
                .clock
                .elapsed_since(first_start)
                .max(attempt_start.wrapping_sub(first_start).saturating_add(interval));

            if let Some(reason) = self.policy.check(attempts, next_attempt_at) {
                warn!(
                    "digit {} not delivered to {} after {} attempts: {}",
                    digit,
                    self.address,
                    attempts,
                    failure.as_str()
                );
                return Err(UpdateError::RetriesExhausted {
                    reason,
                    attempts,
                    last: failure,
                });
            }

            debug!(
                "digit {} attempt {} failed: {}, retrying",
                digit,
                attempts,
                failure.as_str()
            );

            while self.clock.elapsed_since(attempt_start) < interval {
                core::hint::spin_loop();
            }
            attempt_start = self.clock.now_ms();
        }
    }

    /// One addressed write of `frame`
    fn attempt(&mut self, frame: &DigitFrame) -> Result<(), AttemptFailure<B::Error>> {
        if !self.bus.is_ready() {
            return Err(AttemptFailure::NotReady);
        }

        self.bus.begin_transmission(self.address);
        let staged = self.bus.write(&frame.to_bytes());
        if staged != FRAME_LEN {
            // A truncated frame is never put on the wire
            return Err(AttemptFailure::Nack {
                acknowledged: staged,
            });
        }
        let acknowledged = self.bus.end_transmission().map_err(AttemptFailure::Bus)?;

        if acknowledged != FRAME_LEN {
            return Err(AttemptFailure::Nack { acknowledged });
        }
        Ok(())
    }
}
