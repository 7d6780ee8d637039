//! Retry policy for digit updates
//!
//! A failed bus attempt is retried no sooner than `interval_ms` after the
//! previous attempt *started*. The policy bounds the loop by attempt count,
//! by a deadline measured from the first attempt, or both.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimum spacing between attempt starts
pub const DEFAULT_RETRY_INTERVAL_MS: u32 = 100;

/// Attempts made by the default policy before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 20;

#[cfg(feature = "serde")]
const fn default_interval_ms() -> u32 {
    DEFAULT_RETRY_INTERVAL_MS
}

/// Which limit ended a retry loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Exhaustion {
    /// `max_attempts` attempts were made
    Attempts,
    /// The next attempt could not start before `deadline_ms`
    Deadline,
}

/// Bus retry policy
///
/// A missing `max_attempts` and `deadline_ms` means retry forever. That is
/// only reasonable on a board where the subordinate is known to be wired
/// and powered; see [`RetryPolicy::unbounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RetryPolicy {
    /// Minimum time between the starts of consecutive attempts (ms)
    #[cfg_attr(feature = "serde", serde(default = "default_interval_ms"))]
    pub interval_ms: u32,
    /// Give up after this many attempts
    pub max_attempts: Option<u32>,
    /// Give up once this much time has passed since the first attempt (ms)
    pub deadline_ms: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::bounded(DEFAULT_MAX_ATTEMPTS)
    }
}

impl RetryPolicy {
    /// Retry up to `max_attempts` times, 100 ms apart
    pub const fn bounded(max_attempts: u32) -> Self {
        Self {
            interval_ms: DEFAULT_RETRY_INTERVAL_MS,
            max_attempts: Some(max_attempts),
            deadline_ms: None,
        }
    }

    /// Retry 100 ms apart until `deadline_ms` has passed
    pub const fn deadline(deadline_ms: u32) -> Self {
        Self {
            interval_ms: DEFAULT_RETRY_INTERVAL_MS,
            max_attempts: None,
            deadline_ms: Some(deadline_ms),
        }
    }

    /// Retry 100 ms apart forever
    ///
    /// An absent or wedged subordinate blocks the caller indefinitely.
    /// Impose an external watchdog if that matters.
    pub const fn unbounded() -> Self {
        Self {
            interval_ms: DEFAULT_RETRY_INTERVAL_MS,
            max_attempts: None,
            deadline_ms: None,
        }
    }

    /// Set the spacing between attempt starts
    pub const fn with_interval(mut self, interval_ms: u32) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Add or replace the attempt limit
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Add or replace the deadline
    pub const fn with_deadline(mut self, deadline_ms: u32) -> Self {
        self.deadline_ms = Some(deadline_ms);
        self
    }

    /// Whether neither limit is set
    pub const fn is_unbounded(&self) -> bool {
        self.max_attempts.is_none() && self.deadline_ms.is_none()
    }

    /// Whether the policy can make at least one attempt with non-zero spacing
    pub const fn is_valid(&self) -> bool {
        let attempts_ok = match self.max_attempts {
            Some(n) => n > 0,
            None => true,
        };
        self.interval_ms > 0 && attempts_ok
    }

    /// Decide whether to stop after a failed attempt
    ///
    /// - `attempts`: attempts made so far, including the one that just failed
    /// - `next_attempt_at_ms`: earliest time, relative to the first
    ///   attempt, at which another attempt could start
    pub fn check(&self, attempts: u32, next_attempt_at_ms: u64) -> Option<Exhaustion> {
        if self.max_attempts.is_some_and(|max| attempts >= max) {
            return Some(Exhaustion::Attempts);
        }
        if self
            .deadline_ms
            .is_some_and(|deadline| next_attempt_at_ms >= u64::from(deadline))
        {
            return Some(Exhaustion::Deadline);
        }
        None
    }
}
