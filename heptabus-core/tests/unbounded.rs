//! The unbounded retry policy must never give up on its own.
//!
//! A real hang can't be asserted, so the mock bus panics once it has seen
//! a fixed budget of attempts. Reaching that panic proves the updater was
//! still retrying.

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use heptabus_core::{DigitUpdater, RetryPolicy};
use heptabus_hal::{BusTransport, Monotonic};

const ATTEMPT_BUDGET: u32 = 200;
const BUDGET_SPENT: &str = "attempt budget spent";

/// Clock that jumps 10 ms on every read
struct SteppingClock(Cell<u64>);

impl Monotonic for SteppingClock {
    fn now_ms(&self) -> u64 {
        let now = self.0.get();
        self.0.set(now + 10);
        now
    }
}

/// A peer that never acknowledges anything
struct DeafBus<'a> {
    attempts: &'a Cell<u32>,
}

impl BusTransport for DeafBus<'_> {
    type Error = ();

    fn is_ready(&mut self) -> bool {
        true
    }

    fn begin_transmission(&mut self, _address: u8) {}

    fn write(&mut self, bytes: &[u8]) -> usize {
        bytes.len()
    }

    fn end_transmission(&mut self) -> Result<usize, Self::Error> {
        let attempts = self.attempts.get() + 1;
        self.attempts.set(attempts);
        if attempts >= ATTEMPT_BUDGET {
            panic!("{}", BUDGET_SPENT);
        }
        Ok(0)
    }
}

#[test]
fn test_unbounded_policy_never_returns_against_a_deaf_peer() {
    let attempts = Cell::new(0);
    let clock = SteppingClock(Cell::new(0));
    let bus = DeafBus {
        attempts: &attempts,
    };
    let mut updater = DigitUpdater::with_policy(bus, &clock, 0x20, RetryPolicy::unbounded());

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| updater.update_digit(0, '8')));

    let payload = outcome.expect_err("update returned against a deaf peer");
    let message = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .unwrap_or_default();
    assert_eq!(message, BUDGET_SPENT);
    assert_eq!(attempts.get(), ATTEMPT_BUDGET);
    // 199 waits of at least 100 ms each
    assert!(clock.0.get() >= u64::from(ATTEMPT_BUDGET - 1) * 100);
}

#[test]
fn test_default_policy_gives_up_against_a_deaf_peer() {
    let attempts = Cell::new(0);
    let clock = SteppingClock(Cell::new(0));
    let bus = DeafBus {
        attempts: &attempts,
    };
    let mut updater = DigitUpdater::new(bus, &clock, 0x20);

    let err = updater.update_digit(0, '8').unwrap_err();
    assert_eq!(err.attempts(), heptabus_core::updater::DEFAULT_MAX_ATTEMPTS);
    assert_eq!(attempts.get(), heptabus_core::updater::DEFAULT_MAX_ATTEMPTS);
}
