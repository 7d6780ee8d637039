//! Monotonic time source
//!
//! The retry throttle measures elapsed time between bus attempts, so it
//! needs a clock that never goes backwards. Units are milliseconds.

/// Monotonic millisecond clock
pub trait Monotonic {
    /// Milliseconds since an arbitrary, fixed epoch
    fn now_ms(&self) -> u64;

    /// Milliseconds elapsed since `start_ms`
    fn elapsed_since(&self, start_ms: u64) -> u64 {
        self.now_ms().wrapping_sub(start_ms)
    }
}

impl<T: Monotonic + ?Sized> Monotonic for &T {
    fn now_ms(&self) -> u64 {
        T::now_ms(self)
    }
}

/// Clock backed by the embassy time driver
#[cfg(feature = "embassy-time")]
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmbassyClock;

#[cfg(feature = "embassy-time")]
impl Monotonic for EmbassyClock {
    fn now_ms(&self) -> u64 {
        embassy_time::Instant::now().as_millis()
    }
}
