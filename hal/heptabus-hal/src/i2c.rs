//! I2C bus abstractions
//!
//! Provides the master-side transmission primitives the digit updater
//! drives, plus an adapter for any `embedded-hal` 1.0 blocking I2C master.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c, NoAcknowledgeSource};
use heapless::Vec;

/// Highest valid 7-bit bus address
pub const MAX_7BIT_ADDRESS: u8 = 0x7F;

/// Largest transfer [`HalBus`] will stage between begin and end
pub const MAX_TRANSFER: usize = 8;

/// Check that an address fits in the 7-bit I2C address space
pub const fn is_valid_7bit(address: u8) -> bool {
    address <= MAX_7BIT_ADDRESS
}

/// I2C bus master, transmission side
///
/// Models the begin / write / end sequence of a buffered two-wire master:
/// bytes written between [`begin_transmission`](Self::begin_transmission)
/// and [`end_transmission`](Self::end_transmission) go out as a single
/// addressed write.
pub trait BusTransport {
    /// Error type for bus operations
    type Error;

    /// Whether the bus can accept a new write right now
    fn is_ready(&mut self) -> bool;

    /// Start staging a write addressed to `address` (7-bit)
    fn begin_transmission(&mut self, address: u8);

    /// Queue bytes for the current transmission
    ///
    /// Returns the number of bytes accepted into the transmit buffer.
    fn write(&mut self, bytes: &[u8]) -> usize;

    /// Send the staged bytes and release the bus
    ///
    /// Returns the number of bytes the addressed peer acknowledged.
    fn end_transmission(&mut self) -> Result<usize, Self::Error>;
}

impl<T: BusTransport + ?Sized> BusTransport for &mut T {
    type Error = T::Error;

    fn is_ready(&mut self) -> bool {
        T::is_ready(self)
    }

    fn begin_transmission(&mut self, address: u8) {
        T::begin_transmission(self, address)
    }

    fn write(&mut self, bytes: &[u8]) -> usize {
        T::write(self, bytes)
    }

    fn end_transmission(&mut self) -> Result<usize, Self::Error> {
        T::end_transmission(self)
    }
}

/// I2C bus clock configuration
///
/// The subordinate display boards run at standard mode; faster modes are
/// for hosts sharing the bus with other peripherals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Fast mode plus (1 MHz)
    pub const FAST_PLUS: Self = Self {
        frequency: 1_000_000,
    };
}

/// [`BusTransport`] over an `embedded-hal` I2C master
///
/// `embedded-hal` writes are all-or-nothing, so a completed write counts
/// every staged byte as acknowledged and an address NACK counts none.
/// Any other bus fault is passed through as an error.
pub struct HalBus<I> {
    i2c: I,
    address: u8,
    staged: Vec<u8, MAX_TRANSFER>,
}

impl<I: I2c> HalBus<I> {
    /// Wrap an I2C master
    pub fn new(i2c: I) -> Self {
        Self {
            i2c,
            address: 0,
            staged: Vec::new(),
        }
    }

    /// Give back the wrapped I2C master
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> BusTransport for HalBus<I> {
    type Error = I::Error;

    fn is_ready(&mut self) -> bool {
        // Blocking embedded-hal writes wait for the bus themselves
        true
    }

    fn begin_transmission(&mut self, address: u8) {
        self.address = address;
        self.staged.clear();
    }

    fn write(&mut self, bytes: &[u8]) -> usize {
        let room = self.staged.capacity() - self.staged.len();
        let accepted = bytes.len().min(room);
        // Cannot fail: `accepted` never exceeds the remaining capacity
        let _ = self.staged.extend_from_slice(&bytes[..accepted]);
        accepted
    }

    fn end_transmission(&mut self) -> Result<usize, Self::Error> {
        let sent = self.staged.len();
        let result = self.i2c.write(self.address, &self.staged);
        self.staged.clear();

        match result {
            Ok(()) => Ok(sent),
            Err(e) if e.kind() == ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => Ok(0),
            Err(e) => Err(e),
        }
    }
}
