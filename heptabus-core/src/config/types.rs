//! Configuration type definitions

use heptabus_hal::is_valid_7bit;

use crate::encoder::LowercaseStyle;
use crate::updater::RetryPolicy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current configuration layout version
pub const CONFIG_VERSION: u8 = 1;

#[cfg(feature = "serde")]
const fn default_version() -> u8 {
    CONFIG_VERSION
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Serialization failed (buffer too small)
    Serialize,
    /// Deserialization failed
    Deserialize,
    /// TOML parsing failed
    TomlParse,
    /// Config version mismatch
    VersionMismatch {
        /// Version found in the stored data
        found: u8,
    },
    /// Bus address does not fit in 7 bits
    InvalidAddress(u8),
    /// Retry policy with zero spacing or zero attempts
    InvalidRetryPolicy,
}

/// Digit updater configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UpdaterConfig {
    /// Config layout version
    #[cfg_attr(feature = "serde", serde(default = "default_version"))]
    pub version: u8,
    /// 7-bit bus address of the subordinate
    pub address: u8,
    /// Retry behaviour for undelivered frames
    #[cfg_attr(feature = "serde", serde(default))]
    pub retry: RetryPolicy,
    /// Lowercase glyph rendering
    #[cfg_attr(feature = "serde", serde(default))]
    pub lowercase: LowercaseStyle,
}

impl UpdaterConfig {
    /// Default configuration for the subordinate at `address`
    pub const fn new(address: u8) -> Self {
        Self {
            version: CONFIG_VERSION,
            address,
            retry: RetryPolicy::bounded(crate::updater::DEFAULT_MAX_ATTEMPTS),
            lowercase: LowercaseStyle::Distinct,
        }
    }

    /// Check the configuration can drive a bus
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch {
                found: self.version,
            });
        }
        if !is_valid_7bit(self.address) {
            return Err(ConfigError::InvalidAddress(self.address));
        }
        if !self.retry.is_valid() {
            return Err(ConfigError::InvalidRetryPolicy);
        }
        Ok(())
    }
}
