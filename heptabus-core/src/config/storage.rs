//! Configuration persistence
//!
//! Binary (postcard) encoding for flash, TOML for hand-edited files.
//! Both loaders validate before returning.

#[cfg(feature = "serde")]
use super::types::{ConfigError, UpdaterConfig};

/// Maximum serialized config size (binary)
pub const MAX_CONFIG_SIZE: usize = 32;

/// Serialize a configuration for storage
///
/// Returns the used prefix of `buffer`.
#[cfg(feature = "serde")]
pub fn to_postcard<'a>(
    config: &UpdaterConfig,
    buffer: &'a mut [u8],
) -> Result<&'a mut [u8], ConfigError> {
    postcard::to_slice(config, buffer).map_err(|_| ConfigError::Serialize)
}

/// Load a configuration from its binary form
#[cfg(feature = "serde")]
pub fn from_postcard(bytes: &[u8]) -> Result<UpdaterConfig, ConfigError> {
    let config: UpdaterConfig =
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;

    config.validate().map_err(|e| {
        warn!("Stored config rejected (version {})", config.version);
        e
    })?;

    debug!("Loaded config for address {}", config.address);
    Ok(config)
}

/// Load a configuration from TOML text
///
/// ```toml
/// address = 0x20
/// lowercase = "distinct"
///
/// [retry]
/// interval_ms = 100
/// max_attempts = 20
/// ```
///
/// Omitting `[retry]` gives the default policy. Inside `[retry]`, an
/// omitted `max_attempts` or `deadline_ms` means no such limit.
#[cfg(feature = "toml")]
pub fn from_toml(text: &str) -> Result<UpdaterConfig, ConfigError> {
    let config: UpdaterConfig = toml::from_str(text).map_err(|_| ConfigError::TomlParse)?;
    config.validate()?;

    debug!("Parsed TOML config for address {}", config.address);
    Ok(config)
}
