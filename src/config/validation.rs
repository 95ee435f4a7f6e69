//! Configuration validation.

use heapless::Vec;

use crate::error::{ConfigError, Error, Result};

use super::system::{SystemConfig, MAX_CONFIGURED_MOTORS};

/// Validate a system configuration.
///
/// Checks:
/// - Every bit index is 0-7
/// - No port bit is bound to more than one line, across all motors
///
/// Port names are checked later, when the configuration is bound to a
/// [`PortTable`](super::PortTable).
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    let mut seen: Vec<(&str, u8), { MAX_CONFIGURED_MOTORS * 6 }> = Vec::new();

    for (_, motor) in config.iter() {
        for (line, cfg) in motor.pins.iter() {
            cfg.mask(line)?;

            let key = (cfg.port.as_str(), cfg.bit);
            if seen.contains(&key) {
                return Err(Error::Config(ConfigError::LineConflict {
                    port: cfg.port.clone(),
                    bit: cfg.bit,
                }));
            }
            // capacity covers every line of every motor the config can hold
            let _ = seen.push(key);
        }
    }

    Ok(())
}
