//! Configuration module for stepper-pool.
//!
//! Describes which port bit drives each line of each motor, loaded from TOML
//! files (with `std` feature) or pre-parsed data, and resolved against a
//! board-supplied [`PortTable`].

mod motor;
mod ports;
mod system;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use motor::{LineConfig, MotorConfig, PinsConfig};
pub use ports::{PortPair, PortTable, MAX_PORTS};
pub use system::{SystemConfig, MAX_CONFIGURED_MOTORS};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
