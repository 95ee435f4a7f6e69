//! Error types for stepper-pool.
//!
//! Every error is returned to the immediate caller. Nothing in this crate logs,
//! retries, or panics on an error path.

use core::fmt;

use crate::hw::Line;
use crate::pool::Handle;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-pool operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Slot allocation or handle resolution error
    Pool(PoolError),
    /// Motor parameter error
    Motor(MotorError),
    /// Configuration parsing, validation or binding error
    Config(ConfigError),
}

/// Pool lifecycle errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PoolError {
    /// Every slot is active.
    Exhausted {
        /// Pool capacity
        capacity: usize,
    },
    /// Handle is out of range, its slot is inactive, or the slot was reused.
    HandleInvalid(Handle),
}

/// Motor parameter errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Target position outside `0..=199`.
    PositionInvalid(u8),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// A line binding was not supplied to the builder
    MissingLine(Line),
    /// Bit index outside a byte-wide register (must be 0-7)
    InvalidBit {
        /// Line role carrying the bad bit
        line: Line,
        /// Configured bit index
        bit: u8,
    },
    /// The same port bit is bound to more than one line
    LineConflict {
        /// Port name
        port: heapless::String<8>,
        /// Bit index
        bit: u8,
    },
    /// Port name not present in the port table
    PortNotFound(heapless::String<8>),
    /// Port name empty or longer than 8 characters
    InvalidPortName,
    /// Port table has no room for another port
    PortTableFull,
    /// Motor name not found in configuration
    MotorNotFound(heapless::String<32>),
    /// Microstep divisor is not one of 1, 2, 4, 8, 16
    InvalidStepSize(u8),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pool(e) => write!(f, "Pool error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::Exhausted { capacity } => {
                write!(f, "No stepper slot available (capacity {})", capacity)
            }
            PoolError::HandleInvalid(handle) => write!(f, "Invalid stepper handle {}", handle),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PositionInvalid(pos) => {
                write!(f, "Position {} out of range. Must be 0-{}", pos, crate::motor::MAX_POSITION)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MissingLine(line) => write!(f, "{} pin is required", line),
            ConfigError::InvalidBit { line, bit } => {
                write!(f, "Invalid bit {} for {} pin. Must be 0-7", bit, line)
            }
            ConfigError::LineConflict { port, bit } => {
                write!(f, "Port '{}' bit {} is bound more than once", port, bit)
            }
            ConfigError::PortNotFound(name) => write!(f, "Port '{}' not found", name),
            ConfigError::InvalidPortName => write!(f, "Port name must be 1-8 characters"),
            ConfigError::PortTableFull => write!(f, "Port table is full"),
            ConfigError::MotorNotFound(name) => write!(f, "Motor '{}' not found", name),
            ConfigError::InvalidStepSize(v) => {
                write!(f, "Invalid step size divisor: {}. Valid values: 1, 2, 4, 8, 16", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

// Conversion impls
impl From<PoolError> for Error {
    fn from(e: PoolError) -> Self {
        Error::Pool(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for PoolError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_position_invalid() {
        let err = Error::from(MotorError::PositionInvalid(200));
        assert_eq!(
            format!("{}", err),
            "Motor error: Position 200 out of range. Must be 0-199"
        );
    }

    #[test]
    fn test_display_exhausted() {
        let err = Error::from(PoolError::Exhausted { capacity: 2 });
        assert_eq!(
            format!("{}", err),
            "Pool error: No stepper slot available (capacity 2)"
        );
    }
}
