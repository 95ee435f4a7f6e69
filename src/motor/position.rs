//! Target position on a 200-position revolution.

use crate::error::{MotorError, Result};

/// Highest valid position.
pub const MAX_POSITION: u8 = 199;

/// Number of discrete positions per revolution.
pub const POSITIONS_PER_REVOLUTION: u16 = MAX_POSITION as u16 + 1;

/// A validated position in `0..=MAX_POSITION`.
///
/// One position is one full step of a 1.8° motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position(u8);

impl Position {
    /// Position zero.
    pub const ZERO: Self = Self(0);

    /// Create a position.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::PositionInvalid` if `value` exceeds [`MAX_POSITION`].
    pub fn new(value: u8) -> Result<Self> {
        if value <= MAX_POSITION {
            Ok(Self(value))
        } else {
            Err(MotorError::PositionInvalid(value).into())
        }
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Angle of this position in degrees.
    #[inline]
    pub fn degrees(self) -> f32 {
        self.0 as f32 * 360.0 / POSITIONS_PER_REVOLUTION as f32
    }
}

impl TryFrom<u8> for Position {
    type Error = crate::error::Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> u8 {
        pos.0
    }
}
