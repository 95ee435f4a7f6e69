//! Microstep resolution and its MS1..MS3 encoding.

use crate::error::ConfigError;

/// Microstep resolution selected on the MS1..MS3 lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepSize {
    /// Full step (no microstepping).
    #[default]
    Full,
    /// Half step.
    Half,
    /// Quarter step.
    Quarter,
    /// Eighth step.
    Eighth,
    /// Sixteenth step.
    Sixteenth,
}

impl StepSize {
    /// All step sizes, coarsest first.
    pub const ALL: [StepSize; 5] = [
        StepSize::Full,
        StepSize::Half,
        StepSize::Quarter,
        StepSize::Eighth,
        StepSize::Sixteenth,
    ];

    /// Output levels for `[MS1, MS2, MS3]`, `true` meaning high.
    ///
    /// | step size | MS1 | MS2 | MS3 |
    /// |-----------|-----|-----|-----|
    /// | Full      |  0  |  0  |  0  |
    /// | Half      |  1  |  0  |  0  |
    /// | Quarter   |  0  |  1  |  0  |
    /// | Eighth    |  1  |  1  |  0  |
    /// | Sixteenth |  1  |  1  |  1  |
    #[inline]
    pub const fn ms_levels(self) -> [bool; 3] {
        match self {
            StepSize::Full => [false, false, false],
            StepSize::Half => [true, false, false],
            StepSize::Quarter => [false, true, false],
            StepSize::Eighth => [true, true, false],
            StepSize::Sixteenth => [true, true, true],
        }
    }

    /// Microsteps per full step.
    #[inline]
    pub const fn divisor(self) -> u8 {
        match self {
            StepSize::Full => 1,
            StepSize::Half => 2,
            StepSize::Quarter => 4,
            StepSize::Eighth => 8,
            StepSize::Sixteenth => 16,
        }
    }

    /// Step size for a microstep divisor, if the driver supports it.
    pub const fn from_divisor(divisor: u8) -> Option<Self> {
        match divisor {
            1 => Some(StepSize::Full),
            2 => Some(StepSize::Half),
            4 => Some(StepSize::Quarter),
            8 => Some(StepSize::Eighth),
            16 => Some(StepSize::Sixteenth),
            _ => None,
        }
    }
}

impl TryFrom<u8> for StepSize {
    type Error = ConfigError;

    fn try_from(divisor: u8) -> Result<Self, Self::Error> {
        Self::from_divisor(divisor).ok_or(ConfigError::InvalidStepSize(divisor))
    }
}
