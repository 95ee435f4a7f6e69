//! Generation-checked stepper handles.

use core::fmt;

/// Opaque reference to one stepper in a [`StepperPool`](super::StepperPool).
///
/// A handle names a slot index and the generation of that slot at the time
/// the stepper was constructed. Destructing the stepper advances the
/// generation, so an old handle never resolves to a later occupant of the
/// same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Handle {
    index: u16,
    generation: u16,
}

impl Handle {
    #[inline]
    pub(crate) const fn new(index: u16, generation: u16) -> Self {
        Self { index, generation }
    }

    /// Slot index.
    #[inline]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Slot generation this handle was issued for.
    #[inline]
    pub const fn generation(self) -> u16 {
        self.generation
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.index, self.generation)
    }
}
