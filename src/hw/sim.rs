//! In-memory register for host builds and tests.

use core::cell::Cell;

use super::register::Register;

/// A register backed by plain memory.
///
/// Counts writes so callers can verify that an operation left the hardware
/// untouched.
#[derive(Debug, Default)]
pub struct SimRegister {
    value: Cell<u8>,
    writes: Cell<u32>,
}

impl SimRegister {
    /// Create a register holding `value`.
    pub const fn new(value: u8) -> Self {
        Self {
            value: Cell::new(value),
            writes: Cell::new(0),
        }
    }

    /// Current value.
    #[inline]
    pub fn value(&self) -> u8 {
        self.value.get()
    }

    /// Check a single bit.
    #[inline]
    pub fn bit(&self, bit: u8) -> bool {
        self.value.get() & (1 << (bit & 7)) != 0
    }

    /// Number of writes since creation or the last [`reset_writes`](Self::reset_writes).
    #[inline]
    pub fn write_count(&self) -> u32 {
        self.writes.get()
    }

    /// Reset the write counter.
    pub fn reset_writes(&self) {
        self.writes.set(0);
    }
}

impl Register for SimRegister {
    #[inline]
    fn read(&self) -> u8 {
        self.value.get()
    }

    #[inline]
    fn write(&self, value: u8) {
        self.value.set(value);
        self.writes.set(self.writes.get().wrapping_add(1));
    }
}
