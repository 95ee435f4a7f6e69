//! Byte-wide register capability.

/// An addressable 8-bit register.
///
/// Access goes through `&self` because several pin bindings commonly share
/// one port register. Implementations provide interior mutability.
///
/// The provided bit operations are read-modify-write sequences against the
/// live register value. They are not atomic: a write from another context
/// between the read and the write is lost.
pub trait Register {
    /// Read the current register value.
    fn read(&self) -> u8;

    /// Overwrite the register value.
    fn write(&self, value: u8);

    /// Set every bit in `mask` (OR).
    #[inline]
    fn set_bits(&self, mask: u8) {
        self.write(self.read() | mask);
    }

    /// Clear every bit in `mask` (AND with complement).
    #[inline]
    fn clear_bits(&self, mask: u8) {
        self.write(self.read() & !mask);
    }

    /// Set or clear the bits in `mask`.
    #[inline]
    fn write_bits(&self, mask: u8, high: bool) {
        if high {
            self.set_bits(mask);
        } else {
            self.clear_bits(mask);
        }
    }

    /// Check whether any bit in `mask` is set.
    #[inline]
    fn any_set(&self, mask: u8) -> bool {
        self.read() & mask != 0
    }
}
