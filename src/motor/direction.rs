//! Rotation direction and its DIR line encoding.

/// Rotation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// DIR line low.
    #[default]
    Forward,
    /// DIR line high.
    Backward,
}

impl Direction {
    /// Level of the DIR line, `true` meaning high.
    #[inline]
    pub const fn dir_level(self) -> bool {
        matches!(self, Direction::Backward)
    }
}
