//! Pin bindings: one output line on a byte-wide GPIO port.

use core::convert::Infallible;
use core::fmt;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

use super::register::Register;

/// Role of a driver input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Direction select.
    Dir,
    /// Driver enable (active low).
    Enable,
    /// Step pulse trigger.
    Step,
    /// Microstep select 1.
    Ms1,
    /// Microstep select 2.
    Ms2,
    /// Microstep select 3.
    Ms3,
}

impl Line {
    /// All lines, in initialization order.
    pub const ALL: [Line; 6] = [
        Line::Dir,
        Line::Enable,
        Line::Step,
        Line::Ms1,
        Line::Ms2,
        Line::Ms3,
    ];

    /// Lowercase name, as used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Line::Dir => "dir",
            Line::Enable => "enable",
            Line::Step => "step",
            Line::Ms1 => "ms1",
            Line::Ms2 => "ms2",
            Line::Ms3 => "ms3",
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One physical output line: a port register, its data-direction register,
/// and the bit mask selecting the line within both.
///
/// The registers are borrowed. The board that owns them must keep them alive
/// for `'r`.
pub struct PinBinding<'r, R: ?Sized> {
    port: &'r R,
    ddr: &'r R,
    mask: u8,
}

impl<'r, R: ?Sized> Clone for PinBinding<'r, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'r, R: ?Sized> Copy for PinBinding<'r, R> {}

impl<'r, R: ?Sized> fmt::Debug for PinBinding<'r, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinBinding")
            .field("mask", &format_args!("{:#010b}", self.mask))
            .finish_non_exhaustive()
    }
}

impl<'r, R: Register + ?Sized> PinBinding<'r, R> {
    /// Bind the line selected by `mask` on `port`, with direction controlled by `ddr`.
    #[inline]
    pub const fn new(port: &'r R, ddr: &'r R, mask: u8) -> Self {
        Self { port, ddr, mask }
    }

    /// Bit mask of this line.
    #[inline]
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Port (data) register.
    #[inline]
    pub fn port(&self) -> &'r R {
        self.port
    }

    /// Data-direction register.
    #[inline]
    pub fn ddr(&self) -> &'r R {
        self.ddr
    }

    /// Drive the line low, then switch it to output.
    ///
    /// Clearing first keeps the line from glitching high when the direction
    /// flips.
    pub(crate) fn configure_output(&self) {
        self.port.clear_bits(self.mask);
        self.ddr.set_bits(self.mask);
    }

    /// Drive the line high.
    #[inline]
    pub fn drive_high(&self) {
        self.port.set_bits(self.mask);
    }

    /// Drive the line low.
    #[inline]
    pub fn drive_low(&self) {
        self.port.clear_bits(self.mask);
    }

    /// Drive the line to `high`.
    #[inline]
    pub fn drive(&self, high: bool) {
        self.port.write_bits(self.mask, high);
    }

    /// Check whether the port bit is set.
    #[inline]
    pub fn is_driven_high(&self) -> bool {
        self.port.any_set(self.mask)
    }

    /// Check whether the line is configured as output.
    #[inline]
    pub fn is_output(&self) -> bool {
        self.ddr.any_set(self.mask)
    }
}

impl<'r, R: ?Sized> ErrorType for PinBinding<'r, R> {
    type Error = Infallible;
}

impl<'r, R: Register + ?Sized> OutputPin for PinBinding<'r, R> {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive_high();
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive_low();
        Ok(())
    }
}

impl<'r, R: Register + ?Sized> StatefulOutputPin for PinBinding<'r, R> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.is_driven_high())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.is_driven_high())
    }
}

/// The six bindings of one driver.
pub struct PinSet<'r, R: ?Sized> {
    /// DIR line.
    pub dir: PinBinding<'r, R>,
    /// ENABLE line.
    pub enable: PinBinding<'r, R>,
    /// STEP line.
    pub step: PinBinding<'r, R>,
    /// MS1 line.
    pub ms1: PinBinding<'r, R>,
    /// MS2 line.
    pub ms2: PinBinding<'r, R>,
    /// MS3 line.
    pub ms3: PinBinding<'r, R>,
}

impl<'r, R: ?Sized> Clone for PinSet<'r, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'r, R: ?Sized> Copy for PinSet<'r, R> {}

impl<'r, R: ?Sized> fmt::Debug for PinSet<'r, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinSet")
            .field("dir", &self.dir)
            .field("enable", &self.enable)
            .field("step", &self.step)
            .field("ms1", &self.ms1)
            .field("ms2", &self.ms2)
            .field("ms3", &self.ms3)
            .finish()
    }
}

impl<'r, R: Register + ?Sized> PinSet<'r, R> {
    /// Binding for `line`.
    pub fn line(&self, line: Line) -> PinBinding<'r, R> {
        match line {
            Line::Dir => self.dir,
            Line::Enable => self.enable,
            Line::Step => self.step,
            Line::Ms1 => self.ms1,
            Line::Ms2 => self.ms2,
            Line::Ms3 => self.ms3,
        }
    }

    /// Iterate over all bindings in initialization order.
    pub fn iter(&self) -> impl Iterator<Item = (Line, PinBinding<'r, R>)> + '_ {
        Line::ALL.into_iter().map(move |line| (line, self.line(line)))
    }
}
