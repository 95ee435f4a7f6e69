//! Construction attributes and their builder.

use core::fmt;

use crate::error::{ConfigError, Result};
use crate::hw::{Line, PinBinding, PinSet, Register};

/// Everything needed to bring up one stepper: its six line bindings and an
/// initial speed.
pub struct StepperAttr<'r, R: ?Sized> {
    /// Line bindings.
    pub pins: PinSet<'r, R>,
    /// Initial speed, in caller-defined units.
    pub speed: u8,
}

impl<'r, R: ?Sized> Clone for StepperAttr<'r, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'r, R: ?Sized> Copy for StepperAttr<'r, R> {}

impl<'r, R: ?Sized> fmt::Debug for StepperAttr<'r, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepperAttr")
            .field("pins", &self.pins)
            .field("speed", &self.speed)
            .finish()
    }
}

impl<'r, R: Register + ?Sized> StepperAttr<'r, R> {
    /// Create attributes from a complete pin set.
    pub fn new(pins: PinSet<'r, R>, speed: u8) -> Self {
        Self { pins, speed }
    }

    /// Start a builder.
    pub fn builder() -> StepperAttrBuilder<'r, R> {
        StepperAttrBuilder::new()
    }
}

/// Builder for [`StepperAttr`].
pub struct StepperAttrBuilder<'r, R: ?Sized> {
    dir: Option<PinBinding<'r, R>>,
    enable: Option<PinBinding<'r, R>>,
    step: Option<PinBinding<'r, R>>,
    ms1: Option<PinBinding<'r, R>>,
    ms2: Option<PinBinding<'r, R>>,
    ms3: Option<PinBinding<'r, R>>,
    speed: u8,
}

impl<'r, R: Register + ?Sized> Default for StepperAttrBuilder<'r, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r, R: Register + ?Sized> StepperAttrBuilder<'r, R> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            dir: None,
            enable: None,
            step: None,
            ms1: None,
            ms2: None,
            ms3: None,
            speed: 0,
        }
    }

    /// Set the binding for `line`.
    pub fn line(mut self, line: Line, pin: PinBinding<'r, R>) -> Self {
        let slot = match line {
            Line::Dir => &mut self.dir,
            Line::Enable => &mut self.enable,
            Line::Step => &mut self.step,
            Line::Ms1 => &mut self.ms1,
            Line::Ms2 => &mut self.ms2,
            Line::Ms3 => &mut self.ms3,
        };
        *slot = Some(pin);
        self
    }

    /// Set the DIR pin.
    pub fn dir_pin(self, pin: PinBinding<'r, R>) -> Self {
        self.line(Line::Dir, pin)
    }

    /// Set the ENABLE pin.
    pub fn enable_pin(self, pin: PinBinding<'r, R>) -> Self {
        self.line(Line::Enable, pin)
    }

    /// Set the STEP pin.
    pub fn step_pin(self, pin: PinBinding<'r, R>) -> Self {
        self.line(Line::Step, pin)
    }

    /// Set the MS1 pin.
    pub fn ms1_pin(self, pin: PinBinding<'r, R>) -> Self {
        self.line(Line::Ms1, pin)
    }

    /// Set the MS2 pin.
    pub fn ms2_pin(self, pin: PinBinding<'r, R>) -> Self {
        self.line(Line::Ms2, pin)
    }

    /// Set the MS3 pin.
    pub fn ms3_pin(self, pin: PinBinding<'r, R>) -> Self {
        self.line(Line::Ms3, pin)
    }

    /// Set the initial speed (defaults to 0).
    pub fn speed(mut self, speed: u8) -> Self {
        self.speed = speed;
        self
    }

    /// Build the attributes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingLine` for the first line without a binding.
    pub fn build(self) -> Result<StepperAttr<'r, R>> {
        let require = |pin: Option<PinBinding<'r, R>>, line| pin.ok_or(ConfigError::MissingLine(line));

        let pins = PinSet {
            dir: require(self.dir, Line::Dir)?,
            enable: require(self.enable, Line::Enable)?,
            step: require(self.step, Line::Step)?,
            ms1: require(self.ms1, Line::Ms1)?,
            ms2: require(self.ms2, Line::Ms2)?,
            ms3: require(self.ms3, Line::Ms3)?,
        };

        Ok(StepperAttr::new(pins, self.speed))
    }
}
