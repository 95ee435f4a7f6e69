//! State of one active stepper and the pin writes that keep it in sync.

use crate::hw::{PinSet, Register};

use super::attr::StepperAttr;
use super::direction::Direction;
use super::position::Position;
use super::step_size::StepSize;

/// One active pool slot.
///
/// Invariant: MS1..MS3 reflect `step_size`, DIR reflects `direction`, and
/// ENABLE reflects `enabled`. Every setter writes the pins before it returns.
pub(crate) struct Stepper<'r, R: ?Sized> {
    pins: PinSet<'r, R>,
    speed: u8,
    step_size: StepSize,
    desired: Position,
    direction: Direction,
    enabled: bool,
}

impl<'r, R: Register + ?Sized> Stepper<'r, R> {
    /// Configure every line as a low output and start from defaults.
    ///
    /// All lines low encodes `Full`, `Forward`, and an enabled driver, so the
    /// defaults already match the hardware.
    pub(crate) fn bring_up(attr: StepperAttr<'r, R>) -> Self {
        for (_, pin) in attr.pins.iter() {
            pin.configure_output();
        }

        Self {
            pins: attr.pins,
            speed: attr.speed,
            step_size: StepSize::Full,
            desired: Position::ZERO,
            direction: Direction::Forward,
            enabled: true,
        }
    }

    #[inline]
    pub(crate) fn pins(&self) -> PinSet<'r, R> {
        self.pins
    }

    #[inline]
    pub(crate) fn speed(&self) -> u8 {
        self.speed
    }

    #[inline]
    pub(crate) fn set_speed(&mut self, speed: u8) {
        self.speed = speed;
    }

    #[inline]
    pub(crate) fn step_size(&self) -> StepSize {
        self.step_size
    }

    pub(crate) fn set_step_size(&mut self, step_size: StepSize) {
        let [ms1, ms2, ms3] = step_size.ms_levels();
        self.pins.ms1.drive(ms1);
        self.pins.ms2.drive(ms2);
        self.pins.ms3.drive(ms3);
        self.step_size = step_size;
    }

    #[inline]
    pub(crate) fn desired(&self) -> Position {
        self.desired
    }

    #[inline]
    pub(crate) fn set_desired(&mut self, pos: Position) {
        self.desired = pos;
    }

    #[inline]
    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.pins.dir.drive(direction.dir_level());
    }

    #[inline]
    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        // ENABLE is active low
        self.pins.enable.drive(!enabled);
        self.enabled = enabled;
    }

    #[inline]
    pub(crate) fn step_engage(&self) {
        self.pins.step.drive_high();
    }
}
