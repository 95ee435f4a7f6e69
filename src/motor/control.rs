//! Handle-keyed control surface.
//!
//! Every accessor resolves its handle first and fails with
//! `PoolError::HandleInvalid` before touching any state or pin.

use crate::error::Result;
use crate::hw::{PinSet, Register};
use crate::pool::{Handle, StepperPool};

use super::direction::Direction;
use super::position::Position;
use super::step_size::StepSize;

impl<'r, R: Register + ?Sized, const N: usize> StepperPool<'r, R, N> {
    /// Set the speed. Stored verbatim for the step-timing loop; no pin is touched.
    pub fn set_speed(&mut self, handle: Handle, speed: u8) -> Result<()> {
        self.resolve_mut(handle)?.set_speed(speed);
        Ok(())
    }

    /// Get the speed.
    pub fn speed(&self, handle: Handle) -> Result<u8> {
        Ok(self.resolve(handle)?.speed())
    }

    /// Select the microstep resolution.
    ///
    /// MS1, MS2 and MS3 are each set or cleared in place on their port
    /// register, then the new size is recorded.
    pub fn set_step_size(&mut self, handle: Handle, step_size: StepSize) -> Result<()> {
        self.resolve_mut(handle)?.set_step_size(step_size);
        Ok(())
    }

    /// Get the microstep resolution.
    pub fn step_size(&self, handle: Handle) -> Result<StepSize> {
        Ok(self.resolve(handle)?.step_size())
    }

    /// Set the target position.
    ///
    /// This only records the target; stepping toward it is up to the caller's
    /// control loop.
    ///
    /// # Errors
    ///
    /// `PoolError::HandleInvalid` is checked before the range, then
    /// `MotorError::PositionInvalid` if `pos` exceeds
    /// [`MAX_POSITION`](super::MAX_POSITION). The stored target is unchanged on error.
    pub fn set_position(&mut self, handle: Handle, pos: u8) -> Result<()> {
        let stepper = self.resolve_mut(handle)?;
        stepper.set_desired(Position::new(pos)?);
        Ok(())
    }

    /// Get the target position.
    pub fn desired_position(&self, handle: Handle) -> Result<Position> {
        Ok(self.resolve(handle)?.desired())
    }

    /// Set the direction and drive DIR to match (low forward, high backward).
    pub fn set_direction(&mut self, handle: Handle, direction: Direction) -> Result<()> {
        self.resolve_mut(handle)?.set_direction(direction);
        Ok(())
    }

    /// Get the direction.
    pub fn direction(&self, handle: Handle) -> Result<Direction> {
        Ok(self.resolve(handle)?.direction())
    }

    /// Raise the STEP line.
    ///
    /// The driver steps on the rising edge. Lowering the line again after the
    /// pulse width is the control loop's job, through the STEP binding from
    /// [`pins`](Self::pins).
    pub fn step_engage(&mut self, handle: Handle) -> Result<()> {
        self.resolve(handle)?.step_engage();
        Ok(())
    }

    /// Enable or disable the driver outputs (ENABLE is active low).
    pub fn set_enabled(&mut self, handle: Handle, enabled: bool) -> Result<()> {
        self.resolve_mut(handle)?.set_enabled(enabled);
        Ok(())
    }

    /// Check whether the driver is enabled.
    pub fn is_enabled(&self, handle: Handle) -> Result<bool> {
        Ok(self.resolve(handle)?.is_enabled())
    }

    /// Line bindings of a stepper.
    pub fn pins(&self, handle: Handle) -> Result<PinSet<'r, R>> {
        Ok(self.resolve(handle)?.pins())
    }
}
