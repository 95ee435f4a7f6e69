//! Motor module for stepper-pool.
//!
//! Per-stepper state, its pin encodings, and the handle-keyed control surface.

mod attr;
mod control;
mod direction;
mod position;
mod step_size;
mod stepper;

pub use attr::{StepperAttr, StepperAttrBuilder};
pub use direction::Direction;
pub use position::{Position, MAX_POSITION, POSITIONS_PER_REVOLUTION};
pub use step_size::StepSize;

pub(crate) use stepper::Stepper;
