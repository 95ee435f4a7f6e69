//! Hardware layer for stepper-pool.
//!
//! Byte-wide GPIO registers and the pin bindings built on top of them.

mod mmio;
mod pin;
mod register;
mod sim;

pub use mmio::Reg8;
pub use pin::{Line, PinBinding, PinSet};
pub use register::Register;
pub use sim::SimRegister;
