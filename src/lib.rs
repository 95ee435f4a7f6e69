//! # stepper-pool
//!
//! A fixed-capacity pool of stepper motors driven through A4988-style driver
//! chips wired to memory-mapped, byte-wide GPIO ports.
//!
//! ## Features
//!
//! - **Fixed pool**: at most `N` active steppers (default 2), no allocation
//! - **Generation-checked handles**: a released handle never reaches the next
//!   occupant of its slot
//! - **Register-level pins**: each line is a bit in a port register plus its
//!   data-direction register, behind the [`Register`] trait
//! - **embedded-hal 1.0**: every [`PinBinding`] is also an `OutputPin`
//! - **Configuration-driven**: describe line wiring in TOML
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust
//! use stepper_pool::{PinBinding, SimRegister, StepSize, StepperAttr, StepperPool};
//!
//! let (port, ddr) = (SimRegister::default(), SimRegister::default());
//! let pin = |bit: u8| PinBinding::new(&port, &ddr, 1 << bit);
//!
//! let attr = StepperAttr::builder()
//!     .dir_pin(pin(0))
//!     .enable_pin(pin(1))
//!     .step_pin(pin(2))
//!     .ms1_pin(pin(3))
//!     .ms2_pin(pin(4))
//!     .ms3_pin(pin(5))
//!     .speed(5)
//!     .build()?;
//!
//! let mut pool: StepperPool<'_, SimRegister> = StepperPool::new();
//! let motor = pool.construct(attr)?;
//! pool.set_step_size(motor, StepSize::Eighth)?;
//! pool.set_position(motor, 120)?;
//! pool.step_engage(motor)?;
//! # Ok::<(), stepper_pool::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod hw;
pub mod motor;
pub mod pool;

// Re-exports for ergonomic API
pub use config::{validate_config, MotorConfig, PortTable, SystemConfig};
pub use error::{Error, Result};
pub use hw::{Line, PinBinding, PinSet, Reg8, Register, SimRegister};
pub use motor::{Direction, Position, StepSize, StepperAttr, StepperAttrBuilder, MAX_POSITION};
pub use pool::{Handle, StepperPool, StepperSystem, MAX_STEPPERS};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
