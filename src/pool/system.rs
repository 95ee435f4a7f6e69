//! Named stepper system built from configuration.
//!
//! Provides a high-level API for bringing up every configured motor in one
//! step and addressing them by name.

use heapless::{FnvIndexMap, String, Vec};

use crate::config::{validate_config, LineConfig, PortTable, SystemConfig, MAX_CONFIGURED_MOTORS};
use crate::error::{ConfigError, Error, PoolError, Result};
use crate::hw::{PinBinding, Register};
use crate::motor::StepperAttr;

use super::{Handle, StepperPool, MAX_STEPPERS};

/// Maximum number of named motors a system tracks.
pub const MAX_NAMED_MOTORS: usize = MAX_CONFIGURED_MOTORS;

/// A stepper pool plus the names its steppers were configured under.
///
/// # Example
///
/// ```rust,ignore
/// use stepper_pool::{PortTable, StepperSystem, StepSize};
///
/// let config = stepper_pool::load_config("steppers.toml")?;
/// let ports = PortTable::new().with("B", portb, ddrb)?.with("C", portc, ddrc)?;
///
/// let mut system: StepperSystem<'_, _> = StepperSystem::from_config(&config, &ports)?;
/// let pan = system.handle_or_error("pan")?;
/// system.pool_mut().set_step_size(pan, StepSize::Eighth)?;
/// ```
pub struct StepperSystem<'r, R: ?Sized, const N: usize = MAX_STEPPERS> {
    pool: StepperPool<'r, R, N>,
    handles: FnvIndexMap<String<32>, Handle, MAX_NAMED_MOTORS>,
}

impl<'r, R: Register + ?Sized, const N: usize> StepperSystem<'r, R, N> {
    /// Construct every motor in `config` into a fresh pool.
    ///
    /// The configuration is validated and every motor is bound to `ports`
    /// before any register is written, so a failure leaves the hardware
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if validation or binding fails,
    /// `ConfigError::LineConflict` if two lines land on the same bit of the
    /// same register (including through two port names for one register),
    /// and `PoolError::Exhausted` if the configuration holds more motors
    /// than `N`.
    pub fn from_config(config: &SystemConfig, ports: &PortTable<'r, R>) -> Result<Self> {
        validate_config(config)?;

        let mut bound: Vec<(&str, StepperAttr<'r, R>), MAX_CONFIGURED_MOTORS> = Vec::new();
        let mut claimed: Vec<PinBinding<'r, R>, { MAX_CONFIGURED_MOTORS * 6 }> = Vec::new();
        for (name, motor) in config.iter() {
            let attr = motor.bind(ports)?;
            for (line, pin) in attr.pins.iter() {
                if claimed.iter().any(|other| overlaps(other, &pin)) {
                    return Err(conflict(motor.pins.line(line)));
                }
                // six lines per motor, MAX_CONFIGURED_MOTORS motors
                let _ = claimed.push(pin);
            }
            // config maps hold at most MAX_CONFIGURED_MOTORS entries
            let _ = bound.push((name, attr));
        }

        if bound.len() > N {
            return Err(Error::Pool(PoolError::Exhausted { capacity: N }));
        }

        let mut system = Self {
            pool: StepperPool::new(),
            handles: FnvIndexMap::new(),
        };
        for (name, attr) in bound {
            let handle = system.pool.construct(attr)?;
            let key = String::try_from(name).unwrap_or_default();
            // names come from a map of the same key type and capacity, so they are unique and fit
            let _ = system.handles.insert(key, handle);
            debug!("stepper {} bound from configuration", handle);
        }

        Ok(system)
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &StepperPool<'r, R, N> {
        &self.pool
    }

    /// Get the underlying pool for control operations.
    pub fn pool_mut(&mut self) -> &mut StepperPool<'r, R, N> {
        &mut self.pool
    }

    /// Get the handle of a named motor.
    ///
    /// Returns `None` if no motor with that name is held.
    pub fn handle(&self, name: &str) -> Option<Handle> {
        self.handles
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, h)| *h)
    }

    /// Get the handle of a named motor, with error if not found.
    pub fn handle_or_error(&self, name: &str) -> Result<Handle> {
        self.handle(name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                String::try_from(name).unwrap_or_default(),
            ))
        })
    }

    /// List the names of held motors.
    pub fn motor_names(&self) -> impl Iterator<Item = &str> {
        self.handles.keys().map(|s| s.as_str())
    }

    /// Destruct a named motor and forget its name.
    ///
    /// Returns the released handle, or `None` if the name is unknown.
    pub fn release(&mut self, name: &str) -> Option<Handle> {
        let key = String::<32>::try_from(name).ok()?;
        let handle = self.handles.remove(&key)?;
        self.pool.destruct(handle);
        Some(handle)
    }
}

/// Same data register, at least one shared bit.
fn overlaps<R: Register + ?Sized>(a: &PinBinding<'_, R>, b: &PinBinding<'_, R>) -> bool {
    core::ptr::eq(a.port(), b.port()) && a.mask() & b.mask() != 0
}

fn conflict(line: &LineConfig) -> Error {
    Error::Config(ConfigError::LineConflict {
        port: line.port.clone(),
        bit: line.bit,
    })
}
