//! Port table: named port/DDR register pairs supplied by the board.

use core::fmt;

use heapless::{FnvIndexMap, String};

use crate::error::{ConfigError, Error, Result};
use crate::hw::Register;

/// Maximum number of ports in a table.
pub const MAX_PORTS: usize = 16;

/// A port (data) register together with its data-direction register.
pub struct PortPair<'r, R: ?Sized> {
    /// Port (data) register.
    pub port: &'r R,
    /// Data-direction register.
    pub ddr: &'r R,
}

impl<'r, R: ?Sized> Clone for PortPair<'r, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'r, R: ?Sized> Copy for PortPair<'r, R> {}

impl<'r, R: ?Sized> fmt::Debug for PortPair<'r, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PortPair")
            .field("port", &(self.port as *const R as *const ()))
            .field("ddr", &(self.ddr as *const R as *const ()))
            .finish()
    }
}

/// Maps port names used in configuration to register pairs.
pub struct PortTable<'r, R: ?Sized> {
    ports: FnvIndexMap<String<8>, PortPair<'r, R>, MAX_PORTS>,
}

impl<'r, R: ?Sized> fmt::Debug for PortTable<'r, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ports.keys()).finish()
    }
}

impl<'r, R: Register + ?Sized> Default for PortTable<'r, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r, R: Register + ?Sized> PortTable<'r, R> {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            ports: FnvIndexMap::new(),
        }
    }

    /// Register a port under `name`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or longer than 8 characters, or
    /// if the table is full.
    pub fn register(&mut self, name: &str, port: &'r R, ddr: &'r R) -> Result<()> {
        if name.is_empty() {
            return Err(Error::Config(ConfigError::InvalidPortName));
        }
        let key = String::try_from(name).map_err(|_| ConfigError::InvalidPortName)?;

        self.ports
            .insert(key, PortPair { port, ddr })
            .map_err(|_| ConfigError::PortTableFull)?;

        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, name: &str, port: &'r R, ddr: &'r R) -> Result<Self> {
        self.register(name, port, ddr)?;
        Ok(self)
    }

    /// Get a port pair by name.
    pub fn get(&self, name: &str) -> Option<PortPair<'r, R>> {
        let key = String::<8>::try_from(name).ok()?;
        self.ports.get(&key).copied()
    }

    /// Get a port pair by name, with error if not found.
    pub fn get_or_error(&self, name: &str) -> Result<PortPair<'r, R>> {
        self.get(name).ok_or_else(|| {
            let mut key = String::new();
            // names longer than a key cannot be registered; report the prefix
            for c in name.chars() {
                if key.push(c).is_err() {
                    break;
                }
            }
            Error::Config(ConfigError::PortNotFound(key))
        })
    }

    /// Check if a port exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get the number of registered ports.
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Get an iterator over port names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ports.keys().map(|s| s.as_str())
    }
}
