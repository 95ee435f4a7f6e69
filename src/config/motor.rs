//! Motor configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::hw::{Line, PinBinding, PinSet, Register};
use crate::motor::StepperAttr;

use super::ports::PortTable;

/// One line: a named port and a bit index within it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LineConfig {
    /// Port name, resolved through the [`PortTable`].
    pub port: String<8>,
    /// Bit index (0-7).
    pub bit: u8,
}

impl LineConfig {
    /// Bit mask for this line.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBit` if `bit` is not 0-7.
    pub fn mask(&self, line: Line) -> Result<u8> {
        if self.bit < 8 {
            Ok(1 << self.bit)
        } else {
            Err(ConfigError::InvalidBit { line, bit: self.bit }.into())
        }
    }
}

/// Line assignments of one driver.
#[derive(Debug, Clone, Deserialize)]
pub struct PinsConfig {
    /// DIR line.
    pub dir: LineConfig,
    /// ENABLE line.
    pub enable: LineConfig,
    /// STEP line.
    pub step: LineConfig,
    /// MS1 line.
    pub ms1: LineConfig,
    /// MS2 line.
    pub ms2: LineConfig,
    /// MS3 line.
    pub ms3: LineConfig,
}

impl PinsConfig {
    /// Configuration of `line`.
    pub fn line(&self, line: Line) -> &LineConfig {
        match line {
            Line::Dir => &self.dir,
            Line::Enable => &self.enable,
            Line::Step => &self.step,
            Line::Ms1 => &self.ms1,
            Line::Ms2 => &self.ms2,
            Line::Ms3 => &self.ms3,
        }
    }

    /// Iterate over all lines in initialization order.
    pub fn iter(&self) -> impl Iterator<Item = (Line, &LineConfig)> + '_ {
        Line::ALL.into_iter().map(move |line| (line, self.line(line)))
    }
}

/// Complete motor configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Initial speed, in caller-defined units.
    #[serde(default)]
    pub speed: u8,

    /// Line assignments.
    pub pins: PinsConfig,
}

impl MotorConfig {
    /// Resolve the line assignments against `ports`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::PortNotFound` for an unknown port name and
    /// `ConfigError::InvalidBit` for a bit outside 0-7.
    pub fn bind<'r, R: Register + ?Sized>(
        &self,
        ports: &PortTable<'r, R>,
    ) -> Result<StepperAttr<'r, R>> {
        let bind = |line: Line| -> Result<PinBinding<'r, R>> {
            let cfg = self.pins.line(line);
            let pair = ports.get_or_error(cfg.port.as_str())?;
            Ok(PinBinding::new(pair.port, pair.ddr, cfg.mask(line)?))
        };

        let pins = PinSet {
            dir: bind(Line::Dir)?,
            enable: bind(Line::Enable)?,
            step: bind(Line::Step)?,
            ms1: bind(Line::Ms1)?,
            ms2: bind(Line::Ms2)?,
            ms3: bind(Line::Ms3)?,
        };

        Ok(StepperAttr::new(pins, self.speed))
    }
}
