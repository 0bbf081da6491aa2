//! Stepper system facade for multi-stepper configuration.
//!
//! Provides a high-level API for building several engines from one configuration.

use embedded_hal::delay::DelayNs;

use crate::config::{StepperConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::gpio::Gpio;

use super::builder::StepperEngineBuilder;
use super::engine::StepperEngine;

/// A facade for building stepper engines from named configurations.
///
/// Engines are returned to the caller, which owns them; each one drives a
/// disjoint set of pins and may be moved to its own thread.
///
/// # Example
///
/// ```rust,ignore
/// use soft_stepper::{load_config, StepperSystem};
///
/// let system = StepperSystem::from_config(load_config("steppers.toml")?);
/// let mut pan = system.build("pan", &mut gpio, delay)?;
/// pan.step_forward_multi(50);
/// ```
pub struct StepperSystem {
    /// The system configuration.
    config: SystemConfig,
}

impl StepperSystem {
    /// Create a new stepper system from configuration.
    pub fn from_config(config: SystemConfig) -> Self {
        Self { config }
    }

    /// Get the system configuration.
    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Get a stepper configuration by name.
    pub fn stepper_config(&self, name: &str) -> Option<&StepperConfig> {
        self.config.stepper(name)
    }

    /// Check if a stepper name exists in the configuration.
    pub fn has_stepper(&self, name: &str) -> bool {
        self.config.stepper(name).is_some()
    }

    /// List all configured stepper names.
    pub fn stepper_names(&self) -> impl Iterator<Item = &str> {
        self.config.stepper_names()
    }

    /// Build the engine for stepper `name`, acquiring its pins from `gpio`.
    ///
    /// The stepper's `strict` and `hold` settings are honoured.
    ///
    /// # Errors
    ///
    /// Returns an error if the name doesn't exist or building fails.
    pub fn build<G, D>(
        &self,
        name: &str,
        gpio: &mut G,
        delay: D,
    ) -> Result<StepperEngine<G::Pin, D>>
    where
        G: Gpio,
        D: DelayNs,
    {
        let stepper_config = self.config.stepper(name).ok_or_else(|| {
            Error::Config(ConfigError::StepperNotFound(
                heapless::String::try_from(name).unwrap_or_default(),
            ))
        })?;

        StepperEngineBuilder::new()
            .delay(delay)
            .from_stepper_config(stepper_config)
            .build(gpio)
    }
}
