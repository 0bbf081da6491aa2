//! Builder pattern for StepperEngine.

use core::time::Duration;

use embedded_hal::delay::DelayNs;

use crate::config::{truncated, EnablePins, PhasePins, PinAssignment, StepperConfig, SystemConfig};
use crate::error::{ConfigError, Error, PinError, Result};
use crate::gpio::{Gpio, PinNumber};
use crate::motion::DEFAULT_PULSE_DURATION;

use super::engine::StepperEngine;
use super::pins::DriverPins;

/// Builder for creating StepperEngine instances.
pub struct StepperEngineBuilder<D>
where
    D: DelayNs,
{
    delay: Option<D>,
    name: Option<heapless::String<32>>,
    enable_pins: heapless::Vec<PinNumber, 2>,
    phase_pins: Option<PhasePins>,
    pulse_duration: Duration,
    hold: bool,
    strict: bool,
}

impl<D> Default for StepperEngineBuilder<D>
where
    D: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<D> StepperEngineBuilder<D>
where
    D: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            delay: None,
            name: None,
            enable_pins: heapless::Vec::new(),
            phase_pins: None,
            pulse_duration: DEFAULT_PULSE_DURATION,
            hold: false,
            strict: false,
        }
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: D) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the engine name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(truncated(name));
        self
    }

    /// Use a single enable line.
    pub fn enable_pin(mut self, pin: PinNumber) -> Self {
        self.enable_pins.clear();
        let _ = self.enable_pins.push(pin);
        self
    }

    /// Use two enable lines driven in lock-step.
    pub fn enable_pins(mut self, first: PinNumber, second: PinNumber) -> Self {
        self.enable_pins.clear();
        let _ = self.enable_pins.push(first);
        let _ = self.enable_pins.push(second);
        self
    }

    /// Set the phase pins in A, B, C, D order.
    pub fn phase_pins(mut self, a: PinNumber, b: PinNumber, c: PinNumber, d: PinNumber) -> Self {
        self.phase_pins = Some(PhasePins::new(a, b, c, d));
        self
    }

    /// Set the enable pulse duration (defaults to 15 ms).
    pub fn pulse_duration(mut self, duration: Duration) -> Self {
        self.pulse_duration = duration;
        self
    }

    /// Enable hold immediately after construction.
    pub fn hold(mut self, hold: bool) -> Self {
        self.hold = hold;
        self
    }

    /// Fail [`build`](Self::build) if any pin cannot be acquired.
    ///
    /// By default a missing pin is logged and the engine runs without it.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Configure from a StepperConfig.
    pub fn from_stepper_config(mut self, config: &StepperConfig) -> Self {
        self.name = Some(config.name.clone());
        self.enable_pins = config.enable_pins.clone();
        self.phase_pins = Some(config.phase_pins);
        self.pulse_duration = config.pulse_duration();
        self.hold = config.hold;
        self.strict = config.strict;
        self
    }

    /// Configure from SystemConfig by stepper name.
    pub fn from_config(self, config: &SystemConfig, stepper_name: &str) -> Result<Self> {
        let stepper_config = config.stepper(stepper_name).ok_or_else(|| {
            Error::Config(ConfigError::StepperNotFound(truncated(stepper_name)))
        })?;

        Ok(self.from_stepper_config(stepper_config))
    }

    /// Acquire the pins from `gpio` and build the StepperEngine.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing, the enable pin
    /// count is not 1 or 2, or (in strict mode) a pin cannot be acquired.
    /// In strict mode every pin that was acquired is released again before
    /// the error is returned.
    pub fn build<G>(self, gpio: &mut G) -> Result<StepperEngine<G::Pin, D>>
    where
        G: Gpio,
    {
        let phases = self
            .phase_pins
            .ok_or(Error::Config(ConfigError::MissingField("phase_pins")))?;

        if self.enable_pins.is_empty() {
            return Err(Error::Config(ConfigError::MissingField("enable_pin")));
        }
        let enable = EnablePins::from_slice(&self.enable_pins)?;

        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingField("delay")))?;

        let assignment = PinAssignment { enable, phases };
        if let Some(pin) = assignment.duplicate_pin() {
            return Err(Error::Config(ConfigError::DuplicatePin(pin)));
        }

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("stepper").unwrap_or_default());

        let pins = DriverPins::acquire(gpio, &assignment);

        if self.strict {
            if let Some(fault) = pins.faults().first().copied() {
                if let Err(e) = pins.release(gpio) {
                    log::warn!("{}: cleanup after failed acquisition: {}", name, e);
                }
                return Err(Error::Pin(PinError::Unavailable(fault)));
            }
        }

        let mut engine = StepperEngine::from_pins(name, pins, self.pulse_duration, delay);
        if self.hold {
            engine.enable_hold();
        }

        Ok(engine)
    }
}
