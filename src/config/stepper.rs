//! Stepper configuration from TOML.

use core::time::Duration;

use heapless::{String, Vec};
use serde::Deserialize;

use crate::error::{ConfigError, Phase, MAX_PINS};
use crate::gpio::PinNumber;

/// Pin numbers for the four phase lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhasePins {
    /// Phase A pin.
    pub a: PinNumber,
    /// Phase B pin.
    pub b: PinNumber,
    /// Phase C pin.
    pub c: PinNumber,
    /// Phase D pin.
    pub d: PinNumber,
}

impl PhasePins {
    /// Create from pin numbers in A, B, C, D order.
    pub const fn new(a: PinNumber, b: PinNumber, c: PinNumber, d: PinNumber) -> Self {
        Self { a, b, c, d }
    }

    /// Pin numbers in driving order.
    pub const fn as_array(&self) -> [PinNumber; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Pin number wired to `phase`.
    pub const fn pin(&self, phase: Phase) -> PinNumber {
        match phase {
            Phase::A => self.a,
            Phase::B => self.b,
            Phase::C => self.c,
            Phase::D => self.d,
        }
    }
}

impl From<[PinNumber; 4]> for PhasePins {
    fn from([a, b, c, d]: [PinNumber; 4]) -> Self {
        Self { a, b, c, d }
    }
}

/// Enable line wiring: one shared enable, or two driven in lock-step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EnablePins {
    /// Single enable line.
    Single(PinNumber),
    /// Two enable lines (e.g. ENA/ENB on an L298N).
    Dual(PinNumber, PinNumber),
}

impl EnablePins {
    /// Number of enable lines.
    pub const fn count(&self) -> usize {
        match self {
            EnablePins::Single(_) => 1,
            EnablePins::Dual(_, _) => 2,
        }
    }

    /// Build from a list of one or two pin numbers.
    pub fn from_slice(pins: &[PinNumber]) -> Result<Self, ConfigError> {
        match pins {
            [pin] => Ok(EnablePins::Single(*pin)),
            [first, second] => Ok(EnablePins::Dual(*first, *second)),
            _ => Err(ConfigError::InvalidEnablePinCount(pins.len())),
        }
    }
}

/// Complete wiring of one stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinAssignment {
    /// Enable line(s).
    pub enable: EnablePins,
    /// Phase lines.
    pub phases: PhasePins,
}

impl PinAssignment {
    /// All pin numbers, enables first.
    pub fn all_pins(&self) -> Vec<PinNumber, MAX_PINS> {
        let mut pins = Vec::new();
        match self.enable {
            EnablePins::Single(pin) => {
                let _ = pins.push(pin);
            }
            EnablePins::Dual(first, second) => {
                let _ = pins.push(first);
                let _ = pins.push(second);
            }
        }
        for pin in self.phases.as_array() {
            let _ = pins.push(pin);
        }
        pins
    }

    /// First pin number that appears more than once, if any.
    pub fn duplicate_pin(&self) -> Option<PinNumber> {
        let pins = self.all_pins();
        pins.iter()
            .enumerate()
            .find(|&(i, pin)| pins[i + 1..].contains(pin))
            .map(|(_, pin)| *pin)
    }
}

/// Stepper configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct StepperConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// One or two enable pin numbers.
    pub enable_pins: Vec<PinNumber, 2>,

    /// Phase pin numbers.
    pub phase_pins: PhasePins,

    /// Enable pulse width per step, in microseconds.
    #[serde(default = "default_pulse_duration_us")]
    pub pulse_duration_us: u32,

    /// Keep the enable line(s) asserted between steps.
    #[serde(default)]
    pub hold: bool,

    /// Fail construction when any pin cannot be acquired.
    #[serde(default)]
    pub strict: bool,
}

fn default_pulse_duration_us() -> u32 {
    15_000
}

impl StepperConfig {
    /// Pulse duration as a [`Duration`].
    pub fn pulse_duration(&self) -> Duration {
        Duration::from_micros(u64::from(self.pulse_duration_us))
    }

    /// Resolve the configured pins into a [`PinAssignment`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnablePinCount`] if no enable pin is
    /// configured.
    pub fn assignment(&self) -> Result<PinAssignment, ConfigError> {
        Ok(PinAssignment {
            enable: EnablePins::from_slice(&self.enable_pins)?,
            phases: self.phase_pins,
        })
    }
}
