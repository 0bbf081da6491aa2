//! Stepper sequencing engine.
//!
//! Generic over embedded-hal 1.0 pin and delay types.

use core::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use heapless::String;

use crate::config::{truncated, EnablePins, PhasePins, PinAssignment};
use crate::error::{PinFault, Result};
use crate::gpio::{Gpio, PinNumber};
use crate::motion::{hold_for, Direction, PhasePattern, PhaseState};

use super::builder::StepperEngineBuilder;
use super::pins::DriverPins;

/// Full-step sequencing engine for one four-wire stepper.
///
/// Owns four phase pins and one or two enable pins. Each step advances the
/// phase state by one position of the commutation table, drives the phase
/// lines, asserts the enable line(s) and blocks for the pulse duration.
///
/// Generic over:
/// - `P`: pin type produced by the [`Gpio`] provider (must implement `OutputPin`)
/// - `D`: delay provider (must implement `DelayNs`)
///
/// Every stepping method takes `&mut self`, so an engine cannot be driven
/// from two call sites at once. [`release`](Self::release) consumes the
/// engine; a released engine cannot be stepped.
pub struct StepperEngine<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Name for logging.
    name: String<32>,

    /// Phase and enable pins.
    pins: DriverPins<P>,

    /// Delay provider for the enable pulse.
    delay: D,

    /// Direction of the most recent step.
    direction: Direction,

    /// Current position in the commutation table.
    phase: PhaseState,

    /// How long the enable line is held per step.
    pulse_duration: Duration,

    /// Leave the enable line(s) asserted after a step sequence.
    hold: bool,

    /// Net full steps since construction (forward positive).
    position: i64,
}

impl<P, D> StepperEngine<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create an engine on a driver with a single enable line.
    ///
    /// Pins that cannot be acquired are logged and left unusable; see
    /// [`unavailable_pins`](Self::unavailable_pins). Use
    /// [`StepperEngineBuilder::strict`] to fail instead.
    pub fn new<G>(
        gpio: &mut G,
        enable_pin: PinNumber,
        phase_pins: [PinNumber; 4],
        pulse_duration: Duration,
        delay: D,
    ) -> Self
    where
        G: Gpio<Pin = P>,
    {
        let assignment = PinAssignment {
            enable: EnablePins::Single(enable_pin),
            phases: PhasePins::from(phase_pins),
        };
        Self::from_assignment(gpio, "stepper", &assignment, pulse_duration, delay)
    }

    /// Create an engine on a driver with two enable lines.
    ///
    /// Both enable lines are always driven to the same level.
    pub fn new_dual<G>(
        gpio: &mut G,
        enable_pins: (PinNumber, PinNumber),
        phase_pins: [PinNumber; 4],
        pulse_duration: Duration,
        delay: D,
    ) -> Self
    where
        G: Gpio<Pin = P>,
    {
        let assignment = PinAssignment {
            enable: EnablePins::Dual(enable_pins.0, enable_pins.1),
            phases: PhasePins::from(phase_pins),
        };
        Self::from_assignment(gpio, "stepper", &assignment, pulse_duration, delay)
    }

    /// Create an engine from a full pin assignment.
    pub fn from_assignment<G>(
        gpio: &mut G,
        name: &str,
        assignment: &PinAssignment,
        pulse_duration: Duration,
        delay: D,
    ) -> Self
    where
        G: Gpio<Pin = P>,
    {
        let pins = DriverPins::acquire(gpio, assignment);
        Self::from_pins(truncated(name), pins, pulse_duration, delay)
    }

    /// Start building an engine.
    pub fn builder() -> StepperEngineBuilder<D> {
        StepperEngineBuilder::new()
    }

    /// Put already acquired pins into the phase-state-0 pattern with the
    /// enable line(s) deasserted.
    pub(crate) fn from_pins(
        name: String<32>,
        mut pins: DriverPins<P>,
        pulse_duration: Duration,
        delay: D,
    ) -> Self {
        let phase = PhaseState::INITIAL;
        pins.drive_phases(phase.pattern());
        pins.set_enable(PinState::Low);

        log::debug!(
            "{}: ready with {} enable line(s), {} unavailable pin(s)",
            name,
            pins.enable_count(),
            pins.faults().len()
        );

        Self {
            name,
            pins,
            delay,
            direction: Direction::Forward,
            phase,
            pulse_duration,
            hold: false,
            position: 0,
        }
    }

    /// Get the engine name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Direction of the most recent step (forward before any step).
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current position in the commutation table.
    #[inline]
    pub fn phase_state(&self) -> PhaseState {
        self.phase
    }

    /// Phase pattern currently driven on A-D.
    #[inline]
    pub fn phase_pattern(&self) -> PhasePattern {
        self.phase.pattern()
    }

    /// Net full steps taken since construction.
    #[inline]
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Whether the enable line(s) stay asserted between steps.
    #[inline]
    pub fn is_holding(&self) -> bool {
        self.hold
    }

    /// Number of enable lines (1 or 2).
    #[inline]
    pub fn enable_pin_count(&self) -> usize {
        self.pins.enable_count()
    }

    /// Pins that could not be acquired at construction.
    #[inline]
    pub fn unavailable_pins(&self) -> &[PinFault] {
        self.pins.faults()
    }

    /// Get the enable pulse duration.
    #[inline]
    pub fn pulse_duration(&self) -> Duration {
        self.pulse_duration
    }

    /// Set the enable pulse duration. Takes effect from the next step.
    #[inline]
    pub fn set_pulse_duration(&mut self, duration: Duration) {
        self.pulse_duration = duration;
    }

    /// Take `count` full steps in `direction`.
    ///
    /// Blocks for `count` pulse durations. A `count` below 1 is logged and
    /// ignored. After the last step the enable line(s) are deasserted
    /// unless hold is enabled.
    pub fn step(&mut self, direction: Direction, count: i32) {
        if count < 1 {
            log::warn!("{}: ignoring step request for {} step(s)", self.name, count);
            return;
        }

        for _ in 0..count {
            self.direction = direction;
            self.phase = self.phase.advance(direction);
            self.position += direction.sign();
            log::trace!("{}: phase state {}", self.name, self.phase.index());

            self.pins.drive_phases(self.phase.pattern());
            self.pins.set_enable(PinState::High);
            hold_for(&mut self.delay, self.pulse_duration);
        }

        if !self.hold {
            self.pins.set_enable(PinState::Low);
        }
    }

    /// Take one step forward.
    #[inline]
    pub fn step_forward(&mut self) {
        self.step(Direction::Forward, 1);
    }

    /// Take one step backward.
    #[inline]
    pub fn step_backward(&mut self) {
        self.step(Direction::Backward, 1);
    }

    /// Take `count` steps forward.
    #[inline]
    pub fn step_forward_multi(&mut self, count: i32) {
        self.step(Direction::Forward, count);
    }

    /// Take `count` steps backward.
    #[inline]
    pub fn step_backward_multi(&mut self, count: i32) {
        self.step(Direction::Backward, count);
    }

    /// Assert the enable line(s) now and keep them asserted after steps.
    ///
    /// Locks the rotor at the current phase pattern at the cost of coil
    /// current.
    pub fn enable_hold(&mut self) {
        self.hold = true;
        self.pins.set_enable(PinState::High);
        log::debug!("{}: hold enabled", self.name);
    }

    /// Deassert the enable line(s) now and after future step sequences.
    pub fn disable_hold(&mut self) {
        self.hold = false;
        self.pins.set_enable(PinState::Low);
        log::debug!("{}: hold disabled", self.name);
    }

    /// Hand every pin back to `gpio`, consuming the engine.
    ///
    /// Every pin is attempted even if an earlier one fails.
    ///
    /// # Errors
    ///
    /// Returns [`PinError::ReleaseFailed`](crate::error::PinError::ReleaseFailed)
    /// listing each pin the provider refused.
    pub fn release<G>(self, gpio: &mut G) -> Result<()>
    where
        G: Gpio<Pin = P>,
    {
        log::debug!("{}: releasing pins", self.name);
        self.pins.release(gpio)?;
        Ok(())
    }
}
