//! Pin ownership for one driver.
//!
//! Each line is held in a [`PinSlot`]. A slot whose acquisition failed stays
//! empty for the engine's lifetime and writes to it are skipped, so a
//! partially wired driver keeps running on the lines it does have.

use embedded_hal::digital::{OutputPin, PinState};
use heapless::Vec;

use crate::config::{EnablePins, PinAssignment};
use crate::error::{Phase, PinError, PinFault, PinRole, MAX_PINS};
use crate::gpio::{Gpio, PinNumber};
use crate::motion::PhasePattern;

/// One driver line and the pin handle wired to it, if acquired.
pub(crate) struct PinSlot<P> {
    role: PinRole,
    number: PinNumber,
    pin: Option<P>,
}

impl<P: OutputPin> PinSlot<P> {
    fn acquire<G: Gpio<Pin = P>>(gpio: &mut G, role: PinRole, number: PinNumber) -> Self {
        let pin = match gpio.acquire(number) {
            Ok(pin) => Some(pin),
            Err(e) => {
                log::warn!("could not acquire {} (pin {}): {:?}", role, number, e);
                None
            }
        };
        Self { role, number, pin }
    }

    fn fault(&self) -> PinFault {
        PinFault {
            role: self.role,
            pin: self.number,
        }
    }

    fn drive(&mut self, level: PinState) {
        if let Some(pin) = self.pin.as_mut() {
            if let Err(e) = pin.set_state(level) {
                log::warn!("write to {} (pin {}) failed: {:?}", self.role, self.number, e);
            }
        }
    }

    fn release<G: Gpio<Pin = P>>(self, gpio: &mut G) -> Result<(), PinFault> {
        let fault = self.fault();
        match self.pin {
            Some(pin) => gpio.release(pin).map_err(|e| {
                log::warn!("could not release {}: {:?}", fault, e);
                fault
            }),
            // Never acquired, nothing to hand back.
            None => Ok(()),
        }
    }
}

/// Every pin owned by one engine: four phase lines plus one or two enables.
pub(crate) struct DriverPins<P> {
    phases: [PinSlot<P>; 4],
    enable: Vec<PinSlot<P>, 2>,
    faults: Vec<PinFault, MAX_PINS>,
}

impl<P: OutputPin> DriverPins<P> {
    /// Acquire every pin in `assignment`, enables first.
    ///
    /// Failed acquisitions are logged and recorded in [`Self::faults`].
    pub(crate) fn acquire<G: Gpio<Pin = P>>(gpio: &mut G, assignment: &PinAssignment) -> Self {
        let mut enable = Vec::new();
        let enable_numbers: Vec<PinNumber, 2> = match assignment.enable {
            EnablePins::Single(pin) => Vec::from_iter([pin]),
            EnablePins::Dual(first, second) => Vec::from_iter([first, second]),
        };
        for (index, number) in enable_numbers.into_iter().enumerate() {
            let slot = PinSlot::acquire(gpio, PinRole::Enable(index as u8), number);
            let _ = enable.push(slot);
        }

        let phases = Phase::ALL.map(|phase| {
            PinSlot::acquire(&mut *gpio, PinRole::Phase(phase), assignment.phases.pin(phase))
        });

        let faults = enable
            .iter()
            .chain(phases.iter())
            .filter(|slot| slot.pin.is_none())
            .map(PinSlot::fault)
            .collect();

        Self {
            phases,
            enable,
            faults,
        }
    }

    /// Lines whose pin could not be acquired.
    pub(crate) fn faults(&self) -> &[PinFault] {
        &self.faults
    }

    /// Number of enable lines (1 or 2).
    pub(crate) fn enable_count(&self) -> usize {
        self.enable.len()
    }

    /// Drive phase lines A-D to `pattern`.
    pub(crate) fn drive_phases(&mut self, pattern: PhasePattern) {
        for (slot, level) in self.phases.iter_mut().zip(pattern) {
            slot.drive(level);
        }
    }

    /// Drive every enable line to `level`.
    pub(crate) fn set_enable(&mut self, level: PinState) {
        for slot in self.enable.iter_mut() {
            slot.drive(level);
        }
    }

    /// Hand every acquired pin back to `gpio`.
    ///
    /// All pins are attempted; failures are collected rather than
    /// stopping at the first one.
    pub(crate) fn release<G: Gpio<Pin = P>>(self, gpio: &mut G) -> Result<(), PinError> {
        let mut failed: Vec<PinFault, MAX_PINS> = Vec::new();
        for slot in self.enable.into_iter().chain(self.phases) {
            if let Err(fault) = slot.release(gpio) {
                let _ = failed.push(fault);
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(PinError::ReleaseFailed(failed))
        }
    }
}
