//! Shared test doubles: an in-memory GPIO bank and a recording delay.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin, PinState};
use soft_stepper::{Gpio, PinNumber};

/// Levels and write history shared by every pin of one [`FakeGpio`].
#[derive(Debug, Default)]
pub struct Bus {
    levels: BTreeMap<PinNumber, PinState>,
    writes: Vec<(PinNumber, PinState)>,
}

/// Output pin that records writes on the shared bus.
pub struct FakePin {
    number: PinNumber,
    bus: Rc<RefCell<Bus>>,
}

impl FakePin {
    fn write(&mut self, level: PinState) {
        let mut bus = self.bus.borrow_mut();
        bus.levels.insert(self.number, level);
        bus.writes.push((self.number, level));
    }
}

impl ErrorType for FakePin {
    type Error = Infallible;
}

impl OutputPin for FakePin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(PinState::High);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(PinState::Low);
        Ok(())
    }
}

/// Error returned by [`FakeGpio`] for pins configured to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeError(pub PinNumber);

/// In-memory pin bank.
#[derive(Default)]
pub struct FakeGpio {
    bus: Rc<RefCell<Bus>>,
    fail_acquire: Vec<PinNumber>,
    fail_release: Vec<PinNumber>,
    pub acquired: Vec<PinNumber>,
    pub release_attempts: Vec<PinNumber>,
}

impl FakeGpio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse to hand out these pin numbers.
    pub fn failing_acquire(mut self, pins: &[PinNumber]) -> Self {
        self.fail_acquire = pins.to_vec();
        self
    }

    /// Refuse to take these pin numbers back.
    pub fn failing_release(mut self, pins: &[PinNumber]) -> Self {
        self.fail_release = pins.to_vec();
        self
    }

    /// Last level written to `pin`, if any.
    pub fn level(&self, pin: PinNumber) -> Option<PinState> {
        self.bus.borrow().levels.get(&pin).copied()
    }

    /// Levels of four pins, panicking if one was never written.
    pub fn levels(&self, pins: [PinNumber; 4]) -> [PinState; 4] {
        pins.map(|pin| self.level(pin).expect("pin never written"))
    }

    /// Every write since the last [`clear_writes`](Self::clear_writes).
    pub fn writes(&self) -> Vec<(PinNumber, PinState)> {
        self.bus.borrow().writes.clone()
    }

    pub fn clear_writes(&self) {
        self.bus.borrow_mut().writes.clear();
    }
}

impl Gpio for FakeGpio {
    type Pin = FakePin;
    type Error = FakeError;

    fn acquire(&mut self, number: PinNumber) -> Result<FakePin, FakeError> {
        if self.fail_acquire.contains(&number) {
            return Err(FakeError(number));
        }
        self.acquired.push(number);
        Ok(FakePin {
            number,
            bus: Rc::clone(&self.bus),
        })
    }

    fn release(&mut self, pin: FakePin) -> Result<(), FakeError> {
        self.release_attempts.push(pin.number);
        if self.fail_release.contains(&pin.number) {
            return Err(FakeError(pin.number));
        }
        Ok(())
    }
}

/// Delay that adds up requested nanoseconds instead of sleeping.
#[derive(Clone, Default)]
pub struct RecordingDelay {
    total_ns: Rc<Cell<u128>>,
    calls: Rc<Cell<usize>>,
}

impl RecordingDelay {
    pub fn total_ns(&self) -> u128 {
        self.total_ns.get()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns.set(self.total_ns.get() + u128::from(ns));
        self.calls.set(self.calls.get() + 1);
    }
}

/// Pin numbers used throughout the tests (the original wiring).
pub const ENABLE: PinNumber = 2;
pub const SECOND_ENABLE: PinNumber = 22;
pub const PHASES: [PinNumber; 4] = [3, 4, 17, 27];
