//! Basic stepper example.
//!
//! Steps an L298N-wired stepper forward with a 5 ms enable pulse, pausing
//! between steps, then holds and releases it.
//!
//! Pins are in-memory stand-ins that print every level change.

use std::time::Duration;

use embedded_hal::digital::{ErrorType, OutputPin};
use soft_stepper::{Gpio, PinNumber, StepperEngine};

/// Delay provider backed by the OS sleep.
struct StdDelay;

impl embedded_hal::delay::DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(ns as u64));
    }
}

/// Output pin that prints its level changes.
struct PrintPin {
    number: PinNumber,
}

impl ErrorType for PrintPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for PrintPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        println!("  pin {:>2} -> high", self.number);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        println!("  pin {:>2} -> low", self.number);
        Ok(())
    }
}

/// GPIO provider handing out printing pins.
struct PrintGpio;

impl Gpio for PrintGpio {
    type Pin = PrintPin;
    type Error = core::convert::Infallible;

    fn acquire(&mut self, number: PinNumber) -> Result<PrintPin, Self::Error> {
        println!("acquire pin {}", number);
        Ok(PrintPin { number })
    }

    fn release(&mut self, pin: PrintPin) -> Result<(), Self::Error> {
        println!("release pin {}", pin.number);
        Ok(())
    }
}

fn main() {
    println!("=== Basic Stepper Example ===\n");

    let mut gpio = PrintGpio;

    // Enable on 2, phases A-D on 3, 4, 17, 27 (Raspberry Pi BCM numbering)
    let mut stepper = StepperEngine::new(
        &mut gpio,
        2,
        [3, 4, 17, 27],
        Duration::from_millis(5),
        StdDelay,
    );

    for k in 0..8 {
        println!("step_forward() iteration {}", k);
        stepper.step_forward();
        std::thread::sleep(Duration::from_millis(200));
    }

    println!("\nHolding at phase state {}", stepper.phase_state().index());
    stepper.enable_hold();
    std::thread::sleep(Duration::from_millis(500));
    stepper.disable_hold();

    if let Err(e) = stepper.release(&mut gpio) {
        eprintln!("{}", e);
    }

    println!("\n=== Example Complete ===");
}
