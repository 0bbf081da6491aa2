//! Configuration module for soft-stepper.
//!
//! Provides types for loading and validating stepper wiring and timing
//! from TOML files (with `std` feature) or pre-parsed data.

mod stepper;
mod system;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use stepper::{EnablePins, PhasePins, PinAssignment, StepperConfig};
pub use system::SystemConfig;
pub use validation::{validate_config, validate_stepper};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

/// Copy as much of `msg` as fits into a fixed-capacity string.
pub(crate) fn truncated<const N: usize>(msg: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for ch in msg.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
