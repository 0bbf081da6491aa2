//! # soft-stepper
//!
//! Full-step sequencing of four-wire stepper motors through an H-bridge
//! (L298N and similar), with embedded-hal 1.0 pins.
//!
//! ## Features
//!
//! - **Fixed commutation table**: four phase states, one step moves exactly one state
//! - **embedded-hal 1.0**: Uses `OutputPin` for phase/enable lines, `DelayNs` for the enable pulse
//! - **Single or dual enable**: Dual-enable drivers are driven in lock-step
//! - **Hold control**: Keep the rotor energized between steps, or release it
//! - **Best-effort wiring**: Missing pins are reported, not fatal (strict mode optional)
//! - **Configuration-driven**: Describe steppers in TOML files
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use core::time::Duration;
//! use soft_stepper::StepperEngine;
//!
//! // Enable on pin 2, phases A-D on 3, 4, 17, 27
//! let mut stepper = StepperEngine::new(
//!     &mut gpio,
//!     2,
//!     [3, 4, 17, 27],
//!     Duration::from_millis(5),
//!     delay,
//! );
//!
//! stepper.step_forward_multi(200);
//! stepper.enable_hold();
//! stepper.release(&mut gpio)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Derives `defmt::Format` for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Core modules
pub mod config;
pub mod error;
pub mod gpio;
pub mod motion;
pub mod motor;

// Re-exports for ergonomic API
pub use config::{validate_config, EnablePins, PhasePins, PinAssignment, StepperConfig, SystemConfig};
pub use error::{Error, Result};
pub use gpio::{Gpio, PinNumber};
pub use motion::{Direction, PhaseState, COMMUTATION};
pub use motor::{StepperEngine, StepperEngineBuilder, StepperSystem};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
