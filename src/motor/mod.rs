//! Motor module for soft-stepper.
//!
//! Provides the sequencing engine, its builder and a multi-stepper facade.

mod builder;
mod engine;
mod pins;
mod system;

pub use builder::StepperEngineBuilder;
pub use engine::StepperEngine;
pub use system::StepperSystem;
