//! Motion module for soft-stepper.
//!
//! Provides step direction, the commutation table and pulse timing.

mod commutation;
mod direction;
mod pulse;

pub use commutation::{PhasePattern, PhaseState, COMMUTATION, PHASE_STATES};
pub use direction::Direction;
pub use pulse::{hold_for, DEFAULT_PULSE_DURATION};
