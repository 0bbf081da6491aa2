//! Error types for soft-stepper.
//!
//! Provides unified error handling across configuration and pin management.

use core::fmt;

use crate::gpio::PinNumber;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Maximum number of pins one engine owns (4 phases + 2 enables).
pub const MAX_PINS: usize = 6;

/// Unified error type for all soft-stepper operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Pin acquisition or release error
    Pin(PinError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Stepper name not found in configuration
    StepperNotFound(heapless::String<32>),
    /// A stepper must have exactly one or two enable pins
    InvalidEnablePinCount(usize),
    /// The same pin number is assigned to more than one role
    DuplicatePin(PinNumber),
    /// A required builder field was not set
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Which line of the driver a pin is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinRole {
    /// Enable line (0 = first, 1 = second on dual-enable drivers).
    Enable(u8),
    /// One of the four phase lines.
    Phase(Phase),
}

/// Phase line label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Phase A
    A,
    /// Phase B
    B,
    /// Phase C
    C,
    /// Phase D
    D,
}

impl Phase {
    /// All phases in driving order.
    pub const ALL: [Phase; 4] = [Phase::A, Phase::B, Phase::C, Phase::D];
}

/// A single pin that failed to acquire or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinFault {
    /// Role of the pin in the driver wiring.
    pub role: PinRole,
    /// Platform pin number.
    pub pin: PinNumber,
}

/// Pin management errors.
#[derive(Debug, Clone, PartialEq)]
pub enum PinError {
    /// Pin could not be acquired (strict construction only)
    Unavailable(PinFault),
    /// One or more pins could not be handed back to the GPIO provider
    ReleaseFailed(heapless::Vec<PinFault, MAX_PINS>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Pin(e) => write!(f, "Pin error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::StepperNotFound(name) => write!(f, "Stepper '{}' not found", name),
            ConfigError::InvalidEnablePinCount(n) => {
                write!(f, "Invalid enable pin count: {}. Must be 1 or 2", n)
            }
            ConfigError::DuplicatePin(pin) => write!(f, "Pin {} is assigned more than once", pin),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for PinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinRole::Enable(index) => write!(f, "enable {}", index),
            PinRole::Phase(phase) => write!(f, "phase {:?}", phase),
        }
    }
}

impl fmt::Display for PinFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (pin {})", self.role, self.pin)
    }
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinError::Unavailable(fault) => write!(f, "Could not acquire {}", fault),
            PinError::ReleaseFailed(faults) => {
                write!(f, "Could not release {} pin(s):", faults.len())?;
                for fault in faults {
                    write!(f, " {};", fault)?;
                }
                Ok(())
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<PinError> for Error {
    fn from(e: PinError) -> Self {
        Error::Pin(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for PinError {}
