//! GPIO provider capability.
//!
//! The engine never opens pins itself. It asks a [`Gpio`] provider for
//! numbered output pins at construction and hands them back on release.
//! Level changes go through embedded-hal's [`OutputPin`].

use core::fmt::Debug;

use embedded_hal::digital::OutputPin;

/// Platform-defined pin identifier (BCM number, sysfs number, ...).
///
/// The engine passes it through to the provider without interpreting it.
pub type PinNumber = u32;

/// A source of numbered output pins.
///
/// Implement this for the platform's pin registry (sysfs, a HAL's pin
/// bank, a test double). Each acquired pin is owned exclusively by the
/// engine until it is released.
pub trait Gpio {
    /// Pin handle produced by this provider.
    type Pin: OutputPin;

    /// Provider-specific acquisition/release error.
    type Error: Debug;

    /// Acquire pin `number` configured as an output.
    fn acquire(&mut self, number: PinNumber) -> Result<Self::Pin, Self::Error>;

    /// Return a previously acquired pin to the provider.
    fn release(&mut self, pin: Self::Pin) -> Result<(), Self::Error>;
}
