//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{StepperConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks, per stepper:
/// - One or two enable pins are configured
/// - No pin number is wired to more than one line
///
/// Pin numbers themselves are platform-defined and are not range-checked.
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_name, stepper) in config.steppers.iter() {
        validate_stepper(stepper)?;
    }

    Ok(())
}

/// Validate a single stepper configuration.
pub fn validate_stepper(config: &StepperConfig) -> Result<()> {
    let assignment = config.assignment()?;

    if let Some(pin) = assignment.duplicate_pin() {
        return Err(Error::Config(ConfigError::DuplicatePin(pin)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhasePins;

    fn stepper(enable: &[u32], phases: [u32; 4]) -> StepperConfig {
        StepperConfig {
            name: heapless::String::try_from("test").unwrap(),
            enable_pins: heapless::Vec::from_slice(enable).unwrap(),
            phase_pins: PhasePins::from(phases),
            pulse_duration_us: 15_000,
            hold: false,
            strict: false,
        }
    }

    #[test]
    fn test_valid_stepper() {
        assert!(validate_stepper(&stepper(&[2], [3, 4, 17, 27])).is_ok());
        assert!(validate_stepper(&stepper(&[2, 22], [3, 4, 17, 27])).is_ok());
    }

    #[test]
    fn test_no_enable_pin() {
        let result = validate_stepper(&stepper(&[], [3, 4, 17, 27]));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidEnablePinCount(0)))
        ));
    }

    #[test]
    fn test_phase_pin_reused() {
        let result = validate_stepper(&stepper(&[2], [3, 4, 3, 27]));
        assert_eq!(result, Err(Error::Config(ConfigError::DuplicatePin(3))));
    }

    #[test]
    fn test_dual_enable_same_pin() {
        let result = validate_stepper(&stepper(&[2, 2], [3, 4, 17, 27]));
        assert_eq!(result, Err(Error::Config(ConfigError::DuplicatePin(2))));
    }
}
