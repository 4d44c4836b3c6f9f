use thiserror::Error;

/// Invalid configuration, reported before a simulation is constructed.
///
/// Every variant names the offending parameter so the message alone is enough
/// to tell the user what to fix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{parameter} must be a positive finite length, got {value}")]
    InvalidArmLength { parameter: &'static str, value: f64 },

    #[error("{parameter} must be a positive finite mass, got {value}")]
    InvalidMass { parameter: &'static str, value: f64 },

    #[error("{parameter} must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },

    #[error("double pendulum denominator 2*first_mass + second_mass - second_mass*cos(2*first_angle - 2*second_angle) evaluates to {value}")]
    DegenerateDenominator { value: f64 },

    #[error("trace capacity must be at least 1")]
    InvalidTraceCapacity,

    #[error("physics parameter {parameter} is out of range, got {value}")]
    InvalidParams { parameter: &'static str, value: f64 },
}

impl ConfigError {
    /// Name of the parameter that failed validation, if the error has one.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArmLength { parameter, .. }
            | Self::InvalidMass { parameter, .. }
            | Self::NonFinite { parameter, .. }
            | Self::InvalidParams { parameter, .. } => Some(parameter),
            Self::DegenerateDenominator { .. } => None,
            Self::InvalidTraceCapacity => Some("trace"),
        }
    }
}

pub(crate) fn check_length(parameter: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidArmLength { parameter, value })
    }
}

pub(crate) fn check_mass(parameter: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidMass { parameter, value })
    }
}

pub(crate) fn check_finite(parameter: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { parameter, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_parameter() {
        let err = check_length("second_arm_length", 0.0).unwrap_err();
        assert_eq!(err.parameter(), Some("second_arm_length"));
        assert!(err.to_string().contains("second_arm_length"));
    }

    #[test]
    fn test_checks_reject_nan() {
        assert!(check_mass("first_mass", f64::NAN).is_err());
        assert!(check_finite("angle", f64::INFINITY).is_err());
        assert_eq!(check_finite("angle", -7.5), Ok(-7.5));
    }
}
