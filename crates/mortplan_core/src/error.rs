use std::fmt;

use crate::mortgage::{InputField, OutputField};

/// Errors raised when mortgage parameters fail validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A field that must be strictly positive was zero or negative
    NonPositive { field: &'static str, value: f64 },
    /// A dollar amount that must be nonnegative was negative
    Negative { field: &'static str, value: f64 },
    /// A percentage field outside the 0-100 range
    PercentOutOfRange { field: &'static str, value: f64 },
    ZeroTerm,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonPositive { field, value } => {
                write!(f, "{field} must be positive (got {value})")
            }
            ValidationError::Negative { field, value } => {
                write!(f, "{field} must not be negative (got {value})")
            }
            ValidationError::PercentOutOfRange { field, value } => {
                write!(f, "{field} must be a percentage between 0 and 100 (got {value})")
            }
            ValidationError::ZeroTerm => write!(f, "term_months must be nonzero"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while evaluating sensitivity sweeps
#[derive(Debug, Clone, PartialEq)]
pub enum SweepError {
    /// No sweep specs were given
    EmptySweep,
    /// No output fields were requested
    NoOutputs,
    /// A trace sweep needs at least two points to interpolate
    InvalidPointCount(usize),
    /// The surveyed output is zero at the base point, so percent changes are undefined
    ZeroBaseOutput(OutputField),
    /// No point in the sweep span moved the output past the target percentage
    TargetNotReached {
        field: InputField,
        target_percent: f64,
    },
    /// A perturbed parameter left its valid range
    Validation(ValidationError),
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::EmptySweep => write!(f, "at least one sweep spec required"),
            SweepError::NoOutputs => write!(f, "at least one output field required"),
            SweepError::InvalidPointCount(n) => {
                write!(f, "trace sweep needs at least 2 points (got {n})")
            }
            SweepError::ZeroBaseOutput(output) => {
                write!(f, "{output} is zero at the base point")
            }
            SweepError::TargetNotReached {
                field,
                target_percent,
            } => {
                write!(
                    f,
                    "sweeping {field} never changed the output by {target_percent}% (widen the span)"
                )
            }
            SweepError::Validation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SweepError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for SweepError {
    fn from(e: ValidationError) -> Self {
        SweepError::Validation(e)
    }
}
