//! Engine error taxonomy
//!
//! Incomplete input is not an error: calculators return `Ok(None)` for it.
//! Everything here is recoverable at the call boundary.

use thiserror::Error as ThisError;

/// Errors raised by the estimation engine
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum EngineError {
    /// A category/subtype pair has no entry in the emission factor table
    #[error("unknown {category} subtype '{subtype}'")]
    UnknownSubtype { category: String, subtype: String },

    /// A numeric field is negative, NaN or infinite
    #[error("invalid value for {field}: {value}")]
    InvalidInput { field: &'static str, value: f64 },

    /// The operation has no meaning for the requested subtype
    #[error("unsupported: {0}")]
    Unsupported(&'static str),

    /// A configuration value violates a table invariant
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    pub fn unknown_subtype(category: impl Into<String>, subtype: impl Into<String>) -> Self {
        EngineError::UnknownSubtype {
            category: category.into(),
            subtype: subtype.into(),
        }
    }
}

/// Shorthand for engine results
pub type EngineResult<T> = Result<T, EngineError>;

/// Reject negative and non-finite quantities
///
/// Zero passes; whether zero means "incomplete" is the caller's decision.
pub fn ensure_quantity(field: &'static str, value: f64) -> EngineResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EngineError::InvalidInput { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_subtype_message() {
        let err = EngineError::unknown_subtype("electricity", "nuclear");
        assert_eq!(err.to_string(), "unknown electricity subtype 'nuclear'");
    }

    #[test]
    fn test_ensure_quantity() {
        assert_eq!(ensure_quantity("kwh", 0.0), Ok(0.0));
        assert_eq!(ensure_quantity("kwh", 12.5), Ok(12.5));
        assert!(ensure_quantity("kwh", -1.0).is_err());
        assert!(ensure_quantity("kwh", f64::NAN).is_err());
        assert!(ensure_quantity("kwh", f64::INFINITY).is_err());
    }
}
