//! Error types for numeric, view and aggregate operations.
//!
//! Every fallible operation in the workspace returns [`NumericsError`]. Each
//! variant names the offending argument so callers can tell which operand was
//! rejected without inspecting the call site.

use thiserror::Error;

/// Result type alias for numeric operations that may fail.
pub type Result<T> = core::result::Result<T, NumericsError>;

/// Errors that can occur while constructing or operating on numeric data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericsError {
    /// Buffer length does not equal the product of the shape.
    #[error("Shape mismatch for '{name}': shape {shape:?} needs {expected} elements, got {actual}")]
    ShapeMismatch {
        /// Name of the argument.
        name: &'static str,
        /// Requested shape.
        shape: Vec<usize>,
        /// Element count implied by the shape.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// A value collides with the bit pattern reserved for NA.
    #[error("Value {value} for '{name}' is reserved as NA")]
    SentinelCollision {
        /// Name of the argument.
        name: &'static str,
        /// Rejected value rendered as text.
        value: String,
    },

    /// A missing value was unwrapped.
    #[error("Value of '{name}' is NA")]
    NaValue {
        /// Name of the argument.
        name: &'static str,
    },

    /// Elementwise operands have different lengths.
    #[error("Length mismatch for '{name}': expected {expected}, got {actual}")]
    LengthMismatch {
        /// Name of the argument.
        name: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// A divisor element is zero.
    #[error("Division by zero in '{name}' at index {index}")]
    DivideByZero {
        /// Name of the divisor argument.
        name: &'static str,
        /// Position of the first zero divisor.
        index: usize,
    },

    /// Checked arithmetic overflowed.
    #[error("Arithmetic overflow in '{name}'")]
    Overflow {
        /// Name of the argument.
        name: &'static str,
    },

    /// A required argument was absent.
    #[error("Argument '{name}' must not be null")]
    NullArgument {
        /// Name of the argument.
        name: &'static str,
    },

    /// A named item was not found.
    #[error("Key not found: '{0}'")]
    KeyNotFound(String),

    /// Data did not have the expected type or form.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A reduction without an identity element received no values.
    #[error("Argument '{name}' must not be empty")]
    EmptyInput {
        /// Name of the argument.
        name: &'static str,
    },

    /// A value or label is already present in a label collection.
    #[error("Duplicate value label for '{name}': {value}")]
    DuplicateValueLabel {
        /// Name of the argument.
        name: &'static str,
        /// Offending value or label rendered as text.
        value: String,
    },
}

impl NumericsError {
    /// Create a length mismatch error, or `Ok` when the lengths agree.
    ///
    /// # Errors
    ///
    /// Returns [`NumericsError::LengthMismatch`] if `actual != expected`.
    pub fn check_length(name: &'static str, expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::LengthMismatch {
                name,
                expected,
                actual,
            })
        }
    }

    /// Create an invalid-data error from any displayable message.
    #[must_use]
    pub fn invalid_data(message: impl core::fmt::Display) -> Self {
        Self::InvalidData(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NumericsError::ShapeMismatch {
            name: "buffer",
            shape: vec![2, 3],
            expected: 6,
            actual: 5,
        };
        assert_eq!(
            err.to_string(),
            "Shape mismatch for 'buffer': shape [2, 3] needs 6 elements, got 5"
        );

        let err = NumericsError::LengthMismatch {
            name: "y",
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Length mismatch for 'y': expected 4, got 3");

        let err = NumericsError::DivideByZero { name: "y", index: 2 };
        assert_eq!(err.to_string(), "Division by zero in 'y' at index 2");
    }

    #[test]
    fn test_messages_carry_argument_name() {
        let errors = [
            NumericsError::NaValue { name: "value" },
            NumericsError::Overflow { name: "value" },
            NumericsError::NullArgument { name: "value" },
            NumericsError::EmptyInput { name: "value" },
            NumericsError::SentinelCollision {
                name: "value",
                value: "127".to_string(),
            },
        ];
        for err in errors {
            assert!(err.to_string().contains("'value'"), "{err}");
        }
    }

    #[test]
    fn test_check_length() {
        assert!(NumericsError::check_length("x", 3, 3).is_ok());
        assert_eq!(
            NumericsError::check_length("x", 3, 2),
            Err(NumericsError::LengthMismatch {
                name: "x",
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_invalid_data_helper() {
        let err = NumericsError::invalid_data("column 'a' holds int32");
        assert_eq!(err.to_string(), "Invalid data: column 'a' holds int32");
    }
}
