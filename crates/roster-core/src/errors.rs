//! Error types for Roster.
//!
//! Selection and parsing never fail: missing runs or enrollments are `None`,
//! and malformed requirement nodes are dropped with a warning. Errors exist
//! for callers that demand a value (`CoreError`) and for the requirement tree
//! builder, which rejects invalid fixtures (`RequirementError`).

use thiserror::Error;

/// Errors raised when a caller requires a value the data does not contain.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Requirement tree construction failed.
    #[error(transparent)]
    Requirement(#[from] RequirementError),
}

/// Errors raised by [`crate::requirements::builder::RequirementTreeBuilder`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequirementError {
    /// The operator kind is missing or not one the parser understands.
    #[error("Unsupported requirement operator")]
    UnsupportedOperator,

    /// `min_number_of` was given without an `operator_value`.
    #[error("Operator 'min_number_of' requires an operator_value")]
    MissingOperatorValue,

    /// `operator_value` is not a positive integer.
    #[error("Invalid operator_value '{0}': expected a positive integer")]
    InvalidOperatorValue(String),

    /// A handle that does not belong to this builder was used.
    #[error("Unknown operator handle {0}")]
    UnknownHandle(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_error_converts_into_core_error() {
        let err: CoreError = RequirementError::MissingOperatorValue.into();
        assert!(matches!(
            err,
            CoreError::Requirement(RequirementError::MissingOperatorValue)
        ));
        assert_eq!(
            err.to_string(),
            "Operator 'min_number_of' requires an operator_value"
        );
    }

    #[test]
    fn not_found_message_names_entity() {
        let err = CoreError::NotFound {
            entity_type: "course_run".into(),
            id: "42".into(),
        };
        assert_eq!(err.to_string(), "Entity not found: course_run 42");
    }
}
