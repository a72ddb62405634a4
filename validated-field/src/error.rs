//! Configuration errors.

use thiserror::Error;

/// Errors raised while configuring a field or building a rule.
///
/// Validation failures are not errors in this sense; they are reported
/// through the field and validator queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A validator was configured with a blank id.
    #[error("Validator id must not be empty")]
    EmptyValidatorId,

    /// A validator id is already registered on the field, or repeated in one batch.
    #[error("Validator '{id}' is already registered")]
    DuplicateValidatorId {
        /// The conflicting id.
        id: String,
    },

    /// A pattern rule was given a regex that does not compile.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The source pattern.
        pattern: String,
        /// Compiler message from the regex engine.
        message: String,
    },
}

impl ConfigError {
    /// Creates a duplicate id error.
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateValidatorId { id: id.into() }
    }

    /// Creates an invalid pattern error from a regex compile failure.
    pub fn invalid_pattern(pattern: impl Into<String>, err: &regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: err.to_string(),
        }
    }
}
