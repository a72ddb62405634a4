/// Point-in-time view of one validator, as reported by a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorStatus {
    /// Validator id.
    pub id: String,
    /// Error message (if any).
    pub error: Option<String>,
    /// Result of `FieldValidator::is_valid`.
    pub is_valid: bool,
    /// Result of `FieldValidator::is_maybe_valid`.
    pub is_maybe_valid: bool,
}

impl ValidatorStatus {
    pub(crate) fn of(validator: &dyn super::FieldValidator) -> Self {
        Self {
            id: validator.id().to_string(),
            error: validator.error().map(str::to_string),
            is_valid: validator.is_valid(),
            is_maybe_valid: validator.is_maybe_valid(),
        }
    }

    /// Check if the validator reported an error.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
