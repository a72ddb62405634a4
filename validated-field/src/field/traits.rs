//! Capability trait for validated fields.

use crate::validation::ValidatorStatus;

/// Read side and events of a validated field.
///
/// [`Field`](crate::Field) is the provided implementation. Code that only
/// renders or submits a field can take `&dyn ValidatedField`.
pub trait ValidatedField {
    /// Current value.
    fn value(&self) -> String;

    /// A field-level error is set or any validator has an error.
    fn has_error(&self) -> bool;

    /// The value has not been changed since construction or the last init.
    fn is_pristine(&self) -> bool {
        !self.is_dirty()
    }

    /// The value has been changed since construction or the last init.
    fn is_dirty(&self) -> bool;

    /// No validator currently reports a problem.
    fn is_maybe_valid(&self) -> bool;

    /// Every validator is valid and the field has been submitted.
    fn is_valid(&self) -> bool;

    /// Field-level error, else the first validator error (if any).
    fn first_error_message(&self) -> Option<String>;

    /// A submit has been processed since construction or the last init.
    fn was_submitted(&self) -> bool;

    /// Validators currently in an error state, in insertion order.
    fn errors(&self) -> Vec<ValidatorStatus> {
        self.validators()
            .into_iter()
            .filter(ValidatorStatus::has_error)
            .collect()
    }

    /// All validators, in insertion order.
    fn validators(&self) -> Vec<ValidatorStatus>;

    /// Process a change of the value.
    fn handle_change(&self, value: &str);

    /// Process a submit of the current value.
    fn handle_submit(&self);
}
