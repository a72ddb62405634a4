//! Capability trait for validators owned by a field.

/// A validation rule that a [`Field`](crate::Field) can own and drive.
///
/// The field only talks to its validators through this trait, so a custom
/// implementation can be inserted with
/// [`Field::insert_validator`](crate::Field::insert_validator) without
/// changing how the field aggregates results.
pub trait FieldValidator: Send + Sync {
    /// Stable identifier, unique within a field.
    fn id(&self) -> &str;

    /// Reset transient state. Configuration is kept.
    fn init(&mut self);

    /// Process a change of the candidate value.
    fn handle_change(&mut self, value: &str);

    /// Process a submit of the candidate value.
    fn handle_submit(&mut self, value: &str);

    /// Current error message (if any).
    fn error(&self) -> Option<&str>;

    /// Check if the validator currently reports an error.
    fn has_error(&self) -> bool {
        self.error().is_some()
    }

    /// No problem is currently known. True before any validation has run.
    fn is_maybe_valid(&self) -> bool {
        !self.has_error()
    }

    /// The validator has positively accepted the value.
    fn is_valid(&self) -> bool;
}
