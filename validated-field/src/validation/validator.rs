//! Callback-driven validator.

use log::trace;

use super::config::{ValidateFn, ValidatorConfig};
use super::{FieldValidator, Outcome};

/// A named validation rule with its transient result.
///
/// Each event first clears the previous verdict, then runs the configured
/// callback (if any) and applies its [`Outcome`]:
///
/// - `Invalid` sets the error to the default message.
/// - `InvalidWithMessage` sets the error to the given message.
/// - `Valid` marks the validator explicitly valid.
/// - `Undetermined` leaves it cleared.
///
/// `is_valid` is true when the last callback explicitly returned valid, or
/// when there is no error and the last event was a submit.
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidatorConfig,
    error: Option<String>,
    has_submitted: bool,
    explicitly_valid: bool,
}

impl Validator {
    /// Create a validator in its initial state.
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            error: None,
            has_submitted: false,
            explicitly_valid: false,
        }
    }

    /// Get the config this validator was built from
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Check if the last event processed was a submit.
    pub fn has_submitted(&self) -> bool {
        self.has_submitted
    }

    /// Check if the last callback returned an explicit pass.
    pub fn is_explicitly_valid(&self) -> bool {
        self.explicitly_valid
    }

    fn clear_verdict(&mut self) {
        self.error = None;
        self.explicitly_valid = false;
    }

    fn run(&mut self, callback: Option<ValidateFn>, value: &str) {
        let Some(callback) = callback else {
            return;
        };
        let outcome = callback(value);
        trace!("Validator '{}' returned {:?}", self.config.id, outcome);
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Undetermined => {}
            Outcome::Valid => self.explicitly_valid = true,
            Outcome::Invalid => self.error = Some(self.config.default_message.clone()),
            Outcome::InvalidWithMessage(message) => self.error = Some(message),
        }
    }
}

impl FieldValidator for Validator {
    fn id(&self) -> &str {
        &self.config.id
    }

    fn init(&mut self) {
        self.clear_verdict();
        self.has_submitted = false;
    }

    fn handle_change(&mut self, value: &str) {
        self.has_submitted = false;
        self.clear_verdict();
        self.run(self.config.validate_on_change.clone(), value);
    }

    fn handle_submit(&mut self, value: &str) {
        self.clear_verdict();
        self.has_submitted = true;
        self.run(self.config.validate_on_submit.clone(), value);
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn is_valid(&self) -> bool {
        if self.explicitly_valid {
            return true;
        }
        !self.has_error() && self.has_submitted
    }
}

impl From<ValidatorConfig> for Validator {
    fn from(config: ValidatorConfig) -> Self {
        Self::new(config)
    }
}
