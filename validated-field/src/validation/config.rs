//! Validator configuration.

use std::fmt;
use std::sync::Arc;

use super::Outcome;

/// A validator callback. Receives the candidate value, returns a verdict.
pub type ValidateFn = Arc<dyn Fn(&str) -> Outcome + Send + Sync>;

/// Configuration for one named validation rule.
///
/// # Example
///
/// ```
/// use validated_field::ValidatorConfig;
///
/// let config = ValidatorConfig::new("empty", "must not be empty")
///     .on_submit(|v: &str| if v.is_empty() { Some("custom message") } else { None });
/// assert_eq!(config.id(), "empty");
/// ```
#[derive(Clone)]
pub struct ValidatorConfig {
    pub(crate) id: String,
    pub(crate) default_message: String,
    pub(crate) validate_on_change: Option<ValidateFn>,
    pub(crate) validate_on_submit: Option<ValidateFn>,
}

impl ValidatorConfig {
    /// Create a config with no callbacks.
    pub fn new(id: impl Into<String>, default_message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            default_message: default_message.into(),
            validate_on_change: None,
            validate_on_submit: None,
        }
    }

    /// Set the callback run on every change event.
    pub fn on_change<F, O>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> O + Send + Sync + 'static,
        O: Into<Outcome>,
    {
        self.validate_on_change = Some(Arc::new(move |v: &str| -> Outcome { f(v).into() }));
        self
    }

    /// Set the callback run on every submit event.
    pub fn on_submit<F, O>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> O + Send + Sync + 'static,
        O: Into<Outcome>,
    {
        self.validate_on_submit = Some(Arc::new(move |v: &str| -> Outcome { f(v).into() }));
        self
    }

    /// Set the same callback for change and submit events.
    pub fn on_both<F, O>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> O + Send + Sync + 'static,
        O: Into<Outcome>,
    {
        let callback: ValidateFn = Arc::new(move |v: &str| -> Outcome { f(v).into() });
        self.validate_on_change = Some(Arc::clone(&callback));
        self.validate_on_submit = Some(callback);
        self
    }

    /// Get the validator id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the message used when a callback fails without one
    pub fn default_message(&self) -> &str {
        &self.default_message
    }
}

impl fmt::Debug for ValidatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorConfig")
            .field("id", &self.id)
            .field("default_message", &self.default_message)
            .field("validate_on_change", &self.validate_on_change.is_some())
            .field("validate_on_submit", &self.validate_on_submit.is_some())
            .finish()
    }
}
