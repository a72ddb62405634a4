use serde::{Deserialize, Serialize};

/// Per-field configuration.
///
/// Deserializes from any serde format; missing keys take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Replace the value with its trimmed form before validators see a submit.
    pub trim_on_submit: bool,

    /// Marks the field as required. Stored for callers; the field itself
    /// does not act on it. Use [`rules::required`](crate::rules::required)
    /// to enforce a value.
    pub required: bool,
}

impl FieldConfig {
    /// Create the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim the value on submit.
    pub fn trim_on_submit(mut self) -> Self {
        self.trim_on_submit = true;
        self
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}
