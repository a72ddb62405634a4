use std::fmt;

use serde::{Deserialize, Serialize};

/// Every derived query of a field, read under a single lock.
///
/// `Display` renders the compact state line used in tests and logs:
///
/// ```text
/// prist:true,dirty:false,maybe:true,valid:false,sub:false,err:none
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    /// Current value.
    pub value: String,
    /// Value untouched since construction or the last init.
    pub is_pristine: bool,
    /// Value changed since construction or the last init.
    pub is_dirty: bool,
    /// No validator reports a problem.
    pub is_maybe_valid: bool,
    /// Every validator is valid and the field was submitted.
    pub is_valid: bool,
    /// A submit was processed since construction or the last init.
    pub was_submitted: bool,
    /// Field-level error, else the first validator error.
    pub first_error_message: Option<String>,
}

impl fmt::Display for FieldSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "prist:{},dirty:{},maybe:{},valid:{},sub:{},err:{}",
            self.is_pristine,
            self.is_dirty,
            self.is_maybe_valid,
            self.is_valid,
            self.was_submitted,
            self.first_error_message.as_deref().unwrap_or("none"),
        )
    }
}
