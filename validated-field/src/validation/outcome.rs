//! Result of running a validator callback.

/// The verdict returned by a validator callback.
///
/// Callbacks usually return something that converts into an `Outcome`:
///
/// | callback returns         | outcome                   |
/// |--------------------------|---------------------------|
/// | `()` / `None`            | `Undetermined`            |
/// | `true` / `Some(true)`    | `Valid`                   |
/// | `false` / `Some(false)`  | `Invalid`                 |
/// | `String` / `&str`        | `InvalidWithMessage(..)`  |
/// | `Ok(())` / `Err(msg)`    | `Undetermined` / message  |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Outcome {
    /// No verdict. The validator stays error-free without claiming validity.
    #[default]
    Undetermined,
    /// Explicitly valid. Overrides the submit requirement of `is_valid`.
    Valid,
    /// Invalid with the validator's default message.
    Invalid,
    /// Invalid with a custom message.
    InvalidWithMessage(String),
}

impl Outcome {
    /// Check if this outcome puts the validator into an error state.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Invalid | Self::InvalidWithMessage(_))
    }
}

impl From<()> for Outcome {
    fn from(_: ()) -> Self {
        Self::Undetermined
    }
}

impl From<bool> for Outcome {
    fn from(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }
}

impl From<Option<bool>> for Outcome {
    fn from(value: Option<bool>) -> Self {
        value.map(Self::from).unwrap_or_default()
    }
}

impl From<String> for Outcome {
    fn from(message: String) -> Self {
        Self::InvalidWithMessage(message)
    }
}

impl From<&str> for Outcome {
    fn from(message: &str) -> Self {
        Self::InvalidWithMessage(message.to_string())
    }
}

impl From<Option<&str>> for Outcome {
    fn from(message: Option<&str>) -> Self {
        message.map(Self::from).unwrap_or_default()
    }
}

impl From<Option<String>> for Outcome {
    fn from(message: Option<String>) -> Self {
        message.map(Self::InvalidWithMessage).unwrap_or_default()
    }
}

impl From<Result<(), String>> for Outcome {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::Undetermined,
            Err(message) => Self::InvalidWithMessage(message),
        }
    }
}
