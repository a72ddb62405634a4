//! Reactive validation state for a single form field.
//!
//! A [`Field`] tracks its current value, whether it has been edited or
//! submitted, an optional externally set error, and a set of named
//! validators. Every query reads live state, so a caller can mutate the
//! field and immediately ask whether it is valid.
//!
//! # Example
//!
//! ```
//! use validated_field::prelude::*;
//!
//! let email = Field::new();
//! email.add_validators([
//!     rules::required("required", "Email is required"),
//!     rules::email("email", "Please enter a valid email"),
//! ]);
//!
//! email.handle_change("not-an-email");
//! assert!(email.has_error());
//!
//! email.handle_change("someone@example.com");
//! email.handle_submit();
//! assert!(email.is_valid());
//! ```

pub mod error;
pub mod field;
pub mod validation;

pub use error::ConfigError;
pub use field::{Field, FieldConfig, FieldId, FieldSnapshot, ValidatedField, WatchId};
pub use validation::{FieldValidator, Outcome, Validator, ValidatorConfig, ValidatorStatus, rules};

pub mod prelude {
    pub use crate::error::ConfigError;
    pub use crate::field::{Field, FieldConfig, FieldSnapshot, ValidatedField};
    pub use crate::validation::{
        FieldValidator, Outcome, Validator, ValidatorConfig, ValidatorStatus, rules,
    };
}
