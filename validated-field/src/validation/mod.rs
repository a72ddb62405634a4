//! Validators and the outcomes their callbacks produce.
//!
//! A [`Validator`] holds one named rule. It is configured once through a
//! [`ValidatorConfig`] and then driven by change and submit events; each
//! event clears the previous verdict and runs the matching callback.
//!
//! # Example
//!
//! ```
//! use validated_field::validation::{FieldValidator, Validator, ValidatorConfig};
//!
//! let mut no_b = Validator::new(
//!     ValidatorConfig::new("no_b", "must not contain the letter 'b'")
//!         .on_change(|v: &str| !v.contains('b')),
//! );
//!
//! no_b.handle_change("abc");
//! assert_eq!(no_b.error(), Some("must not contain the letter 'b'"));
//! ```

mod config;
mod outcome;
mod result;
pub mod rules;
mod validatable;
mod validator;

pub use config::{ValidateFn, ValidatorConfig};
pub use outcome::Outcome;
pub use result::ValidatorStatus;
pub use validatable::FieldValidator;
pub use validator::Validator;
