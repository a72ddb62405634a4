//! Built-in rules for string fields.
//!
//! Each function returns a [`ValidatorConfig`] ready to pass to
//! [`Field::add_validators`](crate::Field::add_validators). A failing rule
//! reports the message it was given; a passing rule returns
//! [`Outcome::Undetermined`], so the field still waits for a submit before
//! it counts as valid.
//!
//! Apart from [`required`], rules accept an empty value.

use regex::Regex;

use super::{Outcome, ValidatorConfig};
use crate::ConfigError;

fn check(passes: bool) -> Outcome {
    if passes {
        Outcome::Undetermined
    } else {
        Outcome::Invalid
    }
}

/// Require the field to be non-blank when submitted.
pub fn required(id: impl Into<String>, msg: impl Into<String>) -> ValidatorConfig {
    ValidatorConfig::new(id, msg).on_submit(|v: &str| check(!v.trim().is_empty()))
}

/// Require minimum length (in characters).
pub fn min_length(id: impl Into<String>, min: usize, msg: impl Into<String>) -> ValidatorConfig {
    ValidatorConfig::new(id, msg)
        .on_both(move |v: &str| check(v.is_empty() || v.chars().count() >= min))
}

/// Require maximum length (in characters).
pub fn max_length(id: impl Into<String>, max: usize, msg: impl Into<String>) -> ValidatorConfig {
    ValidatorConfig::new(id, msg).on_both(move |v: &str| check(v.chars().count() <= max))
}

/// Require the value to match a regex pattern.
pub fn pattern(
    id: impl Into<String>,
    pattern: &str,
    msg: impl Into<String>,
) -> Result<ValidatorConfig, ConfigError> {
    let re = Regex::new(pattern).map_err(|e| ConfigError::invalid_pattern(pattern, &e))?;
    Ok(ValidatorConfig::new(id, msg).on_both(move |v: &str| check(v.is_empty() || re.is_match(v))))
}

/// Require a valid email address.
pub fn email(id: impl Into<String>, msg: impl Into<String>) -> ValidatorConfig {
    ValidatorConfig::new(id, msg).on_both(|v: &str| {
        check(v.is_empty() || email_address::EmailAddress::is_valid(v))
    })
}

/// Require the submitted value to equal another value.
pub fn equals(
    id: impl Into<String>,
    other: impl Into<String>,
    msg: impl Into<String>,
) -> ValidatorConfig {
    let other = other.into();
    ValidatorConfig::new(id, msg).on_submit(move |v: &str| check(v == other))
}

/// Require the submitted value to contain a substring.
pub fn contains(
    id: impl Into<String>,
    substr: impl Into<String>,
    msg: impl Into<String>,
) -> ValidatorConfig {
    let substr = substr.into();
    ValidatorConfig::new(id, msg).on_submit(move |v: &str| check(v.contains(&substr)))
}
