use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use validated_field::{
    ConfigError, Field, FieldConfig, FieldValidator, ValidatedField, ValidatorConfig,
};

fn not_empty() -> ValidatorConfig {
    ValidatorConfig::new("empty", "must not be empty")
        .on_submit(|v: &str| if v.is_empty() { Some("custom message") } else { None })
}

fn no_digits() -> ValidatorConfig {
    ValidatorConfig::new("digits", "must not contain digits")
        .on_both(|v: &str| !v.chars().any(|c| c.is_ascii_digit()))
}

#[test]
fn test_new_field_state() {
    let field = Field::new();
    assert_eq!(
        field.snapshot().to_string(),
        "prist:true,dirty:false,maybe:true,valid:false,sub:false,err:none"
    );
    assert_eq!(field.value(), "");
    assert!(!field.has_error());
    assert!(field.errors().is_empty());
}

#[test]
fn test_handle_change_sets_dirty() {
    let field = Field::new();
    field.handle_change("test");
    assert_eq!(
        field.snapshot().to_string(),
        "prist:false,dirty:true,maybe:true,valid:false,sub:false,err:none"
    );
    assert_eq!(field.value(), "test");

    field.handle_change("");
    assert!(field.is_dirty());
}

#[test]
fn test_handle_submit_sets_submitted_and_valid() {
    let field = Field::new();
    field.handle_submit();
    assert_eq!(
        field.snapshot().to_string(),
        "prist:true,dirty:false,maybe:true,valid:true,sub:true,err:none"
    );
}

#[test]
fn test_submit_does_not_touch_dirty() {
    let field = Field::new();
    field.handle_change("x");
    field.handle_submit();
    assert!(field.is_dirty());
    assert!(!field.is_pristine());
    assert!(field.was_submitted());
}

#[test]
fn test_custom_submit_message() {
    let field = Field::new();
    field.add_validators([not_empty()]);

    field.handle_submit();
    assert!(!field.is_valid());
    assert!(!field.is_maybe_valid());
    assert_eq!(field.first_error_message().as_deref(), Some("custom message"));
}

#[test]
fn test_errors_in_insertion_order() {
    let field = Field::new();
    field.add_validators([no_digits(), not_empty()]);

    field.handle_change("4");
    field.init("");
    field.handle_change("");
    field.handle_submit();
    let ids: Vec<String> = field.errors().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["empty"]);

    field.add_validators([ValidatorConfig::new("always", "always fails").on_submit(|_: &str| false)]);
    field.handle_submit();
    let ids: Vec<String> = field.errors().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["empty", "always"]);
    assert_eq!(field.first_error_message().as_deref(), Some("custom message"));
}

#[test]
fn test_explicit_valid_without_submit_still_needs_field_submit() {
    let field = Field::new();
    field.add_validators([ValidatorConfig::new("a", "needs a")
        .on_change(|v: &str| v.contains('a'))]);

    field.handle_change("bcerewra");
    assert!(field.validators()[0].is_valid);
    assert!(!field.is_valid());

    field.handle_submit();
    assert!(field.is_valid());
}

#[test]
fn test_init_resets_state_and_keeps_validators() {
    let field = Field::new();
    field.add_validators([no_digits()]);
    field.handle_change("1");
    field.handle_submit();
    field.set_error("server said no");

    field.init("fresh");
    let first = field.snapshot();
    assert_eq!(
        first.to_string(),
        "prist:true,dirty:false,maybe:true,valid:false,sub:false,err:none"
    );
    assert_eq!(first.value, "fresh");
    assert_eq!(field.field_error(), None);

    field.init("fresh");
    assert_eq!(field.snapshot(), first);

    field.handle_change("2");
    assert_eq!(
        field.first_error_message().as_deref(),
        Some("must not contain digits")
    );
}

#[test]
fn test_trim_on_submit() {
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);

    let field = Field::with_config(FieldConfig::new().trim_on_submit());
    field.add_validators([ValidatorConfig::new("record", "unused").on_submit(
        move |v: &str| {
            recorder.lock().unwrap().push(v.to_string());
        },
    )]);

    field.handle_change(" x ");
    field.handle_submit();
    assert_eq!(field.value(), "x");
    assert_eq!(*seen.lock().unwrap(), vec!["x".to_string()]);
}

#[test]
fn test_no_trim_by_default() {
    let field = Field::new();
    field.handle_change(" x ");
    field.handle_submit();
    assert_eq!(field.value(), " x ");
}

#[test]
fn test_set_error_cleared_by_change_not_submit() {
    let field = Field::new();
    field.set_error("m");
    assert!(field.has_error());
    field.handle_submit();
    assert_eq!(field.first_error_message().as_deref(), Some("m"));

    field.handle_change("anything");
    assert!(!field.has_error());
    assert_eq!(field.first_error_message(), None);
}

#[test]
fn test_field_error_takes_priority_and_does_not_gate_validity() {
    let field = Field::new();
    field.add_validators([no_digits()]);
    field.handle_change("1");
    field.set_error("m");
    assert_eq!(field.first_error_message().as_deref(), Some("m"));

    field.handle_change("ok");
    field.handle_submit();
    field.set_error("m");
    assert!(field.has_error());
    assert!(field.errors().is_empty());
    assert!(field.is_maybe_valid());
    assert!(field.is_valid());

    field.clear_error();
    assert!(!field.has_error());
}

#[test]
fn test_add_validators_overwrites_in_place() {
    let field = Field::new();
    field.add_validators([
        no_digits(),
        not_empty(),
        ValidatorConfig::new("digits", "replaced").on_change(|_: &str| false),
    ]);
    assert_eq!(field.validator_ids(), vec!["digits", "empty"]);

    field.handle_change("x");
    assert_eq!(field.first_error_message().as_deref(), Some("replaced"));
}

#[test]
fn test_try_add_validators_rejects_duplicates() {
    let field = Field::new();
    field.add_validators([no_digits()]);

    let err = field.try_add_validators([not_empty(), no_digits()]).unwrap_err();
    assert_eq!(err, ConfigError::duplicate("digits"));
    assert_eq!(field.validator_ids(), vec!["digits"]);

    let err = field.try_add_validators([not_empty(), not_empty()]).unwrap_err();
    assert_eq!(err, ConfigError::duplicate("empty"));

    let err = field
        .try_add_validators([ValidatorConfig::new("  ", "blank")])
        .unwrap_err();
    assert_eq!(err, ConfigError::EmptyValidatorId);

    field.try_add_validators([not_empty()]).unwrap();
    assert_eq!(field.validator_ids(), vec!["digits", "empty"]);
}

#[test]
fn test_remove_validator() {
    let field = Field::new();
    field.add_validators([no_digits(), not_empty()]);
    let removed = field.remove_validator("digits").unwrap();
    assert_eq!(removed.id(), "digits");
    assert!(field.remove_validator("digits").is_none());
    assert_eq!(field.validator_ids(), vec!["empty"]);
}

struct CountingValidator {
    submits: Arc<AtomicUsize>,
}

impl FieldValidator for CountingValidator {
    fn id(&self) -> &str {
        "counting"
    }

    fn init(&mut self) {}

    fn handle_change(&mut self, _value: &str) {}

    fn handle_submit(&mut self, _value: &str) {
        self.submits.fetch_add(1, Ordering::SeqCst);
    }

    fn error(&self) -> Option<&str> {
        None
    }

    fn is_valid(&self) -> bool {
        true
    }
}

#[test]
fn test_custom_validator() {
    let submits = Arc::new(AtomicUsize::new(0));
    let field = Field::new();
    let replaced = field.insert_validator(Box::new(CountingValidator {
        submits: Arc::clone(&submits),
    }));
    assert!(replaced.is_none());

    field.handle_submit();
    field.handle_submit();
    assert_eq!(submits.load(Ordering::SeqCst), 2);
    assert!(field.is_valid());
}

#[test]
fn test_clones_share_state() {
    let field = Field::new();
    let other = field.clone();
    other.handle_change("shared");
    assert_eq!(field.value(), "shared");
    assert_eq!(field.id(), other.id());
    assert_ne!(field.id(), Field::new().id());
}

#[test]
fn test_trait_object_access() {
    let field = Field::new();
    field.add_validators([not_empty()]);
    let dynamic: &dyn ValidatedField = &field;

    dynamic.handle_change("");
    assert!(dynamic.is_dirty());
    assert!(!dynamic.is_pristine());
    dynamic.handle_submit();
    assert_eq!(dynamic.errors().len(), 1);
    assert_eq!(dynamic.first_error_message().as_deref(), Some("custom message"));
}

#[test]
fn test_config_defaults_and_serde() {
    let config: FieldConfig = serde_json::from_str(r#"{"trim_on_submit": true}"#).unwrap();
    assert!(config.trim_on_submit);
    assert!(!config.required);

    let field = Field::with_config(FieldConfig::new().required());
    assert!(field.config().required);
    assert!(!field.config().trim_on_submit);
}

#[test]
fn test_init_clears_explicit_valid_on_validators() {
    let field = Field::new();
    field.add_validators([ValidatorConfig::new("a", "needs a")
        .on_change(|v: &str| if v.contains('a') { Some(true) } else { None })]);

    field.handle_change("a");
    assert!(field.validators()[0].is_valid);

    field.init("");
    assert!(!field.validators()[0].is_valid);
    assert!(!field.is_valid());
}

#[test]
fn test_try_add_validators_concurrent_same_id() {
    for _ in 0..200 {
        let field = Field::new();
        let barrier = Arc::new(Barrier::new(2));

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let field = field.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    field
                        .try_add_validators([ValidatorConfig::new("dup", "unused")])
                        .is_ok()
                })
            })
            .collect();

        let accepted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(accepted, 1);
        assert_eq!(field.validator_ids(), vec!["dup"]);
    }
}
