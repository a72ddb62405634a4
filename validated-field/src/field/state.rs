use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, trace, warn};

use super::{FieldConfig, FieldSnapshot, ValidatedField};
use crate::ConfigError;
use crate::validation::{FieldValidator, Validator, ValidatorConfig, ValidatorStatus};

/// Unique identifier for a Field instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(usize);

impl FieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__field_{}", self.0)
    }
}

/// Handle returned by [`Field::watch`], used to unregister the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(usize);

impl WatchId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

type Listener = Arc<dyn Fn(&FieldSnapshot) + Send + Sync>;

/// Internal state for a Field
struct FieldInner {
    config: FieldConfig,
    value: String,
    is_dirty: bool,
    was_submitted: bool,
    /// Field-level error, independent of validators
    error_message: Option<String>,
    /// Insertion ordered, ids unique
    validators: Vec<Box<dyn FieldValidator>>,
}

impl FieldInner {
    fn new(config: FieldConfig) -> Self {
        Self {
            config,
            value: String::new(),
            is_dirty: false,
            was_submitted: false,
            error_message: None,
            validators: Vec::new(),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.validators.iter().position(|v| v.id() == id)
    }

    /// Insert keeping the original slot when the id already exists.
    fn insert(&mut self, validator: Box<dyn FieldValidator>) -> Option<Box<dyn FieldValidator>> {
        match self.position(validator.id()) {
            Some(index) => Some(std::mem::replace(&mut self.validators[index], validator)),
            None => {
                self.validators.push(validator);
                None
            }
        }
    }

    fn has_error(&self) -> bool {
        self.error_message.is_some() || self.validators.iter().any(|v| v.has_error())
    }

    fn is_maybe_valid(&self) -> bool {
        self.validators.iter().all(|v| v.is_maybe_valid())
    }

    fn is_valid(&self) -> bool {
        self.validators.iter().all(|v| v.is_valid()) && self.was_submitted
    }

    fn first_error_message(&self) -> Option<String> {
        if let Some(message) = &self.error_message {
            return Some(message.clone());
        }
        if !self.has_error() {
            return None;
        }
        self.validators
            .iter()
            .find_map(|v| v.error())
            .map(str::to_string)
    }

    fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            value: self.value.clone(),
            is_pristine: !self.is_dirty,
            is_dirty: self.is_dirty,
            is_maybe_valid: self.is_maybe_valid(),
            is_valid: self.is_valid(),
            was_submitted: self.was_submitted,
            first_error_message: self.first_error_message(),
        }
    }
}

/// A form field with reactive validation state.
///
/// `Field` owns its value, its dirty and submitted flags, an optional
/// field-level error and a set of validators. All queries read live state,
/// so they reflect the latest mutation immediately.
///
/// The handle is cheap to clone; clones share the same state.
///
/// # Example
///
/// ```
/// use validated_field::{Field, FieldConfig, ValidatorConfig};
///
/// let name = Field::with_config(FieldConfig::new().trim_on_submit());
/// name.add_validators([ValidatorConfig::new("empty", "must not be empty")
///     .on_submit(|v: &str| !v.is_empty())]);
///
/// name.handle_change("  ");
/// name.handle_submit();
/// assert_eq!(name.value(), "");
/// assert_eq!(name.first_error_message().as_deref(), Some("must not be empty"));
/// ```
#[derive(Clone)]
pub struct Field {
    /// Unique identifier for this field instance
    id: FieldId,
    /// Internal state
    inner: Arc<RwLock<FieldInner>>,
    /// Set by every mutation, cleared by the consumer
    changed: Arc<AtomicBool>,
    /// Push observers
    listeners: Arc<RwLock<Vec<(WatchId, Listener)>>>,
}

impl Field {
    /// Create a field with the default config.
    pub fn new() -> Self {
        Self::with_config(FieldConfig::default())
    }

    /// Create a field with the given config.
    pub fn with_config(config: FieldConfig) -> Self {
        Self {
            id: FieldId::new(),
            inner: Arc::new(RwLock::new(FieldInner::new(config))),
            changed: Arc::new(AtomicBool::new(false)),
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get the unique ID for this field
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Get the field config
    pub fn config(&self) -> FieldConfig {
        self.read().config
    }

    // -------------------------------------------------------------------------
    // Locking
    // -------------------------------------------------------------------------

    // Recovers from poisoning left by a panicking validator callback.
    fn read(&self) -> RwLockReadGuard<'_, FieldInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FieldInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a mutation, then flag the change and notify listeners.
    fn mutate<R>(&self, f: impl FnOnce(&mut FieldInner) -> R) -> R {
        self.mutate_if(|inner| (f(inner), true))
    }

    /// Apply a mutation under one write lock. The change is flagged and
    /// listeners are notified only when the closure reports one.
    fn mutate_if<R>(&self, f: impl FnOnce(&mut FieldInner) -> (R, bool)) -> R {
        let (result, changed) = f(&mut *self.write());
        if changed {
            self.changed.store(true, Ordering::SeqCst);
            self.notify();
        }
        result
    }

    fn notify(&self) {
        let listeners: Vec<Listener> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        if listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current value
    pub fn value(&self) -> String {
        self.read().value.clone()
    }

    /// Check if the value changed since construction or the last init
    pub fn is_dirty(&self) -> bool {
        self.read().is_dirty
    }

    /// Check if the value is untouched since construction or the last init
    pub fn is_pristine(&self) -> bool {
        !self.is_dirty()
    }

    /// Check if a submit was processed since construction or the last init
    pub fn was_submitted(&self) -> bool {
        self.read().was_submitted
    }

    /// Get the field-level error set through [`set_error`](Self::set_error)
    pub fn field_error(&self) -> Option<String> {
        self.read().error_message.clone()
    }

    /// Check if a field-level error is set or any validator has an error.
    pub fn has_error(&self) -> bool {
        self.read().has_error()
    }

    /// Check that no validator currently reports a problem.
    ///
    /// The field-level error does not take part.
    pub fn is_maybe_valid(&self) -> bool {
        self.read().is_maybe_valid()
    }

    /// Check that every validator is valid and the field was submitted.
    ///
    /// The field-level error does not take part.
    pub fn is_valid(&self) -> bool {
        self.read().is_valid()
    }

    /// Field-level error if set, else the first validator error in
    /// insertion order.
    pub fn first_error_message(&self) -> Option<String> {
        self.read().first_error_message()
    }

    /// Validators currently in an error state, in insertion order.
    pub fn errors(&self) -> Vec<ValidatorStatus> {
        self.read()
            .validators
            .iter()
            .filter(|v| v.has_error())
            .map(|v| ValidatorStatus::of(v.as_ref()))
            .collect()
    }

    /// All validators, in insertion order.
    pub fn validators(&self) -> Vec<ValidatorStatus> {
        self.read()
            .validators
            .iter()
            .map(|v| ValidatorStatus::of(v.as_ref()))
            .collect()
    }

    /// Get the validator ids, in insertion order
    pub fn validator_ids(&self) -> Vec<String> {
        self.read()
            .validators
            .iter()
            .map(|v| v.id().to_string())
            .collect()
    }

    /// Get the status of one validator by id.
    pub fn validator(&self, id: &str) -> Option<ValidatorStatus> {
        let inner = self.read();
        inner
            .position(id)
            .map(|index| ValidatorStatus::of(inner.validators[index].as_ref()))
    }

    /// Read every derived query at once.
    pub fn snapshot(&self) -> FieldSnapshot {
        self.read().snapshot()
    }

    // -------------------------------------------------------------------------
    // Validator registration
    // -------------------------------------------------------------------------

    /// Build a validator from each config and register it.
    ///
    /// An id that is already registered is overwritten in place, keeping its
    /// position. Use [`try_add_validators`](Self::try_add_validators) to
    /// reject duplicates instead.
    pub fn add_validators(&self, configs: impl IntoIterator<Item = ValidatorConfig>) {
        let field_id = self.id;
        self.mutate_if(|inner| {
            let changed = Self::register(inner, field_id, configs);
            ((), changed)
        });
    }

    /// Insert configs last-write-wins. Returns false if there were none.
    fn register(
        inner: &mut FieldInner,
        field_id: FieldId,
        configs: impl IntoIterator<Item = ValidatorConfig>,
    ) -> bool {
        let mut changed = false;
        for config in configs {
            let id = config.id().to_string();
            debug!("Field {} registering validator '{}'", field_id, id);
            if inner.insert(Box::new(Validator::new(config))).is_some() {
                warn!("Field {} overwrote existing validator '{}'", field_id, id);
            }
            changed = true;
        }
        changed
    }

    /// Register validators, rejecting blank or duplicate ids.
    ///
    /// The batch is checked as a whole; on error nothing is registered.
    pub fn try_add_validators(
        &self,
        configs: impl IntoIterator<Item = ValidatorConfig>,
    ) -> Result<(), ConfigError> {
        let configs: Vec<ValidatorConfig> = configs.into_iter().collect();
        let field_id = self.id;
        self.mutate_if(|inner| {
            if let Err(err) = Self::check_new_ids(inner, &configs) {
                return (Err(err), false);
            }
            let changed = Self::register(inner, field_id, configs);
            (Ok(()), changed)
        })
    }

    fn check_new_ids(inner: &FieldInner, configs: &[ValidatorConfig]) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for config in configs {
            if config.id().trim().is_empty() {
                return Err(ConfigError::EmptyValidatorId);
            }
            if inner.position(config.id()).is_some() || !seen.insert(config.id()) {
                return Err(ConfigError::duplicate(config.id()));
            }
        }
        Ok(())
    }

    /// Register a custom validator, returning the one it replaced (if any).
    pub fn insert_validator(
        &self,
        validator: Box<dyn FieldValidator>,
    ) -> Option<Box<dyn FieldValidator>> {
        debug!("Field {} inserting validator '{}'", self.id, validator.id());
        self.mutate(|inner| inner.insert(validator))
    }

    /// Remove a validator by id.
    pub fn remove_validator(&self, id: &str) -> Option<Box<dyn FieldValidator>> {
        self.mutate_if(|inner| {
            let removed = inner.position(id).map(|index| inner.validators.remove(index));
            let changed = removed.is_some();
            (removed, changed)
        })
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Reset the field to `value`, keeping validator configuration.
    pub fn init(&self, value: impl Into<String>) {
        let value = value.into();
        debug!("Field {} init", self.id);
        self.mutate(|inner| {
            inner.is_dirty = false;
            inner.was_submitted = false;
            inner.error_message = None;
            inner.value = value;
            for validator in &mut inner.validators {
                validator.init();
            }
        });
    }

    /// Process a change of the value.
    ///
    /// Marks the field dirty, clears the field-level error and runs every
    /// validator's change callback against the new value.
    pub fn handle_change(&self, value: impl Into<String>) {
        let value = value.into();
        trace!("Field {} change: {:?}", self.id, value);
        self.mutate(|inner| {
            inner.is_dirty = true;
            inner.error_message = None;
            for validator in &mut inner.validators {
                validator.handle_change(&value);
            }
            inner.value = value;
        });
    }

    /// Process a submit of the current value.
    ///
    /// Trims the stored value first when configured to. The field-level
    /// error is left untouched.
    pub fn handle_submit(&self) {
        debug!("Field {} submit", self.id);
        self.mutate(|inner| {
            if inner.config.trim_on_submit {
                let trimmed = inner.value.trim().to_string();
                inner.value = trimmed;
            }
            let value = inner.value.clone();
            for validator in &mut inner.validators {
                validator.handle_submit(&value);
            }
            inner.was_submitted = true;
        });
    }

    /// Set a field-level error, independent of validators.
    pub fn set_error(&self, message: impl Into<String>) {
        let message = message.into();
        debug!("Field {} error set: {}", self.id, message);
        self.mutate(|inner| inner.error_message = Some(message));
    }

    /// Clear the field-level error.
    pub fn clear_error(&self) {
        self.mutate_if(|inner| ((), inner.error_message.take().is_some()));
    }

    // -------------------------------------------------------------------------
    // Change tracking
    // -------------------------------------------------------------------------

    /// Check if the field has been mutated since the last check
    pub fn has_changed(&self) -> bool {
        self.changed.load(Ordering::SeqCst)
    }

    /// Clear the changed flag
    pub fn clear_changed(&self) {
        self.changed.store(false, Ordering::SeqCst);
    }

    /// Call `listener` with a fresh snapshot after every mutation.
    pub fn watch<F>(&self, listener: F) -> WatchId
    where
        F: Fn(&FieldSnapshot) + Send + Sync + 'static,
    {
        let id = WatchId::new();
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Unregister a listener. Returns false if it was not registered.
    pub fn unwatch(&self, id: WatchId) -> bool {
        let mut listeners = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(watch_id, _)| *watch_id != id);
        listeners.len() != before
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("id", &self.id)
            .field("state", &self.snapshot())
            .field("validators", &self.validator_ids())
            .finish()
    }
}

impl ValidatedField for Field {
    fn value(&self) -> String {
        Field::value(self)
    }

    fn has_error(&self) -> bool {
        Field::has_error(self)
    }

    fn is_dirty(&self) -> bool {
        Field::is_dirty(self)
    }

    fn is_maybe_valid(&self) -> bool {
        Field::is_maybe_valid(self)
    }

    fn is_valid(&self) -> bool {
        Field::is_valid(self)
    }

    fn first_error_message(&self) -> Option<String> {
        Field::first_error_message(self)
    }

    fn was_submitted(&self) -> bool {
        Field::was_submitted(self)
    }

    fn errors(&self) -> Vec<ValidatorStatus> {
        Field::errors(self)
    }

    fn validators(&self) -> Vec<ValidatorStatus> {
        Field::validators(self)
    }

    fn handle_change(&self, value: &str) {
        Field::handle_change(self, value);
    }

    fn handle_submit(&self) {
        Field::handle_submit(self);
    }
}
