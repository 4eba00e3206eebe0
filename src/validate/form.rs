//! Stateful form-validation session.
//!
//! Composes per-field validator sequences into form-level validity. A
//! field's error only surfaces once the field has been touched or a full
//! [`FormValidation::validate_all`] pass has run; the error shown for a
//! field is always the result of validating its current value.

use std::collections::{HashMap, HashSet};

use super::validators::Validator;

/// Ordered validator sequences keyed by field name. The first failing rule
/// for a field wins; later rules are not evaluated.
#[derive(Default)]
pub struct RuleSet {
    rules: HashMap<String, Vec<Validator>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rules for one field. Builder-style.
    pub fn field(mut self, name: impl Into<String>, rules: Vec<Validator>) -> Self {
        self.rules.insert(name.into(), rules);
        self
    }

    /// Run a field's rules against a value, short-circuiting on the first
    /// failure. Fields without rules always pass.
    pub fn validate(&self, name: &str, value: &str) -> Option<String> {
        let rules = self.rules.get(name)?;
        for rule in rules {
            if let Some(error) = rule(value) {
                return Some(error);
            }
        }
        None
    }

    /// Names of all ruled fields.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

/// Per-field validation state.
///
/// `Untouched -> {Valid, Invalid}`, driven by `set_value`, `set_touched`
/// and `validate_all`. Purely synchronous, so transitions are strictly
/// ordered by call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// The user has not interacted with the field and no error is stored.
    Untouched,
    /// The field has been touched and its current value passes its rules.
    Valid,
    /// An error is stored for the field's current value.
    Invalid,
}

/// A validation session over a [`RuleSet`] and a set of initial values.
pub struct FormValidation {
    rules: RuleSet,
    initial: HashMap<String, String>,
    values: HashMap<String, String>,
    errors: HashMap<String, String>,
    touched: HashSet<String>,
}

impl FormValidation {
    pub fn new(initial: HashMap<String, String>, rules: RuleSet) -> Self {
        Self {
            rules,
            values: initial.clone(),
            initial,
            errors: HashMap::new(),
            touched: HashSet::new(),
        }
    }

    /// Current value of a field; empty for unknown fields.
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// All current values.
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Current error for a field, if one is stored.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// All current errors.
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    pub fn field_state(&self, name: &str) -> FieldState {
        if self.errors.contains_key(name) {
            FieldState::Invalid
        } else if self.touched.contains(name) {
            FieldState::Valid
        } else {
            FieldState::Untouched
        }
    }

    /// Update a field's value. The field is re-validated only if it has
    /// already been touched, so errors never go stale but also never appear
    /// before the user has interacted with the field.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if self.touched.contains(name) {
            self.store_error(name, self.rules.validate(name, &value));
        }
        self.values.insert(name.to_string(), value);
    }

    /// Mark a field as touched and validate its current value immediately.
    pub fn set_touched(&mut self, name: &str) {
        self.touched.insert(name.to_string());
        self.store_error(name, self.rules.validate(name, self.value(name)));
    }

    /// Validate every ruled field against its current value, replacing the
    /// entire error mapping. Returns whether the form is valid. This is the
    /// pre-submission gate.
    pub fn validate_all(&mut self) -> bool {
        let mut errors = HashMap::new();
        for name in self.rules.field_names() {
            let value = self.values.get(name).map(String::as_str).unwrap_or("");
            if let Some(error) = self.rules.validate(name, value) {
                errors.insert(name.to_string(), error);
            }
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Restore initial values and clear errors and touched state.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
        self.touched.clear();
    }

    /// True iff no errors are stored. Only reflects fields validated so far;
    /// call [`validate_all`](Self::validate_all) before trusting this as a
    /// submission gate.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn store_error(&mut self, name: &str, error: Option<String>) {
        match error {
            Some(error) => {
                self.errors.insert(name.to_string(), error);
            }
            None => {
                self.errors.remove(name);
            }
        }
    }
}
