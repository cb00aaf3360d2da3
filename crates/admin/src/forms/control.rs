//! Single form control.

use std::collections::BTreeMap;

use super::AsyncOutcome;

/// A named validation failure: token plus human-readable message.
pub type ErroValidacao = (&'static str, String);

/// Synchronous field validator.
pub type Validador = Box<dyn Fn(&str) -> Option<ErroValidacao> + Send + Sync>;

/// One field of a form: value, interaction flags, error bag and the slot
/// for an asynchronous check outcome.
pub struct FormControl {
    value: String,
    touched: bool,
    dirty: bool,
    validators: Vec<Validador>,
    errors: BTreeMap<&'static str, String>,
    async_outcome: Option<AsyncOutcome>,
}

impl std::fmt::Debug for FormControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormControl")
            .field("value", &self.value)
            .field("touched", &self.touched)
            .field("dirty", &self.dirty)
            .field("errors", &self.errors)
            .field("async_outcome", &self.async_outcome)
            .finish()
    }
}

impl FormControl {
    pub fn new(validators: Vec<Validador>) -> Self {
        let mut control = Self {
            value: String::new(),
            touched: false,
            dirty: false,
            validators,
            errors: BTreeMap::new(),
            async_outcome: None,
        };
        control.revalidate();
        control
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// User edit: marks the control dirty and re-runs the sync validators.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.dirty = true;
        self.revalidate();
    }

    /// Programmatic update (loading a record): no dirty flag.
    pub fn patch(&mut self, value: &str) {
        self.value = value.to_string();
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.errors = self
            .validators
            .iter()
            .filter_map(|validar| validar(&self.value))
            .collect();
    }

    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    pub fn touched(&self) -> bool {
        self.touched
    }

    pub fn dirty(&self) -> bool {
        self.dirty
    }

    pub fn errors(&self) -> &BTreeMap<&'static str, String> {
        &self.errors
    }

    /// True when the given failure token is present, either from a sync
    /// validator or from the async outcome slot.
    pub fn has_error(&self, token: &str) -> bool {
        self.errors.contains_key(token)
            || matches!(&self.async_outcome, Some(AsyncOutcome::Invalid(t)) if *t == token)
    }

    pub fn set_async_outcome(&mut self, outcome: AsyncOutcome) {
        self.async_outcome = Some(outcome);
    }

    pub fn clear_async_outcome(&mut self) {
        self.async_outcome = None;
    }

    pub fn async_outcome(&self) -> Option<&AsyncOutcome> {
        self.async_outcome.as_ref()
    }

    /// Sync validators clean and no pending/failed async check.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
            && !matches!(
                self.async_outcome,
                Some(AsyncOutcome::Pending) | Some(AsyncOutcome::Invalid(_))
            )
    }
}
