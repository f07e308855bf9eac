//! Form submission primitive.
//!
//! A form is a named field set. Widgets write their current value under a
//! field name; submitting hands the whole value-by-name mapping to whichever
//! callback the owning component registered.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use leptos::prelude::*;

/// Value-by-name mapping delivered on submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Reactive handle to one form instance. `Copy`, so it can be moved into any
/// number of event handlers.
#[derive(Clone, Copy)]
pub struct FormHandle {
    values: RwSignal<FormValues>,
    on_submit: StoredValue<Option<Callback<FormValues>>>,
}

impl Default for FormHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl FormHandle {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: RwSignal::new(FormValues::new()),
            on_submit: StoredValue::new(None),
        }
    }

    /// Write a field value. Writing the current value does not notify readers.
    pub fn set_field(self, name: &str, value: &str) {
        if self.values.with_untracked(|values| values.get(name) == Some(value)) {
            return;
        }
        self.values.update(|values| values.insert(name, value));
    }

    /// Tracked read of a single field.
    #[must_use]
    pub fn field(self, name: &str) -> Option<String> {
        self.values.with(|values| values.get(name).map(str::to_owned))
    }

    #[must_use]
    pub fn field_untracked(self, name: &str) -> Option<String> {
        self.values.with_untracked(|values| values.get(name).map(str::to_owned))
    }

    #[must_use]
    pub fn values_untracked(self) -> FormValues {
        self.values.get_untracked()
    }

    /// Register the callback that receives the field set on submit. Replaces
    /// any previously registered callback.
    pub fn on_submit(self, callback: Callback<FormValues>) {
        self.on_submit.set_value(Some(callback));
    }

    /// Deliver the current field set to the submit callback.
    ///
    /// Returns `false` when no callback is registered.
    pub fn submit(self) -> bool {
        let Some(callback) = self.on_submit.get_value() else {
            return false;
        };
        callback.run(self.values_untracked());
        true
    }
}
