//! Single-choice selection rules shared by selectable lists.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::state::form::FormHandle;

/// Result of a user attempt to pick an option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The selection moved to the given value.
    Changed(String),
    /// The requested value was already selected.
    Unchanged,
    /// The list is read-only; nothing moved.
    Rejected,
}

/// Decide what a selection attempt does, without touching any state.
#[must_use]
pub fn decide(current: Option<&str>, requested: &str, is_read_only: bool) -> SelectionOutcome {
    if is_read_only {
        return SelectionOutcome::Rejected;
    }
    if current == Some(requested) {
        return SelectionOutcome::Unchanged;
    }
    SelectionOutcome::Changed(requested.to_owned())
}

/// Apply a user selection to the form field `name`.
///
/// Only writes the field; selection never submits the form.
pub fn select_option(
    form: FormHandle,
    name: &str,
    requested: &str,
    is_read_only: bool,
) -> SelectionOutcome {
    let current = form.field_untracked(name);
    let outcome = decide(current.as_deref(), requested, is_read_only);
    if let SelectionOutcome::Changed(next) = &outcome {
        form.set_field(name, next);
    }
    outcome
}
