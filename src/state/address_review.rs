//! Address review data model and decision logic.
//!
//! DESIGN
//! ======
//! The review compares an address the shopper typed with the one an address
//! validation service suggested. Which fields differ is derived on every
//! evaluation and never cached. Submitting maps the chosen token back to one
//! of the two full records.

#[cfg(test)]
#[path = "address_review_test.rs"]
mod address_review_test;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::state::form::FormValues;

/// Form field name that carries the chosen option.
pub const FIELD_NAME: &str = "AddressReview";

/// Prefix for per-instance identifiers.
pub const INSTANCE_PREFIX: &str = "AddressReviewForm_";

pub const ENTERED_LABEL: &str = "Entered Address:";
pub const SUGGESTED_LABEL: &str = "Suggested Address:";

pub const DEFAULT_WARNING_TITLE: &str = "The address you entered may be incorrect or incomplete.";
pub const DEFAULT_WARNING_MESSAGE: &str = "Please review our suggestion below, and choose which version you’d like to use. Possible errors are shown in red.";

/// Display order for well-known address fields. Unknown fields follow in key order.
pub const FIELD_ORDER: &[&str] = &[
    "fullName", "company", "address1", "address2", "city", "region", "postal", "country", "phone",
];

/// A postal address as a field-name to value mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(BTreeMap<String, String>);

impl Address {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fields in display order: well-known fields first, then the rest.
    #[must_use]
    pub fn display_fields(&self) -> Vec<(&str, &str)> {
        let known = FIELD_ORDER
            .iter()
            .filter_map(|field| self.0.get_key_value(*field));
        let rest = self
            .0
            .iter()
            .filter(|(field, _)| !FIELD_ORDER.contains(&field.as_str()));
        known
            .chain(rest)
            .map(|(field, value)| (field.as_str(), value.as_str()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Address {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Which of the two records the shopper picked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressChoice {
    Entered,
    #[default]
    Suggested,
}

impl AddressChoice {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entered => "entered",
            Self::Suggested => "suggested",
        }
    }

    /// The record this choice stands for.
    #[must_use]
    pub fn pick<'a>(self, entered: &'a Address, suggested: &'a Address) -> &'a Address {
        match self {
            Self::Entered => entered,
            Self::Suggested => suggested,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Entered => ENTERED_LABEL,
            Self::Suggested => SUGGESTED_LABEL,
        }
    }
}

impl fmt::Display for AddressChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token is not `"entered"` or `"suggested"`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized address choice: {0:?}")]
pub struct ChoiceParseError(pub String);

impl FromStr for AddressChoice {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entered" => Ok(Self::Entered),
            "suggested" => Ok(Self::Suggested),
            other => Err(ChoiceParseError(other.to_owned())),
        }
    }
}

/// Error returned by [`resolve_submission`] and [`handle_submit`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The submitted field set has no value for the choice field.
    #[error("submitted form has no `{0}` field")]
    MissingChoice(&'static str),
    /// The choice field holds something other than a known token.
    #[error(transparent)]
    UnrecognizedChoice(#[from] ChoiceParseError),
}

/// Keys of `entered` whose value differs from `suggested` at the same key.
///
/// Strict string comparison with no normalization. A key missing from
/// `suggested` counts as different; keys only in `suggested` are ignored.
#[must_use]
pub fn compute_invalid_fields(entered: &Address, suggested: &Address) -> BTreeSet<String> {
    entered
        .0
        .iter()
        .filter(|(field, value)| suggested.get(field) != Some(value.as_str()))
        .map(|(field, _)| field.clone())
        .collect()
}

/// Read the chosen option out of a submitted field set. Other fields are ignored.
///
/// # Errors
///
/// Returns [`SubmitError::MissingChoice`] if the choice field is absent and
/// [`SubmitError::UnrecognizedChoice`] for any token other than `"entered"`
/// or `"suggested"`.
pub fn parse_choice(values: &FormValues) -> Result<AddressChoice, SubmitError> {
    let token = values.get(FIELD_NAME).ok_or(SubmitError::MissingChoice(FIELD_NAME))?;
    Ok(token.parse::<AddressChoice>()?)
}

/// Resolve a submitted field set to the chosen option and its address record.
///
/// # Errors
///
/// See [`parse_choice`].
pub fn resolve_submission<'a>(
    values: &FormValues,
    entered: &'a Address,
    suggested: &'a Address,
) -> Result<(AddressChoice, &'a Address), SubmitError> {
    let choice = parse_choice(values)?;
    Ok((choice, choice.pick(entered, suggested)))
}

/// Resolve the submission and hand the chosen record to `on_submit`.
///
/// `on_submit` runs exactly once on success and never on error.
///
/// # Errors
///
/// See [`parse_choice`].
pub fn handle_submit(
    values: &FormValues,
    entered: &Address,
    suggested: &Address,
    on_submit: impl FnOnce(Address),
) -> Result<AddressChoice, SubmitError> {
    let (choice, record) = resolve_submission(values, entered, suggested)?;
    on_submit(record.clone());
    Ok(choice)
}

/// Static description of one selectable option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewOption {
    pub id: String,
    pub label: &'static str,
    pub choice: AddressChoice,
}

/// The two options in display order: entered first, then suggested.
#[must_use]
pub fn review_options(instance_id: &str) -> [ReviewOption; 2] {
    [AddressChoice::Entered, AddressChoice::Suggested].map(|choice| ReviewOption {
        id: format!("{choice}_{instance_id}"),
        label: choice.label(),
        choice,
    })
}
