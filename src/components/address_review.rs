//! Address confirmation chooser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shown in checkout when an address validation service returns a suggestion
//! that differs from what the shopper typed. The shopper picks one of the two
//! records; submitting the form (by button or through the handle) passes the
//! chosen record to `on_submit`.
//!
//! The selected option is owned by the host through `value`. Host changes are
//! written into the form; user changes go to `on_change`.

#[cfg(test)]
#[path = "address_review_test.rs"]
mod address_review_test;

use std::collections::BTreeSet;

use leptos::prelude::*;

use crate::components::capabilities::{
    AddressProps, Components, FormProps, InlineAlertProps, SelectableListProps, SelectableOption,
    use_components,
};
use crate::components::inline_alert::AlertType;
use crate::config::use_config;
use crate::state::address_review::{
    Address, AddressChoice, FIELD_NAME, INSTANCE_PREFIX, SubmitError, compute_invalid_fields,
    handle_submit, parse_choice, review_options,
};
use crate::state::form::{FormHandle, FormValues};
use crate::state::handle::ComponentRef;
use crate::util::instance_id::unique_instance_id;

/// Imperative access to one address review, handed to ancestors via `handle`.
#[derive(Clone, Copy)]
pub struct AddressReviewHandle {
    form: FormHandle,
}

impl AddressReviewHandle {
    /// Build the form behind an address review and route its submissions to
    /// `on_submit`.
    #[must_use]
    pub fn new(
        entered: Signal<Address>,
        suggested: Signal<Address>,
        initial: AddressChoice,
        on_submit: Option<Callback<Address>>,
    ) -> Self {
        let form = FormHandle::new();
        form.set_field(FIELD_NAME, initial.as_str());
        form.on_submit(Callback::new(move |values: FormValues| {
            let result = entered.with_untracked(|entered| {
                suggested.with_untracked(|suggested| {
                    handle_submit(&values, entered, suggested, |record| {
                        if let Some(on_submit) = on_submit.as_ref() {
                            on_submit.run(record);
                        }
                    })
                })
            });
            if let Err(e) = result {
                leptos::logging::warn!("address review submission ignored: {e}");
            }
        }));
        Self { form }
    }

    /// Submit the form as if the shopper had pressed its submit button.
    pub fn submit(self) {
        self.form.submit();
    }

    /// The option a submit would pick right now.
    ///
    /// # Errors
    ///
    /// Fails the same way a submit would if the form holds no valid choice.
    pub fn selected(self) -> Result<AddressChoice, SubmitError> {
        parse_choice(&self.form.values_untracked())
    }

    /// Write a host-owned choice into the form. Writing the current choice is
    /// a no-op.
    pub fn sync_choice(self, choice: AddressChoice) {
        self.form.set_field(FIELD_NAME, choice.as_str());
    }

    fn form(self) -> FormHandle {
        self.form
    }
}

/// Adapt the list's raw value callback to typed choices. Unknown tokens are
/// dropped with a warning.
fn forward_choice(on_change: Option<Callback<AddressChoice>>) -> Callback<String> {
    Callback::new(move |token: String| match token.parse::<AddressChoice>() {
        Ok(choice) => {
            if let Some(on_change) = on_change.as_ref() {
                on_change.run(choice);
            }
        }
        Err(e) => leptos::logging::warn!("address review selection ignored: {e}"),
    })
}

#[component]
pub fn AddressReview(
    /// The address as the shopper entered it.
    #[prop(into)]
    address_entered: Signal<Address>,
    /// The validation service's suggestion.
    #[prop(into)]
    address_suggestion: Signal<Address>,
    /// Selected option, owned by the host.
    #[prop(into, default = Signal::stored(AddressChoice::Suggested))]
    value: Signal<AddressChoice>,
    /// While true the choice cannot be changed.
    #[prop(into, default = Signal::stored(false))]
    is_saving: Signal<bool>,
    #[prop(optional)]
    on_submit: Option<Callback<Address>>,
    /// Called after the shopper picks a different option.
    #[prop(optional)]
    on_change: Option<Callback<AddressChoice>>,
    #[prop(optional, into)]
    warning_title: Option<String>,
    #[prop(optional, into)]
    warning_message: Option<String>,
    /// Form name attribute.
    #[prop(optional, into)]
    name: Option<String>,
    #[prop(optional, into)]
    class: Option<String>,
    /// Receives the [`AddressReviewHandle`] on construction.
    #[prop(optional)]
    handle: Option<ComponentRef<AddressReviewHandle>>,
    #[prop(optional)]
    components: Option<Components>,
) -> impl IntoView {
    let components = use_components(components);
    let copy = use_config().address_review.resolve(warning_title, warning_message);
    let instance_id = unique_instance_id(INSTANCE_PREFIX);

    let review = AddressReviewHandle::new(
        address_entered,
        address_suggestion,
        value.get_untracked(),
        on_submit,
    );
    if let Some(handle) = handle {
        handle.load(review);
    }
    let form = review.form();
    Effect::new(move || review.sync_choice(value.get()));

    let invalid_fields = Signal::derive(move || {
        address_entered.with(|entered| {
            address_suggestion.with(|suggested| compute_invalid_fields(entered, suggested))
        })
    });

    let options = review_options(&instance_id)
        .into_iter()
        .map(|option| {
            let detail = match option.choice {
                AddressChoice::Entered => components.address(AddressProps {
                    address: address_entered,
                    invalid_fields,
                }),
                AddressChoice::Suggested => components.address(AddressProps {
                    address: address_suggestion,
                    invalid_fields: Signal::stored(BTreeSet::new()),
                }),
            };
            SelectableOption {
                id: option.id,
                label: option.label.to_owned(),
                value: option.choice.as_str().to_owned(),
                detail,
            }
        })
        .collect::<Vec<_>>();

    let alert = components.inline_alert(InlineAlertProps {
        alert_type: AlertType::Warning,
        title: copy.warning_title,
        message: copy.warning_message,
    });
    let list = components.selectable_list(SelectableListProps {
        name: FIELD_NAME.to_owned(),
        options,
        form,
        is_read_only: is_saving,
        is_horizontal: true,
        is_stacked: true,
        on_change: Some(forward_choice(on_change)),
    });
    let form_view = components.form(FormProps { form, name, children: list });

    let root_class =
        class.map_or_else(|| "address-review".to_owned(), |extra| format!("address-review {extra}"));

    view! {
        <div class=root_class id=instance_id>
            {alert}
            <div class="address-review__form">{form_view}</div>
        </div>
    }
}
