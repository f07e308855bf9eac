//! Injected rendering capabilities.
//!
//! ARCHITECTURE
//! ============
//! Components never hard-code the widgets they compose. They ask a
//! [`ComponentSet`] for each piece (expand icon, address, checkbox, field,
//! alert, selectable list, form). Every method has a default, so a host can
//! replace a single widget by overriding one method. The set is resolved from
//! an explicit `components` prop first, then context, then the defaults.

#[cfg(test)]
#[path = "capabilities_test.rs"]
mod capabilities_test;

use std::collections::BTreeSet;
use std::ops::Deref;
use std::sync::Arc;

use leptos::prelude::*;

use crate::components::address::AddressBlock;
use crate::components::checkbox::Checkbox;
use crate::components::field::Field;
use crate::components::form::Form;
use crate::components::icon_expand::IconExpand;
use crate::components::inline_alert::{AlertType, InlineAlert};
use crate::components::selectable_list::render_selectable_list;
use crate::state::address_review::Address;
use crate::state::form::FormHandle;

pub struct AddressProps {
    pub address: Signal<Address>,
    /// Fields to flag as possibly wrong. Empty for the suggested address.
    pub invalid_fields: Signal<BTreeSet<String>>,
}

pub struct CheckboxProps {
    pub id: String,
    pub name: String,
    pub value: String,
    /// Render as one choice of a group (radio) instead of an independent box.
    pub is_exclusive: bool,
    pub checked: Signal<bool>,
    pub is_read_only: Signal<bool>,
    pub on_toggle: Callback<()>,
}

pub struct FieldProps {
    pub label_for: String,
    pub label: String,
    pub children: AnyView,
}

pub struct InlineAlertProps {
    pub alert_type: AlertType,
    pub title: String,
    pub message: String,
}

/// One entry of a single-choice list.
pub struct SelectableOption {
    pub id: String,
    pub label: String,
    pub value: String,
    pub detail: AnyView,
}

pub struct SelectableListProps {
    /// Form field the selected value is written to.
    pub name: String,
    pub options: Vec<SelectableOption>,
    pub form: FormHandle,
    pub is_read_only: Signal<bool>,
    pub is_horizontal: bool,
    pub is_stacked: bool,
    /// Called with the new value after a user-driven change.
    pub on_change: Option<Callback<String>>,
}

pub struct FormProps {
    pub form: FormHandle,
    pub name: Option<String>,
    pub children: AnyView,
}

/// The widgets a component may ask for.
pub trait ComponentSet: Send + Sync + 'static {
    fn icon_expand(&self) -> AnyView {
        view! { <IconExpand/> }.into_any()
    }

    fn address(&self, props: AddressProps) -> AnyView {
        let AddressProps { address, invalid_fields } = props;
        view! { <AddressBlock address=address invalid_fields=invalid_fields/> }.into_any()
    }

    fn checkbox(&self, props: CheckboxProps) -> AnyView {
        let CheckboxProps { id, name, value, is_exclusive, checked, is_read_only, on_toggle } = props;
        view! {
            <Checkbox
                id=id
                name=name
                value=value
                is_exclusive=is_exclusive
                checked=checked
                is_read_only=is_read_only
                on_toggle=on_toggle
            />
        }
        .into_any()
    }

    fn field(&self, props: FieldProps) -> AnyView {
        let FieldProps { label_for, label, children } = props;
        view! { <Field label_for=label_for label=label>{children}</Field> }.into_any()
    }

    fn inline_alert(&self, props: InlineAlertProps) -> AnyView {
        let InlineAlertProps { alert_type, title, message } = props;
        view! { <InlineAlert alert_type=alert_type title=title message=message/> }.into_any()
    }

    fn selectable_list(&self, props: SelectableListProps) -> AnyView {
        render_selectable_list(self, props)
    }

    fn form(&self, props: FormProps) -> AnyView {
        let FormProps { form, name, children } = props;
        view! { <Form form=form name=name>{children}</Form> }.into_any()
    }
}

/// Built-in widgets for every capability.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultComponents;

impl ComponentSet for DefaultComponents {}

/// Shared handle to a capability set.
#[derive(Clone)]
pub struct Components(Arc<dyn ComponentSet>);

impl Components {
    pub fn new(set: impl ComponentSet) -> Self {
        Self(Arc::new(set))
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new(DefaultComponents)
    }
}

impl Deref for Components {
    type Target = dyn ComponentSet;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// Make `components` the capability set for everything below the current owner.
pub fn provide_components(components: Components) {
    provide_context(components);
}

/// Resolve the capability set for one component instance.
#[must_use]
pub fn use_components(explicit: Option<Components>) -> Components {
    explicit
        .or_else(use_context::<Components>)
        .unwrap_or_default()
}
