//! Default single-choice list.
//!
//! Built from the set's own `checkbox` and `field` capabilities, so overriding
//! either of those restyles the list too. The selected value lives in the
//! surrounding form under the list's field name.

use leptos::prelude::*;

use crate::components::capabilities::{
    CheckboxProps, ComponentSet, FieldProps, SelectableListProps, SelectableOption,
};
use crate::state::selection::{SelectionOutcome, select_option};

pub fn render_selectable_list<S: ComponentSet + ?Sized>(set: &S, props: SelectableListProps) -> AnyView {
    let SelectableListProps { name, options, form, is_read_only, is_horizontal, is_stacked, on_change } = props;

    let items = options
        .into_iter()
        .map(|option| {
            let SelectableOption { id, label, value, detail } = option;
            let checked = Signal::derive({
                let (name, value) = (name.clone(), value.clone());
                move || form.field(&name).as_deref() == Some(value.as_str())
            });
            let on_toggle = Callback::new({
                let (name, value) = (name.clone(), value.clone());
                move |()| {
                    let outcome = select_option(form, &name, &value, is_read_only.get_untracked());
                    if let SelectionOutcome::Changed(next) = outcome {
                        if let Some(on_change) = on_change.as_ref() {
                            on_change.run(next);
                        }
                    }
                }
            });
            let control = set.checkbox(CheckboxProps {
                id: id.clone(),
                name: name.clone(),
                value,
                is_exclusive: true,
                checked,
                is_read_only,
                on_toggle,
            });
            let body = view! {
                {control}
                <div class="selectable-list__detail">{detail}</div>
            }
            .into_any();
            let field = set.field(FieldProps { label_for: id, label, children: body });
            view! { <li class="selectable-list__item">{field}</li> }
        })
        .collect_view();

    view! {
        <ul
            class="selectable-list"
            class:selectable-list--horizontal=is_horizontal
            class:selectable-list--stacked=is_stacked
            class:selectable-list--read-only=move || is_read_only.get()
            role="radiogroup"
            aria-disabled=move || is_read_only.get().to_string()
        >
            {items}
        </ul>
    }
    .into_any()
}
