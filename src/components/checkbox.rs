//! Default checkbox / radio input.

use leptos::prelude::*;

/// A single input that reports activation through `on_toggle`. Whether the
/// activation takes effect is up to the owner, which drives `checked`.
#[component]
pub fn Checkbox(
    #[prop(into)] id: String,
    #[prop(into)] name: String,
    #[prop(into)] value: String,
    #[prop(optional)] is_exclusive: bool,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into, default = Signal::stored(false))] is_read_only: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let input_type = if is_exclusive { "radio" } else { "checkbox" };

    view! {
        <input
            class="checkbox"
            class:checkbox--read-only=move || is_read_only.get()
            type=input_type
            id=id
            name=name
            value=value
            prop:checked=move || checked.get()
            disabled=move || is_read_only.get()
            on:change=move |_| on_toggle.run(())
        />
    }
}
