//! Default labeled field wrapper.

use leptos::prelude::*;

#[component]
pub fn Field(#[prop(into)] label_for: String, #[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field__label" for=label_for>{label}</label>
            {children()}
        </div>
    }
}
