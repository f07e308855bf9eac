//! Default form container.

use leptos::prelude::*;

use crate::state::form::FormHandle;

/// `<form>` whose native submit event is routed to [`FormHandle::submit`], so
/// a button press and an imperative `submit()` take the same path.
#[component]
pub fn Form(form: FormHandle, #[prop(optional_no_strip)] name: Option<String>, children: Children) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.submit() {
            leptos::logging::warn!("form submitted with no submit handler registered");
        }
    };

    view! {
        <form class="form" name=name on:submit=on_submit>
            {children()}
        </form>
    }
}
