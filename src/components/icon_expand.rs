//! Default expand indicator: a downward chevron the accordion rotates.

use leptos::prelude::*;

#[component]
pub fn IconExpand() -> impl IntoView {
    view! {
        <svg class="icon-expand" viewBox="0 0 24 24" width="24" height="24" aria-hidden="true">
            <path
                d="M7 10l5 5 5-5"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}
