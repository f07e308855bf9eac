//! Address review showcase: a host that owns the selection, toggles the saving
//! flag, and submits through the handle.

use leptos::prelude::*;

use crate::components::address_review::{AddressReview, AddressReviewHandle};
use crate::state::address_review::{Address, AddressChoice};
use crate::state::handle::ComponentRef;

fn sample_entered() -> Address {
    Address::new()
        .with_field("fullName", "Pat Doe")
        .with_field("address1", "1 Main")
        .with_field("city", "Springfield")
        .with_field("region", "IL")
        .with_field("postal", "62701")
        .with_field("country", "US")
}

fn sample_suggested() -> Address {
    Address::new()
        .with_field("fullName", "Pat Doe")
        .with_field("address1", "1 Main St")
        .with_field("city", "Springfield")
        .with_field("region", "IL")
        .with_field("postal", "62701-1234")
        .with_field("country", "US")
}

#[component]
pub fn AddressReviewDemoPage() -> impl IntoView {
    let review = ComponentRef::<AddressReviewHandle>::new();
    let choice = RwSignal::new(AddressChoice::default());
    let is_saving = RwSignal::new(false);
    let submitted = RwSignal::new(None::<Address>);

    let on_submit = Callback::new(move |address: Address| {
        leptos::logging::log!("address review submitted: {address:?}");
        submitted.set(Some(address));
        is_saving.set(true);
    });
    let on_change = Callback::new(move |next: AddressChoice| choice.set(next));

    let on_use_address = move |_| {
        if review.with(|handle| handle.submit()).is_none() {
            leptos::logging::warn!("address review is not mounted");
        }
    };
    let on_reset = move |_| {
        is_saving.set(false);
        submitted.set(None);
    };

    let submitted_view = move || {
        submitted.get().map(|address| {
            let text = address
                .display_fields()
                .into_iter()
                .map(|(_, value)| value.to_owned())
                .collect::<Vec<_>>()
                .join(", ");
            view! { <p class="showcase-result">"Submitted: " {text}</p> }
        })
    };

    view! {
        <div class="showcase-page">
            <h1>"Address review"</h1>
            <AddressReview
                address_entered=sample_entered()
                address_suggestion=sample_suggested()
                value=choice
                is_saving=is_saving
                on_submit=on_submit
                on_change=on_change
                handle=review
            />
            <p>"Selected: " {move || choice.get().to_string()}</p>
            <button class="btn btn--primary" on:click=on_use_address disabled=move || is_saving.get()>
                "Use this address"
            </button>
            <button class="btn" on:click=on_reset>"Reset"</button>
            {submitted_view}
        </div>
    }
}
