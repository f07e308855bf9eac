//! Accordion showcase: panels in several configurations plus an external
//! button driving one panel through its handle.

use leptos::prelude::*;

use crate::components::accordion::{Accordion, AccordionHandle};
use crate::state::handle::ComponentRef;

#[component]
pub fn AccordionDemoPage() -> impl IntoView {
    let shipping = ComponentRef::<AccordionHandle>::new();
    let notes = RwSignal::new(String::new());

    let on_external_toggle = move |_| {
        if shipping.with(|panel| panel.toggle()).is_none() {
            leptos::logging::warn!("shipping panel is not mounted");
        }
    };

    view! {
        <div class="showcase-page">
            <h1>"Accordion"</h1>
            <button class="btn" on:click=on_external_toggle disabled=move || !shipping.is_loaded()>
                "Toggle shipping from outside"
            </button>

            <Accordion label="Shipping" detail="2-day delivery" handle=shipping>
                <p>"Ships from the nearest warehouse."</p>
            </Accordion>
            <Accordion label="Payment" is_expanded=true icon=|| view! { <span class="showcase-icon">"$"</span> }>
                <p>"Card ending in 4242."</p>
            </Accordion>
            <Accordion label="Order notes">
                // Children stay mounted while collapsed, so typed text survives.
                <textarea
                    prop:value=move || notes.get()
                    on:input=move |ev| notes.set(event_target_value(&ev))
                />
            </Accordion>
            <Accordion label="Empty panel"/>
        </div>
    }
}
