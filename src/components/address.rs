//! Default address renderer.

use std::collections::BTreeSet;

use leptos::prelude::*;

use crate::state::address_review::Address;

/// Renders each address field in display order. Fields listed in
/// `invalid_fields` get the `address__field--invalid` modifier so themes can
/// paint them in the warning color.
#[component]
pub fn AddressBlock(
    #[prop(into)] address: Signal<Address>,
    #[prop(into, default = Signal::stored(BTreeSet::new()))] invalid_fields: Signal<BTreeSet<String>>,
) -> impl IntoView {
    let fields = move || {
        let invalid = invalid_fields.get();
        address.with(|address| {
            address
                .display_fields()
                .into_iter()
                .map(|(field, value)| {
                    let class = if invalid.contains(field) {
                        "address__field address__field--invalid"
                    } else {
                        "address__field"
                    };
                    view! { <span class=class data-field=field.to_owned()>{value.to_owned()}</span> }
                })
                .collect_view()
        })
    };

    view! { <address class="address">{fields}</address> }
}
