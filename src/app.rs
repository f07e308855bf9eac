//! Root showcase application with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::components::capabilities::{Components, provide_components};
use crate::config::{EmbeddedConfig, initial_config, provide_config};
use crate::pages::{accordion_demo::AccordionDemoPage, address_review_demo::AddressReviewDemoPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                <EmbeddedConfig/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root showcase component.
///
/// Provides the component config and the default capability set, then routes
/// to one page per component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_config(initial_config());
    provide_components(Components::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront-components.css"/>
        <Title text="Storefront components"/>

        <Router>
            <nav class="showcase-nav">
                <A href="/">"Accordion"</A>
                <A href="/address-review">"Address review"</A>
            </nav>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=AccordionDemoPage/>
                    <Route path=StaticSegment("address-review") view=AddressReviewDemoPage/>
                </Routes>
            </main>
        </Router>
    }
}
