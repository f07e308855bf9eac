//! Collapsible panel with a clickable header.
//!
//! DESIGN
//! ======
//! The panel is uncontrolled: `is_expanded` only seeds the initial state, and
//! later changes to the prop are ignored. Children stay mounted while
//! collapsed (the content region is clipped to zero height), so stateful
//! children keep their state across collapse/expand cycles.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

use leptos::prelude::*;

use crate::components::capabilities::{Components, use_components};
use crate::config::use_config;
use crate::state::accordion::{AccordionEvent, AccordionState};
use crate::state::handle::ComponentRef;
use crate::util::transition::accordion_visual;

/// Imperative access to one accordion, handed to ancestors via `handle`.
#[derive(Clone, Copy)]
pub struct AccordionHandle {
    state: RwSignal<AccordionState>,
}

impl AccordionHandle {
    #[must_use]
    pub fn new(is_expanded: bool) -> Self {
        Self { state: RwSignal::new(AccordionState::new(is_expanded)) }
    }

    /// Flip the panel, exactly as a header click would.
    pub fn toggle(self) {
        self.dispatch(AccordionEvent::ToggleRequested);
    }

    #[must_use]
    pub fn is_expanded(self) -> bool {
        self.state.get_untracked().is_expanded()
    }

    fn dispatch(self, event: AccordionEvent) {
        self.state.update(|state| *state = state.apply(event));
    }

    fn state(self) -> AccordionState {
        self.state.get()
    }
}

#[component]
pub fn Accordion(
    /// Bold header label.
    #[prop(into)]
    label: String,
    /// Extra header text, shown after the label as `, {detail}`.
    #[prop(optional, into)]
    detail: Option<String>,
    /// Leading header icon.
    #[prop(optional, into)]
    icon: Option<ViewFn>,
    /// Initial expansion only; not re-read after construction.
    #[prop(optional)]
    is_expanded: bool,
    /// Extra class for the outermost element.
    #[prop(optional, into)]
    class: Option<String>,
    /// Receives the [`AccordionHandle`] on construction.
    #[prop(optional)]
    handle: Option<ComponentRef<AccordionHandle>>,
    /// Capability override; otherwise taken from context.
    #[prop(optional)]
    components: Option<Components>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let components = use_components(components);
    let timing = use_config().accordion;
    let panel = AccordionHandle::new(is_expanded);
    if let Some(handle) = handle {
        handle.load(panel);
    }

    let on_header_click = move |_| panel.dispatch(AccordionEvent::HeaderActivated);
    let content_style = move || accordion_visual(panel.state(), timing).content_style();
    let icon_style = move || accordion_visual(panel.state(), timing).icon_style();
    let expanded = move || panel.state().is_expanded();

    let root_class = class.map_or_else(|| "accordion".to_owned(), |extra| format!("accordion {extra}"));
    let leading_icon = icon.map(|icon| view! { <span class="accordion__icon">{icon.run()}</span> });
    let detail = detail.map(|detail| view! { <span class="accordion__detail">", " {detail}</span> });
    let content = children.map(|children| children());

    view! {
        <div class=root_class class:accordion--expanded=expanded>
            <div class="accordion__header" on:click=on_header_click aria-expanded=move || expanded().to_string()>
                <span>
                    {leading_icon}
                    <span class="accordion__label">{label}</span>
                    {detail}
                </span>
                <span class="accordion__icon accordion__icon--expand" style=icon_style>
                    {components.icon_expand()}
                </span>
            </div>
            <div class="accordion__content" style=content_style>
                {content}
            </div>
        </div>
    }
}
