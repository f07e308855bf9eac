//! Imperative access from an ancestor to a child component.
//!
//! An ancestor creates an empty [`ComponentRef`] and passes it down as the
//! child's `handle` prop; the child loads its handle into it on construction.
//! The handle only exposes the operations the child chooses to publish.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

use leptos::prelude::*;

/// Slot that receives a component's handle once the component is built.
pub struct ComponentRef<H: Send + Sync + 'static> {
    slot: RwSignal<Option<H>>,
}

impl<H: Send + Sync + 'static> Clone for ComponentRef<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: Send + Sync + 'static> Copy for ComponentRef<H> {}

impl<H: Send + Sync + 'static> Default for ComponentRef<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Send + Sync + 'static> ComponentRef<H> {
    #[must_use]
    pub fn new() -> Self {
        Self { slot: RwSignal::new(None) }
    }

    /// Called by the child component. A later load replaces the earlier handle.
    pub fn load(self, handle: H) {
        self.slot.set(Some(handle));
    }

    /// Tracked check, so views can react to the child mounting.
    #[must_use]
    pub fn is_loaded(self) -> bool {
        self.slot.with(Option::is_some)
    }

    /// Run `f` against the loaded handle without subscribing.
    ///
    /// Returns `None` if the child has not been constructed yet.
    pub fn with<R>(self, f: impl FnOnce(&H) -> R) -> Option<R> {
        self.slot.with_untracked(|slot| slot.as_ref().map(f))
    }
}
