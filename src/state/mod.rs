//! Component state modules.
//!
//! DESIGN
//! ======
//! Each component keeps its behavior in a small state module (pure
//! transitions and decisions) so the `view!` layer only maps state to markup.

pub mod accordion;
pub mod address_review;
pub mod form;
pub mod handle;
pub mod selection;
