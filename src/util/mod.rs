//! Helpers shared across component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps style computation and id generation out of the `view!` layer so it
//! can be tested without a DOM.

pub mod instance_id;
pub mod transition;
