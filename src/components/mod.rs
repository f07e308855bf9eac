//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `accordion` and `address_review` are the checkout-facing components. The
//! remaining modules are the default widgets behind the injected capability
//! set in `capabilities`.

pub mod accordion;
pub mod address;
pub mod address_review;
pub mod capabilities;
pub mod checkbox;
pub mod field;
pub mod form;
pub mod icon_expand;
pub mod inline_alert;
pub mod selectable_list;
