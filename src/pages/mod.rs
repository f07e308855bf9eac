//! Showcase pages, one per component.

pub mod accordion_demo;
pub mod address_review_demo;
