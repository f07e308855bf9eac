//! Per-instance identifiers for DOM ids.
//!
//! Several copies of a component can share one page, so ids derived from a
//! static prefix alone would collide. Each instance appends a random suffix.

#[cfg(test)]
#[path = "instance_id_test.rs"]
mod instance_id_test;

use uuid::Uuid;

/// `prefix` followed by a random 32-character hex suffix.
#[must_use]
pub fn unique_instance_id(prefix: &str) -> String {
    format!("{prefix}{}", Uuid::new_v4().simple())
}
