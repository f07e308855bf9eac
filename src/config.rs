//! Component configuration.
//!
//! Hosts can tune accordion timing and the address review copy without
//! touching every call site: build a [`ComponentConfig`] (usually from JSON),
//! hand it to [`provide_config`] near the root, and components pick it up with
//! [`use_config`]. Missing sections fall back to the defaults.
//!
//! SSR AND HYDRATION
//! =================
//! The server renders the active config into the document head as a JSON
//! `<script>` ([`EmbeddedConfig`]). On the client, [`initial_config`] reads it
//! back so both sides render with the same timing and copy.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::state::address_review::{DEFAULT_WARNING_MESSAGE, DEFAULT_WARNING_TITLE};
use crate::util::transition::AccordionTiming;

/// DOM id of the `<script>` carrying the server's config.
pub const CONFIG_ELEMENT_ID: &str = "component-config";

/// Error returned by [`ComponentConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid component config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Copy shown in the address review warning banner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewCopy {
    pub warning_title: String,
    pub warning_message: String,
}

impl Default for ReviewCopy {
    fn default() -> Self {
        Self {
            warning_title: DEFAULT_WARNING_TITLE.to_owned(),
            warning_message: DEFAULT_WARNING_MESSAGE.to_owned(),
        }
    }
}

impl ReviewCopy {
    /// Apply per-instance overrides on top of the configured copy.
    #[must_use]
    pub fn resolve(&self, title: Option<String>, message: Option<String>) -> Self {
        Self {
            warning_title: title.unwrap_or_else(|| self.warning_title.clone()),
            warning_message: message.unwrap_or_else(|| self.warning_message.clone()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentConfig {
    pub accordion: AccordionTiming,
    pub address_review: ReviewCopy,
}

impl ComponentConfig {
    /// Parse a config document. Absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `raw` is not valid JSON or a value has
    /// the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Serialize for embedding in an HTML `<script>` element. `<` is written
    /// as `\u003c` so no string value can close the element early.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails.
    pub fn to_embedded_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?.replace('<', "\\u003c"))
    }
}

/// Make `config` available to every component below the current owner.
pub fn provide_config(config: ComponentConfig) {
    provide_context(config);
}

/// The nearest provided config, or the defaults.
#[must_use]
pub fn use_config() -> ComponentConfig {
    use_context::<ComponentConfig>().unwrap_or_default()
}

/// The config to provide at the application root: the one already in context
/// (server render), else the one embedded by the server (hydration), else the
/// defaults.
#[must_use]
pub fn initial_config() -> ComponentConfig {
    use_context::<ComponentConfig>()
        .or_else(embedded_config)
        .unwrap_or_default()
}

fn embedded_config() -> Option<ComponentConfig> {
    #[cfg(feature = "hydrate")]
    {
        let raw = document().get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()?;
        match ComponentConfig::from_json(&raw) {
            Ok(config) => Some(config),
            Err(e) => {
                leptos::logging::warn!("ignoring embedded component config: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// `<script type="application/json">` holding the config in context, for the
/// client to pick up during hydration.
#[component]
pub fn EmbeddedConfig() -> impl IntoView {
    let json = match use_config().to_embedded_json() {
        Ok(json) => json,
        Err(e) => {
            leptos::logging::warn!("component config not embedded: {e}");
            "{}".to_owned()
        }
    };

    view! { <script type="application/json" id=CONFIG_ELEMENT_ID inner_html=json></script> }
}
