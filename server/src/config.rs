//! Showcase server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::{Path, PathBuf};

use storefront_components::config::{ComponentConfig, ConfigError};

pub const DEFAULT_PORT: u16 = 3000;

/// Startup failures.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("reading component config {path}: {source}")]
    ReadComponentConfig { path: String, source: std::io::Error },
    #[error(transparent)]
    ComponentConfig(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub component_config_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SHOWCASE_CONFIG`: path to a component config JSON document
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidPort`] if `PORT` is not a port number.
    pub fn from_env() -> Result<Self, ServerError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let component_config_path = std::env::var_os("SHOWCASE_CONFIG").map(PathBuf::from);
        Ok(Self { port, component_config_path })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ServerError::InvalidPort(raw.to_owned())),
    }
}

/// Load the component config the showcase provides to every page. Defaults
/// when no path is configured.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_component_config(path: Option<&Path>) -> Result<ComponentConfig, ServerError> {
    let Some(path) = path else {
        return Ok(ComponentConfig::default());
    };
    let raw = std::fs::read_to_string(path).map_err(|source| ServerError::ReadComponentConfig {
        path: path.display().to_string(),
        source,
    })?;
    Ok(ComponentConfig::from_json(&raw)?)
}
