//! Host configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before [`ServerConfig::from_env`] runs, so the
//! values here may come from either source.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use leptos::config::{LeptosOptions, get_configuration};

pub const ASSETS_DIR_VAR: &str = "STOREFRONT_ASSETS_DIR";
pub const DEFAULT_ASSETS_DIR: &str = "client/public";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The Leptos site configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// A variable was set but holds only whitespace.
    #[error("{var} is set but empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory served under `/assets` (logo and other static images).
    pub assets_dir: PathBuf,
    /// Site root, bundle dir, and bind address (`LEPTOS_SITE_ADDR`).
    pub leptos: LeptosOptions,
}

impl ServerConfig {
    /// Build the host config from the environment.
    ///
    /// Optional:
    /// - `STOREFRONT_ASSETS_DIR`: default `client/public`
    /// - `LEPTOS_*`: overrides for `[package.metadata.leptos]`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a variable is blank or the Leptos
    /// configuration is missing or malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let assets_dir = assets_dir_from_env()?;
        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        Ok(Self { assets_dir, leptos: conf.leptos_options })
    }
}

fn assets_dir_from_env() -> Result<PathBuf, ConfigError> {
    parse_assets_dir(std::env::var(ASSETS_DIR_VAR).ok().as_deref())
}

fn parse_assets_dir(raw: Option<&str>) -> Result<PathBuf, ConfigError> {
    match raw.map(str::trim) {
        None => Ok(PathBuf::from(DEFAULT_ASSETS_DIR)),
        Some("") => Err(ConfigError::Empty { var: ASSETS_DIR_VAR }),
        Some(dir) => Ok(PathBuf::from(dir)),
    }
}
