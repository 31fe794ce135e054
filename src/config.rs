//! Client configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `CINESCOPE_*` environment variables.

use crate::catalog::{CatalogError, Result};
use reqwest::Url;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3/";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";
const DEFAULT_LANGUAGE: &str = "en";
const ENV_PREFIX: &str = "CINESCOPE";

/// Connection settings for the catalog API
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// REST API root; endpoints are resolved relative to it
    pub api_base_url: String,
    /// Image CDN root; size tokens and paths are appended to it
    pub image_base_url: String,
    /// Bearer token sent with every request
    pub access_token: String,
    /// Value of the `language` query parameter
    pub language: String,
    /// Request timeout override; the transport default applies when unset
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            access_token: String::new(),
            language: system_language(),
            timeout_secs: None,
            user_agent: concat!("cinescope/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("api_base_url", &self.api_base_url)
            .field("image_base_url", &self.image_base_url)
            .field("access_token", &"<redacted>")
            .field("language", &self.language)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl CatalogConfig {
    /// Load from the default config file location and the environment
    pub fn load() -> Result<Self> {
        Self::load_from(default_path().as_deref())
    }

    /// Load from an explicit file (missing files are skipped) and the environment
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            debug!("Reading configuration from {}", path.display());
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let config: Self = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Set the access token
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = token.into();
        self
    }

    /// Set the API base URL
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the request language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Check that both base URLs parse
    pub fn validate(&self) -> Result<()> {
        self.api_base()?;
        Url::parse(&self.image_base_url).map_err(|e| invalid("image_base_url", &e))?;
        Ok(())
    }

    /// API base URL with a trailing slash so relative endpoints join under it
    pub fn api_base(&self) -> Result<Url> {
        let mut base = self.api_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        Url::parse(&base).map_err(|e| invalid("api_base_url", &e))
    }
}

fn invalid(key: &str, err: &dyn std::fmt::Display) -> CatalogError {
    CatalogError::Config(config::ConfigError::Message(format!("invalid {key}: {err}")))
}

/// `$XDG_CONFIG_HOME/cinescope/config.toml` or the platform equivalent
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cinescope").join("config.toml"))
}

/// Language code of the process locale, falling back to English
#[must_use]
pub fn system_language() -> String {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| language_from_locale(&value))
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// Extract the language part of a POSIX locale (`es_AR.UTF-8` -> `es`)
#[must_use]
pub fn language_from_locale(locale: &str) -> Option<String> {
    let language = locale
        .split(['_', '-', '.', '@'])
        .next()?
        .trim()
        .to_ascii_lowercase();

    match language.as_str() {
        "" | "c" | "posix" => None,
        _ => Some(language),
    }
}
