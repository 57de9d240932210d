use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ui::theme::ThemePreset;

/// Environment variable that overrides the configured backend origin
pub const BACKEND_URL_ENV: &str = "IDEAGEN_BACKEND_URL";

/// Backend origin used when nothing else is configured
pub const DEFAULT_BACKEND_ORIGIN: &str = "http://127.0.0.1:8000";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Idea backend settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Scheme, host and port of the idea service
    #[serde(default = "default_origin")]
    pub origin: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
        }
    }
}

fn default_origin() -> String {
    DEFAULT_BACKEND_ORIGIN.to_string()
}

/// Sign-in gate settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Hide the generator behind a sign-in prompt
    #[serde(default)]
    pub require_sign_in: bool,
    /// Page opened in the browser when signing in
    #[serde(default)]
    pub sign_in_url: Option<String>,
}

/// Appearance and startup behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemePreset,
    /// Fetch an idea as soon as the window opens (ignored when sign-in is required)
    #[serde(default = "default_true")]
    pub fetch_on_start: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreset::default(),
            fetch_on_start: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Check that an origin is an absolute http(s) URL
pub fn validate_origin(origin: &str) -> Result<()> {
    let url = reqwest::Url::parse(origin)
        .map_err(|e| anyhow::anyhow!("Invalid backend origin '{}': {}", origin, e))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("Backend origin must use http or https, got '{}'", url.scheme());
    }
    if url.host_str().is_none() {
        anyhow::bail!("Backend origin '{}' has no host", origin);
    }
    Ok(())
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "ideagen", "Ideagen")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        let config_dir = dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, using defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            tracing::info!("Loaded configuration from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration for the desktop app, along with the path edits
    /// should be saved back to.
    ///
    /// A file that exists but cannot be read or parsed yields defaults and no
    /// save path, so the user's file is left as they wrote it.
    pub fn load_for_app(path: Option<PathBuf>) -> (Self, Option<PathBuf>) {
        let Some(path) = path else {
            return (Self::default(), None);
        };
        match Self::load_from(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!(
                    "Failed to load config from {:?}, using defaults without saving: {}",
                    path,
                    e
                );
                (Self::default(), None)
            }
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Backend origin after applying an environment override.
    ///
    /// A set, non-blank override wins over the file value.
    pub fn resolve_origin(&self, env_override: Option<String>) -> String {
        match env_override {
            Some(origin) if !origin.trim().is_empty() => origin.trim().to_string(),
            _ => self.backend.origin.clone(),
        }
    }

    /// Backend origin honoring `IDEAGEN_BACKEND_URL`
    pub fn backend_origin(&self) -> String {
        self.resolve_origin(std::env::var(BACKEND_URL_ENV).ok())
    }
}
