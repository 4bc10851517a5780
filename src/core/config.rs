use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "XRATE_API_KEY";

pub const DEFAULT_CURRENCYLAYER_URL: &str = "http://api.currencylayer.com";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CurrencyLayerConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub currencylayer: Option<CurrencyLayerConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            currencylayer: Some(CurrencyLayerConfig {
                base_url: DEFAULT_CURRENCYLAYER_URL.to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "xrate", "xrate")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Applies the `XRATE_API_KEY` environment override, if set.
    pub fn with_env_overrides(self) -> Self {
        self.with_api_key_override(std::env::var(API_KEY_ENV).ok())
    }

    /// Replaces the API key when `key` is set and non-blank.
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            debug!("Using API key from {}", API_KEY_ENV);
            self.api_key = key;
        }
        self
    }

    pub fn currencylayer_url(&self) -> &str {
        self.providers
            .currencylayer
            .as_ref()
            .map_or(DEFAULT_CURRENCYLAYER_URL, |p| &p.base_url)
    }

    /// Returns the API key, failing when none is configured.
    pub fn require_api_key(&self) -> Result<&str> {
        let key = self.api_key.trim();
        if key.is_empty() {
            anyhow::bail!(
                "No API key configured. Set `api_key` in the config file or {}",
                API_KEY_ENV
            );
        }
        Ok(key)
    }
}
