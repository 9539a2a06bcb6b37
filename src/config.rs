use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(s) = path.to_str() {
        if let Some(stripped) = s.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if s == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

/// Configuration for bookstall
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookstallConfig {
    /// Base URL of the bookstore API
    #[serde(default = "defaults::api_base_url")]
    pub api_base_url: String,
    /// Path of the cart file
    #[serde(default = "defaults::cart_path")]
    pub cart_path: PathBuf,
    /// Request timeout in seconds
    #[serde(default = "defaults::request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for BookstallConfig {
    fn default() -> Self {
        BookstallConfig {
            api_base_url: defaults::api_base_url(),
            cart_path: defaults::cart_path(),
            request_timeout_secs: defaults::request_timeout_secs(),
        }
    }
}

impl BookstallConfig {
    /// Load configuration from the config file and environment variables.
    /// A missing config file yields the defaults.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        tracing::debug!("loading bookstall config from {:?}", config_path);
        let mut config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            Self::default()
        };

        if let Ok(url) = env::var("BOOKSTALL_API_URL") {
            config.api_base_url = url;
        }

        if let Ok(path) = env::var("BOOKSTALL_CART_PATH") {
            config.cart_path = expand_tilde(&PathBuf::from(path));
        }

        if let Ok(secs) = env::var("BOOKSTALL_TIMEOUT_SECS") {
            config.request_timeout_secs = secs
                .parse()
                .context("Failed to parse BOOKSTALL_TIMEOUT_SECS as u64")?;
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let mut config: BookstallConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        config.cart_path = expand_tilde(&config.cart_path);

        Ok(config)
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self, path: &PathBuf) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    /// Get default config file path
    pub fn config_file_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".config/bookstall/config.yaml"))
            .context("Could not determine home directory for config file")
    }
}

mod defaults {
    use std::path::PathBuf;

    pub(crate) fn api_base_url() -> String {
        "http://localhost:8000".to_string()
    }

    pub(crate) fn cart_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bookstall/cart.json")
    }

    pub(crate) fn request_timeout_secs() -> u64 {
        10
    }
}
