use crate::keymap::Keymap;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding `api.base_url`
pub const API_URL_ENV: &str = "PORTAL_API_URL";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Account API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Name shown as the brand in the nav bar
    #[serde(default = "default_brand")]
    pub brand: String,
    /// UI theme (dark, light, no_color)
    #[serde(default)]
    pub theme: ThemeType,
    /// Keyboard bindings
    #[serde(default)]
    pub keymap: Keymap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address the `/register/` and `/login/` paths are joined onto
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout; unset means the HTTP client default (none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

pub fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_user_agent() -> String {
    format!("portal/{}", env!("CARGO_PKG_VERSION"))
}

fn default_brand() -> String {
    "Portal".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            brand: default_brand(),
            theme: ThemeType::default(),
            keymap: Keymap::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, writing the defaults if it doesn't exist
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let mut config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;

            if config.api.base_url.trim().is_empty() {
                config.api.base_url = default_base_url();
            }
            if config.brand.trim().is_empty() {
                config.brand = default_brand();
            }

            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file with secure permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        crate::utils::write_private_file(config_path, &content)
    }

    /// Apply `PORTAL_API_URL` and `NO_COLOR` from the environment
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api.base_url = url.trim().to_string();
            }
        }
        if std::env::var_os("NO_COLOR").is_some() {
            self.theme = ThemeType::NoColor;
        }
    }

    /// Apply an explicit base URL (from `--api-url`); wins over file and env
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        self
    }
}
