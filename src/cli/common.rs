//! Common CLI utilities shared across all CLI commands.
//!
//! - `CliContext`: effective config, session store and API client
//! - Output helpers: `print_success`, `print_error`, `print_info`

use crate::api::ApiClient;
use crate::config::Config;
use crate::session::SessionStore;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Everything a command needs, loaded once.
pub struct CliContext {
    pub config: Config,
    pub session: SessionStore,
    pub api: ApiClient,
    /// Path to the config file
    pub config_path: PathBuf,
}

impl CliContext {
    /// Load config and session from their default locations.
    ///
    /// The base URL comes from `api_url` if given, else `PORTAL_API_URL`,
    /// else the config file.
    pub fn load(api_url: Option<String>) -> Result<Self> {
        let config_path = crate::utils::get_config_path();

        let mut config =
            Config::load_or_create(&config_path).context("Failed to load configuration")?;
        config.apply_env_overrides();
        let config = config.with_api_url(api_url);

        let session = SessionStore::open(&crate::utils::get_session_path())
            .context("Failed to open session store")?;

        let mut ctx = Self::new(config, session)?;
        ctx.config_path = config_path;
        Ok(ctx)
    }

    /// Build a context from already-loaded parts
    pub fn new(config: Config, session: SessionStore) -> Result<Self> {
        let api = ApiClient::new(&config.api).context("Failed to create API client")?;
        Ok(Self {
            config,
            session,
            api,
            config_path: crate::utils::get_config_path(),
        })
    }
}

/// Print a success message with a checkmark prefix.
pub fn print_success(msg: &str) {
    println!("\u{2713} {}", msg);
}

/// Print an error message with an X prefix to stderr.
pub fn print_error(msg: &str) {
    eprintln!("\u{2717} {}", msg);
}

/// Print an info message with an info sign prefix.
pub fn print_info(msg: &str) {
    println!("\u{2139}\u{FE0F} {}", msg);
}
