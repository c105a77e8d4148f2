//! Shared test utilities for the integration tests.
//!
//! Provides `TestEnv` - an isolated config directory with its own session
//! file, plus helpers for starting a mock account API.
//!
//! Tests that change environment variables hold `EnvGuard`, which serializes
//! them through a global mutex and restores the old values on drop.

use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

use portal::config::{ApiConfig, Config};
use portal::session::SessionStore;
use portal::ApiClient;
use wiremock::MockServer;

/// Global mutex to ensure only one test uses env overrides at a time.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Sets environment variables for the duration of a test.
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
    #[allow(dead_code)]
    lock: std::sync::MutexGuard<'static, ()>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn new() -> Self {
        Self {
            saved: Vec::new(),
            lock: ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner()),
        }
    }

    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.remember(key);
        std::env::set_var(key, value);
        self
    }

    pub fn remove(mut self, key: &str) -> Self {
        self.remember(key);
        std::env::remove_var(key);
        self
    }

    fn remember(&mut self, key: &str) {
        if !self.saved.iter().any(|(k, _)| k == key) {
            self.saved.push((key.to_string(), std::env::var(key).ok()));
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, old) in self.saved.drain(..).rev() {
            match old {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}

/// An isolated config directory, cleaned up on drop.
#[allow(dead_code)]
pub struct TestEnv {
    temp_dir: TempDir,
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join("config");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        Self {
            temp_dir,
            config_dir,
        }
    }

    /// Point `PORTAL_CONFIG_DIR` at this environment until the guard drops.
    pub fn env_override(&self) -> EnvGuard {
        EnvGuard::new()
            .set("PORTAL_CONFIG_DIR", &self.config_dir.to_string_lossy())
            .remove("PORTAL_API_URL")
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn session_path(&self) -> PathBuf {
        self.config_dir.join("session.toml")
    }

    /// Open the file-backed session store of this environment.
    pub fn session(&self) -> SessionStore {
        SessionStore::open(&self.session_path()).expect("Failed to open session store")
    }

    pub fn session_file_exists(&self) -> bool {
        self.session_path().exists()
    }

    /// Write `config` as this environment's config file.
    pub fn save_config(&self, config: &Config) {
        config.save(&self.config_path()).expect("Failed to save config");
    }
}

/// Whether the sandbox allows binding a local port for the mock server.
///
/// Prints a skip note when it does not, so a test that returns early is
/// visible in the output.
pub fn can_bind_localhost() -> bool {
    let ok = std::net::TcpListener::bind("127.0.0.1:0").is_ok();
    if !ok {
        eprintln!("skipping: cannot bind localhost");
    }
    ok
}

/// Start a mock API, or `None` when local sockets are unavailable.
#[allow(dead_code)]
pub async fn start_api() -> Option<MockServer> {
    if !can_bind_localhost() {
        return None;
    }
    Some(MockServer::start().await)
}

/// API settings pointing at `server` under `/api`.
#[allow(dead_code)]
pub fn api_config(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: format!("{}/api", server.uri()),
        ..ApiConfig::default()
    }
}

#[allow(dead_code)]
pub fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new(&api_config(server)).expect("Failed to build API client")
}

/// A base URL nothing listens on.
#[allow(dead_code)]
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/api", port)
}
