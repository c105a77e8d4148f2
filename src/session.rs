//! Session store for issued credentials.
//!
//! A small key/value store over the two token keys, persisted to a TOML file
//! in the config directory so a login survives restarts. The store is an
//! explicit value: whoever needs auth state is handed a reference to it.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The keys the store knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    AccessToken,
    RefreshToken,
}

impl SessionKey {
    pub const ALL: [SessionKey; 2] = [SessionKey::AccessToken, SessionKey::RefreshToken];

    /// Name under which the value is persisted
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::AccessToken => "accessToken",
            SessionKey::RefreshToken => "refreshToken",
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token pair issued by a successful login.
///
/// Field names follow the API response body (`{"access": ..., "refresh": ...}`).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "access")]
    pub access_token: String,
    #[serde(rename = "refresh")]
    pub refresh_token: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    values: BTreeMap<String, String>,
}

/// Key/value store holding the current session
#[derive(Clone, PartialEq, Eq)]
pub struct SessionStore {
    path: Option<PathBuf>,
    data: SessionFile,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("path", &self.path)
            .field("keys", &self.data.values.keys().collect::<Vec<_>>())
            .field("saved_at", &self.data.saved_at)
            .finish()
    }
}

impl SessionStore {
    /// Open the file-backed store at `path`.
    ///
    /// A missing, unreadable or corrupt file is an empty store; the next
    /// write replaces it.
    pub fn open(path: &Path) -> Result<Self> {
        let data = if path.exists() {
            Self::read(path).unwrap_or_else(|e| {
                warn!("Ignoring session file: {:#}", e);
                SessionFile::default()
            })
        } else {
            SessionFile::default()
        };

        debug!("Opened session store at {:?} ({} keys)", path, data.values.len());
        Ok(Self {
            path: Some(path.to_path_buf()),
            data,
        })
    }

    /// A store that never touches the disk
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: SessionFile::default(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, key: SessionKey) -> Option<&str> {
        self.data.values.get(key.as_str()).map(String::as_str)
    }

    pub fn set(&mut self, key: SessionKey, value: impl Into<String>) -> Result<()> {
        let mut data = self.data.clone();
        data.values.insert(key.as_str().to_string(), value.into());
        data.saved_at = Some(Utc::now());
        self.commit(data)?;
        debug!("Session key {} set", key);
        Ok(())
    }

    pub fn clear(&mut self, key: SessionKey) -> Result<()> {
        if !self.data.values.contains_key(key.as_str()) {
            return Ok(());
        }
        let mut data = self.data.clone();
        data.values.remove(key.as_str());
        if data.values.is_empty() {
            data.saved_at = None;
        }
        self.commit(data)?;
        debug!("Session key {} cleared", key);
        Ok(())
    }

    /// Write both tokens of a freshly issued session in one go
    pub fn store(&mut self, session: &Session) -> Result<()> {
        let mut data = self.data.clone();
        data.values.insert(
            SessionKey::AccessToken.as_str().to_string(),
            session.access_token.clone(),
        );
        data.values.insert(
            SessionKey::RefreshToken.as_str().to_string(),
            session.refresh_token.clone(),
        );
        data.saved_at = Some(Utc::now());
        self.commit(data)?;
        info!("Session stored");
        Ok(())
    }

    /// The full token pair, if both halves are present
    pub fn session(&self) -> Option<Session> {
        Some(Session {
            access_token: self.get(SessionKey::AccessToken)?.to_string(),
            refresh_token: self.get(SessionKey::RefreshToken)?.to_string(),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.get(SessionKey::AccessToken).is_some()
    }

    /// When the current values were written
    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.data.saved_at
    }

    /// Forget every key (logout). Also removes a session file that could
    /// not be loaded.
    pub fn clear_all(&mut self) -> Result<()> {
        let file_exists = self.path.as_deref().is_some_and(Path::exists);
        if self.data.values.is_empty() && !file_exists {
            return Ok(());
        }
        self.commit(SessionFile::default())?;
        info!("Session cleared");
        Ok(())
    }

    /// Persist `data`, then adopt it. A failed write leaves the store as it was.
    fn commit(&mut self, data: SessionFile) -> Result<()> {
        if let Some(path) = &self.path {
            Self::write(path, &data)?;
        }
        self.data = data;
        Ok(())
    }

    fn read(path: &Path) -> Result<SessionFile> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse session file: {:?}", path))
    }

    fn write(path: &Path, data: &SessionFile) -> Result<()> {
        if data.values.is_empty() {
            if path.exists() {
                std::fs::remove_file(path)
                    .with_context(|| format!("Failed to remove session file: {:?}", path))?;
            }
            return Ok(());
        }

        let content =
            toml::to_string_pretty(data).with_context(|| "Failed to serialize session")?;
        crate::utils::write_private_file(path, &content)
    }
}
