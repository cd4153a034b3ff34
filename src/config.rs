//! Console configuration: API base URL, admin token, export directory.
//!
//! Persisted as JSON in `~/.trackdeck/config.json`. The running console
//! shares one [`SharedConfig`] between the config panel (writer) and the API
//! client (reader); the client reads it on every request, so edits apply to
//! the next call without a restart.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::error::ConfigError;

/// Default data service address.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5001";

const CONFIG_DIR: &str = ".trackdeck";
const CONFIG_FILE: &str = "config.json";

pub const ENV_API_URL: &str = "TRACKDECK_API_URL";
pub const ENV_TOKEN: &str = "TRACKDECK_TOKEN";
pub const ENV_EXPORT_DIR: &str = "TRACKDECK_EXPORT_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Base URL of the admin data service.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Admin token sent with every request. Empty means "not configured".
    #[serde(default)]
    pub token: String,
    /// Where CSV exports are written. `None` means the working directory.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: String::new(),
            export_dir: None,
        }
    }
}

impl ConsoleConfig {
    /// Base URL with trailing slashes removed.
    pub fn base_url(&self) -> &str {
        let trimmed = self.api_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            DEFAULT_API_URL
        } else {
            trimmed
        }
    }

    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Export directory, falling back to the working directory.
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Apply `TRACKDECK_*` environment overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.trim().is_empty() {
                self.api_url = url.trim().to_string();
            }
        }
        if let Ok(token) = std::env::var(ENV_TOKEN) {
            self.token = token.trim().to_string();
        }
        if let Ok(dir) = std::env::var(ENV_EXPORT_DIR) {
            if !dir.trim().is_empty() {
                self.export_dir = Some(PathBuf::from(dir.trim()));
            }
        }
        self
    }

    /// Hint shown under the config panel, mirroring whether a token is set.
    pub fn hint(&self) -> &'static str {
        if self.has_token() {
            "Config loaded."
        } else {
            "Set token to access admin endpoints."
        }
    }
}

/// Process-wide configuration handle, read lazily by the API client.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<ConsoleConfig>>,
}

impl SharedConfig {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Copy of the current configuration.
    pub fn snapshot(&self) -> ConsoleConfig {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replace the configuration; the next request picks it up.
    pub fn replace(&self, config: ConsoleConfig) {
        match self.inner.write() {
            Ok(mut guard) => *guard = config,
            Err(poisoned) => *poisoned.into_inner() = config,
        }
    }

    pub fn update(&self, f: impl FnOnce(&mut ConsoleConfig)) {
        let mut config = self.snapshot();
        f(&mut config);
        self.replace(config);
    }
}

/// Loads and saves [`ConsoleConfig`] on disk.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at `~/.trackdeck/config.json`.
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(Self {
            path: home.join(CONFIG_DIR).join(CONFIG_FILE),
        })
    }

    /// Store at an explicit path (tests, alternate profiles).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored config; a missing file yields defaults.
    pub fn load(&self) -> Result<ConsoleConfig, ConfigError> {
        if !self.path.exists() {
            return Ok(ConsoleConfig::default());
        }
        let file = File::open(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Persist the config, creating the parent directory if needed.
    pub fn save(&self, config: &ConsoleConfig) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let file = File::create(&self.path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, config).map_err(|source| {
            ConfigError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        writer.flush().map_err(io_err)
    }
}
