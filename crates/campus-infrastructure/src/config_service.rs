//! Configuration service implementation.
//!
//! Loads the client configuration from `~/.config/campus/config.toml` and
//! applies environment overrides on top of it.

use campus_core::config::ClientConfig;
use campus_core::error::{CampusError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use crate::paths::CampusPaths;

pub const ENV_API_URL: &str = "CAMPUS_API_URL";
pub const ENV_TOKEN_FILE: &str = "CAMPUS_TOKEN_FILE";
pub const ENV_TIMEOUT_SECS: &str = "CAMPUS_TIMEOUT_SECS";

/// Configuration service that loads and caches the client configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the default config file.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading a specific config file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading it from file if not cached.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is
    /// an error. Environment overrides are applied on every fresh load.
    pub fn get_config(&self) -> Result<ClientConfig> {
        if let Some(cached) = self
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(cached.clone());
        }

        let path = match &self.path {
            Some(path) => path.clone(),
            None => CampusPaths::config_file()?,
        };
        let loaded = apply_overrides(Self::load_file(&path)?, |key| std::env::var(key).ok())?;

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn load_file(path: &Path) -> Result<ClientConfig> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(ClientConfig::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies `CAMPUS_*` overrides using the given variable lookup.
pub fn apply_overrides<F>(mut config: ClientConfig, lookup: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
        config.api_base_url = url;
    }
    if let Some(path) = lookup(ENV_TOKEN_FILE).filter(|v| !v.trim().is_empty()) {
        config.token_file = Some(PathBuf::from(path));
    }
    if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
        config.request_timeout_secs = raw.trim().parse().map_err(|_| {
            CampusError::config(format!("{ENV_TIMEOUT_SECS} must be a number of seconds, got '{raw}'"))
        })?;
    }
    Ok(config)
}
