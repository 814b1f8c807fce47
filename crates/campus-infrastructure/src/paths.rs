//! Unified path management for campus configuration files.
//!
//! ```text
//! ~/.config/campus/            # Config directory (platform config dir + "campus")
//! ├── config.toml              # Client configuration
//! └── session.json             # Stored bearer token (0600 on Unix)
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "campus";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for campus_core::CampusError {
    fn from(err: PathError) -> Self {
        campus_core::CampusError::config(err.to_string())
    }
}

/// Unified path management for campus.
pub struct CampusPaths;

impl CampusPaths {
    /// Returns the campus configuration directory (e.g. `~/.config/campus/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the client configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the stored session token.
    ///
    /// # Security Note
    ///
    /// The file holds a bearer credential; the token store writes it with
    /// 600 permissions on Unix.
    pub fn token_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("session.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file() {
        let config_file = CampusPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        let config_dir = CampusPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
        assert!(config_dir.ends_with("campus"));
    }

    #[test]
    fn test_token_file() {
        let token_file = CampusPaths::token_file().unwrap();
        assert!(token_file.ends_with("session.json"));
        assert!(token_file.starts_with(CampusPaths::config_dir().unwrap()));
    }
}
