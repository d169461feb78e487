//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos' own settings (site address, pkg dir, ...) live in
//! `[package.metadata.leptos]` and the `LEPTOS_*` variables instead.

use std::path::{Path, PathBuf};

use crate::core::navigation::APP_ENTRY;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_DIST_DIR is set but {0} does not exist")]
    MissingAppEntry(PathBuf),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Directory holding the built application that the landing page redirects to.
    /// Its `index.html` is served at `/index.html` when set.
    /// Example: ../app/dist
    pub app_dist_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            app_dist_dir: lookup("APP_DIST_DIR").filter(|v| !v.trim().is_empty()),
        }
    }

    /// Check if the application bundle is served by this server
    pub fn has_app_dist(&self) -> bool {
        self.app_dist_dir.is_some()
    }

    /// Path of the app entry file, if an app bundle is configured.
    pub fn app_entry_file(&self) -> Result<Option<PathBuf>, ConfigError> {
        let Some(dir) = self.app_dist_dir.as_deref() else {
            return Ok(None);
        };
        let path = Path::new(dir).join(APP_ENTRY);
        if path.is_file() {
            Ok(Some(path))
        } else {
            Err(ConfigError::MissingAppEntry(path))
        }
    }
}
