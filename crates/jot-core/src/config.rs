//! Runtime configuration.
//!
//! Jot reads no config file, flags or environment variables. Defaults follow
//! the working directory, and the notes folder is always chosen interactively.

use std::path::{Path, PathBuf};

use crate::recent::RECENT_NOTES_CAPACITY;

/// Name of the hidden notes folder.
pub const HIDDEN_DIR_NAME: &str = "Hidden";

/// Settings a session starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Folder holding hidden notes, created on startup
    pub hidden_dir: PathBuf,
    /// Maximum entries in the recent list
    pub recent_capacity: usize,
}

impl AppConfig {
    /// Config rooted at `base`: hidden notes go to `base/Hidden`.
    #[must_use]
    pub fn in_dir(base: &Path) -> Self {
        Self {
            hidden_dir: base.join(HIDDEN_DIR_NAME),
            recent_capacity: RECENT_NOTES_CAPACITY,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::in_dir(&default_base_dir())
    }
}

fn default_base_dir() -> PathBuf {
    match std::env::current_dir() {
        Ok(dir) => dir,
        Err(error) => {
            tracing::warn!("Working directory unavailable ({error}); using data dir");
            dirs::data_local_dir()
                .map(|dir| dir.join("jot"))
                .unwrap_or_else(|| PathBuf::from("."))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn in_dir_places_hidden_folder_under_base() {
        let config = AppConfig::in_dir(Path::new("/work"));
        assert_eq!(config.hidden_dir, PathBuf::from("/work/Hidden"));
        assert_eq!(config.recent_capacity, 10);
    }

    #[test]
    fn default_uses_working_directory() {
        let config = AppConfig::default();
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(config.hidden_dir, cwd.join(HIDDEN_DIR_NAME));
    }
}
