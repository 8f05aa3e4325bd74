//! Launcher configuration and per-user storage locations.
//!
//! Configuration is a plain value handed to the `Launcher` at construction;
//! nothing here is global. The file is optional and every key has a default,
//! so a partial file only overrides what it names.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LauncherResult;
use crate::geometry::SizeLimits;

/// Environment variable overriding the per-user storage directory.
pub const HOME_ENV: &str = "SUITEVIEW_HOME";

/// Directory name under the user's home when `SUITEVIEW_HOME` is unset.
const HOME_DIR_NAME: &str = ".suiteview";

pub const CONFIG_FILE: &str = "launcher_config.json";
pub const GEOMETRY_FILE: &str = "launcher_geometry.json";
pub const BOOKMARKS_FILE: &str = "bookmarks.json";

/// Launcher behavior and layout settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LauncherConfig {
    /// Pixels from an edge that count as a resize handle.
    pub resize_margin: i32,
    pub min_width: i32,
    pub min_height: i32,
    pub default_width: i32,
    pub default_height: i32,
    /// Default placement distance from the right screen edge.
    pub right_margin: i32,
    /// Default placement distance from the bottom screen edge (clears the taskbar).
    pub bottom_margin: i32,
    /// Delay before navigating a freshly constructed file navigator.
    pub navigation_delay_ms: u64,
    /// Show a notice when the launcher is hidden to the tray.
    pub notify_on_hide: bool,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            resize_margin: 8,
            min_width: 160,
            min_height: 60,
            default_width: 300,
            default_height: 75,
            right_margin: 20,
            bottom_margin: 60,
            navigation_delay_ms: 500,
            notify_on_hide: true,
        }
    }
}

impl LauncherConfig {
    pub fn size_limits(&self) -> SizeLimits {
        SizeLimits {
            min_width: self.min_width,
            min_height: self.min_height,
        }
    }

    /// Read a config file. Missing keys take their defaults.
    pub fn try_load(path: &Path) -> LauncherResult<Self> {
        let raw = fs::read_to_string(path)?;
        let config: LauncherConfig = serde_json::from_str(&raw)?;
        Ok(config.sanitized())
    }

    /// Read a config file, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[CONFIG] Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Keep the default size reachable under the minimum and the margin usable.
    fn sanitized(mut self) -> Self {
        self.min_width = self.min_width.max(1);
        self.min_height = self.min_height.max(1);
        self.default_width = self.default_width.max(self.min_width);
        self.default_height = self.default_height.max(self.min_height);
        self.resize_margin = self.resize_margin.max(0);
        self
    }
}

/// Per-user storage directory: `$SUITEVIEW_HOME`, else `~/.suiteview`.
pub fn suiteview_home() -> PathBuf {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(HOME_DIR_NAME)
}

/// Resolved file locations inside the storage directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub config: PathBuf,
    pub geometry: PathBuf,
    pub bookmarks: PathBuf,
}

impl StoragePaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            config: dir.join(CONFIG_FILE),
            geometry: dir.join(GEOMETRY_FILE),
            bookmarks: dir.join(BOOKMARKS_FILE),
        }
    }

    pub fn resolve() -> Self {
        Self::in_dir(&suiteview_home())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(prefix: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{prefix}_{}", std::process::id()));
        fs::create_dir_all(&path).expect("create temp dir");
        path
    }

    #[test]
    fn test_defaults_match_launcher_layout() {
        let config = LauncherConfig::default();
        assert_eq!((config.default_width, config.default_height), (300, 75));
        assert_eq!((config.min_width, config.min_height), (160, 60));
        assert_eq!(config.resize_margin, 8);
        assert_eq!((config.right_margin, config.bottom_margin), (20, 60));
    }

    #[test]
    fn test_partial_file_overrides_named_keys_only() {
        let dir = temp_dir("launcher_config_partial");
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, r#"{ "resizeMargin": 12, "notifyOnHide": false }"#).unwrap();

        let config = LauncherConfig::load_or_default(&path);
        assert_eq!(config.resize_margin, 12);
        assert!(!config.notify_on_hide);
        assert_eq!(config.default_width, 300);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = temp_dir("launcher_config_malformed");
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        assert!(LauncherConfig::try_load(&path).is_err());
        assert_eq!(LauncherConfig::load_or_default(&path), LauncherConfig::default());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("launcher_config_does_not_exist.json");
        assert_eq!(LauncherConfig::load_or_default(&path), LauncherConfig::default());
    }

    #[test]
    fn test_default_size_never_below_minimum() {
        let dir = temp_dir("launcher_config_sanitize");
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, r#"{ "minWidth": 400, "defaultWidth": 300 }"#).unwrap();

        let config = LauncherConfig::load_or_default(&path);
        assert_eq!(config.default_width, 400);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_storage_paths_share_directory() {
        let paths = StoragePaths::in_dir(Path::new("/tmp/sv"));
        assert_eq!(paths.geometry, Path::new("/tmp/sv/launcher_geometry.json"));
        assert_eq!(paths.bookmarks, Path::new("/tmp/sv/bookmarks.json"));
        assert_eq!(paths.config, Path::new("/tmp/sv/launcher_config.json"));
    }
}
