//! Best-effort persistence of the launcher geometry.
//!
//! The record is a small JSON object `{ "geometry": { x, y, width, height } }`.
//! `load` and `save` never fail towards the caller: a missing or unreadable
//! record means "use the default placement", and a failed write is logged.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LauncherError, LauncherResult};
use crate::geometry::{SizeLimits, WindowGeometry};

#[derive(Debug, Serialize, Deserialize)]
struct GeometryRecord {
    geometry: WindowGeometry,
}

/// Reads and writes the launcher geometry record at a fixed path.
#[derive(Debug, Clone)]
pub struct GeometryStore {
    path: PathBuf,
    limits: SizeLimits,
}

impl GeometryStore {
    pub fn new(path: impl Into<PathBuf>, limits: SizeLimits) -> Self {
        Self {
            path: path.into(),
            limits,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored geometry, or `None` if absent or invalid.
    pub fn load(&self) -> Option<WindowGeometry> {
        if !self.path.exists() {
            log::debug!("[GEOMETRY] No record at {}", self.path.display());
            return None;
        }
        match self.try_load() {
            Ok(geometry) => Some(geometry),
            Err(e) => {
                log::warn!(
                    "[GEOMETRY] Ignoring record at {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    /// Persist `geometry`, logging and swallowing any failure.
    pub fn save(&self, geometry: &WindowGeometry) {
        match self.try_save(geometry) {
            Ok(()) => log::debug!("[GEOMETRY] Saved {:?}", geometry),
            Err(e) => log::warn!(
                "[GEOMETRY] Failed to save to {}: {}",
                self.path.display(),
                e
            ),
        }
    }

    pub fn try_load(&self) -> LauncherResult<WindowGeometry> {
        let raw = fs::read_to_string(&self.path)?;
        let record: GeometryRecord = serde_json::from_str(&raw)?;

        if !record.geometry.satisfies(self.limits) {
            return Err(LauncherError::Other(format!(
                "stored size {}x{} is below the {}x{} minimum",
                record.geometry.width,
                record.geometry.height,
                self.limits.min_width,
                self.limits.min_height
            )));
        }

        Ok(record.geometry)
    }

    pub fn try_save(&self, geometry: &WindowGeometry) -> LauncherResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&GeometryRecord {
            geometry: *geometry,
        })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: SizeLimits = SizeLimits {
        min_width: 160,
        min_height: 60,
    };

    fn temp_dir(prefix: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!("{prefix}_{}_{}", std::process::id(), nanos))
    }

    #[test]
    fn test_round_trip() {
        let dir = temp_dir("geometry_round_trip");
        let store = GeometryStore::new(dir.join("launcher_geometry.json"), LIMITS);

        for g in [
            WindowGeometry::new(1600, 945, 300, 75),
            WindowGeometry::new(-1200, 10, 160, 60),
            WindowGeometry::new(0, 0, 1024, 768),
        ] {
            store.save(&g);
            assert_eq!(store.load(), Some(g));
        }

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_save_creates_missing_parents() {
        let dir = temp_dir("geometry_parents");
        let store = GeometryStore::new(dir.join("nested").join("deeper").join("g.json"), LIMITS);
        store
            .try_save(&WindowGeometry::new(1, 2, 300, 75))
            .expect("save into fresh directories");
        assert!(store.path().exists());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_record_format() {
        let dir = temp_dir("geometry_format");
        let store = GeometryStore::new(dir.join("g.json"), LIMITS);
        store.save(&WindowGeometry::new(10, 20, 300, 75));

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["geometry"]["x"], 10);
        assert_eq!(value["geometry"]["y"], 20);
        assert_eq!(value["geometry"]["width"], 300);
        assert_eq!(value["geometry"]["height"], 75);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_missing_record_is_absent() {
        let store = GeometryStore::new(temp_dir("geometry_missing").join("g.json"), LIMITS);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_malformed_record_is_absent() {
        let dir = temp_dir("geometry_malformed");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("g.json");
        let store = GeometryStore::new(&path, LIMITS);

        fs::write(&path, "not json at all").unwrap();
        assert_eq!(store.load(), None);

        fs::write(&path, r#"{ "geometry": { "x": 1, "y": 2 } }"#).unwrap();
        assert_eq!(store.load(), None);

        fs::write(&path, r#"{ "x": 1, "y": 2, "width": 300, "height": 75 }"#).unwrap();
        assert_eq!(store.load(), None);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_undersized_record_is_absent() {
        let dir = temp_dir("geometry_undersized");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("g.json");
        fs::write(
            &path,
            r#"{ "geometry": { "x": 1, "y": 2, "width": 20, "height": 75 } }"#,
        )
        .unwrap();

        let store = GeometryStore::new(&path, LIMITS);
        assert!(store.try_load().is_err());
        assert_eq!(store.load(), None);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let dir = temp_dir("geometry_blocked");
        fs::create_dir_all(&dir).unwrap();
        // A regular file where the parent directory should be
        let blocker = dir.join("blocker");
        fs::write(&blocker, "").unwrap();

        let store = GeometryStore::new(blocker.join("g.json"), LIMITS);
        assert!(store.try_save(&WindowGeometry::new(0, 0, 300, 75)).is_err());
        store.save(&WindowGeometry::new(0, 0, 300, 75));
        assert_eq!(store.load(), None);

        let _ = fs::remove_dir_all(dir);
    }
}
