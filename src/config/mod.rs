//! Session configuration.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```rust
//! use trajectory_capture::config::CaptureConfig;
//!
//! let config = CaptureConfig::from_json_str(r#"{ "trajectory_points": 16 }"#).unwrap();
//! assert_eq!(config.trajectory_points, 16);
//! assert_eq!(config.marker_radius, 20.0);
//! ```

pub mod error;
pub mod validation;

pub use error::{ConfigError, ConfigViolation};
pub use validation::{validate, violations};

use crate::core::{Extent, DEFAULT_HISTORY_CAPACITY, DEFAULT_TRAJECTORY_POINTS};
use crate::ledger::{DatasetFile, DEFAULT_DATASET_PATH};
use crate::session::PlacementPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default hit radius of the origin and target markers, in pixels.
pub const DEFAULT_MARKER_RADIUS: f64 = 20.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Canvas size; the origin rests at its center.
    pub canvas: Extent,
    /// Hit radius of both markers.
    pub marker_radius: f64,
    /// Points per resampled trajectory. Fixed for a whole dataset.
    pub trajectory_points: usize,
    pub placement: PlacementPolicy,
    /// JSONL file exports append to.
    pub dataset_path: PathBuf,
    /// `tracing` filter directive used when attaching a log buffer.
    pub log_filter: String,
    /// Most recent phase transitions kept for diagnostics; 0 keeps none.
    pub history_capacity: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            canvas: Extent::default(),
            marker_radius: DEFAULT_MARKER_RADIUS,
            trajectory_points: DEFAULT_TRAJECTORY_POINTS,
            placement: PlacementPolicy::default(),
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            log_filter: "info".to_string(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl CaptureConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Return `self` if every rule holds, otherwise all violations.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let found = violations(&self);
        if found.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Invalid(found))
        }
    }

    pub fn dataset_file(&self) -> DatasetFile {
        DatasetFile::new(&self.dataset_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_collector() {
        let config = CaptureConfig::default();
        assert_eq!(config.canvas, Extent::new(800.0, 600.0));
        assert_eq!(config.marker_radius, 20.0);
        assert_eq!(config.trajectory_points, 10);
        assert_eq!(config.placement.near_probability, 0.7);
        assert_eq!(config.placement.margin, 50.0);
        assert_eq!(config.dataset_path, PathBuf::from("mouse_dataset.jsonl"));
        assert_eq!(config.history_capacity, 1024);
    }

    #[test]
    fn partial_documents_fill_defaults() {
        let config = CaptureConfig::from_json_str(
            r#"{ "canvas": { "width": 1000, "height": 700 }, "placement": { "margin": 40 } }"#,
        )
        .unwrap();
        assert_eq!(config.canvas, Extent::new(1000.0, 700.0));
        assert_eq!(config.placement.margin, 40.0);
        assert_eq!(config.placement.near_radius_max, 150.0);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn invalid_documents_report_violations() {
        let err = CaptureConfig::from_json_str(r#"{ "trajectory_points": 0, "marker_radius": -1 }"#)
            .unwrap_err();
        match err {
            ConfigError::Invalid(found) => assert_eq!(found.len(), 2),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            CaptureConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.json");
        std::fs::write(&path, r#"{ "trajectory_points": 12 }"#).unwrap();

        let config = CaptureConfig::from_path(&path).unwrap();
        assert_eq!(config.trajectory_points, 12);
        assert!(matches!(
            CaptureConfig::from_path(dir.path().join("missing.json")),
            Err(ConfigError::Io(_))
        ));
    }
}
