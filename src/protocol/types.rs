//! Payload types carried by inbound messages.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A connected hardware device as reported by the background process.
///
/// Only `path` is required; everything else the background process attaches
/// (vendor id, product name, ...) rides along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// OS-level device path, unique per connected device.
    pub path: String,

    /// Remaining device fields, preserved but not inspected here.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl DeviceRecord {
    /// Build a record with just a path. Test and doc convenience.
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Metadata for an available application update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateInfo {
    /// Version string of the available release.
    #[serde(default)]
    pub version: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Error details reported by the auto-updater.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateError {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Download progress reported by the auto-updater.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadProgress {
    /// Completion percentage, 0-100.
    #[serde(default)]
    pub percent: Option<f64>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_device_record_requires_path() {
        let ok: Result<DeviceRecord, _> = serde_json::from_value(json!({"path": "p1"}));
        assert!(ok.is_ok());

        let missing: Result<DeviceRecord, _> = serde_json::from_value(json!({"vendor": 0x2c97}));
        assert!(missing.is_err());
    }

    #[test]
    fn test_device_record_preserves_extra_fields() {
        let record: DeviceRecord =
            serde_json::from_value(json!({"path": "p1", "vendor": 11415})).unwrap();
        assert_eq!(record.path, "p1");
        assert_eq!(record.extra["vendor"], 11415);
    }

    #[test]
    fn test_download_progress_percent_optional() {
        let progress: DownloadProgress = serde_json::from_value(json!({})).unwrap();
        assert!(progress.percent.is_none());

        let progress: DownloadProgress = serde_json::from_value(json!({"percent": 42})).unwrap();
        assert_eq!(progress.percent, Some(42.0));
    }
}
