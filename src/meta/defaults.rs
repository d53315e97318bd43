//! Fixed default values and date derivation for generated documents.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed Esri document defaults. Overridable per deployment through the
/// config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EsriDefaults {
    pub toolbox_format_name: String,
    pub tool_format_name: String,
    pub arcgis_format: String,
    pub sync_once: String,
    pub min_scale: String,
    pub max_scale: String,
    pub arcgis_profile: String,
    /// Help resources path; left empty when unset.
    pub help_path: Option<String>,
}

impl Default for EsriDefaults {
    fn default() -> Self {
        Self {
            toolbox_format_name: "ArcToolbox Toolbox".to_string(),
            tool_format_name: "ArcToolbox Tool".to_string(),
            arcgis_format: "1.0".to_string(),
            sync_once: "TRUE".to_string(),
            min_scale: "150000000".to_string(),
            max_scale: "5000".to_string(),
            arcgis_profile: "ItemDescription".to_string(),
            help_path: None,
        }
    }
}

/// strftime patterns for the date/time tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormats {
    pub date_format: String,
    pub time_format: String,
}

impl Default for DateFormats {
    fn default() -> Self {
        Self {
            date_format: "%Y%m%d".to_string(),
            // HHMMSShh with a fixed zero hundredths component.
            time_format: "%H%M%S00".to_string(),
        }
    }
}

/// Configured contact fallbacks used when no portal profile is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDefaults {
    pub name: Option<String>,
    pub organization: Option<String>,
    pub email: Option<String>,
}

/// Formatted created/modified/current timestamps for a source file, UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDates {
    pub create_date: String,
    pub create_time: String,
    pub mod_date: String,
    pub mod_time: String,
    pub current_date: String,
    pub current_time: String,
}

impl FileDates {
    /// Derive dates from the file's metadata. Timestamps the filesystem
    /// cannot provide fall back to the current time.
    pub fn for_path(path: &Path, formats: &DateFormats) -> Self {
        let now = Utc::now();
        let metadata = fs::metadata(path).ok();
        let created = metadata
            .as_ref()
            .and_then(|m| m.created().ok())
            .map(to_utc)
            .unwrap_or(now);
        let modified = metadata
            .as_ref()
            .and_then(|m| m.modified().ok())
            .map(to_utc)
            .unwrap_or(now);

        Self {
            create_date: created.format(&formats.date_format).to_string(),
            create_time: created.format(&formats.time_format).to_string(),
            mod_date: modified.format(&formats.date_format).to_string(),
            mod_time: modified.format(&formats.time_format).to_string(),
            current_date: now.format(&formats.date_format).to_string(),
            current_time: now.format(&formats.time_format).to_string(),
        }
    }
}

fn to_utc(time: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(time)
}
