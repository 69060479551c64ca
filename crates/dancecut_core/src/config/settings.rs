//! Settings struct with TOML-based sections.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ConfigResult;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Snapshot sampling settings.
    #[serde(default)]
    pub sampling: SamplingSettings,

    /// Marker detection thresholds.
    #[serde(default)]
    pub detection: DetectionSettings,

    /// Margins applied around detected segments.
    #[serde(default)]
    pub trim: TrimSettings,

    /// Source video handling.
    #[serde(default)]
    pub video: VideoSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sampling: SamplingSettings::default(),
            detection: DetectionSettings::default(),
            trim: TrimSettings::default(),
            video: VideoSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or write and return the defaults when the
    /// file does not exist yet.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let settings = toml::from_str(&content)?;
            tracing::debug!("loaded settings from {}", path.display());
            Ok(settings)
        } else {
            let settings = Settings::default();
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, toml::to_string_pretty(&settings)?)?;
            tracing::info!("wrote default settings to {}", path.display());
            Ok(settings)
        }
    }
}

/// Periodic snapshot extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingSettings {
    /// Seconds between snapshots.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: i64,

    /// Folder the snapshots are written into.
    #[serde(default = "default_snapshot_folder")]
    pub snapshot_folder: String,

    /// Image format for snapshots.
    #[serde(default = "default_snapshot_extension")]
    pub snapshot_extension: String,

    /// Keep the snapshots next to the cut clips instead of deleting them.
    #[serde(default = "default_true")]
    pub keep_snapshots: bool,
}

fn default_interval_secs() -> i64 {
    30
}

fn default_snapshot_folder() -> String {
    "snapshots".to_string()
}

fn default_snapshot_extension() -> String {
    "jpg".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            snapshot_folder: default_snapshot_folder(),
            snapshot_extension: default_snapshot_extension(),
            keep_snapshots: true,
        }
    }
}

/// Split-layout detection thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionSettings {
    /// Mean-squared-difference tolerance for two columns to count as equal.
    #[serde(default = "default_similarity_tolerance")]
    pub similarity_tolerance: f64,

    /// Pixels trimmed from each side of the inner column boundaries.
    #[serde(default = "default_column_margin")]
    pub column_margin: u32,
}

fn default_similarity_tolerance() -> f64 {
    15.0
}

fn default_column_margin() -> u32 {
    2
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            similarity_tolerance: default_similarity_tolerance(),
            column_margin: default_column_margin(),
        }
    }
}

/// Margins applied when turning marker runs into cut ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrimSettings {
    /// Constant shift applied to every computed cut point.
    #[serde(default)]
    pub offset_secs: i64,

    /// Seconds kept before the first marker of a run.
    #[serde(default = "default_margin_before")]
    pub margin_before_secs: i64,

    /// Seconds kept after the last marker of a run.
    #[serde(default = "default_margin_after")]
    pub margin_after_secs: i64,
}

fn default_margin_before() -> i64 {
    60
}

fn default_margin_after() -> i64 {
    30
}

impl Default for TrimSettings {
    fn default() -> Self {
        Self {
            offset_secs: 0,
            margin_before_secs: default_margin_before(),
            margin_after_secs: default_margin_after(),
        }
    }
}

/// Source video handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSettings {
    /// Probe ffmpeg for an H.264 hardware decoder before sampling.
    #[serde(default)]
    pub enable_hwaccel: bool,

    /// Duration to assume when ffprobe cannot report one; 0 disables the
    /// fallback.
    #[serde(default)]
    pub manual_duration_secs: i64,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            enable_hwaccel: false,
            manual_duration_secs: 0,
        }
    }
}
