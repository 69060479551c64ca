//! Per-video scan pipeline.
//!
//! Probe, gate, sample, classify, map, cut. A video that cannot or should
//! not be cut is a [`ScanOutcome::Skipped`] with a reason; subprocess and
//! I/O failures are errors.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::detect::is_split_in_three;
use crate::segments::{map_to_cut_ranges, CutRange};
use crate::video::{
    cut_ranges, extract_snapshots, list_snapshots, probe_duration_secs, DecodeAccel, VideoError,
    VideoResult,
};

/// Shortest duration the scanner accepts, in seconds.
const MIN_DURATION_SECS: i64 = 600;

/// Result of scanning a single video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The video was cut into the listed ranges.
    Completed { ranges: Vec<CutRange> },
    /// The video was left untouched.
    Skipped(SkipReason),
}

/// Why a video was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No duration could be determined, probed or configured.
    InvalidDuration,
    /// The video is shorter than the scan minimum.
    TooShort { duration_secs: i64 },
    /// None of the sampled frames carried the split-screen marker.
    NoMarkerFrames,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InvalidDuration => write!(f, "no usable duration"),
            SkipReason::TooShort { duration_secs } => {
                write!(f, "too short to scan ({duration_secs}s)")
            }
            SkipReason::NoMarkerFrames => write!(f, "no split-screen markers found"),
        }
    }
}

/// Runs the full detect-and-cut pipeline over individual videos.
pub struct VideoScanner {
    settings: Settings,
    accel: DecodeAccel,
}

impl VideoScanner {
    pub fn new(settings: Settings, accel: DecodeAccel) -> Self {
        Self { settings, accel }
    }

    /// Scan `video` for split-screen markers and cut it along the detected
    /// boundaries.
    pub fn scan(&self, video: &Path) -> VideoResult<ScanOutcome> {
        if !video.exists() {
            return Err(VideoError::FileNotFound(video.to_path_buf()));
        }

        let Some(duration_secs) = self.probe_duration(video) else {
            return Ok(ScanOutcome::Skipped(SkipReason::InvalidDuration));
        };

        let interval_secs = self.settings.sampling.interval_secs;
        if duration_secs < interval_secs || duration_secs < MIN_DURATION_SECS {
            return Ok(ScanOutcome::Skipped(SkipReason::TooShort { duration_secs }));
        }

        let snapshot_folder = PathBuf::from(&self.settings.sampling.snapshot_folder);
        let extension = &self.settings.sampling.snapshot_extension;
        extract_snapshots(video, &snapshot_folder, interval_secs, extension, self.accel)?;
        let snapshots = list_snapshots(&snapshot_folder, extension)?;
        let total_samples = snapshots.len() as u32;

        let mut marker_indices = Vec::new();
        for snapshot in &snapshots {
            let frame = image::open(&snapshot.path).map_err(|source| VideoError::Decode {
                path: snapshot.path.clone(),
                source,
            })?;
            let split = is_split_in_three(
                &frame,
                self.settings.detection.column_margin,
                self.settings.detection.similarity_tolerance,
            );
            if split {
                marker_indices.push(snapshot.index);
            }
        }

        if marker_indices.is_empty() {
            fs::remove_dir_all(&snapshot_folder)?;
            return Ok(ScanOutcome::Skipped(SkipReason::NoMarkerFrames));
        }
        tracing::info!(
            "{} of {} samples carry the marker",
            marker_indices.len(),
            total_samples
        );

        let ranges = map_to_cut_ranges(
            &marker_indices,
            total_samples,
            interval_secs,
            &self.settings.trim,
        );
        for range in &ranges {
            tracing::info!("segment {range}");
        }

        cut_ranges(
            video,
            &ranges,
            &snapshot_folder,
            self.settings.sampling.keep_snapshots,
        )?;
        Ok(ScanOutcome::Completed { ranges })
    }

    /// Duration in seconds, probed from the file or taken from the manual
    /// override when probing fails.
    fn probe_duration(&self, video: &Path) -> Option<i64> {
        match probe_duration_secs(video) {
            Ok(duration_secs) => Some(duration_secs),
            Err(err) => {
                let manual = self.settings.video.manual_duration_secs;
                if manual > 0 {
                    tracing::warn!("duration probe failed ({err}), using configured {manual}s");
                    Some(manual)
                } else {
                    tracing::warn!("duration probe failed ({err})");
                    None
                }
            }
        }
    }
}
