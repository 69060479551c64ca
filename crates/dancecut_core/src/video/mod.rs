//! The ffmpeg shell: probing, sampling, and cutting.
//!
//! Everything here shells out to `ffmpeg`/`ffprobe` with
//! `std::process::Command`. Progress output (`-stats`) passes through to the
//! terminal; errors carry the tool name and exit code.

mod cutter;
mod hwaccel;
mod probe;
mod snapshots;

pub use cutter::cut_ranges;
pub use hwaccel::{detect_decode_accel, DecodeAccel};
pub use probe::probe_duration_secs;
pub use snapshots::{extract_snapshots, list_snapshots, Snapshot};

use std::io;
use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

/// Errors from the ffmpeg/ffprobe shell.
#[derive(Error, Debug)]
pub enum VideoError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to launch {tool}: {source}")]
    Launch {
        tool: &'static str,
        source: io::Error,
    },

    #[error("{tool} exited with code {code}")]
    Failed { tool: &'static str, code: i32 },

    #[error("no usable duration reported for {0}")]
    MissingDuration(PathBuf),

    #[error("snapshot file name is not a sample index: {0}")]
    SnapshotName(PathBuf),

    #[error("failed to decode snapshot {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to parse ffprobe output: {0}")]
    ProbeParse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result type for video operations.
pub type VideoResult<T> = Result<T, VideoError>;

/// Run an ffmpeg command to completion, inheriting stdio.
pub(crate) fn run_ffmpeg(mut cmd: Command) -> VideoResult<()> {
    let status = cmd.status().map_err(|source| VideoError::Launch {
        tool: "ffmpeg",
        source,
    })?;

    if !status.success() {
        return Err(VideoError::Failed {
            tool: "ffmpeg",
            code: status.code().unwrap_or(-1),
        });
    }

    Ok(())
}
