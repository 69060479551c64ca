//! Periodic snapshot extraction and listing.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::{run_ffmpeg, DecodeAccel, VideoError, VideoResult};

/// One extracted snapshot on disk.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// 1-based sample index parsed from the file name.
    pub index: u32,
    /// Path to the image file.
    pub path: PathBuf,
}

/// Extract one frame every `interval_secs` from `video` into `folder`.
///
/// Snapshots are named `0001.<ext>`, `0002.<ext>`, ... in sample order. The
/// folder is created if missing and removed again if extraction fails.
pub fn extract_snapshots(
    video: &Path,
    folder: &Path,
    interval_secs: i64,
    extension: &str,
    accel: DecodeAccel,
) -> VideoResult<()> {
    fs::create_dir_all(folder)?;

    let mut cmd = Command::new("ffmpeg");
    cmd.arg("-stats")
        .arg("-loglevel")
        .arg("error")
        .arg("-hide_banner")
        .arg("-y");
    cmd.args(accel.input_args());
    cmd.arg("-i")
        .arg(video)
        .arg("-vf")
        .arg(format!("fps=1/{interval_secs}"))
        .arg(folder.join(format!("%04d.{extension}")));

    tracing::debug!("Running ffmpeg: {:?}", cmd);

    let result = run_ffmpeg(cmd);
    if result.is_err() {
        let _ = fs::remove_dir_all(folder);
    }
    result
}

/// List extracted snapshots sorted by sample index.
///
/// Only files with the snapshot extension count; their stems must parse as
/// indices, anything else in the folder is not ours to interpret.
pub fn list_snapshots(folder: &Path, extension: &str) -> VideoResult<Vec<Snapshot>> {
    let mut snapshots = Vec::new();

    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if path.extension() != Some(OsStr::new(extension)) {
            continue;
        }

        let index = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.parse::<u32>().ok())
            .ok_or_else(|| VideoError::SnapshotName(path.clone()))?;

        snapshots.push(Snapshot { index, path });
    }

    snapshots.sort_by_key(|snapshot| snapshot.index);
    Ok(snapshots)
}
