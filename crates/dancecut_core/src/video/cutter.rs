//! Lossless cutting of the final ranges.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::segments::CutRange;

use super::{run_ffmpeg, VideoResult};

/// Cut every range out of `video` into a `<stem>_cut` folder in the working
/// directory.
///
/// The snapshot folder is consumed first: moved into the output folder when
/// `keep_snapshots` is set, deleted otherwise. A manifest (`a.txt`) with one
/// `start,end` line per range is written alongside the clips, then a single
/// ffmpeg invocation stream-copies all of them.
pub fn cut_ranges(
    video: &Path,
    ranges: &[CutRange],
    snapshot_folder: &Path,
    keep_snapshots: bool,
) -> VideoResult<()> {
    let stem = file_stem(video);
    let out_dir = PathBuf::from(format!("{stem}_cut"));
    fs::create_dir_all(&out_dir)?;

    write_manifest(&out_dir.join("a.txt"), ranges)?;

    if keep_snapshots {
        let target = out_dir.join(
            snapshot_folder
                .file_name()
                .unwrap_or(snapshot_folder.as_os_str()),
        );
        fs::rename(snapshot_folder, target)?;
    } else {
        fs::remove_dir_all(snapshot_folder)?;
    }

    let cmd = build_cut_command(video, &out_dir, &stem, ranges);
    tracing::debug!("Running ffmpeg: {:?}", cmd);
    run_ffmpeg(cmd)
}

fn file_stem(video: &Path) -> String {
    video
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_extension(video: &Path) -> String {
    match video.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy()),
        None => String::new(),
    }
}

fn write_manifest(path: &Path, ranges: &[CutRange]) -> VideoResult<()> {
    let mut manifest = BufWriter::new(File::create(path)?);
    for range in ranges {
        writeln!(
            manifest,
            "{},{}",
            range.start_timestamp(),
            range.end_timestamp()
        )?;
    }
    manifest.flush()?;
    Ok(())
}

fn build_cut_command(video: &Path, out_dir: &Path, stem: &str, ranges: &[CutRange]) -> Command {
    let extension = file_extension(video);

    let mut cmd = Command::new("ffmpeg");
    cmd.arg("-stats")
        .arg("-loglevel")
        .arg("error")
        .arg("-hide_banner")
        .arg("-y")
        .arg("-i")
        .arg(video);

    for (ordinal, range) in ranges.iter().enumerate() {
        let start = range.start_timestamp();
        if !start.is_empty() {
            cmd.arg("-ss").arg(start);
        }
        let end = range.end_timestamp();
        if !end.is_empty() {
            cmd.arg("-to").arg(end);
        }
        cmd.arg("-c")
            .arg("copy")
            .arg(out_dir.join(format!("{stem}_cut_{ordinal:02}{extension}")));
    }

    cmd
}
