//! Duration probing via ffprobe.

use std::path::Path;
use std::process::Command;

use serde::Deserialize;

use super::{VideoError, VideoResult};

#[derive(Debug, Default, Deserialize)]
struct ProbeFormat {
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    format: ProbeFormat,
}

/// Query the container duration in whole seconds, rounded down.
///
/// Some containers report no duration (`N/A`); that surfaces as
/// [`VideoError::MissingDuration`] so the caller can fall back to a
/// configured length.
pub fn probe_duration_secs(video: &Path) -> VideoResult<i64> {
    if !video.exists() {
        return Err(VideoError::FileNotFound(video.to_path_buf()));
    }

    let mut cmd = Command::new("ffprobe");
    cmd.arg("-v")
        .arg("error")
        .arg("-show_format")
        .arg("-of")
        .arg("json")
        .arg(video);

    tracing::debug!("Running ffprobe: {:?}", cmd);

    let output = cmd.output().map_err(|source| VideoError::Launch {
        tool: "ffprobe",
        source,
    })?;

    if !output.status.success() {
        tracing::warn!(
            "ffprobe stderr: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return Err(VideoError::Failed {
            tool: "ffprobe",
            code: output.status.code().unwrap_or(-1),
        });
    }

    parse_duration(&output.stdout, video)
}

fn parse_duration(stdout: &[u8], video: &Path) -> VideoResult<i64> {
    let probe: ProbeOutput = serde_json::from_slice(stdout)?;

    let duration = probe
        .format
        .duration
        .ok_or_else(|| VideoError::MissingDuration(video.to_path_buf()))?;

    let secs = duration
        .trim()
        .parse::<f64>()
        .map_err(|_| VideoError::MissingDuration(video.to_path_buf()))?;

    Ok(secs.floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let result = probe_duration_secs(Path::new("/nonexistent/video.mkv"));
        assert!(matches!(result, Err(VideoError::FileNotFound(_))));
    }

    #[test]
    fn duration_parses_and_floors() {
        let json = br#"{"format": {"filename": "a.mp4", "duration": "5025.970000"}}"#;
        let secs = parse_duration(json, Path::new("a.mp4")).unwrap();
        assert_eq!(secs, 5025);
    }

    #[test]
    fn missing_duration_field_is_an_error() {
        let json = br#"{"format": {"filename": "a.mp4"}}"#;
        let result = parse_duration(json, Path::new("a.mp4"));
        assert!(matches!(result, Err(VideoError::MissingDuration(_))));
    }

    #[test]
    fn non_numeric_duration_is_an_error() {
        let json = br#"{"format": {"duration": "N/A"}}"#;
        let result = parse_duration(json, Path::new("a.mp4"));
        assert!(matches!(result, Err(VideoError::MissingDuration(_))));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let result = parse_duration(b"garbage", Path::new("a.mp4"));
        assert!(matches!(result, Err(VideoError::ProbeParse(_))));
    }
}
