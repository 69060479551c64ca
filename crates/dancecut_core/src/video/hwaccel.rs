//! Hardware decode discovery for snapshot extraction.
//!
//! Cutting is always a stream copy and never decodes, so only the decoder
//! side matters here.

use std::process::Command;

/// Hardware decode selection for snapshot extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeAccel {
    /// Software decoding only.
    #[default]
    None,
    /// Let ffmpeg pick whatever hwaccel is available.
    Auto,
    /// NVDEC H.264 decoder.
    H264Cuvid,
}

impl DecodeAccel {
    /// ffmpeg input arguments selecting the decoder.
    pub fn input_args(self) -> &'static [&'static str] {
        match self {
            DecodeAccel::None => &[],
            DecodeAccel::Auto => &["-hwaccel", "auto"],
            DecodeAccel::H264Cuvid => &["-c:v", "h264_cuvid"],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DecodeAccel::None => "none",
            DecodeAccel::Auto => "auto",
            DecodeAccel::H264Cuvid => "h264_cuvid",
        }
    }
}

/// Ask ffmpeg which H.264 decoder is available.
///
/// Scans `ffmpeg -codecs` for the h264 codec line: an advertised
/// `h264_cuvid` decoder wins, otherwise a generic `-hwaccel auto` is used.
/// Any probe failure falls back to software decoding.
pub fn detect_decode_accel() -> DecodeAccel {
    let output = match Command::new("ffmpeg")
        .args(["-loglevel", "error", "-hide_banner", "-codecs"])
        .output()
    {
        Ok(output) => output,
        Err(err) => {
            tracing::warn!("could not run ffmpeg -codecs: {err}");
            return DecodeAccel::None;
        }
    };

    if !output.status.success() {
        tracing::warn!(
            "ffmpeg -codecs exited with code {}",
            output.status.code().unwrap_or(-1)
        );
        return DecodeAccel::None;
    }

    let accel = parse_codec_listing(&String::from_utf8_lossy(&output.stdout));
    tracing::info!("h264 decode acceleration: {}", accel.name());
    accel
}

fn parse_codec_listing(listing: &str) -> DecodeAccel {
    for line in listing.lines() {
        if line.contains("DEV.LS h264") {
            if line.contains("h264_cuvid") {
                return DecodeAccel::H264Cuvid;
            }
            return DecodeAccel::Auto;
        }
    }
    DecodeAccel::None
}
