//! DanceCut - Command-line split-screen scanner
//!
//! Scans dance videos for frames where three copies of the routine sit
//! side by side, then losslessly cuts the passages around those markers
//! into their own files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dancecut_core::config::Settings;
use dancecut_core::scanner::{ScanOutcome, VideoScanner};
use dancecut_core::video::{detect_decode_accel, DecodeAccel};

#[derive(Parser, Debug)]
#[command(name = "dancecut", version, about)]
struct Args {
    /// Video file or glob pattern to scan.
    pattern: String,

    /// Path to the settings file.
    #[arg(long, default_value = "settings.toml")]
    config: PathBuf,
}

fn main() -> ExitCode {
    // Set up logging
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let settings = match Settings::load_or_default(&args.config) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("failed to load {}: {err}", args.config.display());
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("settings: {settings:?}");

    let accel = if settings.video.enable_hwaccel {
        detect_decode_accel()
    } else {
        DecodeAccel::None
    };

    let entries = match glob::glob(&args.pattern) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::error!("bad pattern {:?}: {err}", args.pattern);
            return ExitCode::FAILURE;
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => files.push(path),
            Err(err) => tracing::warn!("skipping unreadable path: {err}"),
        }
    }
    if files.is_empty() {
        tracing::error!("no files match {:?}", args.pattern);
        return ExitCode::FAILURE;
    }

    let scanner = VideoScanner::new(settings, accel);
    let mut failures = 0u32;
    for video in &files {
        tracing::info!("scanning {}", video.display());
        match scanner.scan(video) {
            Ok(ScanOutcome::Completed { ranges }) => {
                tracing::info!("cut {} segment(s) from {}", ranges.len(), video.display());
            }
            Ok(ScanOutcome::Skipped(reason)) => {
                tracing::info!("skipping {}: {reason}", video.display());
            }
            Err(err) => {
                tracing::error!("failed on {}: {err}", video.display());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
