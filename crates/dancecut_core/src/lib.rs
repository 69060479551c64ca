//! DanceCut Core - Split-screen marker detection and lossless clip trimming
//!
//! This crate contains all scanning logic with zero CLI dependencies:
//! settings, frame classification, index-to-range mapping, and the
//! FFmpeg-backed probe/snapshot/cut steps.

pub mod config;
pub mod detect;
pub mod scanner;
pub mod segments;
pub mod video;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
