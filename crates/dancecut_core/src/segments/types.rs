//! Data types for marker runs and cut ranges.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximal contiguous block of marker-bearing sample indices, inclusive on
/// both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRun {
    /// First sample index in the run.
    pub start: u32,
    /// Last sample index in the run.
    pub end: u32,
}

/// A cut interval on the source timeline, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutRange {
    /// Start of the cut, seconds from the start of the file.
    pub start_secs: i64,
    /// End of the cut; `None` extends to the end of the file.
    pub end_secs: Option<i64>,
}

impl CutRange {
    /// Timestamp for the start position, empty when the cut starts at zero.
    pub fn start_timestamp(&self) -> String {
        if self.start_secs == 0 {
            String::new()
        } else {
            format_timestamp(self.start_secs)
        }
    }

    /// Timestamp for the end position, empty when the cut is open-ended.
    pub fn end_timestamp(&self) -> String {
        match self.end_secs {
            Some(end) => format_timestamp(end),
            None => String::new(),
        }
    }
}

impl fmt::Display for CutRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            format_timestamp(self.start_secs),
            self.end_timestamp()
        )
    }
}

/// Format whole seconds as `H:MM:SS` (hours unpadded).
pub fn format_timestamp(secs: i64) -> String {
    format!("{}:{:02}:{:02}", secs / 3600, secs % 3600 / 60, secs % 60)
}
