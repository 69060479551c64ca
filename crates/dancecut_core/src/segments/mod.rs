//! From marker indices to cut ranges.
//!
//! The scan of one video leaves an ordered list of sample indices whose
//! frames carried the marker. This module groups them into runs, pads each
//! run with the configured margins, and merges what overlaps.

mod mapper;
mod types;

pub use mapper::{group_runs, map_to_cut_ranges, merge_ranges};
pub use types::{format_timestamp, CutRange, SampleRun};
