//! Turns marker sample indices into final cut ranges.
//!
//! Three passes: group the sparse index list into contiguous runs, convert
//! each run into a candidate range with the configured margins, then fuse
//! overlapping candidates into disjoint output ranges.

use crate::config::TrimSettings;

use super::types::{CutRange, SampleRun};

/// Group a strictly increasing index list into maximal contiguous runs.
pub fn group_runs(indices: &[u32]) -> Vec<SampleRun> {
    let mut runs: Vec<SampleRun> = Vec::new();
    for &index in indices {
        match runs.last_mut() {
            Some(run) if index == run.end + 1 => run.end = index,
            _ => runs.push(SampleRun {
                start: index,
                end: index,
            }),
        }
    }
    runs
}

/// Convert one run into a candidate cut range.
///
/// A run starting at the first sample starts the cut at zero; a run reaching
/// the last sample leaves the cut open-ended. Negative starts clamp to zero.
fn run_to_range(
    run: SampleRun,
    total_samples: u32,
    interval_secs: i64,
    trim: &TrimSettings,
) -> CutRange {
    let start_secs = if run.start == 1 {
        0
    } else {
        (i64::from(run.start) * interval_secs + trim.offset_secs - trim.margin_before_secs).max(0)
    };

    let end_secs = if run.end >= total_samples {
        None
    } else {
        Some(i64::from(run.end) * interval_secs + trim.offset_secs + trim.margin_after_secs)
    };

    CutRange {
        start_secs,
        end_secs,
    }
}

/// Fuse overlapping or touching candidate ranges, preserving order.
///
/// Only a closed accumulator can absorb the next range, and it takes that
/// range's end even when the end is open. An open-ended accumulator is
/// emitted as-is once the next range starts.
pub fn merge_ranges(ranges: Vec<CutRange>) -> Vec<CutRange> {
    let mut iter = ranges.into_iter();
    let mut current = match iter.next() {
        Some(range) => range,
        None => return Vec::new(),
    };

    let mut merged = Vec::new();
    for range in iter {
        match current.end_secs {
            Some(end) if end >= range.start_secs => current.end_secs = range.end_secs,
            _ => {
                merged.push(current);
                current = range;
            }
        }
    }
    merged.push(current);
    merged
}

/// Map marker indices to the final disjoint cut ranges.
///
/// `indices` must be non-empty and strictly increasing, with values in
/// `[1, total_samples]`. A video with no marker frames is a caller-level
/// skip, decided before this runs.
pub fn map_to_cut_ranges(
    indices: &[u32],
    total_samples: u32,
    interval_secs: i64,
    trim: &TrimSettings,
) -> Vec<CutRange> {
    let candidates = group_runs(indices)
        .into_iter()
        .map(|run| run_to_range(run, total_samples, interval_secs, trim))
        .collect();
    merge_ranges(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trim_defaults() -> TrimSettings {
        TrimSettings {
            offset_secs: 0,
            margin_before_secs: 60,
            margin_after_secs: 30,
        }
    }

    #[test]
    fn groups_contiguous_indices() {
        let runs = group_runs(&[3, 4, 5, 9, 10, 20]);
        assert_eq!(
            runs,
            vec![
                SampleRun { start: 3, end: 5 },
                SampleRun { start: 9, end: 10 },
                SampleRun { start: 20, end: 20 },
            ]
        );
    }

    #[test]
    fn groups_nothing_from_empty_input() {
        assert!(group_runs(&[]).is_empty());
    }

    #[test]
    fn run_at_first_sample_starts_at_zero() {
        let range = run_to_range(SampleRun { start: 1, end: 5 }, 50, 30, &trim_defaults());
        assert_eq!(
            range,
            CutRange {
                start_secs: 0,
                end_secs: Some(180),
            }
        );
    }

    #[test]
    fn run_reaching_last_sample_stays_open() {
        let range = run_to_range(SampleRun { start: 49, end: 50 }, 50, 30, &trim_defaults());
        assert_eq!(
            range,
            CutRange {
                start_secs: 1410,
                end_secs: None,
            }
        );
    }

    #[test]
    fn negative_start_clamps_to_zero() {
        let trim = TrimSettings {
            offset_secs: 0,
            margin_before_secs: 120,
            margin_after_secs: 30,
        };
        let range = run_to_range(SampleRun { start: 2, end: 2 }, 50, 30, &trim);
        assert_eq!(range.start_secs, 0);
    }

    #[test]
    fn offset_shifts_both_endpoints() {
        let trim = TrimSettings {
            offset_secs: 10,
            margin_before_secs: 60,
            margin_after_secs: 30,
        };
        let range = run_to_range(SampleRun { start: 4, end: 6 }, 50, 30, &trim);
        assert_eq!(
            range,
            CutRange {
                start_secs: 70,
                end_secs: Some(220),
            }
        );
    }

    #[test]
    fn merges_overlapping_ranges() {
        let merged = merge_ranges(vec![
            CutRange {
                start_secs: 0,
                end_secs: Some(180),
            },
            CutRange {
                start_secs: 150,
                end_secs: Some(400),
            },
        ]);
        assert_eq!(
            merged,
            vec![CutRange {
                start_secs: 0,
                end_secs: Some(400),
            }]
        );
    }

    #[test]
    fn merges_exactly_touching_ranges() {
        let merged = merge_ranges(vec![
            CutRange {
                start_secs: 0,
                end_secs: Some(180),
            },
            CutRange {
                start_secs: 180,
                end_secs: Some(300),
            },
        ]);
        assert_eq!(
            merged,
            vec![CutRange {
                start_secs: 0,
                end_secs: Some(300),
            }]
        );
    }

    #[test]
    fn keeps_disjoint_ranges_apart() {
        let ranges = vec![
            CutRange {
                start_secs: 0,
                end_secs: Some(180),
            },
            CutRange {
                start_secs: 500,
                end_secs: Some(700),
            },
        ];
        assert_eq!(merge_ranges(ranges.clone()), ranges);
    }

    #[test]
    fn absorbing_an_open_end_opens_the_merged_range() {
        let merged = merge_ranges(vec![
            CutRange {
                start_secs: 0,
                end_secs: Some(180),
            },
            CutRange {
                start_secs: 170,
                end_secs: None,
            },
        ]);
        assert_eq!(
            merged,
            vec![CutRange {
                start_secs: 0,
                end_secs: None,
            }]
        );
    }

    #[test]
    fn open_ended_accumulator_never_absorbs() {
        let ranges = vec![
            CutRange {
                start_secs: 0,
                end_secs: None,
            },
            CutRange {
                start_secs: 100,
                end_secs: Some(200),
            },
        ];
        assert_eq!(merge_ranges(ranges.clone()), ranges);
    }

    #[test]
    fn maps_marker_indices_end_to_end() {
        let ranges = map_to_cut_ranges(&[1, 2, 3, 10, 11], 11, 30, &trim_defaults());
        assert_eq!(
            ranges,
            vec![
                CutRange {
                    start_secs: 0,
                    end_secs: Some(120),
                },
                CutRange {
                    start_secs: 240,
                    end_secs: None,
                },
            ]
        );
    }
}
