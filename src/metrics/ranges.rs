//! Blocked range normalization
//!
//! Merges overlapping or adjacent blocked ranges so no day is counted twice.

use log::debug;

use super::{DateRange, DateSpan, NormalizedBlockedSet};

/// Normalizes caller-supplied blocked ranges
///
/// Invalid ranges (missing endpoint, or end before start) are dropped. The
/// rest are sorted by start date and merged left to right: a range merges
/// into the current one when it starts on or before the day after the
/// current one ends. Ranges ending on day N and starting on day N+1 are one
/// continuous blockage.
///
/// # Arguments
/// * `ranges` - Blocked ranges in any order, possibly overlapping
///
/// # Returns
/// Sorted, disjoint, non-adjacent spans
pub fn normalize_blocked_ranges(ranges: &[DateRange]) -> NormalizedBlockedSet {
    let mut valid: Vec<DateSpan> = ranges.iter().filter_map(DateRange::span).collect();

    let dropped = ranges.len() - valid.len();
    if dropped > 0 {
        debug!("Dropped {} invalid blocked range(s)", dropped);
    }

    valid.sort_unstable_by_key(DateSpan::start);

    let mut merged: Vec<DateSpan> = Vec::with_capacity(valid.len());

    for candidate in valid {
        match merged.last_mut() {
            // start stays: sort order guarantees current.start <= candidate.start
            Some(current) if current.touches(&candidate) => current.extend_to(candidate.end()),
            _ => merged.push(candidate),
        }
    }

    NormalizedBlockedSet::from_sorted_disjoint(merged)
}
