// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ISO-week calendar primitives: 53-week year detection and week-53 interval enumeration.
//!
//! Everything here is built directly on [`crate::calendar::ISO`]'s own leap-week rule
//! (Jan 1 or Dec 31 falling on a Thursday) and on [`Fixed`] arithmetic; there is no
//! separate notion of "week 53" beyond what `ISO` already reports.

use crate::calendar::prelude::HasLeapYears;
use crate::calendar::ISO;
use crate::day_count::Fixed;
use crate::day_count::FromFixed;
use crate::day_count::ToFixed;
use crate::day_cycle::Weekday;

/// Number of ISO weeks in the Gregorian year `year`: 52, or 53 when Jan 1 or Dec 31 of
/// that year falls on a Thursday.
pub fn iso_year_length(year: i32) -> u8 {
    if ISO::is_leap(year) {
        53
    } else {
        52
    }
}

/// The `[start, end)` range of ISO week 53 for `year`, or `None` if `year` has no week 53.
fn week_53_range(year: i32) -> Option<(Fixed, Fixed)> {
    if !ISO::is_leap(year) {
        return None;
    }
    let start = ISO::try_new(year, 53, Weekday::Monday)
        .expect("year known to have a week 53")
        .to_fixed();
    let end = ISO::new_year(year + 1).to_fixed();
    Some((start, end))
}

/// `true` when the half-open interval `[start, end)` intersects any ISO week-53 range.
///
/// The overlap test is inclusive of a zero-length touch at the left boundary but
/// exclusive at the right, so a range ending exactly where week 53 begins does not
/// count as touching it.
pub fn period_contains_week_53(start: Fixed, end: Fixed) -> bool {
    !find_all_week_53_periods(start, end).is_empty()
}

/// Enumerates the ISO week-53 sub-ranges touched by `[start, end)`, each clipped to that
/// range. Returned pairs are chronologically ordered and pairwise disjoint.
pub fn find_all_week_53_periods(start: Fixed, end: Fixed) -> Vec<(Fixed, Fixed)> {
    let first_year = ISO::from_fixed(start).year();
    let last_year = ISO::from_fixed(end).year();
    let mut result = Vec::new();
    for year in (first_year - 1)..=(last_year + 1) {
        if let Some((w_start, w_end)) = week_53_range(year) {
            let clipped_start = if w_start > start { w_start } else { start };
            let clipped_end = if w_end < end { w_end } else { end };
            if clipped_start < clipped_end {
                result.push((clipped_start, clipped_end));
            }
        }
    }
    result
}
