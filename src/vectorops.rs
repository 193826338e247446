// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The ten pure numeric kernels that convert, periodize, aggregate, disaggregate and
//! repeat time-indexed vectors between ISO-calendar and model-calendar conventions.
//!
//! Shape/dtype/positivity preconditions are `assert!`-class contract violations, not
//! `Result`s, matching the Python source's own `assert` statements (see SPEC_FULL.md
//! §4.3/§7). Only calendar-conversion failures that a caller can reasonably recover
//! from (`IncompatibleResolution`, `OutOfRange`) are `Result`.

use crate::calendar::ISO;
use crate::calendar_primitives::period_contains_week_53;
pub use crate::calendar_primitives::{find_all_week_53_periods, period_contains_week_53 as week53_overlap};
use crate::common::duration::PeriodDuration;
use crate::day_count::BoundedDayCount;
use crate::day_count::Fixed;
use crate::day_count::FromFixed;
use num_traits::Float;
use num_traits::ToPrimitive;
use std::error::Error;
use std::fmt;

/// Element type shared by every vector kernel: either of the two floating-point
/// widths the engine is expected to support (§5: "32- and 64-bit floating element
/// types").
pub trait Real: Float + fmt::Debug {}
impl Real for f32 {}
impl Real for f64 {}

fn f64_of<T: Real>(v: T) -> f64 {
    v.to_f64().expect("Real is always representable as f64")
}

fn t_of<T: Real>(v: f64) -> T {
    num_traits::NumCast::from(v).expect("finite f64 always representable in Real")
}

fn shift(t: Fixed, days: f64) -> Fixed {
    Fixed::new(t.get() + days)
}

#[derive(Debug)]
pub enum TimeVectorError {
    IncompatibleResolution(String),
    OutOfRange(String),
    DuplicateId { id: String, sources: Vec<String> },
    MissingKey(String),
    InvalidConfiguration(String),
}

impl fmt::Display for TimeVectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeVectorError::IncompatibleResolution(msg) => {
                write!(f, "Incompatible resolution: {msg}")
            }
            TimeVectorError::OutOfRange(msg) => write!(f, "Out of range: {msg}"),
            TimeVectorError::DuplicateId { id, sources } => {
                write!(f, "Duplicate id '{id}' found in sources {sources:?}")
            }
            TimeVectorError::MissingKey(key) => write!(f, "Missing key '{key}'"),
            TimeVectorError::InvalidConfiguration(msg) => {
                write!(f, "Invalid configuration: {msg}")
            }
        }
    }
}

impl Error for TimeVectorError {}

/// `out[i] = fold(in[i*k .. (i+1)*k])`, `fold` = sum when `sum_not_mean`, else mean.
///
/// Precondition: `len(in) % len(out) == 0` and `len(in) >= len(out)`.
pub fn aggregate<T: Real>(input: &[T], output: &mut [T], sum_not_mean: bool) {
    assert!(!output.is_empty(), "out must be non-empty");
    assert!(
        input.len() % output.len() == 0 && input.len() >= output.len(),
        "len(in)={} must be a multiple of len(out)={}",
        input.len(),
        output.len()
    );
    let k = input.len() / output.len();
    for (i, out_slot) in output.iter_mut().enumerate() {
        let chunk = &input[i * k..(i + 1) * k];
        let sum = chunk.iter().fold(T::zero(), |acc, &x| acc + x);
        *out_slot = if sum_not_mean {
            sum
        } else {
            sum / t_of(k as f64)
        };
    }
}

/// The `k = len(out)/len(in)` output slots for input `i` are filled with `in[i]`
/// when `repeat_not_divide`, else with `in[i]/k`.
///
/// Precondition: `len(out) % len(in) == 0` and `len(out) >= len(in)`.
pub fn disaggregate<T: Real>(input: &[T], output: &mut [T], repeat_not_divide: bool) {
    assert!(!input.is_empty(), "in must be non-empty");
    assert!(
        output.len() % input.len() == 0 && output.len() >= input.len(),
        "len(out)={} must be a multiple of len(in)={}",
        output.len(),
        input.len()
    );
    let k = output.len() / input.len();
    for (i, &value) in input.iter().enumerate() {
        let filler = if repeat_not_divide {
            value
        } else {
            value / t_of(k as f64)
        };
        output[i * k..(i + 1) * k].fill(filler);
    }
}

/// Expands a model-time vector (52-week years) into ISO time, duplicating the
/// preceding week-52 segment into every week-53 range the output span touches.
pub fn convert_to_isotime<T: Real>(
    input: &[T],
    start_date: Fixed,
    period_duration: PeriodDuration,
) -> Result<Vec<T>, TimeVectorError> {
    assert!(!input.is_empty(), "input must be non-empty");
    period_duration
        .check()
        .expect("period_duration must be >= 1 whole minute");
    let period_days = period_duration.as_days_f64();
    let ppw = period_duration.periods_per_week();

    let mut output: Vec<T> = Vec::with_capacity(input.len());
    let mut input_idx = 0usize;
    let mut cursor = start_date;

    loop {
        let period_end = shift(cursor, period_days);
        let in_week53 = period_contains_week_53(cursor, period_end);
        if input_idx >= input.len() && !in_week53 {
            break;
        }
        if in_week53 {
            match ppw {
                Some(p) if output.len() >= p => {
                    output.push(output[output.len() - p]);
                }
                _ if output.is_empty() => {
                    // start_date itself falls inside week 53: no prior week to copy from.
                    if input_idx < input.len() {
                        output.push(input[input_idx]);
                        input_idx += 1;
                    } else {
                        break;
                    }
                }
                Some(_) => {
                    // Not enough history yet to copy a whole week; pass through if we can.
                    if input_idx < input.len() {
                        output.push(input[input_idx]);
                        input_idx += 1;
                    } else {
                        break;
                    }
                }
                None => {
                    return Err(TimeVectorError::IncompatibleResolution(
                        "Incompatible period duration detected when converting to ISO-time!"
                            .to_string(),
                    ));
                }
            }
        } else {
            if input_idx >= input.len() {
                break;
            }
            output.push(input[input_idx]);
            input_idx += 1;
        }
        cursor = period_end;
    }
    Ok(output)
}

/// Strips every week-53 range out of an ISO-time vector, producing a model-time
/// vector and the (possibly shifted) start date.
pub fn convert_to_modeltime<T: Real>(
    input: &[T],
    start_date: Fixed,
    period_duration: PeriodDuration,
) -> Result<(Fixed, Vec<T>), TimeVectorError> {
    assert!(!input.is_empty(), "input must be non-empty");
    period_duration
        .check()
        .expect("period_duration must be >= 1 whole minute");

    if period_duration.is_more_than_one_week() {
        return Ok((start_date, input.to_vec()));
    }

    let period_days = period_duration.as_days_f64();
    let ppw_ok = period_duration.periods_per_week().is_some();

    let mut cursor = start_date;
    let mut skip = 0usize;
    while skip < input.len() && period_contains_week_53(cursor, shift(cursor, period_days)) {
        if !ppw_ok {
            return Err(TimeVectorError::IncompatibleResolution(
                "Incompatible period duration detected!".to_string(),
            ));
        }
        cursor = shift(cursor, period_days);
        skip += 1;
    }
    let new_start = cursor;

    let mut output = Vec::with_capacity(input.len() - skip);
    let mut pos = cursor;
    for &value in &input[skip..] {
        let period_end = shift(pos, period_days);
        if period_contains_week_53(pos, period_end) {
            if !ppw_ok {
                return Err(TimeVectorError::IncompatibleResolution(
                    "Incompatible period duration detected!".to_string(),
                ));
            }
        } else {
            output.push(value);
        }
        pos = period_end;
    }
    Ok((new_start, output))
}

fn year_span_weeks(start_year: i32, num_years: u32) -> u32 {
    (0..num_years)
        .map(|i| crate::calendar_primitives::iso_year_length(start_year + i as i32) as u32)
        .sum()
}

/// Slices `[output_start_year, output_start_year+output_num_years)` out of a
/// whole-years ISO-time vector, accounting for 52-vs-53-week years at sub-weekly
/// resolutions.
pub fn periodize_isotime<T: Copy>(
    input: &[T],
    input_start_year: i32,
    input_num_years: u32,
    output_start_year: i32,
    output_num_years: u32,
) -> Result<Vec<T>, TimeVectorError> {
    assert!(input_start_year <= output_start_year);
    assert!(output_start_year + output_num_years as i32 <= input_start_year + input_num_years as i32);
    assert!(input_num_years > 0 && output_num_years > 0);

    let len = input.len() as u32;
    if len == input_num_years {
        let start = (output_start_year - input_start_year) as usize;
        return Ok(input[start..start + output_num_years as usize].to_vec());
    }
    if len == input_num_years * 12 {
        let start = (output_start_year - input_start_year) as usize * 12;
        return Ok(input[start..start + (output_num_years as usize) * 12].to_vec());
    }
    let total_weeks = year_span_weeks(input_start_year, input_num_years);
    if total_weeks > 0 && len % total_weeks == 0 {
        let samples_per_week = len / total_weeks;
        let weeks_before = year_span_weeks(input_start_year, (output_start_year - input_start_year) as u32);
        let weeks_span = year_span_weeks(output_start_year, output_num_years);
        let start = (weeks_before * samples_per_week) as usize;
        let take = (weeks_span * samples_per_week) as usize;
        return Ok(input[start..start + take].to_vec());
    }
    Err(TimeVectorError::IncompatibleResolution(
        "resolution does not divide whole ISO years".to_string(),
    ))
}

/// Same as [`periodize_isotime`] but every model year is exactly 52 weeks, so the
/// slice is uniform.
pub fn periodize_modeltime<T: Copy>(
    input: &[T],
    input_start_year: i32,
    input_num_years: u32,
    output_start_year: i32,
    output_num_years: u32,
) -> Result<Vec<T>, TimeVectorError> {
    assert!(input_start_year <= output_start_year);
    assert!(output_start_year + output_num_years as i32 <= input_start_year + input_num_years as i32);
    assert!(input_num_years > 0 && output_num_years > 0);
    assert!(
        input.len() % (input_num_years as usize) == 0,
        "len(input) must be a whole multiple of input_num_years in model time"
    );
    let samples_per_year = input.len() / input_num_years as usize;
    let start = (output_start_year - input_start_year) as usize * samples_per_year;
    let take = output_num_years as usize * samples_per_year;
    Ok(input[start..start + take].to_vec())
}

fn tile_for_year<T: Copy>(input: &[T], input_weeks: u32, ppw: usize, target_weeks: u32) -> Vec<T> {
    let mut tile = input.to_vec();
    if target_weeks == input_weeks {
        return tile;
    }
    if target_weeks > input_weeks {
        for _ in 0..(target_weeks - input_weeks) {
            let last_week = tile[tile.len() - ppw..].to_vec();
            tile.extend(last_week);
        }
    } else {
        tile.truncate((target_weeks as usize) * ppw);
    }
    tile
}

/// Tiles one ISO year of data across `[output_start_date, output_end_date)`,
/// extending or truncating each tile to match that real year's actual length.
pub fn repeat_oneyear_isotime<T: Real>(
    input: &[T],
    input_start_date: Fixed,
    period_duration: PeriodDuration,
    output_start_date: Fixed,
    output_end_date: Fixed,
) -> Result<Vec<T>, TimeVectorError> {
    assert!(!input.is_empty());
    assert!(output_end_date > output_start_date);
    period_duration
        .check()
        .expect("period_duration must be >= 1 whole minute");
    let period_days = period_duration.as_days_f64();
    let ppw = period_duration.periods_per_week().ok_or_else(|| {
        TimeVectorError::IncompatibleResolution(
            "period_duration must evenly divide one ISO week to repeat a one-year profile"
                .to_string(),
        )
    })?;
    let input_weeks = (input.len() / ppw) as u32;
    assert_eq!(input.len(), input_weeks as usize * ppw, "input must cover whole weeks");
    let _ = input_start_date; // input is pinned to a canonical calendar year, not reused below.

    let mut output = Vec::new();
    let mut cursor = output_start_date;
    while cursor < output_end_date {
        let year = ISO::from_fixed(cursor).year();
        let year_start = ISO::new_year(year).to_fixed();
        let year_weeks = crate::calendar_primitives::iso_year_length(year) as u32;
        let tile = tile_for_year(input, input_weeks, ppw, year_weeks);

        let periods_since_year_start =
            ((cursor.get() - year_start.get()) / period_days).round() as usize;
        let available = tile.len().saturating_sub(periods_since_year_start);
        let remaining = ((output_end_date.get() - cursor.get()) / period_days).round() as usize;
        let take = available.min(remaining);
        output.extend_from_slice(&tile[periods_since_year_start..periods_since_year_start + take]);
        cursor = shift(cursor, take as f64 * period_days);
        if take == 0 {
            break;
        }
    }
    Ok(output)
}

/// Tiles one model year of data (always exactly 52 weeks) cyclically across
/// `[output_start_date, output_end_date)`. The first tile may begin mid-cycle.
pub fn repeat_oneyear_modeltime<T: Real>(
    input: &[T],
    input_start_date: Fixed,
    period_duration: PeriodDuration,
    output_start_date: Fixed,
    output_end_date: Fixed,
) -> Result<Vec<T>, TimeVectorError> {
    assert!(!input.is_empty());
    assert!(output_end_date > output_start_date);
    period_duration
        .check()
        .expect("period_duration must be >= 1 whole minute");
    let period_days = period_duration.as_days_f64();
    let total_periods = ((output_end_date.get() - output_start_date.get()) / period_days).round();
    assert!(total_periods >= 1.0);

    let offset_raw = (output_start_date.get() - input_start_date.get()) / period_days;
    let offset = offset_raw.rem_euclid(input.len() as f64).round() as usize % input.len();

    let mut output = Vec::with_capacity(total_periods as usize);
    for i in 0..(total_periods as usize) {
        output.push(input[(offset + i) % input.len()]);
    }
    Ok(output)
}

/// Length-weighted average of `values` (a fixed-frequency series starting at
/// `index_start` with step `period_duration`) over `[query_start, query_start +
/// query_duration)`. `extrapolate_{first,last}` extend the first/last value to
/// cover the portion of the query outside `values`'s nominal span.
///
/// This is the primitive behind `TimeIndex::get_period_average` (§4.2 case 6):
/// the List/Profile/FixedFrequency variants all reduce to this once their data is
/// expressed as a uniform series in the query's own calendar convention.
pub fn get_period_average<T: Real>(
    values: &[T],
    index_start: Fixed,
    period_duration: PeriodDuration,
    extrapolate_first: bool,
    extrapolate_last: bool,
    query_start: Fixed,
    query_duration: PeriodDuration,
) -> Result<T, TimeVectorError> {
    assert!(!values.is_empty());
    let period_days = period_duration.as_days_f64();
    let index_end = shift(index_start, period_days * values.len() as f64);
    let query_end = shift(query_start, query_duration.as_days_f64());
    assert!(query_end > query_start);

    let mut weighted_sum = 0f64;
    let mut covered = 0f64;

    if query_start < index_start && extrapolate_first {
        let seg_end = if query_end < index_start { query_end } else { index_start };
        let w = seg_end.get() - query_start.get();
        if w > 0.0 {
            weighted_sum += w * f64_of(values[0]);
            covered += w;
        }
    }
    if query_end > index_end && extrapolate_last {
        let seg_start = if query_start > index_end { query_start } else { index_end };
        let w = query_end.get() - seg_start.get();
        if w > 0.0 {
            weighted_sum += w * f64_of(values[values.len() - 1]);
            covered += w;
        }
    }

    let overlap_start = if query_start > index_start { query_start } else { index_start };
    let overlap_end = if query_end < index_end { query_end } else { index_end };
    if overlap_start < overlap_end {
        let i0 = ((overlap_start.get() - index_start.get()) / period_days)
            .floor()
            .max(0.0) as usize;
        let i1 = (((overlap_end.get() - index_start.get()) / period_days).ceil() as usize)
            .min(values.len());
        for (i, &value) in values.iter().enumerate().take(i1).skip(i0) {
            let p_start = index_start.get() + i as f64 * period_days;
            let p_end = p_start + period_days;
            let seg_start = overlap_start.get().max(p_start);
            let seg_end = overlap_end.get().min(p_end);
            let w = seg_end - seg_start;
            if w > 0.0 {
                weighted_sum += w * f64_of(value);
                covered += w;
            }
        }
    }

    if covered <= 0.0 {
        return Err(TimeVectorError::OutOfRange(
            "requested interval has no coverage under the current extrapolation policy".to_string(),
        ));
    }
    Ok(t_of(weighted_sum / covered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::prelude::CommonDate;
    use crate::calendar::prelude::ToFromCommonDate;
    use crate::calendar::Gregorian;
    use crate::day_count::ToFixed;

    fn g(year: i32, month: u8, day: u8) -> Fixed {
        Gregorian::try_from_common_date(CommonDate::new(year, month, day))
            .unwrap()
            .to_fixed()
    }

    fn iso_monday(year: i32, week: u8) -> Fixed {
        ISO::try_new(year, week, crate::day_cycle::Weekday::Monday)
            .unwrap()
            .to_fixed()
    }

    #[test]
    fn aggregate_sum_and_mean() {
        let input: Vec<f64> = (0..12).map(f64::from).collect();
        let mut out = [0.0f64; 3];
        aggregate(&input, &mut out, false);
        assert_eq!(out, [1.5, 5.5, 9.5]);
        aggregate(&input, &mut out, true);
        assert_eq!(out, [6.0, 22.0, 38.0]);
    }

    #[test]
    fn disaggregate_repeat_and_divide() {
        let input = [1.0f64, 2.0, 3.0];
        let mut out = [0.0f64; 6];
        disaggregate(&input, &mut out, true);
        assert_eq!(out, [1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
        disaggregate(&input, &mut out, false);
        assert_eq!(out, [0.5, 0.5, 1.0, 1.0, 1.5, 1.5]);
    }

    #[test]
    fn disaggregate_then_aggregate_round_trips() {
        let input = [10.0f64, 20.0, 30.0, 40.0];
        let mut expanded = [0.0f64; 12];
        disaggregate(&input, &mut expanded, true);
        let mut back = [0.0f64; 4];
        aggregate(&expanded, &mut back, false);
        assert_eq!(back, input);
    }

    #[test]
    fn convert_to_isotime_scenario_one() {
        // spec.md §8 scenario 1
        let input: Vec<f64> = (0..52).map(f64::from).collect();
        let out = convert_to_isotime(&input, iso_monday(2020, 1), PeriodDuration::from_weeks(1)).unwrap();
        assert_eq!(out.len(), 53);
        assert_eq!(out[52], out[51]);
        assert_eq!(out[51], 51.0);
    }

    #[test]
    fn convert_to_isotime_daily_week_53_add_whole_week() {
        let input: Vec<f64> = (0..10).map(f64::from).collect();
        let out = convert_to_isotime(&input, iso_monday(2026, 52), PeriodDuration::from_days(1)).unwrap();
        assert_eq!(
            out,
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
    }

    #[test]
    fn convert_to_modeltime_scenario_two() {
        // spec.md §8 scenario 2
        let input: Vec<f64> = (0..53).map(f64::from).collect();
        let (new_start, out) =
            convert_to_modeltime(&input, iso_monday(2020, 1), PeriodDuration::from_weeks(1)).unwrap();
        assert_eq!(new_start, iso_monday(2020, 1));
        assert_eq!(out, (0..52).map(f64::from).collect::<Vec<_>>());
    }

    #[test]
    fn convert_to_modeltime_scenario_three_start_inside_week_53() {
        // spec.md §8 scenario 3
        let input: Vec<f64> = (0..52).map(f64::from).collect();
        let (new_start, out) =
            convert_to_modeltime(&input, g(2026, 12, 30), PeriodDuration::from_days(1)).unwrap();
        assert_eq!(new_start, g(2027, 1, 4));
        assert_eq!(out.len(), 47);
        assert_eq!(out, (5..52).map(f64::from).collect::<Vec<_>>());
    }

    #[test]
    fn repeat_oneyear_isotime_scenario_five() {
        // spec.md §8 scenario 5
        let input: Vec<f64> = (0..52).map(f64::from).collect();
        let start = iso_monday(2020, 1);
        let end = shift(start, 2.0 * 365.0);
        let out = repeat_oneyear_isotime(&input, start, PeriodDuration::from_weeks(1), start, end).unwrap();
        assert_eq!(out.len(), 53 + 52);
        assert_eq!(out[52], 51.0);
    }

    #[test]
    fn repeat_oneyear_modeltime_cycles_and_offsets() {
        let input: Vec<f64> = (0..52).map(f64::from).collect();
        let start = iso_monday(2020, 1);
        let output_start = shift(start, 52.0 * 7.0);
        let output_end = shift(output_start, 60.0 * 7.0);
        let out = repeat_oneyear_modeltime(
            &input,
            start,
            PeriodDuration::from_weeks(1),
            output_start,
            output_end,
        )
        .unwrap();
        assert_eq!(out.len(), 60);
        assert_eq!(out[..52], input[..]);
        assert_eq!(out[52..], input[..8]);
    }

    #[test]
    fn get_period_average_hourly_cases() {
        let values: Vec<f64> = vec![1.0, 3.0, 5.0, 7.0, 9.0, 11.0, 13.0, 15.0, 17.0, 19.0, 21.0, 23.0];
        let start = g(2020, 1, 2);
        let period = PeriodDuration::from_hours(2);

        let extrapolated_first = get_period_average(
            &values,
            start,
            period,
            true,
            true,
            shift(g(2020, 1, 1), 20.0 / 24.0),
            PeriodDuration::from_hours(4),
        )
        .unwrap();
        assert_eq!(extrapolated_first, 1.0);

        let overlap_first = get_period_average(
            &values,
            start,
            period,
            true,
            true,
            shift(g(2020, 1, 1), 20.0 / 24.0),
            PeriodDuration::from_hours(8),
        )
        .unwrap();
        assert_eq!(overlap_first, 1.5);

        let interval_2 = get_period_average(
            &values,
            start,
            period,
            true,
            true,
            shift(start, 5.0 / 24.0),
            PeriodDuration::from_hours(4),
        )
        .unwrap();
        assert_eq!(interval_2, 7.0);
    }

    #[test]
    fn get_period_average_scenario_four_no_week_53_touch() {
        // spec.md §8 scenario 4, first sub-case: [2020-12-23, +2 days) does not
        // touch ISO week 53 (which starts 2020-12-28), so the free, calendar-blind
        // `get_period_average` kernel gives the same answer a week-53-aware index
        // would.
        let num_periods = 52 * 7 * 8;
        let values: Vec<f64> = (1..=num_periods).map(f64::from).collect();
        let start = iso_monday(2020, 1);
        let period = PeriodDuration::from_days(1);

        let short = get_period_average(
            &values,
            start,
            period,
            false,
            false,
            g(2020, 12, 23),
            PeriodDuration::from_days(2),
        )
        .unwrap();
        assert_eq!(short, 360.5);
    }

    #[test]
    fn get_period_average_scenario_four_straddling_week_53() {
        // spec.md §8 scenario 4, second sub-case: same start date, a 2-week
        // duration straddling ISO weeks 52/53/1. `values` is a 52-week-year
        // (model-time) series; the request is ISO (`request_52_week_years =
        // false`), so only `TimeIndex::get_period_average` — which inserts the
        // week via `convert_to_isotime` before averaging — produces the
        // week-53-aware result. The free kernel has no calendar awareness and
        // cannot reproduce this.
        let num_periods = 52 * 7 * 8;
        let values: Vec<f64> = (1..=num_periods).map(f64::from).collect();
        let index = crate::timeindex::TimeIndex::FixedFrequency {
            start: iso_monday(2020, 1),
            period_duration: PeriodDuration::from_days(1),
            num_periods,
            is_52_week_years: true,
            extrapolate_first: false,
            extrapolate_last: false,
        };

        let straddling = index
            .get_period_average(
                &values,
                g(2020, 12, 23),
                PeriodDuration::from_weeks(2),
                false,
            )
            .unwrap();
        assert_eq!(straddling, 363.5);
    }
}
