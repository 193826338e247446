// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed descriptions of the temporal axis of a time-vector value.
//!
//! `TimeIndex` is a closed sum type rather than a trait object: the set of
//! variants is fixed (§9 redesign flag), so a `match` inside each shared
//! operation plays the role the teacher gives a trait with per-calendar impls
//! (`ToFromCommonDate`, `HasLeapYears`, ...).

use crate::calendar::ISO;
use crate::calendar_primitives::iso_year_length;
use crate::common::duration::PeriodDuration;
use crate::day_count::BoundedDayCount;
use crate::day_count::Fixed;
use crate::day_count::FromFixed;
use crate::day_count::ToFixed;
use crate::fingerprint::{fingerprint_of_fields, FieldValue, Fingerprint, HasFingerprint};
use crate::vectorops::{convert_to_isotime, convert_to_modeltime, get_period_average, Real, TimeVectorError};

/// `{start_year, num_years}` annotation; arithmetic never reads this, only
/// equality/fingerprinting does (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferencePeriod {
    pub start_year: i32,
    pub num_years: u32,
}

/// The canonical anchor year used by [`TimeIndex::OneYearProfile`].
pub const ONE_YEAR_PROFILE_ANCHOR: i32 = 1981;

#[derive(Debug, Clone, PartialEq)]
pub enum TimeIndex {
    Constant,
    FixedFrequency {
        start: Fixed,
        period_duration: PeriodDuration,
        num_periods: usize,
        is_52_week_years: bool,
        extrapolate_first: bool,
        extrapolate_last: bool,
    },
    List {
        /// Explicit period boundaries: `N + 1` entries describe `N` periods.
        datetimes: Vec<Fixed>,
        is_52_week_years: bool,
        extrapolate_first: bool,
        extrapolate_last: bool,
    },
    Profile {
        start_year: i32,
        num_years: u32,
        period_duration: PeriodDuration,
        is_52_week_years: bool,
    },
    OneYearProfile {
        period_duration: PeriodDuration,
        is_52_week_years: bool,
    },
    ModelYear {
        year: i32,
    },
}

/// Every field of [`TimeIndex`] as an optional override, for [`TimeIndex::copy_with`].
///
/// Mirrors the Python original's `copy_with(**overrides)` kwargs pattern: only the
/// fields that exist on `self`'s variant may be set; setting anything else panics,
/// since that would silently change the variant rather than tweak a field.
#[derive(Debug, Clone, Default)]
pub struct TimeIndexOverrides {
    pub start: Option<Fixed>,
    pub period_duration: Option<PeriodDuration>,
    pub num_periods: Option<usize>,
    pub is_52_week_years: Option<bool>,
    pub extrapolate_first: Option<bool>,
    pub extrapolate_last: Option<bool>,
    pub datetimes: Option<Vec<Fixed>>,
    pub start_year: Option<i32>,
    pub num_years: Option<u32>,
    pub year: Option<i32>,
}

/// The uniform series a non-`Constant`, non-`List` index reduces to: a start
/// date, a period and a count of periods, in one calendar convention.
struct Uniform {
    start: Fixed,
    period_duration: PeriodDuration,
    num_periods: usize,
    is_52_week_years: bool,
    extrapolate_first: bool,
    extrapolate_last: bool,
}

fn anchor(year: i32) -> Fixed {
    ISO::new_year(year).to_fixed()
}

fn year_span_days(start_year: i32, num_years: u32, is_52_week_years: bool) -> f64 {
    if is_52_week_years {
        52.0 * 7.0 * num_years as f64
    } else {
        (0..num_years)
            .map(|i| iso_year_length(start_year + i as i32) as f64 * 7.0)
            .sum()
    }
}

impl TimeIndex {
    fn as_uniform(&self) -> Option<Uniform> {
        match *self {
            TimeIndex::Constant | TimeIndex::List { .. } => None,
            TimeIndex::FixedFrequency {
                start,
                period_duration,
                num_periods,
                is_52_week_years,
                extrapolate_first,
                extrapolate_last,
            } => Some(Uniform {
                start,
                period_duration,
                num_periods,
                is_52_week_years,
                extrapolate_first,
                extrapolate_last,
            }),
            TimeIndex::Profile {
                start_year,
                num_years,
                period_duration,
                is_52_week_years,
            } => {
                let days = year_span_days(start_year, num_years, is_52_week_years);
                let num_periods = (days / period_duration.as_days_f64()).round() as usize;
                Some(Uniform {
                    start: anchor(start_year),
                    period_duration,
                    num_periods,
                    is_52_week_years,
                    extrapolate_first: false,
                    extrapolate_last: false,
                })
            }
            TimeIndex::OneYearProfile {
                period_duration,
                is_52_week_years,
            } => TimeIndex::Profile {
                start_year: ONE_YEAR_PROFILE_ANCHOR,
                num_years: 1,
                period_duration,
                is_52_week_years,
            }
            .as_uniform(),
            TimeIndex::ModelYear { year } => Some(Uniform {
                start: anchor(year),
                period_duration: PeriodDuration::from_weeks(52),
                num_periods: 1,
                is_52_week_years: true,
                extrapolate_first: false,
                extrapolate_last: false,
            }),
        }
    }

    pub fn num_periods(&self) -> Option<usize> {
        match self {
            TimeIndex::Constant => None,
            TimeIndex::List { datetimes, .. } => Some(datetimes.len().saturating_sub(1)),
            _ => self.as_uniform().map(|u| u.num_periods),
        }
    }

    pub fn period_duration(&self) -> Option<PeriodDuration> {
        match self {
            TimeIndex::Constant | TimeIndex::List { .. } => None,
            _ => self.as_uniform().map(|u| u.period_duration),
        }
    }

    pub fn is_52_week_years(&self) -> bool {
        match *self {
            TimeIndex::Constant => false,
            TimeIndex::List {
                is_52_week_years, ..
            } => is_52_week_years,
            TimeIndex::ModelYear { .. } => true,
            _ => self.as_uniform().map(|u| u.is_52_week_years).unwrap_or(false),
        }
    }

    pub fn get_reference_period(&self) -> Option<ReferencePeriod> {
        match *self {
            TimeIndex::Profile {
                start_year,
                num_years,
                ..
            } => Some(ReferencePeriod {
                start_year,
                num_years,
            }),
            TimeIndex::OneYearProfile { .. } => Some(ReferencePeriod {
                start_year: ONE_YEAR_PROFILE_ANCHOR,
                num_years: 1,
            }),
            TimeIndex::ModelYear { year } => Some(ReferencePeriod {
                start_year: year,
                num_years: 1,
            }),
            _ => None,
        }
    }

    /// `true` iff `num_periods * period_duration` spans exactly one year in this
    /// index's own calendar convention and `start` lands on the Monday of week 1.
    pub fn is_one_year(&self) -> bool {
        match self {
            TimeIndex::OneYearProfile { .. } | TimeIndex::ModelYear { .. } => true,
            TimeIndex::Profile { num_years, .. } => *num_years == 1,
            TimeIndex::Constant | TimeIndex::List { .. } => false,
            TimeIndex::FixedFrequency { .. } => {
                let u = self.as_uniform().expect("FixedFrequency is always uniform");
                let iso_start = ISO::from_fixed(u.start);
                if iso_start.week().get() != 1 {
                    return false;
                }
                let total_days = u.period_duration.as_days_f64() * u.num_periods as f64;
                let expected = year_span_days(iso_start.year(), 1, u.is_52_week_years);
                (total_days - expected).abs() < 1e-6
            }
        }
    }

    /// Applies `overrides` on top of `self`, producing a new index of the same
    /// variant. Panics if an override field does not apply to `self`'s variant.
    pub fn copy_with(&self, overrides: &TimeIndexOverrides) -> TimeIndex {
        match self.clone() {
            TimeIndex::Constant => {
                assert!(
                    overrides.start.is_none()
                        && overrides.period_duration.is_none()
                        && overrides.num_periods.is_none()
                        && overrides.is_52_week_years.is_none()
                        && overrides.extrapolate_first.is_none()
                        && overrides.extrapolate_last.is_none()
                        && overrides.datetimes.is_none()
                        && overrides.start_year.is_none()
                        && overrides.num_years.is_none()
                        && overrides.year.is_none(),
                    "Constant has no overridable fields"
                );
                TimeIndex::Constant
            }
            TimeIndex::FixedFrequency {
                start,
                period_duration,
                num_periods,
                is_52_week_years,
                extrapolate_first,
                extrapolate_last,
            } => TimeIndex::FixedFrequency {
                start: overrides.start.unwrap_or(start),
                period_duration: overrides.period_duration.unwrap_or(period_duration),
                num_periods: overrides.num_periods.unwrap_or(num_periods),
                is_52_week_years: overrides.is_52_week_years.unwrap_or(is_52_week_years),
                extrapolate_first: overrides.extrapolate_first.unwrap_or(extrapolate_first),
                extrapolate_last: overrides.extrapolate_last.unwrap_or(extrapolate_last),
            },
            TimeIndex::List {
                datetimes,
                is_52_week_years,
                extrapolate_first,
                extrapolate_last,
            } => TimeIndex::List {
                datetimes: overrides.datetimes.clone().unwrap_or(datetimes),
                is_52_week_years: overrides.is_52_week_years.unwrap_or(is_52_week_years),
                extrapolate_first: overrides.extrapolate_first.unwrap_or(extrapolate_first),
                extrapolate_last: overrides.extrapolate_last.unwrap_or(extrapolate_last),
            },
            TimeIndex::Profile {
                start_year,
                num_years,
                period_duration,
                is_52_week_years,
            } => TimeIndex::Profile {
                start_year: overrides.start_year.unwrap_or(start_year),
                num_years: overrides.num_years.unwrap_or(num_years),
                period_duration: overrides.period_duration.unwrap_or(period_duration),
                is_52_week_years: overrides.is_52_week_years.unwrap_or(is_52_week_years),
            },
            TimeIndex::OneYearProfile {
                period_duration,
                is_52_week_years,
            } => {
                assert!(
                    overrides.start_year.is_none() && overrides.num_years.is_none(),
                    "OneYearProfile is pinned to anchor year {ONE_YEAR_PROFILE_ANCHOR}"
                );
                TimeIndex::OneYearProfile {
                    period_duration: overrides.period_duration.unwrap_or(period_duration),
                    is_52_week_years: overrides.is_52_week_years.unwrap_or(is_52_week_years),
                }
            }
            TimeIndex::ModelYear { year } => TimeIndex::ModelYear {
                year: overrides.year.unwrap_or(year),
            },
        }
    }

    /// Projects `values` (indexed by `self`) onto a fixed-frequency target
    /// `[target_start, target_start + target_num_periods * target_period)`
    /// (§4.2 dispatch rules 1–6).
    pub fn write_into_fixed_frequency<T: Real>(
        &self,
        values: &[T],
        target_start: Fixed,
        target_period: PeriodDuration,
        target_num_periods: usize,
        target_is_52_week_years: bool,
        target_extrapolate_first: bool,
        target_extrapolate_last: bool,
    ) -> Result<Vec<T>, TimeVectorError> {
        assert!(target_num_periods > 0);
        match self {
            TimeIndex::Constant => {
                assert_eq!(values.len(), 1, "Constant index carries exactly one scalar");
                Ok(vec![values[0]; target_num_periods])
            }
            TimeIndex::List {
                datetimes,
                is_52_week_years,
                extrapolate_first,
                extrapolate_last,
            } => {
                if *is_52_week_years != target_is_52_week_years {
                    return Err(TimeVectorError::IncompatibleResolution(
                        "List source and target must share a calendar convention".to_string(),
                    ));
                }
                let mut output = Vec::with_capacity(target_num_periods);
                for i in 0..target_num_periods {
                    let p_start = Fixed::new(
                        target_start.get() + i as f64 * target_period.as_days_f64(),
                    );
                    let p_end = Fixed::new(p_start.get() + target_period.as_days_f64());
                    output.push(list_period_average(
                        datetimes,
                        values,
                        *extrapolate_first,
                        *extrapolate_last,
                        p_start,
                        p_end,
                    )?);
                }
                Ok(output)
            }
            _ => {
                let u = self.as_uniform().expect("only Constant/List are non-uniform");
                write_uniform_into_fixed_frequency(
                    values,
                    u.start,
                    u.period_duration,
                    u.is_52_week_years,
                    u.extrapolate_first,
                    u.extrapolate_last,
                    target_start,
                    target_period,
                    target_num_periods,
                    target_is_52_week_years,
                    target_extrapolate_first,
                    target_extrapolate_last,
                )
            }
        }
    }

    /// The length-weighted average of `values` over `[start, start + duration)`,
    /// expressed in `request_52_week_years`'s calendar convention.
    pub fn get_period_average<T: Real>(
        &self,
        values: &[T],
        start: Fixed,
        duration: PeriodDuration,
        request_52_week_years: bool,
    ) -> Result<T, TimeVectorError> {
        match self {
            TimeIndex::Constant => {
                assert_eq!(values.len(), 1);
                Ok(values[0])
            }
            TimeIndex::List {
                datetimes,
                is_52_week_years,
                extrapolate_first,
                extrapolate_last,
            } => {
                if *is_52_week_years != request_52_week_years {
                    return Err(TimeVectorError::IncompatibleResolution(
                        "List source and request must share a calendar convention".to_string(),
                    ));
                }
                let end = Fixed::new(start.get() + duration.as_days_f64());
                list_period_average(datetimes, values, *extrapolate_first, *extrapolate_last, start, end)
            }
            _ => {
                let u = self.as_uniform().expect("only Constant/List are non-uniform");
                if u.is_52_week_years == request_52_week_years {
                    get_period_average(
                        values,
                        u.start,
                        u.period_duration,
                        u.extrapolate_first,
                        u.extrapolate_last,
                        start,
                        duration,
                    )
                } else if u.is_52_week_years {
                    let iso_values = convert_to_isotime(values, u.start, u.period_duration)?;
                    get_period_average(
                        &iso_values,
                        u.start,
                        u.period_duration,
                        u.extrapolate_first,
                        u.extrapolate_last,
                        start,
                        duration,
                    )
                } else {
                    let (model_start, model_values) =
                        convert_to_modeltime(values, u.start, u.period_duration)?;
                    get_period_average(
                        &model_values,
                        model_start,
                        u.period_duration,
                        u.extrapolate_first,
                        u.extrapolate_last,
                        start,
                        duration,
                    )
                }
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn write_uniform_into_fixed_frequency<T: Real>(
    values: &[T],
    src_start: Fixed,
    src_period: PeriodDuration,
    src_is_52: bool,
    extrapolate_first: bool,
    extrapolate_last: bool,
    target_start: Fixed,
    target_period: PeriodDuration,
    target_num_periods: usize,
    target_is_52: bool,
    target_extrapolate_first: bool,
    target_extrapolate_last: bool,
) -> Result<Vec<T>, TimeVectorError> {
    // Case 4: cross-calendar conversion happens first, then we redispatch.
    if src_is_52 != target_is_52 {
        return if src_is_52 {
            let converted = convert_to_isotime(values, src_start, src_period)?;
            write_uniform_into_fixed_frequency(
                &converted,
                src_start,
                src_period,
                false,
                extrapolate_first,
                extrapolate_last,
                target_start,
                target_period,
                target_num_periods,
                target_is_52,
                target_extrapolate_first,
                target_extrapolate_last,
            )
        } else {
            let (new_start, converted) = convert_to_modeltime(values, src_start, src_period)?;
            write_uniform_into_fixed_frequency(
                &converted,
                new_start,
                src_period,
                true,
                extrapolate_first,
                extrapolate_last,
                target_start,
                target_period,
                target_num_periods,
                target_is_52,
                target_extrapolate_first,
                target_extrapolate_last,
            )
        };
    }

    // Case 1: identical index -> bit-exact copy (§8 quantified invariant).
    if src_start == target_start
        && src_period == target_period
        && values.len() == target_num_periods
    {
        return Ok(values.to_vec());
    }

    let offset_periods = (target_start.get() - src_start.get()) / src_period.as_days_f64();
    let aligned = (offset_periods - offset_periods.round()).abs() < 1e-6;

    if aligned && offset_periods.round() as i64 == 0 {
        let src_seconds = src_period.seconds();
        let tgt_seconds = target_period.seconds();
        // Case 2: target period is an integer multiple of source -> aggregate.
        if tgt_seconds % src_seconds == 0 {
            let k = (tgt_seconds / src_seconds) as usize;
            if values.len() == target_num_periods * k {
                let mut output = vec![T::zero(); target_num_periods];
                crate::vectorops::aggregate(values, &mut output, false);
                return Ok(output);
            }
        }
        // Case 3: source period is an integer multiple of target -> disaggregate.
        if src_seconds % tgt_seconds == 0 {
            let k = (src_seconds / tgt_seconds) as usize;
            if target_num_periods == values.len() * k {
                let mut output = vec![T::zero(); target_num_periods];
                crate::vectorops::disaggregate(values, &mut output, true);
                return Ok(output);
            }
        }
    }

    // Generic fallback: per-target-period weighted average (case 6's primitive
    // also covers misaligned starts and non-integer ratios for uniform sources).
    let mut output = Vec::with_capacity(target_num_periods);
    for i in 0..target_num_periods {
        let p_start = Fixed::new(target_start.get() + i as f64 * target_period.as_days_f64());
        let value = get_period_average(
            values,
            src_start,
            src_period,
            extrapolate_first,
            extrapolate_last,
            p_start,
            target_period,
        )
        .map_err(|_| {
            TimeVectorError::IncompatibleResolution(
                "source index cannot cover the requested target period".to_string(),
            )
        })?;
        output.push(value);
    }
    let _ = target_extrapolate_first;
    let _ = target_extrapolate_last;
    Ok(output)
}

/// Length-weighted average over explicit, possibly non-uniform period
/// boundaries (`datetimes`, `N + 1` entries for `N` values).
fn list_period_average<T: Real>(
    datetimes: &[Fixed],
    values: &[T],
    extrapolate_first: bool,
    extrapolate_last: bool,
    query_start: Fixed,
    query_end: Fixed,
) -> Result<T, TimeVectorError> {
    assert!(datetimes.len() == values.len() + 1);
    assert!(query_end > query_start);

    let index_start = datetimes[0];
    let index_end = datetimes[datetimes.len() - 1];
    let mut weighted_sum = 0f64;
    let mut covered = 0f64;

    let f64_of = |v: T| -> f64 { num_traits::ToPrimitive::to_f64(&v).expect("Real casts to f64") };

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
    for i in 0..values.len() {
        let p_start = datetimes[i].get();
        let p_end = datetimes[i + 1].get();
        let seg_start = query_start.get().max(p_start);
        let seg_end = query_end.get().min(p_end);
        let w = seg_end - seg_start;
        if w > 0.0 {
            weighted_sum += w * f64_of(values[i]);
            covered += w;
        }
    }

    if covered <= 0.0 {
        return Err(TimeVectorError::OutOfRange(
            "requested interval has no coverage under the current extrapolation policy".to_string(),
        ));
    }
    Ok(num_traits::NumCast::from(weighted_sum / covered).expect("finite f64 representable in Real"))
}

impl HasFingerprint for TimeIndex {
    fn get_fingerprint(&self) -> Fingerprint {
        match self {
            TimeIndex::Constant => fingerprint_of_fields(&[FieldValue::from("Constant")]),
            TimeIndex::FixedFrequency {
                start,
                period_duration,
                num_periods,
                is_52_week_years,
                extrapolate_first,
                extrapolate_last,
            } => fingerprint_of_fields(&[
                FieldValue::from("FixedFrequency"),
                FieldValue::Float(start.get()),
                FieldValue::Int(period_duration.seconds()),
                FieldValue::Int(*num_periods as i64),
                FieldValue::Bool(*is_52_week_years),
                FieldValue::Bool(*extrapolate_first),
                FieldValue::Bool(*extrapolate_last),
            ]),
            TimeIndex::List {
                datetimes,
                is_52_week_years,
                extrapolate_first,
                extrapolate_last,
            } => {
                let mut fields = vec![FieldValue::from("List")];
                fields.extend(datetimes.iter().map(|d| FieldValue::Float(d.get())));
                fields.push(FieldValue::Bool(*is_52_week_years));
                fields.push(FieldValue::Bool(*extrapolate_first));
                fields.push(FieldValue::Bool(*extrapolate_last));
                fingerprint_of_fields(&fields)
            }
            TimeIndex::Profile {
                start_year,
                num_years,
                period_duration,
                is_52_week_years,
            } => fingerprint_of_fields(&[
                FieldValue::from("Profile"),
                FieldValue::Int(*start_year as i64),
                FieldValue::Int(*num_years as i64),
                FieldValue::Int(period_duration.seconds()),
                FieldValue::Bool(*is_52_week_years),
            ]),
            TimeIndex::OneYearProfile {
                period_duration,
                is_52_week_years,
            } => fingerprint_of_fields(&[
                FieldValue::from("OneYearProfile"),
                FieldValue::Int(period_duration.seconds()),
                FieldValue::Bool(*is_52_week_years),
            ]),
            TimeIndex::ModelYear { year } => fingerprint_of_fields(&[
                FieldValue::from("ModelYear"),
                FieldValue::Int(*year as i64),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day_cycle::Weekday;

    fn iso_monday(year: i32, week: u8) -> Fixed {
        ISO::try_new(year, week, Weekday::Monday).unwrap().to_fixed()
    }

    #[test]
    fn model_year_is_one_year_and_52_weeks() {
        let idx = TimeIndex::ModelYear { year: 2024 };
        assert!(idx.is_one_year());
        assert!(idx.is_52_week_years());
        assert_eq!(idx.num_periods(), Some(1));
        assert_eq!(idx.period_duration(), Some(PeriodDuration::from_weeks(52)));
        assert_eq!(
            idx.get_reference_period(),
            Some(ReferencePeriod {
                start_year: 2024,
                num_years: 1
            })
        );
    }

    #[test]
    fn one_year_profile_reference_period_is_pinned() {
        let idx = TimeIndex::OneYearProfile {
            period_duration: PeriodDuration::from_days(1),
            is_52_week_years: true,
        };
        assert_eq!(
            idx.get_reference_period(),
            Some(ReferencePeriod {
                start_year: ONE_YEAR_PROFILE_ANCHOR,
                num_years: 1
            })
        );
        assert_eq!(idx.num_periods(), Some(52 * 7));
    }

    #[test]
    fn fixed_frequency_identity_projection_is_bit_exact() {
        let idx = TimeIndex::FixedFrequency {
            start: iso_monday(2020, 1),
            period_duration: PeriodDuration::from_weeks(1),
            num_periods: 10,
            is_52_week_years: true,
            extrapolate_first: false,
            extrapolate_last: false,
        };
        let values: Vec<f64> = (0..10).map(f64::from).collect();
        let out = idx
            .write_into_fixed_frequency(
                &values,
                iso_monday(2020, 1),
                PeriodDuration::from_weeks(1),
                10,
                true,
                false,
                false,
            )
            .unwrap();
        assert_eq!(out, values);
    }

    #[test]
    fn fixed_frequency_aggregate_projection() {
        let idx = TimeIndex::FixedFrequency {
            start: iso_monday(2020, 1),
            period_duration: PeriodDuration::from_days(1),
            num_periods: 14,
            is_52_week_years: true,
            extrapolate_first: false,
            extrapolate_last: false,
        };
        let values: Vec<f64> = (0..14).map(f64::from).collect();
        let out = idx
            .write_into_fixed_frequency(
                &values,
                iso_monday(2020, 1),
                PeriodDuration::from_weeks(1),
                2,
                true,
                false,
                false,
            )
            .unwrap();
        assert_eq!(out, vec![3.0, 10.0]);
    }

    #[test]
    fn constant_broadcasts() {
        let idx = TimeIndex::Constant;
        let out = idx
            .write_into_fixed_frequency(
                &[42.0f64],
                iso_monday(2020, 1),
                PeriodDuration::from_days(1),
                5,
                true,
                false,
                false,
            )
            .unwrap();
        assert_eq!(out, vec![42.0; 5]);
    }

    #[test]
    fn list_period_average_weights_partial_overlap() {
        let datetimes = vec![
            iso_monday(2020, 1),
            Fixed::new(iso_monday(2020, 1).get() + 1.0),
            Fixed::new(iso_monday(2020, 1).get() + 3.0),
        ];
        let values = [1.0f64, 5.0];
        let avg = list_period_average(
            &datetimes,
            &values,
            false,
            false,
            iso_monday(2020, 1),
            Fixed::new(iso_monday(2020, 1).get() + 2.0),
        )
        .unwrap();
        // 1 day at value 1 + 1 day at value 5, evenly split.
        assert_eq!(avg, 3.0);
    }
}
