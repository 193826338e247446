// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A whole-minutes-resolution span of time, used as the uniform step of a
//! fixed-frequency [`crate::timeindex::TimeIndex`].
//!
//! `Fixed` has no arithmetic operator overloads, so every vector operation
//! that needs to walk forward in time converts a `PeriodDuration` to a day
//! count via [`PeriodDuration::as_days_f64`] and reconstructs a `Fixed`
//! explicitly.

use crate::common::error::CalendarError;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_DAY: i64 = 86400;
const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// A period length expressed as a whole number of seconds.
///
/// Construction never fails; validity (`>= 1 minute`, whole minutes) is
/// checked on demand by [`PeriodDuration::check`], matching the crate's
/// style of fallible validation living in a method rather than the
/// constructor (see `ISO::try_new`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeriodDuration {
    seconds: i64,
}

impl PeriodDuration {
    pub fn from_seconds(seconds: i64) -> Self {
        PeriodDuration { seconds }
    }

    pub fn from_minutes(minutes: i64) -> Self {
        Self::from_seconds(minutes * SECONDS_PER_MINUTE)
    }

    pub fn from_hours(hours: i64) -> Self {
        Self::from_minutes(hours * 60)
    }

    pub fn from_days(days: i64) -> Self {
        Self::from_hours(days * 24)
    }

    pub fn from_weeks(weeks: i64) -> Self {
        Self::from_days(weeks * 7)
    }

    pub fn seconds(self) -> i64 {
        self.seconds
    }

    /// The period expressed as a fraction of a day, for use with `Fixed` arithmetic.
    pub fn as_days_f64(self) -> f64 {
        self.seconds as f64 / SECONDS_PER_DAY as f64
    }

    /// `Some(n)` when exactly `n` instances of `self` make up one ISO week.
    pub fn periods_per_week(self) -> Option<usize> {
        if self.seconds > 0 && SECONDS_PER_WEEK % self.seconds == 0 {
            Some((SECONDS_PER_WEEK / self.seconds) as usize)
        } else {
            None
        }
    }

    pub fn is_whole_minutes(self) -> bool {
        self.seconds % SECONDS_PER_MINUTE == 0
    }

    pub fn is_more_than_one_week(self) -> bool {
        self.seconds > SECONDS_PER_WEEK
    }

    /// Validates the precondition shared by every vector operation:
    /// `period_duration >= 1 minute` and resolves to whole minutes.
    pub fn check(self) -> Result<Self, CalendarError> {
        if self.seconds >= SECONDS_PER_MINUTE && self.is_whole_minutes() {
            Ok(self)
        } else {
            Err(CalendarError::ImpossibleResult)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(PeriodDuration::from_weeks(1).seconds(), SECONDS_PER_WEEK);
        assert_eq!(PeriodDuration::from_days(1).seconds(), SECONDS_PER_DAY);
        assert_eq!(PeriodDuration::from_hours(1).seconds(), 3600);
        assert_eq!(PeriodDuration::from_minutes(1).seconds(), 60);
    }

    #[test]
    fn periods_per_week_divisors() {
        assert_eq!(PeriodDuration::from_days(1).periods_per_week(), Some(7));
        assert_eq!(PeriodDuration::from_hours(1).periods_per_week(), Some(168));
        assert_eq!(
            PeriodDuration::from_minutes(1).periods_per_week(),
            Some(10080)
        );
        assert_eq!(PeriodDuration::from_weeks(1).periods_per_week(), Some(1));
        assert_eq!(PeriodDuration::from_days(4).periods_per_week(), None);
        assert_eq!(PeriodDuration::from_weeks(2).periods_per_week(), None);
    }

    #[test]
    fn check_rejects_sub_minute_and_fractional() {
        assert!(PeriodDuration::from_seconds(30).check().is_err());
        assert!(PeriodDuration::from_seconds(90).check().is_err());
        assert!(PeriodDuration::from_seconds(120).check().is_ok());
    }
}
