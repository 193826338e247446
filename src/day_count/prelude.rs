// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::common::error::CalendarError;
use crate::common::math::TermNum;
use num_traits::clamp;
use num_traits::AsPrimitive;

pub trait EffectiveBound: Copy + Clone + PartialEq + PartialOrd {
    fn effective_min() -> Self;
    fn effective_max() -> Self;
}

pub trait BoundedDayCount<T: TermNum>: EffectiveBound {
    fn new(t: T) -> Self;
    fn get(self) -> T;

    fn almost_in_effective_bounds(t: T, dt: T) -> Result<(), CalendarError> {
        if t.is_a_number() {
            let min = Self::effective_min().get() - dt;
            let max = Self::effective_max().get() + dt;
            if t >= min && t <= max {
                Ok(())
            } else {
                Err(CalendarError::OutOfBounds)
            }
        } else {
            Err(CalendarError::EncounteredNaN)
        }
    }

    fn in_effective_bounds(t: T) -> Result<(), CalendarError> {
        Self::almost_in_effective_bounds(t, T::zero())
    }

    fn cast_new<U: AsPrimitive<T>>(t: U) -> Self {
        Self::new(t.as_())
    }

    /// Fallible constructor: returns an error rather than an out-of-range value.
    fn checked_new(t: T) -> Result<Self, CalendarError> {
        Self::in_effective_bounds(t).map(|_| Self::new(t))
    }

    /// Saturating constructor: clamps `t` to `[effective_min, effective_max]` rather
    /// than producing an out-of-range value. NaN clamps to zero.
    fn clamped_new<U: TermNum + AsPrimitive<T>>(t: U) -> Self {
        let min = Self::effective_min().get();
        let max = Self::effective_max().get();
        let u: T = if t.is_a_number() { t.as_() } else { T::zero() };
        Self::new(clamp(u, min, max))
    }

    fn checked_add<U: TermNum + AsPrimitive<T>>(self, t: U) -> Result<Self, CalendarError> {
        Self::checked_new(self.get() + t.as_())
    }

    fn checked_sub<U: TermNum + AsPrimitive<T>>(self, t: U) -> Result<Self, CalendarError> {
        Self::checked_new(self.get() - t.as_())
    }

    fn clamped_add<U: TermNum + AsPrimitive<T>>(self, t: U) -> Self {
        Self::clamped_new(self.get() + t.as_())
    }

    fn clamped_sub<U: TermNum + AsPrimitive<T>>(self, t: U) -> Self {
        Self::clamped_new(self.get() - t.as_())
    }
}
