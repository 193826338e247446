#[macro_use]
extern crate num_derive;

pub mod clock {
    mod clock_time;
    mod time_of_day;

    pub use clock_time::ClockTime;
    pub use time_of_day::TimeOfDay;
}
mod common {
    pub mod bound;
    pub mod duration;
    pub mod error;
    pub mod math;
}
pub use common::bound;
pub use common::duration::PeriodDuration;
pub use common::error;
pub use common::error::CalendarError;
pub use common::math;
pub mod day_count {
    mod fixed;
    pub mod prelude;
    mod rd;

    pub use fixed::CalculatedBounds;
    pub use fixed::Epoch;
    pub use fixed::Fixed;
    pub use fixed::FromFixed;
    pub use fixed::ToFixed;
    pub use fixed::FIXED_MAX;
    pub use fixed::FIXED_MIN;
    pub use prelude::BoundedDayCount;
    pub use prelude::EffectiveBound;
    pub use rd::RataDie;
}
pub mod day_cycle {
    pub mod prelude;
    mod week;

    pub use prelude::BoundedCycle;
    pub use prelude::OnOrBefore;
    pub use week::Weekday;
}
pub mod calendar {
    mod gregorian;
    mod iso;
    pub mod moment;
    pub mod prelude;

    pub use gregorian::Gregorian;
    pub use gregorian::GregorianMonth;
    pub use gregorian::GregorianMoment;
    pub use iso::ISOMoment;
    pub use iso::ISO;
    pub use moment::CalendarMoment;
    pub use prelude::*;
}
pub mod calendar_primitives;
pub mod fingerprint;
pub mod model;
pub mod timeindex;
pub mod vectorops;

pub use calendar_primitives::*;
pub use fingerprint::{fingerprint_of_fields, fingerprint_of_str, FieldValue, Fingerprint, HasFingerprint};
pub use model::{
    check_duplicate_ids, Component, ConstantTimeVector, ContentCounts, Curve, Expr, FloatVec,
    ListTimeVector, LoadedTimeVector, Loader, Model, Populator, StoredValue, TimeVector,
};
pub use timeindex::{ReferencePeriod, TimeIndex, TimeIndexOverrides};
pub use vectorops::{
    aggregate, convert_to_isotime, convert_to_modeltime, disaggregate, get_period_average,
    periodize_isotime, periodize_modeltime, repeat_oneyear_isotime, repeat_oneyear_modeltime, Real,
    TimeVectorError,
};
