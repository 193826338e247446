// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Time-vector values (C4) and the external, interface-only collaborators
//! (`Model`, `Loader`, `Populator`) that consume the engine (§6).
//!
//! `Component`/`Curve`/`Expr` are out of scope as full taxonomies (§1); here
//! they are minimal marker traits so `Model` can store them uniformly.

use crate::day_count::Fixed;
use crate::fingerprint::{fingerprint_of_fields, FieldValue, Fingerprint, HasFingerprint};
use crate::timeindex::{ReferencePeriod, TimeIndex};
use crate::vectorops::TimeVectorError;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

/// `get_vector`'s toggleable element width (§3, §5: "32- and 64-bit floating
/// element types; `as_float32` toggles the requested dtype").
#[derive(Debug, Clone, PartialEq)]
pub enum FloatVec {
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl FloatVec {
    fn of(values: &[f64], as_float32: bool) -> FloatVec {
        if as_float32 {
            FloatVec::F32(values.iter().map(|&v| v as f32).collect())
        } else {
            FloatVec::F64(values.to_vec())
        }
    }
}

/// One scalar applied across all time; has no time axis of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantTimeVector {
    pub scalar: f64,
    pub unit: String,
    pub is_max_level: bool,
    pub is_zero_one_profile: bool,
    pub reference_period: Option<ReferencePeriod>,
}

impl ConstantTimeVector {
    pub fn get_vector(&self) -> [f64; 1] {
        [self.scalar]
    }

    pub fn is_constant(&self) -> bool {
        true
    }
}

impl HasFingerprint for ConstantTimeVector {
    fn get_fingerprint(&self) -> Fingerprint {
        fingerprint_of_fields(&[
            FieldValue::from("ConstantTimeVector"),
            FieldValue::Float(self.scalar),
            FieldValue::from(self.unit.as_str()),
            FieldValue::Bool(self.is_max_level),
            FieldValue::Bool(self.is_zero_one_profile),
            match self.reference_period {
                Some(rp) => FieldValue::from(fingerprint_of_fields(&[
                    FieldValue::Int(rp.start_year as i64),
                    FieldValue::Int(rp.num_years as i64),
                ])),
                None => FieldValue::None,
            },
        ])
    }
}

/// Values paired with an explicit [`TimeIndex`]; `values.len() == timeindex.num_periods()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListTimeVector {
    pub timeindex: TimeIndex,
    pub values: Vec<f64>,
    pub unit: String,
    pub is_max_level: bool,
    pub is_zero_one_profile: bool,
}

impl ListTimeVector {
    pub fn new(timeindex: TimeIndex, values: Vec<f64>, unit: impl Into<String>, is_max_level: bool, is_zero_one_profile: bool) -> Self {
        assert_eq!(
            Some(values.len()),
            timeindex.num_periods(),
            "len(values) must equal timeindex.num_periods()"
        );
        ListTimeVector {
            timeindex,
            values,
            unit: unit.into(),
            is_max_level,
            is_zero_one_profile,
        }
    }

    pub fn get_vector(&self) -> &[f64] {
        &self.values
    }

    pub fn is_constant(&self) -> bool {
        false
    }
}

impl HasFingerprint for ListTimeVector {
    fn get_fingerprint(&self) -> Fingerprint {
        let mut fields = vec![
            FieldValue::from("ListTimeVector"),
            FieldValue::from(self.timeindex.get_fingerprint()),
        ];
        fields.extend(self.values.iter().map(|v| FieldValue::Float(*v)));
        fields.push(FieldValue::from(self.unit.as_str()));
        fields.push(FieldValue::Bool(self.is_max_level));
        fields.push(FieldValue::Bool(self.is_zero_one_profile));
        fingerprint_of_fields(&fields)
    }
}

/// Values fetched lazily from a shared [`Loader`] collaborator, identified by `vector_id`.
#[derive(Clone)]
pub struct LoadedTimeVector {
    pub vector_id: String,
    pub loader: Rc<dyn Loader>,
}

impl LoadedTimeVector {
    pub fn get_vector(&self) -> Result<Vec<f64>, TimeVectorError> {
        self.loader.get_values(&self.vector_id)
    }

    pub fn get_timeindex(&self) -> Result<TimeIndex, TimeVectorError> {
        self.loader.get_index(&self.vector_id)
    }

    pub fn is_constant(&self) -> bool {
        false
    }
}

impl HasFingerprint for LoadedTimeVector {
    fn get_fingerprint(&self) -> Fingerprint {
        fingerprint_of_fields(&[
            FieldValue::from("LoadedTimeVector"),
            FieldValue::from(self.vector_id.as_str()),
            FieldValue::from(self.loader.get_fingerprint()),
        ])
    }
}

/// Unifies the three time-vector kinds for storage in [`Model`] (§3).
#[derive(Clone)]
pub enum TimeVector {
    Constant(ConstantTimeVector),
    List(ListTimeVector),
    Loaded(LoadedTimeVector),
}

impl TimeVector {
    pub fn get_unit(&self) -> Option<&str> {
        match self {
            TimeVector::Constant(c) => Some(&c.unit),
            TimeVector::List(l) => Some(&l.unit),
            TimeVector::Loaded(_) => None,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, TimeVector::Constant(_))
    }

    /// §4.4: `get_timeindex() -> index`, resolved through the `Loaded` variant's
    /// loader when necessary.
    pub fn get_timeindex(&self) -> Result<TimeIndex, TimeVectorError> {
        match self {
            TimeVector::Constant(_) => Ok(TimeIndex::Constant),
            TimeVector::List(l) => Ok(l.timeindex.clone()),
            TimeVector::Loaded(l) => l.get_timeindex(),
        }
    }

    fn raw_values(&self) -> Result<Vec<f64>, TimeVectorError> {
        match self {
            TimeVector::Constant(c) => Ok(c.get_vector().to_vec()),
            TimeVector::List(l) => Ok(l.get_vector().to_vec()),
            TimeVector::Loaded(l) => l.get_vector(),
        }
    }

    /// §4.4: `get_vector(as_float32) -> numeric array`.
    pub fn get_vector(&self, as_float32: bool) -> Result<FloatVec, TimeVectorError> {
        Ok(FloatVec::of(&self.raw_values()?, as_float32))
    }

    /// §4.4/§6: delegates the projection onto `self`'s own index, matching
    /// `TimeIndex::write_into_fixed_frequency`'s dispatch (§4.2 cases 1-6).
    #[allow(clippy::too_many_arguments)]
    pub fn write_into_fixed_frequency(
        &self,
        target_start: Fixed,
        target_period: crate::common::duration::PeriodDuration,
        target_num_periods: usize,
        target_is_52_week_years: bool,
        target_extrapolate_first: bool,
        target_extrapolate_last: bool,
    ) -> Result<Vec<f64>, TimeVectorError> {
        let index = self.get_timeindex()?;
        let values = self.raw_values()?;
        index.write_into_fixed_frequency(
            &values,
            target_start,
            target_period,
            target_num_periods,
            target_is_52_week_years,
            target_extrapolate_first,
            target_extrapolate_last,
        )
    }
}

impl HasFingerprint for TimeVector {
    fn get_fingerprint(&self) -> Fingerprint {
        match self {
            TimeVector::Constant(c) => c.get_fingerprint(),
            TimeVector::List(l) => l.get_fingerprint(),
            TimeVector::Loaded(l) => l.get_fingerprint(),
        }
    }
}

/// A shared source of ids, values and time indexes (§6). `clear_cache` takes
/// `&self`; implementors are expected to hold their cache behind interior
/// mutability, since loaders are referenced by many vectors at once (§9).
pub trait Loader: HasFingerprint {
    /// The loader's own id list, without uniqueness enforced — see [`Loader::get_ids`].
    fn raw_ids(&self) -> Vec<String>;
    fn get_values(&self, id: &str) -> Result<Vec<f64>, TimeVectorError>;
    fn get_index(&self, id: &str) -> Result<TimeIndex, TimeVectorError>;
    fn get_source(&self) -> String;
    fn clear_cache(&self);

    /// Ids must be unique within a loader; duplicates raise [`TimeVectorError::DuplicateId`].
    fn get_ids(&self) -> Result<BTreeSet<String>, TimeVectorError> {
        let mut ids = BTreeSet::new();
        for id in self.raw_ids() {
            if !ids.insert(id.clone()) {
                return Err(TimeVectorError::DuplicateId {
                    id,
                    sources: vec![self.get_source()],
                });
            }
        }
        Ok(ids)
    }
}

/// Registers `(id, source)` pairs into a [`Model`], reporting every source that
/// supplied a conflicting id (§6).
pub trait Populator {
    fn populate(&mut self, model: &mut Model) -> Result<(), TimeVectorError>;
}

/// Checks a batch of `(id, source)` pairs for cross-source duplicates, in the
/// spirit of the Python original's populator validation: every id's full list
/// of conflicting sources is reported, not just the first collision.
pub fn check_duplicate_ids(pairs: &[(String, String)]) -> Result<(), TimeVectorError> {
    let mut sources_by_id: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (id, source) in pairs {
        sources_by_id.entry(id.as_str()).or_default().push(source.as_str());
    }
    for (id, sources) in sources_by_id {
        if sources.len() > 1 {
            return Err(TimeVectorError::DuplicateId {
                id: id.to_string(),
                sources: sources.into_iter().map(str::to_string).collect(),
            });
        }
    }
    Ok(())
}

/// Storable, fingerprintable component — full taxonomy/evaluation out of scope (§1).
pub trait Component: HasFingerprint {}
/// Storable, fingerprintable curve.
pub trait Curve: HasFingerprint {}
/// Storable, fingerprintable expression.
pub trait Expr: HasFingerprint {}

/// Anything [`Model`] can store behind a key.
#[derive(Clone)]
pub enum StoredValue {
    Component(Rc<dyn Component>),
    TimeVector(TimeVector),
    Curve(Rc<dyn Curve>),
    Expr(Rc<dyn Expr>),
}

/// Counts of stored entries per concept, mirroring the Python original's
/// `get_content_counts` grouping (without its per-type-name breakdown, which
/// belongs to the component taxonomy this crate leaves out of scope).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentCounts {
    pub components: usize,
    pub timevectors: usize,
    pub curves: usize,
    pub expressions: usize,
    pub aggregators: usize,
}

/// A value container keyed by string id, storing `Component | TimeVector | Curve | Expr`
/// values (§6). `add`/`get` work by `Clone` rather than Python's `deepcopy`: Rust's
/// ownership model already prevents a caller from mutating the stored value through
/// a returned handle (§9 "Deep-copy on every model access").
#[derive(Default)]
pub struct Model {
    data: BTreeMap<String, StoredValue>,
    aggregators: Vec<Box<dyn FnOnce(&mut Model)>>,
}

impl Model {
    pub fn new() -> Self {
        Model {
            data: BTreeMap::new(),
            aggregators: Vec::new(),
        }
    }

    fn insert(&mut self, key: &str, value: StoredValue, overwrite: bool) -> Result<(), TimeVectorError> {
        assert!(!key.is_empty(), "Invalid key name");
        if !overwrite && self.data.contains_key(key) {
            return Err(TimeVectorError::InvalidConfiguration(format!(
                "Key {key} is already used to store an object."
            )));
        }
        self.data.insert(key.to_string(), value);
        Ok(())
    }

    pub fn add_component(&mut self, key: &str, value: Rc<dyn Component>, overwrite: bool) -> Result<(), TimeVectorError> {
        self.insert(key, StoredValue::Component(value), overwrite)
    }

    pub fn add_timevector(&mut self, key: &str, value: TimeVector, overwrite: bool) -> Result<(), TimeVectorError> {
        self.insert(key, StoredValue::TimeVector(value), overwrite)
    }

    pub fn add_curve(&mut self, key: &str, value: Rc<dyn Curve>, overwrite: bool) -> Result<(), TimeVectorError> {
        self.insert(key, StoredValue::Curve(value), overwrite)
    }

    pub fn add_expr(&mut self, key: &str, value: Rc<dyn Expr>, overwrite: bool) -> Result<(), TimeVectorError> {
        self.insert(key, StoredValue::Expr(value), overwrite)
    }

    /// Gets a clone of whatever is stored behind `key`, regardless of kind.
    pub fn get(&self, key: &str) -> Result<StoredValue, TimeVectorError> {
        self.data
            .get(key)
            .cloned()
            .ok_or_else(|| TimeVectorError::MissingKey(key.to_string()))
    }

    pub fn get_timevector(&self, key: &str) -> Result<TimeVector, TimeVectorError> {
        match self.data.get(key) {
            Some(StoredValue::TimeVector(tv)) => Ok(tv.clone()),
            Some(_) => Err(TimeVectorError::InvalidConfiguration(format!(
                "Key {key} does not hold a TimeVector."
            ))),
            None => Err(TimeVectorError::MissingKey(key.to_string())),
        }
    }

    /// Read-only view of the internal store. Modify what comes out of this with
    /// care — it is borrowed, not deep-copied (unlike [`Model::get`]).
    pub fn get_data(&self) -> &BTreeMap<String, StoredValue> {
        &self.data
    }

    pub fn delete(&mut self, key: &str) -> Result<(), TimeVectorError> {
        self.data
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| TimeVectorError::MissingKey(key.to_string()))
    }

    /// Registers an undo action to be run, LIFO, by the next [`Model::disaggregate`] call.
    pub fn push_aggregator(&mut self, undo: impl FnOnce(&mut Model) + 'static) {
        self.aggregators.push(Box::new(undo));
    }

    /// Undoes all aggregations in LIFO order.
    pub fn disaggregate(&mut self) {
        while let Some(undo) = self.aggregators.pop() {
            undo(self);
        }
    }

    pub fn get_content_counts(&self) -> ContentCounts {
        let mut counts = ContentCounts {
            aggregators: self.aggregators.len(),
            ..Default::default()
        };
        for value in self.data.values() {
            match value {
                StoredValue::Component(_) => counts.components += 1,
                StoredValue::TimeVector(_) => counts.timevectors += 1,
                StoredValue::Curve(_) => counts.curves += 1,
                StoredValue::Expr(_) => counts.expressions += 1,
            }
        }
        counts
    }

    /// All loaders referenced by stored `LoadedTimeVector`s, deduplicated by identity.
    pub fn get_loaders(&self) -> Vec<Rc<dyn Loader>> {
        let mut out: Vec<Rc<dyn Loader>> = Vec::new();
        for value in self.data.values() {
            if let StoredValue::TimeVector(TimeVector::Loaded(l)) = value {
                if !out.iter().any(|existing| Rc::ptr_eq(existing, &l.loader)) {
                    out.push(l.loader.clone());
                }
            }
        }
        out
    }

    pub fn clear_caches(&self) {
        for loader in self.get_loaders() {
            loader.clear_cache();
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_duplicate_key_without_overwrite() {
        let mut model = Model::new();
        let cv = TimeVector::Constant(ConstantTimeVector {
            scalar: 1.0,
            unit: "MW".to_string(),
            is_max_level: false,
            is_zero_one_profile: false,
            reference_period: None,
        });
        model.add_timevector("a", cv.clone(), false).unwrap();
        assert!(model.add_timevector("a", cv.clone(), false).is_err());
        assert!(model.add_timevector("a", cv, true).is_ok());
    }

    #[test]
    fn get_missing_key_errors() {
        let model = Model::new();
        assert!(matches!(
            model.get_timevector("missing"),
            Err(TimeVectorError::MissingKey(_))
        ));
    }

    #[test]
    fn delete_then_get_errors() {
        let mut model = Model::new();
        let cv = TimeVector::Constant(ConstantTimeVector {
            scalar: 1.0,
            unit: "MW".to_string(),
            is_max_level: false,
            is_zero_one_profile: false,
            reference_period: None,
        });
        model.add_timevector("a", cv, false).unwrap();
        model.delete("a").unwrap();
        assert!(model.get_timevector("a").is_err());
    }

    #[test]
    fn disaggregate_runs_undo_actions_lifo() {
        let mut model = Model::new();
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let order1 = order.clone();
        let order2 = order.clone();
        model.push_aggregator(move |_| order1.borrow_mut().push(1));
        model.push_aggregator(move |_| order2.borrow_mut().push(2));
        model.disaggregate();
        assert_eq!(*order.borrow(), vec![2, 1]);
    }

    #[test]
    fn content_counts_tally_timevectors() {
        let mut model = Model::new();
        let cv = TimeVector::Constant(ConstantTimeVector {
            scalar: 1.0,
            unit: "MW".to_string(),
            is_max_level: false,
            is_zero_one_profile: false,
            reference_period: None,
        });
        model.add_timevector("a", cv, false).unwrap();
        let counts = model.get_content_counts();
        assert_eq!(counts.timevectors, 1);
        assert_eq!(counts.components, 0);
    }

    #[test]
    fn duplicate_ids_report_all_sources() {
        let pairs = vec![
            ("a".to_string(), "source1".to_string()),
            ("b".to_string(), "source1".to_string()),
            ("a".to_string(), "source2".to_string()),
        ];
        match check_duplicate_ids(&pairs) {
            Err(TimeVectorError::DuplicateId { id, sources }) => {
                assert_eq!(id, "a");
                assert_eq!(sources, vec!["source1".to_string(), "source2".to_string()]);
            }
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn get_data_and_generic_get_see_the_same_store() {
        let mut model = Model::new();
        let cv = TimeVector::Constant(ConstantTimeVector {
            scalar: 1.0,
            unit: "MW".to_string(),
            is_max_level: false,
            is_zero_one_profile: false,
            reference_period: None,
        });
        model.add_timevector("a", cv, false).unwrap();
        assert_eq!(model.get_data().len(), 1);
        assert!(matches!(model.get("a"), Ok(StoredValue::TimeVector(_))));
        assert!(matches!(model.get("missing"), Err(TimeVectorError::MissingKey(_))));
    }

    #[test]
    fn constant_timevector_projects_and_casts_to_f32() {
        use crate::calendar::ISO;
        use crate::common::duration::PeriodDuration;
        use crate::day_count::ToFixed;
        use crate::day_cycle::Weekday;

        let tv = TimeVector::Constant(ConstantTimeVector {
            scalar: 42.0,
            unit: "MW".to_string(),
            is_max_level: true,
            is_zero_one_profile: false,
            reference_period: None,
        });
        assert!(matches!(tv.get_timeindex(), Ok(TimeIndex::Constant)));
        assert!(matches!(tv.get_vector(false), Ok(FloatVec::F64(v)) if v == vec![42.0]));
        assert!(matches!(tv.get_vector(true), Ok(FloatVec::F32(v)) if v == vec![42.0f32]));

        let start = ISO::try_new(2020, 1, Weekday::Monday).unwrap().to_fixed();
        let out = tv
            .write_into_fixed_frequency(start, PeriodDuration::from_days(1), 5, true, false, false)
            .unwrap();
        assert_eq!(out, vec![42.0; 5]);
    }

    #[test]
    fn fingerprint_scenario_six() {
        // spec.md §8 scenario 6
        let a = ConstantTimeVector {
            scalar: 100.0,
            unit: "MW".to_string(),
            is_max_level: true,
            is_zero_one_profile: false,
            reference_period: None,
        };
        let b = a.clone();
        assert_eq!(a.get_fingerprint().get_hash(), b.get_fingerprint().get_hash());

        let mut c = a.clone();
        c.unit = "GW".to_string();
        assert_ne!(a.get_fingerprint().get_hash(), c.get_fingerprint().get_hash());
    }
}
