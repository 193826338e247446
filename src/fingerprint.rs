// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Deterministic content hashing for memoization and value equality (C5).
//!
//! Every composite hash is built by declaring its fields, in a fixed order, as
//! [`FieldValue`]s and folding them through [`fingerprint_of_fields`] — never by
//! iterating a `HashMap`, which would make the hash depend on iteration order
//! (§9: "any hashmap-based iteration over fields is a correctness hazard").

use sha1::{Digest, Sha1};
use std::fmt;

/// A stable hex-encoded SHA-1 digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn get_hash(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait HasFingerprint {
    fn get_fingerprint(&self) -> Fingerprint;
}

fn sha1_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// One declared field of a composite value, in the canonical encoding §4.5 specifies:
/// `None` is the literal text `"None"`, primitives are their canonical decimal text,
/// strings hash via SHA-1, and nested fingerprints contribute their own digest.
#[derive(Debug, Clone)]
pub enum FieldValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Nested(Fingerprint),
}

impl FieldValue {
    fn encode(&self) -> String {
        match self {
            FieldValue::None => "None".to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Int(i) => i.to_string(),
            FieldValue::Float(f) => format!("{f}"),
            FieldValue::Str(s) => sha1_hex(s.as_bytes()),
            FieldValue::Nested(fp) => fp.get_hash().to_string(),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}
impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}
impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}
impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Str(s.to_string())
    }
}
impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Str(s)
    }
}
impl From<Fingerprint> for FieldValue {
    fn from(fp: Fingerprint) -> Self {
        FieldValue::Nested(fp)
    }
}
impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(x) => x.into(),
            None => FieldValue::None,
        }
    }
}

/// Hashes a standalone string the way §4.5 requires ("strings hash as SHA-1 hex").
pub fn fingerprint_of_str(s: &str) -> Fingerprint {
    Fingerprint(sha1_hex(s.as_bytes()))
}

/// Hashes a declared, ordered field list: each field's canonical encoding is
/// concatenated (separated, so adjacent fields can never collide across a
/// shared boundary) and the result is hashed with SHA-1.
pub fn fingerprint_of_fields(fields: &[FieldValue]) -> Fingerprint {
    let joined = fields
        .iter()
        .map(FieldValue::encode)
        .collect::<Vec<_>>()
        .join("\u{1f}");
    Fingerprint(sha1_hex(joined.as_bytes()))
}
