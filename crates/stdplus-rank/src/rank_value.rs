//! The comparable surrogate a value ranks to.

use crate::value::Key;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Result of ranking a value.
///
/// Scalars compare the way a loosely-typed host compares them: numbers
/// numerically (mixing integers and floats), strings byte-wise, and a
/// number against a string numerically when the string is numeric. A
/// composite is greater than any scalar.
///
/// ```
/// use stdplus_rank::RankValue;
///
/// assert!(RankValue::Integer(2) < RankValue::Float(2.5));
/// assert!(RankValue::from("apple") < RankValue::from("banana"));
/// assert!(RankValue::Integer(10) > RankValue::from("9"));
/// assert_eq!(RankValue::Integer(3), RankValue::Float(3.0));
/// ```
#[derive(Debug, Clone)]
pub enum RankValue {
    Integer(i64),
    Float(f64),
    String(String),
    Composite(Composite),
}

/// Ordered key/rank entries produced by ranking an array or object.
#[derive(Debug, Clone, Default)]
pub struct Composite {
    entries: Vec<(Key, RankValue)>,
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: Key, value: RankValue) {
        self.entries.push((key, value));
    }

    pub fn get(&self, key: &Key) -> Option<&RankValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &RankValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl FromIterator<(Key, RankValue)> for Composite {
    fn from_iter<I: IntoIterator<Item = (Key, RankValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<i64> for RankValue {
    fn from(i: i64) -> Self {
        RankValue::Integer(i)
    }
}

impl From<f64> for RankValue {
    fn from(f: f64) -> Self {
        RankValue::Float(f)
    }
}

impl From<&str> for RankValue {
    fn from(s: &str) -> Self {
        RankValue::String(s.to_string())
    }
}

impl From<String> for RankValue {
    fn from(s: String) -> Self {
        RankValue::String(s)
    }
}

impl From<Composite> for RankValue {
    fn from(c: Composite) -> Self {
        RankValue::Composite(c)
    }
}

impl RankValue {
    pub fn is_composite(&self) -> bool {
        matches!(self, RankValue::Composite(_))
    }
}

// ── Ordering ─────────────────────────────────────────────────────────

/// Parse a numeric string: optional sign, digits with an optional fraction,
/// optional exponent, surrounded by optional ASCII whitespace.
fn numeric(s: &str) -> Option<f64> {
    let t = s.trim_matches(|c: char| c.is_ascii_whitespace());
    let bytes = t.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }
    if digits == 0 {
        return None;
    }
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return None;
        }
    }
    if i != bytes.len() {
        return None;
    }
    t.parse().ok()
}

/// 2^63, the first float past `i64::MAX`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    let ord = (i as f64).partial_cmp(&f)?;
    // Large integers lose precision as f64; break the tie exactly.
    if ord == Ordering::Equal && f.fract() == 0.0 && (-I64_LIMIT..I64_LIMIT).contains(&f) {
        return Some(i.cmp(&(f as i64)));
    }
    Some(ord)
}

fn cmp_number_str(n: &RankValue, s: &str) -> Option<Ordering> {
    match (n, numeric(s)) {
        (RankValue::Integer(i), Some(f)) => cmp_int_float(*i, f),
        (RankValue::Float(a), Some(f)) => a.partial_cmp(&f),
        (RankValue::Integer(i), None) => Some(i.to_string().as_str().cmp(s)),
        (RankValue::Float(a), None) => Some(a.to_string().as_str().cmp(s)),
        _ => None,
    }
}

fn cmp_composite(a: &Composite, b: &Composite) -> Option<Ordering> {
    if a.len() != b.len() {
        return Some(a.len().cmp(&b.len()));
    }
    for (key, left) in a.iter() {
        let right = b.get(key)?;
        match left.partial_cmp(right)? {
            Ordering::Equal => continue,
            ord => return Some(ord),
        }
    }
    Some(Ordering::Equal)
}

impl PartialOrd for RankValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use RankValue as R;
        match (self, other) {
            (R::Integer(a), R::Integer(b)) => Some(a.cmp(b)),
            (R::Float(a), R::Float(b)) => a.partial_cmp(b),
            (R::Integer(a), R::Float(b)) => cmp_int_float(*a, *b),
            (R::Float(a), R::Integer(b)) => cmp_int_float(*b, *a).map(Ordering::reverse),
            (R::String(a), R::String(b)) => Some(a.as_bytes().cmp(b.as_bytes())),
            (n @ (R::Integer(_) | R::Float(_)), R::String(s)) => cmp_number_str(n, s),
            (R::String(s), n @ (R::Integer(_) | R::Float(_))) => {
                cmp_number_str(n, s).map(Ordering::reverse)
            }
            (R::Composite(a), R::Composite(b)) => cmp_composite(a, b),
            (R::Composite(_), _) => Some(Ordering::Greater),
            (_, R::Composite(_)) => Some(Ordering::Less),
        }
    }
}

impl PartialEq for RankValue {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

// ── Display / Serialize ──────────────────────────────────────────────

impl fmt::Display for RankValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankValue::Integer(i) => write!(f, "{}", i),
            RankValue::Float(x) => write!(f, "{}", x),
            RankValue::String(s) => write!(f, "{:?}", s),
            RankValue::Composite(c) => {
                write!(f, "[")?;
                for (n, (k, v)) in c.iter().enumerate() {
                    if n > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} => {}", k, v)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Key::Index(i) => serializer.serialize_i64(*i),
            Key::Name(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for Composite {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl Serialize for RankValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RankValue::Integer(i) => serializer.serialize_i64(*i),
            RankValue::Float(f) => serializer.serialize_f64(*f),
            RankValue::String(s) => serializer.serialize_str(s),
            RankValue::Composite(c) => c.serialize(serializer),
        }
    }
}
