use crate::time::{Period, TimeSpan};
use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone};
use std::fmt;
use std::sync::Arc;

// ── Keys and scalars ─────────────────────────────────────────────────

/// Key of a composite entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Name(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Index(i)
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Name(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Name(s)
    }
}

/// The scalar carried by a backed enumeration case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scalar {
    Int(i64),
    String(String),
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

/// One case of an enumeration, with or without a backing scalar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumCase {
    pub name: String,
    pub backing: Option<Scalar>,
}

impl EnumCase {
    /// A case without an associated value. Ranks by its name.
    pub fn unit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            backing: None,
        }
    }

    /// A case carrying `value`. Ranks by the value.
    pub fn backed(name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Self {
            name: name.into(),
            backing: Some(value.into()),
        }
    }
}

// ── Objects ──────────────────────────────────────────────────────────

/// Capabilities a type opts into to become rankable as [`Value::Object`].
///
/// Every capability defaults to "absent". When several are present the
/// ranker prefers [`render`](Object::render), then [`count`](Object::count),
/// then [`fields`](Object::fields). An object with none of them cannot be
/// ranked.
pub trait Object: fmt::Debug + Send + Sync {
    /// Name reported in [`RankError::UnsupportedValueKind`](crate::RankError).
    fn type_name(&self) -> &str;

    /// Text rendering (stringable).
    fn render(&self) -> Option<String> {
        None
    }

    /// Reported size (countable).
    fn count(&self) -> Option<usize> {
        None
    }

    /// Field-name to value mapping (composable).
    fn fields(&self) -> Option<Vec<(Key, Value)>> {
        None
    }
}

// ── Value ────────────────────────────────────────────────────────────

/// Any value the ranker accepts.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Enum(EnumCase),
    Instant(DateTime<FixedOffset>),
    Span(TimeSpan),
    Period(Period),
    /// Ordered key/value entries.
    Array(Vec<(Key, Value)>),
    Object(Arc<dyn Object>),
    /// A host value with no ranking rule (an open handle, a closure, ...).
    Opaque(String),
}

impl Value {
    pub fn object(object: impl Object + 'static) -> Self {
        Value::Object(Arc::new(object))
    }

    pub fn opaque(type_name: impl Into<String>) -> Self {
        Value::Opaque(type_name.into())
    }

    /// Build an array from key/value pairs, keeping their order.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<Key>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Array(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Runtime type name used in diagnostics.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Enum(_) => "enum",
            Value::Instant(_) => "datetime",
            Value::Span(_) => "timespan",
            Value::Period(_) => "period",
            Value::Array(_) => "array",
            Value::Object(o) => o.type_name(),
            Value::Opaque(name) => name,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Enum(a), Value::Enum(b)) => a == b,
            (Value::Instant(a), Value::Instant(b)) => a == b,
            (Value::Span(a), Value::Span(b)) => a == b,
            (Value::Period(a), Value::Period(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            (Value::Opaque(a), Value::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

// ── Conversions ──────────────────────────────────────────────────────

macro_rules! from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(i: $t) -> Self {
                    Value::Int(i64::from(i))
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Key::from(i), v.into()))
                .collect(),
        )
    }
}

impl From<EnumCase> for Value {
    fn from(case: EnumCase) -> Self {
        Value::Enum(case)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(dt: DateTime<Tz>) -> Self {
        Value::Instant(dt.fixed_offset())
    }
}

impl From<TimeSpan> for Value {
    fn from(span: TimeSpan) -> Self {
        Value::Span(span)
    }
}

impl From<TimeDelta> for Value {
    fn from(delta: TimeDelta) -> Self {
        Value::Span(TimeSpan::from(delta))
    }
}

impl From<Period> for Value {
    fn from(period: Period) -> Self {
        Value::Period(period)
    }
}

/// JSON objects become [`Value::Array`] with name keys. `serde_json::Map`
/// is sorted by key, so entries arrive in key order rather than document
/// order.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::from(items),
            Json::Object(map) => Value::map(map),
        }
    }
}
