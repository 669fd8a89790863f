//! Rank dispatch and extremum selection.

use crate::error::{RankError, Result};
use crate::rank_value::{Composite, RankValue};
use crate::time::TimeSpan;
use crate::value::{Key, Object, Scalar, Value};
use chrono::{DateTime, TimeZone, Utc};
use std::cmp::Ordering;

/// Maps values to [`RankValue`]s.
///
/// The only configuration is the reference instant spans are measured
/// from. Left unset, every span is measured from a fresh `Utc::now()`.
///
/// Span ranks are an approximation: a span is applied to the reference
/// instant and the elapsed seconds are returned, so calendar units depend
/// on where the reference falls. One month ranks as 31 days in January and
/// as 28 days in a non-leap February.
///
/// ```
/// use chrono::DateTime;
/// use stdplus_rank::{RankValue, Ranker, TimeSpan, Value};
///
/// let jan = DateTime::parse_from_rfc3339("2026-01-10T00:00:00Z").unwrap();
/// let ranker = Ranker::new().with_reference(jan);
/// let month = Value::from(TimeSpan::new().months(1));
/// assert_eq!(ranker.rank(&month).unwrap(), RankValue::Float(31.0 * 86_400.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    reference: Option<DateTime<Utc>>,
}

impl Ranker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure spans from `instant` instead of the current time.
    pub fn with_reference<Tz: TimeZone>(mut self, instant: DateTime<Tz>) -> Self {
        self.reference = Some(instant.with_timezone(&Utc));
        self
    }

    /// The instant spans are measured from.
    pub fn reference(&self) -> DateTime<Utc> {
        self.reference.unwrap_or_else(Utc::now)
    }

    /// Rank a value.
    ///
    /// Rules apply in a fixed order and the first that matches wins:
    ///
    /// | value | rank |
    /// |---|---|
    /// | null, `false` | `Integer(0)` |
    /// | `true` | `Integer(1)` |
    /// | int, float, string | itself |
    /// | backed enum case | its scalar |
    /// | unit enum case | its name |
    /// | instant | `Float` Unix seconds with microseconds |
    /// | span | `Float` seconds elapsed from the reference |
    /// | period | rank of its first instant |
    /// | object with `render` | the rendered string |
    /// | object with `count` | the count |
    /// | array | composite of ranked entries |
    /// | object with `fields` | composite of ranked fields |
    ///
    /// Anything else fails with [`RankError::UnsupportedValueKind`].
    pub fn rank(&self, value: &Value) -> Result<RankValue> {
        self.dispatch(value).inspect_err(|err| {
            tracing::debug!(kind = value.type_name(), error = %err, "Value cannot be ranked");
        })
    }

    fn dispatch(&self, value: &Value) -> Result<RankValue> {
        let (rule, ranked) = self.apply(value);
        tracing::trace!(kind = value.type_name(), ?rule, "Ranked value");
        ranked
    }

    fn apply(&self, value: &Value) -> (Rule, Result<RankValue>) {
        match value {
            Value::Null | Value::Bool(false) => (Rule::Falsy, Ok(RankValue::Integer(0))),
            Value::Bool(true) => (Rule::True, Ok(RankValue::Integer(1))),
            Value::Int(i) => (Rule::Scalar, Ok(RankValue::Integer(*i))),
            Value::Float(f) => (Rule::Scalar, Ok(RankValue::Float(*f))),
            Value::String(s) => (Rule::Scalar, Ok(RankValue::String(s.clone()))),
            Value::Enum(case) => match &case.backing {
                Some(Scalar::Int(i)) => (Rule::BackedEnum, Ok(RankValue::Integer(*i))),
                Some(Scalar::String(s)) => {
                    (Rule::BackedEnum, Ok(RankValue::String(s.clone())))
                }
                None => (Rule::UnitEnum, Ok(RankValue::String(case.name.clone()))),
            },
            Value::Instant(dt) => (Rule::Instant, Ok(instant_rank(dt))),
            Value::Span(span) => (Rule::Span, self.span_rank(span)),
            Value::Period(period) => (
                Rule::Period,
                period
                    .first()
                    .map(|dt| instant_rank(&dt))
                    .ok_or(RankError::EmptySequence),
            ),
            Value::Object(object) => self.object_rank(object.as_ref()),
            Value::Array(entries) => (Rule::Array, self.entries_rank(entries)),
            Value::Opaque(name) => (
                Rule::Unsupported,
                Err(RankError::unsupported(name.as_str())),
            ),
        }
    }

    fn span_rank(&self, span: &TimeSpan) -> Result<RankValue> {
        let now = self.reference();
        let later = span.add_to(&now).ok_or(RankError::SpanOutOfRange)?;
        // Two instants at opposite ends of the calendar are further apart
        // than i64 microseconds can hold.
        let micros = later
            .timestamp_micros()
            .checked_sub(now.timestamp_micros())
            .ok_or(RankError::SpanOutOfRange)?;
        Ok(RankValue::Float(micros as f64 / 1_000_000.0))
    }

    fn object_rank(&self, object: &dyn Object) -> (Rule, Result<RankValue>) {
        if let Some(text) = object.render() {
            return (Rule::Stringable, Ok(RankValue::String(text)));
        }
        if let Some(count) = object.count() {
            let count = i64::try_from(count).unwrap_or(i64::MAX);
            return (Rule::Countable, Ok(RankValue::Integer(count)));
        }
        if let Some(fields) = object.fields() {
            return (Rule::Composable, self.entries_rank(&fields));
        }
        (Rule::Unsupported, Err(RankError::unsupported(object.type_name())))
    }

    fn entries_rank(&self, entries: &[(Key, Value)]) -> Result<RankValue> {
        entries
            .iter()
            .map(|(key, value)| self.dispatch(value).map(|ranked| (key.clone(), ranked)))
            .collect::<Result<Composite>>()
            .map(RankValue::Composite)
    }

    /// Compare two values by rank. `None` when the ranks are uncomparable
    /// (a NaN, or composites with different keys).
    pub fn compare(&self, a: &Value, b: &Value) -> Result<Option<Ordering>> {
        Ok(self.rank(a)?.partial_cmp(&self.rank(b)?))
    }

    /// The value with the greatest rank. Ties keep the leftmost value.
    pub fn greatest<'a>(&self, values: &'a [Value]) -> Result<&'a Value> {
        self.extremum(values, Ordering::Greater)
    }

    /// The value with the least rank. Ties keep the leftmost value.
    pub fn least<'a>(&self, values: &'a [Value]) -> Result<&'a Value> {
        self.extremum(values, Ordering::Less)
    }

    fn extremum<'a>(&self, values: &'a [Value], wanted: Ordering) -> Result<&'a Value> {
        let [first, rest @ ..] = values else {
            return Err(RankError::Arity { got: 0 });
        };
        if rest.is_empty() {
            return Err(RankError::Arity { got: 1 });
        }

        let mut carry = first;
        for item in rest {
            if self.rank(item)?.partial_cmp(&self.rank(carry)?) == Some(wanted) {
                carry = item;
            }
        }
        Ok(carry)
    }
}

/// Which dispatch rule matched a value. Reported on trace events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Falsy,
    True,
    Scalar,
    BackedEnum,
    UnitEnum,
    Instant,
    Span,
    Period,
    Stringable,
    Countable,
    Array,
    Composable,
    Unsupported,
}

fn instant_rank<Tz: TimeZone>(dt: &DateTime<Tz>) -> RankValue {
    RankValue::Float(dt.timestamp_micros() as f64 / 1_000_000.0)
}

/// Rank a value, measuring spans from the current time.
///
/// ```
/// use stdplus_rank::{rank, RankValue, Value};
///
/// assert_eq!(rank(&Value::Null).unwrap(), RankValue::Integer(0));
/// assert_eq!(rank(&Value::from("b")).unwrap(), RankValue::from("b"));
/// assert!(rank(&Value::opaque("stream")).is_err());
/// ```
pub fn rank(value: &Value) -> Result<RankValue> {
    Ranker::new().rank(value)
}

/// Compare two values by rank.
pub fn compare(a: &Value, b: &Value) -> Result<Option<Ordering>> {
    Ranker::new().compare(a, b)
}

/// The greatest of at least two values.
///
/// ```
/// use stdplus_rank::{greatest, Value};
///
/// let values = [Value::from(3), Value::from(9.5), Value::from(true)];
/// assert_eq!(greatest(&values).unwrap(), &Value::Float(9.5));
/// assert!(greatest(&values[..1]).is_err());
/// ```
pub fn greatest(values: &[Value]) -> Result<&Value> {
    Ranker::new().greatest(values)
}

/// The least of at least two values.
pub fn least(values: &[Value]) -> Result<&Value> {
    Ranker::new().least(values)
}

/// Variadic [`greatest`](crate::greatest): converts every argument with
/// `Value::from` and returns an owned [`Value`](crate::Value).
///
/// ```
/// use stdplus_rank::{greatest, Value};
///
/// assert_eq!(greatest![4, "10", 7.5].unwrap(), Value::from("10"));
/// ```
#[macro_export]
macro_rules! greatest {
    ($($value:expr),* $(,)?) => {
        $crate::greatest(&[$($crate::Value::from($value)),*]).map(::std::clone::Clone::clone)
    };
}

/// Variadic [`least`](crate::least).
///
/// ```
/// use stdplus_rank::{least, Value};
///
/// assert_eq!(least![4, 2, 2.0].unwrap(), Value::from(2));
/// ```
#[macro_export]
macro_rules! least {
    ($($value:expr),* $(,)?) => {
        $crate::least(&[$($crate::Value::from($value)),*]).map(::std::clone::Clone::clone)
    };
}
