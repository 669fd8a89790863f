//! Calendar-aware spans and repeating span sequences.
//!
//! A [`TimeSpan`] mixes calendar units (years, months, days) with an exact
//! [`TimeDelta`]. Its length in seconds depends on the instant it is applied
//! to: one month from January 31st is not one month from February 1st.

use chrono::{DateTime, Days, FixedOffset, Months, TimeDelta, TimeZone};

/// A span of calendar time.
///
/// Calendar parts are applied largest first (months, then days), followed
/// by the exact `time` delta. An inverted span moves backwards.
///
/// ```
/// use chrono::{DateTime, TimeDelta};
/// use stdplus_rank::TimeSpan;
///
/// let start = DateTime::parse_from_rfc3339("2026-01-31T00:00:00Z").unwrap();
/// let span = TimeSpan::new().months(1).with_time(TimeDelta::hours(6));
/// let end = span.add_to(&start).unwrap();
/// assert_eq!(end.to_rfc3339(), "2026-02-28T06:00:00+00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
    pub years: u32,
    pub months: u32,
    pub days: u64,
    pub time: TimeDelta,
    pub inverted: bool,
}

impl Default for TimeSpan {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSpan {
    /// The empty span.
    pub fn new() -> Self {
        Self {
            years: 0,
            months: 0,
            days: 0,
            time: TimeDelta::zero(),
            inverted: false,
        }
    }

    pub fn years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    pub fn months(mut self, months: u32) -> Self {
        self.months = months;
        self
    }

    pub fn days(mut self, days: u64) -> Self {
        self.days = days;
        self
    }

    pub fn with_time(mut self, time: TimeDelta) -> Self {
        self.time = time;
        self
    }

    /// Flip the direction of the span.
    pub fn inverted(mut self) -> Self {
        self.inverted = !self.inverted;
        self
    }

    fn total_months(&self) -> Option<Months> {
        let months = self.years.checked_mul(12)?.checked_add(self.months)?;
        Some(Months::new(months))
    }

    /// Apply the span to `instant`. `None` if the result leaves chrono's
    /// representable range.
    pub fn add_to<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let months = self.total_months()?;
        let days = Days::new(self.days);
        if self.inverted {
            instant
                .clone()
                .checked_sub_months(months)?
                .checked_sub_days(days)?
                .checked_sub_signed(self.time)
        } else {
            instant
                .clone()
                .checked_add_months(months)?
                .checked_add_days(days)?
                .checked_add_signed(self.time)
        }
    }
}

impl From<TimeDelta> for TimeSpan {
    fn from(delta: TimeDelta) -> Self {
        TimeSpan::new().with_time(delta)
    }
}

/// Where a [`Period`] stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodEnd {
    /// Produce instants strictly before this one.
    Until(DateTime<FixedOffset>),
    /// Produce this many instants after the start.
    Recurrences(u32),
}

/// A repeating sequence of instants: `start`, `start + interval`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: DateTime<FixedOffset>,
    pub interval: TimeSpan,
    pub end: PeriodEnd,
    pub include_start: bool,
}

impl Period {
    pub fn until(
        start: DateTime<FixedOffset>,
        interval: TimeSpan,
        end: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            start,
            interval,
            end: PeriodEnd::Until(end),
            include_start: true,
        }
    }

    pub fn recurrences(start: DateTime<FixedOffset>, interval: TimeSpan, count: u32) -> Self {
        Self {
            start,
            interval,
            end: PeriodEnd::Recurrences(count),
            include_start: true,
        }
    }

    /// Skip `start` itself; the sequence begins one interval later.
    pub fn excluding_start(mut self) -> Self {
        self.include_start = false;
        self
    }

    /// The first instant the sequence produces, or `None` when it is empty.
    pub fn first(&self) -> Option<DateTime<FixedOffset>> {
        let candidate = if self.include_start {
            self.start
        } else {
            self.interval.add_to(&self.start)?
        };

        match self.end {
            PeriodEnd::Until(end) => (candidate < end).then_some(candidate),
            PeriodEnd::Recurrences(count) => {
                (self.include_start || count > 0).then_some(candidate)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_span_add_calendar_month() {
        let span = TimeSpan::new().months(1);
        assert_eq!(
            span.add_to(&at("2026-01-15T00:00:00Z")).unwrap(),
            at("2026-02-15T00:00:00Z")
        );
        // Month arithmetic clamps to the last day.
        assert_eq!(
            span.add_to(&at("2026-01-31T00:00:00Z")).unwrap(),
            at("2026-02-28T00:00:00Z")
        );
    }

    #[test]
    fn test_span_years_and_days() {
        let span = TimeSpan::new().years(1).days(2);
        assert_eq!(
            span.add_to(&at("2024-02-29T12:00:00Z")).unwrap(),
            at("2025-03-02T12:00:00Z")
        );
    }

    #[test]
    fn test_span_inverted() {
        let span = TimeSpan::new().days(1).with_time(TimeDelta::hours(1)).inverted();
        assert_eq!(
            span.add_to(&at("2026-03-02T00:00:00Z")).unwrap(),
            at("2026-02-28T23:00:00Z")
        );
    }

    #[test]
    fn test_span_overflow() {
        let span = TimeSpan::new().years(u32::MAX);
        assert!(span.add_to(&at("2026-01-01T00:00:00Z")).is_none());
    }

    #[test]
    fn test_span_from_delta() {
        let span = TimeSpan::from(TimeDelta::minutes(90));
        assert_eq!(span.time, TimeDelta::minutes(90));
        assert_eq!(span.months, 0);
    }

    #[test]
    fn test_period_until_first() {
        let p = Period::until(
            at("2026-01-01T00:00:00Z"),
            TimeSpan::new().days(1),
            at("2026-01-05T00:00:00Z"),
        );
        assert_eq!(p.first(), Some(at("2026-01-01T00:00:00Z")));
        assert_eq!(
            p.excluding_start().first(),
            Some(at("2026-01-02T00:00:00Z"))
        );
    }

    #[test]
    fn test_period_until_empty() {
        let p = Period::until(
            at("2026-01-05T00:00:00Z"),
            TimeSpan::new().days(1),
            at("2026-01-05T00:00:00Z"),
        );
        assert_eq!(p.first(), None);

        let short = Period::until(
            at("2026-01-01T00:00:00Z"),
            TimeSpan::new().days(7),
            at("2026-01-03T00:00:00Z"),
        )
        .excluding_start();
        assert_eq!(short.first(), None);
    }

    #[test]
    fn test_period_recurrences() {
        let start = at("2026-01-01T00:00:00Z");
        let p = Period::recurrences(start, TimeSpan::new().months(1), 0);
        assert_eq!(p.first(), Some(start));
        assert_eq!(p.excluding_start().first(), None);

        let p = Period::recurrences(start, TimeSpan::new().months(1), 3).excluding_start();
        assert_eq!(p.first(), Some(at("2026-02-01T00:00:00Z")));
    }
}
