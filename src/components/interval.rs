//! Ranges over instants and over dates.

use core::fmt;

use crate::components::{Instant, LocalDate};
use crate::{ChronalError, ChronalResult};

/// A half-open `[start, end)` range of instants. Either endpoint may be
/// absent, meaning the range extends to the corresponding end of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start: Option<Instant>,
    end: Option<Instant>,
}

impl Interval {
    /// Creates an interval; a `None` endpoint is unbounded. A bounded
    /// start must not come after a bounded end.
    pub fn new(start: Option<Instant>, end: Option<Instant>) -> ChronalResult<Self> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(ChronalError::invariant()
                    .with_message("interval start must not come after its end."));
            }
        }
        Ok(Self { start, end })
    }

    /// The interval covering the whole timeline.
    #[must_use]
    pub const fn whole_timeline() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// The inclusive start, or `None` for the start of time.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> Option<Instant> {
        self.start
    }

    /// The exclusive end, or `None` for the end of time.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> Option<Instant> {
        self.end
    }

    /// Whether the interval has a bounded start.
    #[must_use]
    pub const fn has_start(&self) -> bool {
        self.start.is_some()
    }

    /// Whether the interval has a bounded end.
    #[must_use]
    pub const fn has_end(&self) -> bool {
        self.end.is_some()
    }

    /// Whether the instant lies within `[start, end)`.
    #[must_use]
    pub fn contains(&self, instant: Instant) -> bool {
        self.start.is_none_or(|start| start <= instant)
            && self.end.is_none_or(|end| instant < end)
    }

    /// The elapsed time covered, when both endpoints are bounded.
    #[must_use]
    pub fn duration(&self) -> Option<crate::components::Duration> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start {
            Some(start) => write!(f, "[{start}, ")?,
            None => f.write_str("(-\u{221e}, ")?,
        }
        match self.end {
            Some(end) => write!(f, "{end})"),
            None => f.write_str("+\u{221e})"),
        }
    }
}

/// An inclusive range of dates within a single calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateInterval {
    start: LocalDate,
    end: LocalDate,
}

impl DateInterval {
    /// Creates an interval from inclusive endpoints. The dates must
    /// share a calendar and be in order.
    pub fn new(start: LocalDate, end: LocalDate) -> ChronalResult<Self> {
        match start.compare_to(&end)? {
            core::cmp::Ordering::Greater => Err(ChronalError::invariant()
                .with_message("date interval start must not come after its end.")),
            _ => Ok(Self { start, end }),
        }
    }

    /// The inclusive start date.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> LocalDate {
        self.start
    }

    /// The inclusive end date.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> LocalDate {
        self.end
    }

    /// The number of dates covered, end inclusive.
    #[must_use]
    pub fn length(&self) -> i64 {
        i64::from(self.end.days_since_epoch()) - i64::from(self.start.days_since_epoch()) + 1
    }

    /// Whether the date lies within the interval. Fails when the date
    /// uses a different calendar.
    pub fn contains(&self, date: &LocalDate) -> ChronalResult<bool> {
        let after_start = self.start.compare_to(date)? != core::cmp::Ordering::Greater;
        let before_end = date.compare_to(&self.end)? != core::cmp::Ordering::Greater;
        Ok(after_start && before_end)
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
