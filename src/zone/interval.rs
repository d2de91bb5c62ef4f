//! A slice of constant offset within a time zone.

use alloc::sync::Arc;
use core::fmt;

use crate::components::instant::LocalInstant;
use crate::components::{Instant, Offset};
use crate::{ChronalError, ChronalResult};

/// A maximal half-open `[start, end)` range of instants throughout
/// which a zone applies a single wall offset, a single standard offset
/// and a single name.
///
/// The first interval of a zone may be unbounded at the start and the
/// last unbounded at the end; internally the unbounded edges are
/// carried as sentinels just beyond the timeline so that interval
/// comparisons need no special cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneInterval {
    name: Arc<str>,
    raw_start: Instant,
    raw_end: Instant,
    wall_offset: Offset,
    standard_offset: Offset,
}

impl ZoneInterval {
    /// Creates an interval. A `None` endpoint is unbounded; a bounded
    /// start must precede a bounded end, and the daylight savings
    /// (wall minus standard) must itself be a representable offset.
    pub fn new(
        name: &str,
        start: Option<Instant>,
        end: Option<Instant>,
        wall_offset: Offset,
        standard_offset: Offset,
    ) -> ChronalResult<Self> {
        let raw_start = start.unwrap_or(Instant::BEFORE_MIN);
        let raw_end = end.unwrap_or(Instant::AFTER_MAX);
        if raw_start >= raw_end {
            return Err(ChronalError::invariant()
                .with_message("zone interval start must precede its end."));
        }
        // Fails only for pathological offset pairs; checking here keeps
        // the savings accessor infallible.
        wall_offset.checked_sub(standard_offset)?;
        Ok(Self {
            name: Arc::from(name),
            raw_start,
            raw_end,
            wall_offset,
            standard_offset,
        })
    }

    /// The single all-of-time interval of a fixed zone.
    pub(crate) fn unbounded(name: &str, wall_offset: Offset) -> Self {
        Self {
            name: Arc::from(name),
            raw_start: Instant::BEFORE_MIN,
            raw_end: Instant::AFTER_MAX,
            wall_offset,
            standard_offset: wall_offset,
        }
    }

    pub(crate) fn with_raw_bounds(&self, raw_start: Instant, raw_end: Instant) -> Self {
        Self {
            name: self.name.clone(),
            raw_start,
            raw_end,
            wall_offset: self.wall_offset,
            standard_offset: self.standard_offset,
        }
    }

    /// The name in force during the interval, e.g. "EDT".
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The first instant of the interval, or `None` when it extends to
    /// the start of time.
    #[must_use]
    pub fn start(&self) -> Option<Instant> {
        self.has_start().then_some(self.raw_start)
    }

    /// The first instant after the interval, or `None` when it extends
    /// to the end of time.
    #[must_use]
    pub fn end(&self) -> Option<Instant> {
        self.has_end().then_some(self.raw_end)
    }

    /// Whether the interval is bounded at the start.
    #[must_use]
    pub fn has_start(&self) -> bool {
        self.raw_start.is_valid()
    }

    /// Whether the interval is bounded at the end.
    #[must_use]
    pub fn has_end(&self) -> bool {
        self.raw_end.is_valid()
    }

    pub(crate) fn raw_start(&self) -> Instant {
        self.raw_start
    }

    pub(crate) fn raw_end(&self) -> Instant {
        self.raw_end
    }

    /// The offset from UTC observed on wall clocks.
    #[must_use]
    pub fn wall_offset(&self) -> Offset {
        self.wall_offset
    }

    /// The standard offset, i.e. the wall offset minus any daylight
    /// saving.
    #[must_use]
    pub fn standard_offset(&self) -> Offset {
        self.standard_offset
    }

    /// The daylight-saving portion of the wall offset. Zero during
    /// standard time.
    #[must_use]
    pub fn savings(&self) -> Offset {
        Offset::from_seconds_unchecked(
            self.wall_offset.seconds() - self.standard_offset.seconds(),
        )
    }

    /// Whether the interval observes no daylight saving.
    #[must_use]
    pub fn is_standard_time(&self) -> bool {
        self.savings() == Offset::ZERO
    }

    /// Whether the instant lies within `[start, end)`; unbounded ends
    /// absorb.
    #[must_use]
    pub fn contains(&self, instant: Instant) -> bool {
        self.raw_start <= instant && instant < self.raw_end
    }

    /// The interval's start as read on local wall clocks.
    pub(crate) fn local_start(&self) -> LocalInstant {
        self.raw_start.safe_plus(self.wall_offset)
    }

    /// The interval's end as read on local wall clocks.
    pub(crate) fn local_end(&self) -> LocalInstant {
        self.raw_end.safe_plus(self.wall_offset)
    }

    /// Whether a local reading falls within the interval when
    /// interpreted at this interval's wall offset.
    pub(crate) fn contains_local(&self, local: LocalInstant) -> bool {
        self.local_start() <= local && local < self.local_end()
    }

    /// Whether another interval carries the same offsets and name,
    /// regardless of its bounds.
    pub(crate) fn equal_ignoring_bounds(&self, other: &Self, compare_name: bool) -> bool {
        self.wall_offset == other.wall_offset
            && self.standard_offset == other.standard_offset
            && (!compare_name || self.name == other.name)
    }

    /// Whether another interval observes the same wall offset,
    /// regardless of how it splits into standard and savings.
    pub(crate) fn same_wall_offset(&self, other: &Self) -> bool {
        self.wall_offset == other.wall_offset
    }
}

impl fmt::Display for ZoneInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        match self.start() {
            Some(start) => write!(f, "[{start}, ")?,
            None => f.write_str("(-\u{221e}, ")?,
        }
        match self.end() {
            Some(end) => write!(f, "{end})")?,
            None => f.write_str("+\u{221e})")?,
        }
        write!(f, " {}", self.wall_offset)
    }
}
