//! Time zones and the mapping between local and global time.
//!
//! A [`DateTimeZone`] is an immutable, cheaply clonable handle over
//! zone data: either a single fixed offset or a shared precomputed
//! transition table. The zone's one primitive operation is
//! `zone_interval`, mapping an instant to the [`ZoneInterval`]
//! containing it; everything else — the local-to-instant mapping with
//! gap and ambiguity classification, the resolver protocol, start-of-day
//! lookup, interval iteration — derives from that primitive.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::components::instant::LocalInstant;
use crate::components::{Instant, Interval, LocalDate, LocalDateTime, Offset, ZonedDateTime};
use crate::{ChronalError, ChronalResult, ChronalUnwrap};

pub(crate) mod fixed;
pub(crate) mod precalculated;

mod interval;
mod iterator;
pub mod resolvers;

#[doc(inline)]
pub use interval::ZoneInterval;
#[doc(inline)]
pub use iterator::{CoalescedZoneIntervals, ZoneEqualityOptions, ZoneIntervalIterator};
#[doc(inline)]
pub use resolvers::Resolver;

use precalculated::PrecalculatedZoneData;

/// A zone identifier that is free to clone for cached fixed zones and
/// shared for everything else.
#[derive(Debug, Clone)]
enum ZoneId {
    Static(&'static str),
    Shared(Arc<str>),
}

impl ZoneId {
    fn as_str(&self) -> &str {
        match self {
            Self::Static(id) => id,
            Self::Shared(id) => id,
        }
    }
}

#[derive(Debug, Clone)]
enum ZoneData {
    Fixed(ZoneInterval),
    Precalculated(Arc<PrecalculatedZoneData>),
}

/// A named, immutable mapping from instants to zone intervals covering
/// the whole timeline.
///
/// Zones are shared flyweights: cloning a handle never copies zone
/// data, and any number of threads may use the same zone concurrently.
#[derive(Debug, Clone)]
pub struct DateTimeZone {
    id: ZoneId,
    data: ZoneData,
}

impl PartialEq for DateTimeZone {
    fn eq(&self, other: &Self) -> bool {
        self.id.as_str() == other.id.as_str()
            && match (&self.data, &other.data) {
                (ZoneData::Fixed(a), ZoneData::Fixed(b)) => {
                    a.wall_offset() == b.wall_offset()
                }
                (ZoneData::Precalculated(a), ZoneData::Precalculated(b)) => Arc::ptr_eq(a, b),
                _ => false,
            }
    }
}

impl Eq for DateTimeZone {}

// ==== Construction ====

impl DateTimeZone {
    /// The UTC zone. A provider must always resolve the id `"UTC"` to a
    /// zone equal to this one.
    #[must_use]
    pub fn utc() -> Self {
        Self::for_offset(Offset::ZERO)
    }

    /// A fixed zone for the given offset. Offsets on a half-hour
    /// boundary within [UTC-12:00, UTC+15:00] resolve through a
    /// precomputed identifier table without allocating; anything else
    /// formats a fresh identifier.
    #[must_use]
    pub fn for_offset(offset: Offset) -> Self {
        match fixed::cached_id(offset) {
            Some(id) => Self {
                id: ZoneId::Static(id),
                data: ZoneData::Fixed(ZoneInterval::unbounded(id, offset)),
            },
            None => {
                let id = fixed::format_id(offset);
                Self {
                    data: ZoneData::Fixed(ZoneInterval::unbounded(&id, offset)),
                    id: ZoneId::Shared(Arc::from(id.as_str())),
                }
            }
        }
    }

    /// A fixed zone with a caller-supplied identifier.
    #[must_use]
    pub fn fixed(id: &str, offset: Offset) -> Self {
        Self {
            id: ZoneId::Shared(Arc::from(id)),
            data: ZoneData::Fixed(ZoneInterval::unbounded(id, offset)),
        }
    }

    /// A zone backed by a precomputed transition table: a contiguous,
    /// outer-unbounded list of intervals, the form a TZDB provider
    /// produces.
    pub fn from_intervals(id: &str, intervals: Vec<ZoneInterval>) -> ChronalResult<Self> {
        let data = PrecalculatedZoneData::new(intervals)?;
        Ok(Self {
            id: ZoneId::Shared(Arc::from(id)),
            data: ZoneData::Precalculated(Arc::new(data)),
        })
    }
}

// ==== The primitive lookup and its metrics ====

impl DateTimeZone {
    /// The zone's identifier, e.g. `"America/New_York"` or
    /// `"UTC+05:30"`.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Whether this zone observes a single offset for all time.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self.data, ZoneData::Fixed(_))
    }

    /// The smallest wall offset the zone ever observes.
    #[must_use]
    pub fn min_offset(&self) -> Offset {
        match &self.data {
            ZoneData::Fixed(interval) => interval.wall_offset(),
            ZoneData::Precalculated(data) => data.min_offset(),
        }
    }

    /// The largest wall offset the zone ever observes.
    #[must_use]
    pub fn max_offset(&self) -> Offset {
        match &self.data {
            ZoneData::Fixed(interval) => interval.wall_offset(),
            ZoneData::Precalculated(data) => data.max_offset(),
        }
    }

    /// The interval of constant offset containing the instant. Total
    /// over the whole timeline.
    #[must_use]
    pub fn zone_interval(&self, instant: Instant) -> ZoneInterval {
        match &self.data {
            ZoneData::Fixed(interval) => interval.clone(),
            ZoneData::Precalculated(data) => data.interval_at(instant).clone(),
        }
    }

    /// The wall offset in force at the instant.
    #[must_use]
    pub fn utc_offset(&self, instant: Instant) -> Offset {
        self.zone_interval(instant).wall_offset()
    }
}

// ==== Local mapping ====

impl DateTimeZone {
    /// Classifies how a local date-time maps onto the timeline in this
    /// zone: to exactly one instant, to two (a fall-back overlap), or
    /// to none (a spring-forward gap).
    #[must_use]
    pub fn map_local(&self, local: &LocalDateTime) -> ZoneLocalMapping {
        let local_instant = local.to_local_instant();
        let interval = self.zone_interval(local_instant.pretend_utc());
        if interval.contains_local(local_instant) {
            if let Some(earlier) = self.earlier_matching(&interval, local_instant) {
                return self.mapping(local, earlier, interval, 2);
            }
            if let Some(later) = self.later_matching(&interval, local_instant) {
                return self.mapping(local, interval, later, 2);
            }
            self.mapping(local, interval.clone(), interval, 1)
        } else {
            if let Some(earlier) = self.earlier_matching(&interval, local_instant) {
                return self.mapping(local, earlier.clone(), earlier, 1);
            }
            if let Some(later) = self.later_matching(&interval, local_instant) {
                return self.mapping(local, later.clone(), later, 1);
            }
            self.mapping(
                local,
                self.interval_before_gap(local_instant),
                self.interval_after_gap(local_instant),
                0,
            )
        }
    }

    fn mapping(
        &self,
        local: &LocalDateTime,
        early: ZoneInterval,
        late: ZoneInterval,
        count: u8,
    ) -> ZoneLocalMapping {
        ZoneLocalMapping {
            zone: self.clone(),
            local: *local,
            early_interval: early,
            late_interval: late,
            count,
        }
    }

    /// Probes the interval preceding `interval` when the local reading
    /// could also fall there. The max-offset guard bounds the probe to
    /// at most one neighbour fetch.
    fn earlier_matching(
        &self,
        interval: &ZoneInterval,
        local: LocalInstant,
    ) -> Option<ZoneInterval> {
        if !interval.has_start() || interval.raw_start() == Instant::MIN {
            return None;
        }
        // Any earlier interval puts the local reading at most
        // max-offset after its own end.
        if local >= interval.raw_start().safe_plus(self.max_offset()) {
            return None;
        }
        let candidate = self.zone_interval(interval.raw_start().prev_nanosecond());
        candidate.contains_local(local).then_some(candidate)
    }

    /// Probes the interval following `interval` when the local reading
    /// could also fall there, under the min-offset guard.
    fn later_matching(
        &self,
        interval: &ZoneInterval,
        local: LocalInstant,
    ) -> Option<ZoneInterval> {
        if !interval.has_end() {
            return None;
        }
        if local < interval.raw_end().safe_plus(self.min_offset()) {
            return None;
        }
        let candidate = self.zone_interval(interval.raw_end());
        candidate.contains_local(local).then_some(candidate)
    }

    /// For a local reading in a gap, the interval of constant offset
    /// just before the transition that skipped it.
    fn interval_before_gap(&self, local: LocalInstant) -> ZoneInterval {
        let guess = self.zone_interval(local.pretend_utc());
        if guess.local_start() > local {
            self.zone_interval(guess.raw_start().prev_nanosecond())
        } else {
            guess
        }
    }

    /// For a local reading in a gap, the interval just after the
    /// transition that skipped it.
    fn interval_after_gap(&self, local: LocalInstant) -> ZoneInterval {
        let guess = self.zone_interval(local.pretend_utc());
        if guess.local_start() > local {
            guess
        } else {
            self.zone_interval(guess.raw_end())
        }
    }
}

// ==== Derived conveniences ====

impl DateTimeZone {
    /// Maps a local date-time using the given resolver.
    pub fn resolve_local(
        &self,
        local: &LocalDateTime,
        resolver: &Resolver,
    ) -> ChronalResult<ZonedDateTime> {
        resolver.resolve(&self.map_local(local))
    }

    /// Maps a local date-time, failing on both gaps and ambiguities.
    pub fn at_strictly(&self, local: &LocalDateTime) -> ChronalResult<ZonedDateTime> {
        self.resolve_local(local, &resolvers::strict())
    }

    /// Maps a local date-time, choosing the earlier of ambiguous
    /// readings and shifting gap readings forward by the gap width.
    pub fn at_leniently(&self, local: &LocalDateTime) -> ChronalResult<ZonedDateTime> {
        self.resolve_local(local, &resolvers::lenient())
    }

    /// The first valid wall reading of the given date in this zone.
    /// Usually midnight; later when midnight is skipped. Fails with a
    /// skipped-local-time error when the transition skips the entire
    /// date.
    pub fn at_start_of_day(&self, date: &LocalDate) -> ChronalResult<ZonedDateTime> {
        let midnight = date.at_midnight();
        let mapping = self.map_local(&midnight);
        if mapping.count() == 0 {
            let late = mapping.late_interval();
            // An interval after a gap always has a bounded start.
            let start = late.start().chronal_unwrap()?;
            let local = start.safe_plus(late.wall_offset());
            let shifted = LocalDateTime::from_local_instant(local, date.calendar())?;
            if shifted.date() != *date {
                return Err(ChronalError::skipped_local_time().with_message(alloc::format!(
                    "the whole of {date} was skipped by a transition in zone {}.",
                    self.id()
                )));
            }
            return Ok(ZonedDateTime::new_unchecked(
                shifted,
                late.wall_offset(),
                self.clone(),
            ));
        }
        mapping.first()
    }

    /// Iterates the zone intervals overlapping the given instant
    /// interval, in chronological order. Each yielded interval is the
    /// raw zone interval, untruncated to the query window.
    #[must_use]
    pub fn zone_intervals(&self, interval: Interval) -> ZoneIntervalIterator {
        ZoneIntervalIterator::new(self.clone(), interval)
    }

    /// As [`DateTimeZone::zone_intervals`], additionally coalescing
    /// adjacent intervals that are equivalent under the given options.
    #[must_use]
    pub fn zone_intervals_with(
        &self,
        interval: Interval,
        options: ZoneEqualityOptions,
    ) -> CoalescedZoneIntervals {
        CoalescedZoneIntervals::new(self.zone_intervals(interval), options)
    }
}

impl fmt::Display for DateTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ==== ZoneLocalMapping ====

/// The result of mapping a local date-time into a zone: how many
/// instants correspond to it, and the interval(s) involved.
///
/// For an unambiguous mapping both intervals are the same; for an
/// ambiguous one they are the early and late intervals of the overlap;
/// for a gap they are the intervals before and after the transition.
#[derive(Debug, Clone)]
pub struct ZoneLocalMapping {
    zone: DateTimeZone,
    local: LocalDateTime,
    early_interval: ZoneInterval,
    late_interval: ZoneInterval,
    count: u8,
}

impl ZoneLocalMapping {
    /// The number of instants the local date-time maps to: 0, 1 or 2.
    #[inline]
    #[must_use]
    pub fn count(&self) -> u8 {
        self.count
    }

    /// The zone the mapping was computed in.
    #[must_use]
    pub fn zone(&self) -> &DateTimeZone {
        &self.zone
    }

    /// The local date-time that was mapped.
    #[must_use]
    pub fn local_date_time(&self) -> &LocalDateTime {
        &self.local
    }

    /// The earlier interval of the mapping.
    #[must_use]
    pub fn early_interval(&self) -> &ZoneInterval {
        &self.early_interval
    }

    /// The later interval of the mapping.
    #[must_use]
    pub fn late_interval(&self) -> &ZoneInterval {
        &self.late_interval
    }

    pub(crate) fn zoned_in(&self, interval: &ZoneInterval) -> ZonedDateTime {
        ZonedDateTime::new_unchecked(self.local, interval.wall_offset(), self.zone.clone())
    }

    /// The unique zoned result, failing when the mapping is skipped or
    /// ambiguous.
    pub fn single(&self) -> ChronalResult<ZonedDateTime> {
        match self.count {
            1 => Ok(self.zoned_in(&self.early_interval)),
            0 => Err(self.skipped_error()),
            _ => Err(self.ambiguous_error()),
        }
    }

    /// The earliest zoned result, failing only when the mapping is
    /// skipped.
    pub fn first(&self) -> ChronalResult<ZonedDateTime> {
        match self.count {
            0 => Err(self.skipped_error()),
            _ => Ok(self.zoned_in(&self.early_interval)),
        }
    }

    /// The latest zoned result, failing only when the mapping is
    /// skipped.
    pub fn last(&self) -> ChronalResult<ZonedDateTime> {
        match self.count {
            0 => Err(self.skipped_error()),
            _ => Ok(self.zoned_in(&self.late_interval)),
        }
    }

    pub(crate) fn skipped_error(&self) -> ChronalError {
        ChronalError::skipped_local_time().with_message(alloc::format!(
            "local time {} is skipped in zone {}.",
            self.local,
            self.zone.id()
        ))
    }

    pub(crate) fn ambiguous_error(&self) -> ChronalError {
        ChronalError::ambiguous_local_time().with_message(alloc::format!(
            "local time {} is ambiguous in zone {}.",
            self.local,
            self.zone.id()
        ))
    }
}

#[cfg(test)]
mod tests;
