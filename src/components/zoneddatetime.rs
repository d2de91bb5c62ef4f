//! Local date-times paired with an offset, and with a full zone.

use core::fmt;

use crate::calendar::CalendarSystem;
use crate::components::{Instant, LocalDate, LocalDateTime, LocalTime, Offset};
use crate::zone::DateTimeZone;
use crate::ChronalResult;

/// A local date-time together with the UTC offset at which it was
/// observed, but no zone.
///
/// Unlike a [`ZonedDateTime`], an `OffsetDateTime` cannot answer what
/// happens when the clock moves; it is a record of a single observed
/// pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetDateTime {
    local: LocalDateTime,
    offset: Offset,
}

impl OffsetDateTime {
    /// Pairs a local date-time with an offset.
    #[must_use]
    pub const fn new(local: LocalDateTime, offset: Offset) -> Self {
        Self { local, offset }
    }

    /// Projects an instant through an offset into the given calendar.
    pub fn from_instant(
        instant: Instant,
        offset: Offset,
        calendar: CalendarSystem,
    ) -> ChronalResult<Self> {
        let local = LocalDateTime::from_local_instant(instant.safe_plus(offset), calendar)?;
        Ok(Self::new(local, offset))
    }

    /// The local date-time.
    #[inline]
    #[must_use]
    pub const fn local_date_time(&self) -> LocalDateTime {
        self.local
    }

    /// The date portion.
    #[must_use]
    pub const fn date(&self) -> LocalDate {
        self.local.date()
    }

    /// The time-of-day portion.
    #[must_use]
    pub const fn time(&self) -> LocalTime {
        self.local.time()
    }

    /// The offset from UTC.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> Offset {
        self.offset
    }

    /// The instant this pairing denotes. Fails only when the local
    /// reading shifted by the offset leaves the timeline.
    pub fn to_instant(&self) -> ChronalResult<Instant> {
        self.local.to_local_instant().minus(self.offset)
    }
}

impl fmt::Display for OffsetDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.local, self.offset)
    }
}

/// A local date-time in a specific time zone, carrying the offset that
/// disambiguates it on the timeline.
///
/// Storing the offset alongside the zone keeps the value unambiguous
/// even for the repeated wall readings of a fall-back transition.
/// Equality compares the local reading, the offset and the zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonedDateTime {
    local: LocalDateTime,
    offset: Offset,
    zone: DateTimeZone,
}

impl ZonedDateTime {
    /// Builds from parts already known to be consistent. Everything
    /// the crate hands out flows through the zone mapping paths, which
    /// uphold `local - offset` being a valid instant.
    pub(crate) const fn new_unchecked(
        local: LocalDateTime,
        offset: Offset,
        zone: DateTimeZone,
    ) -> Self {
        Self {
            local,
            offset,
            zone,
        }
    }

    /// Projects an instant into a zone using the ISO calendar.
    pub fn new(instant: Instant, zone: DateTimeZone) -> ChronalResult<Self> {
        Self::from_instant(instant, zone, CalendarSystem::iso())
    }

    /// Projects an instant into a zone and calendar.
    pub fn from_instant(
        instant: Instant,
        zone: DateTimeZone,
        calendar: CalendarSystem,
    ) -> ChronalResult<Self> {
        let offset = zone.utc_offset(instant);
        let local = LocalDateTime::from_local_instant(instant.safe_plus(offset), calendar)?;
        Ok(Self::new_unchecked(local, offset, zone))
    }

    /// The local date-time as read on the zone's wall clocks.
    #[inline]
    #[must_use]
    pub const fn local_date_time(&self) -> LocalDateTime {
        self.local
    }

    /// The date portion.
    #[must_use]
    pub const fn date(&self) -> LocalDate {
        self.local.date()
    }

    /// The time-of-day portion.
    #[must_use]
    pub const fn time(&self) -> LocalTime {
        self.local.time()
    }

    /// The offset from UTC in force at this value's instant.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> Offset {
        self.offset
    }

    /// The zone this value lives in.
    #[inline]
    #[must_use]
    pub const fn zone(&self) -> &DateTimeZone {
        &self.zone
    }

    /// The calendar of the local portion.
    #[must_use]
    pub fn calendar(&self) -> CalendarSystem {
        self.local.calendar()
    }

    /// The instant this value denotes. Construction keeps the local
    /// reading and offset consistent, so the projection is total.
    #[must_use]
    pub fn to_instant(&self) -> Instant {
        match self.local.to_local_instant().minus(self.offset) {
            Ok(instant) => instant,
            Err(_) => {
                debug_assert!(false, "zoned date-time with an inconsistent offset");
                if self.local.date().days_since_epoch() < 0 {
                    Instant::MIN
                } else {
                    Instant::MAX
                }
            }
        }
    }

    /// Drops the zone, keeping the observed local/offset pairing.
    #[must_use]
    pub const fn to_offset_date_time(&self) -> OffsetDateTime {
        OffsetDateTime::new(self.local, self.offset)
    }
}

impl fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} {}", self.local, self.offset, self.zone)
    }
}
