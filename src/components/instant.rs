//! A point on the UTC timeline.

use core::fmt;
use core::ops::Sub;

use crate::calendar::gregorian;
use crate::components::{Duration, Offset};
use crate::constants::{
    MILLIS_PER_DAY, NANOS_PER_DAY, NANOS_PER_MILLISECOND, NANOS_PER_SECOND, NANOS_PER_TICK,
    SECONDS_PER_DAY, TICKS_PER_DAY,
};
use crate::{ChronalError, ChronalResult};

/// The earliest day of the timeline: -9998-01-01 in the ISO calendar.
pub(crate) const MIN_DAYS: i32 = -4_371_222;
/// The latest day of the timeline: 9999-12-31 in the ISO calendar.
pub(crate) const MAX_DAYS: i32 = 2_932_896;

/// A fixed point on the UTC timeline, stored as a signed offset from
/// the Unix epoch with nanosecond resolution.
///
/// The storage is the split `(days, nanosecond_of_day)` form shared
/// with [`Duration`]: the nanosecond of day is always non-negative, so
/// instants before the epoch report the floor day below.
///
/// The valid range covers the ISO years -9998 through 9999. Two
/// crate-internal sentinels one day beyond each end stand in for the
/// unbounded edges of time zone intervals and never escape through the
/// public API except via those intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    epoch_offset: Duration,
}

impl Instant {
    /// The start of the timeline, -9998-01-01T00:00:00Z.
    pub const MIN: Self = Self {
        epoch_offset: Duration::from_parts_unchecked(MIN_DAYS, 0),
    };
    /// The end of the timeline, 9999-12-31T23:59:59.999999999Z.
    pub const MAX: Self = Self {
        epoch_offset: Duration::from_parts_unchecked(MAX_DAYS, NANOS_PER_DAY as u64 - 1),
    };
    /// The instant at the Unix epoch, 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Self = Self {
        epoch_offset: Duration::from_parts_unchecked(0, 0),
    };

    /// A sentinel preceding every valid instant, used only for zone
    /// intervals unbounded at the start.
    pub(crate) const BEFORE_MIN: Self = Self {
        epoch_offset: Duration::from_parts_unchecked(MIN_DAYS - 1, 0),
    };
    /// A sentinel following every valid instant, used only for zone
    /// intervals unbounded at the end.
    pub(crate) const AFTER_MAX: Self = Self {
        epoch_offset: Duration::from_parts_unchecked(MAX_DAYS + 1, 0),
    };

    pub(crate) const fn from_parts_unchecked(days: i32, nanos_of_day: u64) -> Self {
        Self {
            epoch_offset: Duration::from_parts_unchecked(days, nanos_of_day),
        }
    }

    fn from_days_and_nanos(days: i64, nanos_of_day: u64) -> ChronalResult<Self> {
        if days < i64::from(MIN_DAYS) || days > i64::from(MAX_DAYS) {
            return Err(instant_range_error());
        }
        Ok(Self::from_parts_unchecked(days as i32, nanos_of_day))
    }

    /// Creates an instant from a count of seconds since the Unix epoch.
    pub fn from_unix_time_seconds(seconds: i64) -> ChronalResult<Self> {
        Self::from_days_and_nanos(
            seconds.div_euclid(SECONDS_PER_DAY),
            (seconds.rem_euclid(SECONDS_PER_DAY) * NANOS_PER_SECOND) as u64,
        )
    }

    /// Creates an instant from a count of milliseconds since the Unix
    /// epoch.
    pub fn from_unix_time_milliseconds(milliseconds: i64) -> ChronalResult<Self> {
        Self::from_days_and_nanos(
            milliseconds.div_euclid(MILLIS_PER_DAY),
            (milliseconds.rem_euclid(MILLIS_PER_DAY) * NANOS_PER_MILLISECOND) as u64,
        )
    }

    /// Creates an instant from a count of ticks (100ns) since the Unix
    /// epoch.
    pub fn from_unix_time_ticks(ticks: i64) -> ChronalResult<Self> {
        Self::from_days_and_nanos(
            ticks.div_euclid(TICKS_PER_DAY),
            (ticks.rem_euclid(TICKS_PER_DAY) * NANOS_PER_TICK) as u64,
        )
    }

    /// Creates an instant at the given UTC wall reading in the ISO
    /// calendar.
    pub fn from_utc(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
    ) -> ChronalResult<Self> {
        crate::calendar::CalendarSystem::iso().validate_ymd(year, month, day)?;
        if hour > 23 || minute > 59 {
            return Err(
                ChronalError::out_of_range().with_message("time of day fields are not valid.")
            );
        }
        let days = gregorian::days_since_epoch(year, month, day);
        let nanos = (i64::from(hour) * 3_600 + i64::from(minute) * 60) * NANOS_PER_SECOND;
        Self::from_days_and_nanos(i64::from(days), nanos as u64)
    }
}

// ==== Accessors and projections ====

impl Instant {
    /// The floor day since the Unix epoch.
    #[inline]
    #[must_use]
    pub const fn days_since_epoch(&self) -> i32 {
        self.epoch_offset.days()
    }

    /// The non-negative nanosecond of day.
    #[inline]
    #[must_use]
    pub const fn nanosecond_of_day(&self) -> i64 {
        self.epoch_offset.nanosecond_of_day()
    }

    /// Seconds since the Unix epoch, truncated toward negative
    /// infinity.
    #[must_use]
    pub const fn to_unix_time_seconds(&self) -> i64 {
        self.days_since_epoch() as i64 * SECONDS_PER_DAY
            + self.nanosecond_of_day() / NANOS_PER_SECOND
    }

    /// Milliseconds since the Unix epoch, truncated toward negative
    /// infinity.
    #[must_use]
    pub const fn to_unix_time_milliseconds(&self) -> i64 {
        self.days_since_epoch() as i64 * MILLIS_PER_DAY
            + self.nanosecond_of_day() / NANOS_PER_MILLISECOND
    }

    /// Ticks since the Unix epoch, truncated toward negative infinity.
    #[must_use]
    pub const fn to_unix_time_ticks(&self) -> i64 {
        self.days_since_epoch() as i64 * TICKS_PER_DAY
            + self.nanosecond_of_day() / NANOS_PER_TICK
    }

    /// Whether this instant lies within the valid timeline rather than
    /// being one of the interval-edge sentinels.
    pub(crate) const fn is_valid(&self) -> bool {
        self.days_since_epoch() >= MIN_DAYS && self.days_since_epoch() <= MAX_DAYS
    }
}

// ==== Arithmetic ====

impl Instant {
    /// Advances this instant by a duration.
    pub fn plus(&self, duration: &Duration) -> ChronalResult<Self> {
        let shifted = self
            .epoch_offset
            .checked_add(duration)
            .map_err(|_| instant_range_error())?;
        Self::from_days_and_nanos(
            i64::from(shifted.days()),
            shifted.nanosecond_of_day() as u64,
        )
    }

    /// Moves this instant back by a duration.
    pub fn minus(&self, duration: &Duration) -> ChronalResult<Self> {
        let shifted = self
            .epoch_offset
            .checked_sub(duration)
            .map_err(|_| instant_range_error())?;
        Self::from_days_and_nanos(
            i64::from(shifted.days()),
            shifted.nanosecond_of_day() as u64,
        )
    }

    /// The preceding nanosecond. The caller guarantees this instant is
    /// not the start of the timeline; the result saturates there.
    pub(crate) fn prev_nanosecond(&self) -> Self {
        debug_assert!(*self > Self::MIN);
        match self.minus(&Duration::EPSILON) {
            Ok(instant) => instant,
            Err(_) => Self::MIN,
        }
    }

    /// Shifts this instant by a UTC offset into the local reading of
    /// the same point, clamping beyond-the-timeline results to the
    /// local sentinels. Sentinel inputs absorb the shift.
    pub(crate) fn safe_plus(&self, offset: Offset) -> LocalInstant {
        if self.days_since_epoch() < MIN_DAYS {
            return LocalInstant::BEFORE_MIN;
        }
        if self.days_since_epoch() > MAX_DAYS {
            return LocalInstant::AFTER_MAX;
        }
        let mut days = self.days_since_epoch();
        let mut nanos = self.nanosecond_of_day() + offset.nanoseconds();
        if nanos < 0 {
            nanos += NANOS_PER_DAY;
            days -= 1;
        } else if nanos >= NANOS_PER_DAY {
            nanos -= NANOS_PER_DAY;
            days += 1;
        }
        if days < MIN_DAYS {
            LocalInstant::BEFORE_MIN
        } else if days > MAX_DAYS {
            LocalInstant::AFTER_MAX
        } else {
            LocalInstant::new(days, nanos as u64)
        }
    }
}

impl Sub for Instant {
    type Output = Duration;

    /// The elapsed time between two instants. Any two valid instants
    /// differ by less than the duration range, so this never fails.
    fn sub(self, other: Self) -> Duration {
        let mut days = self.days_since_epoch() - other.days_since_epoch();
        let nanos = self.nanosecond_of_day() - other.nanosecond_of_day();
        let nanos = if nanos < 0 {
            days -= 1;
            (nanos + NANOS_PER_DAY) as u64
        } else {
            nanos as u64
        };
        Duration::from_parts_unchecked(days, nanos)
    }
}

#[inline]
fn instant_range_error() -> ChronalError {
    ChronalError::out_of_range().with_message("instant is outside the representable timeline.")
}

impl fmt::Display for Instant {
    /// Formats as an ISO-8601 UTC reading, with the fraction printed
    /// only when it is non-zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = gregorian::date_from_days(self.days_since_epoch());
        let nanos = self.nanosecond_of_day();
        let seconds = nanos / NANOS_PER_SECOND;
        let fraction = nanos % NANOS_PER_SECOND;
        if year < 0 {
            write!(f, "-{:04}", -year)?;
        } else {
            write!(f, "{year:04}")?;
        }
        write!(
            f,
            "-{month:02}-{day:02}T{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds / 60) % 60,
            seconds % 60
        )?;
        if fraction != 0 {
            write!(f, ".{fraction:09}")?;
        }
        f.write_str("Z")
    }
}

// ==== LocalInstant ====

/// A local wall-clock reading treated as if it were UTC.
///
/// This is purely a bridge value for zone arithmetic: local date-times
/// convert to a `LocalInstant` with arithmetic bit-identical to the UTC
/// case, zone intervals compare against it, and subtracting the wall
/// offset lands back on the timeline. It is never exposed publicly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct LocalInstant {
    days: i32,
    nanos_of_day: u64,
}

impl LocalInstant {
    /// Compares below every reachable local reading.
    pub(crate) const BEFORE_MIN: Self = Self {
        days: MIN_DAYS - 1,
        nanos_of_day: 0,
    };
    /// Compares above every reachable local reading.
    pub(crate) const AFTER_MAX: Self = Self {
        days: MAX_DAYS + 1,
        nanos_of_day: 0,
    };

    pub(crate) const fn new(days: i32, nanos_of_day: u64) -> Self {
        debug_assert!(nanos_of_day < NANOS_PER_DAY as u64);
        Self {
            days,
            nanos_of_day,
        }
    }

    #[inline]
    pub(crate) const fn days(&self) -> i32 {
        self.days
    }

    #[inline]
    pub(crate) const fn nanosecond_of_day(&self) -> u64 {
        self.nanos_of_day
    }

    /// Reinterprets this local reading as a UTC instant. Local
    /// date-times share the instant day window, so the result is always
    /// valid for non-sentinel values.
    pub(crate) fn pretend_utc(&self) -> Instant {
        debug_assert!(self.days >= MIN_DAYS && self.days <= MAX_DAYS);
        Instant::from_parts_unchecked(self.days, self.nanos_of_day)
    }

    /// Subtracts a wall offset, landing back on the timeline.
    pub(crate) fn minus(&self, offset: Offset) -> ChronalResult<Instant> {
        if self.days < MIN_DAYS || self.days > MAX_DAYS {
            return Err(instant_range_error());
        }
        let mut days = i64::from(self.days);
        let mut nanos = self.nanos_of_day as i64 - offset.nanoseconds();
        if nanos < 0 {
            nanos += NANOS_PER_DAY;
            days -= 1;
        } else if nanos >= NANOS_PER_DAY {
            nanos -= NANOS_PER_DAY;
            days += 1;
        }
        Instant::from_days_and_nanos(days, nanos as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_time_round_trips() {
        for seconds in [-1_000_000_007i64, -1, 0, 1, 1_717_171_717] {
            let instant = Instant::from_unix_time_seconds(seconds).unwrap();
            assert_eq!(instant.to_unix_time_seconds(), seconds);
        }
        for ticks in [-3i64, 0, 636_508_154_283_000_000] {
            let instant = Instant::from_unix_time_ticks(ticks).unwrap();
            assert_eq!(instant.to_unix_time_ticks(), ticks);
        }
    }

    #[test]
    fn negative_instants_floor_toward_negative_infinity() {
        // One nanosecond before the epoch.
        let instant = Instant::UNIX_EPOCH.minus(&Duration::EPSILON).unwrap();
        assert_eq!(instant.days_since_epoch(), -1);
        assert_eq!(instant.to_unix_time_seconds(), -1);
        assert_eq!(instant.to_unix_time_milliseconds(), -1);
        assert_eq!(instant.to_unix_time_ticks(), -1);
    }

    #[test]
    fn plus_then_minus_is_identity() {
        let base = Instant::from_utc(2017, 3, 12, 7, 0).unwrap();
        let duration = Duration::from_nanoseconds(987_654_321_987).unwrap();
        let there = base.plus(&duration).unwrap();
        assert_eq!(there - base, duration);
        assert_eq!(there.minus(&duration).unwrap(), base);
    }

    #[test]
    fn range_boundaries() {
        assert!(Instant::MAX.plus(&Duration::EPSILON).is_err());
        assert!(Instant::MIN.minus(&Duration::EPSILON).is_err());
        assert_eq!(
            Instant::MAX.minus(&(Instant::MAX - Instant::MIN)).unwrap(),
            Instant::MIN
        );
    }

    #[test]
    fn from_utc_matches_unix_time() {
        let epoch = Instant::from_utc(1970, 1, 1, 0, 0).unwrap();
        assert_eq!(epoch, Instant::UNIX_EPOCH);
        let instant = Instant::from_utc(2001, 9, 9, 1, 46).unwrap();
        assert_eq!(instant.to_unix_time_seconds(), 999_999_960);
    }

    #[test]
    fn safe_plus_clamps_to_sentinels() {
        let plus_one_hour = Offset::from_hours(1).unwrap();
        let minus_one_hour = Offset::from_hours(-1).unwrap();

        let local = Instant::MAX.safe_plus(plus_one_hour);
        assert_eq!(local, LocalInstant::AFTER_MAX);
        let local = Instant::MIN.safe_plus(minus_one_hour);
        assert_eq!(local, LocalInstant::BEFORE_MIN);

        let local = Instant::UNIX_EPOCH.safe_plus(minus_one_hour);
        assert_eq!(local.days(), -1);
        assert_eq!(
            local.nanosecond_of_day(),
            (NANOS_PER_DAY - crate::constants::NANOS_PER_HOUR) as u64
        );
        assert_eq!(local.minus(minus_one_hour).unwrap(), Instant::UNIX_EPOCH);
    }

    #[test]
    fn display() {
        let instant = Instant::from_utc(2017, 11, 5, 6, 0).unwrap();
        assert_eq!(std::format!("{instant}"), "2017-11-05T06:00:00Z");
        let fractional = instant.plus(&Duration::from_ticks(5).unwrap()).unwrap();
        assert_eq!(std::format!("{fractional}"), "2017-11-05T06:00:00.000000500Z");
    }
}
