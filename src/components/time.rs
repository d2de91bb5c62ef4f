//! A civil time of day.

use core::fmt;

use crate::constants::{
    NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MILLISECOND, NANOS_PER_MINUTE, NANOS_PER_SECOND,
    NANOS_PER_TICK,
};
use crate::{ChronalError, ChronalResult};

/// A time of day with nanosecond resolution, stored as the nanosecond
/// of the day.
///
/// A `LocalTime` has no awareness of dates or zones; its arithmetic is
/// modulo one day and wraps without error. Callers that care about the
/// discarded day carry use the date-time arithmetic instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalTime {
    nanos_of_day: u64,
}

impl LocalTime {
    /// 00:00:00, the start of the day.
    pub const MIDNIGHT: Self = Self { nanos_of_day: 0 };
    /// 12:00:00.
    pub const NOON: Self = Self {
        nanos_of_day: (NANOS_PER_DAY / 2) as u64,
    };

    pub(crate) const fn from_nanos_unchecked(nanos_of_day: u64) -> Self {
        debug_assert!(nanos_of_day < NANOS_PER_DAY as u64);
        Self { nanos_of_day }
    }

    /// Creates a time of day from hour, minute and second fields.
    pub fn new(hour: u8, minute: u8, second: u8) -> ChronalResult<Self> {
        Self::from_hms_nanos(hour, minute, second, 0)
    }

    /// Creates a time of day from hour, minute, second and
    /// nanosecond-of-second fields.
    pub fn from_hms_nanos(
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
    ) -> ChronalResult<Self> {
        if hour > 23 || minute > 59 || second > 59 || nanosecond >= NANOS_PER_SECOND as u32 {
            return Err(
                ChronalError::out_of_range().with_message("time of day fields are not valid.")
            );
        }
        let nanos = i64::from(hour) * NANOS_PER_HOUR
            + i64::from(minute) * NANOS_PER_MINUTE
            + i64::from(second) * NANOS_PER_SECOND
            + i64::from(nanosecond);
        Ok(Self::from_nanos_unchecked(nanos as u64))
    }

    /// Creates a time of day from a nanosecond of the day.
    pub fn from_nanosecond_of_day(nanos_of_day: i64) -> ChronalResult<Self> {
        if !(0..NANOS_PER_DAY).contains(&nanos_of_day) {
            return Err(ChronalError::out_of_range()
                .with_message("nanosecond of day must be within a single day."));
        }
        Ok(Self::from_nanos_unchecked(nanos_of_day as u64))
    }
}

// ==== Accessors ====

impl LocalTime {
    /// The hour of the day, in `[0, 24)`.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        (self.nanos_of_day / NANOS_PER_HOUR as u64) as u8
    }

    /// The minute of the hour, in `[0, 60)`.
    #[must_use]
    pub const fn minute(&self) -> u8 {
        ((self.nanos_of_day / NANOS_PER_MINUTE as u64) % 60) as u8
    }

    /// The second of the minute, in `[0, 60)`.
    #[must_use]
    pub const fn second(&self) -> u8 {
        ((self.nanos_of_day / NANOS_PER_SECOND as u64) % 60) as u8
    }

    /// The millisecond of the second, in `[0, 1000)`.
    #[must_use]
    pub const fn millisecond(&self) -> u16 {
        ((self.nanos_of_day / NANOS_PER_MILLISECOND as u64) % 1_000) as u16
    }

    /// The nanosecond of the second, in `[0, 10^9)`.
    #[must_use]
    pub const fn nanosecond_of_second(&self) -> u32 {
        (self.nanos_of_day % NANOS_PER_SECOND as u64) as u32
    }

    /// The tick of the day, in `[0, TICKS_PER_DAY)`.
    #[must_use]
    pub const fn tick_of_day(&self) -> i64 {
        (self.nanos_of_day / NANOS_PER_TICK as u64) as i64
    }

    /// The nanosecond of the day, in `[0, NANOS_PER_DAY)`.
    #[inline]
    #[must_use]
    pub const fn nanosecond_of_day(&self) -> i64 {
        self.nanos_of_day as i64
    }
}

// ==== Wrapping arithmetic ====

impl LocalTime {
    /// Adds a nanosecond count scaled by the given unit, wrapping
    /// modulo one day. The widened arithmetic cannot overflow.
    fn plus_scaled(&self, value: i64, nanos_per_unit: i64) -> Self {
        let delta = i128::from(value) * i128::from(nanos_per_unit);
        let wrapped =
            (i128::from(self.nanosecond_of_day()) + delta).rem_euclid(i128::from(NANOS_PER_DAY));
        Self::from_nanos_unchecked(wrapped as u64)
    }

    /// Adds hours, wrapping modulo one day.
    #[must_use]
    pub fn plus_hours(&self, hours: i64) -> Self {
        self.plus_scaled(hours, NANOS_PER_HOUR)
    }

    /// Adds minutes, wrapping modulo one day.
    #[must_use]
    pub fn plus_minutes(&self, minutes: i64) -> Self {
        self.plus_scaled(minutes, NANOS_PER_MINUTE)
    }

    /// Adds seconds, wrapping modulo one day.
    #[must_use]
    pub fn plus_seconds(&self, seconds: i64) -> Self {
        self.plus_scaled(seconds, NANOS_PER_SECOND)
    }

    /// Adds milliseconds, wrapping modulo one day.
    #[must_use]
    pub fn plus_milliseconds(&self, milliseconds: i64) -> Self {
        self.plus_scaled(milliseconds, NANOS_PER_MILLISECOND)
    }

    /// Adds ticks, wrapping modulo one day.
    #[must_use]
    pub fn plus_ticks(&self, ticks: i64) -> Self {
        self.plus_scaled(ticks, NANOS_PER_TICK)
    }

    /// Adds nanoseconds, wrapping modulo one day.
    #[must_use]
    pub fn plus_nanoseconds(&self, nanoseconds: i64) -> Self {
        self.plus_scaled(nanoseconds, 1)
    }

    /// Adds nanoseconds, returning the wrapped time and the day carry
    /// that was discarded.
    pub(crate) fn plus_nanoseconds_with_carry(&self, nanoseconds: i128) -> (i64, Self) {
        let total = i128::from(self.nanosecond_of_day()) + nanoseconds;
        let days = total.div_euclid(i128::from(NANOS_PER_DAY));
        let nanos = total.rem_euclid(i128::from(NANOS_PER_DAY));
        (days as i64, Self::from_nanos_unchecked(nanos as u64))
    }
}

impl fmt::Display for LocalTime {
    /// Formats as `HH:mm:ss.fffffffff`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:09}",
            self.hour(),
            self.minute(),
            self.second(),
            self.nanosecond_of_second()
        )
    }
}
