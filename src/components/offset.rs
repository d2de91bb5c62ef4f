//! A UTC displacement in whole seconds.

use core::fmt;

use crate::constants::{
    MILLIS_PER_SECOND, NANOS_PER_SECOND, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, TICKS_PER_SECOND,
};
use crate::{ChronalError, ChronalResult};

const MAX_SECONDS_EXCLUSIVE: i32 = 86_400;

/// A signed displacement from UTC with one-second precision.
///
/// The magnitude is strictly less than one day. Sub-second precision is
/// not representable: the millisecond, tick and nanosecond factories
/// truncate toward zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset {
    seconds: i32,
}

impl Offset {
    /// The zero offset, i.e. UTC itself.
    pub const ZERO: Self = Self { seconds: 0 };
    /// The greatest negative displacement, -23:59:59.
    pub const MIN: Self = Self {
        seconds: -(MAX_SECONDS_EXCLUSIVE - 1),
    };
    /// The greatest positive displacement, +23:59:59.
    pub const MAX: Self = Self {
        seconds: MAX_SECONDS_EXCLUSIVE - 1,
    };

    pub(crate) const fn from_seconds_unchecked(seconds: i32) -> Self {
        debug_assert!(seconds > -MAX_SECONDS_EXCLUSIVE && seconds < MAX_SECONDS_EXCLUSIVE);
        Self { seconds }
    }

    /// Creates an offset from a signed number of seconds.
    pub fn from_seconds(seconds: i32) -> ChronalResult<Self> {
        if seconds <= -MAX_SECONDS_EXCLUSIVE || seconds >= MAX_SECONDS_EXCLUSIVE {
            return Err(offset_range_error());
        }
        Ok(Self { seconds })
    }

    /// Creates an offset from milliseconds, dividing toward zero.
    pub fn from_milliseconds(milliseconds: i64) -> ChronalResult<Self> {
        let seconds = milliseconds / MILLIS_PER_SECOND;
        i32::try_from(seconds)
            .map_err(|_| offset_range_error())
            .and_then(Self::from_seconds)
    }

    /// Creates an offset from ticks, dividing toward zero.
    pub fn from_ticks(ticks: i64) -> ChronalResult<Self> {
        let seconds = ticks / TICKS_PER_SECOND;
        i32::try_from(seconds)
            .map_err(|_| offset_range_error())
            .and_then(Self::from_seconds)
    }

    /// Creates an offset from nanoseconds, dividing toward zero.
    pub fn from_nanoseconds(nanoseconds: i64) -> ChronalResult<Self> {
        let seconds = nanoseconds / NANOS_PER_SECOND;
        i32::try_from(seconds)
            .map_err(|_| offset_range_error())
            .and_then(Self::from_seconds)
    }

    /// Creates an offset from whole hours.
    pub fn from_hours(hours: i32) -> ChronalResult<Self> {
        hours
            .checked_mul(SECONDS_PER_HOUR as i32)
            .ok_or_else(offset_range_error)
            .and_then(Self::from_seconds)
    }

    /// Creates an offset from hour and minute components. The sign must
    /// be expressed in each component: `(-5, -30)` means -05:30.
    pub fn from_hours_and_minutes(hours: i32, minutes: i32) -> ChronalResult<Self> {
        let seconds = hours
            .checked_mul(SECONDS_PER_HOUR as i32)
            .zip(minutes.checked_mul(SECONDS_PER_MINUTE as i32))
            .and_then(|(h, m)| h.checked_add(m))
            .ok_or_else(offset_range_error)?;
        Self::from_seconds(seconds)
    }
}

// ==== Accessors ====

impl Offset {
    /// The total displacement in signed seconds: the canonical wire
    /// form.
    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i32 {
        self.seconds
    }

    /// The total displacement in signed milliseconds.
    #[must_use]
    pub const fn milliseconds(&self) -> i64 {
        self.seconds as i64 * MILLIS_PER_SECOND
    }

    /// The total displacement in signed ticks.
    #[must_use]
    pub const fn ticks(&self) -> i64 {
        self.seconds as i64 * TICKS_PER_SECOND
    }

    /// The total displacement in signed nanoseconds.
    #[must_use]
    pub const fn nanoseconds(&self) -> i64 {
        self.seconds as i64 * NANOS_PER_SECOND
    }

    /// Whether the displacement is negative.
    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.seconds < 0
    }

    /// The hour component of the absolute displacement.
    #[must_use]
    pub const fn hours_component(&self) -> i32 {
        self.seconds.abs() / SECONDS_PER_HOUR as i32
    }

    /// The minute component of the absolute displacement, in `[0, 60)`.
    #[must_use]
    pub const fn minutes_component(&self) -> i32 {
        (self.seconds.abs() / SECONDS_PER_MINUTE as i32) % 60
    }

    /// The second component of the absolute displacement, in `[0, 60)`.
    #[must_use]
    pub const fn seconds_component(&self) -> i32 {
        self.seconds.abs() % 60
    }

    /// The millisecond component of the absolute displacement; always
    /// zero at this precision, kept for surface completeness.
    #[must_use]
    pub const fn milliseconds_component(&self) -> i32 {
        0
    }
}

// ==== Arithmetic ====

impl Offset {
    /// Adds another offset; the result must stay within ±24 hours.
    pub fn checked_add(&self, other: Self) -> ChronalResult<Self> {
        Self::from_seconds(self.seconds + other.seconds)
    }

    /// Subtracts another offset; the result must stay within ±24
    /// hours.
    pub fn checked_sub(&self, other: Self) -> ChronalResult<Self> {
        Self::from_seconds(self.seconds - other.seconds)
    }

    /// Negates this offset. The range is symmetric, so this never
    /// fails.
    #[must_use]
    pub const fn negated(&self) -> Self {
        Self {
            seconds: -self.seconds,
        }
    }
}

impl core::ops::Neg for Offset {
    type Output = Self;

    fn neg(self) -> Self {
        self.negated()
    }
}

#[inline]
fn offset_range_error() -> ChronalError {
    ChronalError::out_of_range().with_message("offset must be smaller than one day.")
}

impl fmt::Display for Offset {
    /// Formats as `±HH:mm`, with `:ss` appended when the displacement
    /// is not a whole number of minutes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { '-' } else { '+' };
        write!(
            f,
            "{sign}{:02}:{:02}",
            self.hours_component(),
            self.minutes_component()
        )?;
        if self.seconds_component() != 0 {
            write!(f, ":{:02}", self.seconds_component())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_round_trip() {
        for seconds in [-86_399, -1, 0, 1, 19_800, 86_399] {
            let offset = Offset::from_seconds(seconds).unwrap();
            assert_eq!(offset.seconds(), seconds);
            assert_eq!(Offset::from_seconds(offset.seconds()).unwrap(), offset);
        }
    }

    #[test]
    fn full_day_is_rejected() {
        assert!(Offset::from_seconds(86_400).is_err());
        assert!(Offset::from_seconds(-86_400).is_err());
        assert!(Offset::from_hours(24).is_err());
        assert!(Offset::from_hours(-24).is_err());
    }

    #[test]
    fn truncating_factories_divide_toward_zero() {
        assert_eq!(Offset::from_milliseconds(-1_500).unwrap().seconds(), -1);
        assert_eq!(Offset::from_milliseconds(1_999).unwrap().seconds(), 1);
        assert_eq!(Offset::from_ticks(-19_999_999).unwrap().seconds(), -1);
        assert_eq!(Offset::from_nanoseconds(999_999_999).unwrap().seconds(), 0);
    }

    #[test]
    fn component_accessors_are_non_negative() {
        let offset = Offset::from_hours_and_minutes(-5, -30).unwrap();
        assert_eq!(offset.seconds(), -19_800);
        assert!(offset.is_negative());
        assert_eq!(offset.hours_component(), 5);
        assert_eq!(offset.minutes_component(), 30);
        assert_eq!(offset.seconds_component(), 0);
        assert_eq!(offset.milliseconds_component(), 0);
    }

    #[test]
    fn arithmetic_respects_range() {
        let twelve = Offset::from_hours(12).unwrap();
        let thirteen = Offset::from_hours(13).unwrap();
        assert!(twelve.checked_add(thirteen).is_err());
        assert_eq!(
            twelve.checked_sub(thirteen).unwrap(),
            Offset::from_hours(-1).unwrap()
        );
        assert_eq!(-thirteen, Offset::from_hours(-13).unwrap());
    }

    #[test]
    fn display() {
        assert_eq!(std::format!("{}", Offset::ZERO), "+00:00");
        let offset = Offset::from_hours_and_minutes(5, 30).unwrap();
        assert_eq!(std::format!("{offset}"), "+05:30");
        let offset = Offset::from_seconds(-3_661).unwrap();
        assert_eq!(std::format!("{offset}"), "-01:01:01");
    }
}
