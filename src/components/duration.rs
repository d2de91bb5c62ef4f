//! A signed length of physical time with nanosecond resolution.

use core::fmt;

use num_traits::FromPrimitive;

use crate::constants::{
    MILLIS_PER_SECOND, NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MILLISECOND, NANOS_PER_MINUTE,
    NANOS_PER_SECOND, NANOS_PER_TICK,
};
use crate::{ChronalError, ChronalResult};

/// The smallest day count a [`Duration`] may carry.
pub(crate) const MIN_DAYS: i32 = -(1 << 24);
/// The largest day count a [`Duration`] may carry.
pub(crate) const MAX_DAYS: i32 = (1 << 24) - 1;

const MIN_NANOSECONDS: i128 = MIN_DAYS as i128 * NANOS_PER_DAY as i128;
const MAX_NANOSECONDS: i128 = (MAX_DAYS as i128 + 1) * NANOS_PER_DAY as i128 - 1;

/// Elapsed physical time at nanosecond resolution.
///
/// A duration is stored as a whole number of "floor days" plus a
/// non-negative nanosecond of day, so `-1ns` is represented as one day
/// down with `NANOS_PER_DAY - 1` nanoseconds up. The nanosecond of day
/// always stays in `[0, NANOS_PER_DAY)`; every operation re-normalizes.
///
/// The representable window is about ±45,000 years, far wider than the
/// instant timeline it measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    days: i32,
    nanos_of_day: u64,
}

impl Duration {
    /// The zero duration.
    pub const ZERO: Self = Self::from_parts_unchecked(0, 0);
    /// One nanosecond, the smallest positive duration.
    pub const EPSILON: Self = Self::from_parts_unchecked(0, 1);
    /// The smallest representable duration.
    pub const MIN: Self = Self::from_parts_unchecked(MIN_DAYS, 0);
    /// The largest representable duration.
    pub const MAX: Self = Self::from_parts_unchecked(MAX_DAYS, NANOS_PER_DAY as u64 - 1);
    /// Exactly one 24-hour day.
    pub const ONE_DAY: Self = Self::from_parts_unchecked(1, 0);
    /// Exactly seven 24-hour days.
    pub const ONE_WEEK: Self = Self::from_parts_unchecked(7, 0);

    pub(crate) const fn from_parts_unchecked(days: i32, nanos_of_day: u64) -> Self {
        debug_assert!(nanos_of_day < NANOS_PER_DAY as u64);
        Self {
            days,
            nanos_of_day,
        }
    }

    /// Creates a duration from a floor-day count and a nanosecond of
    /// day in `[0, NANOS_PER_DAY)`.
    pub fn new(days: i32, nanosecond_of_day: i64) -> ChronalResult<Self> {
        if !(0..NANOS_PER_DAY).contains(&nanosecond_of_day) {
            return Err(ChronalError::out_of_range()
                .with_message("nanosecond of day must be within a single day."));
        }
        if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
            return Err(duration_range_error());
        }
        Ok(Self::from_parts_unchecked(days, nanosecond_of_day as u64))
    }

    /// Creates a duration from an exact nanosecond count.
    pub fn from_nanoseconds(nanoseconds: i128) -> ChronalResult<Self> {
        if !(MIN_NANOSECONDS..=MAX_NANOSECONDS).contains(&nanoseconds) {
            return Err(duration_range_error());
        }
        let days = nanoseconds.div_euclid(NANOS_PER_DAY as i128) as i32;
        let nanos = nanoseconds.rem_euclid(NANOS_PER_DAY as i128) as u64;
        Ok(Self::from_parts_unchecked(days, nanos))
    }

    /// Creates a duration from a floating point nanosecond count.
    ///
    /// This conversion is not round-trip precise: an `f64` cannot
    /// represent every nanosecond count in the duration's range.
    /// Non-finite inputs are rejected.
    pub fn from_nanoseconds_f64(nanoseconds: f64) -> ChronalResult<Self> {
        if !nanoseconds.is_finite() {
            return Err(
                ChronalError::out_of_range().with_message("nanosecond count must be finite.")
            );
        }
        let nanos = i128::from_f64(nanoseconds).ok_or_else(duration_range_error)?;
        Self::from_nanoseconds(nanos)
    }

    /// Creates a duration from a tick (100ns) count.
    pub fn from_ticks(ticks: i64) -> ChronalResult<Self> {
        Self::from_nanoseconds(ticks as i128 * NANOS_PER_TICK as i128)
    }

    /// Creates a duration from a millisecond count.
    pub fn from_milliseconds(milliseconds: i64) -> ChronalResult<Self> {
        Self::from_nanoseconds(milliseconds as i128 * NANOS_PER_MILLISECOND as i128)
    }

    /// Creates a duration from a second count.
    pub fn from_seconds(seconds: i64) -> ChronalResult<Self> {
        Self::from_nanoseconds(seconds as i128 * NANOS_PER_SECOND as i128)
    }

    /// Creates a duration from a minute count.
    pub fn from_minutes(minutes: i64) -> ChronalResult<Self> {
        Self::from_nanoseconds(minutes as i128 * NANOS_PER_MINUTE as i128)
    }

    /// Creates a duration from an hour count.
    pub fn from_hours(hours: i64) -> ChronalResult<Self> {
        Self::from_nanoseconds(hours as i128 * NANOS_PER_HOUR as i128)
    }

    /// Creates a duration from a day count.
    pub fn from_days(days: i64) -> ChronalResult<Self> {
        Self::from_nanoseconds(days as i128 * NANOS_PER_DAY as i128)
    }
}

// ==== Accessors ====

impl Duration {
    /// The floor-day component. Negative durations with a fractional
    /// day report the day below, keeping the nanosecond of day
    /// non-negative.
    #[inline]
    #[must_use]
    pub const fn days(&self) -> i32 {
        self.days
    }

    /// The non-negative nanosecond of day in `[0, NANOS_PER_DAY)`.
    #[inline]
    #[must_use]
    pub const fn nanosecond_of_day(&self) -> i64 {
        self.nanos_of_day as i64
    }

    /// The hour component of the nanosecond of day, in `[0, 24)`.
    #[must_use]
    pub const fn hours(&self) -> i64 {
        self.nanosecond_of_day() / NANOS_PER_HOUR
    }

    /// The minute component, in `[0, 60)`.
    #[must_use]
    pub const fn minutes(&self) -> i64 {
        (self.nanosecond_of_day() / NANOS_PER_MINUTE) % 60
    }

    /// The second component, in `[0, 60)`.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        (self.nanosecond_of_day() / NANOS_PER_SECOND) % 60
    }

    /// The millisecond component, in `[0, 1000)`.
    #[must_use]
    pub const fn milliseconds(&self) -> i64 {
        (self.nanosecond_of_day() / NANOS_PER_MILLISECOND) % MILLIS_PER_SECOND
    }

    /// The tick-of-second component, in `[0, 10^7)`.
    #[must_use]
    pub const fn subsecond_ticks(&self) -> i64 {
        (self.nanosecond_of_day() % NANOS_PER_SECOND) / NANOS_PER_TICK
    }

    /// The nanosecond-of-second component, in `[0, 10^9)`.
    #[must_use]
    pub const fn subsecond_nanoseconds(&self) -> i64 {
        self.nanosecond_of_day() % NANOS_PER_SECOND
    }

    /// The exact total number of nanoseconds.
    #[must_use]
    pub const fn total_nanoseconds(&self) -> i128 {
        self.days as i128 * NANOS_PER_DAY as i128 + self.nanos_of_day as i128
    }

    /// The total number of ticks, truncated toward zero. The result
    /// wraps for magnitudes beyond roughly ±29,000 years; every value
    /// on the instant timeline converts exactly.
    #[must_use]
    pub const fn to_ticks(&self) -> i64 {
        (self.total_nanoseconds() / NANOS_PER_TICK as i128) as i64
    }

    /// The total number of days, including the fractional part.
    #[must_use]
    pub fn total_days(&self) -> f64 {
        self.total_nanoseconds() as f64 / NANOS_PER_DAY as f64
    }

    /// The total number of hours, including the fractional part.
    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.total_nanoseconds() as f64 / NANOS_PER_HOUR as f64
    }

    /// The total number of minutes, including the fractional part.
    #[must_use]
    pub fn total_minutes(&self) -> f64 {
        self.total_nanoseconds() as f64 / NANOS_PER_MINUTE as f64
    }

    /// The total number of seconds, including the fractional part.
    #[must_use]
    pub fn total_seconds(&self) -> f64 {
        self.total_nanoseconds() as f64 / NANOS_PER_SECOND as f64
    }

    /// The total number of milliseconds, including the fractional part.
    #[must_use]
    pub fn total_milliseconds(&self) -> f64 {
        self.total_nanoseconds() as f64 / NANOS_PER_MILLISECOND as f64
    }

    /// The total number of ticks, including the fractional part.
    #[must_use]
    pub fn total_ticks(&self) -> f64 {
        self.total_nanoseconds() as f64 / NANOS_PER_TICK as f64
    }

    /// The total number of nanoseconds as a float.
    #[must_use]
    pub fn total_nanoseconds_f64(&self) -> f64 {
        self.total_nanoseconds() as f64
    }
}

// ==== Arithmetic ====

impl Duration {
    /// Adds two durations, normalizing the carry of the nanosecond of
    /// day into the day count.
    pub fn checked_add(&self, other: &Self) -> ChronalResult<Self> {
        // Both day counts fit 25 bits, so the widened sum cannot wrap.
        let mut days = i64::from(self.days) + i64::from(other.days);
        let mut nanos = self.nanos_of_day + other.nanos_of_day;
        if nanos >= NANOS_PER_DAY as u64 {
            nanos -= NANOS_PER_DAY as u64;
            days += 1;
        }
        if days < i64::from(MIN_DAYS) || days > i64::from(MAX_DAYS) {
            return Err(duration_range_error());
        }
        Ok(Self::from_parts_unchecked(days as i32, nanos))
    }

    /// Subtracts a duration, normalizing the borrow of the nanosecond
    /// of day from the day count.
    pub fn checked_sub(&self, other: &Self) -> ChronalResult<Self> {
        let mut days = i64::from(self.days) - i64::from(other.days);
        let nanos = if self.nanos_of_day >= other.nanos_of_day {
            self.nanos_of_day - other.nanos_of_day
        } else {
            days -= 1;
            NANOS_PER_DAY as u64 + self.nanos_of_day - other.nanos_of_day
        };
        if days < i64::from(MIN_DAYS) || days > i64::from(MAX_DAYS) {
            return Err(duration_range_error());
        }
        Ok(Self::from_parts_unchecked(days as i32, nanos))
    }

    /// Negates this duration. Fails only for [`Duration::MIN`], whose
    /// magnitude exceeds [`Duration::MAX`] by one nanosecond.
    pub fn negated(&self) -> ChronalResult<Self> {
        if self.nanos_of_day == 0 {
            if self.days == MIN_DAYS {
                return Err(duration_range_error());
            }
            return Ok(Self::from_parts_unchecked(-self.days, 0));
        }
        Ok(Self::from_parts_unchecked(
            -self.days - 1,
            NANOS_PER_DAY as u64 - self.nanos_of_day,
        ))
    }

    /// Multiplies by an integer scalar. Small magnitudes take a 64-bit
    /// fast path; the rest fall back to checked 128-bit arithmetic.
    pub fn checked_mul(&self, scalar: i64) -> ChronalResult<Self> {
        let nanos = self.total_nanoseconds();
        if let Ok(small) = i64::try_from(nanos) {
            if let Some(product) = small.checked_mul(scalar) {
                return Self::from_nanoseconds(i128::from(product));
            }
        }
        let product = nanos
            .checked_mul(i128::from(scalar))
            .ok_or_else(duration_range_error)?;
        Self::from_nanoseconds(product)
    }

    /// Divides by an integer scalar, truncating toward zero.
    pub fn checked_div(&self, divisor: i64) -> ChronalResult<Self> {
        if divisor == 0 {
            return Err(
                ChronalError::divide_by_zero().with_message("duration divided by zero.")
            );
        }
        Self::from_nanoseconds(self.total_nanoseconds() / i128::from(divisor))
    }

    /// Multiplies by a floating point scalar.
    pub fn multiplied_by_f64(&self, scalar: f64) -> ChronalResult<Self> {
        Self::from_nanoseconds_f64(self.total_nanoseconds() as f64 * scalar)
    }

    /// Divides by a floating point scalar.
    pub fn divided_by_f64(&self, divisor: f64) -> ChronalResult<Self> {
        if divisor == 0.0 {
            return Err(
                ChronalError::divide_by_zero().with_message("duration divided by zero.")
            );
        }
        Self::from_nanoseconds_f64(self.total_nanoseconds() as f64 / divisor)
    }

    /// Divides by another duration, returning the ratio.
    pub fn divided_by_duration(&self, divisor: &Self) -> ChronalResult<f64> {
        if *divisor == Self::ZERO {
            return Err(
                ChronalError::divide_by_zero().with_message("duration divided by zero duration.")
            );
        }
        Ok(self.total_nanoseconds() as f64 / divisor.total_nanoseconds() as f64)
    }
}

#[inline]
fn duration_range_error() -> ChronalError {
    ChronalError::out_of_range().with_message("duration is outside the representable range.")
}

impl fmt::Display for Duration {
    /// Formats as `-?D:HH:mm:ss.fffffffff`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total_nanoseconds();
        let magnitude = total.unsigned_abs();
        if total < 0 {
            f.write_str("-")?;
        }
        let days = magnitude / NANOS_PER_DAY as u128;
        let nanos = magnitude % NANOS_PER_DAY as u128;
        let hours = nanos / NANOS_PER_HOUR as u128;
        let minutes = (nanos / NANOS_PER_MINUTE as u128) % 60;
        let seconds = (nanos / NANOS_PER_SECOND as u128) % 60;
        let fraction = nanos % NANOS_PER_SECOND as u128;
        write!(f, "{days}:{hours:02}:{minutes:02}:{seconds:02}.{fraction:09}")
    }
}
