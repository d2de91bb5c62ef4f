//! A civil date and time of day.

use core::cmp::Ordering;
use core::fmt;

use crate::calendar::CalendarSystem;
use crate::components::instant::LocalInstant;
use crate::components::{LocalDate, LocalTime};
use crate::constants::{
    NANOS_PER_HOUR, NANOS_PER_MILLISECOND, NANOS_PER_MINUTE, NANOS_PER_SECOND, NANOS_PER_TICK,
};
use crate::{ChronalError, ChronalResult};

/// A date paired with a time of day in the same calendar, with no zone
/// attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}

impl LocalDateTime {
    /// Combines a date and a time of day.
    #[must_use]
    pub const fn new(date: LocalDate, time: LocalTime) -> Self {
        Self { date, time }
    }

    /// Creates an ISO-calendar date-time from its fields.
    pub fn try_new_iso(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> ChronalResult<Self> {
        Ok(Self::new(
            LocalDate::try_new_iso(year, month, day)?,
            LocalTime::new(hour, minute, second)?,
        ))
    }

    /// The date portion.
    #[inline]
    #[must_use]
    pub const fn date(&self) -> LocalDate {
        self.date
    }

    /// The time-of-day portion.
    #[inline]
    #[must_use]
    pub const fn time(&self) -> LocalTime {
        self.time
    }

    /// The calendar of the date portion.
    #[must_use]
    pub fn calendar(&self) -> CalendarSystem {
        self.date.calendar()
    }

    /// Replaces the time of day.
    #[must_use]
    pub const fn with_time(&self, time: LocalTime) -> Self {
        Self::new(self.date, time)
    }

    /// Replaces the date, keeping the time of day.
    #[must_use]
    pub const fn with_date(&self, date: LocalDate) -> Self {
        Self::new(date, self.time)
    }

    /// Converts the date portion to another calendar, preserving the
    /// day number and the time of day.
    pub fn with_calendar(&self, calendar: CalendarSystem) -> ChronalResult<Self> {
        Ok(Self::new(self.date.with_calendar(calendar)?, self.time))
    }

    /// The local-instant bridge value of this date-time: the same
    /// reading treated as if it were UTC.
    pub(crate) fn to_local_instant(&self) -> LocalInstant {
        LocalInstant::new(
            self.date.days_since_epoch(),
            self.time.nanosecond_of_day() as u64,
        )
    }

    pub(crate) fn from_local_instant(
        local: LocalInstant,
        calendar: CalendarSystem,
    ) -> ChronalResult<Self> {
        let date = LocalDate::from_days_since_epoch(local.days(), calendar)?;
        let time = LocalTime::from_nanosecond_of_day(local.nanosecond_of_day() as i64)?;
        Ok(Self::new(date, time))
    }

    /// Compares two date-times, failing when their calendars differ.
    pub fn compare_to(&self, other: &Self) -> ChronalResult<Ordering> {
        self.partial_cmp(other).ok_or_else(|| {
            ChronalError::invariant()
                .with_message("date-times in different calendars are not comparable.")
        })
    }
}

// ==== Arithmetic ====

impl LocalDateTime {
    /// Adds a nanosecond count: the time wraps within the day and the
    /// carry feeds the date.
    pub fn plus_nanoseconds(&self, nanoseconds: i64) -> ChronalResult<Self> {
        self.plus_nanos_i128(i128::from(nanoseconds))
    }

    pub(crate) fn plus_nanos_i128(&self, nanoseconds: i128) -> ChronalResult<Self> {
        let (carry, time) = self.time.plus_nanoseconds_with_carry(nanoseconds);
        Ok(Self::new(self.date.plus_days(carry)?, time))
    }

    /// Adds ticks with day carry.
    pub fn plus_ticks(&self, ticks: i64) -> ChronalResult<Self> {
        self.plus_nanos_i128(i128::from(ticks) * i128::from(NANOS_PER_TICK))
    }

    /// Adds milliseconds with day carry.
    pub fn plus_milliseconds(&self, milliseconds: i64) -> ChronalResult<Self> {
        self.plus_nanos_i128(i128::from(milliseconds) * i128::from(NANOS_PER_MILLISECOND))
    }

    /// Adds seconds with day carry.
    pub fn plus_seconds(&self, seconds: i64) -> ChronalResult<Self> {
        self.plus_nanos_i128(i128::from(seconds) * i128::from(NANOS_PER_SECOND))
    }

    /// Adds minutes with day carry.
    pub fn plus_minutes(&self, minutes: i64) -> ChronalResult<Self> {
        self.plus_nanos_i128(i128::from(minutes) * i128::from(NANOS_PER_MINUTE))
    }

    /// Adds hours with day carry.
    pub fn plus_hours(&self, hours: i64) -> ChronalResult<Self> {
        self.plus_nanos_i128(i128::from(hours) * i128::from(NANOS_PER_HOUR))
    }

    /// Adds days, keeping the time of day.
    pub fn plus_days(&self, days: i64) -> ChronalResult<Self> {
        Ok(Self::new(self.date.plus_days(days)?, self.time))
    }

    /// Adds weeks, keeping the time of day.
    pub fn plus_weeks(&self, weeks: i64) -> ChronalResult<Self> {
        Ok(Self::new(self.date.plus_weeks(weeks)?, self.time))
    }

    /// Adds months with the calendar's month-end clamping.
    pub fn plus_months(&self, months: i64) -> ChronalResult<Self> {
        Ok(Self::new(self.date.plus_months(months)?, self.time))
    }

    /// Adds years with the calendar's month-end clamping.
    pub fn plus_years(&self, years: i64) -> ChronalResult<Self> {
        Ok(Self::new(self.date.plus_years(years)?, self.time))
    }

    /// Adds a period: date components in descending significance, then
    /// the sub-day tail with day carry.
    pub fn plus_period(&self, period: &crate::components::Period) -> ChronalResult<Self> {
        period.add_to_date_time(self)
    }

    /// Subtracts a period component-wise.
    pub fn minus_period(&self, period: &crate::components::Period) -> ChronalResult<Self> {
        period.negated()?.add_to_date_time(self)
    }
}

impl PartialOrd for LocalDateTime {
    /// Date-times in different calendars are not comparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.date.partial_cmp(&other.date) {
            Some(Ordering::Equal) => Some(self.time.cmp(&other.time)),
            ordering => ordering,
        }
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_arithmetic_carries_into_date() {
        let late = LocalDateTime::try_new_iso(2011, 12, 31, 23, 30, 0).unwrap();
        let next = late.plus_hours(1).unwrap();
        assert_eq!(next, LocalDateTime::try_new_iso(2012, 1, 1, 0, 30, 0).unwrap());
        let back = next.plus_minutes(-31).unwrap();
        assert_eq!(back, LocalDateTime::try_new_iso(2011, 12, 31, 23, 59, 0).unwrap());
    }

    #[test]
    fn day_carry_at_range_boundary_fails() {
        let max = LocalDateTime::try_new_iso(9999, 12, 31, 23, 59, 59).unwrap();
        assert!(max.plus_hours(1).is_err());
        assert!(max.plus_seconds(1).is_err());
    }

    #[test]
    fn date_units_preserve_time() {
        let dt = LocalDateTime::try_new_iso(2011, 1, 30, 14, 15, 16).unwrap();
        let shifted = dt.plus_months(1).unwrap();
        assert_eq!(shifted.date(), LocalDate::try_new_iso(2011, 2, 28).unwrap());
        assert_eq!(shifted.time(), dt.time());
    }

    #[test]
    fn ordering_within_calendar() {
        let a = LocalDateTime::try_new_iso(2017, 3, 12, 2, 30, 0).unwrap();
        let b = LocalDateTime::try_new_iso(2017, 3, 12, 3, 30, 0).unwrap();
        assert!(a < b);
        let julian = a.with_calendar(CalendarSystem::julian()).unwrap();
        assert_eq!(a.partial_cmp(&julian), None);
    }

    #[test]
    fn display() {
        let dt = LocalDateTime::try_new_iso(2017, 3, 12, 2, 30, 0).unwrap();
        assert_eq!(std::format!("{dt}"), "2017-03-12T02:30:00.000000000");
    }
}
