//! A civil calendar date.

use core::cmp::Ordering;
use core::fmt;

use crate::calendar::{gregorian, CalendarSystem, Era};
use crate::components::{LocalDateTime, LocalTime};
use crate::utils;
use crate::ymd::YearMonthDayCalendar;
use crate::{ChronalError, ChronalResult};

/// A date in a particular calendar system, with no time-of-day or zone
/// attached.
///
/// The packed year/month/day is validated against its calendar on
/// construction, so every reachable value is a legal date. Equality is
/// structural and includes the calendar; ordering is only defined
/// between dates in the same calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalDate {
    ymdc: YearMonthDayCalendar,
}

impl LocalDate {
    pub(crate) const fn from_ymdc(ymdc: YearMonthDayCalendar) -> Self {
        Self { ymdc }
    }

    /// Creates a date in the given calendar, validating the fields.
    pub fn try_new(
        year: i32,
        month: u8,
        day: u8,
        calendar: CalendarSystem,
    ) -> ChronalResult<Self> {
        calendar.validate_ymd(year, month, day)?;
        let ymd = crate::ymd::YearMonthDay::new(year, month, day);
        Ok(Self::from_ymdc(ymd.with_calendar_ordinal(calendar.ordinal())))
    }

    /// Creates a date in the ISO calendar.
    pub fn try_new_iso(year: i32, month: u8, day: u8) -> ChronalResult<Self> {
        Self::try_new(year, month, day, CalendarSystem::iso())
    }

    /// Creates a date from an era-relative year.
    pub fn try_new_from_era(
        era: Era,
        year_of_era: i32,
        month: u8,
        day: u8,
        calendar: CalendarSystem,
    ) -> ChronalResult<Self> {
        let year = calendar.absolute_year(year_of_era, era)?;
        Self::try_new(year, month, day, calendar)
    }

    /// Creates a date from a day number since the Unix epoch.
    pub fn from_days_since_epoch(days: i32, calendar: CalendarSystem) -> ChronalResult<Self> {
        if days < calendar.min_days() || days > calendar.max_days() {
            return Err(ChronalError::out_of_range()
                .with_message("day number is outside the calendar's supported range."));
        }
        let ymd = calendar.ymd_from_days(days);
        Ok(Self::from_ymdc(ymd.with_calendar_ordinal(calendar.ordinal())))
    }

    /// Creates a date from an ISO week-year, week number and ISO day of
    /// week.
    pub fn from_week_year_week_day(
        week_year: i32,
        week: i32,
        day_of_week: u8,
    ) -> ChronalResult<Self> {
        validate_day_of_week(day_of_week)?;
        let calendar = CalendarSystem::iso();
        if week_year < calendar.min_year() || week_year > calendar.max_year() {
            return Err(ChronalError::out_of_range()
                .with_message("week-year is outside the supported range."));
        }
        let monday = iso_week_one_monday(week_year);
        let weeks = (iso_week_one_monday(week_year + 1) - monday) / 7;
        if week < 1 || week > weeks {
            return Err(ChronalError::out_of_range()
                .with_message("week is not valid for the week-year."));
        }
        let days = monday + (week - 1) * 7 + i32::from(day_of_week) - 1;
        Self::from_days_since_epoch(days, calendar)
    }

    /// Creates a date from the nth occurrence of a day of the week
    /// within an ISO month. The fifth occurrence clamps to the last
    /// occurrence when the month has only four.
    pub fn from_year_month_week_day(
        year: i32,
        month: u8,
        occurrence: u8,
        day_of_week: u8,
    ) -> ChronalResult<Self> {
        validate_day_of_week(day_of_week)?;
        if !(1..=5).contains(&occurrence) {
            return Err(
                ChronalError::out_of_range().with_message("occurrence must be in 1..=5.")
            );
        }
        let calendar = CalendarSystem::iso();
        calendar.validate_ymd(year, month, 1)?;

        let first = gregorian::days_since_epoch(year, month, 1);
        let first_dow = i32::from(utils::day_of_week(first));
        let first_occurrence =
            first + (i32::from(day_of_week) - first_dow).rem_euclid(7);
        let mut days = first_occurrence + (i32::from(occurrence) - 1) * 7;

        let last = first + i32::from(calendar.raw_days_in_month(year, month)) - 1;
        if days > last {
            days -= 7;
        }
        Self::from_days_since_epoch(days, calendar)
    }
}

// ==== Accessors ====

impl LocalDate {
    /// The calendar this date belongs to.
    #[must_use]
    pub fn calendar(&self) -> CalendarSystem {
        CalendarSystem::from_valid_ordinal(self.ymdc.calendar_ordinal())
    }

    pub(crate) fn calendar_ordinal(&self) -> u8 {
        self.ymdc.calendar_ordinal()
    }

    pub(crate) const fn ymd(&self) -> crate::ymd::YearMonthDay {
        self.ymdc.ymd()
    }

    /// The absolute year.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.ymdc.year()
    }

    /// The month of the year, 1-based.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.ymdc.month()
    }

    /// The day of the month, 1-based.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.ymdc.day()
    }

    /// The era of the year.
    #[must_use]
    pub fn era(&self) -> Era {
        self.calendar().era_of(self.year())
    }

    /// The year within its era.
    #[must_use]
    pub fn year_of_era(&self) -> i32 {
        self.calendar().year_of_era(self.year())
    }

    /// The signed day number since the Unix epoch.
    #[must_use]
    pub fn days_since_epoch(&self) -> i32 {
        self.calendar().days_since_epoch(self.ymd())
    }

    /// The ISO day of the week, 1 = Monday through 7 = Sunday.
    #[must_use]
    pub fn day_of_week(&self) -> u8 {
        self.calendar().day_of_week(self.ymd())
    }

    /// The day of the year, 1-based.
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        let start = self
            .calendar()
            .raw_days_since_epoch(self.year(), 1, 1);
        (self.days_since_epoch() - start + 1) as u16
    }

    /// The ISO week-year owning this date's week.
    #[must_use]
    pub fn week_year(&self) -> i32 {
        self.calendar().week_year(self.ymd())
    }

    /// The week of the week-year, 1-based.
    #[must_use]
    pub fn week_of_week_year(&self) -> u8 {
        self.calendar().week_of_week_year(self.ymd())
    }
}

// ==== Arithmetic ====

impl LocalDate {
    /// Adds a number of days.
    pub fn plus_days(&self, days: i64) -> ChronalResult<Self> {
        let shifted = i64::from(self.days_since_epoch())
            .checked_add(days)
            .ok_or_else(|| {
                ChronalError::out_of_range().with_message("day arithmetic overflow.")
            })?;
        let shifted = i32::try_from(shifted).map_err(|_| {
            ChronalError::out_of_range().with_message("day arithmetic overflow.")
        })?;
        Self::from_days_since_epoch(shifted, self.calendar())
    }

    /// Adds a number of weeks.
    pub fn plus_weeks(&self, weeks: i64) -> ChronalResult<Self> {
        let days = weeks.checked_mul(7).ok_or_else(|| {
            ChronalError::out_of_range().with_message("week arithmetic overflow.")
        })?;
        self.plus_days(days)
    }

    /// Adds a number of months, clamping to the end of the target
    /// month when the day does not exist there.
    pub fn plus_months(&self, months: i64) -> ChronalResult<Self> {
        let calendar = self.calendar();
        let ymd = calendar.plus_months(self.ymd(), months)?;
        Ok(Self::from_ymdc(ymd.with_calendar_ordinal(calendar.ordinal())))
    }

    /// Adds a number of years, clamping as for months.
    pub fn plus_years(&self, years: i64) -> ChronalResult<Self> {
        let calendar = self.calendar();
        let ymd = calendar.plus_years(self.ymd(), years)?;
        Ok(Self::from_ymdc(ymd.with_calendar_ordinal(calendar.ordinal())))
    }

    /// Converts this date to another calendar, preserving the day
    /// number since the epoch.
    pub fn with_calendar(&self, calendar: CalendarSystem) -> ChronalResult<Self> {
        Self::from_days_since_epoch(self.days_since_epoch(), calendar)
    }

    /// Adds a period. Only date components are legal; see
    /// [`Period::add_to_date`](crate::Period::add_to_date).
    pub fn plus_period(&self, period: &crate::components::Period) -> ChronalResult<Self> {
        period.add_to_date(self)
    }

    /// Subtracts a period component-wise.
    pub fn minus_period(&self, period: &crate::components::Period) -> ChronalResult<Self> {
        period.negated()?.add_to_date(self)
    }

    /// Compares two dates, failing when their calendars differ.
    pub fn compare_to(&self, other: &Self) -> ChronalResult<Ordering> {
        self.partial_cmp(other).ok_or_else(|| {
            ChronalError::invariant()
                .with_message("dates in different calendars are not comparable.")
        })
    }
}

// ==== Day-of-week navigation ====

impl LocalDate {
    /// The next date falling on the given day of the week, always
    /// strictly after this date.
    pub fn next(&self, day_of_week: u8) -> ChronalResult<Self> {
        validate_day_of_week(day_of_week)?;
        let gap = (i64::from(day_of_week) - i64::from(self.day_of_week())).rem_euclid(7);
        self.plus_days(if gap == 0 { 7 } else { gap })
    }

    /// The next date falling on the given day of the week, or this
    /// date when it already does.
    pub fn next_or_same(&self, day_of_week: u8) -> ChronalResult<Self> {
        validate_day_of_week(day_of_week)?;
        if self.day_of_week() == day_of_week {
            return Ok(*self);
        }
        self.next(day_of_week)
    }

    /// The previous date falling on the given day of the week, always
    /// strictly before this date.
    pub fn previous(&self, day_of_week: u8) -> ChronalResult<Self> {
        validate_day_of_week(day_of_week)?;
        let gap = (i64::from(self.day_of_week()) - i64::from(day_of_week)).rem_euclid(7);
        self.plus_days(if gap == 0 { -7 } else { -gap })
    }

    /// The previous date falling on the given day of the week, or this
    /// date when it already does.
    pub fn previous_or_same(&self, day_of_week: u8) -> ChronalResult<Self> {
        validate_day_of_week(day_of_week)?;
        if self.day_of_week() == day_of_week {
            return Ok(*self);
        }
        self.previous(day_of_week)
    }
}

// ==== Combination with times ====

impl LocalDate {
    /// The date-time at midnight of this date.
    #[must_use]
    pub fn at_midnight(&self) -> LocalDateTime {
        LocalDateTime::new(*self, LocalTime::MIDNIGHT)
    }

    /// The date-time at the given time of this date.
    #[must_use]
    pub fn at(&self, time: LocalTime) -> LocalDateTime {
        LocalDateTime::new(*self, time)
    }
}

impl PartialOrd for LocalDate {
    /// Dates in different calendars are not comparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.calendar_ordinal() != other.calendar_ordinal() {
            return None;
        }
        Some(self.ymdc.cmp(&other.ymdc))
    }
}

fn validate_day_of_week(day_of_week: u8) -> ChronalResult<()> {
    if !(1..=7).contains(&day_of_week) {
        return Err(
            ChronalError::out_of_range().with_message("day of week must be in 1..=7.")
        );
    }
    Ok(())
}

/// The Monday starting ISO week 1 of the given week-year: the Monday of
/// the week containing the year's first Thursday.
fn iso_week_one_monday(week_year: i32) -> i32 {
    let jan_first = gregorian::days_since_epoch(week_year, 1, 1);
    let dow = i32::from(utils::day_of_week(jan_first));
    if dow <= 4 {
        jan_first + 1 - dow
    } else {
        jan_first + 8 - dow
    }
}

impl fmt::Display for LocalDate {
    /// Formats as `uuuu-MM-dd`, with the calendar identifier appended
    /// for non-ISO calendars.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year() < 0 {
            write!(f, "-{:04}", -self.year())?;
        } else {
            write!(f, "{:04}", self.year())?;
        }
        write!(f, "-{:02}-{:02}", self.month(), self.day())?;
        if self.calendar_ordinal() != 0 {
            write!(f, " ({})", self.calendar().id())?;
        }
        Ok(())
    }
}
