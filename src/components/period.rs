//! Calendar-unit differences.

use core::fmt;

use bitflags::bitflags;

use crate::components::{LocalDate, LocalDateTime};
use crate::constants::{
    NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MILLISECOND, NANOS_PER_MINUTE, NANOS_PER_SECOND,
    NANOS_PER_TICK,
};
use crate::{ChronalError, ChronalResult};

bitflags! {
    /// The units a [`Period`] computation may populate.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PeriodUnits: u16 {
        const YEARS = 1 << 0;
        const MONTHS = 1 << 1;
        const WEEKS = 1 << 2;
        const DAYS = 1 << 3;
        const HOURS = 1 << 4;
        const MINUTES = 1 << 5;
        const SECONDS = 1 << 6;
        const MILLISECONDS = 1 << 7;
        const TICKS = 1 << 8;
        const NANOSECONDS = 1 << 9;

        /// The default units for date differences.
        const DATE = Self::YEARS.bits() | Self::MONTHS.bits() | Self::DAYS.bits();
        /// All sub-day units.
        const TIME = Self::HOURS.bits()
            | Self::MINUTES.bits()
            | Self::SECONDS.bits()
            | Self::MILLISECONDS.bits()
            | Self::TICKS.bits()
            | Self::NANOSECONDS.bits();
        /// The default units for date-time differences.
        const DATE_AND_TIME = Self::DATE.bits() | Self::TIME.bits();
        /// Every unit, including weeks.
        const ALL = Self::DATE_AND_TIME.bits() | Self::WEEKS.bits();
    }
}

/// A difference between civil values, expressed in independent signed
/// calendar units.
///
/// Unlike a [`Duration`](crate::Duration), the elapsed physical time a
/// period represents depends on the calendar and the starting date:
/// adding one month to January 31st and to February 1st moves by
/// different numbers of days. Periods are plain component tuples;
/// equality is component-wise, so `25 hours` and `1 day, 1 hour` are
/// distinct values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Period {
    years: i64,
    months: i64,
    weeks: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    milliseconds: i64,
    ticks: i64,
    nanoseconds: i64,
}

impl Period {
    /// The period with every component zero.
    pub const ZERO: Self = Self {
        years: 0,
        months: 0,
        weeks: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        milliseconds: 0,
        ticks: 0,
        nanoseconds: 0,
    };

    /// A period of the given number of years.
    #[must_use]
    pub const fn from_years(years: i64) -> Self {
        Self {
            years,
            ..Self::ZERO
        }
    }

    /// A period of the given number of months.
    #[must_use]
    pub const fn from_months(months: i64) -> Self {
        Self {
            months,
            ..Self::ZERO
        }
    }

    /// A period of the given number of weeks.
    #[must_use]
    pub const fn from_weeks(weeks: i64) -> Self {
        Self {
            weeks,
            ..Self::ZERO
        }
    }

    /// A period of the given number of days.
    #[must_use]
    pub const fn from_days(days: i64) -> Self {
        Self {
            days,
            ..Self::ZERO
        }
    }

    /// A period of the given number of hours.
    #[must_use]
    pub const fn from_hours(hours: i64) -> Self {
        Self {
            hours,
            ..Self::ZERO
        }
    }

    /// A period of the given number of minutes.
    #[must_use]
    pub const fn from_minutes(minutes: i64) -> Self {
        Self {
            minutes,
            ..Self::ZERO
        }
    }

    /// A period of the given number of seconds.
    #[must_use]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self {
            seconds,
            ..Self::ZERO
        }
    }

    /// A period of the given number of milliseconds.
    #[must_use]
    pub const fn from_milliseconds(milliseconds: i64) -> Self {
        Self {
            milliseconds,
            ..Self::ZERO
        }
    }

    /// A period of the given number of ticks.
    #[must_use]
    pub const fn from_ticks(ticks: i64) -> Self {
        Self {
            ticks,
            ..Self::ZERO
        }
    }

    /// A period of the given number of nanoseconds.
    #[must_use]
    pub const fn from_nanoseconds(nanoseconds: i64) -> Self {
        Self {
            nanoseconds,
            ..Self::ZERO
        }
    }
}

// ==== Accessors ====

impl Period {
    /// The years component.
    #[must_use]
    pub const fn years(&self) -> i64 {
        self.years
    }

    /// The months component.
    #[must_use]
    pub const fn months(&self) -> i64 {
        self.months
    }

    /// The weeks component.
    #[must_use]
    pub const fn weeks(&self) -> i64 {
        self.weeks
    }

    /// The days component.
    #[must_use]
    pub const fn days(&self) -> i64 {
        self.days
    }

    /// The hours component.
    #[must_use]
    pub const fn hours(&self) -> i64 {
        self.hours
    }

    /// The minutes component.
    #[must_use]
    pub const fn minutes(&self) -> i64 {
        self.minutes
    }

    /// The seconds component.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// The milliseconds component.
    #[must_use]
    pub const fn milliseconds(&self) -> i64 {
        self.milliseconds
    }

    /// The ticks component.
    #[must_use]
    pub const fn ticks(&self) -> i64 {
        self.ticks
    }

    /// The nanoseconds component.
    #[must_use]
    pub const fn nanoseconds(&self) -> i64 {
        self.nanoseconds
    }

    /// Whether any sub-day component is non-zero.
    #[must_use]
    pub const fn has_time_components(&self) -> bool {
        self.hours != 0
            || self.minutes != 0
            || self.seconds != 0
            || self.milliseconds != 0
            || self.ticks != 0
            || self.nanoseconds != 0
    }

    /// Whether any date component is non-zero.
    #[must_use]
    pub const fn has_date_components(&self) -> bool {
        self.years != 0 || self.months != 0 || self.weeks != 0 || self.days != 0
    }

    /// The total of the sub-day components in nanoseconds.
    fn time_nanoseconds(&self) -> i128 {
        i128::from(self.hours) * i128::from(NANOS_PER_HOUR)
            + i128::from(self.minutes) * i128::from(NANOS_PER_MINUTE)
            + i128::from(self.seconds) * i128::from(NANOS_PER_SECOND)
            + i128::from(self.milliseconds) * i128::from(NANOS_PER_MILLISECOND)
            + i128::from(self.ticks) * i128::from(NANOS_PER_TICK)
            + i128::from(self.nanoseconds)
    }
}

// ==== Component-wise arithmetic ====

impl Period {
    fn zip_components(
        &self,
        other: &Self,
        op: impl Fn(i64, i64) -> Option<i64>,
    ) -> ChronalResult<Self> {
        let overflow =
            || ChronalError::out_of_range().with_message("period component overflow.");
        Ok(Self {
            years: op(self.years, other.years).ok_or_else(overflow)?,
            months: op(self.months, other.months).ok_or_else(overflow)?,
            weeks: op(self.weeks, other.weeks).ok_or_else(overflow)?,
            days: op(self.days, other.days).ok_or_else(overflow)?,
            hours: op(self.hours, other.hours).ok_or_else(overflow)?,
            minutes: op(self.minutes, other.minutes).ok_or_else(overflow)?,
            seconds: op(self.seconds, other.seconds).ok_or_else(overflow)?,
            milliseconds: op(self.milliseconds, other.milliseconds).ok_or_else(overflow)?,
            ticks: op(self.ticks, other.ticks).ok_or_else(overflow)?,
            nanoseconds: op(self.nanoseconds, other.nanoseconds).ok_or_else(overflow)?,
        })
    }

    /// Adds two periods component-wise.
    pub fn checked_add(&self, other: &Self) -> ChronalResult<Self> {
        self.zip_components(other, i64::checked_add)
    }

    /// Subtracts a period component-wise.
    pub fn checked_sub(&self, other: &Self) -> ChronalResult<Self> {
        self.zip_components(other, i64::checked_sub)
    }

    /// Negates every component.
    pub fn negated(&self) -> ChronalResult<Self> {
        Self::ZERO.checked_sub(self)
    }

    /// Collapses the sub-day tail into a normalized carry: hours absorb
    /// the full tail and each smaller unit keeps its remainder, with
    /// ticks folding into milliseconds and nanoseconds. Days never
    /// receive a carry, since the length of a day is calendar
    /// dependent; years, months and weeks pass through untouched.
    pub fn normalize(&self) -> ChronalResult<Self> {
        let overflow = || {
            ChronalError::out_of_range().with_message("normalized hours exceed the range.")
        };
        let mut remainder = self.time_nanoseconds();
        let hours = i64::try_from(remainder / i128::from(NANOS_PER_HOUR))
            .map_err(|_| overflow())?;
        remainder %= i128::from(NANOS_PER_HOUR);
        let minutes = (remainder / i128::from(NANOS_PER_MINUTE)) as i64;
        remainder %= i128::from(NANOS_PER_MINUTE);
        let seconds = (remainder / i128::from(NANOS_PER_SECOND)) as i64;
        remainder %= i128::from(NANOS_PER_SECOND);
        let milliseconds = (remainder / i128::from(NANOS_PER_MILLISECOND)) as i64;
        remainder %= i128::from(NANOS_PER_MILLISECOND);
        Ok(Self {
            years: self.years,
            months: self.months,
            weeks: self.weeks,
            days: self.days,
            hours,
            minutes,
            seconds,
            milliseconds,
            ticks: 0,
            nanoseconds: remainder as i64,
        })
    }
}

// ==== Application to civil values ====

impl Period {
    /// Adds this period to a date. Fields apply in descending order of
    /// significance, each step clamping through the calendar. Fails
    /// with an invariant violation when any time component is set.
    pub fn add_to_date(&self, date: &LocalDate) -> ChronalResult<LocalDate> {
        if self.has_time_components() {
            return Err(ChronalError::invariant()
                .with_message("a period with time components cannot apply to a date."));
        }
        self.add_date_components(date)
    }

    fn add_date_components(&self, date: &LocalDate) -> ChronalResult<LocalDate> {
        let mut result = *date;
        if self.years != 0 {
            result = result.plus_years(self.years)?;
        }
        if self.months != 0 {
            result = result.plus_months(self.months)?;
        }
        if self.weeks != 0 {
            result = result.plus_weeks(self.weeks)?;
        }
        if self.days != 0 {
            result = result.plus_days(self.days)?;
        }
        Ok(result)
    }

    /// Adds this period to a date-time: date components first, then the
    /// sub-day tail with day carry.
    pub fn add_to_date_time(&self, date_time: &LocalDateTime) -> ChronalResult<LocalDateTime> {
        let date = self.add_date_components(&date_time.date())?;
        date_time.with_date(date).plus_nanos_i128(self.time_nanoseconds())
    }
}

// ==== Differences ====

impl Period {
    /// The difference between two dates in years, months and days,
    /// such that `start + period = end` with every component sharing
    /// the overall sign.
    pub fn between_dates(start: &LocalDate, end: &LocalDate) -> ChronalResult<Self> {
        Self::between_dates_with(start, end, PeriodUnits::DATE)
    }

    /// The difference between two dates restricted to the given date
    /// units.
    pub fn between_dates_with(
        start: &LocalDate,
        end: &LocalDate,
        units: PeriodUnits,
    ) -> ChronalResult<Self> {
        if units.is_empty() {
            return Err(ChronalError::invalid_argument().with_message("no units provided."));
        }
        if units.intersects(PeriodUnits::TIME) {
            return Err(ChronalError::invalid_argument()
                .with_message("time units are not valid for a date difference."));
        }
        let sign = match start.compare_to(end)? {
            core::cmp::Ordering::Equal => return Ok(Self::ZERO),
            core::cmp::Ordering::Less => 1,
            core::cmp::Ordering::Greater => -1,
        };
        let (period, _) = date_units_between(start, end, units, sign)?;
        Ok(period)
    }

    /// The difference between two date-times using the default
    /// year/month/day and time units.
    pub fn between_date_times(
        start: &LocalDateTime,
        end: &LocalDateTime,
    ) -> ChronalResult<Self> {
        Self::between_date_times_with(start, end, PeriodUnits::DATE_AND_TIME)
    }

    /// The difference between two date-times restricted to the given
    /// units.
    pub fn between_date_times_with(
        start: &LocalDateTime,
        end: &LocalDateTime,
        units: PeriodUnits,
    ) -> ChronalResult<Self> {
        if units.is_empty() {
            return Err(ChronalError::invalid_argument().with_message("no units provided."));
        }
        let sign = match start.compare_to(end)? {
            core::cmp::Ordering::Equal => return Ok(Self::ZERO),
            core::cmp::Ordering::Less => 1,
            core::cmp::Ordering::Greater => -1,
        };

        // Borrow a day when the time of day runs against the overall
        // direction, so the date difference and the time remainder end
        // up with the same sign.
        let mut end_date = end.date();
        if sign > 0 && end.time() < start.time() {
            end_date = end_date.plus_days(-1)?;
        } else if sign < 0 && end.time() > start.time() {
            end_date = end_date.plus_days(1)?;
        }

        let (mut period, applied) =
            date_units_between(&start.date(), &end_date, units, sign)?;

        let remaining_days =
            i64::from(end.date().days_since_epoch()) - i64::from(applied.days_since_epoch());
        let mut remainder = i128::from(remaining_days) * i128::from(NANOS_PER_DAY)
            + i128::from(end.time().nanosecond_of_day())
            - i128::from(start.time().nanosecond_of_day());

        let time_overflow =
            || ChronalError::out_of_range().with_message("time component overflow.");
        if units.contains(PeriodUnits::HOURS) {
            period.hours = i64::try_from(remainder / i128::from(NANOS_PER_HOUR))
                .map_err(|_| time_overflow())?;
            remainder %= i128::from(NANOS_PER_HOUR);
        }
        if units.contains(PeriodUnits::MINUTES) {
            period.minutes = i64::try_from(remainder / i128::from(NANOS_PER_MINUTE))
                .map_err(|_| time_overflow())?;
            remainder %= i128::from(NANOS_PER_MINUTE);
        }
        if units.contains(PeriodUnits::SECONDS) {
            period.seconds = i64::try_from(remainder / i128::from(NANOS_PER_SECOND))
                .map_err(|_| time_overflow())?;
            remainder %= i128::from(NANOS_PER_SECOND);
        }
        if units.contains(PeriodUnits::MILLISECONDS) {
            period.milliseconds =
                i64::try_from(remainder / i128::from(NANOS_PER_MILLISECOND))
                    .map_err(|_| time_overflow())?;
            remainder %= i128::from(NANOS_PER_MILLISECOND);
        }
        if units.contains(PeriodUnits::TICKS) {
            period.ticks = i64::try_from(remainder / i128::from(NANOS_PER_TICK))
                .map_err(|_| time_overflow())?;
            remainder %= i128::from(NANOS_PER_TICK);
        }
        if units.contains(PeriodUnits::NANOSECONDS) {
            period.nanoseconds = i64::try_from(remainder).map_err(|_| time_overflow())?;
        }
        Ok(period)
    }
}

/// Computes the date-unit components between two dates and the
/// intermediate date after applying them to `start`.
fn date_units_between(
    start: &LocalDate,
    end: &LocalDate,
    units: PeriodUnits,
    sign: i64,
) -> ChronalResult<(Period, LocalDate)> {
    let mut period = Period::ZERO;
    let mut remaining = *start;

    if units.contains(PeriodUnits::YEARS) {
        period.years = years_between(&remaining, end, sign)?;
        remaining = remaining.plus_years(period.years)?;
    }
    if units.contains(PeriodUnits::MONTHS) {
        period.months = months_between(&remaining, end, sign)?;
        remaining = remaining.plus_months(period.months)?;
    }
    let mut day_gap =
        i64::from(end.days_since_epoch()) - i64::from(remaining.days_since_epoch());
    if units.contains(PeriodUnits::WEEKS) {
        period.weeks = day_gap / 7;
        remaining = remaining.plus_weeks(period.weeks)?;
        day_gap %= 7;
    }
    if units.contains(PeriodUnits::DAYS) {
        period.days = day_gap;
        remaining = remaining.plus_days(day_gap)?;
    }
    Ok((period, remaining))
}

/// `true` when `date` lies beyond `end` in the direction of `sign`.
/// `None` dates (arithmetic that left the calendar range) count as
/// beyond.
fn surpasses(date: Option<&LocalDate>, end: &LocalDate, sign: i64) -> bool {
    match date {
        None => true,
        Some(date) => match date.partial_cmp(end) {
            Some(core::cmp::Ordering::Greater) => sign > 0,
            Some(core::cmp::Ordering::Less) => sign < 0,
            _ => false,
        },
    }
}

/// The largest whole-year step from `start` toward `end` that does not
/// overshoot.
fn years_between(start: &LocalDate, end: &LocalDate, sign: i64) -> ChronalResult<i64> {
    let mut candidate = i64::from(end.year()) - i64::from(start.year());
    while candidate != 0 && surpasses(start.plus_years(candidate).ok().as_ref(), end, sign) {
        candidate -= sign;
    }
    loop {
        let next = candidate + sign;
        if surpasses(start.plus_years(next).ok().as_ref(), end, sign) {
            break;
        }
        candidate = next;
    }
    Ok(candidate)
}

/// The largest whole-month step from `start` toward `end` that does not
/// overshoot.
fn months_between(start: &LocalDate, end: &LocalDate, sign: i64) -> ChronalResult<i64> {
    let year_gap = i64::from(end.year()) - i64::from(start.year());
    // Estimate the month count, exactly for fixed-length years and via
    // the Metonic mean for the Hebrew calendar.
    let mut candidate = if start.calendar() == crate::calendar::CalendarSystem::hebrew_civil()
    {
        year_gap * 235 / 19
    } else {
        year_gap * i64::from(start.calendar().raw_months_in_year(start.year()))
    } + i64::from(end.month()) - i64::from(start.month());

    while candidate != 0 && surpasses(start.plus_months(candidate).ok().as_ref(), end, sign) {
        candidate -= sign;
    }
    loop {
        let next = candidate + sign;
        if surpasses(start.plus_months(next).ok().as_ref(), end, sign) {
            break;
        }
        candidate = next;
    }
    Ok(candidate)
}

// ==== Builder ====

/// A mutable collection of period fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodBuilder {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
    pub ticks: i64,
    pub nanoseconds: i64,
}

impl PeriodBuilder {
    /// Creates a builder with every field zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the period.
    #[must_use]
    pub const fn build(&self) -> Period {
        Period {
            years: self.years,
            months: self.months,
            weeks: self.weeks,
            days: self.days,
            hours: self.hours,
            minutes: self.minutes,
            seconds: self.seconds,
            milliseconds: self.milliseconds,
            ticks: self.ticks,
            nanoseconds: self.nanoseconds,
        }
    }
}

impl From<Period> for PeriodBuilder {
    fn from(period: Period) -> Self {
        Self {
            years: period.years,
            months: period.months,
            weeks: period.weeks,
            days: period.days,
            hours: period.hours,
            minutes: period.minutes,
            seconds: period.seconds,
            milliseconds: period.milliseconds,
            ticks: period.ticks,
            nanoseconds: period.nanoseconds,
        }
    }
}

impl From<PeriodBuilder> for Period {
    fn from(builder: PeriodBuilder) -> Self {
        builder.build()
    }
}

impl fmt::Display for Period {
    /// Formats in an ISO-8601-like `P...T...` form, listing only the
    /// non-zero components.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_date_components() && !self.has_time_components() {
            return f.write_str("P0D");
        }
        f.write_str("P")?;
        for (value, symbol) in [
            (self.years, "Y"),
            (self.months, "M"),
            (self.weeks, "W"),
            (self.days, "D"),
        ] {
            if value != 0 {
                write!(f, "{value}{symbol}")?;
            }
        }
        if self.has_time_components() {
            f.write_str("T")?;
            for (value, symbol) in [
                (self.hours, "H"),
                (self.minutes, "M"),
                (self.seconds, "S"),
                (self.milliseconds, "s"),
                (self.ticks, "t"),
                (self.nanoseconds, "n"),
            ] {
                if value != 0 {
                    write!(f, "{value}{symbol}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarSystem;

    fn iso(y: i32, m: u8, d: u8) -> LocalDate {
        LocalDate::try_new_iso(y, m, d).unwrap()
    }

    #[test]
    fn between_dates_basic() {
        let period = Period::between_dates(&iso(2010, 6, 19), &iso(2013, 10, 25)).unwrap();
        assert_eq!(
            (period.years(), period.months(), period.days()),
            (3, 4, 6)
        );
    }

    #[test]
    fn between_dates_backs_off_over_month_end() {
        let period = Period::between_dates(&iso(2020, 1, 31), &iso(2020, 3, 1)).unwrap();
        assert_eq!(
            (period.years(), period.months(), period.days()),
            (0, 1, 1)
        );
        // Round-trip: start + period = end.
        assert_eq!(
            period.add_to_date(&iso(2020, 1, 31)).unwrap(),
            iso(2020, 3, 1)
        );
    }

    #[test]
    fn between_dates_signs_agree() {
        let pairs = [
            (iso(2011, 1, 30), iso(2011, 2, 28)),
            (iso(2011, 2, 28), iso(2011, 1, 30)),
            (iso(2000, 2, 29), iso(2024, 2, 29)),
            (iso(2024, 3, 31), iso(2021, 6, 1)),
        ];
        for (start, end) in pairs {
            let period = Period::between_dates(&start, &end).unwrap();
            let sign = if start < end { 1 } else { -1 };
            for component in [period.years(), period.months(), period.days()] {
                assert!(component * sign >= 0, "{start} -> {end}: {period}");
            }
            assert_eq!(period.add_to_date(&start).unwrap(), end, "{start} -> {end}");
        }
    }

    #[test]
    fn between_dates_with_unit_subsets() {
        let start = iso(2010, 6, 19);
        let end = iso(2013, 10, 25);
        let months_only =
            Period::between_dates_with(&start, &end, PeriodUnits::MONTHS).unwrap();
        assert_eq!(months_only.months(), 40);
        assert_eq!(months_only.years(), 0);

        let weeks = Period::between_dates_with(
            &start,
            &end,
            PeriodUnits::WEEKS | PeriodUnits::DAYS,
        )
        .unwrap();
        assert_eq!(weeks.weeks() * 7 + weeks.days(), 1224);
        assert!(weeks.days() < 7);

        assert!(Period::between_dates_with(&start, &end, PeriodUnits::empty()).is_err());
        assert!(Period::between_dates_with(&start, &end, PeriodUnits::HOURS).is_err());
    }

    #[test]
    fn between_dates_requires_matching_calendars() {
        let start = iso(2020, 1, 1);
        let end = start.with_calendar(CalendarSystem::julian()).unwrap();
        assert!(Period::between_dates(&start, &end).is_err());
    }

    #[test]
    fn between_date_times_borrows_a_day() {
        let start = LocalDateTime::try_new_iso(2020, 1, 31, 22, 0, 0).unwrap();
        let end = LocalDateTime::try_new_iso(2020, 2, 1, 2, 0, 0).unwrap();
        let period = Period::between_date_times(&start, &end).unwrap();
        assert_eq!(period.months(), 0);
        assert_eq!(period.days(), 0);
        assert_eq!(period.hours(), 4);
        assert_eq!(period.add_to_date_time(&start).unwrap(), end);

        let negated = Period::between_date_times(&end, &start).unwrap();
        assert_eq!(negated.hours(), -4);
        assert_eq!(negated.add_to_date_time(&end).unwrap(), start);
    }

    #[test]
    fn applying_time_components_to_date_fails() {
        let period = Period::from_hours(1);
        assert_eq!(
            period.add_to_date(&iso(2020, 1, 1)).unwrap_err().kind(),
            crate::error::ErrorKind::Invariant
        );
    }

    #[test]
    fn application_order_is_descending() {
        // Years apply before months: 2019-01-31 + P1Y1M clamps once at
        // the end rather than compounding errors.
        let builder = PeriodBuilder {
            years: 1,
            months: 1,
            ..PeriodBuilder::default()
        };
        let result = builder.build().add_to_date(&iso(2019, 1, 31)).unwrap();
        assert_eq!(result, iso(2020, 2, 29));
    }

    #[test]
    fn normalize_keeps_days_and_larger_untouched() {
        let period = PeriodBuilder {
            years: 2,
            weeks: 1,
            days: 5,
            hours: 50,
            minutes: 90,
            seconds: 0,
            ticks: 10_000_123,
            ..PeriodBuilder::default()
        }
        .build();
        let normalized = period.normalize().unwrap();
        assert_eq!(normalized.years(), 2);
        assert_eq!(normalized.weeks(), 1);
        assert_eq!(normalized.days(), 5);
        assert_eq!(normalized.hours(), 51);
        assert_eq!(normalized.minutes(), 31);
        assert_eq!(normalized.seconds(), 1);
        assert_eq!(normalized.ticks(), 0);
        assert_eq!(normalized.nanoseconds(), 12_300);
        // Normalization produces a distinct, not an equal, period.
        assert_ne!(normalized, period);
    }

    #[test]
    fn component_arithmetic() {
        let a = Period::from_months(3);
        let b = Period::from_days(10);
        let sum = a.checked_add(&b).unwrap();
        assert_eq!((sum.months(), sum.days()), (3, 10));
        assert_eq!(sum.checked_sub(&b).unwrap(), a);
        let negated = sum.negated().unwrap();
        assert_eq!((negated.months(), negated.days()), (-3, -10));
        assert!(Period::from_years(i64::MAX)
            .checked_add(&Period::from_years(1))
            .is_err());
    }

    #[test]
    fn hebrew_between_dates_round_trips() {
        let calendar = CalendarSystem::hebrew_civil();
        let start = LocalDate::try_new(5783, 12, 10, calendar).unwrap();
        let end = LocalDate::try_new(5785, 2, 3, calendar).unwrap();
        let period = Period::between_dates(&start, &end).unwrap();
        assert_eq!(period.add_to_date(&start).unwrap(), end);
    }

    #[test]
    fn display() {
        assert_eq!(std::format!("{}", Period::ZERO), "P0D");
        let period = PeriodBuilder {
            years: 1,
            days: -2,
            hours: 3,
            ..PeriodBuilder::default()
        }
        .build();
        assert_eq!(std::format!("{period}"), "P1Y-2DT3H");
    }
}
