//! The calendar system abstraction and its implementations.
//!
//! A [`CalendarSystem`] is a cheap `Copy` handle over a calendar kind;
//! every operation dispatches on the kind, with the ISO/Gregorian arm
//! first so the common case stays branch-predictable. Calendar state is
//! entirely static, so handles never allocate and values tag themselves
//! with a calendar through a small ordinal.
//!
//! Each concrete calendar implements the same contract: field
//! validation, month and year metrics, a bijection between
//! `(year, month, day)` and days since the Unix epoch over its
//! supported year range, and an era labelling of years.

use tinystr::{tinystr, TinyAsciiStr};

use crate::{utils, ymd::YearMonthDay, ChronalError, ChronalResult};

pub(crate) mod coptic;
pub(crate) mod gregorian;
pub(crate) mod hebrew;
pub(crate) mod islamic;
pub(crate) mod julian;
pub(crate) mod persian;

#[doc(inline)]
pub use islamic::{IslamicEpoch, IslamicLeapYearPattern};

/// A calendar-specific labelling of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Era {
    /// The "CE" era of the Gregorian, ISO and Julian calendars.
    Common,
    /// The "BCE" era preceding [`Era::Common`].
    BeforeCommon,
    /// The "AH" era of the Islamic calendars.
    AnnoHegirae,
    /// The "AM" (Anno Mundi) era of the Hebrew calendar.
    AnnoMundi,
    /// The "AM" (Anno Martyrum) era of the Coptic calendar.
    AnnoMartyrum,
    /// The "AP" era of the Persian calendar.
    AnnoPersico,
}

impl Era {
    /// Returns the conventional abbreviation of this era.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Common => "CE",
            Self::BeforeCommon => "BCE",
            Self::AnnoHegirae => "AH",
            Self::AnnoMundi | Self::AnnoMartyrum => "AM",
            Self::AnnoPersico => "AP",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CalendarKind {
    Iso,
    Gregorian,
    Julian,
    Coptic,
    Persian,
    Hebrew,
    Islamic(IslamicLeapYearPattern, IslamicEpoch),
}

/// A handle to one of the calendar systems supported by the crate.
///
/// Handles are interchangeable flyweights: two handles to the same
/// calendar compare equal, and copying one is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarSystem {
    kind: CalendarKind,
}

impl Default for CalendarSystem {
    fn default() -> Self {
        Self::iso()
    }
}

// ==== Construction and identity ====

impl CalendarSystem {
    /// The ISO-8601 calendar, the proleptic Gregorian calendar with
    /// astronomical year numbering. This is the default calendar.
    #[must_use]
    pub const fn iso() -> Self {
        Self {
            kind: CalendarKind::Iso,
        }
    }

    /// The proleptic Gregorian calendar.
    #[must_use]
    pub const fn gregorian() -> Self {
        Self {
            kind: CalendarKind::Gregorian,
        }
    }

    /// The proleptic Julian calendar.
    #[must_use]
    pub const fn julian() -> Self {
        Self {
            kind: CalendarKind::Julian,
        }
    }

    /// The Coptic calendar.
    #[must_use]
    pub const fn coptic() -> Self {
        Self {
            kind: CalendarKind::Coptic,
        }
    }

    /// The arithmetic Persian (Solar Hijri) calendar.
    #[must_use]
    pub const fn persian_simple() -> Self {
        Self {
            kind: CalendarKind::Persian,
        }
    }

    /// The Hebrew calendar with civil month numbering (Tishri is
    /// month 1).
    #[must_use]
    pub const fn hebrew_civil() -> Self {
        Self {
            kind: CalendarKind::Hebrew,
        }
    }

    /// A tabular Islamic calendar with the given leap-year pattern and
    /// epoch.
    #[must_use]
    pub const fn islamic(pattern: IslamicLeapYearPattern, epoch: IslamicEpoch) -> Self {
        Self {
            kind: CalendarKind::Islamic(pattern, epoch),
        }
    }

    /// Returns the identifier of this calendar.
    #[must_use]
    pub const fn id(&self) -> TinyAsciiStr<16> {
        match self.kind {
            CalendarKind::Iso => tinystr!(16, "iso8601"),
            CalendarKind::Gregorian => tinystr!(16, "gregory"),
            CalendarKind::Julian => tinystr!(16, "julian"),
            CalendarKind::Coptic => tinystr!(16, "coptic"),
            CalendarKind::Persian => tinystr!(16, "persian"),
            CalendarKind::Hebrew => tinystr!(16, "hebrew"),
            CalendarKind::Islamic(pattern, epoch) => match (pattern, epoch) {
                (IslamicLeapYearPattern::Base16, IslamicEpoch::Civil) => {
                    tinystr!(16, "islamic-civil")
                }
                (IslamicLeapYearPattern::Base16, IslamicEpoch::Astronomical) => {
                    tinystr!(16, "islamic-tbla")
                }
                (IslamicLeapYearPattern::Base15, IslamicEpoch::Civil) => {
                    tinystr!(16, "islamic-b15")
                }
                (IslamicLeapYearPattern::Base15, IslamicEpoch::Astronomical) => {
                    tinystr!(16, "islamic-b15a")
                }
                (IslamicLeapYearPattern::Indian, IslamicEpoch::Civil) => {
                    tinystr!(16, "islamic-ind")
                }
                (IslamicLeapYearPattern::Indian, IslamicEpoch::Astronomical) => {
                    tinystr!(16, "islamic-inda")
                }
                (IslamicLeapYearPattern::HabashAlHasib, IslamicEpoch::Civil) => {
                    tinystr!(16, "islamic-hab")
                }
                (IslamicLeapYearPattern::HabashAlHasib, IslamicEpoch::Astronomical) => {
                    tinystr!(16, "islamic-haba")
                }
            },
        }
    }

    /// The ordinal used to tag packed date values with this calendar.
    pub(crate) const fn ordinal(&self) -> u8 {
        match self.kind {
            CalendarKind::Iso => 0,
            CalendarKind::Gregorian => 1,
            CalendarKind::Julian => 2,
            CalendarKind::Coptic => 3,
            CalendarKind::Persian => 4,
            CalendarKind::Hebrew => 5,
            CalendarKind::Islamic(pattern, epoch) => 6 + pattern.index() * 2 + epoch.index(),
        }
    }

    /// The inverse of [`CalendarSystem::ordinal`] for ordinals produced
    /// by this crate. Unknown ordinals fall back to ISO, which can only
    /// happen through a packing bug.
    pub(crate) const fn from_valid_ordinal(ordinal: u8) -> Self {
        match ordinal {
            0 => Self::iso(),
            1 => Self::gregorian(),
            2 => Self::julian(),
            3 => Self::coptic(),
            4 => Self::persian_simple(),
            5 => Self::hebrew_civil(),
            _ => {
                let index = ordinal - 6;
                let pattern = IslamicLeapYearPattern::from_index(index / 2);
                let epoch = IslamicEpoch::from_index(index % 2);
                match (pattern, epoch) {
                    (Some(pattern), Some(epoch)) => Self::islamic(pattern, epoch),
                    _ => {
                        debug_assert!(false, "invalid calendar ordinal");
                        Self::iso()
                    }
                }
            }
        }
    }
}

// ==== Year and month metrics ====

impl CalendarSystem {
    /// The earliest year this calendar supports.
    #[must_use]
    pub const fn min_year(&self) -> i32 {
        match self.kind {
            CalendarKind::Iso | CalendarKind::Gregorian => gregorian::MIN_YEAR,
            CalendarKind::Julian => julian::MIN_YEAR,
            CalendarKind::Coptic => coptic::MIN_YEAR,
            CalendarKind::Persian => persian::MIN_YEAR,
            CalendarKind::Hebrew => hebrew::MIN_YEAR,
            CalendarKind::Islamic(..) => islamic::MIN_YEAR,
        }
    }

    /// The latest year this calendar supports.
    #[must_use]
    pub const fn max_year(&self) -> i32 {
        match self.kind {
            CalendarKind::Iso | CalendarKind::Gregorian => gregorian::MAX_YEAR,
            CalendarKind::Julian => julian::MAX_YEAR,
            CalendarKind::Coptic => coptic::MAX_YEAR,
            CalendarKind::Persian => persian::MAX_YEAR,
            CalendarKind::Hebrew => hebrew::MAX_YEAR,
            CalendarKind::Islamic(..) => islamic::MAX_YEAR,
        }
    }

    /// The earliest representable day number of this calendar.
    pub(crate) fn min_days(&self) -> i32 {
        self.raw_days_since_epoch(self.min_year(), 1, 1)
    }

    /// The latest representable day number of this calendar.
    pub(crate) fn max_days(&self) -> i32 {
        let year = self.max_year();
        let month = self.raw_months_in_year(year);
        let day = self.raw_days_in_month(year, month);
        self.raw_days_since_epoch(year, month, day)
    }

    fn check_year(&self, year: i32) -> ChronalResult<()> {
        if year < self.min_year() || year > self.max_year() {
            return Err(ChronalError::out_of_range()
                .with_message("year is outside the calendar's supported range."));
        }
        Ok(())
    }

    /// Returns `true` if the year is a leap year in this calendar.
    pub fn is_leap_year(&self, year: i32) -> ChronalResult<bool> {
        self.check_year(year)?;
        Ok(self.raw_is_leap_year(year))
    }

    /// Returns the number of months in the given year. Twelve for most
    /// calendars; the Coptic calendar always has thirteen, and Hebrew
    /// leap years do.
    pub fn months_in_year(&self, year: i32) -> ChronalResult<u8> {
        self.check_year(year)?;
        Ok(self.raw_months_in_year(year))
    }

    /// Returns the number of days in the given month.
    pub fn days_in_month(&self, year: i32, month: u8) -> ChronalResult<u8> {
        self.check_year(year)?;
        if month < 1 || month > self.raw_months_in_year(year) {
            return Err(
                ChronalError::out_of_range().with_message("month is not valid for the year.")
            );
        }
        Ok(self.raw_days_in_month(year, month))
    }

    /// Returns the number of days in the given year.
    pub fn days_in_year(&self, year: i32) -> ChronalResult<u16> {
        self.check_year(year)?;
        Ok(self.raw_days_in_year(year))
    }

    pub(crate) fn raw_is_leap_year(&self, year: i32) -> bool {
        match self.kind {
            CalendarKind::Iso | CalendarKind::Gregorian => gregorian::is_leap_year(year),
            CalendarKind::Julian => julian::is_leap_year(year),
            CalendarKind::Coptic => coptic::is_leap_year(year),
            CalendarKind::Persian => persian::is_leap_year(year),
            CalendarKind::Hebrew => hebrew::is_leap_year(year),
            CalendarKind::Islamic(pattern, _) => islamic::is_leap_year(pattern, year),
        }
    }

    pub(crate) fn raw_months_in_year(&self, year: i32) -> u8 {
        match self.kind {
            CalendarKind::Coptic => 13,
            CalendarKind::Hebrew => hebrew::months_in_year(year),
            _ => 12,
        }
    }

    pub(crate) fn raw_days_in_month(&self, year: i32, month: u8) -> u8 {
        match self.kind {
            CalendarKind::Iso | CalendarKind::Gregorian => gregorian::days_in_month(year, month),
            CalendarKind::Julian => julian::days_in_month(year, month),
            CalendarKind::Coptic => coptic::days_in_month(year, month),
            CalendarKind::Persian => persian::days_in_month(year, month),
            CalendarKind::Hebrew => hebrew::days_in_month(year, month),
            CalendarKind::Islamic(pattern, _) => islamic::days_in_month(pattern, year, month),
        }
    }

    pub(crate) fn raw_days_in_year(&self, year: i32) -> u16 {
        match self.kind {
            CalendarKind::Iso | CalendarKind::Gregorian => gregorian::days_in_year(year),
            CalendarKind::Julian => julian::days_in_year(year),
            CalendarKind::Coptic => coptic::days_in_year(year),
            CalendarKind::Persian => persian::days_in_year(year),
            CalendarKind::Hebrew => hebrew::days_in_year(year),
            CalendarKind::Islamic(pattern, _) => islamic::days_in_year(pattern, year),
        }
    }
}

// ==== Field validation and the epoch-day bijection ====

impl CalendarSystem {
    /// Validates a full date in this calendar.
    pub(crate) fn validate_ymd(&self, year: i32, month: u8, day: u8) -> ChronalResult<()> {
        self.check_year(year)?;
        if month < 1 || month > self.raw_months_in_year(year) {
            return Err(
                ChronalError::out_of_range().with_message("month is not valid for the year.")
            );
        }
        if day < 1 || day > self.raw_days_in_month(year, month) {
            return Err(
                ChronalError::out_of_range().with_message("day is not valid for the month.")
            );
        }
        Ok(())
    }

    pub(crate) fn raw_days_since_epoch(&self, year: i32, month: u8, day: u8) -> i32 {
        match self.kind {
            CalendarKind::Iso | CalendarKind::Gregorian => {
                gregorian::days_since_epoch(year, month, day)
            }
            CalendarKind::Julian => julian::days_since_epoch(year, month, day),
            CalendarKind::Coptic => coptic::days_since_epoch(year, month, day),
            CalendarKind::Persian => persian::days_since_epoch(year, month, day),
            CalendarKind::Hebrew => hebrew::days_since_epoch(year, month, day),
            CalendarKind::Islamic(pattern, epoch) => {
                islamic::days_since_epoch(pattern, epoch, year, month, day)
            }
        }
    }

    /// Computes the day number since the Unix epoch of a validated
    /// date.
    pub(crate) fn days_since_epoch(&self, ymd: YearMonthDay) -> i32 {
        self.raw_days_since_epoch(ymd.year(), ymd.month(), ymd.day())
    }

    /// The inverse of [`CalendarSystem::days_since_epoch`]. The day
    /// number is trusted to lie within this calendar's day window.
    pub(crate) fn ymd_from_days(&self, days: i32) -> YearMonthDay {
        let (year, month, day) = match self.kind {
            CalendarKind::Iso | CalendarKind::Gregorian => gregorian::date_from_days(days),
            CalendarKind::Julian => julian::date_from_days(days),
            CalendarKind::Coptic => coptic::date_from_days(days),
            CalendarKind::Persian => persian::date_from_days(days),
            CalendarKind::Hebrew => hebrew::date_from_days(days),
            CalendarKind::Islamic(pattern, epoch) => {
                islamic::date_from_days(pattern, epoch, days)
            }
        };
        YearMonthDay::new(year, month, day)
    }

    /// Returns the ISO day of the week of a validated date, with
    /// 1 = Monday through 7 = Sunday.
    pub(crate) fn day_of_week(&self, ymd: YearMonthDay) -> u8 {
        utils::day_of_week(self.days_since_epoch(ymd))
    }
}

// ==== Clamped year/month arithmetic ====

impl CalendarSystem {
    fn clamp_to_year(&self, year: i32, month: u8, day: u8) -> YearMonthDay {
        let month = month.min(self.raw_months_in_year(year));
        let day = day.min(self.raw_days_in_month(year, month));
        YearMonthDay::new(year, month, day)
    }

    /// Adds years, clamping the month and day down to the last valid
    /// values of the target year when the field combination does not
    /// exist there.
    pub(crate) fn plus_years(&self, ymd: YearMonthDay, years: i64) -> ChronalResult<YearMonthDay> {
        let year = i64::from(ymd.year())
            .checked_add(years)
            .ok_or_else(|| ChronalError::out_of_range().with_message("year overflow."))?;
        let year = i32::try_from(year)
            .map_err(|_| ChronalError::out_of_range().with_message("year overflow."))?;
        self.check_year(year)?;
        Ok(self.clamp_to_year(year, ymd.month(), ymd.day()))
    }

    /// Adds months, clamping the day to the last day of the target
    /// month; the result never rolls into the following month.
    pub(crate) fn plus_months(
        &self,
        ymd: YearMonthDay,
        months: i64,
    ) -> ChronalResult<YearMonthDay> {
        let overflowed =
            || ChronalError::out_of_range().with_message("month arithmetic overflow.");

        let (year, month) = match self.kind {
            // Hebrew years vary between twelve and thirteen months, so
            // the month count is walked year by year.
            CalendarKind::Hebrew => {
                let span = i64::from(self.max_year() - self.min_year() + 1) * 13;
                if months.abs() > span {
                    return Err(overflowed());
                }
                let mut year = ymd.year();
                let mut month = i64::from(ymd.month()) + months;
                loop {
                    if month < 1 {
                        year -= 1;
                        self.check_year(year)?;
                        month += i64::from(self.raw_months_in_year(year));
                    } else if month > i64::from(self.raw_months_in_year(year)) {
                        month -= i64::from(self.raw_months_in_year(year));
                        year += 1;
                        self.check_year(year)?;
                    } else {
                        break;
                    }
                }
                (year, month as u8)
            }
            _ => {
                let months_per_year = i64::from(self.raw_months_in_year(ymd.year()));
                let index = i64::from(ymd.year()) * months_per_year
                    + i64::from(ymd.month())
                    - 1;
                let index = index.checked_add(months).ok_or_else(overflowed)?;
                let year = i32::try_from(index.div_euclid(months_per_year))
                    .map_err(|_| overflowed())?;
                self.check_year(year)?;
                (year, index.rem_euclid(months_per_year) as u8 + 1)
            }
        };

        let day = ymd.day().min(self.raw_days_in_month(year, month));
        Ok(YearMonthDay::new(year, month, day))
    }
}

// ==== Eras ====

impl CalendarSystem {
    /// Returns the eras used by this calendar, earliest first.
    #[must_use]
    pub const fn eras(&self) -> &'static [Era] {
        match self.kind {
            CalendarKind::Iso | CalendarKind::Gregorian | CalendarKind::Julian => {
                &[Era::BeforeCommon, Era::Common]
            }
            CalendarKind::Coptic => &[Era::AnnoMartyrum],
            CalendarKind::Persian => &[Era::AnnoPersico],
            CalendarKind::Hebrew => &[Era::AnnoMundi],
            CalendarKind::Islamic(..) => &[Era::AnnoHegirae],
        }
    }

    /// Returns the era of an absolute year.
    pub(crate) fn era_of(&self, year: i32) -> Era {
        match self.kind {
            CalendarKind::Iso | CalendarKind::Gregorian | CalendarKind::Julian => {
                if year >= 1 {
                    Era::Common
                } else {
                    Era::BeforeCommon
                }
            }
            CalendarKind::Coptic => Era::AnnoMartyrum,
            CalendarKind::Persian => Era::AnnoPersico,
            CalendarKind::Hebrew => Era::AnnoMundi,
            CalendarKind::Islamic(..) => Era::AnnoHegirae,
        }
    }

    /// Returns the year within its era of an absolute year.
    pub(crate) fn year_of_era(&self, year: i32) -> i32 {
        match self.kind {
            CalendarKind::Iso | CalendarKind::Gregorian | CalendarKind::Julian => {
                if year >= 1 {
                    year
                } else {
                    1 - year
                }
            }
            _ => year,
        }
    }

    /// Maps a year-of-era back to an absolute year.
    pub fn absolute_year(&self, year_of_era: i32, era: Era) -> ChronalResult<i32> {
        let mut known = false;
        for candidate in self.eras() {
            known |= *candidate == era;
        }
        if !known {
            return Err(
                ChronalError::invariant().with_message("era is not used by this calendar.")
            );
        }
        let year = match era {
            Era::BeforeCommon | Era::Common => {
                if year_of_era < 1 {
                    return Err(ChronalError::out_of_range()
                        .with_message("year of era must be positive."));
                }
                if era == Era::BeforeCommon {
                    1 - year_of_era
                } else {
                    year_of_era
                }
            }
            _ => year_of_era,
        };
        self.check_year(year)?;
        Ok(year)
    }
}

// ==== ISO week rules ====

impl CalendarSystem {
    /// The Thursday of the week containing the given day number.
    fn week_thursday(days: i32) -> i32 {
        days + (4 - i32::from(utils::day_of_week(days)))
    }

    /// Returns the week-year owning the date's week: the calendar year
    /// that contains the week's Thursday.
    pub(crate) fn week_year(&self, ymd: YearMonthDay) -> i32 {
        let thursday = Self::week_thursday(self.days_since_epoch(ymd));
        self.ymd_from_days(thursday).year()
    }

    /// Returns the week of the week-year, starting at 1 for the week
    /// containing the year's first Thursday.
    pub(crate) fn week_of_week_year(&self, ymd: YearMonthDay) -> u8 {
        let thursday = Self::week_thursday(self.days_since_epoch(ymd));
        let week_year = self.ymd_from_days(thursday).year();
        let start = self.raw_days_since_epoch(week_year, 1, 1);
        ((thursday - start) / 7 + 1) as u8
    }
}

// ==== Shared month tables ====

/// Days in a month of the standard twelve-month table shared by the
/// Gregorian and Julian calendars.
pub(crate) const fn days_in_standard_month(month: u8, leap_year: bool) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => 28 + leap_year as u8,
    }
}

/// Elapsed days before the start of the given month (0-based).
pub(crate) const fn day_of_year_until_month(month: u8, leap_year: bool) -> u16 {
    let leap_day = leap_year as u16;
    match month {
        1 => 0,
        2 => 31,
        3 => 59 + leap_day,
        4 => 90 + leap_day,
        5 => 120 + leap_day,
        6 => 151 + leap_day,
        7 => 181 + leap_day,
        8 => 212 + leap_day,
        9 => 243 + leap_day,
        10 => 273 + leap_day,
        11 => 304 + leap_day,
        _ => 334 + leap_day,
    }
}

/// Splits a 1-based day of year into month and day of month.
pub(crate) const fn month_day_from_day_of_year(day_of_year: u16, leap_year: bool) -> (u8, u8) {
    let mut month = 1u8;
    while month < 12 && day_of_year > day_of_year_until_month(month + 1, leap_year) {
        month += 1;
    }
    (
        month,
        (day_of_year - day_of_year_until_month(month, leap_year)) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_round_trip() {
        let calendars = [
            CalendarSystem::iso(),
            CalendarSystem::gregorian(),
            CalendarSystem::julian(),
            CalendarSystem::coptic(),
            CalendarSystem::persian_simple(),
            CalendarSystem::hebrew_civil(),
            CalendarSystem::islamic(IslamicLeapYearPattern::Base16, IslamicEpoch::Civil),
            CalendarSystem::islamic(
                IslamicLeapYearPattern::HabashAlHasib,
                IslamicEpoch::Astronomical,
            ),
        ];
        for calendar in calendars {
            assert_eq!(
                CalendarSystem::from_valid_ordinal(calendar.ordinal()),
                calendar
            );
        }
    }

    #[test]
    fn validation_rejects_bad_fields() {
        let iso = CalendarSystem::iso();
        assert!(iso.validate_ymd(2023, 2, 29).is_err());
        assert!(iso.validate_ymd(2024, 2, 29).is_ok());
        assert!(iso.validate_ymd(2024, 13, 1).is_err());
        assert!(iso.validate_ymd(10_000, 1, 1).is_err());

        let hebrew = CalendarSystem::hebrew_civil();
        assert!(hebrew.validate_ymd(5784, 13, 29).is_ok());
        assert!(hebrew.validate_ymd(5785, 13, 1).is_err());
    }

    #[test]
    fn plus_months_clamps_to_month_end() {
        let iso = CalendarSystem::iso();
        let jan30 = YearMonthDay::new(2011, 1, 30);
        let feb = iso.plus_months(jan30, 1).unwrap();
        assert_eq!((feb.year(), feb.month(), feb.day()), (2011, 2, 28));

        let mar30 = YearMonthDay::new(2011, 3, 30);
        let back = iso.plus_months(mar30, -1).unwrap();
        assert_eq!((back.year(), back.month(), back.day()), (2011, 2, 28));
    }

    #[test]
    fn plus_years_clamps_leap_day() {
        let iso = CalendarSystem::iso();
        let leap_day = YearMonthDay::new(2024, 2, 29);
        let clamped = iso.plus_years(leap_day, 1).unwrap();
        assert_eq!(
            (clamped.year(), clamped.month(), clamped.day()),
            (2025, 2, 28)
        );
    }

    #[test]
    fn hebrew_plus_months_walks_leap_years() {
        let hebrew = CalendarSystem::hebrew_civil();
        // 5783 has twelve months, 5784 has thirteen.
        let elul = YearMonthDay::new(5783, 12, 1);
        let next = hebrew.plus_months(elul, 1).unwrap();
        assert_eq!((next.year(), next.month()), (5784, 1));
        let round = hebrew.plus_months(next, -1).unwrap();
        assert_eq!((round.year(), round.month()), (5783, 12));

        let adar_ii = hebrew.plus_months(YearMonthDay::new(5784, 6, 15), 1).unwrap();
        assert_eq!((adar_ii.year(), adar_ii.month()), (5784, 7));
    }

    #[test]
    fn week_year_boundaries() {
        let iso = CalendarSystem::iso();
        let date = YearMonthDay::new(2011, 1, 1);
        assert_eq!(iso.week_year(date), 2010);
        assert_eq!(iso.week_of_week_year(date), 52);

        let date = YearMonthDay::new(2012, 12, 31);
        assert_eq!(iso.week_year(date), 2013);
        assert_eq!(iso.week_of_week_year(date), 1);
    }

    #[test]
    fn era_mapping() {
        let iso = CalendarSystem::iso();
        assert_eq!(iso.era_of(2024), Era::Common);
        assert_eq!(iso.era_of(0), Era::BeforeCommon);
        assert_eq!(iso.year_of_era(0), 1);
        assert_eq!(iso.year_of_era(-44), 45);
        assert_eq!(iso.absolute_year(45, Era::BeforeCommon).unwrap(), -44);
        assert!(iso.absolute_year(45, Era::AnnoHegirae).is_err());

        let hebrew = CalendarSystem::hebrew_civil();
        assert_eq!(hebrew.era_of(5784), Era::AnnoMundi);
        assert_eq!(hebrew.absolute_year(5784, Era::AnnoMundi).unwrap(), 5784);
    }

    #[test]
    fn cross_calendar_day_agreement() {
        // The same physical day converts consistently across calendars.
        let iso = CalendarSystem::iso();
        let julian = CalendarSystem::julian();
        let days = iso.raw_days_since_epoch(1970, 1, 1);
        let julian_date = julian.ymd_from_days(days);
        assert_eq!(
            (
                julian_date.year(),
                julian_date.month(),
                julian_date.day()
            ),
            (1969, 12, 19)
        );
    }
}
