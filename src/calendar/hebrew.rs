//! Hebrew calendar computations, civil month numbering.
//!
//! Years are anchored by the molad of Tishri plus the four classical
//! postponements; leap years follow the 19-year Metonic cycle. Month 1
//! is Tishri; in leap years the extra month is Adar I as month 6, with
//! Adar II as month 7. Year lengths fall in
//! {353, 354, 355, 383, 384, 385}: the final digit decides whether
//! Heshvan is long and whether Kislev is short.

pub(crate) const MIN_YEAR: i32 = 1;
pub(crate) const MAX_YEAR: i32 = 9_999;

/// Day number since the Unix epoch of 1 Tishri 1 AM.
const EPOCH: i64 = -2_092_590;

// Molad arithmetic runs in "parts" of 1/25920 day; a mean lunation is
// 29 days and 13753 parts.
const PARTS_PER_DAY: i64 = 25_920;
const PARTS_PER_MONTH: i64 = 13_753;
const FIRST_MOLAD_PARTS: i64 = 12_084;

#[inline]
pub(crate) const fn is_leap_year(year: i32) -> bool {
    (7 * year as i64 + 1).rem_euclid(19) < 7
}

#[inline]
pub(crate) const fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) {
        13
    } else {
        12
    }
}

/// Elapsed days from the epoch to the molad-determined new year,
/// before the year-length correction.
const fn elapsed_days(year: i32) -> i64 {
    let months = (235 * year as i64 - 234).div_euclid(19);
    let parts = FIRST_MOLAD_PARTS + PARTS_PER_MONTH * months;
    let days = 29 * months + parts.div_euclid(PARTS_PER_DAY);
    // Molad at or after midday postpones Rosh Hashanah a day.
    if (3 * (days + 1)).rem_euclid(7) < 3 {
        days + 1
    } else {
        days
    }
}

/// The correction that keeps every year length legal: a 356-day year
/// shrinks by starting two days later, a 382-day year grows by starting
/// a day later.
const fn year_start_correction(year: i32) -> i64 {
    if elapsed_days(year + 1) - elapsed_days(year) == 356 {
        2
    } else if elapsed_days(year) - elapsed_days(year - 1) == 382 {
        1
    } else {
        0
    }
}

/// Day number since the Unix epoch of 1 Tishri of the given year.
pub(crate) const fn days_at_start_of_year(year: i32) -> i64 {
    EPOCH + elapsed_days(year) + year_start_correction(year)
}

#[inline]
pub(crate) const fn days_in_year(year: i32) -> u16 {
    (days_at_start_of_year(year + 1) - days_at_start_of_year(year)) as u16
}

pub(crate) const fn days_in_month(year: i32, month: u8) -> u8 {
    let length = days_in_year(year);
    match month {
        1 => 30,
        // Heshvan is long only in complete years.
        2 => {
            if length % 10 == 5 {
                30
            } else {
                29
            }
        }
        // Kislev is short only in deficient years.
        3 => {
            if length % 10 == 3 {
                29
            } else {
                30
            }
        }
        4 => 29,
        5 => 30,
        _ => {
            if is_leap_year(year) {
                if month % 2 == 0 {
                    30
                } else {
                    29
                }
            } else if month % 2 == 0 {
                29
            } else {
                30
            }
        }
    }
}

/// Computes the day number since the Unix epoch.
pub(crate) fn days_since_epoch(year: i32, month: u8, day: u8) -> i32 {
    let mut days = days_at_start_of_year(year);
    let mut m = 1;
    while m < month {
        days += days_in_month(year, m) as i64;
        m += 1;
    }
    (days + day as i64 - 1) as i32
}

/// The inverse of [`days_since_epoch`].
pub(crate) fn date_from_days(days: i32) -> (i32, u8, u8) {
    let target = days as i64;
    // The mean year is 35975351 / 98496 days; the estimate is within a
    // couple of years, with the loops absorbing the postponements.
    let mut year = (((target - EPOCH) * 98_496) / 35_975_351) as i32 + 1;
    while target < days_at_start_of_year(year) {
        year -= 1;
    }
    while target >= days_at_start_of_year(year + 1) {
        year += 1;
    }

    let mut rem = target - days_at_start_of_year(year);
    let mut month = 1u8;
    loop {
        let len = days_in_month(year, month) as i64;
        if rem < len || month == months_in_year(year) {
            break;
        }
        rem -= len;
        month += 1;
    }
    (year, month, rem as u8 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::day_of_week;

    #[test]
    fn metonic_leap_years() {
        // Years 3, 6, 8, 11, 14, 17 and 19 of each cycle are leap.
        let leap_years: std::vec::Vec<i32> =
            (5782..=5800).filter(|y| is_leap_year(*y)).collect();
        assert_eq!(leap_years, std::vec![5784, 5787, 5790, 5793, 5795, 5798]);
        assert!(is_leap_year(5774));
        assert!(!is_leap_year(5783));
    }

    #[test]
    fn rosh_hashanah_5784() {
        // 1 Tishri 5784 fell on Gregorian 2023-09-16, a Saturday.
        assert_eq!(
            days_since_epoch(5784, 1, 1),
            super::super::gregorian::days_since_epoch(2023, 9, 16)
        );
        assert_eq!(day_of_week(days_since_epoch(5784, 1, 1)), 6);
    }

    #[test]
    fn year_lengths_are_legal() {
        for year in [1, 1000, 5700, 5783, 5784, 5785, 9998] {
            let len = days_in_year(year);
            assert!(
                matches!(len, 353 | 354 | 355 | 383 | 384 | 385),
                "year {year} has illegal length {len}"
            );
            let by_month: i64 = (1..=months_in_year(year))
                .map(|m| i64::from(days_in_month(year, m)))
                .sum();
            assert_eq!(by_month, i64::from(len), "year {year}");
        }
    }

    #[test]
    fn new_year_never_falls_on_sunday_wednesday_or_friday() {
        for year in 5700..5800 {
            let dow = day_of_week(days_since_epoch(year, 1, 1));
            assert!(
                dow != 7 && dow != 3 && dow != 5,
                "Rosh Hashanah of {year} fell on ISO day {dow}"
            );
        }
    }

    #[test]
    fn round_trip() {
        for &(y, m, d) in &[
            (1, 1, 1),
            (5784, 6, 30),
            (5784, 13, 29),
            (5785, 12, 29),
            (5730, 3, 29),
            (9999, 1, 1),
        ] {
            let days = days_since_epoch(y, m, d);
            assert_eq!(date_from_days(days), (y, m, d));
        }
    }
}
