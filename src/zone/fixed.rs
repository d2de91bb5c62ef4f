//! Fixed-offset zone support and the precomputed offset cache.

use alloc::format;
use alloc::string::String;

use crate::components::Offset;
use crate::constants::SECONDS_PER_MINUTE;

const CACHE_STEP_SECONDS: i32 = 30 * SECONDS_PER_MINUTE as i32;
const CACHE_MIN_STEPS: i32 = -24; // UTC-12:00
const CACHE_MAX_STEPS: i32 = 30; // UTC+15:00

/// Identifiers for every 30-minute offset in [UTC-12:00, UTC+15:00].
/// Requests inside this window build zones without allocating.
static CACHED_IDS: [&str; 55] = [
    "UTC-12:00",
    "UTC-11:30",
    "UTC-11:00",
    "UTC-10:30",
    "UTC-10:00",
    "UTC-09:30",
    "UTC-09:00",
    "UTC-08:30",
    "UTC-08:00",
    "UTC-07:30",
    "UTC-07:00",
    "UTC-06:30",
    "UTC-06:00",
    "UTC-05:30",
    "UTC-05:00",
    "UTC-04:30",
    "UTC-04:00",
    "UTC-03:30",
    "UTC-03:00",
    "UTC-02:30",
    "UTC-02:00",
    "UTC-01:30",
    "UTC-01:00",
    "UTC-00:30",
    "UTC",
    "UTC+00:30",
    "UTC+01:00",
    "UTC+01:30",
    "UTC+02:00",
    "UTC+02:30",
    "UTC+03:00",
    "UTC+03:30",
    "UTC+04:00",
    "UTC+04:30",
    "UTC+05:00",
    "UTC+05:30",
    "UTC+06:00",
    "UTC+06:30",
    "UTC+07:00",
    "UTC+07:30",
    "UTC+08:00",
    "UTC+08:30",
    "UTC+09:00",
    "UTC+09:30",
    "UTC+10:00",
    "UTC+10:30",
    "UTC+11:00",
    "UTC+11:30",
    "UTC+12:00",
    "UTC+12:30",
    "UTC+13:00",
    "UTC+13:30",
    "UTC+14:00",
    "UTC+14:30",
    "UTC+15:00",
];

/// Looks up the static identifier for a cache-hit offset.
pub(crate) fn cached_id(offset: Offset) -> Option<&'static str> {
    let seconds = offset.seconds();
    if seconds % CACHE_STEP_SECONDS != 0 {
        return None;
    }
    let steps = seconds / CACHE_STEP_SECONDS;
    if !(CACHE_MIN_STEPS..=CACHE_MAX_STEPS).contains(&steps) {
        return None;
    }
    Some(CACHED_IDS[(steps - CACHE_MIN_STEPS) as usize])
}

/// Formats the identifier for an arbitrary fixed offset, allocating.
pub(crate) fn format_id(offset: Offset) -> String {
    if offset == Offset::ZERO {
        return String::from("UTC");
    }
    format!("UTC{offset}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_covers_half_hours() {
        assert_eq!(cached_id(Offset::ZERO), Some("UTC"));
        assert_eq!(
            cached_id(Offset::from_hours_and_minutes(5, 30).unwrap()),
            Some("UTC+05:30")
        );
        assert_eq!(cached_id(Offset::from_hours(-12).unwrap()), Some("UTC-12:00"));
        assert_eq!(cached_id(Offset::from_hours(15).unwrap()), Some("UTC+15:00"));
    }

    #[test]
    fn cache_misses() {
        // Beyond the window.
        assert_eq!(cached_id(Offset::from_hours(-13).unwrap()), None);
        assert_eq!(
            cached_id(Offset::from_hours_and_minutes(15, 30).unwrap()),
            None
        );
        // Not on a half-hour boundary.
        assert_eq!(cached_id(Offset::from_seconds(5_400 + 60).unwrap()), None);
        assert_eq!(
            format_id(Offset::from_seconds(5_460).unwrap()),
            "UTC+01:31"
        );
    }

    #[test]
    fn ids_match_offsets() {
        for (index, id) in CACHED_IDS.iter().enumerate() {
            let seconds = (index as i32 + CACHE_MIN_STEPS) * CACHE_STEP_SECONDS;
            let offset = Offset::from_seconds(seconds).unwrap();
            assert_eq!(cached_id(offset), Some(*id));
            if seconds != 0 {
                assert_eq!(format_id(offset), *id);
            }
        }
    }
}
