//! End-to-end zone mapping scenarios, driven by real transition data.

use alloc::vec;
use alloc::vec::Vec;

use crate::components::{Instant, LocalDate, LocalDateTime, Offset};
use crate::error::ErrorKind;
use crate::zone::{resolvers, DateTimeZone, ZoneInterval};

fn hours(h: i32) -> Offset {
    Offset::from_hours(h).unwrap()
}

/// America/New_York with its 2016-2018 transitions.
fn new_york() -> DateTimeZone {
    let transitions = [
        (Instant::from_utc(2016, 11, 6, 6, 0).unwrap(), false),
        (Instant::from_utc(2017, 3, 12, 7, 0).unwrap(), true),
        (Instant::from_utc(2017, 11, 5, 6, 0).unwrap(), false),
        (Instant::from_utc(2018, 3, 11, 7, 0).unwrap(), true),
    ];
    let mut intervals: Vec<ZoneInterval> = Vec::new();
    let mut previous: Option<Instant> = None;
    let mut previous_dst = true;
    for (instant, dst) in transitions {
        intervals.push(interval(previous, Some(instant), previous_dst));
        previous = Some(instant);
        previous_dst = dst;
    }
    intervals.push(interval(previous, None, previous_dst));
    DateTimeZone::from_intervals("America/New_York", intervals).unwrap()
}

fn interval(start: Option<Instant>, end: Option<Instant>, dst: bool) -> ZoneInterval {
    if dst {
        ZoneInterval::new("EDT", start, end, hours(-4), hours(-5)).unwrap()
    } else {
        ZoneInterval::new("EST", start, end, hours(-5), hours(-5)).unwrap()
    }
}

/// Pacific/Apia around its December 2011 jump across the date line,
/// from UTC-10 (daylight) straight to UTC+14 (daylight).
fn apia() -> DateTimeZone {
    let dst_start = Instant::from_utc(2011, 9, 24, 14, 0).unwrap();
    let jump = Instant::from_utc(2011, 12, 30, 10, 0).unwrap();
    let dst_end = Instant::from_utc(2012, 3, 31, 14, 0).unwrap();
    DateTimeZone::from_intervals(
        "Pacific/Apia",
        vec![
            ZoneInterval::new("-11", None, Some(dst_start), hours(-11), hours(-11)).unwrap(),
            ZoneInterval::new("-10", Some(dst_start), Some(jump), hours(-10), hours(-11))
                .unwrap(),
            ZoneInterval::new("+14", Some(jump), Some(dst_end), hours(14), hours(13)).unwrap(),
            ZoneInterval::new("+13", Some(dst_end), None, hours(13), hours(13)).unwrap(),
        ],
    )
    .unwrap()
}

#[test]
fn spring_forward_gap_in_new_york() {
    let zone = new_york();
    let skipped = LocalDateTime::try_new_iso(2017, 3, 12, 2, 30, 0).unwrap();

    let mapping = zone.map_local(&skipped);
    assert_eq!(mapping.count(), 0);
    assert_eq!(mapping.early_interval().name(), "EST");
    assert_eq!(mapping.late_interval().name(), "EDT");

    let strict = zone.at_strictly(&skipped);
    assert_eq!(strict.unwrap_err().kind(), ErrorKind::SkippedLocalTime);

    // Lenient resolution shifts forward by the one-hour gap width.
    let lenient = zone.at_leniently(&skipped).unwrap();
    assert_eq!(
        lenient.local_date_time(),
        LocalDateTime::try_new_iso(2017, 3, 12, 3, 30, 0).unwrap()
    );
    assert_eq!(lenient.offset(), hours(-4));
    assert_eq!(
        lenient.to_instant(),
        Instant::from_utc(2017, 3, 12, 7, 30).unwrap()
    );
}

#[test]
fn fall_back_ambiguity_in_new_york() {
    let zone = new_york();
    let ambiguous = LocalDateTime::try_new_iso(2017, 11, 5, 1, 30, 0).unwrap();

    let mapping = zone.map_local(&ambiguous);
    assert_eq!(mapping.count(), 2);
    assert_eq!(mapping.early_interval().wall_offset(), hours(-4));
    assert_eq!(mapping.late_interval().wall_offset(), hours(-5));

    assert_eq!(
        zone.at_strictly(&ambiguous).unwrap_err().kind(),
        ErrorKind::AmbiguousLocalTime
    );

    let lenient = zone.at_leniently(&ambiguous).unwrap();
    assert_eq!(lenient.offset(), hours(-4));
    assert_eq!(
        lenient.to_instant(),
        Instant::from_utc(2017, 11, 5, 5, 30).unwrap()
    );

    // The later reading remains reachable through the primitives.
    let later = zone
        .resolve_local(
            &ambiguous,
            &resolvers::Resolver::new(
                resolvers::return_later,
                resolvers::return_start_of_interval_after,
            ),
        )
        .unwrap();
    assert_eq!(later.offset(), hours(-5));
    assert_eq!(
        later.to_instant(),
        Instant::from_utc(2017, 11, 5, 6, 30).unwrap()
    );
}

#[test]
fn unambiguous_mappings_agree_across_resolvers() {
    let zone = new_york();
    for (month, day, hour) in [(1, 15, 12), (3, 12, 1), (3, 12, 3), (7, 4, 0), (11, 5, 2)] {
        let local = LocalDateTime::try_new_iso(2017, month, day, hour, 0, 0).unwrap();
        let mapping = zone.map_local(&local);
        assert_eq!(mapping.count(), 1, "{local}");
        assert_eq!(
            zone.at_strictly(&local).unwrap(),
            zone.at_leniently(&local).unwrap(),
            "{local}"
        );
    }
}

#[test]
fn mapped_intervals_reconcile_offsets() {
    let zone = new_york();
    for (month, day, hour, minute) in
        [(3, 12, 2, 30), (11, 5, 1, 30), (7, 4, 12, 0), (1, 1, 0, 0)]
    {
        let local = LocalDateTime::try_new_iso(2017, month, day, hour, minute, 0).unwrap();
        let mapping = zone.map_local(&local);
        assert!(mapping.count() <= 2);
        if mapping.count() > 0 {
            for interval in [mapping.early_interval(), mapping.late_interval()] {
                let instant = local
                    .to_local_instant()
                    .minus(interval.wall_offset())
                    .unwrap();
                assert!(interval.contains(instant), "{local} in {interval}");
            }
        }
    }
}

#[test]
fn zone_interval_contains_its_instant() {
    let zone = new_york();
    for instant in [
        Instant::MIN,
        Instant::from_utc(2017, 3, 12, 6, 59).unwrap(),
        Instant::from_utc(2017, 3, 12, 7, 0).unwrap(),
        Instant::from_utc(2017, 12, 25, 0, 0).unwrap(),
        Instant::MAX,
    ] {
        assert!(zone.zone_interval(instant).contains(instant), "{instant}");
    }
}

#[test]
fn start_of_day_is_usually_midnight() {
    let zone = new_york();
    let date = LocalDate::try_new_iso(2017, 3, 12).unwrap();
    let start = zone.at_start_of_day(&date).unwrap();
    assert_eq!(
        start.local_date_time(),
        LocalDateTime::try_new_iso(2017, 3, 12, 0, 0, 0).unwrap()
    );
    assert_eq!(start.offset(), hours(-5));
}

#[test]
fn start_of_day_after_midnight_gap() {
    // A Brazil-style zone springing forward at local midnight: the day
    // starts at 01:00.
    let transition = Instant::from_utc(2018, 11, 4, 3, 0).unwrap();
    let zone = DateTimeZone::from_intervals(
        "America/Sao_Paulo",
        vec![
            ZoneInterval::new("-03", None, Some(transition), hours(-3), hours(-3)).unwrap(),
            ZoneInterval::new("-02", Some(transition), None, hours(-2), hours(-3)).unwrap(),
        ],
    )
    .unwrap();
    let date = LocalDate::try_new_iso(2018, 11, 4).unwrap();
    let start = zone.at_start_of_day(&date).unwrap();
    assert_eq!(
        start.local_date_time(),
        LocalDateTime::try_new_iso(2018, 11, 4, 1, 0, 0).unwrap()
    );
    assert_eq!(start.offset(), hours(-2));
}

#[test]
fn samoa_skips_an_entire_date() {
    let zone = apia();

    // 2011-12-29 was the last -10:00 day and 2011-12-31 the first
    // +14:00 day; the 30th never happened.
    let before = zone
        .at_start_of_day(&LocalDate::try_new_iso(2011, 12, 29).unwrap())
        .unwrap();
    assert_eq!(before.offset(), hours(-10));
    let after = zone
        .at_start_of_day(&LocalDate::try_new_iso(2011, 12, 31).unwrap())
        .unwrap();
    assert_eq!(after.offset(), hours(14));
    assert_eq!(
        after.to_instant() - before.to_instant(),
        crate::components::Duration::ONE_DAY
    );

    let skipped_date = LocalDate::try_new_iso(2011, 12, 30).unwrap();
    assert_eq!(
        zone.at_start_of_day(&skipped_date).unwrap_err().kind(),
        ErrorKind::SkippedLocalTime
    );
    // Every time on the skipped date maps to nothing.
    for hour in [0, 6, 12, 23] {
        let local = LocalDateTime::try_new_iso(2011, 12, 30, hour, 0, 0).unwrap();
        assert_eq!(zone.map_local(&local).count(), 0, "{local}");
    }
}

#[test]
fn fixed_zones_map_everything_uniquely() {
    let zone = DateTimeZone::for_offset(Offset::from_hours_and_minutes(5, 30).unwrap());
    assert!(zone.is_fixed());
    assert_eq!(zone.id(), "UTC+05:30");
    assert_eq!(zone.min_offset(), zone.max_offset());

    let local = LocalDateTime::try_new_iso(2024, 2, 29, 23, 59, 59).unwrap();
    let mapping = zone.map_local(&local);
    assert_eq!(mapping.count(), 1);
    let zoned = mapping.single().unwrap();
    assert_eq!(zoned.local_date_time(), local);

    // The UTC id resolves to the fixed UTC zone.
    assert_eq!(DateTimeZone::utc().id(), "UTC");
    assert!(DateTimeZone::utc().is_fixed());
    assert_eq!(DateTimeZone::utc(), DateTimeZone::for_offset(Offset::ZERO));
}

#[test]
fn min_and_max_offsets_aggregate_the_table() {
    let zone = new_york();
    assert_eq!(zone.min_offset(), hours(-5));
    assert_eq!(zone.max_offset(), hours(-4));
    assert!(!zone.is_fixed());
    let apia = apia();
    assert_eq!(apia.min_offset(), hours(-11));
    assert_eq!(apia.max_offset(), hours(14));
}

#[test]
fn end_of_interval_before_resolver() {
    let zone = new_york();
    let skipped = LocalDateTime::try_new_iso(2017, 3, 12, 2, 30, 0).unwrap();
    let resolved = zone
        .resolve_local(
            &skipped,
            &resolvers::Resolver::new(
                resolvers::return_earlier,
                resolvers::return_end_of_interval_before,
            ),
        )
        .unwrap();
    // The last representable nanosecond of standard time.
    assert_eq!(resolved.offset(), hours(-5));
    assert_eq!(
        resolved.to_instant(),
        Instant::from_utc(2017, 3, 12, 7, 0)
            .unwrap()
            .prev_nanosecond()
    );
}
