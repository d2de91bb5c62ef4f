//! Lazy iteration over a zone's intervals.

use bitflags::bitflags;

use crate::components::{Instant, Interval};
use crate::zone::{DateTimeZone, ZoneInterval};
use crate::{ChronalError, ChronalResult};

bitflags! {
    /// Options controlling which intervals count as equivalent when
    /// coalescing a zone-interval sequence. With no flags set, only the
    /// wall offset is compared.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ZoneEqualityOptions: u32 {
        /// Compare the standard offset and savings individually rather
        /// than only their sum.
        const MATCH_OFFSET_COMPONENTS = 1 << 0;
        /// Compare interval names.
        const MATCH_NAMES = 1 << 1;
    }
}

impl ZoneEqualityOptions {
    /// Validates a raw bit pattern, rejecting undefined bits.
    pub fn try_from_bits(bits: u32) -> ChronalResult<Self> {
        Self::from_bits(bits).ok_or_else(|| {
            ChronalError::invalid_argument()
                .with_message("undefined zone equality option bits.")
        })
    }
}

/// A pull-based iterator over the zone intervals covering an instant
/// interval, in chronological order.
///
/// The iterator holds an explicit cursor: the next instant whose
/// interval has not been yielded yet. Each yielded interval is the raw
/// zone interval, untruncated to the query window. Iterators are
/// single-threaded values; independent iterators over the same zone
/// are safe because the zone itself is immutable.
#[derive(Debug)]
pub struct ZoneIntervalIterator {
    zone: DateTimeZone,
    cursor: Option<Instant>,
    end: Option<Instant>,
}

impl ZoneIntervalIterator {
    pub(crate) fn new(zone: DateTimeZone, interval: Interval) -> Self {
        let start = interval.start().unwrap_or(Instant::MIN);
        // An empty query interval yields nothing.
        let cursor = match interval.end() {
            Some(end) if end <= start => None,
            _ => Some(start),
        };
        Self {
            zone,
            cursor,
            end: interval.end(),
        }
    }
}

impl Iterator for ZoneIntervalIterator {
    type Item = ZoneInterval;

    fn next(&mut self) -> Option<ZoneInterval> {
        let cursor = self.cursor?;
        let interval = self.zone.zone_interval(cursor);
        self.cursor = match interval.end() {
            Some(next) if self.end.is_none_or(|limit| next < limit) => Some(next),
            _ => None,
        };
        Some(interval)
    }
}

/// A wrapper over [`ZoneIntervalIterator`] that merges adjacent
/// intervals equivalent under a set of [`ZoneEqualityOptions`].
#[derive(Debug)]
pub struct CoalescedZoneIntervals {
    inner: ZoneIntervalIterator,
    pending: Option<ZoneInterval>,
    options: ZoneEqualityOptions,
}

impl CoalescedZoneIntervals {
    pub(crate) fn new(inner: ZoneIntervalIterator, options: ZoneEqualityOptions) -> Self {
        Self {
            inner,
            pending: None,
            options,
        }
    }
}

fn equivalent(options: ZoneEqualityOptions, a: &ZoneInterval, b: &ZoneInterval) -> bool {
    if !a.same_wall_offset(b) {
        return false;
    }
    if options.contains(ZoneEqualityOptions::MATCH_OFFSET_COMPONENTS)
        && !a.equal_ignoring_bounds(b, false)
    {
        return false;
    }
    if options.contains(ZoneEqualityOptions::MATCH_NAMES) && a.name() != b.name() {
        return false;
    }
    true
}

impl Iterator for CoalescedZoneIntervals {
    type Item = ZoneInterval;

    fn next(&mut self) -> Option<ZoneInterval> {
        let mut current = match self.pending.take() {
            Some(interval) => interval,
            None => self.inner.next()?,
        };
        let options = self.options;
        for next in self.inner.by_ref() {
            if equivalent(options, &current, &next) {
                current = current.with_raw_bounds(current.raw_start(), next.raw_end());
            } else {
                self.pending = Some(next);
                break;
            }
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Offset;
    use alloc::vec;
    use alloc::vec::Vec;

    fn hours(h: i32) -> Offset {
        Offset::from_hours(h).unwrap()
    }

    fn two_year_zone() -> DateTimeZone {
        let spring_17 = Instant::from_utc(2017, 3, 12, 7, 0).unwrap();
        let fall_17 = Instant::from_utc(2017, 11, 5, 6, 0).unwrap();
        let spring_18 = Instant::from_utc(2018, 3, 11, 7, 0).unwrap();
        let fall_18 = Instant::from_utc(2018, 11, 4, 6, 0).unwrap();
        DateTimeZone::from_intervals(
            "America/New_York",
            vec![
                ZoneInterval::new("EST", None, Some(spring_17), hours(-5), hours(-5)).unwrap(),
                ZoneInterval::new("EDT", Some(spring_17), Some(fall_17), hours(-4), hours(-5))
                    .unwrap(),
                ZoneInterval::new("EST", Some(fall_17), Some(spring_18), hours(-5), hours(-5))
                    .unwrap(),
                ZoneInterval::new("EDT", Some(spring_18), Some(fall_18), hours(-4), hours(-5))
                    .unwrap(),
                ZoneInterval::new("EST", Some(fall_18), None, hours(-5), hours(-5)).unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn iteration_covers_the_window_in_order(){
        let zone = two_year_zone();
        let from = Instant::from_utc(2017, 1, 1, 0, 0).unwrap();
        let until = Instant::from_utc(2018, 1, 1, 0, 0).unwrap();
        let intervals: Vec<ZoneInterval> = zone
            .zone_intervals(Interval::new(Some(from), Some(until)).unwrap())
            .collect();
        let names: Vec<&str> = intervals.iter().map(ZoneInterval::name).collect();
        assert_eq!(names, vec!["EST", "EDT", "EST"]);
        // Raw intervals, untruncated to the query window.
        assert!(!intervals[0].has_start());
        assert!(intervals[2].has_end());
        // Contiguity across the yielded sequence.
        for pair in intervals.windows(2) {
            assert_eq!(pair[0].raw_end(), pair[1].raw_start());
        }
    }

    #[test]
    fn unbounded_iteration_terminates_at_final_interval() {
        let zone = two_year_zone();
        let all: Vec<ZoneInterval> = zone.zone_intervals(Interval::whole_timeline()).collect();
        assert_eq!(all.len(), 5);
        assert!(!all[0].has_start());
        assert!(!all[4].has_end());
    }

    #[test]
    fn empty_window_yields_nothing() {
        let zone = two_year_zone();
        let at = Instant::from_utc(2017, 6, 1, 0, 0).unwrap();
        let mut iterator = zone.zone_intervals(Interval::new(Some(at), Some(at)).unwrap());
        assert!(iterator.next().is_none());
    }

    #[test]
    fn coalescing_by_wall_offset_merges_all_standard_runs() {
        let zone = two_year_zone();
        let merged: Vec<ZoneInterval> = zone
            .zone_intervals_with(Interval::whole_timeline(), ZoneEqualityOptions::empty())
            .collect();
        // Adjacent intervals never share a wall offset here, so nothing
        // merges; a name-insensitive fixed zone comparison does.
        assert_eq!(merged.len(), 5);

        let utc_ish = DateTimeZone::from_intervals(
            "Test",
            vec![
                ZoneInterval::new(
                    "A",
                    None,
                    Some(Instant::from_utc(2017, 1, 1, 0, 0).unwrap()),
                    hours(1),
                    hours(1),
                )
                .unwrap(),
                ZoneInterval::new(
                    "B",
                    Some(Instant::from_utc(2017, 1, 1, 0, 0).unwrap()),
                    None,
                    hours(1),
                    hours(0),
                )
                .unwrap(),
            ],
        )
        .unwrap();
        let merged: Vec<ZoneInterval> = utc_ish
            .zone_intervals_with(Interval::whole_timeline(), ZoneEqualityOptions::empty())
            .collect();
        assert_eq!(merged.len(), 1);
        assert!(!merged[0].has_start());
        assert!(!merged[0].has_end());
        assert_eq!(merged[0].name(), "A");

        // Component-sensitive comparison keeps the split.
        let split: Vec<ZoneInterval> = utc_ish
            .zone_intervals_with(
                Interval::whole_timeline(),
                ZoneEqualityOptions::MATCH_OFFSET_COMPONENTS,
            )
            .collect();
        assert_eq!(split.len(), 2);

        // Name-sensitive comparison also keeps it.
        let split: Vec<ZoneInterval> = utc_ish
            .zone_intervals_with(
                Interval::whole_timeline(),
                ZoneEqualityOptions::MATCH_NAMES,
            )
            .collect();
        assert_eq!(split.len(), 2);
    }

    #[test]
    fn undefined_option_bits_are_rejected() {
        assert!(ZoneEqualityOptions::try_from_bits(0b11).is_ok());
        assert_eq!(
            ZoneEqualityOptions::try_from_bits(0b100).unwrap_err().kind(),
            crate::error::ErrorKind::InvalidArgument
        );
    }
}
