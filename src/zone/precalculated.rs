//! A zone backed by a precomputed transition table.
//!
//! This is the shape a TZDB provider hands over: a chronologically
//! contiguous list of zone intervals covering the whole timeline. The
//! core does not read TZDB data itself; it only validates and serves
//! the table.

use alloc::vec::Vec;

use crate::components::{Instant, Offset};
use crate::zone::ZoneInterval;
use crate::{ChronalError, ChronalResult};

#[derive(Debug)]
pub(crate) struct PrecalculatedZoneData {
    intervals: Vec<ZoneInterval>,
    min_offset: Offset,
    max_offset: Offset,
}

impl PrecalculatedZoneData {
    /// Validates and adopts an interval table. The table must be
    /// non-empty, unbounded at both outer edges, and contiguous: each
    /// interval must end exactly where the next begins.
    pub(crate) fn new(intervals: Vec<ZoneInterval>) -> ChronalResult<Self> {
        let (Some(first), Some(last)) = (intervals.first(), intervals.last()) else {
            return Err(ChronalError::invariant()
                .with_message("a zone needs at least one interval."));
        };
        if first.has_start() || last.has_end() {
            return Err(ChronalError::invariant()
                .with_message("a zone's outer intervals must be unbounded."));
        }
        for pair in intervals.windows(2) {
            if pair[0].raw_end() != pair[1].raw_start() {
                return Err(ChronalError::invariant()
                    .with_message("zone intervals must be contiguous."));
            }
        }

        let mut min_offset = Offset::MAX;
        let mut max_offset = Offset::MIN;
        for interval in &intervals {
            min_offset = min_offset.min(interval.wall_offset());
            max_offset = max_offset.max(interval.wall_offset());
        }

        #[cfg(feature = "log")]
        log::debug!(
            "precalculated zone adopted: {} intervals, offsets {}..{}",
            intervals.len(),
            min_offset,
            max_offset
        );

        Ok(Self {
            intervals,
            min_offset,
            max_offset,
        })
    }

    pub(crate) fn min_offset(&self) -> Offset {
        self.min_offset
    }

    pub(crate) fn max_offset(&self) -> Offset {
        self.max_offset
    }

    /// The interval containing the instant. Total because the table
    /// covers the whole timeline.
    pub(crate) fn interval_at(&self, instant: Instant) -> &ZoneInterval {
        let index = self
            .intervals
            .partition_point(|interval| interval.raw_end() <= instant);
        debug_assert!(index < self.intervals.len());
        // Contiguity makes the lookup total; saturate if the debug
        // assertion would have fired.
        &self.intervals[index.min(self.intervals.len() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn hours(h: i32) -> Offset {
        Offset::from_hours(h).unwrap()
    }

    fn new_york_2017() -> Vec<ZoneInterval> {
        let spring = Instant::from_utc(2017, 3, 12, 7, 0).unwrap();
        let fall = Instant::from_utc(2017, 11, 5, 6, 0).unwrap();
        vec![
            ZoneInterval::new("EST", None, Some(spring), hours(-5), hours(-5)).unwrap(),
            ZoneInterval::new("EDT", Some(spring), Some(fall), hours(-4), hours(-5)).unwrap(),
            ZoneInterval::new("EST", Some(fall), None, hours(-5), hours(-5)).unwrap(),
        ]
    }

    #[test]
    fn lookup_finds_surrounding_interval() {
        let data = PrecalculatedZoneData::new(new_york_2017()).unwrap();
        let summer = Instant::from_utc(2017, 7, 1, 12, 0).unwrap();
        assert_eq!(data.interval_at(summer).name(), "EDT");
        let winter = Instant::from_utc(2017, 1, 1, 12, 0).unwrap();
        assert_eq!(data.interval_at(winter).name(), "EST");

        // Transition boundaries belong to the later interval.
        let spring = Instant::from_utc(2017, 3, 12, 7, 0).unwrap();
        assert_eq!(data.interval_at(spring).name(), "EDT");
        assert_eq!(
            data.interval_at(spring.prev_nanosecond()).name(),
            "EST"
        );
    }

    #[test]
    fn offsets_are_aggregated() {
        let data = PrecalculatedZoneData::new(new_york_2017()).unwrap();
        assert_eq!(data.min_offset(), hours(-5));
        assert_eq!(data.max_offset(), hours(-4));
    }

    #[test]
    fn gaps_in_the_table_are_rejected() {
        let spring = Instant::from_utc(2017, 3, 12, 7, 0).unwrap();
        let fall = Instant::from_utc(2017, 11, 5, 6, 0).unwrap();
        let intervals = vec![
            ZoneInterval::new("EST", None, Some(spring), hours(-5), hours(-5)).unwrap(),
            ZoneInterval::new("EST", Some(fall), None, hours(-5), hours(-5)).unwrap(),
        ];
        assert!(PrecalculatedZoneData::new(intervals).is_err());
    }

    #[test]
    fn bounded_outer_edges_are_rejected() {
        let spring = Instant::from_utc(2017, 3, 12, 7, 0).unwrap();
        let intervals = vec![
            ZoneInterval::new("EST", Some(spring), None, hours(-5), hours(-5)).unwrap()
        ];
        assert!(PrecalculatedZoneData::new(intervals).is_err());
        assert!(PrecalculatedZoneData::new(vec![]).is_err());
    }
}
