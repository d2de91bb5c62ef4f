//! Strategies for collapsing a local mapping to a single zoned value.
//!
//! A [`Resolver`] is total over every possible [`ZoneLocalMapping`]: it
//! pairs one primitive for the ambiguous (two-instant) case with one
//! for the skipped (zero-instant) case, while unambiguous mappings
//! always pass straight through. The primitives compose freely, so the
//! behaviour of older API generations remains constructible even though
//! only the current strict and lenient strategies are named.

use crate::components::{LocalDateTime, ZonedDateTime};
use crate::zone::{DateTimeZone, ZoneInterval, ZoneLocalMapping};
use crate::{ChronalError, ChronalResult};

/// A primitive handling a local time that maps to two instants. The
/// arguments are the earlier and later candidate.
pub type AmbiguousTimeResolver =
    fn(earlier: ZonedDateTime, later: ZonedDateTime) -> ChronalResult<ZonedDateTime>;

/// A primitive handling a local time that maps to no instant. The
/// arguments are the unmapped local time, the zone, and the intervals
/// before and after the gap.
pub type SkippedTimeResolver = fn(
    local: &LocalDateTime,
    zone: &DateTimeZone,
    before: &ZoneInterval,
    after: &ZoneInterval,
) -> ChronalResult<ZonedDateTime>;

/// A total mapping from [`ZoneLocalMapping`] to a single
/// [`ZonedDateTime`].
#[derive(Clone, Copy)]
pub struct Resolver {
    ambiguous: AmbiguousTimeResolver,
    skipped: SkippedTimeResolver,
}

impl Resolver {
    /// Composes a resolver from an ambiguity primitive and a gap
    /// primitive.
    #[must_use]
    pub const fn new(ambiguous: AmbiguousTimeResolver, skipped: SkippedTimeResolver) -> Self {
        Self { ambiguous, skipped }
    }

    /// Applies the resolver to a mapping.
    pub fn resolve(&self, mapping: &ZoneLocalMapping) -> ChronalResult<ZonedDateTime> {
        match mapping.count() {
            1 => mapping.single(),
            2 => (self.ambiguous)(
                mapping.zoned_in(mapping.early_interval()),
                mapping.zoned_in(mapping.late_interval()),
            ),
            _ => (self.skipped)(
                mapping.local_date_time(),
                mapping.zone(),
                mapping.early_interval(),
                mapping.late_interval(),
            ),
        }
    }
}

impl core::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Resolver")
    }
}

// ==== Ambiguity primitives ====

/// Picks the earlier of two ambiguous readings.
pub fn return_earlier(
    earlier: ZonedDateTime,
    _later: ZonedDateTime,
) -> ChronalResult<ZonedDateTime> {
    Ok(earlier)
}

/// Picks the later of two ambiguous readings.
pub fn return_later(
    _earlier: ZonedDateTime,
    later: ZonedDateTime,
) -> ChronalResult<ZonedDateTime> {
    Ok(later)
}

/// Rejects ambiguous readings.
pub fn throw_when_ambiguous(
    earlier: ZonedDateTime,
    _later: ZonedDateTime,
) -> ChronalResult<ZonedDateTime> {
    Err(ChronalError::ambiguous_local_time().with_message(alloc::format!(
        "local time {} is ambiguous in zone {}.",
        earlier.local_date_time(),
        earlier.zone().id()
    )))
}

// ==== Gap primitives ====

/// Maps a skipped reading to the first instant after the gap.
pub fn return_start_of_interval_after(
    local: &LocalDateTime,
    zone: &DateTimeZone,
    _before: &ZoneInterval,
    after: &ZoneInterval,
) -> ChronalResult<ZonedDateTime> {
    let start = after.raw_start();
    let shifted = LocalDateTime::from_local_instant(
        start.safe_plus(after.wall_offset()),
        local.calendar(),
    )?;
    Ok(ZonedDateTime::new_unchecked(
        shifted,
        after.wall_offset(),
        zone.clone(),
    ))
}

/// Maps a skipped reading to the last instant before the gap.
pub fn return_end_of_interval_before(
    local: &LocalDateTime,
    zone: &DateTimeZone,
    before: &ZoneInterval,
    _after: &ZoneInterval,
) -> ChronalResult<ZonedDateTime> {
    let end = before.raw_end().prev_nanosecond();
    let shifted = LocalDateTime::from_local_instant(
        end.safe_plus(before.wall_offset()),
        local.calendar(),
    )?;
    Ok(ZonedDateTime::new_unchecked(
        shifted,
        before.wall_offset(),
        zone.clone(),
    ))
}

/// Maps a skipped reading forward by the width of the gap: the reading
/// is interpreted at the pre-transition offset and rendered at the
/// post-transition one.
pub fn return_forward_shifted(
    local: &LocalDateTime,
    zone: &DateTimeZone,
    before: &ZoneInterval,
    after: &ZoneInterval,
) -> ChronalResult<ZonedDateTime> {
    let instant = local.to_local_instant().minus(before.wall_offset())?;
    let shifted = LocalDateTime::from_local_instant(
        instant.safe_plus(after.wall_offset()),
        local.calendar(),
    )?;
    Ok(ZonedDateTime::new_unchecked(
        shifted,
        after.wall_offset(),
        zone.clone(),
    ))
}

/// Rejects skipped readings.
pub fn throw_when_skipped(
    local: &LocalDateTime,
    zone: &DateTimeZone,
    _before: &ZoneInterval,
    _after: &ZoneInterval,
) -> ChronalResult<ZonedDateTime> {
    Err(ChronalError::skipped_local_time().with_message(alloc::format!(
        "local time {local} is skipped in zone {}.",
        zone.id()
    )))
}

// ==== Named strategies ====

/// The strict strategy: ambiguous and skipped readings both fail, with
/// distinct error kinds.
#[must_use]
pub const fn strict() -> Resolver {
    Resolver::new(throw_when_ambiguous, throw_when_skipped)
}

/// The lenient strategy: ambiguous readings take the earlier instant
/// and skipped readings shift forward by the gap width.
#[must_use]
pub const fn lenient() -> Resolver {
    Resolver::new(return_earlier, return_forward_shifted)
}
