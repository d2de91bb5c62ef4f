//! Scale factors shared across the crate.
//!
//! A tick is 100 nanoseconds, the smallest interval representable by a
//! number of external serialization surfaces; all other factors follow
//! the civil clock.

/// Nanoseconds per tick: 100.
pub const NANOS_PER_TICK: i64 = 100;
/// Nanoseconds per millisecond: 1e6.
pub const NANOS_PER_MILLISECOND: i64 = 1_000_000;
/// Nanoseconds per second: 1e9.
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
/// Nanoseconds per minute: 6e10.
pub const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
/// Nanoseconds per hour: 3.6e12.
pub const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
/// Nanoseconds per day: 8.64e13.
pub const NANOS_PER_DAY: i64 = 24 * NANOS_PER_HOUR;
/// Nanoseconds per week: 6.048e14.
pub const NANOS_PER_WEEK: i64 = 7 * NANOS_PER_DAY;

/// Ticks per millisecond: 1e4.
pub const TICKS_PER_MILLISECOND: i64 = 10_000;
/// Ticks per second: 1e7.
pub const TICKS_PER_SECOND: i64 = 10_000_000;
/// Ticks per minute: 6e8.
pub const TICKS_PER_MINUTE: i64 = 60 * TICKS_PER_SECOND;
/// Ticks per hour: 3.6e10.
pub const TICKS_PER_HOUR: i64 = 60 * TICKS_PER_MINUTE;
/// Ticks per day: 8.64e11.
pub const TICKS_PER_DAY: i64 = 24 * TICKS_PER_HOUR;
/// Ticks per week: 6.048e12.
pub const TICKS_PER_WEEK: i64 = 7 * TICKS_PER_DAY;

/// Milliseconds per second: 1e3.
pub const MILLIS_PER_SECOND: i64 = 1_000;
/// Milliseconds per minute: 6e4.
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
/// Milliseconds per hour: 3.6e6.
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
/// Milliseconds per day: 8.64e7.
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Seconds per minute: 60.
pub const SECONDS_PER_MINUTE: i64 = 60;
/// Seconds per hour: 3600.
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
/// Seconds per day: 86,400.
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
/// Seconds per week: 604,800.
pub const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// Minutes per hour: 60.
pub const MINUTES_PER_HOUR: i64 = 60;
/// Minutes per day: 1440.
pub const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

/// Hours per day: 24.
pub const HOURS_PER_DAY: i64 = 24;
/// Days per week: 7.
pub const DAYS_PER_WEEK: i64 = 7;

/// The day of the week of the Unix epoch (1970-01-01), ISO numbered
/// with 1 = Monday. The epoch fell on a Thursday.
pub const UNIX_EPOCH_DAY_OF_WEEK: u8 = 4;
