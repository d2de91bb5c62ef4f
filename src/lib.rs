//! `chronal` is a calendar and time zone arithmetic library.
//!
//! The crate models points on the physical timeline ([`Instant`]),
//! elapsed physical time ([`Duration`]), UTC displacements ([`Offset`]),
//! civil dates and times parameterized by a pluggable calendar
//! ([`LocalDate`], [`LocalTime`], [`LocalDateTime`], [`CalendarSystem`]),
//! calendar-unit intervals ([`Period`]), and the two-way mapping between
//! civil time and the timeline as mediated by a time zone
//! ([`DateTimeZone`], [`ZoneInterval`], [`ZonedDateTime`]).
//!
//! All public values are immutable once constructed; calendar systems and
//! time zones are shared flyweights that values reference through cheap
//! handles. Integer arithmetic throughout the crate is checked, and every
//! fallible operation reports a [`ChronalError`] rather than wrapping or
//! saturating silently.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::cognitive_complexity,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,

    // It may be worth to look if we can fix the issues highlighted by these lints.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod calendar;
pub mod constants;
pub mod error;
pub mod zone;

pub(crate) mod components;
pub(crate) mod utils;
pub(crate) mod ymd;

#[doc(inline)]
pub use error::ChronalError;

/// The `chronal` result type.
pub type ChronalResult<T> = core::result::Result<T, ChronalError>;

#[doc(inline)]
pub use crate::components::{
    DateInterval, Duration, Instant, Interval, LocalDate, LocalDateTime, LocalTime, Offset,
    OffsetDateTime, Period, PeriodBuilder, PeriodUnits, ZonedDateTime,
};

#[doc(inline)]
pub use crate::calendar::{CalendarSystem, Era, IslamicEpoch, IslamicLeapYearPattern};

#[doc(inline)]
pub use crate::zone::{
    DateTimeZone, Resolver, ZoneEqualityOptions, ZoneInterval, ZoneLocalMapping,
};

/// A library specific trait for unwrapping assertions.
pub(crate) trait ChronalUnwrap {
    type Output;

    /// `chronal` based assertion for unwrapping. This will panic in
    /// debug builds, but throws an error during runtime.
    fn chronal_unwrap(self) -> ChronalResult<Self::Output>;
}

impl<T> ChronalUnwrap for Option<T> {
    type Output = T;

    fn chronal_unwrap(self) -> ChronalResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(ChronalError::assert())
    }
}
