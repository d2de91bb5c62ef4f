//! The error type used across the crate.

use alloc::borrow::Cow;
use core::fmt;

/// The category of a [`ChronalError`].
///
/// Every failure the crate can produce falls into exactly one of these
/// kinds, so callers can match on the category without parsing messages.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An argument or result fell outside its permitted value range.
    #[default]
    OutOfRange,
    /// A structural precondition failed, e.g. mixing calendars or
    /// applying time components where only date components are legal.
    Invariant,
    /// A local date-time maps to two instants in the given zone.
    AmbiguousLocalTime,
    /// A local date-time maps to zero instants in the given zone.
    SkippedLocalTime,
    /// A duration was divided by zero.
    DivideByZero,
    /// A named option or flag value was not recognized.
    InvalidArgument,
    /// An internal assertion failed. Reaching this kind is a bug.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OutOfRange => "out of range",
            Self::Invariant => "invariant violation",
            Self::AmbiguousLocalTime => "ambiguous local time",
            Self::SkippedLocalTime => "skipped local time",
            Self::DivideByZero => "divide by zero",
            Self::InvalidArgument => "invalid argument",
            Self::Assert => "implementation assertion",
        })
    }
}

/// The error type for this crate: an [`ErrorKind`] plus a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChronalError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl ChronalError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Creates an out-of-range error.
    #[inline]
    #[must_use]
    pub const fn out_of_range() -> Self {
        Self::new(ErrorKind::OutOfRange)
    }

    /// Creates an invariant-violation error.
    #[inline]
    #[must_use]
    pub const fn invariant() -> Self {
        Self::new(ErrorKind::Invariant)
    }

    /// Creates an ambiguous-local-time error.
    #[inline]
    #[must_use]
    pub const fn ambiguous_local_time() -> Self {
        Self::new(ErrorKind::AmbiguousLocalTime)
    }

    /// Creates a skipped-local-time error.
    #[inline]
    #[must_use]
    pub const fn skipped_local_time() -> Self {
        Self::new(ErrorKind::SkippedLocalTime)
    }

    /// Creates a divide-by-zero error.
    #[inline]
    #[must_use]
    pub const fn divide_by_zero() -> Self {
        Self::new(ErrorKind::DivideByZero)
    }

    /// Creates an invalid-argument error.
    #[inline]
    #[must_use]
    pub const fn invalid_argument() -> Self {
        Self::new(ErrorKind::InvalidArgument)
    }

    /// Creates an assertion error. Any assertion error is an
    /// implementation bug.
    #[inline]
    #[must_use]
    pub const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Attaches a message to this error.
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's [`ErrorKind`].
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the message attached to this error, which may be empty.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for ChronalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }
        Ok(())
    }
}

impl core::error::Error for ChronalError {}

#[cfg(test)]
mod tests {
    use super::{ChronalError, ErrorKind};

    #[test]
    fn kind_and_message_round_trip() {
        let err = ChronalError::out_of_range().with_message("day 32 is not valid.");
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.message(), "day 32 is not valid.");
    }

    #[test]
    fn display_includes_kind() {
        let err = ChronalError::divide_by_zero().with_message("zero divisor.");
        assert_eq!(
            std::format!("{err}"),
            "divide by zero: zero divisor."
        );
    }
}
