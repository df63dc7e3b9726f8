use crate::segment::Segment;

/// Errors raised while compiling a format string.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum FormatError {
    /// A dot-separated part of the format is not a known segment token.
    #[error("invalid format segment: {segment}")]
    UnknownSegment {
        /// The offending part of the format string
        segment: String,
    },

    /// The format has fewer than two dot-separated parts.
    #[error("major, minor and micro are all required for a valid format")]
    TooFewParts,

    /// The format has more than three dot-separated parts.
    #[error("format could only consist three parts: major, minor and micro")]
    TooManyParts,
}

/// Errors raised while parsing a version string against a format.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum VersionError {
    /// A component of the version does not conform to its segment (wrong width, not numeric, or
    /// out of range).
    #[error("provided string doesn't match the format segment: {segment}")]
    SegmentMismatch {
        /// The segment the component was parsed against
        segment: Segment,
    },

    /// The version string disagrees structurally with the format: the wrong number of
    /// components, or a suffix that is neither a pre-release nor a build increment.
    #[error("provided string doesn't match the format: {format}")]
    FormatMismatch {
        /// The canonical text of the format
        format: String,
    },

    /// The same-day build increment is already at its maximum and cannot be bumped.
    #[error("increment {increment} cannot be bumped any further")]
    IncrementOverflow {
        /// The increment that could not be bumped
        increment: u64,
    },

    /// The format string itself could not be compiled.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Errors raised while building a reference [`Date`](crate::Date).
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum DateError {
    /// A date string was not in `YYYY-MM-DD` form or named a nonexistent day.
    #[error("unparseable date: {0}")]
    UnparseableDate(#[from] chrono::ParseError),

    /// Explicit year, month and day values do not form a real date.
    #[error("explicit year ({year}), month ({month}), and day ({day}) arguments cannot be made into a valid date")]
    InvalidDateArguments {
        /// The year argument
        year: i32,
        /// The month argument, 1-based
        month: u32,
        /// The day-of-month argument, 1-based
        day: u32,
    },
}
