use core::{
    fmt::{self, Display},
    ops::RangeInclusive,
    str::FromStr,
};

use chrono::{Datelike, NaiveDate};

use crate::error::{FormatError, VersionError};

/// Full year - 2006, 2016, 2106
pub const FULL_YEAR: &str = "YYYY";
/// Short year - 6, 16, 6
pub const SHORT_YEAR: &str = "YY";
/// Zero-padded year - 06, 16, 06
pub const PADDED_YEAR: &str = "0Y";
/// Short month - 1, 2 ... 11, 12
pub const SHORT_MONTH: &str = "MM";
/// Zero-padded month - 01, 02 ... 11, 12
pub const PADDED_MONTH: &str = "0M";
/// Short ISO week - 1, 2 ... 52, 53
pub const SHORT_WEEK: &str = "WW";
/// Zero-padded ISO week - 01, 02 ... 52, 53
pub const PADDED_WEEK: &str = "0W";
/// Short day - 1, 2 ... 30, 31
pub const SHORT_DAY: &str = "DD";
/// Zero-padded day - 01, 02 ... 30, 31
pub const PADDED_DAY: &str = "0D";

/// How many digits a segment accepts when parsing a version component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParseWidth {
    min: usize,
    max: usize,
}

impl ParseWidth {
    const fn exact(width: usize) -> Self {
        Self {
            min: width,
            max: width,
        }
    }

    const fn up_to(max: usize) -> Self {
        Self { min: 1, max }
    }

    fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

/// The calendar unit a segment is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit {
    Year,
    Month,
    Week,
    Day,
}

/// A date-derived token in a format string, such as `YYYY` or `0M`.
///
/// `Empty` only ever occupies the optional micro slot of a [`Format`](crate::Format) that was
/// given two parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Segment {
    /// No segment. Renders as the empty string.
    #[default]
    Empty,
    /// `YYYY`: the year, zero-padded to 4 digits.
    FullYear,
    /// `YY`: the last two digits of the year, without a leading zero.
    ShortYear,
    /// `0Y`: the last two digits of the year, zero-padded to 2 digits.
    PaddedYear,
    /// `MM`: the month, `1`-`12`.
    ShortMonth,
    /// `0M`: the month, `01`-`12`.
    PaddedMonth,
    /// `WW`: the ISO-8601 week number, `1`-`53`.
    ShortWeek,
    /// `0W`: the ISO-8601 week number, `01`-`53`.
    PaddedWeek,
    /// `DD`: the day of the month, `1`-`31`.
    ShortDay,
    /// `0D`: the day of the month, `01`-`31`.
    PaddedDay,
}

impl Segment {
    /// Every non-empty segment, in token-table order.
    pub const ALL: [Segment; 9] = [
        Segment::FullYear,
        Segment::ShortYear,
        Segment::PaddedYear,
        Segment::ShortMonth,
        Segment::PaddedMonth,
        Segment::ShortWeek,
        Segment::PaddedWeek,
        Segment::ShortDay,
        Segment::PaddedDay,
    ];

    /// Returns the canonical token text of this segment, e.g. `"YYYY"`.
    pub fn token(&self) -> &'static str {
        match self {
            Segment::Empty => "",
            Segment::FullYear => FULL_YEAR,
            Segment::ShortYear => SHORT_YEAR,
            Segment::PaddedYear => PADDED_YEAR,
            Segment::ShortMonth => SHORT_MONTH,
            Segment::PaddedMonth => PADDED_MONTH,
            Segment::ShortWeek => SHORT_WEEK,
            Segment::PaddedWeek => PADDED_WEEK,
            Segment::ShortDay => SHORT_DAY,
            Segment::PaddedDay => PADDED_DAY,
        }
    }

    /// Returns true for [`Segment::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Segment::Empty)
    }

    pub(crate) fn unit(&self) -> Option<Unit> {
        match self {
            Segment::Empty => None,
            Segment::FullYear | Segment::ShortYear | Segment::PaddedYear => Some(Unit::Year),
            Segment::ShortMonth | Segment::PaddedMonth => Some(Unit::Month),
            Segment::ShortWeek | Segment::PaddedWeek => Some(Unit::Week),
            Segment::ShortDay | Segment::PaddedDay => Some(Unit::Day),
        }
    }

    fn parse_width(&self) -> ParseWidth {
        match self {
            Segment::Empty => ParseWidth::exact(0),
            Segment::FullYear => ParseWidth::exact(4),
            Segment::PaddedYear
            | Segment::PaddedMonth
            | Segment::PaddedWeek
            | Segment::PaddedDay => ParseWidth::exact(2),
            Segment::ShortYear
            | Segment::ShortMonth
            | Segment::ShortWeek
            | Segment::ShortDay => ParseWidth::up_to(2),
        }
    }

    fn value_range(&self) -> RangeInclusive<u32> {
        match self.unit() {
            None => 0..=0,
            Some(Unit::Year) => match self {
                Segment::FullYear => 0..=9999,
                _ => 0..=99,
            },
            Some(Unit::Month) => 1..=12,
            Some(Unit::Week) => 1..=53,
            Some(Unit::Day) => 1..=31,
        }
    }

    fn format_value(&self, value: u32) -> String {
        match self {
            Segment::Empty => String::new(),
            Segment::FullYear => format!("{:04}", value),
            Segment::PaddedYear
            | Segment::PaddedMonth
            | Segment::PaddedWeek
            | Segment::PaddedDay => format!("{:02}", value),
            Segment::ShortYear
            | Segment::ShortMonth
            | Segment::ShortWeek
            | Segment::ShortDay => value.to_string(),
        }
    }

    /// Returns the numeric value this segment takes on `date`.
    pub(crate) fn value(&self, date: &NaiveDate) -> u32 {
        match self.unit() {
            None => 0,
            // years outside 0..=9999 have no 4-digit rendering; they wrap like the short forms
            Some(Unit::Year) => match self {
                Segment::FullYear => date.year().rem_euclid(10_000) as u32,
                _ => date.year().rem_euclid(100) as u32,
            },
            Some(Unit::Month) => date.month(),
            Some(Unit::Week) => date.iso_week().week(),
            Some(Unit::Day) => date.day(),
        }
    }

    /// Renders this segment for `date`.
    ///
    /// ```
    /// use calver::Segment;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2007, 2, 5).unwrap();
    /// assert_eq!("7", Segment::ShortYear.render(&date));
    /// assert_eq!("02", Segment::PaddedMonth.render(&date));
    /// assert_eq!("6", Segment::ShortWeek.render(&date));
    /// ```
    pub fn render(&self, date: &NaiveDate) -> String {
        self.format_value(self.value(date))
    }

    /// Parses a single version component against this segment, returning its numeric value.
    pub(crate) fn parse_value(&self, raw: &str) -> Result<u32, VersionError> {
        let mismatch = || VersionError::SegmentMismatch { segment: *self };

        if !self.parse_width().contains(raw.len()) || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(mismatch());
        }
        if self.is_empty() {
            return Ok(0);
        }

        let value: u32 = raw.parse().map_err(|_| mismatch())?;
        if !self.value_range().contains(&value) {
            return Err(mismatch());
        }
        Ok(value)
    }

    /// Validates `raw` as a component of this segment and returns it re-rendered in canonical
    /// form. Short segments accept a redundant leading zero and drop it (`"02"` becomes `"2"`);
    /// padded segments require exactly two digits.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::SegmentMismatch`] if `raw` is not numeric, has the wrong width, or
    /// is out of range for the segment.
    pub fn parse(&self, raw: &str) -> Result<String, VersionError> {
        self.parse_value(raw).map(|value| self.format_value(value))
    }
}

impl FromStr for Segment {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Segment::ALL
            .iter()
            .find(|segment| segment.token() == s)
            .copied()
            .ok_or_else(|| FormatError::UnknownSegment {
                segment: s.to_string(),
            })
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
