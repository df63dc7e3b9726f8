use core::{
    fmt::{self, Display},
    str::FromStr,
};

use chrono::NaiveDate;
use tracing::trace;

use crate::{
    error::{FormatError, VersionError},
    segment::{Segment, Unit},
};

/// The rendered major, minor and micro components of a version. `micro` is empty when the format
/// has only two segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Components {
    /// The rendered major component
    pub major: String,
    /// The rendered minor component
    pub minor: String,
    /// The rendered micro component, or the empty string
    pub micro: String,
}

impl Components {
    /// Returns true when no release has populated these components yet.
    pub fn is_unreleased(&self) -> bool {
        self.major.is_empty() && self.minor.is_empty()
    }
}

impl Display for Components {
    /// Joins the non-empty components with `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for part in [&self.major, &self.minor, &self.micro] {
            if part.is_empty() {
                continue;
            }
            if !first {
                f.write_str(".")?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}

/// A Format describes the structure of a calendar version: a required major and minor
/// [`Segment`], and an optional micro one, separated by dots.
///
/// ```
/// use calver::{Format, Segment};
///
/// let format: Format = "YYYY.0M".parse().unwrap();
/// assert_eq!(Segment::FullYear, format.major());
/// assert_eq!(Segment::Empty, format.micro());
/// assert_eq!("YYYY.0M", format.to_string());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Format {
    major: Segment,
    minor: Segment,
    micro: Segment,
}

impl Format {
    /// Compiles a format string such as `"YYYY.MM.DD"`.
    ///
    /// # Errors
    ///
    /// - [`FormatError::TooFewParts`] if there are fewer than two dot-separated parts.
    /// - [`FormatError::TooManyParts`] if there are more than three.
    /// - [`FormatError::UnknownSegment`] naming the first part that is not a known segment.
    pub fn parse(format_str: &str) -> Result<Self, FormatError> {
        let parts: Vec<&str> = format_str.split('.').collect();

        if parts.len() < 2 {
            return Err(FormatError::TooFewParts);
        }
        if parts.len() > 3 {
            return Err(FormatError::TooManyParts);
        }

        let major = parts[0].parse()?;
        let minor = parts[1].parse()?;
        let micro = match parts.get(2) {
            Some(part) => part.parse()?,
            None => Segment::Empty,
        };

        let format = Self {
            major,
            minor,
            micro,
        };
        trace!(%format, "compiled format");
        Ok(format)
    }

    /// The segment of the major component.
    pub fn major(&self) -> Segment {
        self.major
    }

    /// The segment of the minor component.
    pub fn minor(&self) -> Segment {
        self.minor
    }

    /// The segment of the micro component, [`Segment::Empty`] for two-part formats.
    pub fn micro(&self) -> Segment {
        self.micro
    }

    pub(crate) fn segments(&self) -> [Segment; 3] {
        [self.major, self.minor, self.micro]
    }

    /// The number of non-empty segments, 2 or 3.
    pub fn len(&self) -> usize {
        self.segments().iter().filter(|s| !s.is_empty()).count()
    }

    /// Always false: a format has at least a major and a minor segment.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Renders every segment of this format for `date`.
    pub fn render(&self, date: &NaiveDate) -> Components {
        Components {
            major: self.major.render(date),
            minor: self.minor.render(date),
            micro: self.micro.render(date),
        }
    }

    /// Parses the dotted core of a version string (the part before any `-` suffix) into its
    /// components, canonicalizing each one.
    ///
    /// # Errors
    ///
    /// - [`VersionError::FormatMismatch`] if the number of dot-separated parts differs from the
    ///   number of segments in this format.
    /// - [`VersionError::SegmentMismatch`] for the first part that does not conform to its
    ///   segment.
    ///
    /// ```
    /// use calver::Format;
    ///
    /// let format = Format::parse("YYYY.MM.DD").unwrap();
    /// let components = format.parse_components("2007.02.5").unwrap();
    /// assert_eq!("2007.2.5", components.to_string());
    /// ```
    pub fn parse_components(&self, raw: &str) -> Result<Components, VersionError> {
        let parts: Vec<&str> = raw.split('.').collect();
        if parts.len() != self.len() {
            return Err(VersionError::FormatMismatch {
                format: self.to_string(),
            });
        }

        let major = self.major.parse(parts[0])?;
        let minor = self.minor.parse(parts[1])?;
        let micro = match parts.get(2) {
            Some(part) => self.micro.parse(part)?,
            None => String::new(),
        };

        Ok(Components {
            major,
            minor,
            micro,
        })
    }

    /// Recovers the calendar day that `components` were rendered from, when this format pins one
    /// down (a year, a month and a day segment). Two-digit years are taken to be in 2000-2099.
    pub(crate) fn date_of(&self, components: &Components) -> Option<NaiveDate> {
        let mut year = None;
        let mut month = None;
        let mut day = None;

        let values = [&components.major, &components.minor, &components.micro];
        for (segment, raw) in self.segments().iter().zip(values) {
            let Some(unit) = segment.unit() else {
                continue;
            };
            let value = segment.parse_value(raw).ok()?;
            match unit {
                Unit::Year => {
                    year = Some(match segment {
                        Segment::FullYear => value as i32,
                        _ => 2000 + value as i32,
                    })
                }
                Unit::Month => month = Some(value),
                Unit::Day => day = Some(value),
                Unit::Week => {}
            }
        }

        NaiveDate::from_ymd_opt(year?, month?, day?)
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::parse(s)
    }
}

impl Display for Format {
    /// Displays the canonical format string, e.g. `YYYY.MM.DD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.major.token())?;
        for segment in [self.minor, self.micro] {
            if !segment.is_empty() {
                write!(f, ".{}", segment)?;
            }
        }
        Ok(())
    }
}
