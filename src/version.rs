use core::fmt::{self, Display};

use tracing::{debug, instrument};

use crate::{
    date::{Clock, Date, LocalClock},
    error::{FormatError, VersionError},
    format::{Components, Format},
};

/// The modifier used for pre-releases when none is given.
pub const DEFAULT_MODIFIER: &str = "dev";

/// Which kind of version to produce next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReleaseKind {
    /// A plain release, e.g. `2020.12.20` or `2020.12.20-1`.
    #[default]
    Release,
    /// A pre-release marked with the modifier, e.g. `2020.12.20-dev.3`.
    PreRelease,
}

impl ReleaseKind {
    /// Returns true for [`ReleaseKind::PreRelease`].
    pub fn is_pre_release(&self) -> bool {
        matches!(self, ReleaseKind::PreRelease)
    }
}

/// The outcome of a transition, before it is committed to a [Version].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Next {
    /// The components of the next version
    pub components: Components,
    /// The build increment of the next version
    pub increment: u64,
    /// The reference date the next version was computed on
    pub date: Date,
}

/// A calendar version: date-derived components, a same-day build increment, and an optional
/// pre-release marker.
///
/// A Version is either *unreleased* (created with [Version::new], rendering as its format
/// string) or populated by parsing an existing version string with [Version::parse]. It is then
/// advanced in place with [Version::release] and [Version::pre_release].
///
/// Releasing several times on the same day bumps the increment:
///
/// ```
/// use calver::prelude::*;
///
/// let today = Date::explicit(2007, 2, 5).unwrap();
/// let mut version = Version::new("YYYY.MM.DD", "").unwrap();
/// assert_eq!("YYYY.MM.DD", version.to_string());
///
/// assert_eq!("2007.2.5", version.release_with(&today).unwrap());
/// assert_eq!("2007.2.5-1", version.release_with(&today).unwrap());
/// assert_eq!("2007.2.5-dev.2", version.pre_release_with(&today).unwrap());
///
/// // promoting a pre-release on the same day keeps the increment
/// assert_eq!("2007.2.5-2", version.release_with(&today).unwrap());
/// ```
///
/// A new day starts over:
///
/// ```
/// use calver::prelude::*;
///
/// let mut version = Version::parse("2007.2.5-3", "YYYY.MM.DD", "").unwrap();
/// let tomorrow = Date::explicit(2007, 2, 6).unwrap();
/// assert_eq!("2007.2.6", version.release_with(&tomorrow).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    components: Components,
    increment: u64,
    modifier: String,
    pre: bool,
    format: Format,
    date: Option<Date>,
}

impl Version {
    /// Creates an unreleased version for `format_str`. An empty `modifier` defaults to
    /// [DEFAULT_MODIFIER].
    ///
    /// # Errors
    ///
    /// Returns a [FormatError] if `format_str` does not compile.
    pub fn new(format_str: &str, modifier: &str) -> Result<Self, FormatError> {
        Ok(Self::from_format(Format::parse(format_str)?, modifier))
    }

    /// Creates an unreleased version for an already compiled [Format].
    pub fn from_format(format: Format, modifier: &str) -> Self {
        let modifier = if modifier.is_empty() {
            DEFAULT_MODIFIER
        } else {
            modifier
        };

        Self {
            components: Components::default(),
            increment: 0,
            modifier: modifier.to_string(),
            pre: false,
            format,
            date: None,
        }
    }

    /// Parses an existing version string such as `2020.12.20-dev.3` against `format_str`.
    ///
    /// The part before the first `-` holds the components. The optional suffix after it is
    /// either a pre-release (`<modifier>` or `<modifier>.<increment>`) or a plain increment.
    ///
    /// If the format has a year, a month and a day segment, the day the version was released on
    /// is recovered from it, so advancing on that same day bumps the increment rather than
    /// starting over.
    ///
    /// The format string itself is the rendering of an unreleased version, and parses back into
    /// one.
    ///
    /// Note: the components are only checked against the format by counting dots before each
    /// one is parsed against its segment. This is a coarse structural check, not a grammar for
    /// the whole string.
    ///
    /// # Errors
    ///
    /// - [VersionError::Format] if `format_str` does not compile.
    /// - [VersionError::FormatMismatch] if the suffix is malformed or the component count does
    ///   not match the format.
    /// - [VersionError::SegmentMismatch] if a component does not conform to its segment.
    #[instrument(level = "debug")]
    pub fn parse(raw: &str, format_str: &str, modifier: &str) -> Result<Self, VersionError> {
        let mut version = Self::new(format_str, modifier)?;
        let canonical = version.format.to_string();
        let mismatch = || VersionError::FormatMismatch {
            format: canonical.clone(),
        };

        if raw == canonical {
            debug!(%version, "parsed unreleased version");
            return Ok(version);
        }

        let (core, suffix) = match raw.split_once('-') {
            Some((core, suffix)) => (core, Some(suffix)),
            None => (raw, None),
        };

        if let Some(suffix) = suffix {
            let increment = match suffix.strip_prefix(version.modifier.as_str()) {
                Some(rest) => {
                    version.pre = true;
                    if rest.is_empty() {
                        "0"
                    } else {
                        rest.strip_prefix('.').ok_or_else(mismatch)?
                    }
                }
                None => suffix,
            };
            version.increment = parse_increment(increment).ok_or_else(mismatch)?;
        }

        if core.matches('.').count() != canonical.matches('.').count() {
            return Err(mismatch());
        }

        version.components = version.format.parse_components(core)?;
        version.date = version.format.date_of(&version.components).map(Date::from);

        debug!(%version, date = ?version.date, "parsed version");
        Ok(version)
    }

    /// The rendered major component, empty if unreleased.
    pub fn major(&self) -> &str {
        &self.components.major
    }

    /// The rendered minor component, empty if unreleased.
    pub fn minor(&self) -> &str {
        &self.components.minor
    }

    /// The rendered micro component, empty if unreleased or if the format has two segments.
    pub fn micro(&self) -> &str {
        &self.components.micro
    }

    /// All rendered components.
    pub fn components(&self) -> &Components {
        &self.components
    }

    /// The same-day build increment. Zero means no suffix.
    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// The label marking pre-releases.
    pub fn modifier(&self) -> &str {
        &self.modifier
    }

    /// Whether the current state is a pre-release.
    pub fn is_pre_release(&self) -> bool {
        self.pre
    }

    /// Whether any components have been rendered or parsed yet.
    pub fn is_released(&self) -> bool {
        !self.components.is_unreleased()
    }

    /// The compiled format of this version.
    pub fn format(&self) -> &Format {
        &self.format
    }

    /// The day of the last transition, or of the parsed version when the format pins one down.
    pub fn date(&self) -> Option<Date> {
        self.date
    }

    /// Computes the version that would follow this one on `today`, without changing `self`.
    ///
    /// - On the same day as the last transition, promoting a pre-release to a release keeps the
    ///   components and increment; anything else bumps the increment.
    /// - On any other day (or if no day is known), the components are rendered from `today` and
    ///   the increment starts over at zero.
    ///
    /// # Errors
    ///
    /// Returns [VersionError::IncrementOverflow] if the increment needs a bump but is already
    /// `u64::MAX`.
    pub fn next(&self, today: &Date, kind: ReleaseKind) -> Result<Next, VersionError> {
        if self.date.as_ref() == Some(today) {
            let increment = if !kind.is_pre_release() && self.pre {
                debug!(increment = self.increment, "promoting pre-release");
                self.increment
            } else {
                let increment = self.increment.checked_add(1).ok_or(
                    VersionError::IncrementOverflow {
                        increment: self.increment,
                    },
                )?;
                debug!(increment, "same-day increment");
                increment
            };

            return Ok(Next {
                components: self.components.clone(),
                increment,
                date: *today,
            });
        }

        debug!(%today, previous = ?self.date, "new day");
        Ok(Next {
            components: self.format.render(today),
            increment: 0,
            date: *today,
        })
    }

    /// Stores a transition computed by [Version::next].
    pub fn commit(&mut self, next: Next, kind: ReleaseKind) {
        self.components = next.components;
        self.increment = next.increment;
        self.date = Some(next.date);
        self.pre = kind.is_pre_release();
    }

    /// Reads `clock` once, advances this version and returns its new rendering.
    ///
    /// On error, `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// See [Version::next].
    pub fn advance<C: Clock>(
        &mut self,
        clock: &C,
        kind: ReleaseKind,
    ) -> Result<String, VersionError> {
        let next = self.next(&clock.today(), kind)?;
        self.commit(next, kind);
        Ok(self.to_string())
    }

    /// Advances to the next release on the local wall clock's day.
    ///
    /// # Errors
    ///
    /// See [Version::next].
    pub fn release(&mut self) -> Result<String, VersionError> {
        self.release_with(&LocalClock)
    }

    /// Advances to the next pre-release on the local wall clock's day.
    ///
    /// # Errors
    ///
    /// See [Version::next].
    pub fn pre_release(&mut self) -> Result<String, VersionError> {
        self.pre_release_with(&LocalClock)
    }

    /// Advances to the next release on the day given by `clock`.
    pub fn release_with<C: Clock>(&mut self, clock: &C) -> Result<String, VersionError> {
        self.advance(clock, ReleaseKind::Release)
    }

    /// Advances to the next pre-release on the day given by `clock`.
    pub fn pre_release_with<C: Clock>(&mut self, clock: &C) -> Result<String, VersionError> {
        self.advance(clock, ReleaseKind::PreRelease)
    }
}

fn parse_increment(raw: &str) -> Option<u64> {
    // u64::from_str would also take a leading `+`
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

impl Display for Version {
    /// Renders the canonical version string. An unreleased version renders as its format string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.components.is_unreleased() {
            return write!(f, "{}", self.format);
        }

        write!(f, "{}", self.components)?;

        if self.pre {
            write!(f, "-{}", self.modifier)?;
        }

        if self.increment > 0 {
            if self.pre {
                write!(f, ".{}", self.increment)?;
            } else {
                write!(f, "-{}", self.increment)?;
            }
        }

        Ok(())
    }
}

/// Parses `raw` against `format_str` and advances it once on the day given by `clock`.
///
/// ```
/// use calver::prelude::*;
///
/// let today = Date::explicit(2020, 12, 20).unwrap();
/// let kind = ReleaseKind::PreRelease;
/// let next = calver::next_version("2020.12.20-2", "YYYY.MM.DD", "", kind, &today);
/// assert_eq!(Ok("2020.12.20-dev.3".to_string()), next);
/// ```
///
/// # Errors
///
/// See [Version::parse] and [Version::next].
pub fn next_version<C: Clock>(
    raw: &str,
    format_str: &str,
    modifier: &str,
    kind: ReleaseKind,
    clock: &C,
) -> Result<String, VersionError> {
    let mut version = Version::parse(raw, format_str, modifier)?;
    version.advance(clock, kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Segment;
    use rstest::*;

    fn ymd(year: i32, month: u32, day: u32) -> Date {
        Date::explicit(year, month, day).unwrap()
    }

    #[fixture]
    fn today() -> Date {
        ymd(2007, 2, 5)
    }

    /// Release, release, pre-release, release, pre-release, release on a single day.
    #[rstest]
    #[case("YYYY.MM.DD", "", ["2007.2.5", "2007.2.5-1", "2007.2.5-dev.2", "2007.2.5-2", "2007.2.5-dev.3", "2007.2.5-3"])]
    #[case("YY.MM.DD", "", ["7.2.5", "7.2.5-1", "7.2.5-dev.2", "7.2.5-2", "7.2.5-dev.3", "7.2.5-3"])]
    #[case("YY.0M.0D", "", ["7.02.05", "7.02.05-1", "7.02.05-dev.2", "7.02.05-2", "7.02.05-dev.3", "7.02.05-3"])]
    #[case("0Y.MM.DD", "", ["07.2.5", "07.2.5-1", "07.2.5-dev.2", "07.2.5-2", "07.2.5-dev.3", "07.2.5-3"])]
    #[case("0Y.0M.DD", "", ["07.02.5", "07.02.5-1", "07.02.5-dev.2", "07.02.5-2", "07.02.5-dev.3", "07.02.5-3"])]
    #[case("0Y.0M.0D", "", ["07.02.05", "07.02.05-1", "07.02.05-dev.2", "07.02.05-2", "07.02.05-dev.3", "07.02.05-3"])]
    #[case("YY.WW.DD", "", ["7.6.5", "7.6.5-1", "7.6.5-dev.2", "7.6.5-2", "7.6.5-dev.3", "7.6.5-3"])]
    #[case("YY.0W.DD", "", ["7.06.5", "7.06.5-1", "7.06.5-dev.2", "7.06.5-2", "7.06.5-dev.3", "7.06.5-3"])]
    #[case("YY.WW", "", ["7.6", "7.6-1", "7.6-dev.2", "7.6-2", "7.6-dev.3", "7.6-3"])]
    #[case("YY.MM", "", ["7.2", "7.2-1", "7.2-dev.2", "7.2-2", "7.2-dev.3", "7.2-3"])]
    #[case("0Y.0M", "", ["07.02", "07.02-1", "07.02-dev.2", "07.02-2", "07.02-dev.3", "07.02-3"])]
    #[case("WW.DD", "", ["6.5", "6.5-1", "6.5-dev.2", "6.5-2", "6.5-dev.3", "6.5-3"])]
    #[case("0W.0D", "", ["06.05", "06.05-1", "06.05-dev.2", "06.05-2", "06.05-dev.3", "06.05-3"])]
    #[case("YYYY.MM.DD", "alpha", ["2007.2.5", "2007.2.5-1", "2007.2.5-alpha.2", "2007.2.5-2", "2007.2.5-alpha.3", "2007.2.5-3"])]
    fn test_same_day(
        today: Date,
        #[case] format_str: &str,
        #[case] modifier: &str,
        #[case] expected: [&str; 6],
    ) {
        let mut version = Version::new(format_str, modifier).unwrap();
        assert_eq!(format_str, version.to_string());

        let actual = [
            version.release_with(&today).unwrap(),
            version.release_with(&today).unwrap(),
            version.pre_release_with(&today).unwrap(),
            version.release_with(&today).unwrap(),
            version.pre_release_with(&today).unwrap(),
            version.release_with(&today).unwrap(),
        ];
        assert_eq!(expected.map(str::to_string), actual);
        assert_eq!(expected[5], version.to_string());
    }

    /// Every call lands on a different day, so nothing ever gets an increment.
    #[rstest]
    #[case("YYYY.MM.DD", [ymd(2007, 2, 5), ymd(2007, 2, 6), ymd(2007, 2, 7), ymd(2007, 2, 8), ymd(2007, 2, 9), ymd(2007, 2, 10)], ["2007.2.5", "2007.2.6", "2007.2.7-dev", "2007.2.8", "2007.2.9-dev", "2007.2.10"])]
    #[case("YYYY.MM.DD", [ymd(2007, 1, 5), ymd(2007, 2, 5), ymd(2007, 3, 5), ymd(2007, 4, 5), ymd(2007, 5, 5), ymd(2007, 6, 5)], ["2007.1.5", "2007.2.5", "2007.3.5-dev", "2007.4.5", "2007.5.5-dev", "2007.6.5"])]
    #[case("YYYY.MM.DD", [ymd(2007, 2, 5), ymd(2008, 2, 5), ymd(2009, 2, 5), ymd(2010, 2, 5), ymd(2011, 2, 5), ymd(2012, 2, 5)], ["2007.2.5", "2008.2.5", "2009.2.5-dev", "2010.2.5", "2011.2.5-dev", "2012.2.5"])]
    #[case("YYYY.WW", [ymd(2007, 1, 5), ymd(2007, 2, 5), ymd(2007, 3, 5), ymd(2007, 4, 5), ymd(2007, 5, 5), ymd(2007, 6, 5)], ["2007.1", "2007.6", "2007.10-dev", "2007.14", "2007.18-dev", "2007.23"])]
    fn test_different_days(
        #[case] format_str: &str,
        #[case] days: [Date; 6],
        #[case] expected: [&str; 6],
    ) {
        let mut version = Version::new(format_str, "").unwrap();

        let actual = [
            version.release_with(&days[0]).unwrap(),
            version.release_with(&days[1]).unwrap(),
            version.pre_release_with(&days[2]).unwrap(),
            version.release_with(&days[3]).unwrap(),
            version.pre_release_with(&days[4]).unwrap(),
            version.release_with(&days[5]).unwrap(),
        ];
        assert_eq!(expected.map(str::to_string), actual);
    }

    #[rstest]
    fn test_pre_release_chain(today: Date) {
        let expected = [
            "2007.2.5-dev",
            "2007.2.5-dev.1",
            "2007.2.5-dev.2",
            "2007.2.5-dev.3",
            "2007.2.5-dev.4",
        ];

        let mut version = Version::new("YYYY.MM.DD", "").unwrap();
        for expected in expected {
            assert_eq!(expected, version.pre_release_with(&today).unwrap());
        }

        // the same chain, continued from a parsed version
        let mut parsed = Version::parse(expected[0], "YYYY.MM.DD", "").unwrap();
        assert_eq!(expected[0], parsed.to_string());
        for expected in &expected[1..] {
            assert_eq!(*expected, parsed.pre_release_with(&today).unwrap());
        }

        // an older version starts over on today
        let mut older = Version::parse("2007.2.4-dev.4", "YYYY.MM.DD", "").unwrap();
        assert_eq!(expected[0], older.pre_release_with(&today).unwrap());
    }

    #[rstest]
    #[case("2007.1.1", "2007.1.1")]
    #[case("2007.1.1-dev", "2007.1.1-dev")]
    #[case("2007.1.1-1000", "2007.1.1-1000")]
    #[case("2007.1.1-dev.99", "2007.1.1-dev.99")]
    #[case("2007.01.01", "2007.1.1")]
    #[case("2007.1.1-0", "2007.1.1")]
    #[case("2007.1.1-dev.0", "2007.1.1-dev")]
    #[case("2007.1.1-18446744073709551615", "2007.1.1-18446744073709551615")]
    #[case("2007.1.1-dev.18446744073709551615", "2007.1.1-dev.18446744073709551615")]
    fn test_parse(#[case] raw: &str, #[case] expected: &str) {
        let version = Version::parse(raw, "YYYY.MM.DD", "").unwrap();
        assert_eq!(expected, version.to_string());
    }

    #[test]
    fn test_parse_fields() {
        let version = Version::parse("2007.1.1-dev.99", "YYYY.MM.DD", "").unwrap();
        assert_eq!("2007", version.major());
        assert_eq!("1", version.minor());
        assert_eq!("1", version.micro());
        assert_eq!(99, version.increment());
        assert_eq!("dev", version.modifier());
        assert!(version.is_pre_release());
        assert!(version.is_released());
        assert_eq!(Some(ymd(2007, 1, 1)), version.date());

        let version = Version::parse("7.02-3", "YY.0M", "rc").unwrap();
        assert_eq!("", version.micro());
        assert_eq!(3, version.increment());
        assert!(!version.is_pre_release());
        assert_eq!(None, version.date());
    }

    #[test]
    fn test_parse_then_pre_release_same_day() {
        let mut version = Version::parse("2007.1.1-dev.99", "YYYY.MM.DD", "").unwrap();
        assert_eq!("2007.1.1-dev.100", version.pre_release_with(&ymd(2007, 1, 1)).unwrap());
    }

    #[test]
    fn test_parse_then_release_same_day() {
        let today = ymd(2020, 12, 20);

        let mut version = Version::parse("2020.12.20", "YYYY.MM.DD", "").unwrap();
        assert_eq!("2020.12.20-1", version.release_with(&today).unwrap());

        let mut version = Version::parse("2020.12.20-1", "YYYY.MM.DD", "").unwrap();
        assert_eq!("2020.12.20-2", version.release_with(&today).unwrap());

        let mut version = Version::parse("2020.12.20-2", "YYYY.MM.DD", "").unwrap();
        assert_eq!("2020.12.20-dev.3", version.pre_release_with(&today).unwrap());

        // promotion keeps the increment
        let mut version = Version::parse("2020.12.20-dev.3", "YYYY.MM.DD", "").unwrap();
        assert_eq!("2020.12.20-3", version.release_with(&today).unwrap());
    }

    #[test]
    fn test_parse_without_day_starts_over() {
        // YYYY.0W does not pin down a day, so the first transition always re-renders
        let mut version = Version::parse("2019.01", "YYYY.0W", "").unwrap();
        assert_eq!(None, version.date());
        assert_eq!("2020.51", version.release_with(&ymd(2020, 12, 20)).unwrap());
        assert_eq!("2020.51-1", version.release_with(&ymd(2020, 12, 20)).unwrap());

        let mut version = Version::parse("19.01", "YY.MM", "").unwrap();
        assert_eq!("20.12", version.release_with(&ymd(2020, 12, 20)).unwrap());
    }

    #[rstest]
    #[case("2007.1.1-", "YYYY.MM.DD", "")] // empty suffix
    #[case("2007.1.1-x", "YYYY.MM.DD", "")] // neither modifier nor number
    #[case("2007.1.1-+1", "YYYY.MM.DD", "")]
    #[case("2007.1.1-dev.", "YYYY.MM.DD", "")]
    #[case("2007.1.1-dev.x", "YYYY.MM.DD", "")]
    #[case("2007.1.1-devx", "YYYY.MM.DD", "")]
    #[case("2007.1.1-1-2", "YYYY.MM.DD", "")]
    #[case("2007.1.1-18446744073709551616", "YYYY.MM.DD", "")] // past u64
    #[case("2007.1.1-dev.18446744073709551616", "YYYY.MM.DD", "")]
    #[case("2007.1.1-dev.1", "YYYY.MM.DD", "alpha")] // wrong modifier
    #[case("2007.1", "YYYY.MM.DD", "")] // too few components
    #[case("2007.1.1.1", "YYYY.MM.DD", "")] // too many components
    #[case("2007.1.1", "YYYY.MM", "")]
    fn test_parse_format_mismatch(
        #[case] raw: &str,
        #[case] format_str: &str,
        #[case] modifier: &str,
    ) {
        let format = Format::parse(format_str).unwrap().to_string();
        assert_eq!(
            Err(VersionError::FormatMismatch { format }),
            Version::parse(raw, format_str, modifier)
        );
    }

    #[rstest]
    #[case("2007.13.1", Segment::ShortMonth)]
    #[case("2007.1.32", Segment::ShortDay)]
    #[case("07.1.1", Segment::FullYear)]
    #[case("2007.a.1", Segment::ShortMonth)]
    #[case("2007..1", Segment::ShortMonth)]
    fn test_parse_segment_mismatch(#[case] raw: &str, #[case] segment: Segment) {
        assert_eq!(
            Err(VersionError::SegmentMismatch { segment }),
            Version::parse(raw, "YYYY.MM.DD", "")
        );
    }

    #[test]
    fn test_parse_bad_format() {
        assert_eq!(
            Err(VersionError::Format(FormatError::UnknownSegment {
                segment: "XX".to_string()
            })),
            Version::parse("2007.1.1", "YYYY.XX.HH", "")
        );
    }

    #[test]
    fn test_parse_unreleased() {
        let version = Version::parse("YY.0M", "YY.0M", "rc").unwrap();
        assert_eq!(Version::new("YY.0M", "rc").unwrap(), version);
        assert!(!version.is_released());
        assert_eq!("YY.0M", version.to_string());
    }

    #[test]
    fn test_new() {
        let version = Version::new("YYYY.MM.DD", "").unwrap();
        assert_eq!("YYYY.MM.DD", version.to_string());
        assert_eq!(DEFAULT_MODIFIER, version.modifier());
        assert!(!version.is_released());
        assert_eq!(None, version.date());

        assert_eq!(
            Err(FormatError::UnknownSegment {
                segment: "XX".to_string()
            }),
            Version::new("YYYY.XX.HH", "")
        );
    }

    #[rstest]
    fn test_next_is_pure(today: Date) {
        let version = Version::parse("2007.2.5-dev.4", "YYYY.MM.DD", "").unwrap();
        let before = version.clone();

        let next = version.next(&today, ReleaseKind::PreRelease).unwrap();
        assert_eq!(5, next.increment);
        assert_eq!(before, version);

        let next = version.next(&today, ReleaseKind::Release).unwrap();
        assert_eq!(4, next.increment);
        assert_eq!(version.components(), &next.components);
    }

    #[rstest]
    #[case("2007.2.5-18446744073709551615", ReleaseKind::Release)]
    #[case("2007.2.5-18446744073709551615", ReleaseKind::PreRelease)]
    #[case("2007.2.5-dev.18446744073709551615", ReleaseKind::PreRelease)]
    fn test_increment_overflow(today: Date, #[case] raw: &str, #[case] kind: ReleaseKind) {
        let mut version = Version::parse(raw, "YYYY.MM.DD", "").unwrap();
        let before = version.clone();
        let err = VersionError::IncrementOverflow {
            increment: u64::MAX,
        };

        assert_eq!(Err(err.clone()), version.next(&today, kind));
        assert_eq!(Err(err), version.advance(&today, kind));
        assert_eq!(before, version);
    }

    #[rstest]
    fn test_increment_at_max(today: Date) {
        let format_str = "YYYY.MM.DD";

        let mut version = Version::parse("2007.2.5-18446744073709551614", format_str, "").unwrap();
        assert_eq!(
            "2007.2.5-18446744073709551615",
            version.release_with(&today).unwrap()
        );
        assert!(version.release_with(&today).is_err());

        // promotion does not bump, and a new day starts over
        let mut version =
            Version::parse("2007.2.5-dev.18446744073709551615", format_str, "").unwrap();
        assert_eq!(
            "2007.2.5-18446744073709551615",
            version.release_with(&today).unwrap()
        );
        assert_eq!("2007.2.6", version.release_with(&ymd(2007, 2, 6)).unwrap());
    }

    #[rstest]
    fn test_promotion_is_idempotent(today: Date) {
        let mut version = Version::new("YYYY.MM.DD", "").unwrap();
        version.release_with(&today).unwrap();
        version.release_with(&today).unwrap();
        version.pre_release_with(&today).unwrap();
        let pre = version.clone();

        version.release_with(&today).unwrap();
        assert_eq!(pre.components(), version.components());
        assert_eq!(pre.increment(), version.increment());
        assert!(pre.is_pre_release());
        assert!(!version.is_pre_release());
    }

    #[rstest]
    #[case(ReleaseKind::Release)]
    #[case(ReleaseKind::PreRelease)]
    fn test_monotonic_increment(today: Date, #[case] kind: ReleaseKind) {
        let mut version = Version::new("0Y.0M.0D", "").unwrap();
        for n in 0..20u64 {
            version.advance(&today, kind).unwrap();
            assert_eq!(n, version.increment());
        }
    }

    #[rstest]
    fn test_rollover_resets(today: Date) {
        let mut version = Version::parse("2007.2.4-41", "YYYY.MM.DD", "").unwrap();
        assert_eq!(Some(ymd(2007, 2, 4)), version.date());

        assert_eq!("2007.2.5", version.release_with(&today).unwrap());
        assert_eq!(0, version.increment());
        assert_eq!(Some(today), version.date());
    }

    #[test]
    fn test_next_version() {
        let today = ymd(2020, 12, 20);
        let args = [
            ("2020.12.20", "YYYY.MM.DD", ReleaseKind::Release, "2020.12.20-1"),
            ("2020.12.20-1", "YYYY.MM.DD", ReleaseKind::Release, "2020.12.20-2"),
            ("2020.12.20-2", "YYYY.MM.DD", ReleaseKind::PreRelease, "2020.12.20-dev.3"),
            ("2019.01", "YYYY.0W", ReleaseKind::Release, "2020.51"),
            ("19.01", "YY.MM", ReleaseKind::Release, "20.12"),
        ];

        for (raw, format_str, kind, expected) in args {
            assert_eq!(
                Ok(expected.to_string()),
                next_version(raw, format_str, "", kind, &today)
            );
        }
    }
}
