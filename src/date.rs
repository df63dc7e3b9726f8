use core::{
    fmt::{self, Display},
    ops::Deref,
    str::FromStr,
};

use chrono::{Local, NaiveDate, Utc};

use crate::error::DateError;

/// A calendar day that versions are computed against.
///
/// Dates carry no time of day, so two instants on the same day always compare equal.
///
/// ```
/// use calver::Date;
///
/// let explicit = Date::explicit(2021, 2, 3).unwrap();
/// let parsed: Date = "2021-02-03".parse().unwrap();
/// assert_eq!(explicit, parsed);
///
/// let utc_now = Date::utc_now();
/// let local_now = Date::local_now();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Returns a new [Date] representing the current date in UTC at the time of this call.
    pub fn utc_now() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Returns a new [Date] representing the current date in the system's local timezone at the
    /// time of this call.
    pub fn local_now() -> Self {
        Self(Local::now().date_naive())
    }

    /// Returns result of a new [Date] representing the given date, or
    /// [DateError::InvalidDateArguments].
    pub fn explicit(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::InvalidDateArguments { year, month, day })
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date string into a [Date]. The string must be in the format `YYYY-MM-DD`.
    ///
    /// See [NaiveDate::from_str].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(NaiveDate::from_str(s)?))
    }
}

impl Deref for Date {
    type Target = NaiveDate;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A source of "today". Transitions read it once per call and never cache the result.
///
/// A [Date] is itself a clock that is stuck on that day, which is what tests and explicit
/// `--date` overrides use.
pub trait Clock {
    /// Returns the current calendar day.
    fn today(&self) -> Date;
}

/// The wall clock in the system's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> Date {
        Date::local_now()
    }
}

/// The wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcClock;

impl Clock for UtcClock {
    fn today(&self) -> Date {
        Date::utc_now()
    }
}

impl Clock for Date {
    fn today(&self) -> Date {
        *self
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Date {
        (**self).today()
    }
}
