//! # calver
//!
//! A library for generating and bumping calendar versions ([CalVer](https://calver.org/)).
//!
//! A version is made of two or three date-derived components (year, month, ISO week or day) taken
//! from the day it was released on, an optional build increment for releasing more than once on
//! the same day, and an optional pre-release modifier.
//!
//! ## Examples
//!
//! Quickly get a next version:
//!
//! ```
//! use calver::prelude::*;
//!
//! let today = Date::explicit(2020, 12, 20).unwrap();
//!
//! let next = calver::next_version(
//!   "2020.12.20-1",       // current version string
//!   "YYYY.MM.DD",         // format string
//!   "",                   // pre-release modifier, defaults to `dev`
//!   ReleaseKind::Release, // release or pre-release
//!   &today,               // the clock to read today from, or `LocalClock`/`UtcClock`
//! ).unwrap();
//! assert_eq!(next, "2020.12.20-2");
//! ```
//!
//! Or, keep a [`Version`] around and advance it repeatedly:
//!
//! ```
//! use calver::prelude::*;
//!
//! let today = Date::explicit(2007, 2, 5).unwrap();
//! let mut version = Version::new("YY.0M.0D", "rc").unwrap();
//! assert_eq!("7.02.05", version.release_with(&today).unwrap());
//! assert_eq!("7.02.05-rc.1", version.pre_release_with(&today).unwrap());
//! assert_eq!("7.02.05-1", version.release_with(&today).unwrap());
//! ```
//!
//! ## Version strings
//!
//! ```text
//! 2020.12.20          first release of the day
//! 2020.12.20-1        second release of the day
//! 2020.12.20-dev.2    a pre-release on the same day
//! 2020.12.20-dev      a pre-release that was the first version of the day
//! ```
//!
//! Promoting a pre-release to a release on the same day keeps its increment: after
//! `2020.12.20-dev.2`, the next release is `2020.12.20-2`. On a new day, the components are
//! rendered from the new date and the increment starts over.
//!
//! A version that has never been released renders as its format string, e.g. `YYYY.MM.DD`.
//!
//! ## Segments
//!
//! Formats are two or three segments separated by dots: `major.minor[.micro]`.
//!
//! In the "Example" column below, we reference a date of `2007-02-05` (in ISO week 6).
//!
//! | Segment | Example | Description |
//! |---|---|---|
//! | `YYYY` | `2007` | Full year, zero-padded to 4 digits. |
//! | `YY` | `7` | The last two digits of the year, without a leading zero. |
//! | `0Y` | `07` | The last two digits of the year, zero-padded to 2 digits. |
//! | `MM` | `2` | Month (`1`-`12`). |
//! | `0M` | `02` | Month, zero-padded to 2 digits. |
//! | `WW` | `6` | ISO-8601 week of the year (`1`-`53`). |
//! | `0W` | `06` | ISO week, zero-padded to 2 digits. |
//! | `DD` | `5` | Day of the month (`1`-`31`). |
//! | `0D` | `05` | Day of the month, zero-padded to 2 digits. |
//!
//! When parsing, short segments also accept a redundant leading zero and drop it, so `2007.02.5`
//! parses as `2007.2.5` under `YYYY.MM.DD`.
//!
//! ## Prelude
//!
//! calver provides a prelude module for convenience. It contains everything needed to interact
//! with the library.
//!
//! Use it with:
//!
//! ```
//! use calver::prelude::*;
//! ```
#![warn(missing_docs)]

mod date;
mod error;
mod format;
mod segment;
mod version;

pub use crate::date::{Clock, Date, LocalClock, UtcClock};
pub use crate::error::{DateError, FormatError, VersionError};
pub use crate::format::{Components, Format};
pub use crate::segment::Segment;
pub use crate::version::{next_version, Next, ReleaseKind, Version, DEFAULT_MODIFIER};

/// A convenience module appropriate for glob imports (`use calver::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::Clock;
    #[doc(no_inline)]
    pub use crate::Components;
    #[doc(no_inline)]
    pub use crate::Date;
    #[doc(no_inline)]
    pub use crate::DateError;
    #[doc(no_inline)]
    pub use crate::Format;
    #[doc(no_inline)]
    pub use crate::FormatError;
    #[doc(no_inline)]
    pub use crate::LocalClock;
    #[doc(no_inline)]
    pub use crate::ReleaseKind;
    #[doc(no_inline)]
    pub use crate::Segment;
    #[doc(no_inline)]
    pub use crate::UtcClock;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionError;
}
