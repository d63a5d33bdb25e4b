//! The seven Discord timestamp styles.
//!
//! Discord renders `<t:epoch:code>` according to a single-letter style code.
//! The order of [`TimestampStyle::ALL`] is the order suggestions are
//! presented in.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A Discord timestamp rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampStyle {
    /// `R` - relative, e.g. "in 5 minutes"
    Relative,
    /// `t` - short time, e.g. "5:45 PM"
    ShortTime,
    /// `T` - long time, e.g. "5:45:30 PM"
    LongTime,
    /// `d` - short date, e.g. "8/6/2026"
    ShortDate,
    /// `D` - long date, e.g. "August 6, 2026"
    LongDate,
    /// `f` - long date with short time, e.g. "August 6, 2026 5:45 PM"
    LongDateShortTime,
    /// `F` - long date with day of the week, e.g. "Wednesday, August 6, 2026 5:45 PM"
    LongDateWeekday,
}

impl TimestampStyle {
    /// All styles, in presentation order.
    pub const ALL: [TimestampStyle; 7] = [
        TimestampStyle::Relative,
        TimestampStyle::ShortTime,
        TimestampStyle::LongTime,
        TimestampStyle::ShortDate,
        TimestampStyle::LongDate,
        TimestampStyle::LongDateShortTime,
        TimestampStyle::LongDateWeekday,
    ];

    /// The single-letter code Discord uses in the markup (case-sensitive).
    #[must_use]
    pub fn code(&self) -> char {
        match self {
            Self::Relative => 'R',
            Self::ShortTime => 't',
            Self::LongTime => 'T',
            Self::ShortDate => 'd',
            Self::LongDate => 'D',
            Self::LongDateShortTime => 'f',
            Self::LongDateWeekday => 'F',
        }
    }

    /// Display label for this style.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Relative => "Relative",
            Self::ShortTime => "Short time",
            Self::LongTime => "Long time",
            Self::ShortDate => "Short date",
            Self::LongDate => "Long date",
            Self::LongDateShortTime => "Long date with short time",
            Self::LongDateWeekday => "Long date with day of the week",
        }
    }

    /// Build the markup payload for this style.
    #[must_use]
    pub fn markup(&self, epoch: i64) -> String {
        format!("<t:{}:{}>", epoch, self.code())
    }
}

impl fmt::Display for TimestampStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned when a style name or code is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown timestamp style '{0}' (expected one of R, t, T, d, D, f, F or a style name)")]
pub struct ParseStyleError(pub String);

impl FromStr for TimestampStyle {
    type Err = ParseStyleError;

    /// Accepts the code letter (case-sensitive, since `t`/`T` and `d`/`D`
    /// and `f`/`F` differ) or a forgiving kebab/space name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => return Ok(Self::Relative),
            "t" => return Ok(Self::ShortTime),
            "T" => return Ok(Self::LongTime),
            "d" => return Ok(Self::ShortDate),
            "D" => return Ok(Self::LongDate),
            "f" => return Ok(Self::LongDateShortTime),
            "F" => return Ok(Self::LongDateWeekday),
            _ => {}
        }

        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "relative" => Ok(Self::Relative),
            "short-time" => Ok(Self::ShortTime),
            "long-time" => Ok(Self::LongTime),
            "short-date" => Ok(Self::ShortDate),
            "long-date" => Ok(Self::LongDate),
            "short-datetime" | "long-date-with-short-time" => Ok(Self::LongDateShortTime),
            "long-datetime" | "long-date-with-day-of-the-week" => Ok(Self::LongDateWeekday),
            _ => Err(ParseStyleError(s.to_string())),
        }
    }
}
