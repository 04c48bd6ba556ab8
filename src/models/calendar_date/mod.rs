// Calendar date model
// Plain calendar dates with no time-of-day or timezone semantics

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Earliest year a picker can navigate to or select.
pub const MIN_YEAR: i32 = 1;
/// Latest year a picker can navigate to or select.
pub const MAX_YEAR: i32 = 9999;

/// Returns true when `year` lies inside `MIN_YEAR..=MAX_YEAR`.
pub fn is_supported_year(year: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

/// An immutable calendar date (year, month, day).
///
/// Months are exposed both zero-based (`month0`, 0 = January) and
/// one-based (`month`), mirroring chrono's `Datelike`.
/// Serialized as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date from a one-based month.
    ///
    /// # Examples
    /// ```
    /// use rust_date_picker::models::calendar_date::CalendarDate;
    ///
    /// let leap_day = CalendarDate::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap_day.month0(), 1);
    /// assert!(CalendarDate::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !is_supported_year(year) {
            return Err(CalendarError::YearOutOfRange(year));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| CalendarError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Create a date from a zero-based month (0 = January).
    pub fn from_ymd0(year: i32, month0: u32, day: u32) -> Result<Self, CalendarError> {
        if month0 > 11 {
            return Err(CalendarError::InvalidMonth(month0));
        }
        Self::from_ymd(year, month0 + 1, day)
    }

    /// Parse an ISO `YYYY-MM-DD` string.
    pub fn parse(input: &str) -> Result<Self, CalendarError> {
        let trimmed = input.trim();
        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map_err(|_| CalendarError::InvalidDate(trimmed.to_string()))?;
        Self::try_from(date)
    }

    /// Wrap a chrono date without the supported-range check.
    ///
    /// Grid cells use this: leading and trailing days of a grid may fall one
    /// month outside the supported range.
    pub(crate) fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Zero-based month (0 = January).
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    /// One-based month (1 = January).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The month as a validated zero-based index.
    pub fn month_index(&self) -> MonthIndex {
        MonthIndex(self.0.month0())
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// True when both dates fall in the same month of the same year.
    pub fn is_same_month(&self, other: &CalendarDate) -> bool {
        self.year() == other.year() && self.month0() == other.month0()
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        if !is_supported_year(date.year()) {
            return Err(CalendarError::YearOutOfRange(date.year()));
        }
        Ok(Self(date))
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A validated zero-based month index (0 = January ... 11 = December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MonthIndex(u32);

impl MonthIndex {
    pub const JANUARY: MonthIndex = MonthIndex(0);
    pub const DECEMBER: MonthIndex = MonthIndex(11);

    pub fn new(month0: u32) -> Result<Self, CalendarError> {
        if month0 > 11 {
            return Err(CalendarError::InvalidMonth(month0));
        }
        Ok(Self(month0))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// All twelve months, January first.
    pub fn all() -> impl Iterator<Item = MonthIndex> {
        (0..12).map(MonthIndex)
    }
}

impl TryFrom<u32> for MonthIndex {
    type Error = CalendarError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MonthIndex> for u32 {
    fn from(month: MonthIndex) -> Self {
        month.0
    }
}
