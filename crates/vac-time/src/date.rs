//! `Date` type.
//!
//! A thin calendar-date wrapper over [`chrono::NaiveDate`] exposing the
//! operations the engine needs: weekday tests, day and year arithmetic with
//! anniversary clamping, seniority in whole years, and inclusive day
//! iteration.
//!
//! # Text format
//! Dates parse from and display as ISO 8601 (`YYYY-MM-DD`), which is also
//! their `serde` representation.

use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use vac_core::errors::{Error, Result};
use vac_core::Years;

/// A calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| {
                Error::Date(format!("{year:04}-{month:02}-{day:02} is not a valid date"))
            })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the underlying `chrono` date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u32 {
        self.0.day()
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Return `true` on Saturdays and Sundays.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i64) -> Result<Self> {
        self.0
            .checked_add_signed(Duration::days(n))
            .map(Date)
            .ok_or_else(|| Error::Date(format!("{self} + {n} days is out of range")))
    }

    /// Advance by `n` years, keeping month and day.
    ///
    /// A 29 February anniversary falls on 28 February in non-leap years.
    pub fn add_years(self, n: i32) -> Result<Self> {
        let year = self.year() + n;
        let (month, day) = (self.month(), self.day_of_month());
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, day - 1))
            .map(Date)
            .ok_or_else(|| Error::Date(format!("{self} + {n} years is out of range")))
    }

    /// Return the number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_until(self, other: Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Number of whole anniversaries of `self` reached on or before `at`.
    ///
    /// Returns 0 when `at` precedes `self`.
    pub fn whole_years_until(self, at: Date) -> Years {
        if at <= self {
            return 0;
        }
        let mut years = at.year() - self.year();
        while years > 0 {
            match self.add_years(years) {
                Ok(anniversary) if anniversary <= at => break,
                _ => years -= 1,
            }
        }
        years.max(0) as Years
    }

    /// Iterate over every day from `self` to `last`, both inclusive.
    ///
    /// Empty when `last < self`.
    pub fn iter_through(self, last: Date) -> impl Iterator<Item = Date> {
        self.0
            .iter_days()
            .take_while(move |d| *d <= last.0)
            .map(Date)
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

impl From<Date> for NaiveDate {
    fn from(d: Date) -> Self {
        d.0
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| Error::Date(format!("cannot parse {s:?}: {e}")))
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> i64 {
        rhs.days_until(self)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
