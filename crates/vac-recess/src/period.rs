//! `HolidayPeriod`: a named multi-day recess.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use vac_core::errors::{Error, Result};
use vac_time::{Calendar, Date};

/// Name of a recess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecessName {
    /// Winter break.
    #[serde(rename = "INVIERNO")]
    Invierno,
    /// End-of-year break.
    #[serde(rename = "FINDEGESTION")]
    FinDeGestion,
}

impl RecessName {
    /// The label used by the REST API.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecessName::Invierno => "INVIERNO",
            RecessName::FinDeGestion => "FINDEGESTION",
        }
    }
}

// Ordered by label, which is how reconciled lists are sorted.
impl Ord for RecessName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for RecessName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for RecessName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employee category; selects the base period set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmployeeCategory {
    /// Teaching staff, on the "general" periods.
    Docente,
    /// Administrative staff, on the "administrative" periods.
    Administrativo,
}

/// A recess with its year and inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayPeriod {
    /// Backend identifier, when the period is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Recess name.
    pub name: RecessName,
    /// Year the recess belongs to.
    pub year: i32,
    /// First day, inclusive.
    pub start_date: Date,
    /// Last day, inclusive.
    pub end_date: Date,
    /// `true` for an employee-specific override.
    #[serde(default)]
    pub is_personalized: bool,
}

impl HolidayPeriod {
    /// A base (institution-wide) period.
    pub fn base(name: RecessName, year: i32, start_date: Date, end_date: Date) -> Self {
        Self {
            id: None,
            name,
            year,
            start_date,
            end_date,
            is_personalized: false,
        }
    }

    /// An employee-specific period.
    pub fn personalized(name: RecessName, year: i32, start_date: Date, end_date: Date) -> Self {
        Self {
            is_personalized: true,
            ..Self::base(name, year, start_date, end_date)
        }
    }

    /// The `(name, year)` key; unique within a reconciled set.
    pub fn key(&self) -> (RecessName, i32) {
        (self.name, self.year)
    }

    /// Whether the period applies to an employee who joined in `join_year`.
    ///
    /// Personalized periods always apply; base periods only from the join
    /// year on.
    pub fn is_valid_for(&self, join_year: i32) -> bool {
        self.is_personalized || self.year >= join_year
    }

    /// Check that the range is not reversed.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] when `end_date < start_date`.
    pub fn validate(&self) -> Result<()> {
        if self.end_date < self.start_date {
            return Err(Error::InvalidRange {
                start: self.start_date.naive(),
                end: self.end_date.naive(),
            });
        }
        Ok(())
    }

    /// Working days in the period under `calendar`.
    pub fn business_days(&self, calendar: &dyn Calendar) -> Result<u32> {
        calendar.business_days_between(self.start_date, self.end_date)
    }
}

impl std::fmt::Display for HolidayPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} [{} .. {}]{}",
            self.name,
            self.year,
            self.start_date,
            self.end_date,
            if self.is_personalized { " (personalizado)" } else { "" }
        )
    }
}
