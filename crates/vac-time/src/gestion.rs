//! `Gestion`, the yearly accrual window, and the resolver that derives the
//! gestión sequence of an employee from the join date.
//!
//! Gestión *k* spans `[join + k years, join + (k+1) years)`.  Each boundary
//! is computed from the join date directly, so a 29 February join date
//! yields 28 February boundaries in non-leap years without drifting.

use serde::{Deserialize, Serialize};
use vac_core::errors::{Error, Result};
use vac_core::Years;

use crate::date::Date;

/// A half-open one-year window `[start_date, end_date)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gestion {
    start_date: Date,
    end_date: Date,
}

impl Gestion {
    /// Create a gestión from its first day and its exclusive end.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] unless `start_date < end_date`.
    pub fn new(start_date: Date, end_date: Date) -> Result<Self> {
        if end_date <= start_date {
            return Err(Error::InvalidRange {
                start: start_date.naive(),
                end: end_date.naive(),
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// First day of the gestión.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Exclusive end of the gestión (the next anniversary).
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Last day belonging to the gestión.
    pub fn last_day(&self) -> Date {
        // end_date > start_date, so the day before always exists
        self.end_date.add_days(-1).unwrap_or(self.start_date)
    }

    /// Return `true` if `date` lies inside the window.
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date < self.end_date
    }

    /// Intersect the inclusive range `[first, last]` with the window.
    ///
    /// Returns `None` when they do not overlap.
    pub fn clip(&self, first: Date, last: Date) -> Option<(Date, Date)> {
        let lo = first.max(self.start_date);
        let hi = last.min(self.last_day());
        (lo <= hi).then_some((lo, hi))
    }

    /// Return `true` if the gestión has not finished at `as_of`.
    pub fn is_open(&self, as_of: Date) -> bool {
        as_of < self.end_date
    }

    /// The inclusive window as a pair, for counting functions.
    pub fn window(&self) -> (Date, Date) {
        (self.start_date, self.last_day())
    }

    /// Label such as `"2020-2021"`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.start_date.year(), self.end_date.year())
    }
}

impl std::fmt::Display for Gestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start_date, self.end_date)
    }
}

/// Derives the gestión sequence of one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestionResolver {
    join_date: Date,
}

impl GestionResolver {
    /// Create a resolver anchored on the employee's join date.
    pub fn new(join_date: Date) -> Self {
        Self { join_date }
    }

    /// The anchor date.
    pub fn join_date(&self) -> Date {
        self.join_date
    }

    /// Return the `k`-th gestión (0-based).
    pub fn nth(&self, k: u32) -> Result<Gestion> {
        let k = i32::try_from(k).map_err(|_| Error::Date(format!("gestión index {k} too large")))?;
        let start = self.join_date.add_years(k)?;
        let end = self.join_date.add_years(k + 1)?;
        Gestion::new(start, end)
    }

    /// Every gestión whose start is strictly before `as_of`, oldest first.
    /// The last one may still be open at `as_of`.
    ///
    /// # Errors
    /// [`Error::InvalidJoinDate`] when the join date is after `as_of`.
    pub fn resolve(&self, as_of: Date) -> Result<Vec<Gestion>> {
        if self.join_date > as_of {
            return Err(Error::InvalidJoinDate {
                join_date: self.join_date.naive(),
                as_of: as_of.naive(),
            });
        }
        let mut gestiones = Vec::new();
        let mut k = 0u32;
        loop {
            let g = self.nth(k)?;
            if g.start_date() >= as_of {
                break;
            }
            gestiones.push(g);
            k += 1;
        }
        Ok(gestiones)
    }

    /// Whole years of seniority at `date`.
    pub fn seniority_at(&self, date: Date) -> Years {
        self.join_date.whole_years_until(date)
    }
}

/// Check that `gestiones` are chronologically ordered, contiguous, and
/// non-overlapping.
///
/// # Errors
/// [`Error::InvalidGestiones`] describing the first offending pair.
pub fn validate_sequence(gestiones: &[Gestion]) -> Result<()> {
    for pair in gestiones.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if next.start_date() < prev.end_date() {
            return Err(Error::InvalidGestiones(format!(
                "{next} starts before {prev} ends"
            )));
        }
        if next.start_date() > prev.end_date() {
            return Err(Error::InvalidGestiones(format!(
                "gap between {prev} and {next}"
            )));
        }
    }
    Ok(())
}
