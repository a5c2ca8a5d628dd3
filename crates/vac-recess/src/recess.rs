//! Recess days per gestión.
//!
//! For each gestión the recess days are the working days (no weekends, no
//! public holidays) of every applicable reconciled period that fall inside
//! the gestión window.  Overlapping periods count each day once.

use std::collections::BTreeSet;

use tracing::{debug, warn};
use vac_core::{DataIssue, Days};
use vac_time::{Calendar, Date, Gestion, HolidayCalendar};

use crate::period::HolidayPeriod;

/// The recess days attributed to one gestión.
#[derive(Debug, Clone, PartialEq)]
pub struct GestionRecess {
    /// The gestión.
    pub gestion: Gestion,
    /// Working days of recess inside the gestión.
    pub dates: BTreeSet<Date>,
    /// Problems found in the periods attributed to this gestión.
    pub issues: Vec<DataIssue>,
}

impl GestionRecess {
    /// A gestión with no recess.
    pub fn empty(gestion: Gestion) -> Self {
        Self {
            gestion,
            dates: BTreeSet::new(),
            issues: Vec::new(),
        }
    }

    /// Number of recess days.
    pub fn days(&self) -> Days {
        self.dates.len() as Days
    }

    /// Return `true` if any issue invalidates the figure.
    pub fn is_blocked(&self) -> bool {
        self.issues.iter().any(|i| i.blocking)
    }

    /// The recess days as a calendar, to exclude them from other counts.
    pub fn as_calendar(&self) -> HolidayCalendar {
        let name = format!("Receso {}", self.gestion.label());
        HolidayCalendar::from_dates(name, self.dates.iter().copied())
    }
}

/// Attribute the recess days of `periods` to each of `gestiones`.
///
/// Only periods valid for an employee who joined in `join_year` are used.
/// A period with a reversed range contributes no days and adds a blocking
/// issue to the gestión containing its start date.
pub fn recess_by_gestion(
    gestiones: &[Gestion],
    periods: &[HolidayPeriod],
    join_year: i32,
    public_holidays: &dyn Calendar,
) -> Vec<GestionRecess> {
    let applicable: Vec<&HolidayPeriod> =
        periods.iter().filter(|p| p.is_valid_for(join_year)).collect();

    for period in &applicable {
        if period.validate().is_err() && !gestiones.iter().any(|g| g.contains(period.start_date)) {
            warn!(period = %period, "invalid holiday period outside every gestión ignored");
        }
    }

    gestiones
        .iter()
        .map(|gestion| {
            let mut recess = GestionRecess::empty(*gestion);
            for period in &applicable {
                if let Err(err) = period.validate() {
                    if gestion.contains(period.start_date) {
                        warn!(period = %period, gestion = %gestion, "invalid holiday period");
                        recess
                            .issues
                            .push(DataIssue::from_error(&err, &format!("holiday period {period}")));
                    }
                    continue;
                }
                if let Some((first, last)) = gestion.clip(period.start_date, period.end_date) {
                    recess.dates.extend(
                        first
                            .iter_through(last)
                            .filter(|d| public_holidays.is_business_day(*d)),
                    );
                }
            }
            debug!(gestion = %gestion, days = recess.days(), "recess days attributed");
            recess
        })
        .collect()
}
