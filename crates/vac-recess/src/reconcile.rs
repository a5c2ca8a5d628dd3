//! Merge of institution-wide holiday periods with personalized overrides.
//!
//! [`reconcile`] is a pure function of its two input lists.  The result has
//! at most one period per `(name, year)`, personalized periods replace the
//! base period they share a key with, and the order is always year
//! descending then name ascending, regardless of input order.

use std::cmp::Reverse;

use tracing::warn;

use crate::period::HolidayPeriod;

/// Merge `base` with `personalized`.
///
/// * The first base period per key is kept; later duplicates are dropped.
/// * Each personalized period (tagged `is_personalized = true`) replaces the
///   period with the same key in place, or is appended.  When several
///   personalized periods share a key the last one wins.
///
/// Reconciling an already reconciled list with no overrides returns it
/// unchanged.
///
/// # Example
/// ```
/// use vac_recess::{reconcile, HolidayPeriod, RecessName};
/// use vac_time::Date;
///
/// let d = |m, day| Date::from_ymd(2024, m, day).unwrap();
/// let base = [HolidayPeriod::base(RecessName::Invierno, 2024, d(7, 1), d(7, 12))];
/// let own = [HolidayPeriod::personalized(RecessName::Invierno, 2024, d(7, 8), d(7, 19))];
/// let merged = reconcile(&base, &own);
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].start_date, d(7, 8));
/// ```
pub fn reconcile(base: &[HolidayPeriod], personalized: &[HolidayPeriod]) -> Vec<HolidayPeriod> {
    let mut merged: Vec<HolidayPeriod> = Vec::with_capacity(base.len() + personalized.len());

    for period in base {
        if merged.iter().any(|p| p.key() == period.key()) {
            warn!(period = %period, "duplicate base holiday period dropped");
            continue;
        }
        merged.push(period.clone());
    }

    for period in personalized {
        let own = HolidayPeriod {
            is_personalized: true,
            ..period.clone()
        };
        match merged.iter_mut().find(|p| p.key() == own.key()) {
            Some(slot) => *slot = own,
            None => merged.push(own),
        }
    }

    merged.sort_by_key(|p| (Reverse(p.year), p.name));
    merged
}

/// Keep the periods an employee who joined in `join_year` can benefit from.
pub fn valid_for_employee(periods: &[HolidayPeriod], join_year: i32) -> Vec<HolidayPeriod> {
    periods
        .iter()
        .filter(|p| p.is_valid_for(join_year))
        .cloned()
        .collect()
}
