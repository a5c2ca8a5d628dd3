//! Engine settings.
//!
//! [`Settings`] holds the **evaluation date** (the `asOf` date all balances
//! are computed at) together with the few tunable policies of the engine.
//! It is a plain value passed explicitly to every computation, so two
//! reports built with different settings never interfere with each other.
//!
//! Settings deserialize from any `serde` format; every field is optional and
//! falls back to [`Settings::default`].

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::Days;

/// How a same-day half-day request falling on a weekend is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HalfDayWeekendPolicy {
    /// Count it as 0.5 days like any other half-day request.
    #[default]
    Allow,
    /// Reject it with an invalid-range error.
    Reject,
}

/// How a gestión's over-consumption is turned into debt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtPolicy {
    /// The carried debt is netted against the gestión's balance; any negative
    /// remainder becomes the gestión's debt.
    #[default]
    Pooled,
    /// The gestión's debt is only its own consumption above entitlement; the
    /// carried debt reduces the available days but is not charged again.
    PerGestion,
}

/// Settings for one engine run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The date balances are computed at. `None` means today (local time).
    pub evaluation_date: Option<NaiveDate>,
    /// Largest tolerated difference between a stored `totalDays` and the
    /// recomputed count before a data inconsistency is reported.
    pub inconsistency_tolerance: Days,
    /// Treatment of half-day requests on weekends.
    pub half_day_on_weekend: HalfDayWeekendPolicy,
    /// Carry-forward rule.
    pub debt_policy: DebtPolicy,
    /// Skip recess days when counting vacation and license days, so a day
    /// is never consumed twice.
    pub exclude_recess_from_requests: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            evaluation_date: None,
            inconsistency_tolerance: 0.01,
            half_day_on_weekend: HalfDayWeekendPolicy::Allow,
            debt_policy: DebtPolicy::Pooled,
            exclude_recess_from_requests: true,
        }
    }
}

impl Settings {
    /// Return the evaluation date, or today's local date if none is set.
    pub fn evaluation_date_or_today(&self) -> NaiveDate {
        self.evaluation_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Set the evaluation date.
    pub fn with_evaluation_date(mut self, date: NaiveDate) -> Self {
        self.evaluation_date = Some(date);
        self
    }

    /// Set the inconsistency tolerance.
    pub fn with_inconsistency_tolerance(mut self, tolerance: Days) -> Self {
        self.inconsistency_tolerance = tolerance;
        self
    }

    /// Set the weekend half-day policy.
    pub fn with_half_day_on_weekend(mut self, policy: HalfDayWeekendPolicy) -> Self {
        self.half_day_on_weekend = policy;
        self
    }

    /// Set the carry-forward rule.
    pub fn with_debt_policy(mut self, policy: DebtPolicy) -> Self {
        self.debt_policy = policy;
        self
    }

    /// Choose whether recess days are skipped inside vacation/license ranges.
    pub fn with_recess_exclusion(mut self, exclude: bool) -> Self {
        self.exclude_recess_from_requests = exclude;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.evaluation_date, None);
        assert_eq!(s.debt_policy, DebtPolicy::Pooled);
        assert_eq!(s.half_day_on_weekend, HalfDayWeekendPolicy::Allow);
        assert!(s.exclude_recess_from_requests);
    }

    #[test]
    fn explicit_evaluation_date_wins() {
        let d = NaiveDate::from_ymd_opt(2023, 3, 15).unwrap();
        let s = Settings::default().with_evaluation_date(d);
        assert_eq!(s.evaluation_date_or_today(), d);
    }

    #[test]
    fn deserialize_partial() {
        let s: Settings = serde_json::from_str(
            r#"{"evaluation_date":"2024-01-31","debt_policy":"per_gestion"}"#,
        )
        .unwrap();
        assert_eq!(s.evaluation_date, NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(s.debt_policy, DebtPolicy::PerGestion);
        assert_eq!(s.half_day_on_weekend, HalfDayWeekendPolicy::Allow);
        assert!((s.inconsistency_tolerance - 0.01).abs() < f64::EPSILON);
    }
}
