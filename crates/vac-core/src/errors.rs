//! Error types for vacaciones-rs.
//!
//! All fallible operations in the workspace return [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below.

use chrono::NaiveDate;
use thiserror::Error;

use crate::Days;

/// The top-level error type used throughout vacaciones-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A date range whose end precedes its start.
    #[error("invalid range: end {end} is before start {start}")]
    InvalidRange {
        /// First day of the range.
        start: NaiveDate,
        /// Last day of the range.
        end: NaiveDate,
    },

    /// The employee's join date lies after the evaluation date.
    #[error("invalid join date: {join_date} is after {as_of}")]
    InvalidJoinDate {
        /// Join date of the employee.
        join_date: NaiveDate,
        /// Evaluation date.
        as_of: NaiveDate,
    },

    /// A stored day count disagrees with the recomputed business-day count.
    #[error("data inconsistency: stored {stored} days, computed {computed}")]
    DataInconsistency {
        /// The `totalDays` figure carried by the record.
        stored: Days,
        /// The business-day count recomputed by the engine.
        computed: Days,
    },

    /// The entitlement policy is malformed.
    #[error("entitlement policy error: {0}")]
    Policy(String),

    /// The gestión sequence is unsorted, overlapping, or has gaps.
    #[error("invalid gestión sequence: {0}")]
    InvalidGestiones(String),

    /// Date construction, parsing, or arithmetic error.
    #[error("date error: {0}")]
    Date(String),

    /// A same-day half-day request on a weekend, when the settings reject
    /// them.
    #[error("half-day request on {date} falls on a weekend")]
    HalfDayOnWeekend {
        /// The requested day.
        date: NaiveDate,
    },
}

impl Error {
    /// Return `true` for errors that describe bad input data on a single
    /// record rather than a broken configuration.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidRange { .. }
                | Error::HalfDayOnWeekend { .. }
                | Error::DataInconsistency { .. }
                | Error::Date(_)
        )
    }
}

/// Shorthand `Result` type used throughout vacaciones-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_message_names_both_ends() {
        let err = Error::InvalidRange {
            start: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2024-03-01"));
        assert!(msg.contains("2024-03-10"));
        assert!(err.is_data_error());
    }

    #[test]
    fn weekend_half_day_message_names_the_day() {
        let err = Error::HalfDayOnWeekend {
            date: NaiveDate::from_ymd_opt(2024, 3, 17).unwrap(),
        };
        assert_eq!(err.to_string(), "half-day request on 2024-03-17 falls on a weekend");
        assert!(err.is_data_error());
    }

    #[test]
    fn policy_errors_are_not_data_errors() {
        assert!(!Error::Policy("empty table".into()).is_data_error());
        assert!(!Error::InvalidGestiones("gap".into()).is_data_error());
    }
}
