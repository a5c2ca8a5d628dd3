//! Per-record data problems.
//!
//! A [`DataIssue`] records bad input found while settling a gestión.  Unlike
//! an [`Error`], an issue does not stop the computation: it travels with the
//! result so callers can tell a genuine zero from a zero caused by bad data.

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Category of a [`DataIssue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    /// A record whose dates cannot be counted: end before start, or a
    /// rejected weekend half day.
    InvalidRange,
    /// A stored day count that disagrees with the recomputed one.
    DataInconsistency,
    /// Input expected for a gestión was not supplied.
    MissingData,
}

/// A data problem attached to one gestión's settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataIssue {
    /// What went wrong.
    pub kind: IssueKind,
    /// Human-readable description, naming the offending record.
    pub message: String,
    /// Whether the issue invalidates the gestión's figures.
    pub blocking: bool,
}

impl DataIssue {
    /// A blocking issue.
    pub fn blocking(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            blocking: true,
        }
    }

    /// A non-blocking issue.
    pub fn warning(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            blocking: false,
        }
    }

    /// Build an issue from a data error, prefixing `context`.
    ///
    /// Inconsistencies are warnings; every other error blocks.
    pub fn from_error(err: &Error, context: &str) -> Self {
        let message = format!("{context}: {err}");
        match err {
            Error::DataInconsistency { .. } => Self::warning(IssueKind::DataInconsistency, message),
            Error::InvalidRange { .. } | Error::HalfDayOnWeekend { .. } => {
                Self::blocking(IssueKind::InvalidRange, message)
            }
            _ => Self::blocking(IssueKind::MissingData, message),
        }
    }
}

impl std::fmt::Display for DataIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inconsistency_is_a_warning() {
        let err = Error::DataInconsistency {
            stored: 3.0,
            computed: 2.5,
        };
        let issue = DataIssue::from_error(&err, "license 7");
        assert_eq!(issue.kind, IssueKind::DataInconsistency);
        assert!(!issue.blocking);
        assert!(issue.message.starts_with("license 7: "));
    }

    #[test]
    fn weekend_half_day_blocks_as_invalid_range() {
        let err = Error::HalfDayOnWeekend {
            date: chrono::NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
        };
        let issue = DataIssue::from_error(&err, "license 9");
        assert_eq!(issue.kind, IssueKind::InvalidRange);
        assert!(issue.blocking);
    }

    #[test]
    fn serde_shape() {
        let issue = DataIssue::blocking(IssueKind::InvalidRange, "x");
        let json = serde_json::to_string(&issue).unwrap();
        assert_eq!(json, r#"{"kind":"INVALID_RANGE","message":"x","blocking":true}"#);
    }
}
