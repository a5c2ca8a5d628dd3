//! Consumption events: licenses (permits) and vacation requests.
//!
//! Both kinds draw from the same day balance.  Only events approved by both
//! the supervisor and human resources are consumed.

use serde::{Deserialize, Serialize};
use vac_core::Days;
use vac_time::{Date, DaySpan, HalfDay, TimeRequested};

/// Outcome of the two approvals of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorizationStatus {
    /// Both approvers said yes.
    Authorized,
    /// At least one approver said no.
    Rejected,
    /// No rejection yet, but at least one approval is missing.
    Pending,
}

/// The two tri-state approvals (`Some(true)`, `Some(false)`, `None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Authorization {
    /// Supervisor's decision.
    pub supervisor: Option<bool>,
    /// Human resources' decision.
    pub human_resources: Option<bool>,
}

impl Authorization {
    /// Both approvals granted.
    pub fn approved() -> Self {
        Self {
            supervisor: Some(true),
            human_resources: Some(true),
        }
    }

    /// Combined status.
    pub fn status(&self) -> AuthorizationStatus {
        match (self.supervisor, self.human_resources) {
            (Some(false), _) | (_, Some(false)) => AuthorizationStatus::Rejected,
            (Some(true), Some(true)) => AuthorizationStatus::Authorized,
            _ => AuthorizationStatus::Pending,
        }
    }

    /// Return `true` only when both approvers said yes.
    pub fn is_authorized(&self) -> bool {
        self.status() == AuthorizationStatus::Authorized
    }
}

/// Which balance-consuming record an event is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsumptionKind {
    /// A vacation request.
    Vacation,
    /// A license / permit.
    License,
}

impl std::fmt::Display for ConsumptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsumptionKind::Vacation => write!(f, "vacation request"),
            ConsumptionKind::License => write!(f, "license"),
        }
    }
}

/// A record that consumes vacation days.
pub trait ConsumptionEvent {
    /// Record kind.
    fn kind(&self) -> ConsumptionKind;

    /// Backend identifier, if any.
    fn id(&self) -> Option<i64>;

    /// Dates and half-day markers.
    fn span(&self) -> DaySpan;

    /// Approvals.
    fn authorization(&self) -> Authorization;

    /// The `totalDays` figure stored with the record.
    fn stored_total_days(&self) -> Option<Days>;

    /// Return `true` if the event counts as consumption.
    fn is_authorized(&self) -> bool {
        self.authorization().is_authorized()
    }

    /// Short description for logs and issues.
    fn describe(&self) -> String {
        let span = self.span();
        match self.id() {
            Some(id) => format!("{} {id} [{} .. {}]", self.kind(), span.start, span.end),
            None => format!("{} [{} .. {}]", self.kind(), span.start, span.end),
        }
    }
}

/// A license (permit) request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    /// Backend identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Free-form license type label.
    #[serde(default)]
    pub license_type: String,
    /// Full day(s) or a single half day.
    #[serde(default)]
    pub time_requested: TimeRequested,
    /// First day, inclusive.
    pub start_date: Date,
    /// Last day, inclusive.
    pub end_date: Date,
    /// Marker on the first day.
    #[serde(default)]
    pub start_half_day: HalfDay,
    /// Marker on the last day.
    #[serde(default)]
    pub end_half_day: HalfDay,
    /// Stored day count.
    #[serde(default)]
    pub total_days: Option<Days>,
    /// Supervisor's decision.
    #[serde(default)]
    pub approved_by_supervisor: Option<bool>,
    /// Human resources' decision.
    #[serde(default, rename = "approvedByHR")]
    pub approved_by_hr: Option<bool>,
}

impl License {
    /// An authorized full-day license over `[start, end]`.
    pub fn authorized(start_date: Date, end_date: Date) -> Self {
        Self {
            id: None,
            license_type: String::new(),
            time_requested: TimeRequested::FullDay,
            start_date,
            end_date,
            start_half_day: HalfDay::Full,
            end_half_day: HalfDay::Full,
            total_days: None,
            approved_by_supervisor: Some(true),
            approved_by_hr: Some(true),
        }
    }
}

impl ConsumptionEvent for License {
    fn kind(&self) -> ConsumptionKind {
        ConsumptionKind::License
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn span(&self) -> DaySpan {
        DaySpan {
            start: self.start_date,
            end: self.end_date,
            start_half: self.start_half_day,
            end_half: self.end_half_day,
            time_requested: self.time_requested,
        }
    }

    fn authorization(&self) -> Authorization {
        Authorization {
            supervisor: self.approved_by_supervisor,
            human_resources: self.approved_by_hr,
        }
    }

    fn stored_total_days(&self) -> Option<Days> {
        self.total_days
    }
}

/// A vacation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationRequest {
    /// Backend identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// First day, inclusive.
    pub start_date: Date,
    /// Last day, inclusive.
    pub end_date: Date,
    /// Marker on the first day.
    #[serde(default)]
    pub start_half_day: HalfDay,
    /// Marker on the last day.
    #[serde(default)]
    pub end_half_day: HalfDay,
    /// Stored day count.
    #[serde(default)]
    pub total_days: Option<Days>,
    /// Supervisor's decision.
    #[serde(default)]
    pub approved_by_supervisor: Option<bool>,
    /// Human resources' decision.
    #[serde(default, rename = "approvedByHR")]
    pub approved_by_hr: Option<bool>,
}

impl VacationRequest {
    /// An authorized full-day vacation over `[start, end]`.
    pub fn authorized(start_date: Date, end_date: Date) -> Self {
        Self {
            id: None,
            start_date,
            end_date,
            start_half_day: HalfDay::Full,
            end_half_day: HalfDay::Full,
            total_days: None,
            approved_by_supervisor: Some(true),
            approved_by_hr: Some(true),
        }
    }
}

impl ConsumptionEvent for VacationRequest {
    fn kind(&self) -> ConsumptionKind {
        ConsumptionKind::Vacation
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn span(&self) -> DaySpan {
        DaySpan {
            start: self.start_date,
            end: self.end_date,
            start_half: self.start_half_day,
            end_half: self.end_half_day,
            time_requested: TimeRequested::FullDay,
        }
    }

    fn authorization(&self) -> Authorization {
        Authorization {
            supervisor: self.approved_by_supervisor,
            human_resources: self.approved_by_hr,
        }
    }

    fn stored_total_days(&self) -> Option<Days> {
        self.total_days
    }
}
