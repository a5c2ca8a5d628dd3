//! # vac-time
//!
//! Date, calendar, business-day counting, and gestión types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day counting and half-day rules.
pub mod business_days;

/// Calendar trait and built-in implementations.
pub mod calendar;

/// `Date` type.
pub mod date;

/// `Gestion`, the yearly accrual window, and its resolver.
pub mod gestion;

/// `HolidayCalendar`: a calendar with an explicit holiday set.
pub mod holiday_calendar;

/// `JointCalendar`: union of the holidays of several calendars.
pub mod joint_calendar;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_days::{apply_half_days, count, request_days, DaySpan, HalfDay, TimeRequested};
pub use calendar::{Calendar, WeekendsOnly};
pub use date::Date;
pub use gestion::{validate_sequence, Gestion, GestionResolver};
pub use holiday_calendar::HolidayCalendar;
pub use joint_calendar::JointCalendar;
