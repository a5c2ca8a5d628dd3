//! # vac-core
//!
//! Core types, error definitions, and settings for vacaciones-rs.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: the day-count aliases, the error hierarchy,
//! [`DataIssue`] records, and the engine [`Settings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types.
pub mod errors;

/// Per-record data problems carried alongside results.
pub mod issues;

/// Engine settings (evaluation date, tolerances, policies).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A (possibly fractional) number of days. Half days are `0.5`.
pub type Days = f64;

/// Whole years of seniority.
pub type Years = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use issues::{DataIssue, IssueKind};
pub use settings::{DebtPolicy, HalfDayWeekendPolicy, Settings};
