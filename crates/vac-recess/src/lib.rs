//! # vac-recess
//!
//! Holiday periods (recesos), the reconciliation of institution-wide periods
//! with personalized overrides, and the recess days that fall in each
//! gestión.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Base period sets per employee category.
pub mod catalog;

/// `HolidayPeriod` and its name/category enums.
pub mod period;

/// Recess days per gestión.
pub mod recess;

/// Merge of base and personalized periods.
pub mod reconcile;

pub use catalog::BasePeriodCatalog;
pub use period::{EmployeeCategory, HolidayPeriod, RecessName};
pub use recess::{recess_by_gestion, GestionRecess};
pub use reconcile::{reconcile, valid_for_employee};
