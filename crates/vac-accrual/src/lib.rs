//! # vac-accrual
//!
//! Vacation entitlement by seniority, consumption by licenses, vacations and
//! recesses, and the gestión-by-gestión debt carry-forward.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The gestión-by-gestión accumulator.
pub mod accumulator;

/// `VacationDebtDetail`: one gestión's settlement.
pub mod detail;

/// Entitlement policies.
pub mod entitlement;

/// Consumption events: licenses and vacation requests.
pub mod events;

/// The whole pipeline behind one accumulated-debt query.
pub mod ledger;

/// Rollup over the settled gestiones.
pub mod summary;

pub use accumulator::VacationDebtAccumulator;
pub use detail::VacationDebtDetail;
pub use entitlement::{EntitlementPolicy, TieredEntitlement};
pub use events::{
    Authorization, AuthorizationStatus, ConsumptionEvent, ConsumptionKind, License,
    VacationRequest,
};
pub use ledger::{accumulated_debt, DebtReport, DebtRequest};
pub use summary::DebtSummary;
