//! # vacaciones
//!
//! Vacation balances and debt per *gestión* (the yearly period anchored to
//! an employee's join anniversary), with institution-wide recesses
//! reconciled against personalized overrides.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `vac-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! vacaciones = "0.1"
//! ```
//!
//! ```rust
//! use approx::assert_abs_diff_eq;
//! use vacaciones::accrual::{accumulated_debt, DebtRequest, TieredEntitlement, VacationRequest};
//! use vacaciones::core::Settings;
//! use vacaciones::recess::{BasePeriodCatalog, EmployeeCategory, HolidayPeriod, RecessName};
//! use vacaciones::time::{Date, HolidayCalendar};
//!
//! let d = |y, m, day| Date::from_ymd(y, m, day).unwrap();
//!
//! // Mon 1 .. Fri 12 July 2024
//! let invierno = HolidayPeriod::base(RecessName::Invierno, 2024, d(2024, 7, 1), d(2024, 7, 12));
//! let catalog = BasePeriodCatalog::new(vec![invierno], Vec::new());
//!
//! let request = DebtRequest {
//!     carnet_identidad: "4567890".into(),
//!     join_date: d(2024, 1, 8),
//!     end_date: Some(d(2024, 12, 31)),
//!     category: EmployeeCategory::Docente,
//!     contract_type: None,
//!     personalized_periods: Vec::new(),
//!     licenses: Vec::new(),
//!     // Mon 5 .. Fri 9 February 2024
//!     vacation_requests: vec![VacationRequest::authorized(d(2024, 2, 5), d(2024, 2, 9))],
//! };
//!
//! let table = TieredEntitlement::new([(0, 15.0)]).unwrap();
//! let feriados = HolidayCalendar::new("Bolivia");
//! let settings = Settings::default();
//! let report = accumulated_debt(&request, &catalog, &feriados, &table, &settings).unwrap();
//!
//! // 15 earned, 5 vacation days and 10 recess days consumed
//! assert_abs_diff_eq!(report.detalles[0].dias_consumidos, 15.0);
//! assert_abs_diff_eq!(report.resumen.deuda_total, 0.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions, data issues, and engine settings.
pub use vac_core as core;

/// Dates, calendars, business-day counting, and gestiones.
pub use vac_time as time;

/// Holiday periods, reconciliation, and recess days per gestión.
pub use vac_recess as recess;

/// Entitlement, consumption events, and the debt accumulator.
pub use vac_accrual as accrual;
