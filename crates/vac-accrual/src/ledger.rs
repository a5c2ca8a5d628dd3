//! One accumulated-debt query, from raw records to a report.
//!
//! [`DebtRequest`] carries what the `accumulated-debt` endpoint receives for
//! one employee (`carnetIdentidad`, `endDate`) together with the records the
//! caller already fetched.  [`accumulated_debt`] runs the whole pipeline:
//! resolve the gestiones, reconcile the holiday periods, attribute recess
//! days, settle every gestión and summarize.

use serde::{Deserialize, Serialize};
use tracing::info;
use vac_core::errors::Result;
use vac_core::Settings;
use vac_recess::{recess_by_gestion, BasePeriodCatalog, EmployeeCategory, HolidayPeriod};
use vac_time::{Calendar, Date, GestionResolver};

use crate::accumulator::VacationDebtAccumulator;
use crate::detail::VacationDebtDetail;
use crate::entitlement::EntitlementPolicy;
use crate::events::{License, VacationRequest};
use crate::summary::DebtSummary;

/// Everything needed to compute one employee's debt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtRequest {
    /// National identity number of the employee.
    pub carnet_identidad: String,
    /// Date the employee joined.
    pub join_date: Date,
    /// Evaluation date; falls back to the settings when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
    /// Selects the base holiday periods.
    pub category: EmployeeCategory,
    /// Contract type copied onto every detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    /// The employee's holiday-period overrides.
    #[serde(default)]
    pub personalized_periods: Vec<HolidayPeriod>,
    /// License requests, in any approval state.
    #[serde(default)]
    pub licenses: Vec<License>,
    /// Vacation requests, in any approval state.
    #[serde(default)]
    pub vacation_requests: Vec<VacationRequest>,
}

/// Result of an accumulated-debt query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtReport {
    /// Echo of the request's identity number.
    pub carnet_identidad: String,
    /// One settlement per gestión, oldest first.
    pub detalles: Vec<VacationDebtDetail>,
    /// Totals over `detalles`.
    pub resumen: DebtSummary,
}

/// Compute the accumulated vacation debt of the employee in `request`.
///
/// The evaluation date is `request.end_date`, or the settings' evaluation
/// date, or today.
///
/// # Errors
/// * [`Error::InvalidJoinDate`](vac_core::Error::InvalidJoinDate) if the
///   employee joined after the evaluation date.
/// * [`Error::Policy`](vac_core::Error::Policy) if `policy` is unusable.
///
/// Data problems confined to one gestión do not fail the query; they show
/// up as partial details with their `incidencias`.
pub fn accumulated_debt(
    request: &DebtRequest,
    catalog: &BasePeriodCatalog,
    public_holidays: &dyn Calendar,
    policy: &dyn EntitlementPolicy,
    settings: &Settings,
) -> Result<DebtReport> {
    let as_of = request
        .end_date
        .unwrap_or_else(|| Date::from(settings.evaluation_date_or_today()));
    let gestiones = GestionResolver::new(request.join_date).resolve(as_of)?;

    let periods = catalog.reconcile_for(request.category, &request.personalized_periods);
    let recess = recess_by_gestion(&gestiones, &periods, request.join_date.year(), public_holidays);

    let mut accumulator = VacationDebtAccumulator::new(request.join_date, policy)
        .with_public_holidays(public_holidays)
        .with_settings(settings.clone().with_evaluation_date(as_of.naive()));
    if let Some(contract_type) = &request.contract_type {
        accumulator = accumulator.with_contract_type(contract_type.clone());
    }
    let detalles = accumulator.accumulate(
        &gestiones,
        &recess,
        &request.licenses,
        &request.vacation_requests,
    )?;
    let resumen = DebtSummary::from_details(&detalles);

    info!(
        carnet = %request.carnet_identidad,
        as_of = %as_of,
        gestiones = detalles.len(),
        deuda_total = resumen.deuda_total,
        parciales = resumen.gestiones_parciales,
        "accumulated debt computed"
    );
    Ok(DebtReport {
        carnet_identidad: request.carnet_identidad.clone(),
        detalles,
        resumen,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vac_core::{Error, Years};
    use vac_recess::RecessName;
    use vac_time::WeekendsOnly;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn request(join: Date, end: Date) -> DebtRequest {
        DebtRequest {
            carnet_identidad: "4567890".into(),
            join_date: join,
            end_date: Some(end),
            category: EmployeeCategory::Docente,
            contract_type: None,
            personalized_periods: Vec::new(),
            licenses: Vec::new(),
            vacation_requests: Vec::new(),
        }
    }

    #[test]
    fn future_join_date_fails() {
        let policy = |_: Years| 15.0;
        let err = accumulated_debt(
            &request(date(2025, 1, 1), date(2024, 1, 1)),
            &BasePeriodCatalog::default(),
            &WeekendsOnly,
            &policy,
            &Settings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidJoinDate { .. }));
    }

    #[test]
    fn category_picks_base_periods() {
        // Mon 3 .. Fri 14 June 2024
        let general =
            HolidayPeriod::base(RecessName::Invierno, 2024, date(2024, 6, 3), date(2024, 6, 14));
        // Mon 10 .. Fri 14 June 2024
        let admin =
            HolidayPeriod::base(RecessName::Invierno, 2024, date(2024, 6, 10), date(2024, 6, 14));
        let catalog = BasePeriodCatalog::new(vec![general], vec![admin]);
        let policy = |_: Years| 15.0;

        let mut req = request(date(2024, 1, 8), date(2024, 12, 31));
        let docente =
            accumulated_debt(&req, &catalog, &WeekendsOnly, &policy, &Settings::default()).unwrap();
        req.category = EmployeeCategory::Administrativo;
        let admin =
            accumulated_debt(&req, &catalog, &WeekendsOnly, &policy, &Settings::default()).unwrap();

        assert_eq!(docente.detalles[0].dias_receso, 10.0);
        assert_eq!(admin.detalles[0].dias_receso, 5.0);
        assert_eq!(admin.resumen.dias_disponibles_actuales, 10.0);
    }

    #[test]
    fn request_from_json() {
        let req: DebtRequest = serde_json::from_str(
            r#"{
                "carnetIdentidad": "4567890",
                "joinDate": "2020-03-15",
                "endDate": "2023-03-15",
                "category": "ADMINISTRATIVO",
                "vacationRequests": [{
                    "startDate": "2021-05-03",
                    "endDate": "2021-05-07",
                    "totalDays": 5,
                    "approvedBySupervisor": true,
                    "approvedByHR": true
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(req.end_date, Some(date(2023, 3, 15)));
        assert_eq!(req.vacation_requests.len(), 1);
        assert!(req.licenses.is_empty());
    }
}
