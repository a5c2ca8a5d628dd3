//! `VacationDebtDetail`, the settlement of one gestión.
//!
//! Field names follow the JSON of the accumulated-debt endpoint
//! (`diasDeVacacion`, `deudaAcumulativaAnterior`, ...).

use serde::{Deserialize, Serialize};
use vac_core::{DataIssue, Days, Years};
use vac_time::Gestion;

/// One gestión's entitlement, consumption, and debt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationDebtDetail {
    /// The settled gestión (`startDate`, `endDate`).
    #[serde(flatten)]
    pub gestion: Gestion,
    /// Whole years of seniority at the gestión start.
    pub antiguedad: Years,
    /// Days earned in the gestión.
    pub dias_de_vacacion: Days,
    /// Days of authorized vacation requests inside the gestión.
    pub dias_vacaciones: Days,
    /// Days of authorized licenses inside the gestión.
    pub dias_licencias: Days,
    /// Recess days inside the gestión.
    pub dias_receso: Days,
    /// Total consumption.
    pub dias_consumidos: Days,
    /// Entitlement left after this gestión's own consumption, floored at 0.
    pub dias_de_vacacion_restantes: Days,
    /// Debt charged to this gestión.
    pub deuda: Days,
    /// Running debt carried in from the previous gestiones.
    pub deuda_acumulativa_anterior: Days,
    /// Running debt including this gestión.
    pub deuda_acumulativa_hasta_esta_gestion: Days,
    /// Usable balance after netting consumption and carried debt.
    pub dias_disponibles: Days,
    /// Contract type of the employee, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrato_tipo: Option<String>,
    /// `true` when a data error zeroed the balance fields.
    #[serde(default)]
    pub parcial: bool,
    /// `true` when the gestión has not ended at the evaluation date.
    #[serde(default)]
    pub en_curso: bool,
    /// Data problems found while settling the gestión.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub incidencias: Vec<DataIssue>,
}

impl VacationDebtDetail {
    /// Return `true` if debt was charged to this gestión.
    pub fn has_debt(&self) -> bool {
        self.deuda > 0.0
    }

    /// Check the carry-forward identity
    /// `deudaAcumulativaHastaEstaGestion = deudaAcumulativaAnterior + deuda`.
    pub fn is_balanced(&self) -> bool {
        (self.deuda_acumulativa_anterior + self.deuda - self.deuda_acumulativa_hasta_esta_gestion)
            .abs()
            < 1e-9
    }
}
