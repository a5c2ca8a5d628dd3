//! Rollup over a list of settled gestiones.

use serde::{Deserialize, Serialize};
use vac_core::Days;
use vac_time::Gestion;

use crate::detail::VacationDebtDetail;

/// Totals over the details of one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtSummary {
    /// Sum of the debt charged to each gestión.
    pub deuda_total: Days,
    /// Available days of the latest gestión that was fully settled.
    pub dias_disponibles_actuales: Days,
    /// Gestiones with debt.
    pub gestiones_con_deuda: usize,
    /// Fully settled gestiones without debt.  Partial gestiones count in
    /// neither this nor `gestiones_con_deuda`.
    pub gestiones_sin_deuda: usize,
    /// Gestiones settled as partial because of data errors.
    pub gestiones_parciales: usize,
    /// `deuda_total` divided by the number of gestiones (0 when empty).
    pub promedio_deuda_por_gestion: Days,
    /// Oldest gestión.
    pub primera_gestion: Option<Gestion>,
    /// Latest gestión.
    pub ultima_gestion: Option<Gestion>,
}

impl DebtSummary {
    /// Reduce `details` (oldest first) to a summary.
    pub fn from_details(details: &[VacationDebtDetail]) -> Self {
        let deuda_total: Days = details.iter().map(|d| d.deuda).sum();
        let gestiones_con_deuda = details.iter().filter(|d| d.has_debt()).count();
        let gestiones_parciales = details.iter().filter(|d| d.parcial).count();
        let ultima_completa = details.iter().rev().find(|d| !d.parcial);
        let promedio_deuda_por_gestion = if details.is_empty() {
            0.0
        } else {
            deuda_total / details.len() as Days
        };
        Self {
            deuda_total,
            dias_disponibles_actuales: ultima_completa.map_or(0.0, |d| d.dias_disponibles),
            gestiones_con_deuda,
            gestiones_sin_deuda: details.len() - gestiones_con_deuda - gestiones_parciales,
            gestiones_parciales,
            promedio_deuda_por_gestion,
            primera_gestion: details.first().map(|d| d.gestion),
            ultima_gestion: details.last().map(|d| d.gestion),
        }
    }
}
