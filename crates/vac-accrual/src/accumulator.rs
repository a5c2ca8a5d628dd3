//! The gestión-by-gestión vacation-debt accumulator.
//!
//! Gestiones are settled oldest first because each one starts from the
//! running debt of the previous one.  For every gestión:
//!
//! 1. seniority is the number of whole years from the join date to the
//!    gestión start, and the entitlement comes from the policy;
//! 2. consumption is the authorized vacation days plus the authorized license
//!    days inside the gestión, plus its recess days;
//! 3. the balance is netted against the carried debt according to the
//!    [`DebtPolicy`], and the running debt grows by the gestión's debt.
//!
//! Bad input on a single gestión (reversed ranges, missing recess data) does
//! not abort the run: that gestión is emitted as `parcial` with zeroed
//! balance fields and the carried debt passes through untouched.  A broken
//! entitlement policy or an invalid gestión sequence aborts the whole run.

use tracing::{debug, warn};
use vac_core::errors::{Error, Result};
use vac_core::{DataIssue, Days, DebtPolicy, IssueKind, Settings, Years};
use vac_recess::GestionRecess;
use vac_time::{
    request_days, validate_sequence, Calendar, Date, Gestion, HolidayCalendar, JointCalendar,
    WeekendsOnly,
};

use crate::detail::VacationDebtDetail;
use crate::entitlement::EntitlementPolicy;
use crate::events::{ConsumptionEvent, License, VacationRequest};

/// Settles gestiones in order, carrying debt forward.
pub struct VacationDebtAccumulator<'a> {
    join_date: Date,
    policy: &'a dyn EntitlementPolicy,
    public_holidays: &'a dyn Calendar,
    settings: Settings,
    contract_type: Option<String>,
}

impl std::fmt::Debug for VacationDebtAccumulator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VacationDebtAccumulator")
            .field("join_date", &self.join_date)
            .field("public_holidays", &self.public_holidays.name())
            .field("settings", &self.settings)
            .field("contract_type", &self.contract_type)
            .finish()
    }
}

/// Days consumed in one gestión.
struct Consumption {
    vacations: Days,
    licenses: Days,
    recess: Days,
    issues: Vec<DataIssue>,
}

impl Consumption {
    fn total(&self) -> Days {
        self.vacations + self.licenses + self.recess
    }

    fn is_blocked(&self) -> bool {
        self.issues.iter().any(|i| i.blocking)
    }
}

impl<'a> VacationDebtAccumulator<'a> {
    /// Begin an accumulation for an employee who joined on `join_date`.
    ///
    /// Defaults: no public holidays besides weekends, default [`Settings`].
    pub fn new(join_date: Date, policy: &'a dyn EntitlementPolicy) -> Self {
        Self {
            join_date,
            policy,
            public_holidays: &WeekendsOnly,
            settings: Settings::default(),
            contract_type: None,
        }
    }

    /// Public holidays skipped when counting request days.
    pub fn with_public_holidays(mut self, calendar: &'a dyn Calendar) -> Self {
        self.public_holidays = calendar;
        self
    }

    /// Engine settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Contract type copied onto every detail.
    pub fn with_contract_type(mut self, contract_type: impl Into<String>) -> Self {
        self.contract_type = Some(contract_type.into());
        self
    }

    /// Settle `gestiones`, oldest first.
    ///
    /// `recess` holds the recess days of each gestión; a gestión without an
    /// entry is settled as partial.
    ///
    /// # Errors
    /// * [`Error::InvalidGestiones`] if `gestiones` is not a contiguous,
    ///   chronologically ordered sequence.
    /// * [`Error::Policy`] if the entitlement policy fails or yields a
    ///   negative or non-finite figure.
    pub fn accumulate(
        &self,
        gestiones: &[Gestion],
        recess: &[GestionRecess],
        licenses: &[License],
        vacations: &[VacationRequest],
    ) -> Result<Vec<VacationDebtDetail>> {
        validate_sequence(gestiones)?;
        let as_of = Date::from(self.settings.evaluation_date_or_today());

        let mut carried: Days = 0.0;
        let mut details = Vec::with_capacity(gestiones.len());
        for gestion in gestiones {
            let antiguedad = self.join_date.whole_years_until(gestion.start_date());
            let entitlement = self
                .policy
                .checked_days_for(antiguedad)
                .map_err(|e| match e {
                    Error::Policy(_) => e,
                    _ => Error::Policy(e.to_string()),
                })?;

            let entry = recess.iter().find(|r| r.gestion == *gestion);
            let consumption = self.consumption(gestion, entry, licenses, vacations);
            let detail =
                self.settle(*gestion, antiguedad, entitlement, carried, consumption, as_of);

            carried = detail.deuda_acumulativa_hasta_esta_gestion;
            details.push(detail);
        }
        Ok(details)
    }

    fn consumption(
        &self,
        gestion: &Gestion,
        recess: Option<&GestionRecess>,
        licenses: &[License],
        vacations: &[VacationRequest],
    ) -> Consumption {
        let mut issues = Vec::new();
        let (recess_days, recess_calendar) = match recess {
            Some(r) => {
                issues.extend(r.issues.iter().cloned());
                (r.days(), r.as_calendar())
            }
            None => {
                warn!(gestion = %gestion, "no recess data for gestión");
                issues.push(DataIssue::blocking(
                    IssueKind::MissingData,
                    format!("no recess data for gestión {gestion}"),
                ));
                (0.0, HolidayCalendar::new("Receso"))
            }
        };

        let mut calendars: Vec<&dyn Calendar> = vec![self.public_holidays];
        if self.settings.exclude_recess_from_requests {
            calendars.push(&recess_calendar);
        }
        let calendar = JointCalendar::new(calendars);

        Consumption {
            vacations: self.consumed(gestion, vacations, &calendar, &mut issues),
            licenses: self.consumed(gestion, licenses, &calendar, &mut issues),
            recess: recess_days,
            issues,
        }
    }

    /// Authorized days of `events` inside `gestion`.
    ///
    /// Problems with an event are reported on the gestión containing its
    /// start date only.  `calendar` is used for consumption; the stored
    /// `totalDays` is checked against a count over the public holidays alone.
    fn consumed<E: ConsumptionEvent>(
        &self,
        gestion: &Gestion,
        events: &[E],
        calendar: &dyn Calendar,
        issues: &mut Vec<DataIssue>,
    ) -> Days {
        let mut total = 0.0;
        for event in events.iter().filter(|e| e.is_authorized()) {
            let span = event.span();
            let owned = gestion.contains(span.start);
            match request_days(&span, calendar, Some(gestion.window()), &self.settings) {
                Ok(days) => total += days,
                Err(err) => {
                    if owned {
                        warn!(
                            event = %event.describe(),
                            error = %err,
                            "unusable consumption record"
                        );
                        issues.push(DataIssue::from_error(&err, &event.describe()));
                    }
                    continue;
                }
            }

            // stored totals are plain business-day counts, recess included
            if let (true, Some(stored)) = (owned, event.stored_total_days()) {
                let recount = request_days(&span, self.public_holidays, None, &self.settings);
                if let Ok(computed) = recount {
                    if (stored - computed).abs() > self.settings.inconsistency_tolerance {
                        let err = Error::DataInconsistency { stored, computed };
                        warn!(
                            event = %event.describe(),
                            error = %err,
                            "stored day count disagrees"
                        );
                        issues.push(DataIssue::from_error(&err, &event.describe()));
                    }
                }
            }
        }
        total
    }

    fn settle(
        &self,
        gestion: Gestion,
        antiguedad: Years,
        entitlement: Days,
        carried: Days,
        consumption: Consumption,
        as_of: Date,
    ) -> VacationDebtDetail {
        let mut detail = VacationDebtDetail {
            gestion,
            antiguedad,
            dias_de_vacacion: entitlement,
            dias_vacaciones: 0.0,
            dias_licencias: 0.0,
            dias_receso: 0.0,
            dias_consumidos: 0.0,
            dias_de_vacacion_restantes: 0.0,
            deuda: 0.0,
            deuda_acumulativa_anterior: carried,
            deuda_acumulativa_hasta_esta_gestion: carried,
            dias_disponibles: 0.0,
            contrato_tipo: self.contract_type.clone(),
            parcial: false,
            en_curso: gestion.is_open(as_of),
            incidencias: Vec::new(),
        };

        if consumption.is_blocked() {
            warn!(
                gestion = %gestion,
                issues = consumption.issues.len(),
                "gestión settled as partial"
            );
            detail.parcial = true;
            detail.incidencias = consumption.issues;
            return detail;
        }

        let consumed = consumption.total();
        let (deuda, disponibles) = match self.settings.debt_policy {
            DebtPolicy::Pooled => {
                let saldo = entitlement - consumed - carried;
                if saldo < 0.0 {
                    (-saldo, 0.0)
                } else {
                    (0.0, saldo)
                }
            }
            DebtPolicy::PerGestion => (
                (consumed - entitlement).max(0.0),
                (entitlement - consumed - carried).max(0.0),
            ),
        };

        detail.dias_vacaciones = consumption.vacations;
        detail.dias_licencias = consumption.licenses;
        detail.dias_receso = consumption.recess;
        detail.dias_consumidos = consumed;
        detail.dias_de_vacacion_restantes = (entitlement - consumed).max(0.0);
        detail.deuda = deuda;
        detail.deuda_acumulativa_hasta_esta_gestion = carried + deuda;
        detail.dias_disponibles = disponibles;
        detail.incidencias = consumption.issues;

        debug!(
            gestion = %gestion,
            entitlement,
            consumed,
            deuda,
            running = detail.deuda_acumulativa_hasta_esta_gestion,
            "gestión settled"
        );
        detail
    }
}
