//! Carry-forward behaviour of the accumulator over several gestiones.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use vac_accrual::{EntitlementPolicy, TieredEntitlement, VacationDebtAccumulator, VacationRequest};
use vac_core::{DebtPolicy, Settings, Years};
use vac_recess::GestionRecess;
use vac_time::{Date, Gestion, GestionResolver};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn gestiones(join: Date, count: i32) -> Vec<Gestion> {
    let as_of = join.add_years(count).unwrap();
    GestionResolver::new(join).resolve(as_of).unwrap()
}

/// A recess entry made of the first `days` weekdays of the gestión.
fn recess_of(gestion: Gestion, days: usize) -> GestionRecess {
    let mut recess = GestionRecess::empty(gestion);
    recess.dates.extend(
        gestion
            .start_date()
            .iter_through(gestion.last_day())
            .filter(|d| !d.is_weekend())
            .take(days),
    );
    recess
}

#[test]
fn test_overdraft_carries_forward() {
    // Monday
    let join = date(2020, 1, 6);
    let gs = gestiones(join, 3);
    assert_eq!(gs.len(), 3);
    // Mon 3 .. Fri 21 February 2020: 15 working days
    let vacation = VacationRequest::authorized(date(2020, 2, 3), date(2020, 2, 21));
    let recess: Vec<_> = gs.iter().map(|g| GestionRecess::empty(*g)).collect();
    let policy = |_: Years| 10.0;

    let details = VacationDebtAccumulator::new(join, &policy)
        .accumulate(&gs, &recess, &[], &[vacation])
        .unwrap();

    let deudas: Vec<_> = details.iter().map(|d| d.deuda).collect();
    let running: Vec<_> = details
        .iter()
        .map(|d| d.deuda_acumulativa_hasta_esta_gestion)
        .collect();
    assert_eq!(deudas, vec![5.0, 0.0, 0.0]);
    assert_eq!(running, vec![5.0, 5.0, 5.0]);
    assert_abs_diff_eq!(details[0].dias_disponibles, 0.0);
    assert_abs_diff_eq!(details[1].dias_disponibles, 5.0);
    assert_abs_diff_eq!(details[1].dias_de_vacacion_restantes, 10.0);
}

#[test]
fn test_per_gestion_policy_does_not_recharge_carried_debt() {
    let join = date(2020, 1, 6);
    let gs = gestiones(join, 2);
    let recess = vec![recess_of(gs[0], 15), recess_of(gs[1], 12)];
    let policy = |_: Years| 10.0;

    let pooled = VacationDebtAccumulator::new(join, &policy)
        .accumulate(&gs, &recess, &[], &[])
        .unwrap();
    let per_gestion = VacationDebtAccumulator::new(join, &policy)
        .with_settings(Settings::default().with_debt_policy(DebtPolicy::PerGestion))
        .accumulate(&gs, &recess, &[], &[])
        .unwrap();

    // pooled: 10 - 12 - 5 = -7
    assert_abs_diff_eq!(pooled[1].deuda, 7.0);
    assert_abs_diff_eq!(pooled[1].deuda_acumulativa_hasta_esta_gestion, 12.0);
    // per gestión: 12 - 10 = 2
    assert_abs_diff_eq!(per_gestion[1].deuda, 2.0);
    assert_abs_diff_eq!(per_gestion[1].deuda_acumulativa_hasta_esta_gestion, 7.0);
    assert_abs_diff_eq!(per_gestion[1].dias_disponibles, 0.0);
}

#[test]
fn test_seniority_tiers() {
    let table = TieredEntitlement::new([(0, 15.0), (5, 20.0)]).unwrap();
    // Monday
    let join = date(2015, 1, 5);
    let resolver = GestionResolver::new(join);
    let policy: &dyn EntitlementPolicy = &table;

    // Mon 2 .. Tue 17 February 2015, 12 working days
    let first = resolver.nth(0).unwrap();
    let vacation = VacationRequest::authorized(date(2015, 2, 2), date(2015, 2, 17));
    let details = VacationDebtAccumulator::new(join, policy)
        .accumulate(&[first], &[GestionRecess::empty(first)], &[], &[vacation])
        .unwrap();
    assert_eq!(details[0].antiguedad, 0);
    assert_abs_diff_eq!(details[0].deuda, 0.0);
    assert_abs_diff_eq!(details[0].dias_disponibles, 3.0);

    // Mon 3 .. Tue 18 February 2020, 12 working days
    let sixth = resolver.nth(5).unwrap();
    let vacation = VacationRequest::authorized(date(2020, 2, 3), date(2020, 2, 18));
    let details = VacationDebtAccumulator::new(join, policy)
        .accumulate(&[sixth], &[GestionRecess::empty(sixth)], &[], &[vacation])
        .unwrap();
    assert_eq!(details[0].antiguedad, 5);
    assert_abs_diff_eq!(details[0].deuda, 0.0);
    assert_abs_diff_eq!(details[0].dias_disponibles, 8.0);
}

#[test]
fn test_broken_policy_aborts() {
    let join = date(2020, 1, 6);
    let gs = gestiones(join, 2);
    let recess: Vec<_> = gs.iter().map(|g| GestionRecess::empty(*g)).collect();
    let policy = |years: Years| if years == 0 { 15.0 } else { f64::NAN };

    let result = VacationDebtAccumulator::new(join, &policy).accumulate(&gs, &recess, &[], &[]);
    assert!(matches!(result, Err(vac_core::Error::Policy(_))));
}

#[test]
fn test_gap_between_gestiones_is_fatal() {
    let join = date(2020, 1, 6);
    let gs = gestiones(join, 3);
    let sparse = [gs[0], gs[2]];
    let policy = |_: Years| 15.0;

    let result = VacationDebtAccumulator::new(join, &policy).accumulate(&sparse, &[], &[], &[]);
    assert!(matches!(result, Err(vac_core::Error::InvalidGestiones(_))));
}

/// Pooled carry-forward over `(entitlement, consumption)` pairs, skipping
/// the blocked gestiones.
fn pooled_running(figures: &[(f64, f64)], blocked: &[bool]) -> Vec<f64> {
    let mut carried = 0.0;
    figures
        .iter()
        .zip(blocked)
        .map(|(&(e, c), &skip)| {
            if !skip {
                carried += (c + carried - e).max(0.0);
            }
            carried
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_running_debt_is_balanced(
        entitlement in 0u32..25,
        consumption in prop::collection::vec(0usize..40, 1..6),
    ) {
        let join = date(2010, 1, 4);
        let gs = gestiones(join, consumption.len() as i32);
        let recess: Vec<_> = gs.iter().zip(&consumption).map(|(g, c)| recess_of(*g, *c)).collect();
        let policy = move |_: Years| entitlement as f64;

        for debt_policy in [DebtPolicy::Pooled, DebtPolicy::PerGestion] {
            let details = VacationDebtAccumulator::new(join, &policy)
                .with_settings(Settings::default().with_debt_policy(debt_policy))
                .accumulate(&gs, &recess, &[], &[])
                .unwrap();
            let mut previous = 0.0;
            for d in &details {
                prop_assert!(d.is_balanced());
                prop_assert!(d.deuda >= 0.0);
                prop_assert!(d.dias_disponibles >= 0.0);
                prop_assert_eq!(d.deuda_acumulativa_anterior, previous);
                prop_assert!(d.deuda_acumulativa_hasta_esta_gestion >= previous);
                previous = d.deuda_acumulativa_hasta_esta_gestion;
            }
        }
    }

    #[test]
    fn prop_partial_gestion_passes_debt_through(
        consumption in prop::collection::vec(0usize..30, 2..6),
        blocked_index in 0usize..6,
    ) {
        let blocked_index = blocked_index % consumption.len();
        let join = date(2010, 1, 4);
        let gs = gestiones(join, consumption.len() as i32);
        // the blocked gestión has no recess entry
        let recess: Vec<_> = gs
            .iter()
            .zip(&consumption)
            .enumerate()
            .filter(|(i, _)| *i != blocked_index)
            .map(|(_, (g, c))| recess_of(*g, *c))
            .collect();
        let policy = |_: Years| 15.0;

        let details = VacationDebtAccumulator::new(join, &policy)
            .accumulate(&gs, &recess, &[], &[])
            .unwrap();

        let partial = &details[blocked_index];
        prop_assert!(partial.parcial);
        prop_assert_eq!(partial.deuda, 0.0);
        prop_assert_eq!(
            partial.deuda_acumulativa_anterior,
            partial.deuda_acumulativa_hasta_esta_gestion
        );

        let figures: Vec<_> = consumption.iter().map(|c| (15.0, *c as f64)).collect();
        let blocked: Vec<_> = (0..consumption.len()).map(|i| i == blocked_index).collect();
        let expected = pooled_running(&figures, &blocked);
        let running: Vec<_> =
            details.iter().map(|d| d.deuda_acumulativa_hasta_esta_gestion).collect();
        prop_assert_eq!(running, expected);
    }
}
