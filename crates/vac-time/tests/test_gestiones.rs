//! Integration tests for gestión resolution.

use proptest::prelude::*;
use vac_core::Error;
use vac_time::{validate_sequence, Date, Gestion, GestionResolver};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn check_gestiones(actual: &[Gestion], expected: &[(Date, Date)]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "expected {} gestiones, found {}.\n  actual: {:?}",
        expected.len(),
        actual.len(),
        actual,
    );
    for (i, (g, (s, e))) in actual.iter().zip(expected).enumerate() {
        assert_eq!(g.start_date(), *s, "start mismatch at index {i}");
        assert_eq!(g.end_date(), *e, "end mismatch at index {i}");
    }
}

#[test]
fn three_full_gestiones() {
    let gs = GestionResolver::new(date(2020, 3, 15))
        .resolve(date(2023, 3, 15))
        .unwrap();
    check_gestiones(
        &gs,
        &[
            (date(2020, 3, 15), date(2021, 3, 15)),
            (date(2021, 3, 15), date(2022, 3, 15)),
            (date(2022, 3, 15), date(2023, 3, 15)),
        ],
    );
}

#[test]
fn future_join_date_rejected() {
    let err = GestionResolver::new(date(2025, 1, 1))
        .resolve(date(2024, 12, 31))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidJoinDate { .. }));
}

#[test]
fn leap_day_join_does_not_drift() {
    let gs = GestionResolver::new(date(2020, 2, 29))
        .resolve(date(2024, 6, 1))
        .unwrap();
    check_gestiones(
        &gs,
        &[
            (date(2020, 2, 29), date(2021, 2, 28)),
            (date(2021, 2, 28), date(2022, 2, 28)),
            (date(2022, 2, 28), date(2023, 2, 28)),
            (date(2023, 2, 28), date(2024, 2, 29)),
            (date(2024, 2, 29), date(2025, 2, 28)),
        ],
    );
}

#[test]
fn seniority_at_gestion_start_is_index() {
    let resolver = GestionResolver::new(date(2011, 9, 1));
    let gs = resolver.resolve(date(2024, 9, 1)).unwrap();
    for (k, g) in gs.iter().enumerate() {
        assert_eq!(resolver.seniority_at(g.start_date()) as usize, k);
    }
}

proptest! {
    #[test]
    fn resolved_sequences_are_contiguous(offset in 0i64..9_000, span in 0i64..9_000) {
        let join = date(2000, 1, 1).add_days(offset).unwrap();
        let as_of = join.add_days(span).unwrap();
        let gs = GestionResolver::new(join).resolve(as_of).unwrap();

        prop_assert!(validate_sequence(&gs).is_ok());
        if let Some(first) = gs.first() {
            prop_assert_eq!(first.start_date(), join);
        }
        for g in &gs {
            prop_assert!(g.start_date() < as_of);
        }
        // the next gestión would start on or after as_of
        let next_start = gs.last().map(|g| g.end_date()).unwrap_or(join);
        prop_assert!(next_start >= as_of);
    }
}
