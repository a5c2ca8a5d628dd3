//! Entitlement policies: vacation days earned per gestión by seniority.
//!
//! The tiering is an organizational rule, so the engine only sees it through
//! the [`EntitlementPolicy`] trait.  Any `Fn(Years) -> Days` closure is a
//! policy; [`TieredEntitlement`] covers the usual seniority table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vac_core::errors::{Error, Result};
use vac_core::{Days, Years};

/// Maps whole years of seniority to the vacation days of one gestión.
pub trait EntitlementPolicy {
    /// Days earned in a gestión that starts with `seniority` whole years.
    fn days_for(&self, seniority: Years) -> Result<Days>;

    /// [`days_for`](Self::days_for), rejecting negative or non-finite values.
    ///
    /// # Errors
    /// [`Error::Policy`] when the policy yields an unusable figure.
    fn checked_days_for(&self, seniority: Years) -> Result<Days> {
        let days = self.days_for(seniority)?;
        if !days.is_finite() || days < 0.0 {
            return Err(Error::Policy(format!(
                "entitlement for {seniority} years must be a non-negative number, got {days}"
            )));
        }
        Ok(days)
    }
}

impl<F> EntitlementPolicy for F
where
    F: Fn(Years) -> Days,
{
    fn days_for(&self, seniority: Years) -> Result<Days> {
        Ok(self(seniority))
    }
}

/// A step table: each entry `(min_years, days)` applies from `min_years` of
/// seniority up to the next entry.  Below the first entry nothing is earned.
///
/// Deserializes from a map such as `{"1": 15, "5": 20, "10": 30}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<Years, Days>", into = "BTreeMap<Years, Days>")]
pub struct TieredEntitlement {
    tiers: BTreeMap<Years, Days>,
}

impl TieredEntitlement {
    /// Build a table from `(min_years, days)` pairs.
    ///
    /// # Errors
    /// [`Error::Policy`] if the table is empty or any value is negative or
    /// not finite.
    pub fn new(tiers: impl IntoIterator<Item = (Years, Days)>) -> Result<Self> {
        let tiers: BTreeMap<Years, Days> = tiers.into_iter().collect();
        if tiers.is_empty() {
            return Err(Error::Policy("entitlement table is empty".into()));
        }
        if let Some((years, days)) = tiers.iter().find(|(_, d)| !d.is_finite() || **d < 0.0) {
            return Err(Error::Policy(format!(
                "tier {years} has invalid entitlement {days}"
            )));
        }
        Ok(Self { tiers })
    }

    /// The statutory table of the Bolivian General Labor Law: 15 working days
    /// from the first year, 20 from the fifth, 30 from the tenth.
    pub fn general_labor_law() -> Self {
        Self {
            tiers: BTreeMap::from([(1, 15.0), (5, 20.0), (10, 30.0)]),
        }
    }

    /// The `(min_years, days)` entries in ascending order.
    pub fn tiers(&self) -> impl Iterator<Item = (Years, Days)> + '_ {
        self.tiers.iter().map(|(y, d)| (*y, *d))
    }
}

impl EntitlementPolicy for TieredEntitlement {
    fn days_for(&self, seniority: Years) -> Result<Days> {
        Ok(self
            .tiers
            .range(..=seniority)
            .next_back()
            .map(|(_, days)| *days)
            .unwrap_or(0.0))
    }
}

impl TryFrom<BTreeMap<Years, Days>> for TieredEntitlement {
    type Error = Error;

    fn try_from(tiers: BTreeMap<Years, Days>) -> Result<Self> {
        Self::new(tiers)
    }
}

impl From<TieredEntitlement> for BTreeMap<Years, Days> {
    fn from(table: TieredEntitlement) -> Self {
        table.tiers
    }
}
