//! Base holiday-period sets, one per employee category.

use serde::{Deserialize, Serialize};

use crate::period::{EmployeeCategory, HolidayPeriod};
use crate::reconcile::reconcile;

/// The institution-wide periods: "general" ones for teaching staff and
/// "administrative" ones for administrative staff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasePeriodCatalog {
    /// Periods for [`EmployeeCategory::Docente`].
    pub general: Vec<HolidayPeriod>,
    /// Periods for [`EmployeeCategory::Administrativo`].
    pub administrative: Vec<HolidayPeriod>,
}

impl BasePeriodCatalog {
    /// Create a catalog from both sets.
    pub fn new(general: Vec<HolidayPeriod>, administrative: Vec<HolidayPeriod>) -> Self {
        Self {
            general,
            administrative,
        }
    }

    /// The base set for `category`.
    pub fn for_category(&self, category: EmployeeCategory) -> &[HolidayPeriod] {
        match category {
            EmployeeCategory::Docente => &self.general,
            EmployeeCategory::Administrativo => &self.administrative,
        }
    }

    /// Reconcile the base set of `category` with an employee's overrides.
    pub fn reconcile_for(
        &self,
        category: EmployeeCategory,
        personalized: &[HolidayPeriod],
    ) -> Vec<HolidayPeriod> {
        reconcile(self.for_category(category), personalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::RecessName;
    use vac_time::Date;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn category_selects_set() {
        let general =
            HolidayPeriod::base(RecessName::Invierno, 2024, date(2024, 7, 1), date(2024, 7, 12));
        let admin =
            HolidayPeriod::base(RecessName::Invierno, 2024, date(2024, 7, 8), date(2024, 7, 12));
        let catalog = BasePeriodCatalog::new(vec![general.clone()], vec![admin.clone()]);

        assert_eq!(catalog.for_category(EmployeeCategory::Docente), &[general]);
        assert_eq!(catalog.reconcile_for(EmployeeCategory::Administrativo, &[]), vec![admin]);
    }

    #[test]
    fn deserialize_missing_set() {
        let catalog: BasePeriodCatalog = serde_json::from_str(
            r#"{"general": [{
                "name": "INVIERNO",
                "year": 2024,
                "startDate": "2024-07-01",
                "endDate": "2024-07-12"
            }]}"#,
        )
        .unwrap();
        assert_eq!(catalog.general.len(), 1);
        assert!(catalog.administrative.is_empty());
    }
}
