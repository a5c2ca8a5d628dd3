//! Holiday calendar: a calendar with an explicit, ordered holiday set.
//!
//! Used both for public holidays supplied by the caller and for the recess
//! days derived from reconciled holiday periods.

use std::collections::BTreeSet;

use crate::calendar::Calendar;
use crate::date::Date;

/// A calendar where holidays are listed explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    name: String,
    holidays: BTreeSet<Date>,
}

impl HolidayCalendar {
    /// Create a new calendar with the given name and no holidays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeSet::new(),
        }
    }

    /// Create a calendar from a list of holiday dates.
    pub fn from_dates(name: impl Into<String>, dates: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: dates.into_iter().collect(),
        }
    }

    /// Add a holiday. Weekends are already non-working days.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays.insert(date);
    }

    /// Return `true` if `date` was explicitly added.
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.holidays.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn empty_calendar_is_weekends_only() {
        let cal = HolidayCalendar::new("Test");
        assert_eq!(cal.name(), "Test");
        assert!(cal.is_business_day(date(2024, 1, 8)));
        assert!(!cal.is_business_day(date(2024, 1, 6)));
    }

    #[test]
    fn listed_dates_are_holidays() {
        // Tue 6 Aug 2024 and Sat 10 Aug 2024
        let dates = [date(2024, 8, 6), date(2024, 8, 10)];
        let feriados = HolidayCalendar::from_dates("Feriados", dates);
        assert!(feriados.contains(date(2024, 8, 10)));
        assert!(feriados.is_holiday(date(2024, 8, 6)));
        assert!(!feriados.is_business_day(date(2024, 8, 10)));
        assert_eq!(
            feriados.business_days_between(date(2024, 8, 5), date(2024, 8, 11)).unwrap(),
            4
        );
    }
}
