//! Joint calendar: the union of the holidays of several borrowed calendars.
//!
//! Used to count request days against public holidays and recess days at the
//! same time without copying either holiday set.

use crate::calendar::Calendar;
use crate::date::Date;

/// A calendar on which a day is a working day only if it is one in every
/// constituent calendar.
pub struct JointCalendar<'a> {
    calendars: Vec<&'a dyn Calendar>,
    name: String,
}

impl std::fmt::Debug for JointCalendar<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JointCalendar")
            .field("name", &self.name)
            .finish()
    }
}

impl<'a> JointCalendar<'a> {
    /// Join `calendars`.  An empty list behaves like weekends only.
    pub fn new(calendars: Vec<&'a dyn Calendar>) -> Self {
        let name = calendars
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ");
        Self { calendars, name }
    }
}

impl Calendar for JointCalendar<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && self.calendars.iter().all(|c| c.is_business_day(date))
    }
}
