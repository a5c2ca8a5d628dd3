//! `Calendar` trait and concrete calendar implementations.
//!
//! A calendar knows which dates are working days.  Every calendar treats
//! Saturdays and Sundays as non-working; implementations add holidays on top.

use std::collections::HashSet;

use crate::date::Date;
use vac_core::errors::{Error, Result};

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Feriados nacionales"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a working day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday or weekend.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` falls on a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.is_weekend()
    }

    /// Count the working days from `start` to `end`, both inclusive.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] when `end < start`.
    fn business_days_between(&self, start: Date, end: Date) -> Result<u32> {
        if end < start {
            return Err(Error::InvalidRange {
                start: start.naive(),
                end: end.naive(),
            });
        }
        let count = start
            .iter_through(end)
            .filter(|d| self.is_business_day(*d))
            .count();
        Ok(count as u32)
    }
}

/// A calendar that treats only Saturdays and Sundays as non-working days.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}

/// A bare set of holiday dates works as a calendar on its own.
impl Calendar for HashSet<Date> {
    fn name(&self) -> &str {
        "Holiday set"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend() && !self.contains(&date)
    }
}

impl<C: Calendar + ?Sized> Calendar for &C {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_business_day(&self, date: Date) -> bool {
        (**self).is_business_day(date)
    }
}
