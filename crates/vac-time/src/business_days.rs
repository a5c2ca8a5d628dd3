//! Business-day counting with half-day adjustments.
//!
//! Requests (vacations, licenses) span an inclusive date range and may start
//! or end on a half day.  The count is the number of working days in the
//! range, minus half a day per half-day endpoint, with a floor of half a day
//! so that a half-day request never reports zero.

use serde::{Deserialize, Serialize};
use vac_core::errors::{Error, Result};
use vac_core::{Days, HalfDayWeekendPolicy, Settings};

use crate::calendar::Calendar;
use crate::date::Date;

/// Half-day marker on a request endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HalfDay {
    /// The whole day is taken.
    #[default]
    #[serde(rename = "Completo")]
    Full,
    /// Only the morning is taken.
    #[serde(rename = "Media Mañana")]
    Morning,
    /// Only the afternoon is taken.
    #[serde(rename = "Media Tarde")]
    Afternoon,
}

impl HalfDay {
    /// Return `true` for `Media Mañana` and `Media Tarde`.
    pub fn is_half(&self) -> bool {
        !matches!(self, HalfDay::Full)
    }
}

/// Requested duration granularity of a license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRequested {
    /// One or more full days.
    #[default]
    #[serde(rename = "Día Completo")]
    FullDay,
    /// A single half day.
    #[serde(rename = "Medio Día")]
    HalfDay,
}

/// The date span of a request, as needed for counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySpan {
    /// First day, inclusive.
    pub start: Date,
    /// Last day, inclusive.
    pub end: Date,
    /// Marker on the first day.
    pub start_half: HalfDay,
    /// Marker on the last day.
    pub end_half: HalfDay,
    /// Requested granularity.
    pub time_requested: TimeRequested,
}

impl DaySpan {
    /// A full-day span with no half-day markers.
    pub fn full_days(start: Date, end: Date) -> Self {
        Self {
            start,
            end,
            start_half: HalfDay::Full,
            end_half: HalfDay::Full,
            time_requested: TimeRequested::FullDay,
        }
    }

    /// Return `true` for a same-day `Medio Día` request.
    pub fn is_single_half_day(&self) -> bool {
        self.time_requested == TimeRequested::HalfDay && self.start == self.end
    }
}

/// Count the working days from `start` to `end`, both inclusive, skipping
/// weekends and every holiday of `holidays`.
///
/// # Errors
/// [`Error::InvalidRange`] when `end < start`.
///
/// # Example
/// ```
/// use std::collections::HashSet;
/// use vac_time::{count, Date};
///
/// let d = |m, day| Date::from_ymd(2024, m, day).unwrap();
/// let holidays: HashSet<Date> = [d(5, 1)].into_iter().collect();
/// // Mon 29 Apr .. Fri 3 May with 1 May off
/// assert_eq!(count(d(4, 29), d(5, 3), &holidays).unwrap(), 4);
/// ```
pub fn count(start: Date, end: Date, holidays: &dyn Calendar) -> Result<u32> {
    holidays.business_days_between(start, end)
}

/// Apply half-day markers to a raw business-day count.
///
/// Each half-day endpoint subtracts 0.5.  With at least one marker the result
/// never drops below 0.5, even when `raw` is 0.
pub fn apply_half_days(raw: u32, start_half: HalfDay, end_half: HalfDay) -> Days {
    let markers = [start_half, end_half].iter().filter(|h| h.is_half()).count();
    if markers == 0 {
        return Days::from(raw);
    }
    (Days::from(raw) - 0.5 * markers as Days).max(0.5)
}

/// Count the days charged for `span`, optionally restricted to the inclusive
/// window `[first, last]`.
///
/// A half-day marker only applies at an endpoint that lies inside the window
/// and is a business day, so the counts of the pieces of a request split
/// across windows add up to the count of the whole request.  A same-day
/// `Medio Día` request always counts 0.5 when inside the window, whatever the
/// weekday, unless `settings` rejects weekend half days.
///
/// # Errors
/// * [`Error::InvalidRange`] when `span.end < span.start`.
/// * [`Error::HalfDayOnWeekend`] for a weekend half day under
///   [`HalfDayWeekendPolicy::Reject`].
pub fn request_days(
    span: &DaySpan,
    holidays: &dyn Calendar,
    window: Option<(Date, Date)>,
    settings: &Settings,
) -> Result<Days> {
    let invalid = || Error::InvalidRange {
        start: span.start.naive(),
        end: span.end.naive(),
    };
    if span.end < span.start {
        return Err(invalid());
    }

    let (first, last) = match window {
        Some((first, last)) => (span.start.max(first), span.end.min(last)),
        None => (span.start, span.end),
    };
    if last < first {
        return Ok(0.0);
    }

    if span.is_single_half_day() {
        let rejected = settings.half_day_on_weekend == HalfDayWeekendPolicy::Reject;
        if rejected && span.start.is_weekend() {
            return Err(Error::HalfDayOnWeekend {
                date: span.start.naive(),
            });
        }
        return Ok(0.5);
    }

    // A marker on a day that is not worked takes nothing off, so pieces of
    // a split request add up to the whole.
    let marker = |day: Date, kept: bool, half: HalfDay| {
        if kept && holidays.is_business_day(day) {
            half
        } else {
            HalfDay::Full
        }
    };
    let raw = count(first, last, holidays)?;
    let start_half = marker(span.start, first == span.start, span.start_half);
    let end_half = marker(span.end, last == span.end, span.end_half);
    Ok(apply_half_days(raw, start_half, end_half))
}
