//! School calendar: holidays and weekends.
//!
//! Resolves whether a calendar date is a teaching day. A holiday is either
//! a single date or an inclusive date range; Saturdays and Sundays are
//! always off, configured or not.
//!
//! # Precedence
//! Holidays are checked before the weekend rule, so a break spanning a
//! Saturday reports the break's name rather than "Weekend".

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Reason reported for unconfigured Saturdays and Sundays.
pub const WEEKEND_REASON: &str = "Weekend";

/// How far `next_school_day` searches before giving up.
const SEARCH_HORIZON_DAYS: u32 = 366;

/// The date(s) a named holiday covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HolidaySpan {
    /// A single day off.
    Single(NaiveDate),
    /// An inclusive `[start, end]` break.
    Range(NaiveDate, NaiveDate),
}

impl HolidaySpan {
    /// Whether the span covers a date.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            HolidaySpan::Single(d) => d == date,
            HolidaySpan::Range(start, end) => start <= date && date <= end,
        }
    }
}

/// Named holidays for a school year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolCalendar {
    /// Holiday name to covered date(s).
    pub holidays: BTreeMap<String, HolidaySpan>,
}

impl SchoolCalendar {
    /// Creates a calendar with no holidays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single-day holiday.
    pub fn with_holiday(mut self, name: impl Into<String>, date: NaiveDate) -> Self {
        self.holidays.insert(name.into(), HolidaySpan::Single(date));
        self
    }

    /// Adds an inclusive holiday range.
    pub fn with_break(mut self, name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        self.holidays
            .insert(name.into(), HolidaySpan::Range(start, end));
        self
    }

    /// The name of the holiday covering a date, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&str> {
        self.holidays
            .iter()
            .find(|(_, span)| span.contains(date))
            .map(|(name, _)| name.as_str())
    }

    /// Why a date is off, or `None` on a teaching day.
    ///
    /// Holidays take precedence; otherwise Saturday and Sunday report
    /// [`WEEKEND_REASON`].
    pub fn day_off(&self, date: NaiveDate) -> Option<String> {
        if let Some(name) = self.holiday_on(date) {
            return Some(name.to_string());
        }
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => Some(WEEKEND_REASON.to_string()),
            _ => None,
        }
    }

    /// Whether a date is a teaching day.
    pub fn is_school_day(&self, date: NaiveDate) -> bool {
        self.day_off(date).is_none()
    }

    /// The first teaching day strictly after `after`.
    ///
    /// Returns `None` if no teaching day exists within the search horizon
    /// of one year.
    pub fn next_school_day(&self, after: NaiveDate) -> Option<NaiveDate> {
        let mut date = after;
        for _ in 0..SEARCH_HORIZON_DAYS {
            date = date.succ_opt()?;
            if self.is_school_day(date) {
                return Some(date);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar() -> SchoolCalendar {
        SchoolCalendar::new()
            .with_holiday("All Saints' Day", date(2025, 11, 1))
            .with_break("Winter break", date(2025, 12, 22), date(2026, 1, 2))
    }

    #[test]
    fn test_single_holiday() {
        let cal = calendar();
        assert_eq!(cal.holiday_on(date(2025, 11, 1)), Some("All Saints' Day"));
        assert_eq!(cal.holiday_on(date(2025, 11, 2)), None);
    }

    #[test]
    fn test_range_is_inclusive() {
        let cal = calendar();
        assert_eq!(cal.holiday_on(date(2025, 12, 22)), Some("Winter break"));
        assert_eq!(cal.holiday_on(date(2025, 12, 28)), Some("Winter break"));
        assert_eq!(cal.holiday_on(date(2026, 1, 2)), Some("Winter break"));
        assert_eq!(cal.holiday_on(date(2026, 1, 3)), None);
    }

    #[test]
    fn test_weekend_without_configuration() {
        let cal = SchoolCalendar::new();
        // 2025-10-04 is a Saturday, 2025-10-05 a Sunday
        assert_eq!(cal.day_off(date(2025, 10, 4)).as_deref(), Some(WEEKEND_REASON));
        assert_eq!(cal.day_off(date(2025, 10, 5)).as_deref(), Some(WEEKEND_REASON));
        assert_eq!(cal.day_off(date(2025, 10, 6)), None);
    }

    #[test]
    fn test_holiday_precedes_weekend() {
        let cal = calendar();
        // 2025-12-27 is a Saturday inside the winter break
        assert_eq!(cal.day_off(date(2025, 12, 27)).as_deref(), Some("Winter break"));
    }

    #[test]
    fn test_is_school_day() {
        let cal = calendar();
        assert!(cal.is_school_day(date(2025, 11, 3)));
        assert!(!cal.is_school_day(date(2025, 11, 1)));
    }

    #[test]
    fn test_next_school_day_skips_weekend() {
        let cal = SchoolCalendar::new();
        // Friday 2025-10-03 → Monday 2025-10-06
        assert_eq!(cal.next_school_day(date(2025, 10, 3)), Some(date(2025, 10, 6)));
    }

    #[test]
    fn test_next_school_day_skips_break() {
        let cal = calendar();
        // Friday 2025-12-19 → weekend, then the break through Jan 2 (a
        // Friday), then the weekend again → Monday 2026-01-05
        assert_eq!(cal.next_school_day(date(2025, 12, 19)), Some(date(2026, 1, 5)));
    }

    #[test]
    fn test_holiday_span_serde_shapes() {
        let single = serde_json::to_string(&HolidaySpan::Single(date(2025, 11, 1))).unwrap();
        assert_eq!(single, "\"2025-11-01\"");

        let range =
            serde_json::to_string(&HolidaySpan::Range(date(2025, 12, 22), date(2026, 1, 2)))
                .unwrap();
        assert_eq!(range, "[\"2025-12-22\",\"2026-01-02\"]");

        let parsed: HolidaySpan = serde_json::from_str("[\"2025-12-22\",\"2026-01-02\"]").unwrap();
        assert_eq!(
            parsed,
            HolidaySpan::Range(date(2025, 12, 22), date(2026, 1, 2))
        );
    }
}
