//! School days and lesson slots.
//!
//! A timetable week runs Monday through Friday. Each day shares one fixed,
//! ordered sequence of lesson slots; slots are stored as minutes since
//! midnight and filtered to the school's operating window before use.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// A teaching day of the school week.
///
/// Ordering follows the week (Monday first), which also fixes the order of
/// grid construction and plan grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SchoolDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl SchoolDay {
    /// The full school week in order.
    pub const WEEK: [SchoolDay; 5] = [
        SchoolDay::Monday,
        SchoolDay::Tuesday,
        SchoolDay::Wednesday,
        SchoolDay::Thursday,
        SchoolDay::Friday,
    ];

    /// Maps a calendar weekday to a school day.
    ///
    /// Returns `None` for Saturday and Sunday.
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Mon => Some(SchoolDay::Monday),
            Weekday::Tue => Some(SchoolDay::Tuesday),
            Weekday::Wed => Some(SchoolDay::Wednesday),
            Weekday::Thu => Some(SchoolDay::Thursday),
            Weekday::Fri => Some(SchoolDay::Friday),
            Weekday::Sat | Weekday::Sun => None,
        }
    }

    /// English day name.
    pub fn label(&self) -> &'static str {
        match self {
            SchoolDay::Monday => "Monday",
            SchoolDay::Tuesday => "Tuesday",
            SchoolDay::Wednesday => "Wednesday",
            SchoolDay::Thursday => "Thursday",
            SchoolDay::Friday => "Friday",
        }
    }
}

impl fmt::Display for SchoolDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A lesson slot: a (start, end) pair in minutes since midnight.
///
/// Slots are closed intervals as written on a timetable ("8:00-8:45");
/// ordering and identity are positional, so two classes at slot index `i`
/// always meet at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Start of the lesson (minutes since midnight).
    pub start_min: u16,
    /// End of the lesson (minutes since midnight).
    pub end_min: u16,
}

impl TimeSlot {
    /// Creates a slot from start/end minutes.
    pub fn new(start_min: u16, end_min: u16) -> Self {
        Self { start_min, end_min }
    }

    /// Parses a slot from `"H:MM-H:MM"` notation.
    ///
    /// Whitespace around the dash is tolerated. Returns `None` on any
    /// malformed component.
    pub fn parse(text: &str) -> Option<Self> {
        let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let (start, end) = cleaned.split_once('-')?;
        Some(Self {
            start_min: parse_clock(start)?,
            end_min: parse_clock(end)?,
        })
    }

    /// Lesson length in minutes.
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.end_min.saturating_sub(self.start_min)
    }

    /// Whether the slot lies entirely inside an operating window.
    ///
    /// The start must fall in `[window_start, window_end)` and the end in
    /// `(window_start, window_end]`.
    pub fn within(&self, window_start: u16, window_end: u16) -> bool {
        window_start <= self.start_min
            && self.start_min < window_end
            && window_start < self.end_min
            && self.end_min <= window_end
    }

    /// The standard six-slot school morning (08:00 to 13:20, 45-minute
    /// lessons with 10-minute breaks).
    pub fn default_slots() -> Vec<TimeSlot> {
        [
            "8:00-8:45",
            "8:55-9:40",
            "9:50-10:35",
            "10:45-11:30",
            "11:40-12:25",
            "12:35-13:20",
        ]
        .iter()
        .filter_map(|s| TimeSlot::parse(s))
        .collect()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start_min / 60,
            self.start_min % 60,
            self.end_min / 60,
            self.end_min % 60
        )
    }
}

/// Parses `"H:MM"` into minutes since midnight.
fn parse_clock(text: &str) -> Option<u16> {
    let (h, m) = text.split_once(':')?;
    let hours: u16 = h.parse().ok()?;
    let minutes: u16 = m.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}
