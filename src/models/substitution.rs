//! Substitution plan models.
//!
//! Every lesson affected by an absence resolves to exactly one entry:
//! merged into another class, covered by a substitute, or cancelled.
//! Batch mode groups entries by school day; date mode wraps one day's
//! entries together with the day-off verdict for that date.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::slot::{SchoolDay, TimeSlot};

/// How an affected lesson was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubstitutionStatus {
    /// The class joins another class's lesson at the same slot.
    Merged,
    /// A free present teacher covers the lesson.
    Substituted,
    /// No cover was found; the lesson is cancelled.
    Cancelled,
}

impl fmt::Display for SubstitutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SubstitutionStatus::Merged => "merged",
            SubstitutionStatus::Substituted => "substituted",
            SubstitutionStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// One resolved absence: a lesson and what happens to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionEntry {
    /// School day of the affected lesson.
    pub day: SchoolDay,
    /// Slot of the affected lesson.
    pub slot: TimeSlot,
    /// Class of the affected lesson.
    pub class: String,
    /// Subject of the affected lesson.
    pub subject: String,
    /// The absent teacher.
    pub absent_teacher: String,
    /// Covering teacher, if any.
    pub substitute: Option<String>,
    /// Resolution outcome.
    pub status: SubstitutionStatus,
    /// Human-readable summary of the decision.
    pub description: String,
}

impl SubstitutionEntry {
    /// Creates a merged entry: `class` joins `other_class` under its teacher.
    pub fn merged(
        day: SchoolDay,
        slot: TimeSlot,
        class: impl Into<String>,
        subject: impl Into<String>,
        absent_teacher: impl Into<String>,
        covering_teacher: impl Into<String>,
        other_class: &str,
    ) -> Self {
        let class = class.into();
        let description = format!("Merged classes {class} and {other_class}");
        Self {
            day,
            slot,
            class,
            subject: subject.into(),
            absent_teacher: absent_teacher.into(),
            substitute: Some(covering_teacher.into()),
            status: SubstitutionStatus::Merged,
            description,
        }
    }

    /// Creates a substituted entry.
    pub fn substituted(
        day: SchoolDay,
        slot: TimeSlot,
        class: impl Into<String>,
        subject: impl Into<String>,
        absent_teacher: impl Into<String>,
        substitute: impl Into<String>,
    ) -> Self {
        let substitute = substitute.into();
        let description = format!("Covered by {substitute}");
        Self {
            day,
            slot,
            class: class.into(),
            subject: subject.into(),
            absent_teacher: absent_teacher.into(),
            substitute: Some(substitute),
            status: SubstitutionStatus::Substituted,
            description,
        }
    }

    /// Creates a cancelled entry.
    pub fn cancelled(
        day: SchoolDay,
        slot: TimeSlot,
        class: impl Into<String>,
        subject: impl Into<String>,
        absent_teacher: impl Into<String>,
    ) -> Self {
        Self {
            day,
            slot,
            class: class.into(),
            subject: subject.into(),
            absent_teacher: absent_teacher.into(),
            substitute: None,
            status: SubstitutionStatus::Cancelled,
            description: "Lesson cancelled".to_string(),
        }
    }
}

/// A week's substitution entries, grouped by school day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionPlan {
    /// Entries per day, in resolution order.
    pub days: BTreeMap<SchoolDay, Vec<SubstitutionEntry>>,
}

impl SubstitutionPlan {
    /// Creates a plan with an (empty) group for each given day.
    pub fn new(days: &[SchoolDay]) -> Self {
        Self {
            days: days.iter().map(|&d| (d, Vec::new())).collect(),
        }
    }

    /// Appends an entry under its day.
    pub fn add(&mut self, entry: SubstitutionEntry) {
        self.days.entry(entry.day).or_default().push(entry);
    }

    /// The entries for one day.
    pub fn entries_for(&self, day: SchoolDay) -> &[SubstitutionEntry] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total entry count across all days.
    pub fn total(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

/// The outcome of resolving one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateResolution {
    /// The target date.
    pub date: NaiveDate,
    /// Whether the date is a non-teaching day.
    pub day_off: bool,
    /// Holiday or weekend name when `day_off` is true.
    pub reason: Option<String>,
    /// Substitution entries for the date; empty on a day off.
    pub entries: Vec<SubstitutionEntry>,
}

impl DateResolution {
    /// Creates a day-off resolution.
    pub fn day_off(date: NaiveDate, reason: impl Into<String>) -> Self {
        Self {
            date,
            day_off: true,
            reason: Some(reason.into()),
            entries: Vec::new(),
        }
    }

    /// Creates a teaching-day resolution.
    pub fn school_day(date: NaiveDate, entries: Vec<SubstitutionEntry>) -> Self {
        Self {
            date,
            day_off: false,
            reason: None,
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot() -> TimeSlot {
        TimeSlot::parse("8:00-8:45").unwrap()
    }

    #[test]
    fn test_merged_entry() {
        let e = SubstitutionEntry::merged(
            SchoolDay::Monday,
            slot(),
            "1A",
            "Math",
            "Kowalski",
            "Nowak",
            "1B",
        );
        assert_eq!(e.status, SubstitutionStatus::Merged);
        assert_eq!(e.substitute.as_deref(), Some("Nowak"));
        assert_eq!(e.description, "Merged classes 1A and 1B");
    }

    #[test]
    fn test_substituted_entry() {
        let e = SubstitutionEntry::substituted(
            SchoolDay::Monday,
            slot(),
            "1A",
            "Math",
            "Kowalski",
            "Zieleniecki",
        );
        assert_eq!(e.status, SubstitutionStatus::Substituted);
        assert_eq!(e.substitute.as_deref(), Some("Zieleniecki"));
        assert_eq!(e.description, "Covered by Zieleniecki");
    }

    #[test]
    fn test_cancelled_entry() {
        let e = SubstitutionEntry::cancelled(SchoolDay::Monday, slot(), "1A", "Math", "Kowalski");
        assert_eq!(e.status, SubstitutionStatus::Cancelled);
        assert!(e.substitute.is_none());
        assert_eq!(e.description, "Lesson cancelled");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&SubstitutionStatus::Merged).unwrap();
        assert_eq!(json, "\"merged\"");
    }

    #[test]
    fn test_plan_grouping() {
        let mut plan = SubstitutionPlan::new(&SchoolDay::WEEK);
        plan.add(SubstitutionEntry::cancelled(
            SchoolDay::Tuesday,
            slot(),
            "1A",
            "Math",
            "Kowalski",
        ));
        plan.add(SubstitutionEntry::cancelled(
            SchoolDay::Tuesday,
            slot(),
            "1B",
            "Art",
            "Nowak",
        ));

        assert_eq!(plan.total(), 2);
        assert_eq!(plan.entries_for(SchoolDay::Tuesday).len(), 2);
        assert!(plan.entries_for(SchoolDay::Monday).is_empty());
    }

    #[test]
    fn test_date_resolution_factories() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        let off = DateResolution::day_off(date, "All Saints' Day");
        assert!(off.day_off);
        assert_eq!(off.reason.as_deref(), Some("All Saints' Day"));
        assert!(off.entries.is_empty());

        let working = DateResolution::school_day(date, Vec::new());
        assert!(!working.day_off);
        assert!(working.reason.is_none());
    }
}
