//! Weekly timetable grids.
//!
//! A timetable is a full grid: every configured day holds exactly one entry
//! per configured slot, empty entries included. The full-grid shape is what
//! lets the substitution resolver ask "is this teacher free at this slot"
//! across all classes without re-deriving occupancy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::slot::{SchoolDay, TimeSlot};

/// Subject name used for the inserted homeroom lesson.
pub const HOMEROOM_SUBJECT: &str = "Homeroom";

/// A scheduled lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Subject taught.
    pub subject: String,
    /// Teacher giving the lesson.
    pub teacher: String,
    /// Room the lesson takes place in.
    pub room: String,
}

impl Lesson {
    /// Creates a lesson.
    pub fn new(
        subject: impl Into<String>,
        teacher: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            teacher: teacher.into(),
            room: room.into(),
        }
    }
}

/// One cell of the weekly grid: a slot, possibly holding a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotEntry {
    /// The time slot this entry covers.
    pub slot: TimeSlot,
    /// The lesson at this slot, or `None` for a free period.
    pub lesson: Option<Lesson>,
}

/// A class's weekly timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// The class this timetable belongs to.
    pub class: String,
    /// Per-day slot entries, one per configured slot, in slot order.
    pub days: BTreeMap<SchoolDay, Vec<SlotEntry>>,
}

impl Timetable {
    /// Creates an empty full grid for the given days and slots.
    pub fn new(class: impl Into<String>, days: &[SchoolDay], slots: &[TimeSlot]) -> Self {
        let days = days
            .iter()
            .map(|&day| {
                let entries = slots
                    .iter()
                    .map(|&slot| SlotEntry { slot, lesson: None })
                    .collect();
                (day, entries)
            })
            .collect();
        Self {
            class: class.into(),
            days,
        }
    }

    /// The entries for a day, in slot order. Empty for unconfigured days.
    pub fn day(&self, day: SchoolDay) -> &[SlotEntry] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Places a lesson at `(day, slot index)`, replacing any previous one.
    pub fn set_lesson(&mut self, day: SchoolDay, slot_idx: usize, lesson: Lesson) {
        if let Some(entries) = self.days.get_mut(&day) {
            if let Some(entry) = entries.get_mut(slot_idx) {
                entry.lesson = Some(lesson);
            }
        }
    }

    /// Number of non-empty entries across the week.
    pub fn lesson_count(&self) -> usize {
        self.days
            .values()
            .flat_map(|entries| entries.iter())
            .filter(|e| e.lesson.is_some())
            .count()
    }

    /// Number of lessons of a subject across the week.
    pub fn weekly_count(&self, subject: &str) -> usize {
        self.days
            .values()
            .flat_map(|entries| entries.iter())
            .filter(|e| e.lesson.as_ref().is_some_and(|l| l.subject == subject))
            .count()
    }

    /// Number of lessons of a subject on one day.
    pub fn daily_count(&self, day: SchoolDay, subject: &str) -> usize {
        self.day(day)
            .iter()
            .filter(|e| e.lesson.as_ref().is_some_and(|l| l.subject == subject))
            .count()
    }
}

/// The timetables of all classes, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableSet {
    timetables: Vec<Timetable>,
}

impl TimetableSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a class timetable.
    pub fn push(&mut self, timetable: Timetable) {
        self.timetables.push(timetable);
    }

    /// The timetable of a class, if present.
    pub fn for_class(&self, class: &str) -> Option<&Timetable> {
        self.timetables.iter().find(|t| t.class == class)
    }

    /// All timetables, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Timetable> {
        self.timetables.iter()
    }

    /// Number of timetables.
    pub fn len(&self) -> usize {
        self.timetables.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.timetables.is_empty()
    }
}

impl FromIterator<Timetable> for TimetableSet {
    fn from_iter<I: IntoIterator<Item = Timetable>>(iter: I) -> Self {
        Self {
            timetables: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Timetable {
        let slots = TimeSlot::default_slots();
        let mut table = Timetable::new("1A", &SchoolDay::WEEK, &slots);
        table.set_lesson(
            SchoolDay::Monday,
            0,
            Lesson::new("Math", "Kowalski", "101"),
        );
        table.set_lesson(
            SchoolDay::Monday,
            1,
            Lesson::new("Math", "Kowalski", "101"),
        );
        table.set_lesson(
            SchoolDay::Tuesday,
            0,
            Lesson::new("Geography", "Nowak", "102"),
        );
        table
    }

    #[test]
    fn test_full_grid_shape() {
        let slots = TimeSlot::default_slots();
        let table = Timetable::new("1A", &SchoolDay::WEEK, &slots);

        assert_eq!(table.days.len(), 5);
        for day in SchoolDay::WEEK {
            let entries = table.day(day);
            assert_eq!(entries.len(), slots.len());
            assert!(entries.iter().all(|e| e.lesson.is_none()));
        }
    }

    #[test]
    fn test_day_entries_in_slot_order() {
        let table = grid();
        let monday = table.day(SchoolDay::Monday);
        for pair in monday.windows(2) {
            assert!(pair[0].slot.start_min < pair[1].slot.start_min);
        }
    }

    #[test]
    fn test_counts() {
        let table = grid();
        assert_eq!(table.lesson_count(), 3);
        assert_eq!(table.weekly_count("Math"), 2);
        assert_eq!(table.weekly_count("Geography"), 1);
        assert_eq!(table.daily_count(SchoolDay::Monday, "Math"), 2);
        assert_eq!(table.daily_count(SchoolDay::Tuesday, "Math"), 0);
    }

    #[test]
    fn test_set_lesson_ignores_out_of_range() {
        let mut table = grid();
        table.set_lesson(SchoolDay::Friday, 99, Lesson::new("Art", "X", "1"));
        assert_eq!(table.lesson_count(), 3);
    }

    #[test]
    fn test_timetable_set_lookup() {
        let slots = TimeSlot::default_slots();
        let set: TimetableSet = ["1A", "1B"]
            .iter()
            .map(|name| Timetable::new(*name, &SchoolDay::WEEK, &slots))
            .collect();

        assert_eq!(set.len(), 2);
        assert!(set.for_class("1B").is_some());
        assert!(set.for_class("2A").is_none());
    }
}
