//! Cross-class teacher occupancy tracking.
//!
//! Records, for every teacher, the `(day, slot index)` pairs they are
//! already committed to, across all classes. The builder consults it while
//! placing lessons so one teacher never lands in two classes at the same
//! slot; the resolver rebuilds it from finished grids and layers
//! substitution commitments on top.
//!
//! Usage is transactional: query a slot immediately before committing it.
//! The pipeline processes classes and absences sequentially, so no locking
//! is involved.

use std::collections::{HashMap, HashSet};

use crate::models::{SchoolDay, TimetableSet};

/// Teacher occupancy across all classes.
#[derive(Debug, Clone, Default)]
pub struct ConflictTracker {
    busy: HashMap<String, HashSet<(SchoolDay, usize)>>,
}

impl ConflictTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstructs occupancy from a finished timetable set.
    pub fn from_timetables(timetables: &TimetableSet) -> Self {
        let mut tracker = Self::new();
        for table in timetables.iter() {
            for (&day, entries) in &table.days {
                for (slot_idx, entry) in entries.iter().enumerate() {
                    if let Some(lesson) = &entry.lesson {
                        tracker.commit(&lesson.teacher, day, slot_idx);
                    }
                }
            }
        }
        tracker
    }

    /// Whether a teacher is free at `(day, slot index)`.
    pub fn is_free(&self, teacher: &str, day: SchoolDay, slot_idx: usize) -> bool {
        self.busy
            .get(teacher)
            .is_none_or(|slots| !slots.contains(&(day, slot_idx)))
    }

    /// Commits a teacher to `(day, slot index)`.
    pub fn commit(&mut self, teacher: &str, day: SchoolDay, slot_idx: usize) {
        self.busy
            .entry(teacher.to_string())
            .or_default()
            .insert((day, slot_idx));
    }
}
