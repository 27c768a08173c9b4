//! Teacher model and lookup pool.
//!
//! A teacher teaches exactly one subject in one room and belongs to one
//! stage (grade band). Presence is a per-run snapshot: an absent teacher
//! carries a reason and is skipped by assignment, then handled by the
//! substitution resolver.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A teacher record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher name.
    pub name: String,
    /// The one subject this teacher teaches.
    pub subject: String,
    /// Default classroom.
    pub room: String,
    /// Stage (grade band) the teacher belongs to.
    pub stage: u8,
    /// Whether the teacher is present for this run.
    pub present: bool,
    /// Absence reason; only meaningful when `present` is false.
    pub absence_reason: Option<String>,
    /// Whether the teacher may take a homeroom lesson.
    pub can_be_homeroom: bool,
}

impl Teacher {
    /// Creates a present teacher of the given subject.
    pub fn new(name: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            room: String::new(),
            stage: 1,
            present: true,
            absence_reason: None,
            can_be_homeroom: false,
        }
    }

    /// Sets the classroom.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Sets the stage.
    pub fn with_stage(mut self, stage: u8) -> Self {
        self.stage = stage;
        self
    }

    /// Marks the teacher absent with a reason.
    pub fn absent(mut self, reason: impl Into<String>) -> Self {
        self.present = false;
        self.absence_reason = Some(reason.into());
        self
    }

    /// Marks the teacher as homeroom-eligible.
    pub fn homeroom_capable(mut self) -> Self {
        self.can_be_homeroom = true;
        self
    }
}

/// Read-only, name-indexed view over a teacher list.
///
/// Iteration always follows the input order, so every scan over the pool is
/// deterministic.
#[derive(Debug)]
pub struct TeacherPool<'a> {
    teachers: &'a [Teacher],
    by_name: HashMap<&'a str, usize>,
}

impl<'a> TeacherPool<'a> {
    /// Builds the pool. On duplicate names the first record wins;
    /// validation rejects duplicates before the pipeline runs.
    pub fn new(teachers: &'a [Teacher]) -> Self {
        let mut by_name = HashMap::with_capacity(teachers.len());
        for (idx, teacher) in teachers.iter().enumerate() {
            by_name.entry(teacher.name.as_str()).or_insert(idx);
        }
        Self { teachers, by_name }
    }

    /// Looks a teacher up by name.
    pub fn get(&self, name: &str) -> Option<&'a Teacher> {
        self.by_name.get(name).map(|&idx| &self.teachers[idx])
    }

    /// All teachers, in input order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Teacher> + '_ {
        self.teachers.iter()
    }

    /// Present teachers, in input order.
    pub fn present(&self) -> impl Iterator<Item = &'a Teacher> + '_ {
        self.teachers.iter().filter(|t| t.present)
    }

    /// Absent teachers, in input order.
    pub fn absent(&self) -> impl Iterator<Item = &'a Teacher> + '_ {
        self.teachers.iter().filter(|t| !t.present)
    }

    /// Number of teachers in the pool.
    pub fn len(&self) -> usize {
        self.teachers.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty()
    }
}
