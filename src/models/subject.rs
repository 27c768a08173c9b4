//! Subject model and catalog.
//!
//! A subject carries its weekly hour quota, a per-day lesson cap, and the
//! classes and stages it applies to. The weekly quota feeds the builder's
//! lesson bag; the daily cap bounds how many of those hours may land on one
//! day.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A subject taught at the school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject name.
    pub name: String,
    /// Lessons per week for each eligible class.
    pub weekly_hours: u32,
    /// Maximum lessons of this subject per class per day.
    pub daily_cap: u32,
    /// Classes that take this subject.
    pub eligible_classes: Vec<String>,
    /// Stages whose teachers may teach this subject.
    pub eligible_stages: Vec<u8>,
}

impl Subject {
    /// Creates a subject with one weekly hour and a daily cap of one.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weekly_hours: 1,
            daily_cap: 1,
            eligible_classes: Vec::new(),
            eligible_stages: Vec::new(),
        }
    }

    /// Sets the weekly hour quota.
    pub fn with_weekly_hours(mut self, hours: u32) -> Self {
        self.weekly_hours = hours;
        self
    }

    /// Sets the per-day cap.
    pub fn with_daily_cap(mut self, cap: u32) -> Self {
        self.daily_cap = cap;
        self
    }

    /// Sets the eligible classes.
    pub fn for_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.eligible_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the eligible stages.
    pub fn for_stages(mut self, stages: impl IntoIterator<Item = u8>) -> Self {
        self.eligible_stages = stages.into_iter().collect();
        self
    }

    /// Whether a class takes this subject.
    pub fn applies_to(&self, class_name: &str) -> bool {
        self.eligible_classes.iter().any(|c| c == class_name)
    }
}

/// Read-only, name-indexed view over the subject list.
///
/// Iteration follows catalog order, which fixes the order in which subjects
/// are assigned and bagged.
#[derive(Debug)]
pub struct SubjectCatalog<'a> {
    subjects: &'a [Subject],
    by_name: HashMap<&'a str, usize>,
}

impl<'a> SubjectCatalog<'a> {
    /// Builds the catalog. First record wins on duplicate names.
    pub fn new(subjects: &'a [Subject]) -> Self {
        let mut by_name = HashMap::with_capacity(subjects.len());
        for (idx, subject) in subjects.iter().enumerate() {
            by_name.entry(subject.name.as_str()).or_insert(idx);
        }
        Self { subjects, by_name }
    }

    /// Looks a subject up by name.
    pub fn get(&self, name: &str) -> Option<&'a Subject> {
        self.by_name.get(name).map(|&idx| &self.subjects[idx])
    }

    /// All subjects, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Subject> + '_ {
        self.subjects.iter()
    }

    /// Number of subjects.
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}
