//! Class model and registry.
//!
//! Class names conventionally start with a year-group numeral ("1A", "2B");
//! the substitution resolver uses that numeral to bound which classes may be
//! merged. The roster is kept in input order and never deduplicated.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A school class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolClass {
    /// Unique class name, conventionally prefixed by a year-group numeral.
    pub name: String,
    /// Name of the homeroom teacher.
    pub homeroom_teacher: String,
    /// Student roster, ordered, duplicates preserved.
    pub roster: Vec<String>,
}

impl SchoolClass {
    /// Creates a class with an empty roster.
    pub fn new(name: impl Into<String>, homeroom_teacher: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            homeroom_teacher: homeroom_teacher.into(),
            roster: Vec::new(),
        }
    }

    /// Sets the roster.
    pub fn with_roster<I, S>(mut self, students: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roster = students.into_iter().map(Into::into).collect();
        self
    }

    /// The class's year group, if its name carries one.
    pub fn year(&self) -> Option<u32> {
        year_group(&self.name)
    }
}

/// Parses the year group from a class name: its leading decimal digits.
///
/// Returns `None` when the name does not start with a digit.
pub fn year_group(name: &str) -> Option<u32> {
    let digits: String = name.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// Read-only, name-indexed view over the class list.
///
/// Iteration follows registry order, which fixes timetable build order and
/// the merge scan order in the resolver.
#[derive(Debug)]
pub struct ClassRegistry<'a> {
    classes: &'a [SchoolClass],
    by_name: HashMap<&'a str, usize>,
}

impl<'a> ClassRegistry<'a> {
    /// Builds the registry. First record wins on duplicate names.
    pub fn new(classes: &'a [SchoolClass]) -> Self {
        let mut by_name = HashMap::with_capacity(classes.len());
        for (idx, class) in classes.iter().enumerate() {
            by_name.entry(class.name.as_str()).or_insert(idx);
        }
        Self { classes, by_name }
    }

    /// Looks a class up by name.
    pub fn get(&self, name: &str) -> Option<&'a SchoolClass> {
        self.by_name.get(name).map(|&idx| &self.classes[idx])
    }

    /// All classes, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &'a SchoolClass> + '_ {
        self.classes.iter()
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
