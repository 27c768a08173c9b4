//! Configuration snapshot for a generation run.
//!
//! The core never reads files; the host hands it one [`ScheduleConfig`]
//! holding every record the pipeline needs, plus the knobs the school can
//! tune (operating window, daily lesson limit, any-stage sentinels).
//! The config is treated as immutable for the duration of a run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calendar::SchoolCalendar;
use crate::models::{
    ClassRegistry, SchoolClass, SchoolDay, Subject, SubjectCatalog, Teacher, TeacherPool, TimeSlot,
};

/// Stage assumed for classes missing from the stage map.
pub const DEFAULT_STAGE: u8 = 1;

/// Default maximum lessons placed per class per day.
pub const DEFAULT_DAILY_LESSON_LIMIT: usize = 5;

/// Default operating window: 08:00 to 16:00, in minutes since midnight.
pub const DEFAULT_WINDOW: (u16, u16) = (480, 960);

/// Maps stages (grade bands) to the classes they contain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageMap {
    /// Stage id to class names.
    pub classes_by_stage: BTreeMap<u8, Vec<String>>,
}

impl StageMap {
    /// Creates an empty map; every class then defaults to [`DEFAULT_STAGE`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns classes to a stage.
    pub fn with_stage<I, S>(mut self, stage: u8, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes_by_stage
            .entry(stage)
            .or_default()
            .extend(classes.into_iter().map(Into::into));
        self
    }

    /// The stage of a class, or [`DEFAULT_STAGE`] when unmapped.
    pub fn stage_of(&self, class_name: &str) -> u8 {
        self.classes_by_stage
            .iter()
            .find(|(_, classes)| classes.iter().any(|c| c == class_name))
            .map(|(&stage, _)| stage)
            .unwrap_or(DEFAULT_STAGE)
    }
}

/// Everything one generation or resolution run needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Classes, in registry order.
    pub classes: Vec<SchoolClass>,
    /// Teachers, in registry order, with the current presence snapshot.
    pub teachers: Vec<Teacher>,
    /// Subjects, in catalog order.
    pub subjects: Vec<Subject>,
    /// Stage membership of classes.
    pub stages: StageMap,
    /// Holiday calendar.
    pub calendar: SchoolCalendar,
    /// Configured lesson slots, in slot order (unfiltered).
    pub slots: Vec<TimeSlot>,
    /// School days to build timetables for.
    pub days: Vec<SchoolDay>,
    /// Maximum lessons placed per class per day.
    pub daily_lesson_limit: usize,
    /// Teacher stages treated as matching any class stage.
    pub any_stage: Vec<u8>,
    /// Operating window `(start, end)` in minutes; slots outside it are
    /// ignored.
    pub window: (u16, u16),
}

impl ScheduleConfig {
    /// Creates a config with the standard defaults: the six default slots,
    /// the Monday-Friday week, a five-lesson daily limit, stages 0 and 1 as
    /// any-stage sentinels, and an 08:00-16:00 window.
    pub fn new(classes: Vec<SchoolClass>, teachers: Vec<Teacher>, subjects: Vec<Subject>) -> Self {
        Self {
            classes,
            teachers,
            subjects,
            stages: StageMap::new(),
            calendar: SchoolCalendar::new(),
            slots: TimeSlot::default_slots(),
            days: SchoolDay::WEEK.to_vec(),
            daily_lesson_limit: DEFAULT_DAILY_LESSON_LIMIT,
            any_stage: vec![0, 1],
            window: DEFAULT_WINDOW,
        }
    }

    /// Sets the stage map.
    pub fn with_stages(mut self, stages: StageMap) -> Self {
        self.stages = stages;
        self
    }

    /// Sets the holiday calendar.
    pub fn with_calendar(mut self, calendar: SchoolCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Sets the slot list.
    pub fn with_slots(mut self, slots: Vec<TimeSlot>) -> Self {
        self.slots = slots;
        self
    }

    /// Sets the school days.
    pub fn with_days(mut self, days: Vec<SchoolDay>) -> Self {
        self.days = days;
        self
    }

    /// Sets the daily lesson limit.
    pub fn with_daily_lesson_limit(mut self, limit: usize) -> Self {
        self.daily_lesson_limit = limit;
        self
    }

    /// Sets the any-stage sentinel values.
    pub fn with_any_stage(mut self, stages: impl IntoIterator<Item = u8>) -> Self {
        self.any_stage = stages.into_iter().collect();
        self
    }

    /// Sets the operating window (minutes since midnight).
    pub fn with_window(mut self, start_min: u16, end_min: u16) -> Self {
        self.window = (start_min, end_min);
        self
    }

    /// The configured slots that fit the operating window, in slot order.
    pub fn teaching_slots(&self) -> Vec<TimeSlot> {
        self.slots
            .iter()
            .copied()
            .filter(|s| s.within(self.window.0, self.window.1))
            .collect()
    }

    /// Class registry view.
    pub fn class_registry(&self) -> ClassRegistry<'_> {
        ClassRegistry::new(&self.classes)
    }

    /// Teacher pool view.
    pub fn teacher_pool(&self) -> TeacherPool<'_> {
        TeacherPool::new(&self.teachers)
    }

    /// Subject catalog view.
    pub fn subject_catalog(&self) -> SubjectCatalog<'_> {
        SubjectCatalog::new(&self.subjects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_map() {
        let stages = StageMap::new()
            .with_stage(1, ["1A", "1B"])
            .with_stage(2, ["4A"]);

        assert_eq!(stages.stage_of("1B"), 1);
        assert_eq!(stages.stage_of("4A"), 2);
        // Unmapped classes fall back to the default stage
        assert_eq!(stages.stage_of("7C"), DEFAULT_STAGE);
    }

    #[test]
    fn test_config_defaults() {
        let config = ScheduleConfig::new(Vec::new(), Vec::new(), Vec::new());

        assert_eq!(config.slots.len(), 6);
        assert_eq!(config.days, SchoolDay::WEEK.to_vec());
        assert_eq!(config.daily_lesson_limit, DEFAULT_DAILY_LESSON_LIMIT);
        assert_eq!(config.any_stage, vec![0, 1]);
        assert_eq!(config.window, DEFAULT_WINDOW);
    }

    #[test]
    fn test_teaching_slots_filters_window() {
        let slots = vec![
            TimeSlot::parse("7:10-7:55").unwrap(),
            TimeSlot::parse("8:00-8:45").unwrap(),
            TimeSlot::parse("15:30-16:15").unwrap(),
        ];
        let config =
            ScheduleConfig::new(Vec::new(), Vec::new(), Vec::new()).with_slots(slots.clone());

        let teaching = config.teaching_slots();
        assert_eq!(teaching, vec![slots[1]]);
    }

    #[test]
    fn test_views_share_order() {
        let config = ScheduleConfig::new(
            vec![
                SchoolClass::new("1A", "Kowalski"),
                SchoolClass::new("2A", "Nowak"),
            ],
            vec![Teacher::new("Kowalski", "Math")],
            vec![Subject::new("Math").for_classes(["1A", "2A"])],
        );

        assert_eq!(config.class_registry().len(), 2);
        assert_eq!(config.teacher_pool().len(), 1);
        assert_eq!(config.subject_catalog().len(), 1);
    }
}
