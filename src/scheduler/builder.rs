//! Weekly grid construction.
//!
//! # Algorithm
//!
//! Per class:
//! 1. Expand the class's assigned subjects into a bag of occurrence tags,
//!    one per weekly quota hour, and shuffle it.
//! 2. For each school day, sample `min(slot count, daily limit)` slot
//!    positions and re-sort them into slot order.
//! 3. Fill sampled slots from the front of the bag. A tag is skipped (the
//!    search moves forward through the bag) while its subject has hit its
//!    per-day cap or its teacher is already committed at that slot in
//!    another class; if no tag qualifies the slot stays empty.
//! 4. After placement, try to insert one homeroom lesson: days in random
//!    order, empty slots within the day in random order, first slot where
//!    the homeroom teacher is free wins.
//!
//! Tags still in the bag after the last day are dropped and reported as a
//! `SlotOverflow` warning.
//!
//! Classes are built in registry order against one shared
//! [`ConflictTracker`], so a later class can never double-book a teacher
//! committed by an earlier one.

use std::collections::HashMap;

use rand::seq::{index, SliceRandom};
use rand::Rng;
use tracing::{debug, warn};

use super::assign::SubjectAssignments;
use super::conflict::ConflictTracker;
use super::Warning;
use crate::config::ScheduleConfig;
use crate::models::{
    Lesson, SchoolClass, SchoolDay, TeacherPool, TimeSlot, Timetable, TimetableSet,
    HOMEROOM_SUBJECT,
};

/// Builds full-week timetable grids from a fixed assignment map.
#[derive(Debug)]
pub struct TimetableBuilder<'a> {
    config: &'a ScheduleConfig,
    assignments: &'a SubjectAssignments,
}

impl<'a> TimetableBuilder<'a> {
    /// Creates a builder over a configuration and its assignment map.
    pub fn new(config: &'a ScheduleConfig, assignments: &'a SubjectAssignments) -> Self {
        Self {
            config,
            assignments,
        }
    }

    /// Builds every class's timetable, in registry order.
    pub fn build_all<R: Rng>(
        &self,
        tracker: &mut ConflictTracker,
        rng: &mut R,
    ) -> (TimetableSet, Vec<Warning>) {
        let slots = self.config.teaching_slots();
        let pool = self.config.teacher_pool();
        let mut set = TimetableSet::new();
        let mut warnings = Vec::new();

        for class in self.config.class_registry().iter() {
            let table = self.build_class(class, &slots, &pool, tracker, &mut warnings, rng);
            set.push(table);
        }

        (set, warnings)
    }

    fn build_class<R: Rng>(
        &self,
        class: &SchoolClass,
        slots: &[TimeSlot],
        pool: &TeacherPool<'_>,
        tracker: &mut ConflictTracker,
        warnings: &mut Vec<Warning>,
        rng: &mut R,
    ) -> Timetable {
        let catalog = self.config.subject_catalog();
        let mut table = Timetable::new(&class.name, &self.config.days, slots);

        // One tag per quota hour, across all assigned subjects.
        let mut bag: Vec<String> = Vec::new();
        for (subject, _teacher) in self.assignments.for_class(&class.name) {
            let hours = catalog.get(subject).map_or(1, |s| s.weekly_hours);
            bag.extend(std::iter::repeat_n(subject.clone(), hours as usize));
        }
        bag.shuffle(rng);

        let per_day = slots.len().min(self.config.daily_lesson_limit);

        for &day in &self.config.days {
            if bag.is_empty() {
                break;
            }

            let mut chosen = index::sample(rng, slots.len(), per_day).into_vec();
            chosen.sort_unstable();

            let mut placed_today: HashMap<String, u32> = HashMap::new();

            for slot_idx in chosen {
                if bag.is_empty() {
                    break;
                }

                let pos = bag.iter().position(|subject| {
                    let cap = catalog.get(subject).map_or(1, |s| s.daily_cap);
                    if placed_today.get(subject).copied().unwrap_or(0) >= cap {
                        return false;
                    }
                    self.assignments
                        .teacher_for(&class.name, subject)
                        .is_some_and(|teacher| tracker.is_free(teacher, day, slot_idx))
                });
                let Some(pos) = pos else {
                    continue;
                };

                let subject = bag.remove(pos);
                let Some(teacher) = self.assignments.teacher_for(&class.name, &subject) else {
                    continue;
                };
                let room = pool.get(teacher).map(|t| t.room.clone()).unwrap_or_default();

                *placed_today.entry(subject.clone()).or_insert(0) += 1;
                tracker.commit(teacher, day, slot_idx);
                let lesson = Lesson::new(subject.as_str(), teacher, room);
                table.set_lesson(day, slot_idx, lesson);
            }
        }

        if !bag.is_empty() {
            warn!(
                class = %class.name,
                dropped = bag.len(),
                "weekly quota exceeds slot capacity"
            );
            warnings.push(Warning::slot_overflow(&class.name, bag.len()));
        }

        self.insert_homeroom(class, &mut table, pool, tracker, rng);

        table
    }

    /// Inserts at most one homeroom lesson for the class.
    ///
    /// Requires the configured homeroom teacher to exist, be present, and
    /// be homeroom-eligible; otherwise the class simply gets none.
    fn insert_homeroom<R: Rng>(
        &self,
        class: &SchoolClass,
        table: &mut Timetable,
        pool: &TeacherPool<'_>,
        tracker: &mut ConflictTracker,
        rng: &mut R,
    ) {
        let Some(teacher) = pool.get(&class.homeroom_teacher) else {
            return;
        };
        if !teacher.present || !teacher.can_be_homeroom {
            return;
        }

        let mut day_order: Vec<SchoolDay> = self.config.days.clone();
        day_order.shuffle(rng);

        for day in day_order {
            let mut empty_slots: Vec<usize> = table
                .day(day)
                .iter()
                .enumerate()
                .filter(|(_, entry)| entry.lesson.is_none())
                .map(|(idx, _)| idx)
                .collect();
            empty_slots.shuffle(rng);

            for slot_idx in empty_slots {
                if tracker.is_free(&teacher.name, day, slot_idx) {
                    tracker.commit(&teacher.name, day, slot_idx);
                    table.set_lesson(
                        day,
                        slot_idx,
                        Lesson::new(HOMEROOM_SUBJECT, &teacher.name, teacher.room.clone()),
                    );
                    debug!(class = %class.name, %day, "homeroom lesson inserted");
                    return;
                }
            }
        }
    }
}
