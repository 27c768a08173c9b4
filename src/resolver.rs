//! Absence resolution: merge, substitute, or cancel.
//!
//! For every lesson whose teacher is absent, the resolver applies a strict,
//! ordered policy — the first rule that matches wins:
//!
//! 1. **Merge**: another class has a staffed lesson at the identical slot,
//!    its teacher is present, and the two classes' year groups differ by at
//!    most one. The classes are joined under that teacher. The lessons need
//!    not share a subject; any supervision suffices.
//! 2. **Substitute**: the first present teacher (registry order) who is not
//!    the absentee and is free at the slot takes over. The pick is
//!    committed to the conflict tracker before the next absence is
//!    examined, so two absences at the same slot never receive the same
//!    substitute.
//! 3. **Cancel**: nothing worked; the lesson is called off.
//!
//! Absences are processed in a fixed order (absentee list, then class
//! registry, then slot order), so identical inputs always produce the
//! identical plan. The resolver never mutates the timetables it reads.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::config::ScheduleConfig;
use crate::models::{
    year_group, DateResolution, Lesson, SchoolDay, SubstitutionEntry, SubstitutionPlan, Teacher,
    TimeSlot, TimetableSet,
};
use crate::scheduler::ConflictTracker;

/// Resolves teacher absences against a finished timetable set.
#[derive(Debug)]
pub struct SubstitutionResolver<'a> {
    config: &'a ScheduleConfig,
    timetables: &'a TimetableSet,
}

impl<'a> SubstitutionResolver<'a> {
    /// Creates a resolver over a configuration snapshot and its timetables.
    pub fn new(config: &'a ScheduleConfig, timetables: &'a TimetableSet) -> Self {
        Self { config, timetables }
    }

    /// Resolves every configured school day (batch mode).
    pub fn resolve_batch(&self) -> SubstitutionPlan {
        let mut tracker = ConflictTracker::from_timetables(self.timetables);
        let mut plan = SubstitutionPlan::new(&self.config.days);

        for &day in &self.config.days {
            for entry in self.resolve_day(day, &mut tracker) {
                plan.add(entry);
            }
        }

        debug!(total = plan.total(), "batch substitution plan resolved");
        plan
    }

    /// Resolves a single calendar date (next-teaching-day mode).
    ///
    /// Consults the calendar first: on a weekend or holiday the whole day
    /// is reported off and no lesson is examined.
    pub fn resolve_date(&self, date: NaiveDate) -> DateResolution {
        if let Some(reason) = self.config.calendar.day_off(date) {
            debug!(%date, %reason, "target date is a day off");
            return DateResolution::day_off(date, reason);
        }

        let mut entries = Vec::new();
        if let Some(day) = SchoolDay::from_weekday(date.weekday()) {
            let mut tracker = ConflictTracker::from_timetables(self.timetables);
            entries = self.resolve_day(day, &mut tracker);
        }
        DateResolution::school_day(date, entries)
    }

    fn resolve_day(
        &self,
        day: SchoolDay,
        tracker: &mut ConflictTracker,
    ) -> Vec<SubstitutionEntry> {
        let pool = self.config.teacher_pool();
        let registry = self.config.class_registry();
        let mut out = Vec::new();

        for absentee in pool.absent() {
            for class in registry.iter() {
                let Some(table) = self.timetables.for_class(&class.name) else {
                    continue;
                };

                for (slot_idx, entry) in table.day(day).iter().enumerate() {
                    let Some(lesson) = &entry.lesson else {
                        continue;
                    };
                    if lesson.teacher != absentee.name {
                        continue;
                    }

                    let resolved = self
                        .try_merge(day, slot_idx, entry.slot, &class.name, lesson, absentee)
                        .or_else(|| {
                            self.find_substitute(
                                day,
                                slot_idx,
                                entry.slot,
                                &class.name,
                                lesson,
                                absentee,
                                tracker,
                            )
                        })
                        .unwrap_or_else(|| {
                            SubstitutionEntry::cancelled(
                                day,
                                entry.slot,
                                &class.name,
                                &lesson.subject,
                                &absentee.name,
                            )
                        });
                    out.push(resolved);
                }
            }
        }

        out
    }

    /// First merge candidate in registry order, if any.
    #[allow(clippy::too_many_arguments)]
    fn try_merge(
        &self,
        day: SchoolDay,
        slot_idx: usize,
        slot: TimeSlot,
        class_name: &str,
        lesson: &Lesson,
        absentee: &Teacher,
    ) -> Option<SubstitutionEntry> {
        let pool = self.config.teacher_pool();

        for other in self.config.class_registry().iter() {
            if other.name == class_name {
                continue;
            }
            let Some(other_entry) = self
                .timetables
                .for_class(&other.name)
                .and_then(|t| t.day(day).get(slot_idx))
            else {
                continue;
            };
            let Some(other_lesson) = &other_entry.lesson else {
                continue;
            };
            let Some(other_teacher) = pool.get(&other_lesson.teacher) else {
                continue;
            };
            if !other_teacher.present {
                continue;
            }
            // Year groups may differ by at most one; names without a
            // leading numeral don't block the merge.
            if let (Some(y1), Some(y2)) = (year_group(class_name), year_group(&other.name)) {
                if y1.abs_diff(y2) > 1 {
                    continue;
                }
            }

            return Some(SubstitutionEntry::merged(
                day,
                slot,
                class_name,
                &lesson.subject,
                &absentee.name,
                &other_teacher.name,
                &other.name,
            ));
        }

        None
    }

    /// First free present teacher in registry order, committed on success.
    #[allow(clippy::too_many_arguments)]
    fn find_substitute(
        &self,
        day: SchoolDay,
        slot_idx: usize,
        slot: TimeSlot,
        class_name: &str,
        lesson: &Lesson,
        absentee: &Teacher,
        tracker: &mut ConflictTracker,
    ) -> Option<SubstitutionEntry> {
        for candidate in self.config.teacher_pool().present() {
            if candidate.name == absentee.name {
                continue;
            }
            if !tracker.is_free(&candidate.name, day, slot_idx) {
                continue;
            }

            tracker.commit(&candidate.name, day, slot_idx);
            return Some(SubstitutionEntry::substituted(
                day,
                slot,
                class_name,
                &lesson.subject,
                &absentee.name,
                &candidate.name,
            ));
        }

        None
    }
}
