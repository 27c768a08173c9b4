//! Per-class teacher assignment.
//!
//! For every class and every subject that class takes, fixes the identity
//! of one present teacher. The result is reused unchanged by the builder
//! for the whole week; this step knows nothing about time slots.
//!
//! # Eligibility
//! A teacher is a candidate for a `(class, subject)` pair when they teach
//! the subject, are present, and pass the stage rule: their stage is among
//! the subject's eligible stages, equals the class's stage, or is one of
//! the configured any-stage sentinels. Ties are broken by a uniform seeded
//! choice.

use std::collections::BTreeMap;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::Warning;
use crate::config::ScheduleConfig;
use crate::models::{Subject, Teacher};

/// The fixed subject→teacher choice per class, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectAssignments {
    by_class: BTreeMap<String, Vec<(String, String)>>,
}

impl SubjectAssignments {
    /// The `(subject, teacher)` pairs assigned to a class, catalog order.
    pub fn for_class(&self, class: &str) -> &[(String, String)] {
        self.by_class.get(class).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The teacher assigned to a `(class, subject)` pair, if any.
    pub fn teacher_for(&self, class: &str, subject: &str) -> Option<&str> {
        self.for_class(class)
            .iter()
            .find(|(s, _)| s == subject)
            .map(|(_, t)| t.as_str())
    }

    fn assign(&mut self, class: &str, subject: &str, teacher: &str) {
        self.by_class
            .entry(class.to_string())
            .or_default()
            .push((subject.to_string(), teacher.to_string()));
    }
}

/// Picks one present teacher per `(class, eligible subject)` pair.
#[derive(Debug)]
pub struct TeacherAssigner<'a> {
    config: &'a ScheduleConfig,
}

impl<'a> TeacherAssigner<'a> {
    /// Creates an assigner over a configuration snapshot.
    pub fn new(config: &'a ScheduleConfig) -> Self {
        Self { config }
    }

    /// Computes the assignment map.
    ///
    /// Pairs with no eligible present teacher are skipped and reported as
    /// [`Warning`]s; the class simply gets no lessons of that subject.
    pub fn assign<R: Rng>(&self, rng: &mut R) -> (SubjectAssignments, Vec<Warning>) {
        let registry = self.config.class_registry();
        let catalog = self.config.subject_catalog();
        let pool = self.config.teacher_pool();

        let mut assignments = SubjectAssignments::default();
        let mut warnings = Vec::new();

        for class in registry.iter() {
            let class_stage = self.config.stages.stage_of(&class.name);

            for subject in catalog.iter() {
                if !subject.applies_to(&class.name) {
                    continue;
                }

                let candidates: Vec<&Teacher> = pool
                    .present()
                    .filter(|t| self.eligible(t, subject, class_stage))
                    .collect();

                match candidates.choose(rng) {
                    Some(teacher) => {
                        assignments.assign(&class.name, &subject.name, &teacher.name);
                    }
                    None => {
                        warn!(
                            class = %class.name,
                            subject = %subject.name,
                            stage = class_stage,
                            "no eligible teacher for subject"
                        );
                        warnings.push(Warning::assignment_gap(&class.name, &subject.name));
                    }
                }
            }
        }

        (assignments, warnings)
    }

    fn eligible(&self, teacher: &Teacher, subject: &Subject, class_stage: u8) -> bool {
        teacher.subject == subject.name
            && (subject.eligible_stages.contains(&teacher.stage)
                || teacher.stage == class_stage
                || self.config.any_stage.contains(&teacher.stage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StageMap;
    use crate::models::{SchoolClass, Subject, Teacher};
    use crate::scheduler::WarningKind;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn config_with(teachers: Vec<Teacher>) -> ScheduleConfig {
        ScheduleConfig::new(
            vec![SchoolClass::new("1A", "Kowalski")],
            teachers,
            vec![Subject::new("Math")
                .with_weekly_hours(4)
                .for_classes(["1A"])
                .for_stages([1])],
        )
    }

    #[test]
    fn test_assigns_present_teacher() {
        let config = config_with(vec![Teacher::new("Kowalski", "Math").with_stage(1)]);
        let assigner = TeacherAssigner::new(&config);
        let mut rng = SmallRng::seed_from_u64(42);

        let (assignments, warnings) = assigner.assign(&mut rng);
        assert_eq!(assignments.teacher_for("1A", "Math"), Some("Kowalski"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_skips_absent_teacher() {
        let config = config_with(vec![
            Teacher::new("Kowalski", "Math").with_stage(1).absent("sick"),
            Teacher::new("Nowak", "Math").with_stage(1),
        ]);
        let assigner = TeacherAssigner::new(&config);
        let mut rng = SmallRng::seed_from_u64(42);

        let (assignments, _) = assigner.assign(&mut rng);
        assert_eq!(assignments.teacher_for("1A", "Math"), Some("Nowak"));
    }

    #[test]
    fn test_stage_mismatch_is_rejected() {
        // Stage 3 teacher, stage-1 class, subject eligible for stage 1 only,
        // and 3 is not an any-stage sentinel.
        let config = config_with(vec![Teacher::new("Kowalski", "Math").with_stage(3)])
            .with_stages(StageMap::new().with_stage(1, ["1A"]));
        let assigner = TeacherAssigner::new(&config);
        let mut rng = SmallRng::seed_from_u64(42);

        let (assignments, warnings) = assigner.assign(&mut rng);
        assert_eq!(assignments.teacher_for("1A", "Math"), None);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::AssignmentGap);
    }

    #[test]
    fn test_any_stage_sentinel_matches() {
        let config = config_with(vec![Teacher::new("Kowalski", "Math").with_stage(0)])
            .with_stages(StageMap::new().with_stage(2, ["1A"]));
        let assigner = TeacherAssigner::new(&config);
        let mut rng = SmallRng::seed_from_u64(42);

        let (assignments, _) = assigner.assign(&mut rng);
        assert_eq!(assignments.teacher_for("1A", "Math"), Some("Kowalski"));
    }

    #[test]
    fn test_sentinel_is_configurable() {
        // Same teacher, but stage 0 removed from the sentinel list.
        let config = config_with(vec![Teacher::new("Kowalski", "Math").with_stage(0)])
            .with_stages(StageMap::new().with_stage(2, ["1A"]))
            .with_any_stage([]);
        let assigner = TeacherAssigner::new(&config);
        let mut rng = SmallRng::seed_from_u64(42);

        let (assignments, warnings) = assigner.assign(&mut rng);
        assert_eq!(assignments.teacher_for("1A", "Math"), None);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_wrong_subject_never_assigned() {
        let config = config_with(vec![Teacher::new("Nowak", "Geography").with_stage(1)]);
        let assigner = TeacherAssigner::new(&config);
        let mut rng = SmallRng::seed_from_u64(42);

        let (assignments, warnings) = assigner.assign(&mut rng);
        assert_eq!(assignments.teacher_for("1A", "Math"), None);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_choice_is_seed_deterministic() {
        let teachers: Vec<Teacher> = (0..8)
            .map(|i| Teacher::new(format!("T{i}"), "Math").with_stage(1))
            .collect();
        let config = config_with(teachers);
        let assigner = TeacherAssigner::new(&config);

        let (first, _) = assigner.assign(&mut SmallRng::seed_from_u64(7));
        let (second, _) = assigner.assign(&mut SmallRng::seed_from_u64(7));
        assert_eq!(first, second);
    }
}
