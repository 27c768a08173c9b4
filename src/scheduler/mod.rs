//! Timetable generation pipeline.
//!
//! Runs the full build in three steps: validate the configuration, fix a
//! subject→teacher assignment per class, then expand quotas into weekly
//! grids against a shared conflict tracker.
//!
//! # Determinism
//!
//! All randomness flows through one caller-supplied `Rng`. Every scan that
//! feeds it runs in input order (registry, catalog, teacher list), so one
//! seed always reproduces the same timetable set, warning list included.
//!
//! # Failure model
//!
//! A malformed configuration aborts the run before any artifact exists.
//! Recoverable conditions are carried as [`Warning`]s on the outcome: a
//! `(class, subject)` pair nobody can teach ([`WarningKind::AssignmentGap`])
//! or a weekly quota that outgrows the week ([`WarningKind::SlotOverflow`]).

mod assign;
mod builder;
mod conflict;

pub use assign::{SubjectAssignments, TeacherAssigner};
pub use builder::TimetableBuilder;
pub use conflict::ConflictTracker;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScheduleConfig;
use crate::models::TimetableSet;
use crate::validation::{validate_config, ConfigurationError};

/// Categories of recoverable generation problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// No eligible present teacher for a `(class, subject)` pair.
    AssignmentGap,
    /// A weekly quota did not fit the week; excess occurrences dropped.
    SlotOverflow,
}

/// A recoverable problem encountered while generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Warning category.
    pub kind: WarningKind,
    /// Human-readable description.
    pub message: String,
}

impl Warning {
    /// Creates an assignment-gap warning.
    pub fn assignment_gap(class: &str, subject: &str) -> Self {
        Self {
            kind: WarningKind::AssignmentGap,
            message: format!("no eligible teacher for {subject} in class {class}"),
        }
    }

    /// Creates a slot-overflow warning.
    pub fn slot_overflow(class: &str, dropped: usize) -> Self {
        Self {
            kind: WarningKind::SlotOverflow,
            message: format!("class {class}: {dropped} lesson(s) did not fit the week and were dropped"),
        }
    }
}

/// The complete result of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// One full-grid timetable per class, in registry order.
    pub timetables: TimetableSet,
    /// The subject→teacher choices the grids were built from.
    pub assignments: SubjectAssignments,
    /// Recoverable problems encountered along the way.
    pub warnings: Vec<Warning>,
}

/// Generates the full timetable set for a configuration snapshot.
///
/// Either every class gets a complete grid, or the configuration is
/// rejected before anything is produced.
pub fn generate_timetables<R: Rng>(
    config: &ScheduleConfig,
    rng: &mut R,
) -> Result<GenerationOutcome, ConfigurationError> {
    validate_config(config).map_err(ConfigurationError)?;

    let (assignments, mut warnings) = TeacherAssigner::new(config).assign(rng);

    let builder = TimetableBuilder::new(config, &assignments);
    let mut tracker = ConflictTracker::new();
    let (timetables, build_warnings) = builder.build_all(&mut tracker, rng);
    warnings.extend(build_warnings);

    debug!(
        classes = timetables.len(),
        warnings = warnings.len(),
        "timetable generation finished"
    );

    Ok(GenerationOutcome {
        timetables,
        assignments,
        warnings,
    })
}

/// Generates with a fixed seed; identical seeds yield identical outcomes.
pub fn generate_with_seed(
    config: &ScheduleConfig,
    seed: u64,
) -> Result<GenerationOutcome, ConfigurationError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate_timetables(config, &mut rng)
}
