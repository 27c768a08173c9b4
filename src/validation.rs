//! Input validation for a generation run.
//!
//! Checks structural integrity of the configuration before any scheduling
//! happens. Detects:
//! - Missing required inputs (no classes, subjects, teachers, days, or
//!   usable slots)
//! - Duplicate names
//! - Malformed slots
//!
//! Validation failures are fatal: the pipeline aborts before producing any
//! artifact. Recoverable conditions (a subject nobody can teach, a quota
//! that outgrows the week) are not validation errors — they surface as
//! warnings on the generation outcome instead.

use std::collections::HashSet;

use thiserror::Error;

use crate::config::ScheduleConfig;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required input collection is empty.
    MissingInput,
    /// Two records share the same name.
    DuplicateName,
    /// A slot does not describe a valid interval.
    InvalidSlot,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Fatal configuration error: the run produced nothing.
#[derive(Debug, Error)]
#[error("invalid configuration: {} problem(s) found", .0.len())]
pub struct ConfigurationError(pub Vec<ValidationError>);

impl ConfigurationError {
    /// The individual validation failures.
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }
}

/// Validates a configuration snapshot.
///
/// Checks:
/// 1. Classes, teachers, subjects, and school days are all non-empty
/// 2. Every slot has `end > start`
/// 3. At least one slot fits the operating window
/// 4. No duplicate class, teacher, or subject names
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &ScheduleConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.classes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingInput,
            "no classes configured",
        ));
    }
    if config.teachers.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingInput,
            "no teachers configured",
        ));
    }
    if config.subjects.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingInput,
            "no subjects configured",
        ));
    }
    if config.days.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingInput,
            "no school days configured",
        ));
    }

    for slot in &config.slots {
        if slot.end_min <= slot.start_min {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSlot,
                format!("slot {slot} ends before it starts"),
            ));
        }
    }

    if !config.slots.is_empty() && config.teaching_slots().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingInput,
            "no slot fits the operating window",
        ));
    } else if config.slots.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingInput,
            "no slots configured",
        ));
    }

    let mut class_names = HashSet::new();
    for class in &config.classes {
        if !class_names.insert(class.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("duplicate class name: {}", class.name),
            ));
        }
    }

    let mut teacher_names = HashSet::new();
    for teacher in &config.teachers {
        if !teacher_names.insert(teacher.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("duplicate teacher name: {}", teacher.name),
            ));
        }
    }

    let mut subject_names = HashSet::new();
    for subject in &config.subjects {
        if !subject_names.insert(subject.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("duplicate subject name: {}", subject.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SchoolClass, Subject, Teacher, TimeSlot};

    fn valid_config() -> ScheduleConfig {
        ScheduleConfig::new(
            vec![SchoolClass::new("1A", "Kowalski")],
            vec![Teacher::new("Kowalski", "Math")],
            vec![Subject::new("Math").for_classes(["1A"])],
        )
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_missing_classes() {
        let mut config = valid_config();
        config.classes.clear();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingInput && e.message.contains("classes")));
    }

    #[test]
    fn test_missing_teachers_and_subjects() {
        let mut config = valid_config();
        config.teachers.clear();
        config.subjects.clear();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_duplicate_teacher_name() {
        let mut config = valid_config();
        config.teachers.push(Teacher::new("Kowalski", "Physics"));

        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateName && e.message.contains("Kowalski")));
    }

    #[test]
    fn test_invalid_slot() {
        let mut config = valid_config();
        config.slots.push(TimeSlot::new(600, 600));

        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidSlot));
    }

    #[test]
    fn test_no_slot_in_window() {
        let mut config = valid_config();
        config.slots = vec![TimeSlot::parse("17:00-17:45").unwrap()];

        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingInput
                && e.message.contains("operating window")));
    }

    #[test]
    fn test_configuration_error_display() {
        let mut config = valid_config();
        config.classes.clear();

        let errors = validate_config(&config).unwrap_err();
        let fatal = ConfigurationError(errors);
        assert!(fatal.to_string().contains("invalid configuration"));
        assert!(!fatal.errors().is_empty());
    }
}
