//! School timetable generation and substitution planning.
//!
//! Assigns teachers and rooms to weekly class timetables and, given a set
//! of absent teachers, computes a substitution plan: merge the affected
//! class into a parallel lesson, assign a free substitute, or cancel.
//!
//! The crate is a pure computational core. It receives one in-memory
//! [`config::ScheduleConfig`] snapshot, consumes a caller-supplied seeded
//! random source, and returns plain result objects — it never touches a
//! file, a window, or a subprocess. Loading configuration and rendering
//! results belong to the host application.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Teacher`, `Subject`, `SchoolClass`,
//!   `TimeSlot`, `Timetable`, `SubstitutionEntry`, and their lookup views
//! - **`calendar`**: Holiday and weekend resolution for calendar dates
//! - **`config`**: The immutable configuration snapshot a run consumes
//! - **`validation`**: Structural input checks; fatal `ConfigurationError`
//! - **`scheduler`**: The generation pipeline — teacher assignment, grid
//!   construction, conflict tracking
//! - **`resolver`**: Absence resolution into a `SubstitutionPlan`
//!
//! # Data flow
//!
//! ```text
//! ScheduleConfig ──▶ TeacherAssigner ──▶ TimetableBuilder ──▶ TimetableSet
//!                                          (ConflictTracker)      │
//! absence snapshot + SchoolCalendar ──▶ SubstitutionResolver ◀────┘
//!                                            │
//!                                            ▼
//!                                     SubstitutionPlan
//! ```
//!
//! # Example
//!
//! ```
//! use schoolplan::config::ScheduleConfig;
//! use schoolplan::models::{SchoolClass, Subject, Teacher};
//! use schoolplan::scheduler::generate_with_seed;
//!
//! let config = ScheduleConfig::new(
//!     vec![SchoolClass::new("1A", "Kowalski")],
//!     vec![Teacher::new("Kowalski", "Math").with_room("101")],
//!     vec![Subject::new("Math").with_weekly_hours(4).with_daily_cap(2).for_classes(["1A"])],
//! );
//!
//! let outcome = generate_with_seed(&config, 42).unwrap();
//! assert_eq!(outcome.timetables.for_class("1A").unwrap().weekly_count("Math"), 4);
//! ```

pub mod calendar;
pub mod config;
pub mod models;
pub mod resolver;
pub mod scheduler;
pub mod validation;
