//! # roster-core
//!
//! Course run, enrollment and requirement-tree decision logic for Roster.
//!
//! This crate provides the pure functions the learner dashboards are built on:
//! - Entity structs mirroring the platform's course, run, enrollment and program payloads
//! - Run selection (`get_best_run`) with optional B2B contract scoping
//! - Enrollment selection (`select_best_enrollment`) and status classification
//! - Dashboard card transformation and ordering
//! - Requirement tree parsing into requirement groups, plus a fixture builder
//!
//! Nothing here performs I/O. "Not found" is `None`, and the current time is
//! always passed in by the caller.

pub mod dashboard;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod requirements;
pub mod selection;
pub mod status;

pub use dashboard::{
    dashboard_course, dashboard_courses, sort_dashboard_courses, sort_enrollments,
    sort_program_courses,
};
pub use requirements::{RequirementGroup, parse_req_tree, program_requirements};
pub use selection::{get_best_run, select_best_enrollment};
pub use status::get_enrollment_status;
