//! Entity structs for the learning platform payloads Roster consumes.
//!
//! Field names follow the REST API. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema validation.

mod course;
mod dashboard;
mod enrollment;
mod program;
mod requirement;

pub use course::{Course, CourseRun};
pub use dashboard::{DashboardCourse, DashboardEnrollment, DashboardRun};
pub use enrollment::{Certificate, Enrollment, EnrollmentRun, Grade};
pub use program::Program;
pub use requirement::{RequirementData, RequirementNode};
