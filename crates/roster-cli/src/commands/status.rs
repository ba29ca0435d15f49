use roster_core::entities::{Course, Enrollment};
use roster_core::enums::EnrollmentStatus;
use roster_core::{get_enrollment_status, select_best_enrollment};
use serde::Serialize;

use crate::cli::root_commands::CourseEnrollmentsArgs;
use crate::commands::shared::input::read_json;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StatusResponse {
    course_id: u64,
    enrollment_id: Option<u64>,
    status: EnrollmentStatus,
}

fn classify(course: &Course, enrollments: &[Enrollment]) -> StatusResponse {
    let enrollment = select_best_enrollment(course, enrollments);
    StatusResponse {
        course_id: course.id,
        enrollment_id: enrollment.map(|enrollment| enrollment.id),
        status: get_enrollment_status(enrollment),
    }
}

/// Handle `roster status`.
pub fn handle(args: &CourseEnrollmentsArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let course: Course = read_json(&args.course, "course")?;
    let enrollments: Vec<Enrollment> = read_json(&args.enrollments, "enrollments")?;
    output(&classify(&course, &enrollments), ctx)
}
