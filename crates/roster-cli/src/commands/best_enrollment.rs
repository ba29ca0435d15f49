use roster_core::entities::{Course, Enrollment};
use roster_core::select_best_enrollment;

use crate::cli::root_commands::CourseEnrollmentsArgs;
use crate::commands::shared::input::read_json;
use crate::context::AppContext;
use crate::output::output;

/// Handle `roster best-enrollment`.
pub fn handle(args: &CourseEnrollmentsArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let course: Course = read_json(&args.course, "course")?;
    let enrollments: Vec<Enrollment> = read_json(&args.enrollments, "enrollments")?;
    output(&select_best_enrollment(&course, &enrollments), ctx)
}
