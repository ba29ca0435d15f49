use roster_core::entities::{Course, DashboardCourse, Enrollment, Program};
use roster_core::requirements::{RequirementProgress, requirement_progress};
use roster_core::{dashboard_courses, program_requirements, sort_program_courses};
use serde::Serialize;

use crate::cli::root_commands::ProgramArgs;
use crate::commands::dashboard::scoped_enrollments;
use crate::commands::shared::input::read_json;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ProgramResponse {
    program_id: u64,
    title: String,
    courses: Vec<DashboardCourse>,
    requirements: Vec<RequirementProgress>,
}

fn build(
    program: &Program,
    courses: &[Course],
    enrollments: &[Enrollment],
    contract_id: Option<u64>,
) -> ProgramResponse {
    let cards = sort_program_courses(
        program,
        dashboard_courses(courses, enrollments, contract_id),
    );
    let requirements = requirement_progress(&program_requirements(program), &cards);

    ProgramResponse {
        program_id: program.id,
        title: program.title.clone(),
        courses: cards,
        requirements,
    }
}

/// Handle `roster program`.
pub fn handle(args: &ProgramArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let program: Program = read_json(&args.program, "program")?;
    let courses: Vec<Course> = read_json(&args.courses, "courses")?;
    let enrollments = scoped_enrollments(
        read_json(&args.enrollments, "enrollments")?,
        ctx.contract_id,
    );

    output(&build(&program, &courses, &enrollments, ctx.contract_id), ctx)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn program_view_orders_courses_and_counts_progress() {
        let program: Program = serde_json::from_value(json!({
            "id": 1,
            "title": "Data",
            "courses": [1, 2, 3],
            "req_tree": [
                {"id": 1, "data": {"node_type": "operator", "operator": "all_of"},
                 "children": [
                    {"id": 2, "data": {"node_type": "course", "course": 1}},
                    {"id": 3, "data": {"node_type": "course", "course": 2}}
                 ]},
                {"id": 4, "data": {"node_type": "operator", "operator": "min_number_of",
                                   "operator_value": "1", "elective_flag": true},
                 "children": [{"id": 5, "data": {"node_type": "course", "course": 3}}]}
            ]
        }))
        .unwrap();
        let courses: Vec<Course> = (1..=3)
            .map(|id| {
                serde_json::from_value(json!({
                    "id": id,
                    "title": format!("Course {id}"),
                    "courseruns": [{"id": id * 10, "is_enrollable": true}]
                }))
                .unwrap()
            })
            .collect();
        let enrollments: Vec<Enrollment> = serde_json::from_value(json!([
            {"id": 100, "run": {"id": 10}, "grades": [{"grade": 0.9, "passed": true}]},
            {"id": 300, "run": {"id": 30}, "grades": []}
        ]))
        .unwrap();

        let response = build(&program, &courses, &enrollments, None);
        let order: Vec<u64> = response.courses.iter().map(|course| course.id).collect();
        assert_eq!(order, vec![3, 1, 2]);
        assert_eq!(response.requirements.len(), 2);
        assert_eq!(response.requirements[0].completed, 1);
        assert_eq!(response.requirements[0].required, 2);
        assert_eq!(response.requirements[1].title, "Elective Courses");
        assert_eq!(response.requirements[1].completed, 0);
    }
}
