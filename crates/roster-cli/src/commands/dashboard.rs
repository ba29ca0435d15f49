use roster_core::entities::{Course, Enrollment};
use roster_core::selection::enrollments_for_contract;
use roster_core::{dashboard_courses, sort_dashboard_courses};

use crate::cli::root_commands::DashboardArgs;
use crate::commands::shared::input::read_json;
use crate::commands::shared::time::reference_time;
use crate::context::AppContext;
use crate::output::output;

/// Enrollments a dashboard should consider: all of them, or only the
/// contract's when the dashboard is scoped to one.
pub fn scoped_enrollments(
    enrollments: Vec<Enrollment>,
    contract_id: Option<u64>,
) -> Vec<Enrollment> {
    match contract_id {
        None => enrollments,
        Some(contract) => {
            let scoped: Vec<Enrollment> = enrollments_for_contract(&enrollments, contract)
                .into_iter()
                .cloned()
                .collect();
            tracing::debug!(
                contract,
                kept = scoped.len(),
                total = enrollments.len(),
                "scoped enrollments to contract"
            );
            scoped
        }
    }
}

/// Handle `roster dashboard`.
pub fn handle(args: &DashboardArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let now = reference_time(args.now.as_deref())?;
    let courses: Vec<Course> = read_json(&args.courses, "courses")?;
    let enrollments = scoped_enrollments(
        read_json(&args.enrollments, "enrollments")?,
        ctx.contract_id,
    );

    let cards = dashboard_courses(&courses, &enrollments, ctx.contract_id);
    output(&sort_dashboard_courses(cards, now), ctx)
}
