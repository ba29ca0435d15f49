use roster_core::entities::Course;
use roster_core::get_best_run;
use roster_core::selection::require_best_run;

use crate::cli::root_commands::BestRunArgs;
use crate::commands::shared::input::read_json;
use crate::context::AppContext;
use crate::output::output;

/// Handle `roster best-run`.
pub fn handle(args: &BestRunArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let course: Course = read_json(&args.course, "course")?;

    if args.require {
        return output(require_best_run(&course, ctx.contract_id)?, ctx);
    }

    let run = get_best_run(&course, ctx.contract_id);
    if run.is_none() {
        tracing::info!(course_id = course.id, contract = ?ctx.contract_id, "no enrollable run");
    }
    output(&run, ctx)
}
