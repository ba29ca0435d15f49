use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext) -> anyhow::Result<()> {
    match command {
        Commands::BestRun(args) => commands::best_run::handle(args, ctx),
        Commands::BestEnrollment(args) => commands::best_enrollment::handle(args, ctx),
        Commands::Status(args) => commands::status::handle(args, ctx),
        Commands::Dashboard(args) => commands::dashboard::handle(args, ctx),
        Commands::Program(args) => commands::program::handle(args, ctx),
        Commands::Requirements(args) => commands::requirements::handle(args, ctx),
        Commands::Schema(args) => commands::schema::handle(args, ctx),
    }
}
