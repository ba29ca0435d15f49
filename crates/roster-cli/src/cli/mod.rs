use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `roster` binary.
#[derive(Debug, Parser)]
#[command(
    name = "roster",
    version,
    about = "Roster - course run, enrollment and requirement logic over API payloads"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `output.format` from config)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Restrict run selection to this B2B contract (defaults to `scope.contract_id`)
    #[arg(long, global = true)]
    pub contract: Option<u64>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            contract: self.contract,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "roster",
            "--format",
            "table",
            "--contract",
            "12",
            "--verbose",
            "best-run",
            "--course",
            "course.json",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Table));
        assert_eq!(cli.contract, Some(12));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::BestRun(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "roster",
            "requirements",
            "--tree",
            "tree.json",
            "--format",
            "raw",
            "--quiet",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Requirements(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["roster", "--format", "xml", "schema", "course"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn dashboard_requires_inputs() {
        let parsed = Cli::try_parse_from(["roster", "dashboard", "--courses", "c.json"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn dashboard_accepts_now_override() {
        let cli = Cli::try_parse_from([
            "roster",
            "dashboard",
            "--courses",
            "c.json",
            "--enrollments",
            "e.json",
            "--now",
            "2025-03-01T00:00:00Z",
        ])
        .expect("cli should parse");
        let Commands::Dashboard(args) = cli.command else {
            panic!("expected dashboard");
        };
        assert_eq!(args.now.as_deref(), Some("2025-03-01T00:00:00Z"));
    }
}
