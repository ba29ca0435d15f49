use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
///
/// Every `FILE` argument takes a path to a JSON document, or `-` for stdin.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Pick the run a course card should show.
    BestRun(BestRunArgs),
    /// Pick the enrollment that represents a course.
    BestEnrollment(CourseEnrollmentsArgs),
    /// Classify a learner's status in a course.
    Status(CourseEnrollmentsArgs),
    /// Build and order dashboard cards for a list of courses.
    Dashboard(DashboardArgs),
    /// Order a program's courses and report requirement progress.
    Program(ProgramArgs),
    /// Flatten a requirement tree into requirement groups.
    Requirements(RequirementsArgs),
    /// Print the JSON Schema of an entity type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct BestRunArgs {
    /// Course JSON (with `courseruns`).
    #[arg(long, value_name = "FILE")]
    pub course: PathBuf,
    /// Fail instead of printing `null` when no run qualifies.
    #[arg(long)]
    pub require: bool,
}

#[derive(Clone, Debug, Args)]
pub struct CourseEnrollmentsArgs {
    /// Course JSON (with `courseruns`).
    #[arg(long, value_name = "FILE")]
    pub course: PathBuf,
    /// JSON array of the learner's enrollments.
    #[arg(long, value_name = "FILE")]
    pub enrollments: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// JSON array of courses.
    #[arg(long, value_name = "FILE")]
    pub courses: PathBuf,
    /// JSON array of the learner's enrollments.
    #[arg(long, value_name = "FILE")]
    pub enrollments: PathBuf,
    /// Reference time (RFC 3339) for started/ended buckets. Defaults to now.
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ProgramArgs {
    /// Program JSON (with `courses` and `req_tree`).
    #[arg(long, value_name = "FILE")]
    pub program: PathBuf,
    /// JSON array of the program's courses.
    #[arg(long, value_name = "FILE")]
    pub courses: PathBuf,
    /// JSON array of the learner's enrollments.
    #[arg(long, value_name = "FILE")]
    pub enrollments: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct RequirementsArgs {
    /// Program JSON, or a bare JSON array of requirement nodes.
    #[arg(long, value_name = "FILE")]
    pub tree: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Entity type, e.g. `course`, `course-run`, `enrollment`, `program`.
    pub type_name: String,
}
