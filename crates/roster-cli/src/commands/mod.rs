pub mod best_enrollment;
pub mod best_run;
pub mod dashboard;
pub mod dispatch;
pub mod program;
pub mod requirements;
pub mod schema;
pub mod shared;
pub mod status;
