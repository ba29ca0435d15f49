use anyhow::bail;
use roster_core::entities::{
    Course, CourseRun, DashboardCourse, Enrollment, Program, RequirementNode,
};
use roster_core::requirements::{RequirementGroup, RequirementProgress};
use schemars::{Schema, schema_for};

use crate::cli::root_commands::SchemaArgs;
use crate::context::AppContext;
use crate::output::output;

const TYPES: [&str; 8] = [
    "course",
    "course-run",
    "enrollment",
    "program",
    "requirement-node",
    "dashboard-course",
    "requirement-group",
    "requirement-progress",
];

fn schema_for_name(name: &str) -> Option<Schema> {
    let schema = match name.replace('_', "-").as_str() {
        "course" => schema_for!(Course),
        "course-run" => schema_for!(CourseRun),
        "enrollment" => schema_for!(Enrollment),
        "program" => schema_for!(Program),
        "requirement-node" => schema_for!(RequirementNode),
        "dashboard-course" => schema_for!(DashboardCourse),
        "requirement-group" => schema_for!(RequirementGroup),
        "requirement-progress" => schema_for!(RequirementProgress),
        _ => return None,
    };
    Some(schema)
}

/// Handle `roster schema`.
pub fn handle(args: &SchemaArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let Some(schema) = schema_for_name(&args.type_name) else {
        bail!(
            "unknown schema type '{}' (expected one of: {})",
            args.type_name,
            TYPES.join(", ")
        );
    };
    output(&schema, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_type_has_a_schema() {
        for name in TYPES {
            assert!(schema_for_name(name).is_some(), "missing schema for {name}");
        }
    }

    #[test]
    fn underscores_are_accepted() {
        let schema = schema_for_name("course_run").unwrap();
        let value = serde_json::to_value(&schema).unwrap();
        assert!(value["properties"]["is_enrollable"].is_object());
    }

    #[test]
    fn unknown_type_is_none() {
        assert!(schema_for_name("transcript").is_none());
    }
}
