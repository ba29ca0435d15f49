use roster_core::entities::{Program, RequirementNode};
use roster_core::{RequirementGroup, parse_req_tree};
use serde::Deserialize;

use crate::cli::root_commands::RequirementsArgs;
use crate::commands::shared::input::read_json;
use crate::context::AppContext;
use crate::output::output;

/// A whole program payload or just its `req_tree`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TreeInput {
    Program(Box<Program>),
    Nodes(Vec<RequirementNode>),
}

impl TreeInput {
    fn groups(&self) -> Vec<RequirementGroup> {
        match self {
            Self::Program(program) => parse_req_tree(&program.req_tree),
            Self::Nodes(nodes) => parse_req_tree(nodes),
        }
    }
}

/// Handle `roster requirements`.
pub fn handle(args: &RequirementsArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let input: TreeInput = read_json(&args.tree, "requirement tree")?;
    output(&input.groups(), ctx)
}
