use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::RequirementNode;

/// A program: an ordered set of courses plus the requirement tree that groups them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Program {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub readable_id: Option<String>,
    /// Course ids in program-declared order.
    #[serde(default)]
    pub courses: Vec<u64>,
    /// Top-level requirement nodes (operator nodes in well-formed data).
    #[serde(default)]
    pub req_tree: Vec<RequirementNode>,
}

impl Program {
    /// Position of `course_id` in the program-declared order.
    #[must_use]
    pub fn course_position(&self, course_id: u64) -> Option<usize> {
        self.courses.iter().position(|id| *id == course_id)
    }
}
