//! Requirement tree parsing.
//!
//! A program's requirement tree arrives as loosely typed [`RequirementNode`]s.
//! Each node is converted once into the typed [`Requirement`] sum; nodes that
//! do not fit (wrong `node_type`, non-numeric course id) are logged and
//! skipped instead of failing the whole tree.
//!
//! Only two levels are read: top-level operator nodes and their direct
//! course children. Anything nested deeper is ignored.

pub mod builder;

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{DashboardCourse, Program, RequirementNode};
use crate::enums::{EnrollmentStatus, NodeType, Operator};

pub const CORE_COURSES_TITLE: &str = "Core Courses";
pub const ELECTIVE_COURSES_TITLE: &str = "Elective Courses";

// ---------------------------------------------------------------------------
// Typed nodes
// ---------------------------------------------------------------------------

/// A requirement node with its kind resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    Operator(OperatorRequirement),
    Course(CourseRequirement),
}

/// "All of" / "minimum N of" a list of courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorRequirement {
    pub operator: Option<Operator>,
    pub operator_value: Option<String>,
    pub elective: bool,
    pub title: Option<String>,
    pub children: Vec<CourseRequirement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseRequirement {
    pub course_id: u64,
}

/// Why a wire node could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedNode {
    /// `program` nodes and unknown kinds carry no requirement of their own.
    UnsupportedNodeType(NodeType),
    /// A course node whose `course` field is missing or not a number.
    NonNumericCourse(Option<serde_json::Value>),
}

impl TryFrom<&RequirementNode> for CourseRequirement {
    type Error = MalformedNode;

    fn try_from(node: &RequirementNode) -> Result<Self, Self::Error> {
        if node.data.node_type != NodeType::Course {
            return Err(MalformedNode::UnsupportedNodeType(node.data.node_type));
        }
        node.data
            .course
            .as_ref()
            .and_then(serde_json::Value::as_u64)
            .map(|course_id| Self { course_id })
            .ok_or_else(|| MalformedNode::NonNumericCourse(node.data.course.clone()))
    }
}

impl TryFrom<&RequirementNode> for OperatorRequirement {
    type Error = MalformedNode;

    fn try_from(node: &RequirementNode) -> Result<Self, Self::Error> {
        if node.data.node_type != NodeType::Operator {
            return Err(MalformedNode::UnsupportedNodeType(node.data.node_type));
        }

        let children = node
            .children
            .iter()
            .filter_map(|child| match CourseRequirement::try_from(child) {
                Ok(course) => Some(course),
                Err(reason) => {
                    tracing::warn!(
                        parent = ?node.id,
                        child = ?child.id,
                        ?reason,
                        "skipping requirement child that is not a numeric course"
                    );
                    None
                }
            })
            .collect();

        Ok(Self {
            operator: node.data.operator,
            operator_value: node.data.operator_value.clone(),
            elective: node.data.elective_flag.unwrap_or(false),
            title: node.data.title.clone(),
            children,
        })
    }
}

impl TryFrom<&RequirementNode> for Requirement {
    type Error = MalformedNode;

    fn try_from(node: &RequirementNode) -> Result<Self, Self::Error> {
        match node.data.node_type {
            NodeType::Operator => OperatorRequirement::try_from(node).map(Self::Operator),
            NodeType::Course => CourseRequirement::try_from(node).map(Self::Course),
            other => Err(MalformedNode::UnsupportedNodeType(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

/// A flattened requirement: a titled list of courses and how many are needed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RequirementGroup {
    pub elective: bool,
    pub title: String,
    pub course_ids: Vec<u64>,
    pub required_course_count: usize,
}

impl From<OperatorRequirement> for RequirementGroup {
    fn from(requirement: OperatorRequirement) -> Self {
        let course_ids: Vec<u64> = requirement
            .children
            .iter()
            .map(|course| course.course_id)
            .collect();

        let required_course_count = match requirement.operator {
            Some(Operator::MinNumberOf) => {
                minimum_count(requirement.operator_value.as_deref()).unwrap_or_else(|| {
                    tracing::warn!(
                        operator_value = ?requirement.operator_value,
                        "min_number_of without a usable operator_value; requiring every course"
                    );
                    course_ids.len()
                })
            }
            _ => course_ids.len(),
        };

        let title = requirement
            .title
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| {
                if requirement.elective {
                    ELECTIVE_COURSES_TITLE.to_string()
                } else {
                    CORE_COURSES_TITLE.to_string()
                }
            });

        Self {
            elective: requirement.elective,
            title,
            course_ids,
            required_course_count,
        }
    }
}

/// Positive integer value of `operator_value`, if it has one.
fn minimum_count(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|count| *count > 0)
}

/// Flatten top-level requirement nodes into requirement groups, in input order.
///
/// Non-operator top-level nodes are dropped with a warning.
#[must_use]
pub fn parse_req_tree(nodes: &[RequirementNode]) -> Vec<RequirementGroup> {
    nodes
        .iter()
        .filter_map(|node| match OperatorRequirement::try_from(node) {
            Ok(requirement) => Some(RequirementGroup::from(requirement)),
            Err(reason) => {
                tracing::warn!(node = ?node.id, ?reason, "skipping non-operator requirement node");
                None
            }
        })
        .collect()
}

/// Requirement groups of a program.
#[must_use]
pub fn program_requirements(program: &Program) -> Vec<RequirementGroup> {
    parse_req_tree(&program.req_tree)
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// How far a learner is through one requirement group.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RequirementProgress {
    pub title: String,
    pub elective: bool,
    /// Courses in the group the learner has completed.
    pub completed: usize,
    /// Courses the group requires.
    pub required: usize,
    /// Courses listed in the group.
    pub total: usize,
}

impl RequirementProgress {
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        self.completed >= self.required
    }
}

/// Count completed courses per group using dashboard records.
#[must_use]
pub fn requirement_progress(
    groups: &[RequirementGroup],
    courses: &[DashboardCourse],
) -> Vec<RequirementProgress> {
    let completed: HashSet<u64> = courses
        .iter()
        .filter(|course| course.status() == EnrollmentStatus::Completed)
        .map(|course| course.id)
        .collect();

    groups
        .iter()
        .map(|group| RequirementProgress {
            title: group.title.clone(),
            elective: group.elective,
            completed: group
                .course_ids
                .iter()
                .filter(|id| completed.contains(*id))
                .count(),
            required: group.required_course_count,
            total: group.course_ids.len(),
        })
        .collect()
}
