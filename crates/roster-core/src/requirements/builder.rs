//! Requirement tree builder for fixtures and tests.
//!
//! Nodes live in an arena owned by the builder and are addressed by
//! [`OperatorHandle`]s. Node numbering and the program id come from a
//! [`BuildContext`] passed to every node constructor, so nodes never point
//! back at the tree that owns them.
//!
//! ```
//! use roster_core::parse_req_tree;
//! use roster_core::requirements::builder::{OperatorSpec, RequirementTreeBuilder};
//!
//! let mut tree = RequirementTreeBuilder::new(1);
//! let core = tree.add_operator(OperatorSpec::all_of()).unwrap();
//! tree.add_course(core, 10).unwrap();
//! tree.add_course(core, 11).unwrap();
//!
//! let groups = parse_req_tree(&tree.serialize());
//! assert_eq!(groups[0].required_course_count, 2);
//! ```

use crate::entities::{RequirementData, RequirementNode};
use crate::enums::{NodeType, Operator};
use crate::errors::RequirementError;

/// Arguments for a new operator node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorSpec {
    pub operator: Operator,
    pub operator_value: Option<String>,
    pub elective_flag: bool,
    pub title: Option<String>,
}

impl OperatorSpec {
    #[must_use]
    pub const fn all_of() -> Self {
        Self {
            operator: Operator::AllOf,
            operator_value: None,
            elective_flag: false,
            title: None,
        }
    }

    #[must_use]
    pub fn min_number_of(value: impl Into<String>) -> Self {
        Self {
            operator: Operator::MinNumberOf,
            operator_value: Some(value.into()),
            elective_flag: false,
            title: None,
        }
    }

    #[must_use]
    pub fn elective(mut self) -> Self {
        self.elective_flag = true;
        self
    }

    #[must_use]
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn validate(&self) -> Result<(), RequirementError> {
        match self.operator {
            Operator::AllOf => Ok(()),
            Operator::Unknown => Err(RequirementError::UnsupportedOperator),
            Operator::MinNumberOf => {
                let raw = self
                    .operator_value
                    .as_deref()
                    .ok_or(RequirementError::MissingOperatorValue)?;
                match raw.trim().parse::<u32>() {
                    Ok(count) if count > 0 => Ok(()),
                    _ => Err(RequirementError::InvalidOperatorValue(raw.to_string())),
                }
            }
        }
    }
}

/// Index of an operator node inside one builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorHandle(usize);

/// Shared numbering and program id for the nodes of one tree.
#[derive(Debug, Clone)]
pub struct BuildContext {
    program_id: u64,
    next_id: u64,
}

impl BuildContext {
    #[must_use]
    pub const fn new(program_id: u64) -> Self {
        Self {
            program_id,
            next_id: 1,
        }
    }

    const fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn blank(&self, node_type: NodeType) -> RequirementData {
        RequirementData {
            node_type,
            operator: None,
            operator_value: None,
            program: Some(self.program_id),
            course: None,
            title: None,
            elective_flag: None,
        }
    }

    fn operator_node(&mut self, spec: OperatorSpec) -> ArenaNode {
        ArenaNode {
            id: self.take_id(),
            data: RequirementData {
                operator: Some(spec.operator),
                operator_value: spec.operator_value,
                title: spec.title,
                elective_flag: Some(spec.elective_flag),
                ..self.blank(NodeType::Operator)
            },
            children: Vec::new(),
        }
    }

    fn course_node(&mut self, course_id: u64) -> ArenaNode {
        ArenaNode {
            id: self.take_id(),
            data: RequirementData {
                course: Some(serde_json::Value::from(course_id)),
                ..self.blank(NodeType::Course)
            },
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
struct ArenaNode {
    id: u64,
    data: RequirementData,
    children: Vec<usize>,
}

/// Builds requirement trees in the API's wire shape.
#[derive(Debug, Clone)]
pub struct RequirementTreeBuilder {
    ctx: BuildContext,
    nodes: Vec<ArenaNode>,
    roots: Vec<usize>,
}

impl RequirementTreeBuilder {
    #[must_use]
    pub const fn new(program_id: u64) -> Self {
        Self {
            ctx: BuildContext::new(program_id),
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Add a top-level operator node.
    ///
    /// # Errors
    ///
    /// Returns [`RequirementError`] when the operator is unsupported or a
    /// `min_number_of` operator lacks a positive integer `operator_value`.
    pub fn add_operator(
        &mut self,
        spec: OperatorSpec,
    ) -> Result<OperatorHandle, RequirementError> {
        spec.validate()?;
        let index = self.push(|ctx| ctx.operator_node(spec));
        self.roots.push(index);
        Ok(OperatorHandle(index))
    }

    /// Add an operator nested under another operator.
    ///
    /// The parser reads only two levels, so nested operators exist to build
    /// trees that exercise that limit.
    ///
    /// # Errors
    ///
    /// Same as [`Self::add_operator`], plus [`RequirementError::UnknownHandle`].
    pub fn add_nested_operator(
        &mut self,
        parent: OperatorHandle,
        spec: OperatorSpec,
    ) -> Result<OperatorHandle, RequirementError> {
        self.check(parent)?;
        spec.validate()?;
        let index = self.push(|ctx| ctx.operator_node(spec));
        self.nodes[parent.0].children.push(index);
        Ok(OperatorHandle(index))
    }

    /// Add a course leaf under an operator.
    ///
    /// # Errors
    ///
    /// Returns [`RequirementError::UnknownHandle`] for a handle from another builder.
    pub fn add_course(
        &mut self,
        parent: OperatorHandle,
        course_id: u64,
    ) -> Result<(), RequirementError> {
        self.check(parent)?;
        let index = self.push(|ctx| ctx.course_node(course_id));
        self.nodes[parent.0].children.push(index);
        Ok(())
    }

    /// Top-level nodes in insertion order, ready for [`crate::parse_req_tree`].
    #[must_use]
    pub fn serialize(&self) -> Vec<RequirementNode> {
        self.roots.iter().map(|&index| self.materialize(index)).collect()
    }

    fn push(&mut self, make: impl FnOnce(&mut BuildContext) -> ArenaNode) -> usize {
        let node = make(&mut self.ctx);
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn check(&self, handle: OperatorHandle) -> Result<(), RequirementError> {
        match self.nodes.get(handle.0) {
            Some(node) if node.data.node_type == NodeType::Operator => Ok(()),
            _ => Err(RequirementError::UnknownHandle(handle.0)),
        }
    }

    fn materialize(&self, index: usize) -> RequirementNode {
        let node = &self.nodes[index];
        RequirementNode {
            id: Some(node.id),
            data: node.data.clone(),
            children: node
                .children
                .iter()
                .map(|&child| self.materialize(child))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn min_number_of_requires_value() {
        let mut tree = RequirementTreeBuilder::new(1);
        let spec = OperatorSpec {
            operator_value: None,
            ..OperatorSpec::min_number_of("1")
        };
        assert_eq!(
            tree.add_operator(spec),
            Err(RequirementError::MissingOperatorValue)
        );
    }

    #[test]
    fn min_number_of_rejects_non_positive_values() {
        let mut tree = RequirementTreeBuilder::new(1);
        for value in ["0", "-2", "two", ""] {
            assert_eq!(
                tree.add_operator(OperatorSpec::min_number_of(value)),
                Err(RequirementError::InvalidOperatorValue(value.to_string()))
            );
        }
        assert!(tree.serialize().is_empty());
    }

    #[test]
    fn unknown_operator_is_rejected() {
        let mut tree = RequirementTreeBuilder::new(1);
        let spec = OperatorSpec {
            operator: Operator::Unknown,
            ..OperatorSpec::all_of()
        };
        assert_eq!(
            tree.add_operator(spec),
            Err(RequirementError::UnsupportedOperator)
        );
    }

    #[test]
    fn ids_are_sequential_and_program_is_stamped() {
        let mut tree = RequirementTreeBuilder::new(42);
        let core = tree.add_operator(OperatorSpec::all_of()).unwrap();
        tree.add_course(core, 7).unwrap();
        let electives = tree
            .add_operator(OperatorSpec::min_number_of("1").elective())
            .unwrap();
        tree.add_course(electives, 8).unwrap();

        let nodes = tree.serialize();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].id, Some(1));
        assert_eq!(nodes[0].children[0].id, Some(2));
        assert_eq!(nodes[1].id, Some(3));
        assert_eq!(nodes[1].children[0].data.course, Some(serde_json::json!(8)));
        assert!(
            nodes
                .iter()
                .flat_map(|node| std::iter::once(node).chain(node.children.iter()))
                .all(|node| node.data.program == Some(42))
        );
    }

    #[test]
    fn course_handle_cannot_parent() {
        let mut tree = RequirementTreeBuilder::new(1);
        let core = tree.add_operator(OperatorSpec::all_of()).unwrap();
        tree.add_course(core, 5).unwrap();
        assert_eq!(
            tree.add_course(OperatorHandle(1), 6),
            Err(RequirementError::UnknownHandle(1))
        );
        assert_eq!(
            tree.add_course(OperatorHandle(9), 6),
            Err(RequirementError::UnknownHandle(9))
        );
    }
}
