use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{NodeType, Operator};

/// A requirement tree node in the API's wire shape.
///
/// Fields are loosely typed because upstream data is not validated. Use
/// [`crate::requirements::Requirement`] for the typed form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RequirementNode {
    #[serde(default)]
    pub id: Option<u64>,
    pub data: RequirementData,
    #[serde(default)]
    pub children: Vec<RequirementNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RequirementData {
    pub node_type: NodeType,
    #[serde(default)]
    pub operator: Option<Operator>,
    /// Minimum number of children for `min_number_of`, sent as a string.
    #[serde(default)]
    pub operator_value: Option<String>,
    #[serde(default)]
    pub program: Option<u64>,
    /// Course id for course nodes. Kept as raw JSON so non-numeric ids can be
    /// reported and skipped.
    #[serde(default)]
    pub course: Option<serde_json::Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub elective_flag: Option<bool>,
}
