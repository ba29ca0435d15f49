use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A course and its scheduled runs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Course {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub readable_id: Option<String>,
    /// Runs in API order. Selection tie-breaks rely on this order.
    #[serde(default)]
    pub courseruns: Vec<CourseRun>,
    /// The run the catalog prefers to show when it is enrollable.
    #[serde(default)]
    pub next_run_id: Option<u64>,
}

impl Course {
    /// Look up one of this course's runs by id.
    #[must_use]
    pub fn run(&self, run_id: u64) -> Option<&CourseRun> {
        self.courseruns.iter().find(|run| run.id == run_id)
    }

    /// Whether `run_id` names one of this course's runs.
    #[must_use]
    pub fn has_run(&self, run_id: u64) -> bool {
        self.courseruns.iter().any(|run| run.id == run_id)
    }
}

/// A scheduled offering of a course.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CourseRun {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub courseware_id: Option<String>,
    #[serde(default)]
    pub is_enrollable: bool,
    #[serde(default)]
    pub is_archived: bool,
    /// Contract this run is restricted to, for B2B offerings.
    #[serde(default)]
    pub b2b_contract: Option<u64>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub enrollment_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub enrollment_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub upgrade_deadline: Option<DateTime<Utc>>,
}
