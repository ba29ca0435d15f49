use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EnrollmentStatus;

/// A course as shown on a learner dashboard card.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DashboardCourse {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub readable_id: Option<String>,
    #[serde(default)]
    pub run: DashboardRun,
    #[serde(default)]
    pub enrollment: Option<DashboardEnrollment>,
}

impl DashboardCourse {
    /// Enrollment status, `not_enrolled` when there is no enrollment.
    #[must_use]
    pub fn status(&self) -> EnrollmentStatus {
        self.enrollment
            .as_ref()
            .map_or(EnrollmentStatus::NotEnrolled, |enrollment| enrollment.status)
    }
}

/// The run a dashboard card displays. Empty when the course has no usable run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardRun {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_enrollable: bool,
    #[serde(default)]
    pub b2b_contract: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DashboardEnrollment {
    pub id: u64,
    pub status: EnrollmentStatus,
    /// Highest grade across the enrollment's grade records.
    #[serde(default)]
    pub grade: f64,
    #[serde(default)]
    pub certificate_url: Option<String>,
    #[serde(default)]
    pub b2b_contract_id: Option<u64>,
}
