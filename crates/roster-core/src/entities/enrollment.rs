use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A learner's enrollment in one course run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Enrollment {
    pub id: u64,
    pub run: EnrollmentRun,
    #[serde(default)]
    pub grades: Vec<Grade>,
    #[serde(default)]
    pub certificate: Option<Certificate>,
    #[serde(default)]
    pub b2b_contract_id: Option<u64>,
    #[serde(default)]
    pub b2b_organization_id: Option<u64>,
    /// `audit` or `verified`, as reported by the API.
    #[serde(default)]
    pub enrollment_mode: Option<String>,
}

impl Enrollment {
    /// Whether a certificate with a non-empty identifier was issued.
    #[must_use]
    pub fn has_certificate(&self) -> bool {
        self.certificate
            .as_ref()
            .is_some_and(|cert| !cert.uuid.is_empty())
    }

    /// Highest grade value across all grade records, `0.0` when there are none.
    #[must_use]
    pub fn max_grade(&self) -> f64 {
        self.grades
            .iter()
            .map(|grade| grade.grade)
            .fold(0.0, f64::max)
    }

    /// Whether any grade record is marked as passed.
    #[must_use]
    pub fn has_passed(&self) -> bool {
        self.grades.iter().any(|grade| grade.passed)
    }
}

/// The run an enrollment points at. Only `id` is required.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnrollmentRun {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Grade {
    pub grade: f64,
    #[serde(default)]
    pub passed: bool,
    #[serde(default)]
    pub letter_grade: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Certificate {
    pub uuid: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enrollment(grades: &[f64], certificate: Option<&str>) -> Enrollment {
        Enrollment {
            id: 1,
            run: EnrollmentRun {
                id: 1,
                title: None,
                start_date: None,
                end_date: None,
            },
            grades: grades
                .iter()
                .map(|&grade| Grade {
                    grade,
                    passed: false,
                    letter_grade: None,
                })
                .collect(),
            certificate: certificate.map(|uuid| Certificate {
                uuid: uuid.to_string(),
                link: None,
            }),
            b2b_contract_id: None,
            b2b_organization_id: None,
            enrollment_mode: None,
        }
    }

    #[test]
    fn max_grade_floors_at_zero() {
        assert!(enrollment(&[], None).max_grade().abs() < f64::EPSILON);
        assert!((enrollment(&[0.4, 0.9, 0.2], None).max_grade() - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_certificate_uuid_does_not_count() {
        assert!(!enrollment(&[], Some("")).has_certificate());
        assert!(enrollment(&[], Some("abc")).has_certificate());
        assert!(!enrollment(&[], None).has_certificate());
    }

    #[test]
    fn null_certificate_deserializes() {
        let json = r#"{"id": 3, "run": {"id": 9}, "certificate": null, "grades": []}"#;
        let parsed: Enrollment = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.run.id, 9);
        assert!(parsed.certificate.is_none());
    }
}
