//! Enrollment status classification.

use crate::entities::Enrollment;
use crate::enums::EnrollmentStatus;

/// Classify an enrollment (or its absence).
///
/// Any passing grade means `completed`; an enrollment without one, including
/// one with no grades at all, is `enrolled`.
#[must_use]
pub fn get_enrollment_status(enrollment: Option<&Enrollment>) -> EnrollmentStatus {
    match enrollment {
        None => EnrollmentStatus::NotEnrolled,
        Some(enrollment) if enrollment.has_passed() => EnrollmentStatus::Completed,
        Some(_) => EnrollmentStatus::Enrolled,
    }
}
