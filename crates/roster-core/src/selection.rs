//! Run and enrollment selection.
//!
//! Both selectors are "stable first match wins": when candidates tie, the one
//! that appears first in the input slice is returned. Nothing here reorders
//! its input or iterates a hash map.

use crate::entities::{Course, CourseRun, Enrollment};
use crate::errors::CoreError;

/// Enrollable runs of `course`, narrowed to `contract_id` when one is given.
///
/// Runs keep their original order.
#[must_use]
pub fn runs_for_contract(course: &Course, contract_id: Option<u64>) -> Vec<&CourseRun> {
    course
        .courseruns
        .iter()
        .filter(|run| run.is_enrollable)
        .filter(|run| contract_id.is_none_or(|contract| run.b2b_contract == Some(contract)))
        .collect()
}

/// Pick the run a course card should show.
///
/// Among the enrollable runs (scoped to `contract_id` if given), the run named
/// by `course.next_run_id` wins wherever it sits; otherwise the first
/// candidate. `None` when no run passes the filters.
#[must_use]
pub fn get_best_run(course: &Course, contract_id: Option<u64>) -> Option<&CourseRun> {
    let candidates = runs_for_contract(course, contract_id);

    let best = course
        .next_run_id
        .and_then(|next| candidates.iter().copied().find(|run| run.id == next))
        .or_else(|| candidates.first().copied());

    tracing::debug!(
        course_id = course.id,
        ?contract_id,
        candidates = candidates.len(),
        run_id = ?best.map(|run| run.id),
        "selected best run"
    );
    best
}

/// Like [`get_best_run`], for callers that cannot proceed without a run.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] naming the course when no run qualifies.
pub fn require_best_run(
    course: &Course,
    contract_id: Option<u64>,
) -> Result<&CourseRun, CoreError> {
    get_best_run(course, contract_id).ok_or_else(|| CoreError::NotFound {
        entity_type: "course_run".into(),
        id: match contract_id {
            Some(contract) => format!("for course {} under contract {contract}", course.id),
            None => format!("for course {}", course.id),
        },
    })
}

/// Enrollments tied to the given B2B contract, in input order.
#[must_use]
pub fn enrollments_for_contract(enrollments: &[Enrollment], contract_id: u64) -> Vec<&Enrollment> {
    enrollments
        .iter()
        .filter(|enrollment| enrollment.b2b_contract_id == Some(contract_id))
        .collect()
}

/// Pick the enrollment that represents `course` when several reference it.
///
/// Only enrollments whose run belongs to `course` are considered. A
/// certificate outranks any grade; with equal certificate standing the higher
/// max grade wins; remaining ties keep the earliest candidate.
#[must_use]
pub fn select_best_enrollment<'a>(
    course: &Course,
    enrollments: &'a [Enrollment],
) -> Option<&'a Enrollment> {
    enrollments
        .iter()
        .filter(|enrollment| course.has_run(enrollment.run.id))
        .fold(None::<&Enrollment>, |best, candidate| match best {
            Some(current) if !outranks(candidate, current) => Some(current),
            _ => Some(candidate),
        })
}

/// Strict improvement of `candidate` over `current`.
fn outranks(candidate: &Enrollment, current: &Enrollment) -> bool {
    match (candidate.has_certificate(), current.has_certificate()) {
        (true, false) => true,
        (false, true) => false,
        _ => candidate.max_grade() > current.max_grade(),
    }
}
