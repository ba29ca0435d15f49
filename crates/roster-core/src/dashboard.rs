//! Dashboard card transformation and ordering.
//!
//! `dashboard_course` turns an API course plus the learner's enrollments into
//! the record a dashboard card renders. The sorters order those records for
//! the generic "my courses" list and for a program page.

use chrono::{DateTime, Utc};

use crate::entities::{
    Course, CourseRun, DashboardCourse, DashboardEnrollment, DashboardRun, Enrollment, Program,
};
use crate::enums::EnrollmentStatus;
use crate::selection::{get_best_run, select_best_enrollment};
use crate::status::get_enrollment_status;

impl From<&CourseRun> for DashboardRun {
    fn from(run: &CourseRun) -> Self {
        Self {
            id: Some(run.id),
            start_date: run.start_date,
            end_date: run.end_date,
            is_enrollable: run.is_enrollable,
            b2b_contract: run.b2b_contract,
        }
    }
}

impl From<&Enrollment> for DashboardEnrollment {
    fn from(enrollment: &Enrollment) -> Self {
        let certificate_url = enrollment
            .certificate
            .as_ref()
            .filter(|_| enrollment.has_certificate())
            .and_then(|cert| cert.link.clone());

        Self {
            id: enrollment.id,
            status: get_enrollment_status(Some(enrollment)),
            grade: enrollment.max_grade(),
            certificate_url,
            b2b_contract_id: enrollment.b2b_contract_id,
        }
    }
}

/// Build the dashboard record for one course.
///
/// The card shows the run the learner is enrolled in; without an enrollment it
/// shows the best run for `contract_id`, and without that an empty run.
#[must_use]
pub fn dashboard_course(
    course: &Course,
    enrollments: &[Enrollment],
    contract_id: Option<u64>,
) -> DashboardCourse {
    let enrollment = select_best_enrollment(course, enrollments);

    let run = enrollment
        .and_then(|enrollment| course.run(enrollment.run.id))
        .or_else(|| get_best_run(course, contract_id))
        .map(DashboardRun::from)
        .unwrap_or_default();

    DashboardCourse {
        id: course.id,
        title: course.title.clone(),
        readable_id: course.readable_id.clone(),
        run,
        enrollment: enrollment.map(DashboardEnrollment::from),
    }
}

/// [`dashboard_course`] over every course, in input order.
#[must_use]
pub fn dashboard_courses(
    courses: &[Course],
    enrollments: &[Enrollment],
    contract_id: Option<u64>,
) -> Vec<DashboardCourse> {
    courses
        .iter()
        .map(|course| dashboard_course(course, enrollments, contract_id))
        .collect()
}

fn is_ended(course: &DashboardCourse, now: DateTime<Utc>) -> bool {
    course.status() == EnrollmentStatus::Completed
        || course.run.end_date.is_some_and(|end| end < now)
}

fn is_started(course: &DashboardCourse, now: DateTime<Utc>) -> bool {
    course.run.start_date.is_some_and(|start| start < now)
}

/// Order dashboard courses: started, then not started, then ended.
///
/// - ended: completed, or the run's end date has passed
/// - started: not ended and the start date has passed
/// - not started: everything else
///
/// Started and ended courses are alphabetical by title, ignoring case.
/// Not-started courses are by ascending start date, undated ones last.
#[must_use]
pub fn sort_dashboard_courses(
    courses: Vec<DashboardCourse>,
    now: DateTime<Utc>,
) -> Vec<DashboardCourse> {
    let mut started = Vec::new();
    let mut not_started = Vec::new();
    let mut ended = Vec::new();

    for course in courses {
        if is_ended(&course, now) {
            ended.push(course);
        } else if is_started(&course, now) {
            started.push(course);
        } else {
            not_started.push(course);
        }
    }

    tracing::debug!(
        started = started.len(),
        not_started = not_started.len(),
        ended = ended.len(),
        "bucketed dashboard courses"
    );

    started.sort_by_cached_key(title_key);
    ended.sort_by_cached_key(title_key);
    not_started.sort_by_key(|course| (course.run.start_date.is_none(), course.run.start_date));

    started.extend(not_started);
    started.extend(ended);
    started
}

/// Alias of [`sort_dashboard_courses`], the name the enrollment list uses.
#[must_use]
pub fn sort_enrollments(courses: Vec<DashboardCourse>, now: DateTime<Utc>) -> Vec<DashboardCourse> {
    sort_dashboard_courses(courses, now)
}

fn title_key(course: &DashboardCourse) -> (String, String) {
    (course.title.to_lowercase(), course.title.clone())
}

/// Order courses for a program page.
///
/// Enrolled courses come first, then completed ones, then the rest. Within
/// each tier courses follow the program's declared order; courses the program
/// does not list go last in input order.
#[must_use]
pub fn sort_program_courses(
    program: &Program,
    mut courses: Vec<DashboardCourse>,
) -> Vec<DashboardCourse> {
    courses.sort_by_key(|course| {
        let tier = match course.status() {
            EnrollmentStatus::Enrolled => 0,
            EnrollmentStatus::Completed => 1,
            EnrollmentStatus::NotEnrolled => 2,
        };
        (tier, program.course_position(course.id).unwrap_or(usize::MAX))
    });
    courses
}
