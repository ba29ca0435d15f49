//! Selection contracts checked over a spread of inputs.

use roster_core::entities::{Certificate, Course, CourseRun, Enrollment, EnrollmentRun, Grade};
use roster_core::enums::EnrollmentStatus;
use roster_core::{get_best_run, get_enrollment_status, select_best_enrollment};
use rstest::rstest;

fn run(id: u64, enrollable: bool, contract: Option<u64>) -> CourseRun {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "is_enrollable": enrollable,
        "b2b_contract": contract,
    }))
    .unwrap()
}

fn enrollment(id: u64, run_id: u64, grade: Option<(f64, bool)>, cert: Option<&str>) -> Enrollment {
    Enrollment {
        id,
        run: EnrollmentRun {
            id: run_id,
            title: None,
            start_date: None,
            end_date: None,
        },
        grades: grade
            .map(|(grade, passed)| Grade {
                grade,
                passed,
                letter_grade: None,
            })
            .into_iter()
            .collect(),
        certificate: cert.map(|uuid| Certificate {
            uuid: uuid.into(),
            link: None,
        }),
        b2b_contract_id: None,
        b2b_organization_id: None,
        enrollment_mode: None,
    }
}

fn runs_fixture() -> Vec<CourseRun> {
    vec![
        run(1, false, None),
        run(2, true, Some(7)),
        run(3, true, None),
        run(4, false, Some(7)),
        run(5, true, Some(8)),
        run(6, true, Some(7)),
    ]
}

#[rstest]
fn best_run_satisfies_filters(
    #[values(None, Some(7), Some(8), Some(9))] contract: Option<u64>,
    #[values(None, Some(1), Some(3), Some(6), Some(42))] next_run_id: Option<u64>,
) {
    let course = Course {
        id: 1,
        title: "Probability".into(),
        readable_id: None,
        courseruns: runs_fixture(),
        next_run_id,
    };

    let eligible: Vec<&CourseRun> = course
        .courseruns
        .iter()
        .filter(|r| r.is_enrollable && contract.is_none_or(|k| r.b2b_contract == Some(k)))
        .collect();

    match get_best_run(&course, contract) {
        None => assert!(eligible.is_empty()),
        Some(best) => {
            assert!(course.courseruns.iter().any(|r| std::ptr::eq(r, best)));
            assert!(best.is_enrollable);
            if let Some(k) = contract {
                assert_eq!(best.b2b_contract, Some(k));
            }
            let expected = eligible
                .iter()
                .find(|r| Some(r.id) == next_run_id)
                .or_else(|| eligible.first())
                .map(|r| r.id);
            assert_eq!(Some(best.id), expected);
        }
    }
}

#[test]
fn certificate_with_zero_grade_outranks_perfect_grade() {
    let course = Course {
        id: 1,
        title: "Probability".into(),
        readable_id: None,
        courseruns: vec![run(1, true, None)],
        next_run_id: None,
    };
    let enrollments = vec![
        enrollment(1, 1, Some((1.0, true)), None),
        enrollment(2, 1, Some((0.0, false)), Some("x")),
    ];
    let best = select_best_enrollment(&course, &enrollments).unwrap();
    assert_eq!(best.id, 2);
    assert_eq!(get_enrollment_status(Some(best)), EnrollmentStatus::Enrolled);
}

#[rstest]
#[case(vec![], None)]
#[case(vec![(1, 99)], None)]
#[case(vec![(1, 99), (2, 3)], Some(2))]
#[case(vec![(1, 3), (2, 6)], Some(1))]
fn best_enrollment_none_iff_no_run_matches(
    #[case] refs: Vec<(u64, u64)>,
    #[case] expected: Option<u64>,
) {
    let course = Course {
        id: 1,
        title: "Probability".into(),
        readable_id: None,
        courseruns: runs_fixture(),
        next_run_id: None,
    };
    let enrollments: Vec<Enrollment> = refs
        .into_iter()
        .map(|(id, run_id)| enrollment(id, run_id, None, None))
        .collect();
    assert_eq!(
        select_best_enrollment(&course, &enrollments).map(|e| e.id),
        expected
    );
}
