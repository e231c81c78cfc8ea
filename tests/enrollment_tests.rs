//! Integration tests for enrollment rules, grading and transcripts

use campus_records::core::models::{Course, Grade};
use campus_records::core::{
    CourseDirectory, EnrollmentEngine, EnrollmentError, StudentDirectory, TranscriptCalculator,
    ValidationError, MAX_CREDITS_PER_SEMESTER,
};
use std::sync::Arc;

fn course(code: &str, credits: u32) -> Course {
    Course::builder(code, format!("{code} title"))
        .credits(credits)
        .department("Test")
        .build()
        .expect("valid course")
}

#[test]
fn credit_ceiling_holds_across_enrollments() {
    let mut students = StudentDirectory::new();
    let mut courses = CourseDirectory::new();
    let engine = EnrollmentEngine::new();
    students.add("S100", "Casey Lee", "casey@example.com");

    let codes = ["C1", "C2", "C3", "C4", "C5", "C6"];
    for code in codes {
        courses.add(course(code, 4));
    }

    let student = students.find_by_reg_no_mut("S100").unwrap();
    let mut rejected = 0;
    for code in codes {
        let course = courses.find_by_code(code).unwrap();
        match engine.enroll(student, &course) {
            Ok(_) => {}
            Err(EnrollmentError::CreditLimitExceeded { limit }) => {
                assert_eq!(limit, MAX_CREDITS_PER_SEMESTER);
                rejected += 1;
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
        assert!(student.total_credits() <= MAX_CREDITS_PER_SEMESTER);
    }

    assert_eq!(student.total_credits(), 20);
    assert_eq!(student.enrollments().len(), 5);
    assert_eq!(rejected, 1);
}

#[test]
fn reaching_exactly_the_ceiling_is_allowed() {
    let mut students = StudentDirectory::new();
    let engine = EnrollmentEngine::new();
    students.add("S101", "Dee Park", "dee@example.com");
    let student = students.find_by_reg_no_mut("S101").unwrap();

    for (code, credits) in [("A1", 9), ("A2", 9), ("A3", 2)] {
        engine
            .enroll(student, &Arc::new(course(code, credits)))
            .expect("within limit");
    }
    assert_eq!(student.total_credits(), 20);

    let err = engine
        .enroll(student, &Arc::new(course("A4", 1)))
        .unwrap_err();
    assert!(matches!(err, EnrollmentError::CreditLimitExceeded { .. }));
    assert_eq!(student.enrollments().len(), 3);
}

#[test]
fn duplicate_enrollment_is_rejected_once_enrolled() {
    let mut students = StudentDirectory::new();
    let mut courses = CourseDirectory::new();
    let engine = EnrollmentEngine::new();
    students.add("S102", "Eli Moss", "eli@example.com");
    courses.add(course("CS101", 4));

    let student = students.find_by_reg_no_mut("S102").unwrap();
    let cs101 = courses.find_by_code("CS101").unwrap();
    engine.enroll(student, &cs101).expect("first enrollment");

    let lower = courses.find_by_code("cs101").unwrap();
    let err = engine.enroll(student, &lower).unwrap_err();
    assert_eq!(
        err,
        EnrollmentError::DuplicateEnrollment {
            code: "CS101".to_string()
        }
    );
    assert_eq!(student.enrollments().len(), 1);
}

#[test]
fn padded_course_code_cannot_be_enrolled_twice() {
    let mut students = StudentDirectory::new();
    let mut courses = CourseDirectory::new();
    let engine = EnrollmentEngine::new();
    students.add("S111", "Noa Diaz", "noa@example.com");
    let padded = courses.add(
        Course::builder(" CS101", "Intro")
            .credits(4)
            .build()
            .expect("valid course"),
    );

    assert!(courses.find_by_code(" CS101").is_some());
    assert!(courses.find_by_code("cs101").is_some());

    let student = students.find_by_reg_no_mut("S111").unwrap();
    engine.enroll(student, &padded).expect("first enrollment");
    let err = engine.enroll(student, &padded).unwrap_err();

    assert_eq!(
        err,
        EnrollmentError::DuplicateEnrollment {
            code: "CS101".to_string()
        }
    );
    assert_eq!(student.enrollments().len(), 1);
}

#[test]
fn duplicate_check_runs_before_credit_check() {
    let mut students = StudentDirectory::new();
    let engine = EnrollmentEngine::new();
    students.add("S103", "Fay Ng", "fay@example.com");
    let student = students.find_by_reg_no_mut("S103").unwrap();

    let big = Arc::new(course("BIG", 9));
    engine.enroll(student, &big).unwrap();
    engine.enroll(student, &Arc::new(course("BIG2", 9))).unwrap();

    let err = engine.enroll(student, &big).unwrap_err();
    assert!(matches!(err, EnrollmentError::DuplicateEnrollment { .. }));
}

#[test]
fn gpa_is_zero_without_graded_enrollments() {
    let mut students = StudentDirectory::new();
    let engine = EnrollmentEngine::new();
    students.add("S104", "Gus Hale", "gus@example.com");
    let student = students.find_by_reg_no_mut("S104").unwrap();

    assert!(TranscriptCalculator::gpa(student).abs() < f64::EPSILON);

    engine.enroll(student, &Arc::new(course("X1", 3))).unwrap();
    assert!(TranscriptCalculator::gpa(student).abs() < f64::EPSILON);
}

#[test]
fn gpa_is_weighted_by_credits() {
    let mut students = StudentDirectory::new();
    let engine = EnrollmentEngine::new();
    students.add("S105", "Hana Ito", "hana@example.com");
    let student = students.find_by_reg_no_mut("S105").unwrap();

    let course_a = Arc::new(course("CA", 4));
    let course_b = Arc::new(course("CB", 3));
    let course_c = Arc::new(course("CC", 4));
    engine.enroll(student, &course_a).unwrap();
    engine.enroll(student, &course_b).unwrap();
    engine.enroll(student, &course_c).unwrap();
    assert!(engine.assign_grade(student, &course_a, Grade::A));
    assert!(engine.assign_grade(student, &course_b, Grade::B));

    let gpa = TranscriptCalculator::gpa(student);
    let expected = (4.0 * 9.0 + 3.0 * 8.0) / 7.0;
    assert!((gpa - expected).abs() < 1e-9);
    assert_eq!(format!("{gpa:.2}"), "8.57");
}

#[test]
fn failing_grade_counts_toward_gpa() {
    let mut students = StudentDirectory::new();
    let engine = EnrollmentEngine::new();
    students.add("S106", "Ivy Ruiz", "ivy@example.com");
    let student = students.find_by_reg_no_mut("S106").unwrap();

    let pass = Arc::new(course("P1", 3));
    let fail = Arc::new(course("F1", 3));
    engine.enroll(student, &pass).unwrap();
    engine.enroll(student, &fail).unwrap();
    engine.assign_grade(student, &pass, Grade::S);
    engine.assign_grade(student, &fail, Grade::F);

    assert!((TranscriptCalculator::gpa(student) - 5.0).abs() < 1e-9);
}

#[test]
fn regrading_overwrites_previous_grade() {
    let mut students = StudentDirectory::new();
    let engine = EnrollmentEngine::new();
    students.add("S107", "Jon Bell", "jon@example.com");
    let student = students.find_by_reg_no_mut("S107").unwrap();

    let c = Arc::new(course("R1", 3));
    engine.enroll(student, &c).unwrap();
    engine.assign_grade(student, &c, Grade::D);
    engine.assign_grade(student, &c, Grade::A);

    assert_eq!(student.enrollment_for("R1").unwrap().grade(), Some(Grade::A));
}

#[test]
fn assign_grade_without_enrollment_is_noop() {
    let mut students = StudentDirectory::new();
    let mut courses = CourseDirectory::new();
    let engine = EnrollmentEngine::new();
    students.add("S108", "Kai Ortiz", "kai@example.com");
    courses.add(course("EN101", 3));
    courses.add(course("MA201", 4));

    let en101 = courses.find_by_code("EN101").unwrap();
    let ma201 = courses.find_by_code("MA201").unwrap();
    {
        let student = students.find_by_reg_no_mut("S108").unwrap();
        engine.enroll(student, &en101).unwrap();
    }

    let students_before = students.all();
    let courses_before = courses.all();

    let student = students.find_by_reg_no_mut("S108").unwrap();
    assert!(!engine.assign_grade(student, &ma201, Grade::A));

    assert_eq!(students.all(), students_before);
    assert_eq!(courses.all(), courses_before);
}

#[test]
fn transcript_keeps_insertion_order() {
    let mut students = StudentDirectory::new();
    let engine = EnrollmentEngine::new();
    students.add("S109", "Lea Voss", "lea@example.com");
    let student = students.find_by_reg_no_mut("S109").unwrap();

    for code in ["ZZ900", "AA100", "MM500"] {
        engine.enroll(student, &Arc::new(course(code, 3))).unwrap();
    }

    let transcript = TranscriptCalculator::transcript(student);
    let codes: Vec<&str> = transcript.lines.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, ["ZZ900", "AA100", "MM500"]);

    let text = transcript.to_string();
    let zz = text.find("ZZ900").unwrap();
    let aa = text.find("AA100").unwrap();
    assert!(zz < aa);
}

#[test]
fn builder_enforces_credit_range_and_code() {
    for credits in [0, 10] {
        let err = Course::builder("X", "X").credits(credits).build().unwrap_err();
        assert!(matches!(err, ValidationError::CreditsOutOfRange { .. }));
    }
    for credits in [1, 9] {
        assert!(Course::builder("X", "X").credits(credits).build().is_ok());
    }

    let err = Course::builder("", "Anything")
        .credits(20)
        .department("Dept")
        .build()
        .unwrap_err();
    assert_eq!(err, ValidationError::EmptyCode);
}

#[test]
fn directory_snapshots_are_detached() {
    let mut students = StudentDirectory::new();
    let mut courses = CourseDirectory::new();
    students.add("S110", "Mia Chen", "mia@example.com");
    courses.add(course("CS101", 4));

    let mut snapshot = students.all();
    snapshot.clear();
    let mut course_snapshot = courses.all();
    course_snapshot.clear();

    assert_eq!(students.len(), 1);
    assert_eq!(courses.len(), 1);
}
