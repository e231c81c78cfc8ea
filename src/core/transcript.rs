//! GPA and transcript derivation
//!
//! Read-only projections over a student's enrollments. Nothing here mutates
//! state.

use crate::core::models::{Enrollment, Grade, Student};
use std::fmt;

const RULE: &str = "--------------------------------------------------";

/// One transcript row
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptLine {
    /// Course title
    pub title: String,
    /// Course code
    pub code: String,
    /// Course credits
    pub credits: u32,
    /// Grade, `None` while in progress
    pub grade: Option<Grade>,
}

impl TranscriptLine {
    fn from_enrollment(enrollment: &Enrollment) -> Self {
        let course = enrollment.course();
        Self {
            title: course.title().to_string(),
            code: course.code().to_string(),
            credits: course.credits(),
            grade: enrollment.grade(),
        }
    }

    /// Grade letter or "In Progress"
    #[must_use]
    pub fn grade_label(&self) -> &'static str {
        self.grade
            .map_or(crate::core::models::enrollment::IN_PROGRESS, Grade::as_str)
    }
}

impl fmt::Display for TranscriptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = format!("{} ({})", self.title, self.code);
        write!(f, "  - {label:<40} | Grade: {}", self.grade_label())
    }
}

/// Transcript view for one student
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    /// Student registration number
    pub reg_no: String,
    /// Student full name
    pub student_name: String,
    /// Profile line of the student
    pub profile: String,
    /// Rows in enrollment insertion order
    pub lines: Vec<TranscriptLine>,
    /// Credits across graded rows
    pub graded_credits: u32,
    /// Credit-weighted grade point average
    pub gpa: f64,
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------------------- TRANSCRIPT --------------------")?;
        writeln!(f, "{}", self.profile)?;
        writeln!(f, "{RULE}")?;
        if self.lines.is_empty() {
            writeln!(f, "No courses enrolled.")?;
        } else {
            for line in &self.lines {
                writeln!(f, "{line}")?;
            }
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "GPA: {:.2}", self.gpa)?;
        writeln!(f, "{RULE}")
    }
}

/// Computes GPA and transcripts
pub struct TranscriptCalculator;

impl TranscriptCalculator {
    /// Credit-weighted GPA over graded enrollments
    ///
    /// `sum(points * credits) / sum(credits)` across enrollments that have a
    /// grade. Ungraded enrollments contribute to neither side. Returns exactly
    /// `0.0` when nothing is graded.
    #[must_use]
    pub fn gpa(student: &Student) -> f64 {
        let (weighted, credits) = student
            .enrollments()
            .iter()
            .filter_map(|e| e.grade().map(|g| (g, e.course().credits())))
            .fold((0.0_f64, 0_u32), |(weighted, credits), (grade, c)| {
                (weighted + grade.points() * f64::from(c), credits + c)
            });

        if credits == 0 {
            return 0.0;
        }
        weighted / f64::from(credits)
    }

    /// Build the transcript view, preserving enrollment order
    #[must_use]
    pub fn transcript(student: &Student) -> Transcript {
        let lines: Vec<TranscriptLine> = student
            .enrollments()
            .iter()
            .map(TranscriptLine::from_enrollment)
            .collect();
        let graded_credits = lines
            .iter()
            .filter(|l| l.grade.is_some())
            .map(|l| l.credits)
            .sum();

        Transcript {
            reg_no: student.reg_no().to_string(),
            student_name: student.full_name().to_string(),
            profile: student.profile(),
            lines,
            graded_credits,
            gpa: Self::gpa(student),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::enrollment::EnrollmentEngine;
    use crate::core::models::Course;
    use std::sync::Arc;

    fn course(code: &str, title: &str, credits: u32) -> Arc<Course> {
        Arc::new(
            Course::builder(code, title)
                .credits(credits)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_gpa_empty_is_zero() {
        let student = Student::new(1, "S001", "Alice", "a@example.com");
        assert!(TranscriptCalculator::gpa(&student) == 0.0);
    }

    #[test]
    fn test_gpa_ungraded_only_is_zero() {
        let engine = EnrollmentEngine::new();
        let mut student = Student::new(1, "S001", "Alice", "a@example.com");
        engine
            .enroll(&mut student, &course("CS101", "Intro", 4))
            .unwrap();
        assert!(TranscriptCalculator::gpa(&student) == 0.0);
    }

    #[test]
    fn test_gpa_weighted_by_credits() {
        let engine = EnrollmentEngine::new();
        let mut student = Student::new(1, "S001", "Alice", "a@example.com");
        let a = course("CSA", "Course A", 4);
        let b = course("CSB", "Course B", 3);
        let c = course("CSC", "Course C", 2);
        for enrolled in [&a, &b, &c] {
            engine.enroll(&mut student, enrolled).unwrap();
        }
        engine.assign_grade(&mut student, &a, Grade::A);
        engine.assign_grade(&mut student, &b, Grade::B);
        // CSC stays ungraded and must not count

        let gpa = TranscriptCalculator::gpa(&student);
        let expected = (4.0 * 9.0 + 3.0 * 8.0) / 7.0;
        assert!((gpa - expected).abs() < 1e-9);
        assert!((gpa - 8.57).abs() < 0.01);
    }

    #[test]
    fn test_failing_grade_counts_in_denominator() {
        let engine = EnrollmentEngine::new();
        let mut student = Student::new(1, "S001", "Alice", "a@example.com");
        let a = course("A", "A", 2);
        let f = course("F", "F", 2);
        engine.enroll(&mut student, &a).unwrap();
        engine.enroll(&mut student, &f).unwrap();
        engine.assign_grade(&mut student, &a, Grade::S);
        engine.assign_grade(&mut student, &f, Grade::F);

        assert!((TranscriptCalculator::gpa(&student) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_transcript_keeps_insertion_order() {
        let engine = EnrollmentEngine::new();
        let mut student = Student::new(1, "S001", "Alice", "a@example.com");
        for code in ["ZZ900", "AA100", "MM500"] {
            engine
                .enroll(&mut student, &course(code, "Title", 3))
                .unwrap();
        }

        let transcript = TranscriptCalculator::transcript(&student);
        let codes: Vec<&str> = transcript.lines.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["ZZ900", "AA100", "MM500"]);
        assert_eq!(transcript.graded_credits, 0);
    }

    #[test]
    fn test_transcript_display() {
        let engine = EnrollmentEngine::new();
        let mut student = Student::new(1, "S001", "Alice Smith", "a@example.com");
        let cs = course("CS101", "Intro to Programming", 4);
        let ma = course("MA201", "Calculus I", 4);
        engine.enroll(&mut student, &cs).unwrap();
        engine.enroll(&mut student, &ma).unwrap();
        engine.assign_grade(&mut student, &cs, Grade::A);

        let text = TranscriptCalculator::transcript(&student).to_string();
        assert!(text.contains("Student Profile [ID: 1, RegNo: S001, Name: Alice Smith]"));
        assert!(text.contains("Intro to Programming (CS101)"));
        assert!(text.contains("| Grade: A"));
        assert!(text.contains("| Grade: In Progress"));
        assert!(text.contains("GPA: 9.00"));
        assert!(text.find("CS101") < text.find("MA201"));
    }

    #[test]
    fn test_transcript_display_empty() {
        let student = Student::new(3, "S003", "Carol", "c@example.com");
        let text = TranscriptCalculator::transcript(&student).to_string();
        assert!(text.contains("No courses enrolled."));
        assert!(text.contains("GPA: 0.00"));
    }
}
