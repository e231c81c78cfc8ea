//! Enrollment model

use super::{Course, Grade};
use chrono::{DateTime, Local};
use std::fmt;
use std::sync::Arc;

/// Marker shown for an enrollment that has no grade yet
pub const IN_PROGRESS: &str = "In Progress";

/// Links one student to one course for the current term
///
/// Owned by the student's enrollment list. The course is shared with the
/// course directory; the student is referenced by id only.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    student_id: u32,
    course: Arc<Course>,
    grade: Option<Grade>,
    enrolled_at: DateTime<Local>,
}

impl Enrollment {
    /// Ungraded enrollment stamped with the current local time
    pub(crate) fn new(student_id: u32, course: Arc<Course>) -> Self {
        Self {
            student_id,
            course,
            grade: None,
            enrolled_at: Local::now(),
        }
    }

    /// Id of the owning student
    #[must_use]
    pub const fn student_id(&self) -> u32 {
        self.student_id
    }

    /// The enrolled course
    #[must_use]
    pub fn course(&self) -> &Course {
        &self.course
    }

    /// Assigned grade, `None` while in progress
    #[must_use]
    pub const fn grade(&self) -> Option<Grade> {
        self.grade
    }

    /// When the enrollment was created
    #[must_use]
    pub const fn enrolled_at(&self) -> DateTime<Local> {
        self.enrolled_at
    }

    /// Whether a grade has been assigned
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        self.grade.is_some()
    }

    /// Grade letter or [`IN_PROGRESS`]
    #[must_use]
    pub fn grade_label(&self) -> &'static str {
        self.grade.map_or(IN_PROGRESS, Grade::as_str)
    }

    pub(crate) fn set_grade(&mut self, grade: Grade) {
        self.grade = Some(grade);
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = format!("{} ({})", self.course.title(), self.course.code());
        write!(f, "  - {label:<40} | Grade: {}", self.grade_label())
    }
}
