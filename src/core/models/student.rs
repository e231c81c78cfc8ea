//! Student model

use super::{Enrollment, Grade};
use std::fmt;

/// A registered student and the enrollments they own
///
/// The enrollment list can only grow through
/// [`EnrollmentEngine`](crate::core::enrollment::EnrollmentEngine); callers get a
/// read-only slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: u32,
    reg_no: String,
    full_name: String,
    email: String,
    enrollments: Vec<Enrollment>,
}

impl Student {
    /// Create a student with no enrollments
    ///
    /// Ids are normally handed out by
    /// [`StudentDirectory::add`](crate::core::directory::StudentDirectory::add).
    #[must_use]
    pub fn new(
        id: u32,
        reg_no: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            reg_no: reg_no.into(),
            full_name: full_name.into(),
            email: email.into(),
            enrollments: Vec::new(),
        }
    }

    /// Sequential directory id
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Registration number
    #[must_use]
    pub fn reg_no(&self) -> &str {
        &self.reg_no
    }

    /// Full name
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Update the full name
    pub fn set_full_name(&mut self, full_name: impl Into<String>) {
        self.full_name = full_name.into();
    }

    /// Contact email
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Update the contact email
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// One-line profile used in listings and transcript headers
    #[must_use]
    pub fn profile(&self) -> String {
        format!(
            "Student Profile [ID: {}, RegNo: {}, Name: {}]",
            self.id, self.reg_no, self.full_name
        )
    }

    /// Enrollments in insertion order
    #[must_use]
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Enrollment for `code` (case-insensitive), if any
    #[must_use]
    pub fn enrollment_for(&self, code: &str) -> Option<&Enrollment> {
        self.enrollments
            .iter()
            .find(|e| e.course().matches_code(code))
    }

    /// Whether the student holds an enrollment for `code`
    #[must_use]
    pub fn is_enrolled_in(&self, code: &str) -> bool {
        self.enrollment_for(code).is_some()
    }

    /// Sum of credits across every enrollment, graded or not
    #[must_use]
    pub fn total_credits(&self) -> u32 {
        self.enrollments.iter().map(|e| e.course().credits()).sum()
    }

    pub(crate) fn push_enrollment(&mut self, enrollment: Enrollment) -> &Enrollment {
        self.enrollments.push(enrollment);
        let last = self.enrollments.len() - 1;
        &self.enrollments[last]
    }

    pub(crate) fn set_grade_for(&mut self, code: &str, grade: Grade) -> bool {
        let Some(enrollment) = self
            .enrollments
            .iter_mut()
            .find(|e| e.course().matches_code(code))
        else {
            return false;
        };
        enrollment.set_grade(grade);
        true
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}", self.id, self.full_name)
    }
}
