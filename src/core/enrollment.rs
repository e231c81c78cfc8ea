//! Enrollment rules and grade assignment
//!
//! [`EnrollmentEngine::enroll`] is all-or-nothing: every check runs before the
//! student is touched, so a rejected call leaves the enrollment list unchanged.
//! Checks run in a fixed order and the first violation wins:
//!
//! 1. duplicate course code (case-insensitive)
//! 2. semester credit ceiling ([`MAX_CREDITS_PER_SEMESTER`])
//!
//! The engine holds no state of its own. Callers that share students across
//! threads must serialize `enroll`/`assign_grade` per student, since the
//! checks and the append form one critical section.

use crate::core::error::EnrollmentError;
use crate::core::models::{Course, Enrollment, Grade, Student};
use crate::{debug, info, warn};
use std::sync::Arc;

/// Maximum total credits a student may carry in a semester
pub const MAX_CREDITS_PER_SEMESTER: u32 = 20;

/// Gatekeeper for creating enrollments and assigning grades
#[derive(Debug, Clone, Copy, Default)]
pub struct EnrollmentEngine;

impl EnrollmentEngine {
    /// Create an engine
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Semester credit ceiling enforced by [`enroll`](Self::enroll)
    #[must_use]
    pub const fn credit_limit(&self) -> u32 {
        MAX_CREDITS_PER_SEMESTER
    }

    /// Run the enrollment checks without mutating anything
    ///
    /// # Errors
    /// Returns [`EnrollmentError::DuplicateEnrollment`] if the student already
    /// holds `course`, otherwise [`EnrollmentError::CreditLimitExceeded`] if the
    /// course would take them past the ceiling.
    pub fn check(&self, student: &Student, course: &Course) -> Result<(), EnrollmentError> {
        if student.is_enrolled_in(course.code()) {
            return Err(EnrollmentError::DuplicateEnrollment {
                code: course.code().to_string(),
            });
        }

        let current = student.total_credits();
        if current + course.credits() > self.credit_limit() {
            debug!(
                "{} carries {current} credits; {} would add {}",
                student.reg_no(),
                course.code(),
                course.credits()
            );
            return Err(EnrollmentError::CreditLimitExceeded {
                limit: self.credit_limit(),
            });
        }

        Ok(())
    }

    /// Enroll `student` in `course`
    ///
    /// On success a new ungraded enrollment stamped with the current time is
    /// appended to the student's list and returned.
    ///
    /// # Errors
    /// See [`check`](Self::check). The student is unchanged on error.
    pub fn enroll<'s>(
        &self,
        student: &'s mut Student,
        course: &Arc<Course>,
    ) -> Result<&'s Enrollment, EnrollmentError> {
        if let Err(err) = self.check(student, course) {
            warn!(
                "Enrollment of {} in {} rejected: {err}",
                student.reg_no(),
                course.code()
            );
            return Err(err);
        }

        let enrollment = Enrollment::new(student.id(), Arc::clone(course));
        info!(
            "Enrollment successful for {} in {}",
            student.full_name(),
            course.title()
        );
        Ok(student.push_enrollment(enrollment))
    }

    /// Set or overwrite the grade on the student's enrollment for `course`
    ///
    /// Silently does nothing when the student is not enrolled in the course.
    /// Returns whether a grade was written.
    pub fn assign_grade(&self, student: &mut Student, course: &Course, grade: Grade) -> bool {
        let assigned = student.set_grade_for(course.code(), grade);
        if assigned {
            info!(
                "Grade {grade} assigned to {} for {}",
                student.reg_no(),
                course.title()
            );
        } else {
            debug!(
                "No enrollment for {} in {}; grade {grade} ignored",
                student.reg_no(),
                course.code()
            );
        }
        assigned
    }
}
