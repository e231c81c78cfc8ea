//! Course model

use crate::core::error::ValidationError;
use std::fmt;

/// Lowest credit count a course may carry
pub const MIN_CREDITS: u32 = 1;

/// Highest credit count a course may carry
pub const MAX_CREDITS: u32 = 9;

/// Credits assumed when the builder is not given any
pub const DEFAULT_CREDITS: u32 = 3;

/// Department assumed when the builder is not given one
pub const DEFAULT_DEPARTMENT: &str = "General";

/// Represents a course in the catalog
///
/// Immutable once built. The only way to obtain one is [`CourseBuilder::build`],
/// so `credits` is always within [`MIN_CREDITS`]..=[`MAX_CREDITS`] and `code`
/// is never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    code: String,
    title: String,
    credits: u32,
    department: String,
}

impl Course {
    /// Start building a course with its code and title
    ///
    /// # Arguments
    /// * `code` - Course code (e.g., "CS101"), unique case-insensitively
    /// * `title` - Human-readable title (e.g., "Intro to Programming")
    #[must_use]
    pub fn builder(code: impl Into<String>, title: impl Into<String>) -> CourseBuilder {
        CourseBuilder::new(code, title)
    }

    /// Course code, trimmed of surrounding whitespace
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Course title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Credit count, always within `1..=9`
    #[must_use]
    pub const fn credits(&self) -> u32 {
        self.credits
    }

    /// Owning department
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Whether `code` names this course (case-insensitive, surrounding blanks ignored)
    #[must_use]
    pub fn matches_code(&self, code: &str) -> bool {
        self.code.trim().eq_ignore_ascii_case(code.trim())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course[Code={}, Title='{}', Credits={}, Dept={}]",
            self.code, self.title, self.credits, self.department
        )
    }
}

/// Validating builder for [`Course`]
#[derive(Debug, Clone)]
pub struct CourseBuilder {
    code: String,
    title: String,
    credits: u32,
    department: String,
}

impl CourseBuilder {
    /// Create a builder with default credits and department
    #[must_use]
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            credits: DEFAULT_CREDITS,
            department: DEFAULT_DEPARTMENT.to_string(),
        }
    }

    /// Set the credit count (validated on [`build`](Self::build))
    #[must_use]
    pub const fn credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Set the department
    #[must_use]
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Validate and produce the course
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyCode`] if the code is blank, or
    /// [`ValidationError::CreditsOutOfRange`] if credits fall outside `1..=9`.
    pub fn build(self) -> Result<Course, ValidationError> {
        let code = self.code.trim();
        if code.is_empty() {
            return Err(ValidationError::EmptyCode);
        }
        if !(MIN_CREDITS..=MAX_CREDITS).contains(&self.credits) {
            return Err(ValidationError::CreditsOutOfRange {
                credits: self.credits,
                min: MIN_CREDITS,
                max: MAX_CREDITS,
            });
        }

        Ok(Course {
            code: code.to_string(),
            title: self.title,
            credits: self.credits,
            department: self.department,
        })
    }
}
