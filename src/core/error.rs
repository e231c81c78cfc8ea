//! Error types for the records engine
//!
//! Directory lookups do not error; they return `Option`.

use std::path::PathBuf;
use thiserror::Error;

/// Rejected course construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Course code is empty or whitespace only
    #[error("course code cannot be empty")]
    EmptyCode,

    /// Credits outside the allowed range
    #[error("credits must be between {min} and {max}, got {credits}")]
    CreditsOutOfRange {
        /// Offending credit value
        credits: u32,
        /// Lowest accepted value
        min: u32,
        /// Highest accepted value
        max: u32,
    },
}

/// Rejected enrollment. The student is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentError {
    /// The student already holds an enrollment for this course code
    #[error("student is already enrolled in course {code}")]
    DuplicateEnrollment {
        /// Course code of the existing enrollment
        code: String,
    },

    /// The new course would push the student over the semester credit ceiling
    #[error("cannot enroll: max credit limit of {limit} would be exceeded")]
    CreditLimitExceeded {
        /// Semester credit ceiling
        limit: u32,
    },
}

/// Filesystem failures in the import and backup collaborators
#[derive(Error, Debug)]
pub enum DataError {
    /// Input path does not exist
    #[error("file not found: {}", path.display())]
    NotFound {
        /// Missing path
        path: PathBuf,
    },

    /// Underlying I/O error
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Original error
        #[source]
        source: std::io::Error,
    },
}

impl DataError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
