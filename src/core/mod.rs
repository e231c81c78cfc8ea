//! Enrollment and academic record engine, plus the collaborators around it

pub mod backup;
pub mod config;
pub mod directory;
pub mod enrollment;
pub mod error;
pub mod importer;
pub mod models;
pub mod report;
pub mod sample;
pub mod transcript;

pub use directory::{CourseDirectory, StudentDirectory};
pub use enrollment::{EnrollmentEngine, MAX_CREDITS_PER_SEMESTER};
pub use error::{DataError, EnrollmentError, ValidationError};
pub use transcript::{Transcript, TranscriptCalculator, TranscriptLine};

/// Returns the current version of the crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
