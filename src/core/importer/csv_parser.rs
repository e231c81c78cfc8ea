//! CSV course importer
//!
//! Each line is `code,title,credits,department`. The import is not atomic:
//! good lines are added as they are read and bad lines are skipped.
//!
//! - wrong field count: skipped silently (debug log)
//! - non-numeric credits: skipped, logged as an error
//! - rejected by the course builder: skipped, logged as a warning

use crate::core::directory::CourseDirectory;
use crate::core::error::{DataError, ValidationError};
use crate::core::models::Course;
use crate::{debug, error, info, warn};
use std::fs;
use std::path::Path;

/// Number of fields in a well-formed course line
const FIELD_COUNT: usize = 4;

/// Outcome of parsing a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Line produced a valid course
    Course(Course),
    /// Line did not have exactly four fields
    WrongFieldCount(usize),
    /// Credits field is not an unsigned integer
    BadCredits(String),
    /// Course builder rejected the values
    Invalid(ValidationError),
}

/// Counters reported after an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Courses added to the directory
    pub imported: usize,
    /// Lines skipped for having the wrong number of fields
    pub skipped: usize,
    /// Lines with four fields that still could not become a course
    pub failed: usize,
}

/// Parse one CSV line into a course
#[must_use]
pub fn parse_course_line(line: &str) -> LineOutcome {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return LineOutcome::WrongFieldCount(fields.len());
    }

    let Ok(credits) = fields[2].parse::<u32>() else {
        return LineOutcome::BadCredits(fields[2].to_string());
    };

    match Course::builder(fields[0], fields[1])
        .credits(credits)
        .department(fields[3])
        .build()
    {
        Ok(course) => LineOutcome::Course(course),
        Err(e) => LineOutcome::Invalid(e),
    }
}

/// Import every well-formed line of `content` into `courses`
pub fn import_courses_str(content: &str, courses: &mut CourseDirectory) -> ImportSummary {
    let mut summary = ImportSummary::default();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        match parse_course_line(line) {
            LineOutcome::Course(course) => {
                courses.add(course);
                summary.imported += 1;
            }
            LineOutcome::WrongFieldCount(n) => {
                debug!("Line {line_no}: expected {FIELD_COUNT} fields, found {n}; skipped");
                summary.skipped += 1;
            }
            LineOutcome::BadCredits(raw) => {
                error!("Line {line_no}: credits '{raw}' is not a number; skipped");
                summary.failed += 1;
            }
            LineOutcome::Invalid(e) => {
                warn!("Line {line_no}: {e}; skipped");
                summary.failed += 1;
            }
        }
    }

    summary
}

/// Import courses from a CSV file
///
/// # Arguments
/// * `path` - Path to the CSV file
/// * `courses` - Directory receiving the parsed courses
///
/// # Errors
/// Returns [`DataError::NotFound`] if the file does not exist, or
/// [`DataError::Io`] if it cannot be read. Nothing is added in either case.
pub fn import_courses<P: AsRef<Path>>(
    path: P,
    courses: &mut CourseDirectory,
) -> Result<ImportSummary, DataError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DataError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
    let summary = import_courses_str(&content, courses);
    info!(
        "Imported {} courses from {} ({} skipped, {} failed)",
        summary.imported,
        path.display(),
        summary.skipped,
        summary.failed
    );
    Ok(summary)
}
