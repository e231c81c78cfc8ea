//! Built-in sample data for demos and manual testing

use crate::core::directory::{CourseDirectory, StudentDirectory};
use crate::core::error::ValidationError;
use crate::core::models::Course;

/// Register two students and three courses
///
/// # Errors
/// Returns a [`ValidationError`] only if the built-in course table is invalid.
pub fn load_sample_data(
    students: &mut StudentDirectory,
    courses: &mut CourseDirectory,
) -> Result<(), ValidationError> {
    students.add("S001", "Alice Smith", "alice@example.com");
    students.add("S002", "Bob Johnson", "bob@example.com");

    let table = [
        ("CS101", "Intro to Programming", 4, "CS"),
        ("MA201", "Calculus I", 4, "Math"),
        ("EN101", "English Composition", 3, "English"),
    ];
    for (code, title, credits, department) in table {
        courses.add(
            Course::builder(code, title)
                .credits(credits)
                .department(department)
                .build()?,
        );
    }
    Ok(())
}
