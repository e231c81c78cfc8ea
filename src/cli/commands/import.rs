//! Import command handler

use campus_records::core::importer::import_courses;
use campus_records::core::CourseDirectory;
use campus_records::verbose;
use std::path::Path;

/// Import `input_file` into a fresh catalog and print what it produced
pub fn run(input_file: &Path) {
    verbose!("Reading courses from {}", input_file.display());
    let mut courses = CourseDirectory::new();
    let summary = match import_courses(input_file, &mut courses) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    for course in courses.all() {
        println!("{course}");
    }
    println!(
        "\n✓ Imported {} course(s) from {} ({} skipped, {} failed)",
        summary.imported,
        input_file.display(),
        summary.skipped,
        summary.failed
    );
}
