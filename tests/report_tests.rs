//! Integration tests for transcript export

use campus_records::core::models::Grade;
use campus_records::core::report::{export_transcript, ReportFormat};
use campus_records::core::sample::load_sample_data;
use campus_records::core::{CourseDirectory, EnrollmentEngine, StudentDirectory, TranscriptCalculator};
use std::fs;
use tempfile::TempDir;

fn graded_transcript() -> campus_records::core::Transcript {
    let mut students = StudentDirectory::new();
    let mut courses = CourseDirectory::new();
    load_sample_data(&mut students, &mut courses).unwrap();
    let engine = EnrollmentEngine::new();

    let alice = students.find_by_reg_no_mut("S001").unwrap();
    let cs101 = courses.find_by_code("CS101").unwrap();
    let en101 = courses.find_by_code("EN101").unwrap();
    engine.enroll(alice, &cs101).unwrap();
    engine.enroll(alice, &en101).unwrap();
    engine.assign_grade(alice, &cs101, Grade::A);
    engine.assign_grade(alice, &en101, Grade::B);

    TranscriptCalculator::transcript(alice)
}

#[test]
fn exports_markdown_and_html() {
    let tmp = TempDir::new().unwrap();
    let reports = tmp.path().join("reports");
    let transcript = graded_transcript();

    let md = export_transcript(&transcript, ReportFormat::Markdown, &reports).unwrap();
    let html = export_transcript(&transcript, ReportFormat::Html, &reports).unwrap();

    assert_eq!(md.file_name().unwrap(), "transcript_S001.md");
    assert_eq!(html.file_name().unwrap(), "transcript_S001.html");

    let md_text = fs::read_to_string(md).unwrap();
    assert!(md_text.contains("| CS101 | Intro to Programming | 4 | A |"));
    assert!(md_text.contains("8.57"));

    let html_text = fs::read_to_string(html).unwrap();
    assert!(html_text.contains("Alice Smith"));
    assert!(html_text.contains("8.57"));
}
