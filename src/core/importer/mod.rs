//! Importers that feed validated data into the directories

pub mod csv_parser;

pub use csv_parser::{import_courses, import_courses_str, parse_course_line, ImportSummary};
