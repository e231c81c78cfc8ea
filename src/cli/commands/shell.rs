//! Interactive menu over the records engine
//!
//! Reads choices from any `BufRead` and writes prompts to any `Write`, so the
//! whole session can be scripted in tests.

use campus_records::config::Config;
use campus_records::core::backup::{create_backup, directory_size, ensure_storage_dirs, format_kb};
use campus_records::core::importer::import_courses;
use campus_records::core::models::{Course, Grade, Student};
use campus_records::core::report::{export_transcript, ReportFormat};
use campus_records::core::sample::load_sample_data;
use campus_records::core::{
    CourseDirectory, DataError, EnrollmentEngine, StudentDirectory, TranscriptCalculator,
};
use campus_records::{error, info};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// In-memory state for one shell session
pub struct Session<'c> {
    students: StudentDirectory,
    courses: CourseDirectory,
    engine: EnrollmentEngine,
    config: &'c Config,
}

impl<'c> Session<'c> {
    /// Empty session using `config` for paths
    pub fn new(config: &'c Config) -> Self {
        Self {
            students: StudentDirectory::new(),
            courses: CourseDirectory::new(),
            engine: EnrollmentEngine::new(),
            config,
        }
    }

    /// Create the data and backup directories the session writes to
    ///
    /// # Errors
    /// Returns [`DataError::Io`] if either directory cannot be created.
    pub fn prepare_storage(&self) -> Result<(), DataError> {
        ensure_storage_dirs(&self.config.paths)
    }

    /// Add the built-in sample students and courses
    pub fn load_sample(&mut self) {
        if let Err(e) = load_sample_data(&mut self.students, &mut self.courses) {
            error!("Sample data rejected: {e}");
        }
    }

    /// Import a course CSV, reporting the outcome on `out`
    pub fn import(&mut self, path: &Path, out: &mut impl Write) -> io::Result<()> {
        match import_courses(path, &mut self.courses) {
            Ok(summary) => writeln!(
                out,
                "Courses imported from {}: {} added, {} skipped, {} failed",
                path.display(),
                summary.imported,
                summary.skipped,
                summary.failed
            ),
            Err(e) => {
                error!("Import failed: {e}");
                writeln!(out, "✗ Import failed: {e}")
            }
        }
    }

    /// Read-only access to the students
    pub const fn students(&self) -> &StudentDirectory {
        &self.students
    }

    /// Read-only access to the courses
    pub const fn courses(&self) -> &CourseDirectory {
        &self.courses
    }
}

/// Run the shell on stdin/stdout
pub fn run(config: &Config, load_sample: bool, course_files: &[PathBuf]) {
    let mut session = Session::new(config);
    if let Err(e) = session.prepare_storage() {
        error!("Storage directories unavailable: {e}");
        eprintln!("✗ {e}");
    }
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let result = (|| -> io::Result<()> {
        writeln!(stdout, "Welcome to the Campus Course & Records Manager!")?;
        if load_sample {
            session.load_sample();
            writeln!(stdout, "Sample data loaded.")?;
        }
        for file in course_files {
            session.import(file, &mut stdout)?;
        }
        run_menu(&mut session, &mut stdin.lock(), &mut stdout)
    })();

    if let Err(e) = result {
        error!("Shell terminated: {e}");
        eprintln!("✗ {e}");
    }
}

/// Main menu loop; returns when the user picks 0 or input ends
pub fn run_menu<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        writeln!(out, "\n========== MAIN MENU ==========")?;
        writeln!(out, "1. Manage Students")?;
        writeln!(out, "2. Manage Courses")?;
        writeln!(out, "3. Manage Enrollment & Grades")?;
        writeln!(out, "4. Data Import/Backup")?;
        writeln!(out, "0. Exit")?;
        writeln!(out, "===============================")?;

        let Some(choice) = prompt(input, out, "Enter choice: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => manage_students(session, input, out)?,
            "2" => manage_courses(session, input, out)?,
            "3" => manage_enrollment(session, input, out)?,
            "4" => manage_data(session, input, out)?,
            "0" => break,
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
    writeln!(out, "Goodbye!")
}

/// Print `label`, read one trimmed line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_or_empty<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<String> {
    Ok(prompt(input, out, label)?.unwrap_or_default())
}

fn manage_students<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n--- Student Menu ---")?;
    writeln!(out, "1. Add Student")?;
    writeln!(out, "2. View Transcript")?;
    writeln!(out, "3. List All Students")?;
    writeln!(out, "4. Update Student Email")?;
    writeln!(out, "5. Export Transcript")?;
    let choice = prompt_or_empty(input, out, "Choice: ")?;

    match choice.as_str() {
        "1" => {
            let reg_no = prompt_or_empty(input, out, "Enter RegNo: ")?;
            let name = prompt_or_empty(input, out, "Enter Full Name: ")?;
            let email = prompt_or_empty(input, out, "Enter Email: ")?;
            if reg_no.is_empty() {
                return writeln!(out, "RegNo cannot be empty.");
            }
            if session.students.find_by_reg_no(&reg_no).is_some() {
                return writeln!(out, "Student with RegNo '{reg_no}' already exists.");
            }
            let student = session.students.add(reg_no, name, email);
            writeln!(out, "Student added: {}", student.full_name())
        }
        "2" => {
            let reg_no = prompt_or_empty(input, out, "Enter Student RegNo: ")?;
            match session.students.find_by_reg_no(&reg_no) {
                Some(student) => write!(out, "\n{}", TranscriptCalculator::transcript(student)),
                None => writeln!(out, "Student not found."),
            }
        }
        "3" => {
            writeln!(out, "\n--- All Students ---")?;
            for student in session.students.iter() {
                writeln!(out, "{}", student.profile())?;
            }
            Ok(())
        }
        "4" => {
            let reg_no = prompt_or_empty(input, out, "Enter Student RegNo: ")?;
            let Some(student) = session.students.find_by_reg_no_mut(&reg_no) else {
                return writeln!(out, "Student not found.");
            };
            let email = prompt_or_empty(input, out, "Enter New Email: ")?;
            student.set_email(email);
            writeln!(out, "Email updated for {}", student.full_name())
        }
        "5" => export(session, input, out),
        _ => writeln!(out, "Invalid choice."),
    }
}

fn export<R: BufRead, W: Write>(session: &Session<'_>, input: &mut R, out: &mut W) -> io::Result<()> {
    let reg_no = prompt_or_empty(input, out, "Enter Student RegNo: ")?;
    let Some(student) = session.students.find_by_reg_no(&reg_no) else {
        return writeln!(out, "Student not found.");
    };
    let format_text = prompt_or_empty(input, out, "Format (md/html): ")?;
    let format = match format_text.parse::<ReportFormat>() {
        Ok(format) => format,
        Err(e) => return writeln!(out, "{e}"),
    };

    let transcript = TranscriptCalculator::transcript(student);
    let reports_dir = PathBuf::from(&session.config.paths.reports_dir);
    match export_transcript(&transcript, format, &reports_dir) {
        Ok(path) => {
            info!("Transcript exported to {}", path.display());
            writeln!(out, "✓ Transcript exported: {}", path.display())
        }
        Err(e) => {
            error!("Transcript export failed: {e}");
            writeln!(out, "✗ Export failed: {e}")
        }
    }
}

fn manage_courses<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n--- Course Menu ---")?;
    writeln!(out, "1. Add Course")?;
    writeln!(out, "2. List All Courses")?;
    let choice = prompt_or_empty(input, out, "Choice: ")?;

    match choice.as_str() {
        "1" => {
            let code = prompt_or_empty(input, out, "Enter Course Code: ")?;
            let title = prompt_or_empty(input, out, "Enter Title: ")?;
            let credits_text = prompt_or_empty(input, out, "Enter Credits: ")?;
            let department = prompt_or_empty(input, out, "Enter Department: ")?;

            let Ok(credits) = credits_text.parse::<u32>() else {
                return writeln!(out, "Invalid credits: '{credits_text}'");
            };
            if session.courses.find_by_code(&code).is_some() {
                return writeln!(out, "Course with code '{code}' already exists.");
            }
            let mut builder = Course::builder(code, title).credits(credits);
            if !department.is_empty() {
                builder = builder.department(department);
            }
            match builder.build() {
                Ok(course) => {
                    let course = session.courses.add(course);
                    writeln!(out, "Course added: {}", course.title())
                }
                Err(e) => writeln!(out, "✗ Invalid course: {e}"),
            }
        }
        "2" => {
            writeln!(out, "\n--- All Courses ---")?;
            for course in session.courses.all() {
                writeln!(out, "{course}")?;
            }
            Ok(())
        }
        _ => writeln!(out, "Invalid choice."),
    }
}

fn manage_enrollment<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n--- Enrollment Menu ---")?;
    writeln!(out, "1. Enroll Student in Course")?;
    writeln!(out, "2. Assign Grade")?;
    let choice = prompt_or_empty(input, out, "Choice: ")?;
    if choice != "1" && choice != "2" {
        return writeln!(out, "Invalid choice.");
    }

    let reg_no = prompt_or_empty(input, out, "Enter Student RegNo: ")?;
    let engine = session.engine;
    let Some(student) = session.students.find_by_reg_no_mut(&reg_no) else {
        writeln!(out, "Student with RegNo '{reg_no}' not found.")?;
        return writeln!(out, "Operation cancelled.");
    };
    let code = prompt_or_empty(input, out, "Enter Course Code: ")?;
    let Some(course) = session.courses.find_by_code(&code) else {
        writeln!(out, "Course with code '{code}' not found.")?;
        return writeln!(out, "Operation cancelled.");
    };

    if choice == "1" {
        enroll(engine, student, &course, out)
    } else {
        let grade_text = prompt_or_empty(input, out, "Enter Grade (S, A, B, ...): ")?;
        match grade_text.parse::<Grade>() {
            Ok(grade) => {
                if engine.assign_grade(student, &course, grade) {
                    writeln!(out, "Grade {grade} assigned for {}", course.title())
                } else {
                    writeln!(out, "{} is not enrolled in {}.", student.full_name(), course.code())
                }
            }
            Err(_) => writeln!(out, "Invalid grade entered."),
        }
    }
}

fn enroll<W: Write>(
    engine: EnrollmentEngine,
    student: &mut Student,
    course: &Arc<Course>,
    out: &mut W,
) -> io::Result<()> {
    let name = student.full_name().to_string();
    match engine.enroll(student, course) {
        Ok(_) => writeln!(
            out,
            "Enrollment successful for {name} in {}",
            course.title()
        ),
        Err(e) => writeln!(out, "Enrollment Failed: {e}"),
    }
}

fn manage_data<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n--- Data Menu ---")?;
    writeln!(out, "1. Import Courses from CSV")?;
    writeln!(out, "2. Create Backup")?;
    writeln!(out, "3. Show Backup Size")?;
    let choice = prompt_or_empty(input, out, "Choice: ")?;
    let config = session.config;
    let paths = &config.paths;

    match choice.as_str() {
        "1" => {
            let file = prompt_or_empty(input, out, "Enter filename (e.g., test-data/courses.csv): ")?;
            session.import(Path::new(&file), out)
        }
        "2" => match create_backup(Path::new(&paths.data_dir), Path::new(&paths.backup_dir)) {
            Ok(dest) => writeln!(out, "Backup successful: {}", dest.display()),
            Err(e) => {
                error!("Backup failed: {e}");
                writeln!(out, "✗ Backup failed: {e}")
            }
        },
        "3" => {
            let size = directory_size(Path::new(&paths.backup_dir));
            writeln!(out, "Total size of all backups is: {}", format_kb(size))
        }
        _ => writeln!(out, "Invalid choice."),
    }
}
