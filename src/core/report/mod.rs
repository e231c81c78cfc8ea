//! Transcript export
//!
//! Renders a [`Transcript`] to Markdown or HTML and writes it under the
//! configured reports directory.

pub mod formats;

use crate::core::transcript::Transcript;
use chrono::{DateTime, Local};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data handed to a report generator
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Transcript being rendered
    pub transcript: &'a Transcript,
    /// Time stamped into the report
    pub generated_at: DateTime<Local>,
}

impl<'a> ReportContext<'a> {
    /// Context stamped with the current local time
    #[must_use]
    pub fn new(transcript: &'a Transcript) -> Self {
        Self {
            transcript,
            generated_at: Local::now(),
        }
    }

    /// Generation time formatted for display
    #[must_use]
    pub fn generated_label(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M").to_string()
    }

    /// GPA with two decimals
    #[must_use]
    pub fn gpa_label(&self) -> String {
        format!("{:.2}", self.transcript.gpa)
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Write `transcript` into `reports_dir` as `transcript_<regno>.<ext>`
///
/// # Returns
/// Path of the written file
///
/// # Errors
/// Returns an error if the directory cannot be created or the report cannot
/// be rendered or written.
pub fn export_transcript(
    transcript: &Transcript,
    format: ReportFormat,
    reports_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(reports_dir)?;
    let file_name = format!(
        "transcript_{}.{}",
        sanitize(&transcript.reg_no),
        format.extension()
    );
    let output_path = reports_dir.join(file_name);

    let ctx = ReportContext::new(transcript);
    match format {
        ReportFormat::Markdown => MarkdownReporter::new().generate(&ctx, &output_path)?,
        ReportFormat::Html => HtmlReporter::new().generate(&ctx, &output_path)?,
    }
    Ok(output_path)
}

/// Keep registration numbers safe to use in file names
fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
