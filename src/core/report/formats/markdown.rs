//! Markdown transcript generator

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/transcript.md");

/// Markdown transcript generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render_template(ctx: &ReportContext) -> String {
        let transcript = ctx.transcript;
        MARKDOWN_TEMPLATE
            .replace("{{student_name}}", &transcript.student_name)
            .replace("{{reg_no}}", &transcript.reg_no)
            .replace("{{profile}}", &transcript.profile)
            .replace("{{generated_at}}", &ctx.generated_label())
            .replace("{{course_table}}", &Self::course_table(ctx))
            .replace("{{course_count}}", &transcript.lines.len().to_string())
            .replace("{{graded_credits}}", &transcript.graded_credits.to_string())
            .replace("{{gpa}}", &ctx.gpa_label())
    }

    /// Rows in enrollment order
    fn course_table(ctx: &ReportContext) -> String {
        if ctx.transcript.lines.is_empty() {
            return "No courses enrolled.".to_string();
        }

        let mut table = String::new();
        table.push_str("| Code | Title | Credits | Grade |\n");
        table.push_str("|---|---|---|---|\n");
        for line in &ctx.transcript.lines {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} |",
                line.code,
                line.title.replace('|', "\\|"),
                line.credits,
                line.grade_label()
            );
        }
        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::render_template(ctx))
    }
}
