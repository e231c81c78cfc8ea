//! HTML transcript generator
//!
//! Renders `templates/transcript.html` through askama, which escapes every
//! interpolated value.

use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::transcript::Transcript;
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "transcript.html")]
struct TranscriptPage<'a> {
    transcript: &'a Transcript,
    generated_at: String,
    gpa: String,
}

/// HTML transcript generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let page = TranscriptPage {
            transcript: ctx.transcript,
            generated_at: ctx.generated_label(),
            gpa: ctx.gpa_label(),
        };
        Ok(page.render()?)
    }
}
