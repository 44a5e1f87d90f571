//! Askama templates for the form page and the rendered resume.
//!
//! The resume template is shared between the two render targets; the mode
//! flag decides whether on-screen chrome (edit / download links) is included
//! and which stylesheet href the document references.

use askama::Template;
use askama_web::WebTemplate;

use resume_maker_core::ResumeData;

/// Presentation variant for the resume template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// On-screen preview: interactive chrome, stylesheet served over HTTP.
    Preview,
    /// Converter input: no chrome, stylesheet referenced via file:// URL.
    Pdf,
}

impl RenderMode {
    pub const fn is_pdf(self) -> bool {
        matches!(self, Self::Pdf)
    }
}

/// Landing page with the resume input form.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// The rendered resume, in either presentation mode.
///
/// Field values come straight from the session's [`ResumeData`]; askama
/// escapes them on interpolation.
#[derive(Template, WebTemplate)]
#[template(path = "resume.html")]
pub struct ResumeTemplate {
    pub data: ResumeData,
    pub mode: RenderMode,
    pub stylesheet_href: String,
}

impl ResumeTemplate {
    pub const fn preview(data: ResumeData, stylesheet_href: String) -> Self {
        Self {
            data,
            mode: RenderMode::Preview,
            stylesheet_href,
        }
    }

    pub const fn pdf(data: ResumeData, stylesheet_href: String) -> Self {
        Self {
            data,
            mode: RenderMode::Pdf,
            stylesheet_href,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ResumeData {
        ResumeData::from_form([
            ("name".to_string(), "Jane Doe".to_string()),
            ("email".to_string(), "jane@example.com".to_string()),
        ])
    }

    #[test]
    fn preview_and_pdf_renders_share_field_values() {
        let preview = ResumeTemplate::preview(jane(), "/static/resume.css".to_string())
            .render()
            .unwrap();
        let pdf = ResumeTemplate::pdf(jane(), "file:///tmp/resume.css".to_string())
            .render()
            .unwrap();

        for html in [&preview, &pdf] {
            assert!(html.contains("Jane Doe"));
            assert!(html.contains("jane@example.com"));
        }
    }

    #[test]
    fn chrome_appears_only_in_preview_mode() {
        let preview = ResumeTemplate::preview(jane(), "/static/resume.css".to_string())
            .render()
            .unwrap();
        let pdf = ResumeTemplate::pdf(jane(), "file:///tmp/resume.css".to_string())
            .render()
            .unwrap();

        assert!(preview.contains("/download"));
        assert!(!pdf.contains("/download"));
    }

    #[test]
    fn field_values_are_escaped() {
        let data = ResumeData::from_form([(
            "name".to_string(),
            "<script>alert(1)</script>".to_string(),
        )]);
        let html = ResumeTemplate::preview(data, "/static/resume.css".to_string())
            .render()
            .unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
