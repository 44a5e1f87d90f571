use std::path::Path;

use resume_maker_core::{AppConfig, PdfConverter};

/// Global application state.
///
/// Session data does not live here; it belongs to the tower-sessions layer.
/// This holds the collaborators resolved once at startup: the PDF converter
/// and the stylesheet locations for the two render targets.
pub struct AppState {
    converter: PdfConverter,
    /// Absolute `file://` href to the stylesheet, for the converter's benefit
    /// (it resolves local assets itself, with local file access enabled).
    pdf_stylesheet: String,
}

impl AppState {
    pub fn new(config: AppConfig, static_dir: &Path) -> Self {
        let css = static_dir.join("resume.css");
        let css = std::path::absolute(&css).unwrap_or(css);

        Self {
            converter: PdfConverter::new(config.converter),
            pdf_stylesheet: format!("file://{}", css.display()),
        }
    }

    pub const fn converter(&self) -> &PdfConverter {
        &self.converter
    }

    /// Stylesheet href for PDF-mode renders (resolved on the local filesystem).
    pub fn pdf_stylesheet_href(&self) -> &str {
        &self.pdf_stylesheet
    }

    /// Stylesheet href for preview-mode renders (served over HTTP).
    pub const fn preview_stylesheet_href() -> &'static str {
        "/static/resume.css"
    }
}
