//! Download route - PDF export handling.

use askama::Template;
use axum::{
    body::Body,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tower_sessions::Session;
use tracing::{error, info};

use crate::helpers::{ResultExt, RouteResult};
use crate::session::ResumeStore;
use crate::state::AppState;
use crate::templates::ResumeTemplate;

/// Export the session's resume as a PDF attachment.
///
/// A session with no stored submission is bounced back to the form; that is
/// the only recovered error on this path. The export is regenerated from the
/// current session data on every call - nothing is cached between downloads.
pub async fn download(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> RouteResult<Response> {
    let Some(data) = ResumeStore::new(session).get().await.or_internal_error()? else {
        return Ok(Redirect::to("/").into_response());
    };

    let html = ResumeTemplate::pdf(data, state.pdf_stylesheet_href().to_string())
        .render()
        .or_internal_error()?;

    let pdf = state.converter().html_to_pdf(&html).await.map_err(|e| {
        error!("PDF conversion failed: {e}");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    info!(size = pdf.len(), "Serving resume PDF");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"resume.pdf\"",
        )
        .body(Body::from(pdf))
        .or_internal_error()
}
