//! Preview route - form submission handling.

use axum::extract::Form;
use std::collections::HashMap;
use tower_sessions::Session;
use tracing::info;

use resume_maker_core::ResumeData;

use crate::helpers::{ResultExt, RouteResult};
use crate::session::ResumeStore;
use crate::state::AppState;
use crate::templates::ResumeTemplate;

/// Accept a form submission, overwrite the session's resume slot, and render
/// the result in preview mode.
///
/// Fields are free-form strings; the only filtering is the allow-list applied
/// by [`ResumeData::from_form`]. Duplicate keys resolve last-wins during form
/// decoding.
pub async fn preview(
    session: Session,
    Form(fields): Form<HashMap<String, String>>,
) -> RouteResult<ResumeTemplate> {
    let data = ResumeData::from_form(fields);

    ResumeStore::new(session)
        .put(&data)
        .await
        .or_internal_error()?;

    info!(fields = data.len(), "Stored resume submission");

    Ok(ResumeTemplate::preview(
        data,
        AppState::preview_stylesheet_href().to_string(),
    ))
}
