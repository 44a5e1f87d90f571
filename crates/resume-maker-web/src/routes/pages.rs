//! Page routes - full HTML page renders.

use crate::templates::IndexTemplate;

/// Landing page with the resume input form.
pub async fn index() -> IndexTemplate {
    IndexTemplate
}
