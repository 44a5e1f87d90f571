use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field names the resume template knows how to place.
///
/// Submitted form keys outside this list are dropped before anything reaches
/// the session or the template. Values are still free-form text; the template
/// engine escapes them on output.
pub const ALLOWED_FIELDS: &[&str] = &[
    "name",
    "title",
    "email",
    "phone",
    "location",
    "website",
    "summary",
    "experience",
    "education",
    "skills",
];

/// The session-scoped resume record.
///
/// A flat string-to-string field map, created fresh on every form submission
/// and overwriting whatever the session held before. Read on preview render
/// and on download; never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeData(BTreeMap<String, String>);

impl ResumeData {
    /// Build a record from submitted form fields, keeping only allow-listed
    /// keys. Dropped keys are logged at debug level.
    pub fn from_form(fields: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut map = BTreeMap::new();
        for (key, value) in fields {
            if ALLOWED_FIELDS.contains(&key.as_str()) {
                map.insert(key, value);
            } else {
                tracing::debug!(field = %key, "dropping unknown form field");
            }
        }
        Self(map)
    }

    /// Value for a field, or `None` if it was never submitted.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Value for a field, or the empty string if absent.
    ///
    /// Convenient for template interpolation where a missing field should
    /// simply render as nothing.
    pub fn field(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// Whether a field was submitted with a non-empty value.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
