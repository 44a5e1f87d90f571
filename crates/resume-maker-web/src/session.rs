//! The session-scoped resume slot.
//!
//! Each client session holds at most one [`ResumeData`]: `put` overwrites it
//! wholesale on every form submission, `get` reads it back on download. The
//! cookie and server-side storage mechanics belong to tower-sessions; this
//! wrapper is the explicit store interface the handlers talk to.

use tower_sessions::{Session, session};

use resume_maker_core::ResumeData;

const RESUME_KEY: &str = "resume_data";

/// Single-slot resume store over the request's session.
pub struct ResumeStore {
    session: Session,
}

impl ResumeStore {
    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    /// Overwrite the session's resume slot with a fresh submission.
    pub async fn put(&self, data: &ResumeData) -> Result<(), session::Error> {
        self.session.insert(RESUME_KEY, data).await
    }

    /// Read the stored resume, or `None` if this session never submitted one.
    pub async fn get(&self) -> Result<Option<ResumeData>, session::Error> {
        self.session.get::<ResumeData>(RESUME_KEY).await
    }
}
