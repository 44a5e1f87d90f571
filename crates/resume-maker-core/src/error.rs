use thiserror::Error;

/// Unified error type for resume-maker-core
///
/// This enum encompasses all error cases that can occur in the library:
/// - Converter operations (spawning the binary, non-zero exits)
/// - Configuration operations (loading, parsing)
/// - General I/O operations
#[derive(Error, Debug)]
pub enum Error {
    /// The converter binary could not be launched (missing, not executable)
    #[error("failed to launch converter '{binary}': {source}")]
    ConverterSpawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The converter ran but exited with a failure status
    #[error("converter exited with {status}: {stderr}")]
    ConverterFailed { status: String, stderr: String },

    /// Failed to load configuration file
    #[error("failed to load config: {0}")]
    ConfigLoad(String),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
