//! Resume Maker Core Library
//!
//! This library provides the non-HTTP half of the resume maker:
//! - The session-scoped resume record (string field map with an allow-list)
//! - Configuration for the external HTML-to-PDF converter
//! - The converter invocation itself (wkhtmltopdf as a child process)

pub mod config;
pub mod convert;
pub mod error;
pub mod resume;

pub use config::{AppConfig, ConverterConfig};
pub use convert::PdfConverter;
pub use error::{Error, Result};
pub use resume::{ALLOWED_FIELDS, ResumeData};
