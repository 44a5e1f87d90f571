//! HTML-to-PDF conversion via an external wkhtmltopdf process.
//!
//! The converter is treated as an opaque collaborator: rendered HTML plus a
//! fixed option set in, PDF bytes out, or an error. Every invocation uses
//! per-request unique temp files that are removed when the handles drop, so
//! concurrent exports never contend for a shared output path.

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::ConverterConfig;
use crate::error::{Error, Result};

/// Invokes the configured converter binary on rendered HTML.
#[derive(Debug, Clone)]
pub struct PdfConverter {
    config: ConverterConfig,
}

impl PdfConverter {
    pub const fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Command-line arguments for one conversion: options first, then the
    /// input HTML path, then the output PDF path (wkhtmltopdf convention).
    fn build_args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        let mut args = Vec::new();
        if self.config.enable_local_file_access {
            args.push(OsString::from("--enable-local-file-access"));
        }
        if self.config.quiet {
            args.push(OsString::from("--quiet"));
        }
        args.push(input.as_os_str().to_os_string());
        args.push(output.as_os_str().to_os_string());
        args
    }

    /// Convert an HTML document to PDF bytes.
    ///
    /// Blocks the calling task until the converter exits; there is no retry.
    /// The temp files live only for the duration of this call.
    pub async fn html_to_pdf(&self, html: &str) -> Result<Vec<u8>> {
        let mut html_file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(".html")
            .tempfile()?;
        html_file.write_all(html.as_bytes())?;
        html_file.flush()?;

        let pdf_file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(".pdf")
            .tempfile()?;

        debug!("HTML written to: {:?}", html_file.path());

        let binary = self.config.binary.clone();
        let args = self.build_args(html_file.path(), pdf_file.path());

        debug!("Running converter: {:?} {:?}", binary, args);

        let output = Command::new(&binary)
            .args(&args)
            .output()
            .await
            .map_err(|e| Error::ConverterSpawn {
                binary: binary.display().to_string(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::ConverterFailed {
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        let pdf_bytes = tokio::fs::read(pdf_file.path()).await?;

        info!(size_kb = pdf_bytes.len() / 1024, "PDF generated successfully");

        Ok(pdf_bytes)
    }
}
