//! Document export — writes the rendered HTML and hands off to external
//! tools.
//!
//! PDF conversion is delegated: when `wkhtmltopdf` is installed the written
//! HTML is converted next to it, otherwise the HTML can be opened with the
//! platform handler and printed to PDF from there. Export problems are
//! logged and reported to the caller; they never become screen errors.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use tracing::{info, warn};

const HTML_FILENAME: &str = "resume.html";
const PDF_FILENAME: &str = "resume.pdf";
const PDF_CONVERTER: &str = "wkhtmltopdf";

/// Where an export ended up on disk.
#[derive(Debug)]
pub struct ExportOutcome {
    pub html_path: PathBuf,
    /// Present only when the PDF converter ran successfully.
    pub pdf_path: Option<PathBuf>,
}

pub struct Exporter {
    out_dir: PathBuf,
}

impl Exporter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }

    /// Writes the document and attempts PDF conversion. The HTML write must
    /// succeed; a missing or failing converter only downgrades the outcome.
    pub fn export(&self, document_html: &str) -> Result<ExportOutcome> {
        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("creating export directory {}", self.out_dir.display()))?;

        let html_path = self.out_dir.join(HTML_FILENAME);
        fs::write(&html_path, document_html)
            .with_context(|| format!("writing {}", html_path.display()))?;
        info!("Wrote {}", html_path.display());

        let pdf_path = self.out_dir.join(PDF_FILENAME);
        let pdf_path = match convert_to_pdf(&html_path, &pdf_path) {
            Ok(()) => {
                info!("Wrote {}", pdf_path.display());
                Some(pdf_path)
            }
            Err(ConvertError::NotInstalled) => {
                info!("{PDF_CONVERTER} not found on PATH, leaving HTML only");
                None
            }
            Err(ConvertError::Failed(detail)) => {
                warn!("PDF conversion failed: {detail}");
                None
            }
        };

        Ok(ExportOutcome {
            html_path,
            pdf_path,
        })
    }

    /// Opens a file with the platform handler, for HTML that means the
    /// default browser.
    pub fn open(path: &Path) -> Result<()> {
        #[cfg(target_os = "macos")]
        Command::new("open")
            .arg(path)
            .spawn()
            .with_context(|| format!("opening {}", path.display()))?;

        #[cfg(target_os = "linux")]
        Command::new("xdg-open")
            .arg(path)
            .spawn()
            .with_context(|| format!("opening {}", path.display()))?;

        #[cfg(target_os = "windows")]
        Command::new("cmd")
            .args(["/C", "start", ""])
            .arg(path)
            .spawn()
            .with_context(|| format!("opening {}", path.display()))?;

        Ok(())
    }
}

enum ConvertError {
    NotInstalled,
    Failed(String),
}

fn convert_to_pdf(html: &Path, pdf: &Path) -> Result<(), ConvertError> {
    let output = Command::new(PDF_CONVERTER).arg(html).arg(pdf).output();
    match output {
        Err(error) if error.kind() == io::ErrorKind::NotFound => Err(ConvertError::NotInstalled),
        Err(error) => Err(ConvertError::Failed(error.to_string())),
        Ok(output) if output.status.success() => Ok(()),
        Ok(output) => Err(ConvertError::Failed(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        )),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_writes_html_document() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path().to_path_buf());

        let outcome = exporter.export("<!DOCTYPE html><html></html>").unwrap();

        assert_eq!(outcome.html_path, dir.path().join("resume.html"));
        let written = fs::read_to_string(&outcome.html_path).unwrap();
        assert_eq!(written, "<!DOCTYPE html><html></html>");
    }

    #[test]
    fn test_export_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("docs");
        let exporter = Exporter::new(nested.clone());

        let outcome = exporter.export("<p>hi</p>").unwrap();

        assert!(outcome.html_path.starts_with(&nested));
        assert!(outcome.html_path.exists());
    }

    #[test]
    fn test_export_overwrites_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path().to_path_buf());

        exporter.export("first").unwrap();
        let outcome = exporter.export("second").unwrap();

        assert_eq!(fs::read_to_string(&outcome.html_path).unwrap(), "second");
    }
}
