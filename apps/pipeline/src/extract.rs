//! Text Extractor seam.
//!
//! The pipeline only needs `extract_text(file, mime) -> text`. The in-repo
//! implementation covers PDF (via pdf-extract) and plain text; OCR for
//! images and DOCX lives behind the same trait in an external service.

use std::path::Path;

use tracing::info;

use crate::errors::PipelineError;

pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, path: &Path, mime_type: &str) -> Result<String, PipelineError>;
}

pub struct FileTextExtractor;

impl TextExtractor for FileTextExtractor {
    fn extract_text(&self, path: &Path, mime_type: &str) -> Result<String, PipelineError> {
        let text = match mime_type {
            "application/pdf" => pdf_extract::extract_text(path)
                .map_err(|e| PipelineError::Extraction(format!("PDF extraction failed: {e}")))?,
            "text/plain" => std::fs::read_to_string(path)
                .map_err(|e| PipelineError::Extraction(format!("failed to read text file: {e}")))?,
            other => return Err(PipelineError::UnsupportedFormat(other.to_string())),
        };

        if text.trim().is_empty() {
            return Err(PipelineError::Extraction(
                "document produced no text".to_string(),
            ));
        }

        info!("Extracted {} characters from {}", text.len(), path.display());
        Ok(text)
    }
}

/// Best-effort MIME guess from the file extension, for the CLI entry point.
/// Uploads carry an explicit content type instead.
pub fn guess_mime(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "pdf" => Some("application/pdf"),
        "txt" | "text" | "md" => Some("text/plain"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_plain_text_extraction() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Ava Diaz\nStaff Engineer at Acme").unwrap();

        let text = FileTextExtractor
            .extract_text(file.path(), "text/plain")
            .unwrap();
        assert!(text.contains("Ava Diaz"));
    }

    #[test]
    fn test_unsupported_mime_type() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = FileTextExtractor
            .extract_text(file.path(), "application/msword")
            .unwrap_err();
        assert!(matches!(err, PipelineError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_empty_document_is_an_extraction_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = FileTextExtractor
            .extract_text(file.path(), "text/plain")
            .unwrap_err();
        assert!(matches!(err, PipelineError::Extraction(_)));
    }

    #[test]
    fn test_missing_file_is_an_extraction_error() {
        let err = FileTextExtractor
            .extract_text(Path::new("/nonexistent/resume.txt"), "text/plain")
            .unwrap_err();
        assert!(matches!(err, PipelineError::Extraction(_)));
    }

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime(Path::new("cv.pdf")), Some("application/pdf"));
        assert_eq!(guess_mime(Path::new("cv.txt")), Some("text/plain"));
        assert_eq!(guess_mime(Path::new("cv.docx")), None);
        assert_eq!(guess_mime(Path::new("cv")), None);
    }
}
