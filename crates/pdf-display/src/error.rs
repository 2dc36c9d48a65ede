use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PdfError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid PDF file: {0}")]
    InvalidPdf(String),

    #[error("PDFium library not found: {0}")]
    LibraryNotFound(String),

    #[error("Page {page} out of range (1-{page_count})")]
    PageOutOfRange { page: usize, page_count: usize },

    #[error("Render failed: {0}")]
    RenderFailed(String),

    #[error("Drawing surface unavailable")]
    SurfaceUnavailable,

    #[error("Thread error: {0}")]
    ThreadError(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, PdfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let error = PdfError::FileNotFound(PathBuf::from("/test/path.pdf"));
        let msg = format!("{}", error);
        assert!(msg.contains("File not found"));
        assert!(msg.contains("path.pdf"));
    }

    #[test]
    fn test_invalid_pdf_display() {
        let error = PdfError::InvalidPdf("corrupted header".to_string());
        assert_eq!(error.to_string(), "Invalid PDF file: corrupted header");
    }

    #[test]
    fn test_library_not_found_display() {
        let error = PdfError::LibraryNotFound("libpdfium.so".to_string());
        assert_eq!(error.to_string(), "PDFium library not found: libpdfium.so");
    }

    #[test]
    fn test_page_out_of_range_display() {
        let error = PdfError::PageOutOfRange {
            page: 7,
            page_count: 3,
        };
        assert_eq!(error.to_string(), "Page 7 out of range (1-3)");
    }

    #[test]
    fn test_render_failed_display() {
        let error = PdfError::RenderFailed("bitmap allocation".to_string());
        assert_eq!(error.to_string(), "Render failed: bitmap allocation");
    }

    #[test]
    fn test_surface_unavailable_display() {
        assert_eq!(
            PdfError::SurfaceUnavailable.to_string(),
            "Drawing surface unavailable"
        );
    }

    #[test]
    fn test_thread_error_display() {
        let error = PdfError::ThreadError("worker disconnected".to_string());
        assert_eq!(error.to_string(), "Thread error: worker disconnected");
    }

    #[test]
    fn test_config_error_display() {
        let error = PdfError::ConfigError("expected value".to_string());
        assert_eq!(error.to_string(), "Config error: expected value");
    }

    #[test]
    fn test_error_is_cloneable() {
        let error = PdfError::RenderFailed("x".into());
        assert_eq!(error.clone(), error);
    }
}
