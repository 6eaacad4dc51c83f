//! Resume text extraction from uploaded files.
//!
//! Supported: PDF (via pdf-extract) and plain text / markdown. DOCX uploads
//! are rejected with a hint to convert; there is no maintained pure-Rust
//! extractor worth carrying for them.

use crate::errors::AppError;

/// Minimum extracted length for a usable resume. Shorter than this and the
/// analysis output is noise.
pub const MIN_RESUME_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFileKind {
    Pdf,
    Text,
    Unsupported,
}

/// Classifies an upload by magic bytes first, extension second.
pub fn detect_kind(filename: &str, data: &[u8]) -> ResumeFileKind {
    if data.starts_with(b"%PDF-") {
        return ResumeFileKind::Pdf;
    }

    let lower = filename.to_lowercase();
    if lower.ends_with(".pdf") {
        ResumeFileKind::Pdf
    } else if lower.ends_with(".txt") || lower.ends_with(".md") || lower.ends_with(".text") {
        ResumeFileKind::Text
    } else if lower.ends_with(".docx") || lower.ends_with(".doc") {
        ResumeFileKind::Unsupported
    } else {
        // No extension or something exotic: try it as text.
        ResumeFileKind::Text
    }
}

/// Extracts and validates resume text from an uploaded file.
pub fn extract_text(filename: &str, data: &[u8]) -> Result<String, AppError> {
    let text = match detect_kind(filename, data) {
        ResumeFileKind::Pdf => pdf_extract::extract_text_from_mem(data).map_err(|e| {
            AppError::UnprocessableEntity(format!("Could not extract text from PDF: {e}"))
        })?,
        ResumeFileKind::Text => String::from_utf8(data.to_vec()).map_err(|_| {
            AppError::UnprocessableEntity("File is not valid UTF-8 text".to_string())
        })?,
        ResumeFileKind::Unsupported => {
            return Err(AppError::UnprocessableEntity(
                "DOC/DOCX is not supported; export as PDF or plain text".to_string(),
            ));
        }
    };

    validate_resume_text(&text)
}

/// Trims and length-checks resume text (shared by file upload and raw-text save).
pub fn validate_resume_text(text: &str) -> Result<String, AppError> {
    let trimmed = text.trim();
    if trimmed.chars().count() < MIN_RESUME_CHARS {
        return Err(AppError::UnprocessableEntity(
            "Resume text is too short or empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_pdf_by_magic_bytes() {
        assert_eq!(
            detect_kind("resume.bin", b"%PDF-1.7 rest of file"),
            ResumeFileKind::Pdf
        );
    }

    #[test]
    fn test_detect_pdf_by_extension() {
        assert_eq!(detect_kind("Resume.PDF", b"garbled"), ResumeFileKind::Pdf);
    }

    #[test]
    fn test_detect_text_extensions() {
        assert_eq!(detect_kind("resume.txt", b"hello"), ResumeFileKind::Text);
        assert_eq!(detect_kind("resume.md", b"hello"), ResumeFileKind::Text);
        assert_eq!(detect_kind("resume", b"hello"), ResumeFileKind::Text);
    }

    #[test]
    fn test_docx_is_unsupported() {
        assert_eq!(
            detect_kind("resume.docx", b"PK\x03\x04"),
            ResumeFileKind::Unsupported
        );
        assert!(matches!(
            extract_text("resume.docx", b"PK\x03\x04"),
            Err(AppError::UnprocessableEntity(_))
        ));
    }

    #[test]
    fn test_text_extraction_roundtrip() {
        let body = "A".repeat(60);
        let text = extract_text("resume.txt", body.as_bytes()).unwrap();
        assert_eq!(text, body);
    }

    #[test]
    fn test_short_resume_is_rejected() {
        assert!(matches!(
            extract_text("resume.txt", b"too short"),
            Err(AppError::UnprocessableEntity(_))
        ));
    }

    #[test]
    fn test_validate_trims_whitespace() {
        let padded = format!("  {}  \n", "B".repeat(60));
        let text = validate_resume_text(&padded).unwrap();
        assert_eq!(text, "B".repeat(60));
    }

    #[test]
    fn test_invalid_utf8_text_is_rejected() {
        let bytes = vec![0xff, 0xfe, 0x00, 0x01];
        assert!(matches!(
            extract_text("resume.txt", &bytes),
            Err(AppError::UnprocessableEntity(_))
        ));
    }
}
