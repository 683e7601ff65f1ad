//! Document text extraction.

mod docx;
mod pdf;

pub use docx::{DocxExtractor, DocxWriter, document_lines};
pub use pdf::PdfExtractor;

use std::path::Path;

use tracing::debug;

use crate::error::{ExtractionError, ResumexError};

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Supported source document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Zip-based word-processor container.
    Docx,
    /// Portable Document Format.
    Pdf,
}

impl DocumentFormat {
    /// Route a path to a reader by its extension (case-insensitive).
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "docx" | "docm" => Ok(Self::Docx),
            "pdf" => Ok(Self::Pdf),
            "doc" => Err(ResumexError::UnsupportedFormat {
                extension,
                reason: "legacy binary Word documents are not supported, save the file as .docx"
                    .to_string(),
            }),
            _ => Err(ResumexError::UnsupportedFormat {
                extension,
                reason: "only .docx and .pdf documents can be imported".to_string(),
            }),
        }
    }

    fn processor(self) -> Box<dyn DocumentProcessor> {
        match self {
            Self::Docx => Box::new(DocxExtractor::new()),
            Self::Pdf => Box::new(PdfExtractor::new()),
        }
    }
}

/// Trait for document readers.
pub trait DocumentProcessor {
    /// Load a document from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Plain text of the loaded document, one line per paragraph.
    fn extract_text(&self) -> Result<String>;
}

/// Read a supported document and return its text in document order.
///
/// The source file is only read.
pub fn extract_text(path: &Path) -> crate::Result<String> {
    let format = DocumentFormat::from_path(path)?;
    let data = std::fs::read(path).map_err(ExtractionError::from)?;

    let mut processor = format.processor();
    processor.load(&data)?;
    let text = processor.extract_text()?;

    debug!(
        "Extracted {} chars of {:?} text from {}",
        text.len(),
        format,
        path.display()
    );
    Ok(text)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_routing() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("cv.docx")).unwrap(),
            DocumentFormat::Docx
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("CV.PDF")).unwrap(),
            DocumentFormat::Pdf
        );
    }

    #[test]
    fn test_legacy_doc_rejected() {
        let err = DocumentFormat::from_path(Path::new("old.doc")).unwrap_err();
        match err {
            ResumexError::UnsupportedFormat { extension, .. } => assert_eq!(extension, "doc"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_extension_rejected() {
        assert!(matches!(
            DocumentFormat::from_path(Path::new("notes.txt")),
            Err(ResumexError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            DocumentFormat::from_path(Path::new("no_extension")),
            Err(ResumexError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_extract_text_from_docx_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.docx");
        let mut writer = DocxWriter::new();
        writer.add_paragraph("张三").add_paragraph("手机：13900001111");
        writer.save(&path).unwrap();

        let text = extract_text(&path).unwrap();
        assert_eq!(text, "张三\n手机：13900001111\n");
    }

    #[test]
    fn test_extract_text_from_pdf_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.pdf");
        std::fs::write(&path, test_fixtures::sample_pdf(&["First page", "Second page"])).unwrap();

        let text = extract_text(&path).unwrap();
        let first = text.find("First page").unwrap();
        let second = text.find("Second page").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_extract_text_missing_file() {
        let err = extract_text(Path::new("/nonexistent/cv.pdf")).unwrap_err();
        assert!(matches!(err, ResumexError::Extraction(ExtractionError::Io(_))));
    }
}
