//! Error types for the resumex-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the resumex library.
#[derive(Error, Debug)]
pub enum ResumexError {
    /// The file extension is not handled by any document reader.
    #[error("unsupported file format '{extension}': {reason}")]
    UnsupportedFormat { extension: String, reason: String },

    /// Text could not be extracted from a document.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Persisted collection could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Report could not be written.
    #[error("export error: {0}")]
    Export(#[from] ExportError),
}

/// Errors raised while turning a document into plain text.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The word-processor container is malformed.
    #[error("failed to read docx: {0}")]
    Docx(String),

    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error while reading the source file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to the persisted record collection.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backing file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backing file is not a valid collection document.
    #[error("malformed data in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Data directory could not be created.
    #[error("failed to create data directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Collection could not be serialized.
    #[error("failed to serialize collection: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Backing file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Whether this is a read-side failure, which callers recover from by
    /// treating the collection as empty.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Parse { .. })
    }
}

/// Errors raised while writing a duplicate report.
#[derive(Error, Debug)]
pub enum ExportError {
    /// I/O error while writing the destination.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to assemble the rich-document container.
    #[error("failed to write docx: {0}")]
    Docx(String),
}

/// Result type for the resumex library.
pub type Result<T> = std::result::Result<T, ResumexError>;
