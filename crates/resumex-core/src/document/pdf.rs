//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, warn};

use super::{DocumentProcessor, Result};
use crate::error::PdfError;

/// PDF content extractor.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Extract text per page, in ascending page order.
    pub fn extract_pages(&self) -> std::result::Result<Vec<String>, PdfError> {
        let doc = self
            .document
            .as_ref()
            .ok_or(PdfError::Parse("No document loaded".to_string()))?;

        match pdf_extract::extract_text_from_mem_by_pages(&self.raw_data) {
            Ok(pages) => Ok(pages),
            Err(e) => {
                // pdf-extract gives up on some font encodings that lopdf can still walk.
                warn!("pdf-extract failed ({}), falling back to lopdf text extraction", e);
                let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
                page_numbers
                    .iter()
                    .map(|&page| {
                        doc.extract_text(&[page])
                            .map_err(|e| PdfError::TextExtraction(e.to_string()))
                    })
                    .collect()
            }
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted.into());
            }
            debug!("Decrypted PDF with empty password");

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages.into());
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn extract_text(&self) -> Result<String> {
        let pages = self.extract_pages()?;
        let mut text = String::new();
        for page in &pages {
            for line in page.lines() {
                text.push_str(line);
                text.push('\n');
            }
        }
        debug!("Extracted {} chars from {} PDF pages", text.len(), pages.len());
        Ok(text)
    }
}
