//! Word-processor (docx) reading and writing.
//!
//! A docx file is a zip container; the body lives in `word/document.xml`.

use std::io::{Cursor, Read, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use tracing::{debug, trace};
use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

use super::{DocumentProcessor, Result};
use crate::error::{ExportError, ExtractionError};

const DOCUMENT_PART: &str = "word/document.xml";
const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

/// Text extractor for docx containers.
pub struct DocxExtractor {
    document_xml: Option<String>,
}

impl DocxExtractor {
    pub fn new() -> Self {
        Self { document_xml: None }
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentProcessor for DocxExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut archive = ZipArchive::new(Cursor::new(data))
            .map_err(|e| ExtractionError::Docx(format!("invalid docx archive: {}", e)))?;

        let mut part = archive
            .by_name(DOCUMENT_PART)
            .map_err(|_| ExtractionError::Docx(format!("no {} in archive", DOCUMENT_PART)))?;

        let mut xml = String::new();
        part.read_to_string(&mut xml)?;

        debug!("Loaded docx body ({} bytes of XML)", xml.len());
        self.document_xml = Some(xml);
        Ok(())
    }

    fn extract_text(&self) -> Result<String> {
        let xml = self
            .document_xml
            .as_deref()
            .ok_or_else(|| ExtractionError::Docx("no document loaded".to_string()))?;

        let mut text = String::new();
        for line in document_lines(xml)? {
            text.push_str(&line);
            text.push('\n');
        }
        Ok(text)
    }
}

/// Lines of a `word/document.xml` body: top-level paragraphs first, then
/// each table's cell paragraphs (rows top to bottom, cells left to right).
pub fn document_lines(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);

    let mut body_lines = Vec::new();
    let mut tables: Vec<Vec<String>> = Vec::new();
    let mut table_depth = 0usize;
    let mut paragraphs: Vec<String> = Vec::new();
    let mut in_text = false;

    let mut finish_paragraph = |line: String, table_depth: usize, tables: &mut Vec<Vec<String>>| {
        if table_depth == 0 {
            body_lines.push(line);
        } else if let Some(table) = tables.last_mut() {
            table.push(line);
        }
    };

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ExtractionError::Docx(format!("malformed document.xml: {}", e)))?;

        match event {
            Event::Start(e) => match e.local_name().as_ref() {
                b"tbl" => {
                    if table_depth == 0 {
                        tables.push(Vec::new());
                    }
                    table_depth += 1;
                }
                b"p" => paragraphs.push(String::new()),
                b"t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" => finish_paragraph(String::new(), table_depth, &mut tables),
                b"tab" => {
                    if let Some(p) = paragraphs.last_mut() {
                        p.push('\t');
                    }
                }
                b"br" | b"cr" => {
                    if let Some(p) = paragraphs.last_mut() {
                        p.push('\n');
                    }
                }
                _ => {}
            },
            Event::Text(t) if in_text => {
                let s = t
                    .unescape()
                    .map_err(|e| ExtractionError::Docx(format!("bad text run: {}", e)))?;
                if let Some(p) = paragraphs.last_mut() {
                    p.push_str(&s);
                }
            }
            Event::CData(c) if in_text => {
                if let Some(p) = paragraphs.last_mut() {
                    p.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => {
                    if let Some(line) = paragraphs.pop() {
                        finish_paragraph(line, table_depth, &mut tables);
                    }
                }
                b"tbl" => table_depth = table_depth.saturating_sub(1),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    trace!(
        "docx body: {} paragraphs, {} tables",
        body_lines.len(),
        tables.len()
    );

    body_lines.extend(tables.into_iter().flatten());
    Ok(body_lines)
}

/// Minimal docx writer producing one paragraph per line.
#[derive(Debug, Clone, Default)]
pub struct DocxWriter {
    paragraphs: Vec<String>,
}

impl DocxWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paragraph. An empty string produces an empty paragraph.
    pub fn add_paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        self.paragraphs.push(text.into());
        self
    }

    /// Build the container in memory.
    pub fn to_bytes(&self) -> std::result::Result<Vec<u8>, ExportError> {
        let document = self.document_xml()?;

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in [
            ("[Content_Types].xml", CONTENT_TYPES.as_bytes()),
            ("_rels/.rels", PACKAGE_RELS.as_bytes()),
            (DOCUMENT_PART, document.as_slice()),
        ] {
            zip.start_file(name, FileOptions::default())
                .map_err(|e| ExportError::Docx(e.to_string()))?;
            zip.write_all(content)?;
        }

        let cursor = zip.finish().map_err(|e| ExportError::Docx(e.to_string()))?;
        Ok(cursor.into_inner())
    }

    /// Write the container to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> std::result::Result<(), ExportError> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    fn document_xml(&self) -> std::result::Result<Vec<u8>, ExportError> {
        let mut writer = Writer::new(Vec::new());

        emit(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        emit(
            &mut writer,
            Event::Start(BytesStart::new("w:document").with_attributes([("xmlns:w", WORDML_NS)])),
        )?;
        emit(&mut writer, Event::Start(BytesStart::new("w:body")))?;

        for paragraph in &self.paragraphs {
            emit(&mut writer, Event::Start(BytesStart::new("w:p")))?;
            if !paragraph.is_empty() {
                emit(&mut writer, Event::Start(BytesStart::new("w:r")))?;
                emit(
                    &mut writer,
                    Event::Start(BytesStart::new("w:t").with_attributes([("xml:space", "preserve")])),
                )?;
                emit(&mut writer, Event::Text(BytesText::new(paragraph)))?;
                emit(&mut writer, Event::End(BytesEnd::new("w:t")))?;
                emit(&mut writer, Event::End(BytesEnd::new("w:r")))?;
            }
            emit(&mut writer, Event::End(BytesEnd::new("w:p")))?;
        }

        emit(&mut writer, Event::End(BytesEnd::new("w:body")))?;
        emit(&mut writer, Event::End(BytesEnd::new("w:document")))?;

        Ok(writer.into_inner())
    }
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> std::result::Result<(), ExportError> {
    writer
        .write_event(event)
        .map_err(|e| ExportError::Docx(e.to_string()))
}
