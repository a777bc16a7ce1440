use std::io::{Cursor, Read, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::body;
use crate::error::{DocxError, DocxResult};

/// Path of the main document part inside the container.
pub const MAIN_DOCUMENT_PART: &str = "word/document.xml";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const EMPTY_DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body/></w:document>"#;

/// One file inside the OOXML container.
#[derive(Clone, Debug, PartialEq, Eq)]
struct DocumentPart {
    path: String,
    data: Vec<u8>,
}

/// A Wordprocessing document held fully in memory.
///
/// All parts are read up front and kept in container order; only the main
/// document part is ever rewritten, so styles, numbering, media, and
/// anything else a real document carries survive an append round-trip.
pub struct WordDocument {
    parts: Vec<DocumentPart>,
    main_index: usize,
}

impl WordDocument {
    /// Parse a `.docx` container from bytes.
    ///
    /// Fails with [`DocxError::MissingMainPart`] when `word/document.xml`
    /// is absent, [`DocxError::MissingBody`] when the document has no
    /// `w:body`, and [`DocxError::Package`] when the bytes are not a zip
    /// container at all.
    pub fn from_bytes(bytes: &[u8]) -> DocxResult<Self> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        let mut parts = Vec::with_capacity(archive.len());
        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            if !file.is_file() {
                continue;
            }
            let mut data = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut data)?;
            parts.push(DocumentPart {
                path: file.name().to_string(),
                data,
            });
        }

        let main_index = parts
            .iter()
            .position(|p| p.path == MAIN_DOCUMENT_PART)
            .ok_or(DocxError::MissingMainPart)?;
        body::ensure_body(&parts[main_index].data)?;

        Ok(Self { parts, main_index })
    }

    /// Minimal valid document: content types, package relationships, and a
    /// main part with an empty body.
    pub fn empty() -> Self {
        let parts = vec![
            DocumentPart {
                path: "[Content_Types].xml".into(),
                data: CONTENT_TYPES_XML.as_bytes().to_vec(),
            },
            DocumentPart {
                path: "_rels/.rels".into(),
                data: PACKAGE_RELS_XML.as_bytes().to_vec(),
            },
            DocumentPart {
                path: MAIN_DOCUMENT_PART.into(),
                data: EMPTY_DOCUMENT_XML.as_bytes().to_vec(),
            },
        ];
        Self {
            parts,
            main_index: 2,
        }
    }

    /// Append one paragraph containing one run with exactly `text` to the
    /// end of the document body.
    pub fn append_paragraph(&mut self, text: &str) -> DocxResult<()> {
        let main = &mut self.parts[self.main_index];
        main.data = body::append_paragraph(&main.data, text)?;
        Ok(())
    }

    /// In-order plain text of the body's paragraphs.
    pub fn paragraph_texts(&self) -> DocxResult<Vec<String>> {
        body::paragraph_texts(&self.parts[self.main_index].data)
    }

    /// Paths of all parts, in container order.
    pub fn part_names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.path.as_str()).collect()
    }

    /// Serialize the container back to bytes (deflate-compressed).
    pub fn to_bytes(&self) -> DocxResult<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        for part in &self.parts {
            writer.start_file(part.path.as_str(), options)?;
            writer.write_all(&part.data)?;
        }
        Ok(writer.finish()?.into_inner())
    }
}

impl std::fmt::Debug for WordDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordDocument")
            .field("part_count", &self.parts.len())
            .finish()
    }
}
