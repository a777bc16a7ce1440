//! Streaming rewrite of the `word/document.xml` part.

use std::io::Cursor;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::{DocxError, DocxResult};

const BODY: &[u8] = b"w:body";
const PARAGRAPH: &[u8] = b"w:p";
const TEXT: &[u8] = b"w:t";

/// Rewrite the document XML with one paragraph appended at the end of the
/// body. Every other event is copied through verbatim, so the rewrite
/// doubles as a well-formedness check.
pub(crate) fn append_paragraph(xml: &[u8], text: &str) -> DocxResult<Vec<u8>> {
    let mut reader = Reader::from_reader(xml);
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let mut saw_body = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == BODY => {
                saw_body = true;
                writer.write_event(Event::Start(e))?;
            }
            Event::End(e) if e.name().as_ref() == BODY => {
                write_paragraph(&mut writer, text)?;
                writer.write_event(Event::End(e))?;
            }
            // An empty body serializes as a self-closing tag; expand it.
            Event::Empty(e) if e.name().as_ref() == BODY => {
                saw_body = true;
                writer.write_event(Event::Start(e))?;
                write_paragraph(&mut writer, text)?;
                writer.write_event(Event::End(BytesEnd::new("w:body")))?;
            }
            Event::Eof => break,
            event => writer.write_event(event)?,
        }
    }

    if !saw_body {
        return Err(DocxError::MissingBody);
    }
    Ok(writer.into_inner().into_inner())
}

/// One paragraph, one run, one text node. `xml:space="preserve"` keeps
/// leading and trailing whitespace through consumers that would otherwise
/// trim it.
fn write_paragraph(writer: &mut Writer<Cursor<Vec<u8>>>, text: &str) -> DocxResult<()> {
    writer.write_event(Event::Start(BytesStart::new("w:p")))?;
    writer.write_event(Event::Start(BytesStart::new("w:r")))?;
    let mut text_tag = BytesStart::new("w:t");
    text_tag.push_attribute(("xml:space", "preserve"));
    writer.write_event(Event::Start(text_tag))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new("w:t")))?;
    writer.write_event(Event::End(BytesEnd::new("w:r")))?;
    writer.write_event(Event::End(BytesEnd::new("w:p")))?;
    Ok(())
}

/// Validate that the document XML parses and contains a `w:body`.
pub(crate) fn ensure_body(xml: &[u8]) -> DocxResult<()> {
    let mut reader = Reader::from_reader(xml);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == BODY => return Ok(()),
            Event::Eof => return Err(DocxError::MissingBody),
            _ => {}
        }
    }
}

/// In-order text of each paragraph, concatenating the paragraph's text
/// nodes. Non-text content (tabs, breaks, drawings) is skipped.
pub(crate) fn paragraph_texts(xml: &[u8]) -> DocxResult<Vec<String>> {
    let mut reader = Reader::from_reader(xml);
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == PARAGRAPH => {
                current = Some(String::new());
            }
            Event::Empty(e) if e.name().as_ref() == PARAGRAPH => {
                paragraphs.push(String::new());
            }
            Event::End(e) if e.name().as_ref() == PARAGRAPH => {
                if let Some(text) = current.take() {
                    paragraphs.push(text);
                }
            }
            Event::Start(e) if e.name().as_ref() == TEXT => in_text = true,
            Event::End(e) if e.name().as_ref() == TEXT => in_text = false,
            Event::Text(t) if in_text => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&t.unescape()?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body/></w:document>"#;

    const ONE_PARAGRAPH: &str = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>first</w:t></w:r></w:p></w:body></w:document>"#;

    #[test]
    fn append_into_self_closing_body() {
        let out = append_paragraph(EMPTY_BODY.as_bytes(), "hello").unwrap();
        let texts = paragraph_texts(&out).unwrap();
        assert_eq!(texts, vec!["hello"]);
    }

    #[test]
    fn append_after_existing_paragraphs() {
        let out = append_paragraph(ONE_PARAGRAPH.as_bytes(), "second").unwrap();
        let texts = paragraph_texts(&out).unwrap();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn append_escapes_markup_in_text() {
        let out = append_paragraph(EMPTY_BODY.as_bytes(), "a < b & c > d").unwrap();
        let xml = String::from_utf8(out.clone()).unwrap();
        assert!(xml.contains("a &lt; b &amp; c &gt; d"));
        // And it reads back unescaped.
        assert_eq!(paragraph_texts(&out).unwrap(), vec!["a < b & c > d"]);
    }

    #[test]
    fn append_preserves_surrounding_parts_of_the_tree() {
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>x</w:t></w:r></w:p><w:sectPr><w:pgSz w:w="11906"/></w:sectPr></w:body></w:document>"#;
        let out = append_paragraph(xml.as_bytes(), "y").unwrap();
        let rewritten = String::from_utf8(out).unwrap();
        assert!(rewritten.contains("w:sectPr"));
        assert!(rewritten.contains("w:pgSz"));
    }

    #[test]
    fn missing_body_is_rejected() {
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"/>"#;
        let err = append_paragraph(xml.as_bytes(), "x").unwrap_err();
        assert!(matches!(err, DocxError::MissingBody));
        assert!(matches!(
            ensure_body(xml.as_bytes()).unwrap_err(),
            DocxError::MissingBody
        ));
    }

    #[test]
    fn malformed_xml_is_rejected() {
        let xml = b"<w:document><w:body></w:document>";
        assert!(matches!(
            append_paragraph(xml, "x").unwrap_err(),
            DocxError::Xml(_)
        ));
    }

    #[test]
    fn ensure_body_accepts_open_body_tag() {
        ensure_body(ONE_PARAGRAPH.as_bytes()).unwrap();
        ensure_body(EMPTY_BODY.as_bytes()).unwrap();
    }

    #[test]
    fn paragraph_texts_concatenates_runs() {
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>foo</w:t></w:r><w:r><w:t> bar</w:t></w:r></w:p></w:body></w:document>"#;
        assert_eq!(paragraph_texts(xml.as_bytes()).unwrap(), vec!["foo bar"]);
    }

    #[test]
    fn paragraph_texts_counts_empty_paragraphs() {
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p/><w:p><w:r><w:t>z</w:t></w:r></w:p></w:body></w:document>"#;
        assert_eq!(paragraph_texts(xml.as_bytes()).unwrap(), vec!["", "z"]);
    }
}
