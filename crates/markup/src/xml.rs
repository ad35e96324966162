//! Plain-text extraction from XML documents.
//!
//! Streaming extraction via `quick-xml`; no DOM is built. Namespace
//! prefixes are ignored when matching element names.

use commons_core::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

fn reader_for(xml: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = true;
    reader
}

fn markup_err(e: impl std::fmt::Display) -> Error {
    Error::markup("XML", e.to_string())
}

/// Concatenate every piece of character data in the document, in document
/// order. CDATA sections are included and entities are resolved. Malformed
/// XML is an error.
pub fn extract_text(xml: &str) -> Result<String> {
    let mut reader = reader_for(xml);
    let mut out = String::new();
    loop {
        match reader.read_event().map_err(markup_err)? {
            Event::Text(t) => out.push_str(&t.unescape().map_err(markup_err)?),
            Event::CData(c) => {
                let raw = std::str::from_utf8(&c).map_err(markup_err)?;
                out.push_str(raw);
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(out)
}

/// Collect the text content under each occurrence of `element` (matched by
/// local name, ignoring any namespace prefix), one string per occurrence.
///
/// Nested occurrences of the same element contribute to the outermost one.
pub fn extract_text_of(xml: &str, element: &str) -> Result<Vec<String>> {
    let mut reader = reader_for(xml);
    let wanted = element.as_bytes();

    let mut results = Vec::new();
    let mut current = String::new();
    // Depth of nested `element` starts; text is collected while > 0
    let mut depth = 0usize;

    loop {
        match reader.read_event().map_err(markup_err)? {
            Event::Start(ref e) => {
                if e.local_name().as_ref() == wanted {
                    depth += 1;
                }
            }
            Event::Empty(ref e) => {
                if depth == 0 && e.local_name().as_ref() == wanted {
                    results.push(String::new());
                }
            }
            Event::End(ref e) => {
                if e.local_name().as_ref() == wanted && depth > 0 {
                    depth -= 1;
                    if depth == 0 {
                        results.push(std::mem::take(&mut current));
                    }
                }
            }
            Event::Text(t) => {
                if depth > 0 {
                    current.push_str(&t.unescape().map_err(markup_err)?);
                }
            }
            Event::CData(c) => {
                if depth > 0 {
                    current.push_str(std::str::from_utf8(&c).map_err(markup_err)?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(results)
}
