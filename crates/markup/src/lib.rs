//! Markup conversion: extracting plain text from XML, escaping and
//! stripping HTML, and converting RTF to text or HTML.

pub mod html;
pub mod rtf;
pub mod xml;

pub use html::{escape, strip_tags, text_to_html, unescape};
pub use rtf::{rtf_to_html, rtf_to_text};
pub use xml::{extract_text, extract_text_of};
