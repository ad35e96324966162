//! RTF to plain-text and HTML conversion.
//!
//! A small tokenizer over the RTF grammar: groups (`{…}`), control words
//! (`\word` with an optional signed parameter), control symbols (`\{`,
//! `\'hh`, …), and plain text. Destination groups that hold no document
//! text (font and color tables, stylesheets, document info, pictures, and
//! every starred destination) are skipped entirely.

use commons_core::{Error, Result};

/// Destinations whose content never reaches the document text.
const SKIPPED_DESTINATIONS: &[&str] = &[
    "fonttbl",
    "colortbl",
    "stylesheet",
    "info",
    "pict",
    "header",
    "footer",
    "footnote",
    "field",
    "object",
];

#[derive(Debug, Clone, Copy)]
struct GroupState {
    /// Number of fallback bytes following a `\uN` escape.
    uc_skip: u32,
    /// Whole group is a skipped destination.
    skipping: bool,
    bold: bool,
    italic: bool,
    underline: bool,
}

impl Default for GroupState {
    fn default() -> Self {
        Self {
            uc_skip: 1,
            skipping: false,
            bold: false,
            italic: false,
            underline: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Output {
    Text,
    Html,
}

struct Converter<'a> {
    bytes: &'a [u8],
    pos: usize,
    mode: Output,
    out: String,
    /// Fallback bytes still to swallow after a `\uN`.
    pending_skip: u32,
    /// Inline tags currently open in HTML mode, in nesting order.
    open_tags: Vec<&'static str>,
}

impl<'a> Converter<'a> {
    fn new(rtf: &'a str, mode: Output) -> Self {
        Self {
            bytes: rtf.as_bytes(),
            pos: 0,
            mode,
            out: String::new(),
            pending_skip: 0,
            open_tags: Vec::new(),
        }
    }

    fn run(mut self) -> Result<String> {
        if !self.bytes.starts_with(b"{\\rtf") {
            return Err(Error::markup("RTF", "input does not start with {\\rtf"));
        }

        let mut stack: Vec<GroupState> = Vec::new();
        let mut state = GroupState::default();
        // A `\*` makes the next control word open a skipped destination
        let mut starred = false;

        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            match b {
                b'{' => {
                    self.pos += 1;
                    stack.push(state);
                }
                b'}' => {
                    self.pos += 1;
                    let restored = stack.pop().unwrap_or_default();
                    self.sync_tags(&restored);
                    state = restored;
                }
                b'\\' => {
                    self.pos += 1;
                    starred = self.control(&mut state, starred)?;
                }
                b'\r' | b'\n' => {
                    // Raw line breaks in the file are not document text
                    self.pos += 1;
                }
                _ => {
                    self.pos += 1;
                    if self.pending_skip > 0 {
                        self.pending_skip -= 1;
                    } else if !state.skipping {
                        self.emit_char(b as char);
                    }
                }
            }
        }
        self.sync_tags(&GroupState::default());
        Ok(self.out)
    }

    /// Handle the token after a backslash. Returns the new `starred` flag.
    fn control(&mut self, state: &mut GroupState, starred: bool) -> Result<bool> {
        let Some(&b) = self.bytes.get(self.pos) else {
            return Err(Error::markup("RTF", "dangling backslash at end of input"));
        };

        if !b.is_ascii_alphabetic() {
            self.pos += 1;
            match b {
                b'*' => return Ok(true),
                b'\'' => {
                    let code = self.hex_escape()?;
                    if self.pending_skip > 0 {
                        self.pending_skip -= 1;
                    } else if !state.skipping {
                        // Treat the byte as Latin-1, the usual RTF default
                        self.emit_char(code as char);
                    }
                }
                b'\\' | b'{' | b'}' => {
                    if !state.skipping {
                        self.emit_char(b as char);
                    }
                }
                b'~' => {
                    if !state.skipping {
                        self.emit_char('\u{00A0}');
                    }
                }
                b'-' | b'_' => {
                    // Optional hyphen markers carry no visible text
                }
                b'\r' | b'\n' => {
                    // An escaped newline is a paragraph break
                    if !state.skipping {
                        self.emit_break();
                    }
                }
                _ => {}
            }
            return Ok(false);
        }

        let word = self.read_word();
        let param = self.read_param();
        // A single space after a control word is part of the token
        if self.bytes.get(self.pos) == Some(&b' ') {
            self.pos += 1;
        }

        if starred || SKIPPED_DESTINATIONS.contains(&word.as_str()) {
            state.skipping = true;
            return Ok(false);
        }
        if state.skipping {
            return Ok(false);
        }

        match word.as_str() {
            "par" | "line" => self.emit_break(),
            "tab" => self.emit_char('\t'),
            "uc" => state.uc_skip = param.unwrap_or(1).max(0) as u32,
            "u" => {
                let mut code = param.unwrap_or(0);
                if code < 0 {
                    code += 65536;
                }
                if let Some(c) = char::from_u32(code as u32) {
                    self.emit_char(c);
                }
                self.pending_skip = state.uc_skip;
            }
            "b" => self.toggle(state, |s, v| s.bold = v, param),
            "i" => self.toggle(state, |s, v| s.italic = v, param),
            "ul" => self.toggle(state, |s, v| s.underline = v, param),
            "ulnone" => self.toggle(state, |s, v| s.underline = v, Some(0)),
            "plain" => {
                let cleared = GroupState {
                    bold: false,
                    italic: false,
                    underline: false,
                    ..*state
                };
                self.sync_tags(&cleared);
                *state = cleared;
            }
            _ => {
                // Formatting we do not render (\fs24, \f0, \qc, …)
            }
        }
        Ok(false)
    }

    fn toggle(
        &mut self,
        state: &mut GroupState,
        set: fn(&mut GroupState, bool),
        param: Option<i64>,
    ) {
        let mut updated = *state;
        set(&mut updated, param.unwrap_or(1) != 0);
        self.sync_tags(&updated);
        *state = updated;
    }

    fn read_word(&mut self) -> String {
        let start = self.pos;
        while self
            .bytes
            .get(self.pos)
            .is_some_and(u8::is_ascii_alphabetic)
        {
            self.pos += 1;
        }
        String::from_utf8_lossy(&self.bytes[start..self.pos]).into_owned()
    }

    fn read_param(&mut self) -> Option<i64> {
        let start = self.pos;
        if self.bytes.get(self.pos) == Some(&b'-') {
            self.pos += 1;
        }
        while self.bytes.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        if self.pos == start || (self.pos == start + 1 && self.bytes[start] == b'-') {
            self.pos = start;
            return None;
        }
        std::str::from_utf8(&self.bytes[start..self.pos])
            .ok()?
            .parse()
            .ok()
    }

    fn hex_escape(&mut self) -> Result<u8> {
        let hex = self
            .bytes
            .get(self.pos..self.pos + 2)
            .ok_or_else(|| Error::markup("RTF", "truncated \\'hh escape"))?;
        self.pos += 2;
        let text = std::str::from_utf8(hex)
            .map_err(|_| Error::markup("RTF", "invalid \\'hh escape"))?;
        u8::from_str_radix(text, 16).map_err(|_| Error::markup("RTF", "invalid \\'hh escape"))
    }

    fn emit_char(&mut self, c: char) {
        if self.mode == Output::Html {
            match c {
                '&' => self.out.push_str("&amp;"),
                '<' => self.out.push_str("&lt;"),
                '>' => self.out.push_str("&gt;"),
                _ => self.out.push(c),
            }
        } else {
            self.out.push(c);
        }
    }

    fn emit_break(&mut self) {
        match self.mode {
            Output::Text => self.out.push('\n'),
            Output::Html => self.out.push_str("<br>"),
        }
    }

    /// Adjust open inline tags so the output matches `next`'s styles,
    /// closing only what must close and keeping shared outer tags open.
    fn sync_tags(&mut self, next: &GroupState) {
        if self.mode != Output::Html {
            return;
        }
        let desired: Vec<&'static str> = [
            (next.bold, "b"),
            (next.italic, "i"),
            (next.underline, "u"),
        ]
        .into_iter()
        .filter(|(active, _)| *active)
        .map(|(_, tag)| tag)
        .collect();
        if desired == self.open_tags {
            return;
        }
        let common = self
            .open_tags
            .iter()
            .zip(desired.iter())
            .take_while(|(a, b)| a == b)
            .count();
        for tag in self.open_tags.split_off(common).into_iter().rev() {
            self.out.push_str("</");
            self.out.push_str(tag);
            self.out.push('>');
        }
        for &tag in &desired[common..] {
            self.out.push('<');
            self.out.push_str(tag);
            self.out.push('>');
            self.open_tags.push(tag);
        }
    }
}

/// Convert RTF to plain text.
pub fn rtf_to_text(rtf: &str) -> Result<String> {
    Converter::new(rtf, Output::Text).run()
}

/// Convert RTF to a simple HTML fragment: bold, italic, and underline
/// survive as `<b>/<i>/<u>`, paragraph breaks become `<br>`, and text is
/// HTML-escaped.
pub fn rtf_to_html(rtf: &str) -> Result<String> {
    Converter::new(rtf, Output::Html).run()
}

/// Escape plain text for embedding in an RTF document.
pub fn text_to_rtf(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '\n' => out.push_str("\\par "),
            c if (c as u32) < 128 => out.push(c),
            c => {
                let code = c as u32;
                if code <= 32767 {
                    out.push_str(&format!("\\u{code}?"));
                } else {
                    out.push_str(&format!("\\u{}?", code as i64 - 65536));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_rtf() {
        assert!(rtf_to_text("plain text").is_err());
        assert!(rtf_to_text("").is_err());
    }

    #[test]
    fn test_plain_paragraphs() {
        let rtf = r"{\rtf1\ansi Hello world\par second line}";
        assert_eq!(rtf_to_text(rtf).unwrap(), "Hello world\nsecond line");
    }

    #[test]
    fn test_skips_font_and_color_tables() {
        let rtf = r"{\rtf1{\fonttbl{\f0 Arial;}}{\colortbl;\red0\green0\blue0;}Visible}";
        assert_eq!(rtf_to_text(rtf).unwrap(), "Visible");
    }

    #[test]
    fn test_skips_starred_destinations() {
        let rtf = r"{\rtf1{\*\generator Some Editor 1.0;}Body}";
        assert_eq!(rtf_to_text(rtf).unwrap(), "Body");
    }

    #[test]
    fn test_escapes_and_specials() {
        let rtf = r"{\rtf1 a\{b\}c\\d\~e\tab f}";
        assert_eq!(rtf_to_text(rtf).unwrap(), "a{b}c\\d\u{00A0}e\tf");
    }

    #[test]
    fn test_hex_escape_latin1() {
        let rtf = r"{\rtf1 caf\'e9}";
        assert_eq!(rtf_to_text(rtf).unwrap(), "café");
    }

    #[test]
    fn test_unicode_escape_with_fallback() {
        // \u with a one-byte ANSI fallback that must be swallowed
        let rtf = r"{\rtf1\uc1 snow \u9731? here}";
        assert_eq!(rtf_to_text(rtf).unwrap(), "snow ☃ here");
    }

    #[test]
    fn test_negative_unicode_param() {
        // 64257 (fi ligature) is written as 64257 - 65536 = -1279
        let rtf = r"{\rtf1\uc0 \u-1279 x}";
        assert_eq!(rtf_to_text(rtf).unwrap(), "\u{FB01}x");
    }

    #[test]
    fn test_rtf_to_html_styles() {
        let rtf = r"{\rtf1 normal {\b bold \i both} tail\par}";
        assert_eq!(
            rtf_to_html(rtf).unwrap(),
            "normal <b>bold <i>both</i></b> tail<br>"
        );
    }

    #[test]
    fn test_rtf_to_html_escapes_text() {
        let rtf = r"{\rtf1 a<b & c}";
        assert_eq!(rtf_to_html(rtf).unwrap(), "a&lt;b &amp; c");
    }

    #[test]
    fn test_toggle_off_with_zero_param() {
        let rtf = r"{\rtf1 \b on\b0 off}";
        assert_eq!(rtf_to_html(rtf).unwrap(), "<b>on</b>off");
    }

    #[test]
    fn test_text_to_rtf() {
        assert_eq!(text_to_rtf("a{b}\\"), "a\\{b\\}\\\\");
        assert_eq!(text_to_rtf("two\nlines"), "two\\par lines");
        assert_eq!(text_to_rtf("snow ☃"), "snow \\u9731?");
    }
}
