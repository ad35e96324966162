//! HTML escaping, unescaping, and tag stripping.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static NAMED_ENTITIES: Lazy<HashMap<&'static str, char>> = Lazy::new(|| {
    HashMap::from([
        ("amp", '&'),
        ("lt", '<'),
        ("gt", '>'),
        ("quot", '"'),
        ("apos", '\''),
        ("nbsp", '\u{00A0}'),
    ])
});

/// Escape the five predefined HTML entities.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Resolve named and numeric entity references. Unknown or malformed
/// references pass through verbatim.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match rest[1..].find(';') {
            // Entities longer than this are not real, stop scanning them
            Some(end) if end <= 10 => {
                let body = &rest[1..=end];
                if let Some(c) = resolve_entity(body) {
                    out.push(c);
                    rest = &rest[end + 2..];
                } else {
                    out.push('&');
                    rest = &rest[1..];
                }
            }
            _ => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn resolve_entity(body: &str) -> Option<char> {
    if let Some(num) = body.strip_prefix('#') {
        let code = if let Some(hex) = num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
            u32::from_str_radix(hex, 16).ok()?
        } else {
            num.parse().ok()?
        };
        return char::from_u32(code);
    }
    NAMED_ENTITIES.get(body).copied()
}

/// Remove markup from an HTML fragment, leaving readable text.
///
/// `<script>` and `<style>` elements are dropped along with their content,
/// entities are decoded, and runs of whitespace collapse to one space.
pub fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut chars = html.char_indices().peekable();
    let lower = html.to_ascii_lowercase();

    while let Some((i, c)) = chars.next() {
        if c != '<' {
            text.push(c);
            continue;
        }
        // Skip the content of script/style wholesale
        let skip_until = if lower[i..].starts_with("<script") {
            Some("</script")
        } else if lower[i..].starts_with("<style") {
            Some("</style")
        } else {
            None
        };
        if let Some(close) = skip_until {
            if let Some(rel) = lower[i..].find(close) {
                let resume = i + rel;
                while chars.peek().is_some_and(|&(j, _)| j < resume) {
                    chars.next();
                }
            } else {
                break;
            }
        }
        // Consume through the closing '>'
        let mut closed = false;
        for (_, t) in chars.by_ref() {
            if t == '>' {
                closed = true;
                break;
            }
        }
        if !closed {
            break;
        }
        // Block-level boundaries keep words apart once whitespace collapses
        text.push(' ');
    }

    let decoded = unescape(&text);
    let words: Vec<&str> = decoded.split_whitespace().collect();
    words.join(" ")
}

/// Escape plain text and turn line breaks into `<br>` tags.
pub fn text_to_html(text: &str) -> String {
    escape(text).replace("\r\n", "\n").replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_unescape_named_and_numeric() {
        assert_eq!(unescape("&lt;b&gt; &amp; &quot;q&quot;"), "<b> & \"q\"");
        assert_eq!(unescape("&#65;&#x42;&#X43;"), "ABC");
        assert_eq!(unescape("&nbsp;"), "\u{00A0}");
    }

    #[test]
    fn test_unescape_leaves_malformed_alone() {
        assert_eq!(unescape("a & b"), "a & b");
        assert_eq!(unescape("&notareal;"), "&notareal;");
        assert_eq!(unescape("&#xZZ;"), "&#xZZ;");
        assert_eq!(unescape("trailing &"), "trailing &");
    }

    #[test]
    fn test_escape_unescape_round_trip() {
        let original = "a < b && c > \"d\"";
        assert_eq!(unescape(&escape(original)), original);
    }

    #[test]
    fn test_strip_tags() {
        let html = "<p>Hello <b>world</b>!</p>";
        assert_eq!(strip_tags(html), "Hello world !");
    }

    #[test]
    fn test_strip_tags_drops_script_and_style() {
        let html = "<p>before</p><script>var x = '<evil>';</script><p>after</p>\
                    <style>p { color: red }</style>done";
        assert_eq!(strip_tags(html), "before after done");
    }

    #[test]
    fn test_strip_tags_decodes_entities_and_collapses_whitespace() {
        let html = "<div>one&nbsp;&amp;\n\n   two</div>";
        assert_eq!(strip_tags(html), "one & two");
    }

    #[test]
    fn test_text_to_html() {
        assert_eq!(text_to_html("a < b\nnext"), "a &lt; b<br>next");
        assert_eq!(text_to_html("crlf\r\nline"), "crlf<br>line");
    }
}
