//! Small HTML helpers shared by the page renderer.

/// Escape text for use in HTML element content or attribute values.
///
/// Escapes the five characters with reserved meaning; everything else
/// passes through untouched so the output stays byte-stable.
pub fn escape_html(text: &str) -> String {
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

/// Escape text for embedding inside a single-quoted JavaScript string.
pub fn escape_js_single_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Turn a display phone number into a `tel:` href by dropping everything
/// but digits and a leading `+`.
pub fn tel_href(phone: &str) -> String {
    let mut out = String::from("tel:");
    for (i, c) in phone.chars().enumerate() {
        if c.is_ascii_digit() || (c == '+' && i == 0) {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_reserved_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">R&D 'lab'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D &#39;lab&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_passes_plain_text() {
        assert_eq!(escape_html("HTML & CSS"), "HTML &amp; CSS");
        assert_eq!(escape_html("Tailwind CSS"), "Tailwind CSS");
    }

    #[test]
    fn test_escape_js_single_quoted() {
        assert_eq!(escape_js_single_quoted("it's"), "it\\'s");
        assert_eq!(escape_js_single_quoted("a\\b"), "a\\\\b");
        assert_eq!(escape_js_single_quoted("line\nbreak"), "line\\nbreak");
    }

    #[test]
    fn test_tel_href_strips_formatting() {
        assert_eq!(tel_href("+91 98222 40117"), "tel:+919822240117");
        assert_eq!(tel_href("(020) 555-0134"), "tel:0205550134");
    }
}
