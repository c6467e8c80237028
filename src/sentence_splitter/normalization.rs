// WHY: paragraph splitting assumes LF line endings, and normalized sentences
// are single-line, so both conversions live next to the splitter

use std::borrow::Cow;

/// Convert CRLF and lone CR line endings to LF
///
/// Borrows the input unchanged when it contains no carriage returns.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            result.push('\n');
        } else {
            result.push(ch);
        }
    }
    Cow::Owned(result)
}

/// Collapse every whitespace run (hard line breaks included) into one space
/// and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    let mut buffer = String::with_capacity(text.len());
    collapse_whitespace_into(text, &mut buffer);
    buffer
}

/// Same as [`collapse_whitespace`] but reuses the supplied buffer
pub fn collapse_whitespace_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let mut pending_space = false;
    for ch in text.trim().chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            buffer.push(' ');
            pending_space = false;
        }
        buffer.push(ch);
    }
}
