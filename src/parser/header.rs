//! Header block parsing.
//!
//! A document may begin with a `---` line, followed by `key: value` lines,
//! followed by a closing `---` line. This is deliberately not a YAML parser:
//! a small line-oriented state machine that never fails, only degrades to
//! partial or absent results.

use crate::document::{Header, HeaderValue};

/// Parser state while walking the document line by line.
enum State {
    /// Before the opening delimiter (only valid on the very first line).
    SeekOpen,
    /// Between the delimiters, collecting key/value lines.
    InHeader,
}

/// Parse the header block at the start of `text`.
///
/// Returns `None` when the text does not begin with a delimiter pair; this
/// is "no header", not an error. Lines without a colon are skipped and
/// repeated keys overwrite earlier values.
pub fn parse_header(text: &str) -> Option<Header> {
    let mut state = State::SeekOpen;
    let mut header = Header::default();

    for line in text.lines() {
        match state {
            State::SeekOpen => {
                // `lines()` has already stripped any trailing `\r`.
                if line != "---" {
                    return None;
                }
                state = State::InHeader;
            }
            State::InHeader => {
                if line == "---" {
                    return Some(header);
                }
                if let Some((key, value)) = line.split_once(':') {
                    header.insert(key.trim().to_string(), parse_value(value));
                }
                // Colon-less lines are silently skipped.
            }
        }
    }

    // Opening delimiter without a closing one: not a header.
    None
}

/// Parse a single header value.
///
/// Strips exactly one layer of matching quotes, recognizes the bracketed
/// list syntax, and maps an empty value to `Null`.
fn parse_value(raw: &str) -> HeaderValue {
    let value = strip_quotes(raw.trim());

    if value.starts_with('[') && value.ends_with(']') && value.len() >= 2 {
        let items: Vec<String> = value[1..value.len() - 1]
            .split(',')
            .map(|item| strip_quotes(item.trim()).to_string())
            .filter(|item| !item.is_empty())
            .collect();
        return HeaderValue::List(items);
    }

    if value.is_empty() {
        HeaderValue::Null
    } else {
        HeaderValue::Scalar(value.to_string())
    }
}

/// Strip one layer of surrounding single or double quotes, if present.
fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 {
        let bytes = value.as_bytes();
        let first = bytes[0];
        let last = bytes[value.len() - 1];
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
