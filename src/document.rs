//! Research document records and metadata types.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::parser::{extract_title, parse_header};

/// Which root directory a document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Project,
    Global,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Project => write!(f, "project"),
            Label::Global => write!(f, "global"),
        }
    }
}

/// A single value in a document header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HeaderValue {
    /// Empty value (`key:` with nothing after the colon).
    Null,
    /// Plain scalar string.
    Scalar(String),
    /// Bracketed list syntax `[a, b, c]`.
    List(Vec<String>),
}

impl HeaderValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            HeaderValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Parsed header block: a flat key/value mapping.
///
/// Repeated keys overwrite earlier values (last write wins). Unrecognized
/// keys stay in the mapping but are not surfaced as named record fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Header(pub BTreeMap<String, HeaderValue>);

impl Header {
    pub fn get(&self, key: &str) -> Option<&HeaderValue> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    pub fn insert(&mut self, key: String, value: HeaderValue) {
        self.0.insert(key, value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Document date: either the header's date string or the file mtime fallback.
///
/// The two forms are deliberately kept apart instead of coerced: only the
/// text form participates in lexicographic recency sorting, a timestamp
/// sorts as an empty string (i.e. last).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DateValue {
    Text(String),
    Timestamp(f64),
}

impl DateValue {
    /// String form used for recency comparison.
    pub fn sort_text(&self) -> &str {
        match self {
            DateValue::Text(s) => s,
            DateValue::Timestamp(_) => "",
        }
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::Text(s) => write!(f, "{}", s),
            DateValue::Timestamp(t) => write!(f, "{}", t),
        }
    }
}

/// One discovered research document with its metadata.
///
/// Records are built transiently per invocation and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRecord {
    /// Base name of the file, unique within its directory.
    pub filename: String,

    /// Absolute location on disk, unique system-wide.
    pub path: PathBuf,

    /// Parsed header block, absent when the file has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,

    pub date: Option<DateValue>,
    pub query: Option<String>,
    pub repository: Option<String>,
    pub branch: Option<String>,
    pub commit: Option<String>,
    pub cwd: Option<String>,

    /// Never absent; no `tags` key yields an empty list.
    pub tags: Vec<String>,

    pub label: Label,

    /// Raw file content, kept for content matching.
    #[serde(skip)]
    pub content: String,
}

impl DocumentRecord {
    /// Build a record from file content.
    ///
    /// When a header is present, each named field is read independently and
    /// is `None` if its key is absent. When no header exists, `date` falls
    /// back to the file mtime and `query` to a title extracted from the body.
    pub fn from_content(
        filename: String,
        path: PathBuf,
        content: String,
        mtime: Option<f64>,
        label: Label,
    ) -> Self {
        let header = parse_header(&content);

        let (date, query, repository, branch, commit, cwd, tags) = match &header {
            Some(h) => (
                h.get_str("date").map(|s| DateValue::Text(s.to_string())),
                h.get_str("query").map(String::from),
                h.get_str("repository").map(String::from),
                h.get_str("branch").map(String::from),
                h.get_str("commit").map(String::from),
                h.get_str("cwd").map(String::from),
                header_tags(h),
            ),
            None => (
                mtime.map(DateValue::Timestamp),
                Some(extract_title(&content)),
                None,
                None,
                None,
                None,
                Vec::new(),
            ),
        };

        Self {
            filename,
            path,
            header,
            date,
            query,
            repository,
            branch,
            commit,
            cwd,
            tags,
            label,
            content,
        }
    }
}

/// Read the tag list from a header.
///
/// A scalar `tags:` value counts as a single tag; anything else is empty.
fn header_tags(header: &Header) -> Vec<String> {
    match header.get("tags") {
        Some(HeaderValue::List(items)) => items.clone(),
        Some(HeaderValue::Scalar(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(content: &str) -> DocumentRecord {
        DocumentRecord::from_content(
            "test.md".to_string(),
            PathBuf::from("/tmp/.research/test.md"),
            content.to_string(),
            Some(1700000000.0),
            Label::Project,
        )
    }

    #[test]
    fn test_record_with_header() {
        let doc = record("---\ndate: 2024-01-15\nquery: \"Foo bar\"\ntags: [alpha, beta]\n---\n# Body\n");
        assert_eq!(doc.date, Some(DateValue::Text("2024-01-15".to_string())));
        assert_eq!(doc.query.as_deref(), Some("Foo bar"));
        assert_eq!(doc.tags, vec!["alpha", "beta"]);
        assert_eq!(doc.label, Label::Project);
    }

    #[test]
    fn test_record_without_header_falls_back() {
        let doc = record("# My Research\n\nSome content\n");
        assert!(doc.header.is_none());
        assert_eq!(doc.date, Some(DateValue::Timestamp(1700000000.0)));
        assert_eq!(doc.query.as_deref(), Some("My Research"));
        assert!(doc.tags.is_empty());
    }

    #[test]
    fn test_header_present_missing_key_is_none() {
        // A header without `query` must not fall back to the title.
        let doc = record("---\ndate: 2024-01-15\n---\n# Heading\n");
        assert!(doc.header.is_some());
        assert!(doc.query.is_none());
        assert!(doc.repository.is_none());
    }

    #[test]
    fn test_tags_never_absent() {
        let doc = record("---\ndate: 2024-01-15\n---\nbody\n");
        assert!(doc.tags.is_empty());
    }

    #[test]
    fn test_scalar_tags_value_is_single_tag() {
        let doc = record("---\ntags: rust\n---\nbody\n");
        assert_eq!(doc.tags, vec!["rust"]);
    }

    #[test]
    fn test_timestamp_sorts_as_empty() {
        let ts = DateValue::Timestamp(1700000000.0);
        assert_eq!(ts.sort_text(), "");
        let text = DateValue::Text("2024-01-15".to_string());
        assert_eq!(text.sort_text(), "2024-01-15");
    }
}
