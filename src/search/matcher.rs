//! Scoring a single document against a free-text query.

use crate::document::DocumentRecord;

/// Title substring match.
const TITLE_SCORE: u32 = 10;
/// Per matching tag.
const TAG_SCORE: u32 = 5;
/// Per matching content line, capped at [`MAX_CONTENT_MATCHES`].
const CONTENT_LINE_SCORE: u32 = 1;
/// Content scanning stops after this many matching lines.
const MAX_CONTENT_MATCHES: usize = 3;
/// Evidence snippets are truncated to this many characters.
const MAX_SNIPPET_LEN: usize = 100;

/// A positive match: the additive score and the human-readable evidence
/// entries that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMatch {
    pub score: u32,
    pub evidence: Vec<String>,
}

/// Score one document against `query` with an optional tag filter.
///
/// Returns `None` when the document is excluded by the tag filter or scores
/// zero. All matching is case-insensitive substring matching.
pub fn score_document(
    doc: &DocumentRecord,
    query: &str,
    filter_tags: &[String],
) -> Option<QueryMatch> {
    if !filter_tags.is_empty() && !passes_tag_filter(doc, filter_tags) {
        return None;
    }

    let needle = query.to_lowercase();
    let mut score = 0;
    let mut evidence = Vec::new();

    if let Some(title) = &doc.query {
        if title.to_lowercase().contains(&needle) {
            score += TITLE_SCORE;
            evidence.push(format!("query: \"{}\"", title));
        }
    }

    let matching_tags: Vec<&str> = doc
        .tags
        .iter()
        .filter(|tag| tag.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect();
    if !matching_tags.is_empty() {
        score += TAG_SCORE * matching_tags.len() as u32;
        evidence.push(format!("tags: {}", matching_tags.join(", ")));
    }

    let mut content_matches = 0;
    for (idx, line) in doc.content.lines().enumerate() {
        if line.to_lowercase().contains(&needle) {
            let snippet: String = line.trim().chars().take(MAX_SNIPPET_LEN).collect();
            evidence.push(format!("L{}: {}", idx + 1, snippet));
            score += CONTENT_LINE_SCORE;
            content_matches += 1;
            if content_matches >= MAX_CONTENT_MATCHES {
                break;
            }
        }
    }

    if score > 0 {
        Some(QueryMatch { score, evidence })
    } else {
        None
    }
}

/// Tag filter: at least one filter tag must be a case-insensitive substring
/// of at least one document tag. A document without tags never passes.
fn passes_tag_filter(doc: &DocumentRecord, filter_tags: &[String]) -> bool {
    filter_tags.iter().any(|ft| {
        let ft = ft.to_lowercase();
        doc.tags.iter().any(|tag| tag.to_lowercase().contains(&ft))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Label;
    use std::path::PathBuf;

    fn doc(content: &str) -> DocumentRecord {
        DocumentRecord::from_content(
            "doc.md".to_string(),
            PathBuf::from("/tmp/.research/doc.md"),
            content.to_string(),
            None,
            Label::Project,
        )
    }

    #[test]
    fn test_title_match_scores_ten() {
        // The raw content scan also sees the header's own query line, +1.
        let d = doc("---\nquery: \"How foo works\"\n---\nnothing else\n");
        let m = score_document(&d, "foo", &[]).unwrap();
        assert_eq!(m.score, TITLE_SCORE + CONTENT_LINE_SCORE);
        assert_eq!(m.evidence[0], "query: \"How foo works\"");
        assert_eq!(m.evidence[1], "L2: query: \"How foo works\"");
    }

    #[test]
    fn test_tag_match_scores_five_each() {
        let d = doc("---\nquery: other\ntags: [rust-async, async-io, sync]\n---\n");
        let m = score_document(&d, "async", &[]).unwrap();
        // Two matching tags plus the header's tags line in the content scan.
        assert_eq!(m.score, 2 * TAG_SCORE + CONTENT_LINE_SCORE);
        assert_eq!(m.evidence[0], "tags: rust-async, async-io");
    }

    #[test]
    fn test_content_lines_capped_at_three() {
        // First line becomes the fallback title, so keep it query-free.
        let d = doc("bar\nfoo\nfoo\nfoo\nfoo\nfoo\n");
        let m = score_document(&d, "foo", &[]).unwrap();
        assert_eq!(m.score, 3);
        assert_eq!(m.evidence.len(), 3);
        assert_eq!(m.evidence[0], "L2: foo");
        assert_eq!(m.evidence[2], "L4: foo");
    }

    #[test]
    fn test_content_cap_is_monotonic() {
        // Adding more matching lines past the cap cannot change the score.
        let short = doc("bar\nfoo\nfoo\nfoo\n");
        let long = doc("bar\nfoo\nfoo\nfoo\nfoo\nfoo\nfoo\n");
        let a = score_document(&short, "foo", &[]).unwrap();
        let b = score_document(&long, "foo", &[]).unwrap();
        assert_eq!(a.score, b.score);
        assert_eq!(a.score, 3);
    }

    #[test]
    fn test_line_numbers_cover_raw_content() {
        // Raw content scan includes the header lines, 1-indexed.
        let d = doc("---\nquery: unrelated\n---\nhere is foo\n");
        let m = score_document(&d, "foo", &[]).unwrap();
        assert_eq!(m.evidence, vec!["L4: here is foo"]);
    }

    #[test]
    fn test_snippet_trimmed_and_truncated() {
        let long_line = format!("   {}foo", "x".repeat(150));
        let d = doc(&long_line);
        let m = score_document(&d, "foo", &[]).unwrap();
        let snippet = m.evidence[0].strip_prefix("L1: ").unwrap();
        assert_eq!(snippet.chars().count(), 100);
        assert!(!snippet.starts_with(' '));
    }

    #[test]
    fn test_case_insensitive() {
        let d = doc("---\nquery: \"Tokio Runtime\"\n---\nTOKIO everywhere\n");
        let m = score_document(&d, "tokio", &[]).unwrap();
        assert_eq!(m.score, TITLE_SCORE + 2 * CONTENT_LINE_SCORE);
    }

    #[test]
    fn test_zero_score_is_excluded() {
        let d = doc("---\nquery: unrelated\n---\nnothing here\n");
        assert!(score_document(&d, "zebra", &[]).is_none());
    }

    #[test]
    fn test_tag_filter_hard_exclusion() {
        let d = doc("---\nquery: \"About python\"\ntags: [go, rust]\n---\npython python\n");
        let filter = vec!["python".to_string()];
        // Matches the query everywhere but fails the tag filter.
        assert!(score_document(&d, "python", &filter).is_none());
    }

    #[test]
    fn test_tag_filter_substring_match() {
        let d = doc("---\nquery: \"Notes\"\ntags: [rust-async]\n---\nnotes\n");
        let filter = vec!["rust".to_string()];
        assert!(score_document(&d, "notes", &filter).is_some());
    }

    #[test]
    fn test_untagged_document_never_passes_filter() {
        let d = doc("# Notes\n\nfoo\n");
        let filter = vec!["anything".to_string()];
        assert!(score_document(&d, "foo", &filter).is_none());
    }

    #[test]
    fn test_headerless_title_fallback_matches() {
        let d = doc("# Deep dive into foo\n\nbody\n");
        let m = score_document(&d, "foo", &[]).unwrap();
        // Title (from heading) plus the heading line itself in content.
        assert_eq!(m.score, TITLE_SCORE + CONTENT_LINE_SCORE);
    }
}
