//! Ranking matched documents by score.

use crate::document::DocumentRecord;
use crate::search::matcher::score_document;
use serde::Serialize;

/// Default result limit for search.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// A document together with its match score and evidence.
#[derive(Debug, Clone, Serialize)]
pub struct RankedDocument {
    #[serde(flatten)]
    pub document: DocumentRecord,
    pub score: u32,
    pub evidence: Vec<String>,
}

/// Rank `documents` against `query`, dropping non-matches.
///
/// The sort is stable and descending by score; ties keep the input order,
/// which follows directory enumeration order. Results are truncated to
/// `limit`.
pub fn rank(
    documents: Vec<DocumentRecord>,
    query: &str,
    filter_tags: &[String],
    limit: usize,
) -> Vec<RankedDocument> {
    let mut ranked: Vec<RankedDocument> = documents
        .into_iter()
        .filter_map(|document| {
            score_document(&document, query, filter_tags).map(|m| RankedDocument {
                document,
                score: m.score,
                evidence: m.evidence,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);
    ranked
}
