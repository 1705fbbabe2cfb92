//! Search command implementation.

use crate::cli::args::{OutputFormat, SearchArgs};
use crate::cli::output::Output;
use crate::config::Roots;
use crate::error::Result;
use crate::search::{RankedDocument, rank};
use crate::store::load_all;
use serde::Serialize;

/// At most this many evidence lines are shown per result in text mode.
const MAX_SHOWN_EVIDENCE: usize = 4;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<RankedDocument>,
    pub total: usize,
    pub query: String,
}

pub fn run(roots: &Roots, args: &SearchArgs, output: &Output) -> Result<()> {
    // Search always covers both directories, unlike listing.
    let records = load_all(roots);
    let no_documents = records.is_empty();

    let filter_tags = args.filter_tags();
    let results = rank(records, &args.query, &filter_tags, args.limit);

    match output.format() {
        OutputFormat::Text => {
            if no_documents {
                output.print_raw("No research documents found.");
                return Ok(());
            }
            if results.is_empty() {
                output.print_raw(&format!(
                    "No research documents found matching \"{}\".",
                    args.query
                ));
                return Ok(());
            }
            for result in &results {
                output.print_raw(&render_result(result));
                output.print_raw("");
            }
            Ok(())
        }
        _ => {
            let total = results.len();
            let response = SearchResponse {
                results,
                total,
                query: args.query.clone(),
            };
            output.print(&response)
        }
    }
}

fn render_result(result: &RankedDocument) -> String {
    let doc = &result.document;
    let shown: Vec<&str> = result
        .evidence
        .iter()
        .take(MAX_SHOWN_EVIDENCE)
        .map(String::as_str)
        .collect();

    let mut block = format!("{} ({}) [score: {}]\n", doc.filename, doc.label, result.score);
    block.push_str(&format!(
        "  query: {}\n",
        doc.query.as_deref().unwrap_or("(untitled)")
    ));
    block.push_str(&format!(
        "  date: {}\n",
        doc.date
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "null".to_string())
    ));
    block.push_str(&format!("  path: {}\n", doc.path.display()));
    block.push_str("  matches:\n");
    block.push_str(&format!("    {}", shown.join("\n    ")));
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentRecord, Label};
    use crate::search::score_document;
    use std::path::PathBuf;

    #[test]
    fn test_render_caps_evidence_at_four() {
        let content = "---\nquery: \"foo study\"\ntags: [foo]\n---\nfoo\nfoo\nfoo\n";
        let doc = DocumentRecord::from_content(
            "r.md".to_string(),
            PathBuf::from("/tmp/.research/r.md"),
            content.to_string(),
            None,
            Label::Project,
        );
        let m = score_document(&doc, "foo", &[]).unwrap();
        // query + tags + 3 content lines = 5 evidence entries
        assert_eq!(m.evidence.len(), 5);

        let rendered = render_result(&RankedDocument {
            document: doc,
            score: m.score,
            evidence: m.evidence,
        });
        let match_lines = rendered
            .lines()
            .filter(|l| l.starts_with("    "))
            .count();
        assert_eq!(match_lines, MAX_SHOWN_EVIDENCE);
        assert!(rendered.contains("[score: 18]"));
    }
}
