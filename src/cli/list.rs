//! List command implementation.

use crate::cli::args::{ListArgs, Location, OutputFormat};
use crate::cli::output::Output;
use crate::config::Roots;
use crate::document::{DocumentRecord, Label};
use crate::error::Result;
use crate::listing::sort_by_recency;
use crate::store::{load_all, scan_dir};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub documents: Vec<DocumentRecord>,
    pub total: usize,
}

pub fn run(roots: &Roots, args: &ListArgs, output: &Output) -> Result<()> {
    let records = match args.location {
        Location::Project => scan_dir(&roots.project, Label::Project),
        Location::Global => scan_dir(&roots.global, Label::Global),
        Location::Both => load_all(roots),
    };

    let total = records.len();
    let documents = sort_by_recency(records, args.limit);

    match output.format() {
        OutputFormat::Text => {
            if documents.is_empty() {
                output.print_raw("No research documents found.");
                return Ok(());
            }
            for doc in &documents {
                output.print_raw(&render_document(doc));
                output.print_raw("");
            }
            Ok(())
        }
        _ => {
            let response = ListResponse { documents, total };
            output.print(&response)
        }
    }
}

/// One document as a text block: filename, query, date line, path.
pub fn render_document(doc: &DocumentRecord) -> String {
    let mut block = format!("{} ({})\n", doc.filename, doc.label);
    block.push_str(&format!(
        "  query: {}\n",
        doc.query.as_deref().unwrap_or("(untitled)")
    ));

    let mut date_line = format!(
        "  date: {}",
        doc.date
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "null".to_string())
    );
    if let Some(branch) = present(&doc.branch) {
        date_line.push_str(&format!(" | branch: {}", branch));
    }
    if let Some(commit) = present(&doc.commit) {
        date_line.push_str(&format!(" | commit: {}", commit));
    }
    if let Some(repo) = present(&doc.repository) {
        date_line.push_str(&format!("\n  repo: {}", repo));
    }
    if !doc.tags.is_empty() {
        date_line.push_str(&format!(", tags: {}", doc.tags.join(", ")));
    }
    block.push_str(&date_line);
    block.push('\n');

    block.push_str(&format!("  path: {}", doc.path.display()));
    block
}

/// A field is shown only when set and not the literal `null` placeholder
/// written by metadata gathering.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty() && *s != "null")
}
