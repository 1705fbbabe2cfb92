//! rsrch - an index for personal research documents.
//!
//! # Overview
//!
//! Research documents are markdown files with a lightweight `---`-delimited
//! metadata header, stored in a project-local `.research/` directory and a
//! user-global `~/.research/` directory. This crate provides:
//! - Best-effort header parsing (never fails, only degrades)
//! - Title fallback extraction for headerless documents
//! - Directory scanning into uniform metadata records
//! - Additive substring scoring with tag filters and ranked results
//! - Recency listing, document reading, and project-to-global promotion
//!
//! # Example
//!
//! ```no_run
//! use rsrch::config::Roots;
//! use rsrch::search::rank;
//! use rsrch::store::load_all;
//! use std::path::PathBuf;
//!
//! let roots = Roots {
//!     project: PathBuf::from(".research"),
//!     global: PathBuf::from("/home/user/.research"),
//! };
//! let documents = load_all(&roots);
//! for result in rank(documents, "tokio", &[], 5) {
//!     println!("{} [score: {}]", result.document.filename, result.score);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod listing;
pub mod metadata;
pub mod parser;
pub mod search;
pub mod store;

// Re-export main types at crate root
pub use config::{Config, Roots};
pub use document::{DateValue, DocumentRecord, Header, HeaderValue, Label};
pub use error::{ResearchError, Result};
