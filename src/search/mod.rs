//! Query matching and ranking over document records.

pub mod matcher;
pub mod rank;

pub use matcher::{QueryMatch, score_document};
pub use rank::{RankedDocument, rank};
