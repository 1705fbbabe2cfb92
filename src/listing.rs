//! Recency ordering for the listing use case.

use crate::document::DocumentRecord;

/// Default result limit for listing.
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Sort records by date, most recent first, and truncate to `limit`.
///
/// The date is compared as a string, which orders correctly only for a
/// shared format such as ISO 8601. Timestamp fallbacks and missing dates
/// compare as the empty string and therefore sort last. The sort is stable.
pub fn sort_by_recency(mut records: Vec<DocumentRecord>, limit: usize) -> Vec<DocumentRecord> {
    records.sort_by(|a, b| date_key(b).cmp(date_key(a)));
    records.truncate(limit);
    records
}

fn date_key(record: &DocumentRecord) -> &str {
    record.date.as_ref().map(|d| d.sort_text()).unwrap_or("")
}
