//! Title extraction fallback for documents without a usable header.

/// Longest title taken from a plain content line.
const MAX_TITLE_LEN: usize = 80;

/// Derive a human-readable title from document content.
///
/// Skips any `---`-bounded region at the top (including malformed headers
/// the header parser rejected). The first `# ` heading wins; otherwise the
/// first non-blank line, truncated to 80 characters. An entirely blank
/// document yields the `(untitled)` placeholder.
pub fn extract_title(content: &str) -> String {
    let mut in_delimited = false;

    for line in content.lines() {
        if line == "---" {
            in_delimited = !in_delimited;
            continue;
        }
        if in_delimited {
            continue;
        }
        if let Some(rest) = line.strip_prefix("# ") {
            return rest.trim().to_string();
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return trimmed.chars().take(MAX_TITLE_LEN).collect();
        }
    }

    "(untitled)".to_string()
}
