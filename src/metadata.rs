//! Workspace metadata gathering for new research documents.
//!
//! Collects the current timestamp, working directory and git context. Git
//! lookups are best-effort: a missing binary, a non-repo directory or a
//! failing command all degrade to absent values, never to an error.

use chrono::Local;
use serde::Serialize;
use std::process::Command;

/// Metadata describing the workspace a research document is written from.
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceMetadata {
    /// Current time, RFC 3339 with local offset.
    pub date: String,
    /// Current date in `YYYY-MM-DD`, for building filenames.
    pub filename_date: String,
    pub cwd: Option<String>,
    pub repository: Option<String>,
    pub branch: Option<String>,
    pub commit: Option<String>,
}

/// Gather metadata from the current workspace.
pub fn gather() -> WorkspaceMetadata {
    let now = Local::now();
    let cwd = std::env::current_dir()
        .ok()
        .map(|p| p.to_string_lossy().into_owned());

    let (repository, branch, commit) = if in_git_repo() {
        (
            git_output(&["remote", "get-url", "origin"]),
            git_output(&["branch", "--show-current"])
                .or_else(|| git_output(&["rev-parse", "--abbrev-ref", "HEAD"])),
            git_output(&["rev-parse", "--short", "HEAD"]),
        )
    } else {
        (None, None, None)
    };

    WorkspaceMetadata {
        date: now.to_rfc3339(),
        filename_date: now.format("%Y-%m-%d").to_string(),
        cwd,
        repository,
        branch,
        commit,
    }
}

fn in_git_repo() -> bool {
    git_output(&["rev-parse", "--is-inside-work-tree"]).as_deref() == Some("true")
}

/// Run a git command, returning trimmed stdout on success.
fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_date_format() {
        let meta = gather();
        // YYYY-MM-DD
        assert_eq!(meta.filename_date.len(), 10);
        assert_eq!(meta.filename_date.as_bytes()[4], b'-');
        assert_eq!(meta.filename_date.as_bytes()[7], b'-');
    }

    #[test]
    fn test_date_is_rfc3339() {
        let meta = gather();
        assert!(chrono::DateTime::parse_from_rfc3339(&meta.date).is_ok());
    }
}
