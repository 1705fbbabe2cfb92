//! Directory scanning: turning `*.md` files into document records.

use crate::config::Roots;
use crate::document::{DocumentRecord, Label};
use glob::glob;
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Scan one root directory for research documents.
///
/// A missing directory is a normal state and yields an empty set. Every
/// `*.md` file directly inside the directory (non-recursive) becomes a
/// record; any single file that cannot be read is skipped so one bad file
/// never aborts the scan. Result order is filesystem enumeration order and
/// must be sorted downstream.
pub fn scan_dir(dir: &Path, label: Label) -> Vec<DocumentRecord> {
    let mut records = Vec::new();

    if !dir.is_dir() {
        return records;
    }

    let pattern = dir.join("*.md");
    let Ok(entries) = glob(&pattern.to_string_lossy()) else {
        return records;
    };

    for entry in entries {
        let Ok(path) = entry else { continue };
        if !path.is_file() {
            continue;
        }
        let Ok(content) = std::fs::read_to_string(&path) else {
            continue;
        };

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mtime = file_mtime(&path);

        records.push(DocumentRecord::from_content(
            filename, path, content, mtime, label,
        ));
    }

    records
}

/// Load records from both roots, project first.
pub fn load_all(roots: &Roots) -> Vec<DocumentRecord> {
    let mut records = scan_dir(&roots.project, Label::Project);
    records.extend(scan_dir(&roots.global, Label::Global));
    records
}

/// File modification time as seconds since the epoch.
fn file_mtime(path: &Path) -> Option<f64> {
    let metadata = std::fs::metadata(path).ok()?;
    let modified = metadata.modified().ok()?;
    let duration = modified.duration_since(UNIX_EPOCH).ok()?;
    Some(duration.as_secs_f64())
}
