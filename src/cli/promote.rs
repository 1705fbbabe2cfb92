//! Promote command implementation.

use crate::cli::args::{OutputFormat, PromoteArgs};
use crate::cli::output::Output;
use crate::config::Roots;
use crate::error::{ResearchError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct PromoteResponse {
    pub action: String,
    pub from: PathBuf,
    pub to: PathBuf,
}

pub fn run(roots: &Roots, args: &PromoteArgs, output: &Output) -> Result<()> {
    let source = roots.project.join(&args.filename);
    let destination = roots.global.join(&args.filename);

    if !source.is_file() {
        return Err(ResearchError::DocumentNotFound(source));
    }

    // Never silently overwrite an existing global document.
    if destination.exists() {
        return Err(ResearchError::DestinationExists(destination));
    }

    std::fs::create_dir_all(&roots.global)?;

    let action = if args.move_file {
        move_file(&source, &destination)?;
        "moved"
    } else {
        std::fs::copy(&source, &destination)?;
        "copied"
    };

    match output.format() {
        OutputFormat::Text => {
            let verb = if args.move_file { "Moved" } else { "Copied" };
            output.print_raw(&format!("{} to {}", verb, destination.display()));
            Ok(())
        }
        _ => output.print(&PromoteResponse {
            action: action.to_string(),
            from: source,
            to: destination,
        }),
    }
}

/// Move a file, falling back to copy+remove across filesystems.
fn move_file(source: &Path, destination: &Path) -> Result<()> {
    if std::fs::rename(source, destination).is_err() {
        std::fs::copy(source, destination)?;
        std::fs::remove_file(source)?;
    }
    Ok(())
}
