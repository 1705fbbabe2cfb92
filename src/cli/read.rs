//! Read command implementation.

use crate::cli::args::{OutputFormat, ReadArgs};
use crate::cli::output::Output;
use crate::config::Roots;
use crate::document::Label;
use crate::error::{ResearchError, Result};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct ReadResponse {
    pub filename: String,
    pub path: PathBuf,
    pub label: Label,
    pub content: String,
}

pub fn run(roots: &Roots, args: &ReadArgs, output: &Output) -> Result<()> {
    let path = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()?.join(&args.path)
    };

    // The path must resolve inside one of the two root directories.
    let label = roots
        .locate(&path)
        .ok_or_else(|| ResearchError::PathOutsideRoots(path.clone()))?;

    if !path.is_file() {
        return Err(ResearchError::DocumentNotFound(path));
    }

    let content = std::fs::read_to_string(&path)?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match output.format() {
        OutputFormat::Text => {
            output.print_raw(&format!("# {} ({})\n", filename, label));
            output.print_raw(&content);
            Ok(())
        }
        _ => output.print(&ReadResponse {
            filename,
            path,
            label,
            content,
        }),
    }
}
