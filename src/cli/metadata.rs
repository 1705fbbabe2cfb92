//! Metadata command implementation.

use crate::cli::args::OutputFormat;
use crate::cli::output::Output;
use crate::error::Result;
use crate::metadata::{WorkspaceMetadata, gather};

pub fn run(output: &Output) -> Result<()> {
    let meta = gather();

    match output.format() {
        OutputFormat::Text => {
            output.print_raw(&render_text(&meta));
            Ok(())
        }
        _ => output.print(&meta),
    }
}

fn render_text(meta: &WorkspaceMetadata) -> String {
    let null = "null".to_string();
    [
        format!("date: {}", meta.date),
        format!("filename_date: {}", meta.filename_date),
        format!("cwd: {}", meta.cwd.as_ref().unwrap_or(&null)),
        format!("repository: {}", meta.repository.as_ref().unwrap_or(&null)),
        format!("branch: {}", meta.branch.as_ref().unwrap_or(&null)),
        format!("commit: {}", meta.commit.as_ref().unwrap_or(&null)),
    ]
    .join("\n")
}
