//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rsrch")]
#[command(author, version, about = "A CLI for research documents", long_about = None)]
pub struct Cli {
    /// Project-local research directory (default: <cwd>/.research)
    #[arg(long, global = true)]
    pub project_dir: Option<PathBuf>,

    /// User-global research directory (default: ~/.research)
    #[arg(long, global = true)]
    pub global_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, conflicts_with = "yaml")]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with = "json")]
    pub yaml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.yaml {
            OutputFormat::Yaml
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recent research documents
    List(ListArgs),

    /// Search research documents for a topic
    Search(SearchArgs),

    /// Read the full content of a research document
    Read(ReadArgs),

    /// Promote a project-local document to the global directory
    Promote(PromoteArgs),

    /// Print workspace metadata for a new research document
    Metadata,
}

/// Which root directories a listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Location {
    Project,
    Global,
    #[default]
    Both,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Maximum results
    #[arg(long, default_value_t = crate::listing::DEFAULT_LIST_LIMIT)]
    pub limit: usize,

    /// Which directory to list
    #[arg(long, value_enum, default_value = "both")]
    pub location: Location,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search term or topic to find
    pub query: String,

    /// Filter by tags (comma-separated)
    #[arg(long)]
    pub tags: Option<String>,

    /// Maximum results
    #[arg(long, default_value_t = crate::search::rank::DEFAULT_SEARCH_LIMIT)]
    pub limit: usize,
}

#[derive(Parser, Debug)]
pub struct ReadArgs {
    /// Full path to the research document
    pub path: PathBuf,
}

#[derive(Parser, Debug)]
pub struct PromoteArgs {
    /// Filename to promote (from the project directory)
    pub filename: String,

    /// Move instead of copy
    #[arg(long = "move")]
    pub move_file: bool,
}

impl SearchArgs {
    /// Parse the comma-separated `--tags` value into trimmed filter tags.
    pub fn filter_tags(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .map(|t| {
                t.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
