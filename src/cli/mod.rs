//! CLI command implementations.

pub mod args;
pub mod output;

pub mod list;
pub mod metadata;
pub mod promote;
pub mod read;
pub mod search;

pub use args::{Cli, Commands};
pub use output::Output;
