//! rsrch CLI entry point.

use clap::Parser;
use rsrch::cli::args::{Cli, Commands};
use rsrch::cli::output::Output;
use rsrch::cli::{list, metadata, promote, read, search};
use rsrch::config::Config;
use rsrch::error::ResearchError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new(cli.output_format(), cli.quiet);

    match run(&cli, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output.error(&e.to_string());
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli, output: &Output) -> Result<(), ResearchError> {
    let config = Config::load()?;
    let roots = config.resolve_roots(cli.project_dir.as_deref(), cli.global_dir.as_deref())?;

    match &cli.command {
        Commands::List(args) => list::run(&roots, args, output),
        Commands::Search(args) => search::run(&roots, args, output),
        Commands::Read(args) => read::run(&roots, args, output),
        Commands::Promote(args) => promote::run(&roots, args, output),
        Commands::Metadata => metadata::run(output),
    }
}
