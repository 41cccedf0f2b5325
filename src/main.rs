use anyhow::Result;
use clap::Parser;
use git_dircompare::cli::Cli;
use git_dircompare::commands;
use git_dircompare::logging::init::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;

    commands::dispatch(&cli)
}
