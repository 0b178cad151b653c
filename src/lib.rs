//! marklint - validates marks files mapping labels to path:line locations

pub mod cli;
pub mod domain;
pub mod infra;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_check, handle_list},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::Check(args) => {
            let marks_file = config.marks_file(args.file.as_ref());
            let root = config.root(cli.root.as_ref(), &marks_file);
            handle_check(args, &marks_file, &root, verbose)
        }
        Command::List(args) => {
            let marks_file = config.marks_file(args.file.as_ref());
            let root = config.root(cli.root.as_ref(), &marks_file);
            handle_list(args, &marks_file, &root)
        }
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "marklint", &mut std::io::stdout());
            Ok(())
        }
    }
}
