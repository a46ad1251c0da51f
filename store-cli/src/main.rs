use clap::Parser;

use crate::cli::Cli;
use crate::commands::Commands;
use crate::error::AppError;

mod cli;
mod commands;
mod error;
mod parsers;

fn main() {
    env_logger::init();

    let args = Cli::parse();

    if let Err(err) = run(args) {
        log::error!("{}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(args: Cli) -> Result<(), AppError> {
    match &args.command {
        Commands::Run(run) => run.run(),
        Commands::Shell(shell) => shell.run(),
    }
}
