use clap::Subcommand;

mod run;
mod shell;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(run::Run),
    Shell(shell::Shell),
}
