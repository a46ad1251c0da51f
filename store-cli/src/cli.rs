use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "store-cli")]
#[clap(about = "Run command scripts against an in-memory file store", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
