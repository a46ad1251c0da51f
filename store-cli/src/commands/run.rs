use std::fs;
use std::path::PathBuf;

use file_store::base_storage::BaseStorage;
use file_store::Store;

use crate::error::AppError;
use crate::parsers::{parse_script, ScriptFormat};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "run", about = "Execute a script and print one result per command")]
pub struct Run {
    #[clap(value_parser, help = "Path to the command script")]
    script: PathBuf,
    #[clap(short, long, value_enum, help = "Script format, guessed from the extension by default")]
    format: Option<ScriptFormat>,
    #[clap(short, long, default_value = "cli", help = "Label used in log lines")]
    label: String,
    #[clap(short, long, action = clap::ArgAction::SetTrue, help = "Print the final time-aware state to stderr")]
    dump: bool,
}

impl Run {
    pub fn run(&self) -> Result<(), AppError> {
        let content = fs::read_to_string(&self.script).map_err(|err| {
            AppError::ScriptReadError(self.script.display().to_string(), err)
        })?;
        let format = self
            .format
            .unwrap_or_else(|| ScriptFormat::from_path(&self.script));
        let commands = parse_script(&content, format)?;
        log::info!(
            "Loaded {} commands from {}",
            commands.len(),
            self.script.display()
        );

        let mut store = Store::new(self.label.clone());
        let mut outcome = Ok(());
        for command in commands {
            match store.execute(command) {
                Ok(reply) => println!("{}", reply),
                Err(err) => {
                    outcome = Err(AppError::Aborted(err));
                    break;
                }
            }
        }

        if self.dump {
            let state = serde_json::json!({
                "files": store.timed().entries(),
                "history": store.timed().history(),
            });
            eprintln!("{}", serde_json::to_string_pretty(&state)?);
        }

        outcome
    }
}
