use std::io::{self, BufRead, Write};

use file_store::{Command, Store};

use crate::error::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "shell", about = "Read commands from stdin, one per line")]
pub struct Shell {
    #[clap(short, long, default_value = "shell", help = "Label used in log lines")]
    label: String,
}

impl Shell {
    pub fn run(&self) -> Result<(), AppError> {
        let mut store = Store::new(self.label.clone());
        let stdin = io::stdin();
        serve(&mut store, stdin.lock(), io::stdout())
    }
}

/// Answers each input line with one output line.
/// An upload conflict is reported in place and the session goes on.
fn serve<R, W>(
    store: &mut Store,
    input: R,
    mut output: W,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let command: Command = line.parse()?;
        match store.execute(command) {
            Ok(reply) => writeln!(output, "{}", reply)?,
            // The failed upload leaves the store untouched
            Err(err) if err.is_conflict() => {
                log::error!("{}", err);
                writeln!(output, "error: {}", err)?;
            }
            Err(err) => return Err(err.into()),
        }
        output.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::serve;
    use file_store::base_storage::BaseStorage;
    use file_store::Store;

    #[test]
    fn test_shell_reports_conflict_and_continues() {
        let mut store = Store::new("test".to_owned());
        let input = "FILE_UPLOAD a 1kb\nFILE_UPLOAD a 2kb\n\n# comment\nFILE_GET a\n";
        let mut output = Vec::new();

        serve(&mut store, input.as_bytes(), &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output.lines().collect::<Vec<_>>(),
            vec!["uploaded a", "error: a already exists.", "got a"]
        );
        assert_eq!(store.naive().len(), 1);
        assert_eq!(store.naive().get("a").unwrap().size, "1kb");
    }

    #[test]
    fn test_shell_answers_unknown_lines() {
        let mut store = Store::new("test".to_owned());
        let mut output = Vec::new();

        serve(&mut store, "FILE_DELETE a\n".as_bytes(), &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "No operations provided.\n"
        );
    }
}
