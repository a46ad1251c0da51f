use data_error::Result;

use crate::command::Command;
use crate::naive_storage::NaiveStorage;
use crate::reply::Reply;
use crate::timed_storage::TimedStorage;

/// The command-processing state machine.
///
/// Owns two independent namespaces: time-naive commands never see
/// files uploaded by time-aware ones, and vice versa.
#[derive(Debug)]
pub struct Store {
    label: String,
    naive: NaiveStorage,
    timed: TimedStorage,
}

impl Store {
    /// Create an empty store with a diagnostic label
    pub fn new(label: String) -> Self {
        Self {
            naive: NaiveStorage::new(label.clone()),
            timed: TimedStorage::new(label.clone()),
            label,
        }
    }

    pub fn naive(&self) -> &NaiveStorage {
        &self.naive
    }

    pub fn timed(&self) -> &TimedStorage {
        &self.timed
    }

    /// Applies one command.
    ///
    /// The only error is a naive upload of a taken name;
    /// the store is left untouched in that case.
    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        log::debug!("store/{}: executing {:?}", self.label, command);

        let reply = match command {
            Command::Upload { name, size } => self.naive.upload(&name, &size)?,
            Command::Get { name } => self.naive.get_file(&name),
            Command::Copy { source, dest } => self.naive.copy(&source, &dest),
            Command::Search { prefix } => self.naive.search(&prefix),
            Command::UploadAt {
                at,
                name,
                size,
                ttl,
            } => self.timed.upload_at(at, &name, &size, ttl),
            Command::GetAt { at, name } => self.timed.get_at(at, &name),
            Command::CopyAt { at, source, dest } => {
                self.timed.copy_at(at, &source, &dest)
            }
            Command::SearchAt { at, prefix } => {
                self.timed.search_at(at, &prefix)
            }
            Command::Rollback { at, text } => {
                self.timed.rollback(at);
                Reply::RolledBack(text)
            }
            Command::Unknown(_) => Reply::NoOperation,
        };
        Ok(reply)
    }

    /// Applies commands in order, one result line per command.
    /// Stops at the first hard failure.
    pub fn run<I>(&mut self, commands: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = Command>,
    {
        let mut output = Vec::new();
        for command in commands {
            output.push(self.execute(command)?.to_string());
        }
        log::info!(
            "store/{}: processed {} commands",
            self.label,
            output.len()
        );
        Ok(output)
    }
}

/// Runs raw `(NAME, args...)` tuples against a fresh store.
pub fn simulate<S: AsRef<str>>(operations: &[Vec<S>]) -> Result<Vec<String>> {
    let mut store = Store::new("simulation".to_owned());
    store.run(
        operations
            .iter()
            .map(|operation| Command::parse(operation.as_slice())),
    )
}
