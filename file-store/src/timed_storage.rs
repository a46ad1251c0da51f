use std::collections::BTreeMap;

use crate::base_storage::BaseStorage;
use crate::history::{Event, History};
use crate::record::{TimedRecord, Timestamp, Ttl};
use crate::reply::Reply;
use crate::utils::by_size_desc;

/// Time-aware namespace with expiration and rollback.
///
/// Every successful mutation is appended to a [`History`],
/// from which the mapping can be rebuilt as of any past instant.
#[derive(Debug)]
pub struct TimedStorage {
    label: String,
    files: BTreeMap<String, TimedRecord>,
    history: History,
}

impl TimedStorage {
    pub fn new(label: String) -> Self {
        Self {
            label,
            files: BTreeMap::new(),
            history: History::new(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Soft-fails when the name is bound, expired or not.
    pub fn upload_at(
        &mut self,
        at: Timestamp,
        name: &str,
        size: &str,
        ttl: Option<Ttl>,
    ) -> Reply {
        if self.contains(name) {
            log::warn!(
                "timed/{}: refusing to upload {} at {}, name is taken",
                self.label,
                name,
                at
            );
            return Reply::UploadFailed;
        }

        let record = TimedRecord::new(size, at, ttl);
        self.history.record(Event::Upload {
            name: name.to_owned(),
            time: at,
            record: record.clone(),
        });
        self.set(name.to_owned(), record);

        Reply::UploadedAt(name.to_owned())
    }

    pub fn get_at(&self, at: Timestamp, name: &str) -> Reply {
        match self.get(name) {
            None => Reply::NotFound,
            Some(record) if record.is_expired(at) => Reply::NotFoundAt,
            Some(_) => Reply::GotAt(name.to_owned()),
        }
    }

    /// The destination gets the source's size and ttl,
    /// with its creation time reset to `at`.
    pub fn copy_at(&mut self, at: Timestamp, source: &str, dest: &str) -> Reply {
        let record = match self.get(source) {
            None => return Reply::NotFoundAt,
            Some(record) if record.is_expired(at) => {
                log::warn!(
                    "timed/{}: cannot copy {}, expired before {}",
                    self.label,
                    source,
                    at
                );
                return Reply::CopyFailed;
            }
            Some(record) => record.copied_at(at),
        };

        self.history.record(Event::Copy {
            name: dest.to_owned(),
            time: at,
            record: record.clone(),
        });
        self.set(dest.to_owned(), record);

        Reply::CopiedAt {
            source: source.to_owned(),
            dest: dest.to_owned(),
        }
    }

    /// Live names starting with `prefix`, largest size first,
    /// equal sizes in ascending name order.
    pub fn search_at(&self, at: Timestamp, prefix: &str) -> Reply {
        let mut hits: Vec<(&String, &TimedRecord)> = self
            .with_prefix(prefix)
            .filter(|(_, record)| !record.is_expired(at))
            .collect();
        hits.sort_by(|(a_name, a), (b_name, b)| {
            by_size_desc(&a.size, &b.size).then_with(|| a_name.cmp(b_name))
        });

        Reply::FoundAt(
            hits.into_iter()
                .map(|(name, _)| name.clone())
                .collect(),
        )
    }

    /// Rebuilds the mapping from the events that took effect
    /// at or before `target`. Later events are forgotten for good.
    ///
    /// Returns the number of discarded events.
    pub fn rollback(&mut self, target: Timestamp) -> usize {
        let (files, discarded) = self.history.rollback(target);
        log::info!(
            "timed/{}: rolled back to {}, {} events kept, {} discarded",
            self.label,
            target,
            self.history.len(),
            discarded
        );
        self.files = files;

        discarded
    }
}

impl BaseStorage<TimedRecord> for TimedStorage {
    fn set(&mut self, name: String, value: TimedRecord) {
        log::debug!(
            "timed/{}: binding {} to {} created at {}",
            self.label,
            name,
            value.size,
            value.created_at
        );
        self.files.insert(name, value);
    }
}

impl AsRef<BTreeMap<String, TimedRecord>> for TimedStorage {
    fn as_ref(&self) -> &BTreeMap<String, TimedRecord> {
        &self.files
    }
}
