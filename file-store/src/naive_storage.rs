use std::collections::BTreeMap;
use std::rc::Rc;

use data_error::{Result, StoreError};

use crate::base_storage::BaseStorage;
use crate::record::FileRecord;
use crate::reply::Reply;
use crate::utils::by_size_desc;

/// Time-naive namespace. Ignores timestamps and expiration entirely.
///
/// Copies bind the destination to the very record of the source,
/// so the two names share one [`FileRecord`].
#[derive(Debug)]
pub struct NaiveStorage {
    label: String,
    files: BTreeMap<String, Rc<FileRecord>>,
}

impl NaiveStorage {
    pub fn new(label: String) -> Self {
        Self {
            label,
            files: BTreeMap::new(),
        }
    }

    /// Fails hard with [`StoreError::Conflict`] when the name is taken.
    pub fn upload(&mut self, name: &str, size: &str) -> Result<Reply> {
        if self.contains(name) {
            log::warn!("naive/{}: {} already exists", self.label, name);
            return Err(StoreError::Conflict(name.to_owned()));
        }

        self.set(name.to_owned(), Rc::new(FileRecord::new(size)));
        Ok(Reply::Uploaded(name.to_owned()))
    }

    pub fn get_file(&self, name: &str) -> Reply {
        match self.get(name) {
            Some(_) => Reply::Got(name.to_owned()),
            None => Reply::NotFound,
        }
    }

    pub fn copy(&mut self, source: &str, dest: &str) -> Reply {
        if source == dest {
            return Reply::InvalidArguments;
        }

        let record = match self.get(source) {
            Some(record) => Rc::clone(record),
            None => return Reply::SourceNotFound,
        };
        self.set(dest.to_owned(), record);

        Reply::Copied {
            source: source.to_owned(),
            dest: dest.to_owned(),
        }
    }

    /// Names starting with `prefix`, largest size first,
    /// equal sizes in descending name order.
    pub fn search(&self, prefix: &str) -> Reply {
        let mut hits: Vec<(&String, &Rc<FileRecord>)> =
            self.with_prefix(prefix).collect();
        hits.sort_by(|(a_name, a), (b_name, b)| {
            by_size_desc(&a.size, &b.size).then_with(|| b_name.cmp(a_name))
        });

        Reply::Found(
            hits.into_iter()
                .map(|(name, _)| name.clone())
                .collect(),
        )
    }
}

impl BaseStorage<Rc<FileRecord>> for NaiveStorage {
    fn set(&mut self, name: String, value: Rc<FileRecord>) {
        log::debug!(
            "naive/{}: binding {} to {}",
            self.label,
            name,
            value.size
        );
        self.files.insert(name, value);
    }
}

impl AsRef<BTreeMap<String, Rc<FileRecord>>> for NaiveStorage {
    fn as_ref(&self) -> &BTreeMap<String, Rc<FileRecord>> {
        &self.files
    }
}
