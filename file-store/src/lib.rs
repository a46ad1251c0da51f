//! In-memory file store answering a script of commands.
//!
//! Two command families share one [`Store`]: time-naive commands
//! (`FILE_UPLOAD`, `FILE_GET`, `FILE_COPY`, `FILE_SEARCH`) and time-aware
//! ones (`FILE_UPLOAD_AT`, `FILE_GET_AT`, `FILE_COPY_AT`, `FILE_SEARCH_AT`,
//! `ROLLBACK`) which honour ttl expiration and can be rolled back.
//! Each command produces exactly one result line.

pub mod base_storage;
pub mod command;
pub mod history;
pub mod naive_storage;
pub mod record;
pub mod reply;
pub mod store;
pub mod timed_storage;
pub mod utils;

pub use command::Command;
pub use record::{FileRecord, TimedRecord, Timestamp, Ttl};
pub use reply::Reply;
pub use store::{simulate, Store};
