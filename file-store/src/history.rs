use std::collections::BTreeMap;

use serde::Serialize;

use crate::record::{TimedRecord, Timestamp};

/// A mutation applied to the time-aware namespace.
///
/// `record` is what `name` was bound to as a result,
/// so replaying an event never needs to look at other entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    Upload {
        name: String,
        time: Timestamp,
        record: TimedRecord,
    },
    Copy {
        name: String,
        time: Timestamp,
        record: TimedRecord,
    },
}

impl Event {
    pub fn name(&self) -> &str {
        match self {
            Event::Upload { name, .. } | Event::Copy { name, .. } => name,
        }
    }

    /// Instant at which the event took effect.
    pub fn time(&self) -> Timestamp {
        match self {
            Event::Upload { time, .. } | Event::Copy { time, .. } => *time,
        }
    }

    pub fn record(&self) -> &TimedRecord {
        match self {
            Event::Upload { record, .. } | Event::Copy { record, .. } => record,
        }
    }
}

/// Append-only log of applied mutations, in submission order.
#[derive(Clone, Debug, Default, Serialize)]
pub struct History {
    events: Vec<Event>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drops every event that took effect strictly after `target`
    /// and returns the mapping obtained by replaying the rest.
    ///
    /// Returns the number of discarded events alongside the mapping.
    pub fn rollback(
        &mut self,
        target: Timestamp,
    ) -> (BTreeMap<String, TimedRecord>, usize) {
        let before = self.events.len();
        self.events
            .retain(|event| event.time() <= target);

        (self.replay(), before - self.events.len())
    }

    /// Folds the events into a fresh mapping.
    /// Later events for a name overwrite earlier ones.
    pub fn replay(&self) -> BTreeMap<String, TimedRecord> {
        self.events
            .iter()
            .fold(BTreeMap::new(), |mut files, event| {
                files.insert(event.name().to_owned(), event.record().clone());
                files
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn upload(name: &str, at: &str) -> Event {
        Event::Upload {
            name: name.to_owned(),
            time: ts(at),
            record: TimedRecord::new("1kb", ts(at), None),
        }
    }

    #[test]
    fn test_rollback_keeps_events_at_or_before_target() {
        let mut history = History::new();
        history.record(upload("a", "2021-07-01T12:00:00"));
        history.record(upload("b", "2021-07-01T12:10:00"));
        history.record(upload("c", "2021-07-01T12:20:00"));

        let (files, discarded) = history.rollback(ts("2021-07-01T12:10:00"));
        assert_eq!(discarded, 1);
        assert_eq!(history.len(), 2);
        assert_eq!(files.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_rollback_keeps_submission_order_for_out_of_order_times() {
        let mut history = History::new();
        history.record(Event::Copy {
            name: "x".to_owned(),
            time: ts("2021-07-01T12:05:00"),
            record: TimedRecord::new("2kb", ts("2021-07-01T12:05:00"), None),
        });
        history.record(Event::Copy {
            name: "x".to_owned(),
            time: ts("2021-07-01T12:01:00"),
            record: TimedRecord::new("3kb", ts("2021-07-01T12:01:00"), None),
        });

        let (files, discarded) = history.rollback(ts("2021-07-01T12:30:00"));
        assert_eq!(discarded, 0);
        assert_eq!(files["x"].size, "3kb");
    }

    #[test]
    fn test_rollback_before_everything_empties_the_log() {
        let mut history = History::new();
        history.record(upload("a", "2021-07-01T12:00:00"));

        let (files, discarded) = history.rollback(ts("2021-07-01T11:59:59"));
        assert!(files.is_empty());
        assert_eq!(discarded, 1);
        assert!(history.is_empty());
    }
}
