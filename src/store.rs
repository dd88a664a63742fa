//! Capability seams between the core records and their collaborators.
//!
//! The real deployment hangs these off a persistence layer and an
//! authorization layer; here they are plain traits plus a small in-memory
//! store that exercises the same contracts.

use std::collections::HashMap;

use uuid::Uuid;

use crate::lifecycle::{Job, Meta};

/// Placement contract a generic store needs to file a record.
pub trait Keyed {
    /// Category tag used to namespace keys (`"jobs"` for jobs).
    fn prefix(&self) -> &'static str;
    /// The record's unique key within its prefix.
    fn key(&self) -> String;
    /// Name of the field the key comes from.
    fn key_name(&self) -> &'static str;
}

/// Scope key used for authorization checks against a record.
pub trait AuthScoped {
    fn auth_key(&self) -> String;
}

/// Metadata accessor used by generic metadata-query tooling.
pub trait MetaBearing {
    fn get_meta(&self) -> Meta;
    fn set_meta(&mut self, meta: Meta);
}

/// In-memory record store keyed by `"<prefix>/<key>"`.
#[derive(Debug, Default)]
pub struct Store<T: Keyed> {
    records: HashMap<String, T>,
}

impl<T: Keyed> Store<T> {
    pub fn new() -> Self {
        Self { records: HashMap::new() }
    }

    fn full_key(record: &T) -> String {
        format!("{}/{}", record.prefix(), record.key())
    }

    /// File a record under its own key, replacing any previous occupant.
    pub fn insert(&mut self, record: T) {
        self.records.insert(Self::full_key(&record), record);
    }

    pub fn find(&self, prefix: &str, key: &str) -> Option<&T> {
        self.records.get(&format!("{prefix}/{key}"))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Store<Job> {
    pub fn find_job(&self, uuid: Uuid) -> Option<&Job> {
        self.find("jobs", &uuid.to_string())
    }

    /// Follow a job's `Previous` link. The link is weak: an absent field or
    /// a dangling reference (prior job archived away or removed) both
    /// resolve to nothing.
    pub fn previous_of(&self, job: &Job) -> Option<&Job> {
        self.find_job(job.previous?)
    }
}
