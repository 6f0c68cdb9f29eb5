//! Lock-guarded handle over a record store.

use super::RecordStore;
use crate::criteria::Criteria;
use crate::error::CoreResult;
use crate::record::Record;
use parking_lot::RwLock;
use recstore_codec::Value;
use std::sync::Arc;

/// A cloneable, thread-safe handle to a [`RecordStore`].
///
/// Each method takes the lock for the duration of one store operation.
/// Reads hand back owned records since borrows cannot outlive the guard.
/// Use [`read`](Self::read) or [`write`](Self::write) to run several
/// operations under a single acquisition.
#[derive(Clone, Default)]
pub struct SharedRecordStore {
    inner: Arc<RwLock<RecordStore>>,
}

impl SharedRecordStore {
    /// Wraps a store.
    pub fn new(store: RecordStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Appends a record.
    pub fn insert(&self, record: Record) -> CoreResult<()> {
        self.inner.write().insert(record)
    }

    /// Replaces every record sharing `record`'s identifier.
    pub fn update(&self, record: Record) -> CoreResult<usize> {
        self.inner.write().update(record)
    }

    /// Replaces the record at `position`.
    pub fn update_at(&self, position: usize, record: Record) -> CoreResult<()> {
        self.inner.write().update_at(position, record)
    }

    /// Returns copies of every record matching `criteria`.
    pub fn search(&self, criteria: &Criteria) -> Vec<Record> {
        self.inner
            .read()
            .search(criteria)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Returns a copy of the first record with identifier `id`.
    pub fn get(&self, id: &Value) -> Option<Record> {
        self.inner.read().get(id).cloned()
    }

    /// Removes records matching `criteria` per the store's policy.
    pub fn remove(&self, criteria: &Criteria) -> CoreResult<Vec<Record>> {
        self.inner.write().remove(criteria)
    }

    /// Removes every record matching `criteria`.
    pub fn remove_all(&self, criteria: &Criteria) -> Vec<Record> {
        self.inner.write().remove_all(criteria)
    }

    /// Returns a snapshot of all records in insertion order.
    pub fn list_all(&self) -> Vec<Record> {
        self.inner.read().records().to_vec()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Runs `f` with shared access to the store.
    pub fn read<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&RecordStore) -> T,
    {
        f(&*self.inner.read())
    }

    /// Runs `f` with exclusive access to the store.
    pub fn write<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut RecordStore) -> T,
    {
        f(&mut *self.inner.write())
    }
}

impl From<RecordStore> for SharedRecordStore {
    fn from(store: RecordStore) -> Self {
        Self::new(store)
    }
}

impl std::fmt::Debug for SharedRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedRecordStore")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
