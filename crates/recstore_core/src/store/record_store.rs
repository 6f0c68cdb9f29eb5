//! Ordered in-memory record store.

use crate::config::{RemovePolicy, StoreConfig};
use crate::criteria::Criteria;
use crate::error::{CoreError, CoreResult};
use crate::record::Record;
use recstore_codec::Value;
use std::iter::FusedIterator;
use std::slice;
use tracing::{debug, warn};

/// An ordered collection of records keyed by an identifier field.
///
/// Records are kept in insertion order. Every operation is a linear scan
/// over the live sequence; nothing is indexed.
///
/// The store is a plain value with no interior locking. Hosts that share
/// one across threads should use [`SharedRecordStore`](super::SharedRecordStore).
///
/// # Example
///
/// ```
/// use recstore_core::{Criteria, Record, RecordStore, StoreConfig};
///
/// let config = StoreConfig::new().identifier_field("CustomerId");
/// let mut store = RecordStore::new(config).unwrap();
///
/// store.insert(Record::new().with("CustomerId", 1).with("FirstName", "Ravi")).unwrap();
/// store.insert(Record::new().with("CustomerId", 2).with("FirstName", "Sameer")).unwrap();
///
/// let removed = store.remove(&Criteria::new("FirstName", "Ravi").unwrap()).unwrap();
/// assert_eq!(removed.len(), 1);
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RecordStore {
    config: StoreConfig,
    records: Vec<Record>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new(config: StoreConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            records: Vec::new(),
        })
    }

    /// Creates a store pre-seeded with `records`.
    ///
    /// Each record goes through [`insert`](Self::insert), so a seed that
    /// breaks the identifier rules fails the same way.
    pub fn with_records<I>(config: StoreConfig, records: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut store = Self::new(config)?;
        for record in records {
            store.insert(record)?;
        }
        debug!(count = store.len(), "seeded record store");
        Ok(store)
    }

    /// Returns the store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the identifier field name.
    pub fn identifier_field(&self) -> &str {
        &self.config.identifier_field
    }

    /// Appends a record.
    ///
    /// Fails with [`CoreError::MissingIdentifier`] if the record has no
    /// identifier field, and with [`CoreError::DuplicateIdentifier`] if
    /// identifiers are unique and the value is already taken.
    pub fn insert(&mut self, record: Record) -> CoreResult<()> {
        let id = self.identifier_of(&record)?;
        if self.config.unique_identifiers && self.position_of(id).is_some() {
            warn!(field = %self.config.identifier_field, id = %id, "rejected duplicate identifier");
            return Err(CoreError::duplicate_identifier(
                &self.config.identifier_field,
                id.clone(),
            ));
        }

        debug!(id = %id, position = self.records.len(), "inserted record");
        self.records.push(record);
        Ok(())
    }

    /// Replaces every record sharing `record`'s identifier, in place.
    ///
    /// Returns how many records were replaced. When duplicates are allowed
    /// this can be more than one; use [`update_at`](Self::update_at) to
    /// address a single position.
    pub fn update(&mut self, record: Record) -> CoreResult<usize> {
        let id = self.identifier_of(&record)?.clone();
        let field = &self.config.identifier_field;

        let mut replaced = 0;
        for slot in self
            .records
            .iter_mut()
            .filter(|existing| existing.get(field) == Some(&id))
        {
            *slot = record.clone();
            replaced += 1;
        }

        if replaced == 0 {
            return Err(CoreError::not_found(format!("{field}={id}")));
        }
        debug!(id = %id, replaced, "updated record");
        Ok(replaced)
    }

    /// Replaces the record at `position`.
    ///
    /// With unique identifiers, the new identifier may equal the one being
    /// replaced but must not belong to any other record.
    pub fn update_at(&mut self, position: usize, record: Record) -> CoreResult<()> {
        let id = self.identifier_of(&record)?;
        if position >= self.records.len() {
            return Err(CoreError::not_found(format!("position {position}")));
        }

        if self.config.unique_identifiers {
            let field = &self.config.identifier_field;
            let taken = self
                .records
                .iter()
                .enumerate()
                .any(|(i, existing)| i != position && existing.get(field) == Some(id));
            if taken {
                warn!(field = %field, id = %id, position, "rejected duplicate identifier");
                return Err(CoreError::duplicate_identifier(field, id.clone()));
            }
        }

        debug!(id = %id, position, "updated record at position");
        self.records[position] = record;
        Ok(())
    }

    /// Returns every record matching `criteria`, in sequence order.
    pub fn search(&self, criteria: &Criteria) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| criteria.matches(record))
            .collect()
    }

    /// Returns the first record with identifier `id`.
    pub fn get(&self, id: &Value) -> Option<&Record> {
        self.position_of(id).map(|i| &self.records[i])
    }

    /// Returns the position of the first record with identifier `id`.
    pub fn position_of(&self, id: &Value) -> Option<usize> {
        let field = self.identifier_field();
        self.records
            .iter()
            .position(|record| record.get(field) == Some(id))
    }

    /// Removes records matching `criteria` according to the configured
    /// [`RemovePolicy`].
    ///
    /// The default policy removes only the last match. Returns the removed
    /// records in sequence order, or [`CoreError::NotFound`] if nothing
    /// matched.
    pub fn remove(&mut self, criteria: &Criteria) -> CoreResult<Vec<Record>> {
        let removed: Vec<Record> = match self.config.remove_policy {
            RemovePolicy::LastMatch => {
                let position = self.records.iter().rposition(|r| criteria.matches(r));
                position.map(|i| self.records.remove(i)).into_iter().collect()
            }
            RemovePolicy::FirstMatch => {
                let position = self.records.iter().position(|r| criteria.matches(r));
                position.map(|i| self.records.remove(i)).into_iter().collect()
            }
            RemovePolicy::AllMatches => self.remove_all(criteria),
        };

        if removed.is_empty() {
            return Err(CoreError::not_found(criteria.to_string()));
        }
        debug!(
            criteria = %criteria,
            policy = %self.config.remove_policy,
            removed = removed.len(),
            "removed records"
        );
        Ok(removed)
    }

    /// Removes every record matching `criteria`, regardless of policy.
    ///
    /// Returns the removed records in sequence order; empty if none matched.
    pub fn remove_all(&mut self, criteria: &Criteria) -> Vec<Record> {
        let (removed, kept): (Vec<Record>, Vec<Record>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|record| criteria.matches(record));
        self.records = kept;
        removed
    }

    /// Iterates over all records in insertion order.
    ///
    /// The iterator is cheap to clone; call again to restart.
    pub fn list_all(&self) -> Records<'_> {
        Records {
            inner: self.records.iter(),
        }
    }

    /// Returns the records as a slice.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the store, returning its records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    fn identifier_of<'r>(&self, record: &'r Record) -> CoreResult<&'r Value> {
        record
            .get(&self.config.identifier_field)
            .ok_or_else(|| CoreError::missing_identifier(&self.config.identifier_field))
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self {
            config: StoreConfig::default(),
            records: Vec::new(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.list_all()
    }
}

/// Iterator over the records of a [`RecordStore`], in insertion order.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    inner: slice::Iter<'a, Record>,
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Records<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Records<'_> {}

impl FusedIterator for Records<'_> {}
