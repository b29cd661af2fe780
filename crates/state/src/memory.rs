//! In-memory world state used by tests.

use std::collections::BTreeMap;
use std::ops::Bound;

use parking_lot::RwLock;

use animal_core::LedgerResult;

use crate::{StateIter, WorldState};

/// Ordered in-memory [`WorldState`].
///
/// Not a state database: no durability, no transaction isolation. It exists
/// so contract logic can be exercised without a ledger platform. The lock is
/// interior mutability only; the trait takes `&self`.
#[derive(Debug, Default)]
pub struct MemoryState {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryState {
    /// Create an empty world state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl WorldState for MemoryState {
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: Vec<u8>) -> LedgerResult<()> {
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }

    fn range(&self, start_key: &str, end_key: &str) -> LedgerResult<StateIter<'_>> {
        if start_key >= end_key {
            return Ok(Box::new(std::iter::empty()));
        }

        // Snapshot under the read lock; the iterator must not hold it.
        let entries: Vec<(String, Vec<u8>)> = self
            .entries
            .read()
            .range::<str, _>((Bound::Included(start_key), Bound::Excluded(end_key)))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Box::new(entries.into_iter().map(Ok)))
    }
}
