//! World-state boundary for the animal contract.
//!
//! The ledger platform hands each contract invocation a transaction context
//! scoped to that transaction. This crate models the context as the
//! [`WorldState`] trait: a narrow key-value view with `get`, `put`, and an
//! ordered `range` scan. Everything behind it — persistence, consensus,
//! ordering, endorsement — belongs to the platform, not to this code.
//!
//! [`MemoryState`] is the in-process reference implementation used by tests.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;

// Re-exports
pub use memory::MemoryState;

use animal_core::LedgerResult;

/// Iterator over range-scan entries, ascending by key.
///
/// Each item is a `(key, value_bytes)` pair; platform failures while
/// iterating surface as `Err` items.
pub type StateIter<'a> = Box<dyn Iterator<Item = LedgerResult<(String, Vec<u8>)>> + 'a>;

/// Key-value view of the ledger world state for one transaction.
///
/// Implementations are supplied by the ledger platform. Operations take
/// `&self` because a context may be shared within one invocation; nothing
/// here assumes cross-transaction state.
pub trait WorldState {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>>;

    /// Store `value` under `key`, overwriting any existing value.
    fn put(&self, key: &str, value: Vec<u8>) -> LedgerResult<()>;

    /// Iterate entries with `start_key <= key < end_key` in ascending
    /// key order.
    fn range(&self, start_key: &str, end_key: &str) -> LedgerResult<StateIter<'_>>;
}
