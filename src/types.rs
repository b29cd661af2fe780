//! Public types for the animal-ledger API.
//!
//! This module re-exports types from the member crates with a clean public
//! interface.

// ============================================================================
// Record schema and errors
// ============================================================================

pub use animal_core::{Animal, QueryResult};
pub use animal_core::{LedgerError, LedgerResult};

// Key construction and the scan window
pub use animal_core::keys;

// ============================================================================
// World-state boundary
// ============================================================================

pub use animal_state::{MemoryState, StateIter, WorldState};

// ============================================================================
// Contract operations
// ============================================================================

pub use animal_contract::AnimalContract;
