//! animal-ledger: a minimal ledger smart contract for animal records.
//!
//! The contract stores and retrieves simple key-value records representing
//! animals. It owns no persistence, consensus, or networking; every
//! invocation runs against a [`WorldState`] transaction context supplied by
//! the external ledger platform.
//!
//! # Example
//!
//! ```
//! use animal_ledger::{AnimalContract, MemoryState};
//!
//! let contract = AnimalContract::new();
//! let state = MemoryState::new();
//!
//! contract.init_ledger(&state)?;
//! contract.create_animal(&state, "ANIMAL3", "Australia", "Kangaroo", "brown")?;
//!
//! let kangaroo = contract.query_animal(&state, "ANIMAL3")?;
//! assert_eq!(kangaroo.name, "Kangaroo");
//!
//! let all = contract.query_all_animals(&state)?;
//! assert_eq!(all.len(), 4);
//! # Ok::<(), animal_ledger::LedgerError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;

pub use types::{
    Animal, AnimalContract, LedgerError, LedgerResult, MemoryState, QueryResult, StateIter,
    WorldState,
};
