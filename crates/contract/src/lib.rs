//! The animal smart contract.
//!
//! Four operations over a [`WorldState`](animal_state::WorldState)
//! transaction context: seed the ledger, create a record, read a record,
//! and range-scan records. Each one is pass-through logic — validate,
//! one codec step, one or two state calls.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;

// Re-exports
pub use contract::AnimalContract;
