//! Shared vocabulary for the animal-ledger workspace.
//!
//! This crate defines everything the other crates agree on:
//! - `LedgerError` / `LedgerResult`: the workspace-wide error type
//! - `Animal` / `QueryResult`: the record schema and its byte codec
//! - `keys`: key construction, validation, and the scan window

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod keys;
pub mod record;

// Re-exports
pub use error::{LedgerError, LedgerResult};
pub use record::{Animal, QueryResult};
