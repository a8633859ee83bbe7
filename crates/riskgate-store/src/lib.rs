//! File-backed blob boundary for the survivability gate.
//!
//! Reads the externally written canary state, watch-list, and per-symbol
//! signal snapshots, and writes the per-cycle risk snapshot. Reads are
//! lenient (missing or corrupt input is treated as absent); the snapshot
//! write is atomic so a concurrent reader never observes a partial record.

pub mod error;
pub mod state;

pub use error::{StoreError, StoreResult};
pub use state::{read_json_lenient, StateStore};
