//! Ledger Store boundary for the Order-Form Ledger.
//!
//! The record lifecycle core never talks to a concrete ledger. It consumes
//! the host environment's key-value store through the narrow [`LedgerStore`]
//! trait: point reads, single-key writes, an append-only per-key version
//! history, and the identifier of the in-flight unit of work.
//!
//! # Design Rules
//!
//! 1. History is append-only: every write adds one immutable version under
//!    its key; committed versions are never mutated or deleted.
//! 2. The store never interprets values — it moves opaque bytes.
//! 3. Concurrent writes to the same key are serialized by the backend; the
//!    core relies on its read-then-write sequence committing as one unit.
//! 4. All access failures are propagated as [`StoreError`], never swallowed.
//!
//! # Backends
//!
//! - [`InMemoryLedgerStore`] — `HashMap`-based backend for tests, local
//!   runs, and embedding.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryLedgerStore;
pub use traits::{HistoryEntry, HistoryIter, LedgerStore};
