use std::sync::MutexGuard;

use crate::error::StoreResult;

/// One committed version of a key, as yielded by [`LedgerStore::history_of`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The value bytes committed by this write.
    pub value: Vec<u8>,
    /// Identifier of the unit of work that committed this version.
    pub transaction_id: String,
    /// Unix seconds at which the backend committed this version.
    pub timestamp: i64,
}

/// Lazy, oldest-first scan over a key's committed versions.
///
/// Backends that can fail mid-scan yield `Err` for the failing step; callers
/// must abort and discard partial results rather than truncate silently.
pub type HistoryIter = Box<dyn Iterator<Item = StoreResult<HistoryEntry>> + Send>;

/// Versioned key-value store supplied by the host environment.
///
/// All implementations must satisfy these invariants:
/// - `put` appends exactly one new immutable version under the key; no
///   committed version is ever mutated or deleted.
/// - `history_of` yields versions oldest-first.
/// - Units of work are serialized: a read-then-write sequence performed
///   while holding the [`LedgerStore::unit_of_work`] guard commits as a
///   single unit, so two concurrent creates on one key cannot both pass the
///   duplicate check.
/// - Values are opaque bytes; the store never interprets them.
pub trait LedgerStore: Send + Sync {
    /// Enter a unit of work.
    ///
    /// The returned guard serializes the holder against every other unit of
    /// work on this store; callers hold it across the whole
    /// read-then-write sequence of one operation. Backends whose host
    /// environment already serializes transactions may hand out a guard
    /// over an uncontended lock.
    fn unit_of_work(&self) -> MutexGuard<'_, ()>;

    /// Read the current value under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Commit `value` as the new current version under `key`.
    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Open an oldest-first scan over every committed version of `key`.
    ///
    /// A key with no versions yields an empty (but successful) scan.
    fn history_of(&self, key: &str) -> StoreResult<HistoryIter>;

    /// Identifier of the in-flight unit of work.
    ///
    /// The next `put` commits under this identifier; the backend mints a
    /// fresh one once the write lands.
    fn current_transaction_id(&self) -> String;
}
