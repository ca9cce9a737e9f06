use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, RwLock};

use crate::error::StoreResult;
use crate::traits::{HistoryEntry, HistoryIter, LedgerStore};

/// In-memory, HashMap-based ledger store.
///
/// Intended for tests, local runs, and embedding. Each key maps to its full
/// append-only version history behind a `RwLock`; the current value is the
/// last entry. Transaction ids are UUID v7 strings minted per unit of work,
/// and units of work are serialized by the `uow` mutex so a read-then-write
/// sequence held under one guard commits as a single unit.
pub struct InMemoryLedgerStore {
    uow: Mutex<()>,
    inner: RwLock<StoreState>,
}

struct StoreState {
    versions: HashMap<String, Vec<HistoryEntry>>,
    current_tx: String,
}

fn mint_transaction_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

impl InMemoryLedgerStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            uow: Mutex::new(()),
            inner: RwLock::new(StoreState {
                versions: HashMap::new(),
                current_tx: mint_transaction_id(),
            }),
        }
    }

    /// Number of keys with at least one committed version.
    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").versions.len()
    }

    /// Returns `true` if no key has ever been written.
    pub fn is_empty(&self) -> bool {
        self.inner.read().expect("lock poisoned").versions.is_empty()
    }

    /// Number of committed versions under `key`.
    pub fn version_count(&self, key: &str) -> usize {
        self.inner
            .read()
            .expect("lock poisoned")
            .versions
            .get(key)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

impl Default for InMemoryLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn unit_of_work(&self) -> MutexGuard<'_, ()> {
        self.uow.lock().expect("lock poisoned")
    }

    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state
            .versions
            .get(key)
            .and_then(|versions| versions.last())
            .map(|entry| entry.value.clone()))
    }

    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        let mut state = self.inner.write().expect("lock poisoned");
        let entry = HistoryEntry {
            value: value.to_vec(),
            transaction_id: state.current_tx.clone(),
            timestamp: chrono::Utc::now().timestamp(),
        };
        state.versions.entry(key.to_string()).or_default().push(entry);
        // The write committed the in-flight unit of work.
        state.current_tx = mint_transaction_id();
        tracing::debug!(key, "committed version");
        Ok(())
    }

    fn history_of(&self, key: &str) -> StoreResult<HistoryIter> {
        let state = self.inner.read().expect("lock poisoned");
        let entries = state.versions.get(key).cloned().unwrap_or_default();
        Ok(Box::new(entries.into_iter().map(Ok)))
    }

    fn current_transaction_id(&self) -> String {
        self.inner.read().expect("lock poisoned").current_tx.clone()
    }
}

impl std::fmt::Debug for InMemoryLedgerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryLedgerStore")
            .field("key_count", &self.len())
            .finish()
    }
}
