use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::WardenStorageError;

use super::LedgerState;

/// A [LedgerTransaction] pairs a backing [LedgerState] with a buffer of
/// pending writes. All writes go to the buffer. All reads check the buffer
/// first and then fall back to the backing ledger, so an invocation sees its
/// own writes before anything is applied.
///
/// Nothing reaches the backing ledger until [LedgerTransaction::commit] is
/// called. Dropping the transaction (or calling
/// [LedgerTransaction::rollback]) discards the pending writes.
///
/// The backing ledger is usually borrowed: `LedgerTransaction::new(&mut
/// ledger)`.
#[derive(Debug)]
pub struct LedgerTransaction<Backend>
where
    Backend: LedgerState,
{
    backend: Backend,
    pending: BTreeMap<String, Vec<u8>>,
}

impl<Backend> LedgerTransaction<Backend>
where
    Backend: LedgerState,
{
    /// Open a transaction over `backend` with no pending writes
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            pending: BTreeMap::new(),
        }
    }

    /// The number of distinct keys written so far
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Apply every pending write to the backing ledger as a single
    /// [LedgerState::put_states] batch. Returns the number of keys written.
    pub async fn commit(mut self) -> Result<usize, WardenStorageError> {
        let pending = std::mem::take(&mut self.pending);
        let count = pending.len();

        self.backend.put_states(pending.into_iter().collect()).await?;

        tracing::debug!(keys = count, "Committed ledger transaction");
        Ok(count)
    }

    /// Discard every pending write
    pub fn rollback(self) {
        tracing::debug!(keys = self.pending.len(), "Rolled back ledger transaction");
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<Backend> LedgerState for LedgerTransaction<Backend>
where
    Backend: LedgerState,
{
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, WardenStorageError> {
        if let Some(value) = self.pending.get(key) {
            Ok(Some(value.clone()))
        } else {
            self.backend.get_state(key).await
        }
    }

    async fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), WardenStorageError> {
        self.pending.insert(key.to_owned(), value);
        Ok(())
    }

    async fn put_states(
        &mut self,
        entries: Vec<(String, Vec<u8>)>,
    ) -> Result<(), WardenStorageError> {
        self.pending.extend(entries);
        Ok(())
    }
}
