use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::WardenStorageError;

use super::LedgerState;

/// A trivial implementation of [LedgerState] - backed by a [BTreeMap] -
/// where all values are kept in memory and never persisted.
///
/// Clones share the same entries.
#[derive(Clone, Default, Debug)]
pub struct MemoryLedger {
    entries: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryLedger {
    /// A copy of every entry currently held, ordered by key
    pub async fn snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        self.entries.read().await.clone()
    }

    /// The number of keys currently held
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether no key has been written yet
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl LedgerState for MemoryLedger {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, WardenStorageError> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), WardenStorageError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_owned(), value);
        Ok(())
    }

    async fn put_states(
        &mut self,
        batch: Vec<(String, Vec<u8>)>,
    ) -> Result<(), WardenStorageError> {
        self.entries.write().await.extend(batch);
        Ok(())
    }
}
