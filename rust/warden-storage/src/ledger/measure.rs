use async_trait::async_trait;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::WardenStorageError;

use super::LedgerState;

/// A [MeasuredLedger] acts as a proxy over a [LedgerState] implementation
/// that counts reads and writes. Clones share their counters.
#[derive(Clone, Debug)]
pub struct MeasuredLedger<Backend>
where
    Backend: LedgerState,
{
    reads: Arc<AtomicUsize>,
    writes: Arc<AtomicUsize>,
    backend: Backend,
}

impl<Backend> MeasuredLedger<Backend>
where
    Backend: LedgerState,
{
    /// Wrap the provided [LedgerState] so that reads and writes to it may be
    /// measured.
    pub fn new(backend: Backend) -> Self {
        Self {
            reads: Arc::new(AtomicUsize::default()),
            writes: Arc::new(AtomicUsize::default()),
            backend,
        }
    }

    /// The aggregate number of reads from the wrapped [LedgerState]
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    /// The aggregate number of writes to the wrapped [LedgerState]
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<Backend> LedgerState for MeasuredLedger<Backend>
where
    Backend: LedgerState,
{
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, WardenStorageError> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        self.backend.get_state(key).await
    }

    async fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), WardenStorageError> {
        self.writes.fetch_add(1, Ordering::Relaxed);
        self.backend.put_state(key, value).await
    }

    async fn put_states(
        &mut self,
        entries: Vec<(String, Vec<u8>)>,
    ) -> Result<(), WardenStorageError> {
        self.writes.fetch_add(entries.len(), Ordering::Relaxed);
        self.backend.put_states(entries).await
    }
}
