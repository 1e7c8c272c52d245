use anyhow::Result;
use async_trait::async_trait;

use crate::{LedgerState, MemoryLedger, WardenStorageError};

#[cfg(not(target_arch = "wasm32"))]
use crate::FileSystemLedger;

/// A [LedgerState] whose every read and write fails, for exercising the
/// storage failure paths of the chaincode.
#[derive(Clone, Debug, Default)]
pub struct UnavailableLedger;

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl LedgerState for UnavailableLedger {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, WardenStorageError> {
        Err(WardenStorageError::Unavailable(format!("cannot read {key}")))
    }

    async fn put_state(&mut self, key: &str, _value: Vec<u8>) -> Result<(), WardenStorageError> {
        Err(WardenStorageError::Unavailable(format!("cannot write {key}")))
    }
}

/// A [LedgerState] that reads from a shared [MemoryLedger] and rejects every
/// write, for exercising failures that happen after the reads succeeded.
#[derive(Clone, Debug, Default)]
pub struct ReadOnlyLedger(pub MemoryLedger);

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl LedgerState for ReadOnlyLedger {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, WardenStorageError> {
        self.0.get_state(key).await
    }

    async fn put_state(&mut self, key: &str, _value: Vec<u8>) -> Result<(), WardenStorageError> {
        Err(WardenStorageError::Unavailable(format!("cannot write {key}")))
    }
}

/// Creates a persisted [LedgerState] in a fresh temporary directory, for use
/// in tests. The directory is removed when the returned guard is dropped.
#[cfg(not(target_arch = "wasm32"))]
pub async fn make_target_ledger() -> Result<(FileSystemLedger, tempfile::TempDir)> {
    let root = tempfile::tempdir()?;
    let ledger = FileSystemLedger::new(root.path()).await?;
    Ok((ledger, root))
}
