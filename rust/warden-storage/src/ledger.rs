use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use warden_common::{ConditionalSend, ConditionalSync};

use crate::WardenStorageError;

mod memory;
pub use memory::*;

#[cfg(not(target_arch = "wasm32"))]
mod fs;
#[cfg(not(target_arch = "wasm32"))]
pub use fs::*;

mod transaction;
pub use transaction::*;

mod measure;
pub use measure::*;

/// A [LedgerState] is the facade over whatever substrate actually holds the
/// chaincode's state. Values are raw bytes stored against string keys.
///
/// Implementations are expected to give read-your-writes semantics within a
/// single invocation. Isolation between invocations is up to whoever hands
/// the ledger to the chaincode.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait LedgerState: ConditionalSync {
    /// Retrieve the value (if any) stored against the given key
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, WardenStorageError>;
    /// Store the given value against the given key, replacing any prior value
    async fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), WardenStorageError>;

    /// Store every entry as one unit. Backends that can fail part way should
    /// override this so that a failure leaves none of the entries visible;
    /// the default applies them one at a time.
    async fn put_states(
        &mut self,
        entries: Vec<(String, Vec<u8>)>,
    ) -> Result<(), WardenStorageError> {
        for (key, value) in entries {
            self.put_state(&key, value).await?;
        }
        Ok(())
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<T> LedgerState for &mut T
where
    T: LedgerState,
{
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, WardenStorageError> {
        (**self).get_state(key).await
    }

    async fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), WardenStorageError> {
        (**self).put_state(key, value).await
    }

    async fn put_states(
        &mut self,
        entries: Vec<(String, Vec<u8>)>,
    ) -> Result<(), WardenStorageError> {
        (**self).put_states(entries).await
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<T> LedgerState for Arc<Mutex<T>>
where
    T: LedgerState + ConditionalSend,
{
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, WardenStorageError> {
        let inner = self.lock().await;
        inner.get_state(key).await
    }

    async fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), WardenStorageError> {
        let mut inner = self.lock().await;
        inner.put_state(key, value).await
    }

    async fn put_states(
        &mut self,
        entries: Vec<(String, Vec<u8>)>,
    ) -> Result<(), WardenStorageError> {
        let mut inner = self.lock().await;
        inner.put_states(entries).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::Result;
    use tokio::sync::Mutex;

    use crate::{LedgerState, LedgerTransaction, MeasuredLedger, MemoryLedger, make_target_ledger};

    #[tokio::test]
    async fn it_writes_and_reads_a_value() -> Result<()> {
        let (mut ledger, _tempdir) = make_target_ledger().await?;

        ledger.put_state("data:k", b"v".to_vec()).await?;

        assert_eq!(ledger.get_state("data:k").await?, Some(b"v".to_vec()));
        assert_eq!(ledger.get_state("data:missing").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn it_overwrites_prior_values() -> Result<()> {
        let (mut ledger, _tempdir) = make_target_ledger().await?;

        ledger.put_state("data:k", b"v1".to_vec()).await?;
        ledger.put_state("data:k", b"v2".to_vec()).await?;

        assert_eq!(ledger.get_state("data:k").await?, Some(b"v2".to_vec()));

        Ok(())
    }

    #[tokio::test]
    async fn it_can_share_a_ledger_behind_a_mutex() -> Result<()> {
        let mut shared = Arc::new(Mutex::new(MemoryLedger::default()));
        let other = shared.clone();

        shared.put_state("data:k", b"v".to_vec()).await?;

        assert_eq!(other.get_state("data:k").await?, Some(b"v".to_vec()));

        Ok(())
    }

    #[tokio::test]
    async fn it_measures_a_transaction_over_a_borrowed_ledger() -> Result<()> {
        let mut measured = MeasuredLedger::new(MemoryLedger::default());

        let mut transaction = LedgerTransaction::new(&mut measured);
        transaction.put_state("data:k", b"v".to_vec()).await?;
        assert_eq!(transaction.get_state("data:k").await?, Some(b"v".to_vec()));
        transaction.commit().await?;

        assert_eq!(measured.reads(), 0);
        assert_eq!(measured.writes(), 1);

        Ok(())
    }
}
