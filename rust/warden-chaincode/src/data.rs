use warden_access::{Action, Caller};
use warden_storage::{LedgerState, StateKey};

use crate::WardenChaincodeError;

/// Application records, kept apart from role records by their key space.
///
/// Every method takes the resolved [Caller] and checks its role before
/// touching the ledger.
#[derive(Debug)]
pub struct DataStore<Ledger>
where
    Ledger: LedgerState,
{
    ledger: Ledger,
}

impl<Ledger> DataStore<Ledger>
where
    Ledger: LedgerState,
{
    /// Wrap `ledger`
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }

    /// Store `value` under `key`, replacing whatever was there. Requires a
    /// role that may write.
    pub async fn save(
        &mut self,
        caller: &Caller,
        key: &str,
        value: Vec<u8>,
    ) -> Result<(), WardenChaincodeError> {
        caller.require(Action::Write)?;
        tracing::debug!(caller = %caller.identity, key, bytes = value.len(), "Saving record");
        self.ledger
            .put_state(&StateKey::Data(key).encode(), value)
            .await?;
        Ok(())
    }

    /// The value stored under `key`. A key that was never written reads as
    /// empty. Requires a role that may read.
    pub async fn query(&self, caller: &Caller, key: &str) -> Result<Vec<u8>, WardenChaincodeError> {
        caller.require(Action::Read)?;
        tracing::debug!(caller = %caller.identity, key, "Querying record");
        Ok(self
            .ledger
            .get_state(&StateKey::Data(key).encode())
            .await?
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use warden_access::{Caller, Role, WardenAccessError, resolve};
    use warden_storage::{MeasuredLedger, MemoryLedger};

    use crate::{DataStore, WardenChaincodeError};

    #[tokio::test]
    async fn it_keeps_the_last_write() -> Result<()> {
        let admin = Caller::new(resolve(b"alice"), Some(Role::Admin));
        let mut store = DataStore::new(MemoryLedger::default());

        store.save(&admin, "k", b"v1".to_vec()).await?;
        store.save(&admin, "k", b"v2".to_vec()).await?;

        assert_eq!(store.query(&admin, "k").await?, b"v2".to_vec());
        Ok(())
    }

    #[tokio::test]
    async fn it_reads_missing_keys_as_empty() -> Result<()> {
        let client = Caller::new(resolve(b"bob"), Some(Role::Client));
        let store = DataStore::new(MemoryLedger::default());

        assert_eq!(store.query(&client, "missing").await?, Vec::<u8>::new());
        Ok(())
    }

    #[tokio::test]
    async fn it_checks_the_role_before_touching_the_ledger() -> Result<()> {
        let ledger = MeasuredLedger::new(MemoryLedger::default());
        let mut store = DataStore::new(ledger.clone());

        for role in [None, Some(Role::Client), Some(Role::Custom("auditor".into()))] {
            let caller = Caller::new(resolve(b"bob"), role);
            assert!(matches!(
                store.save(&caller, "k", b"v".to_vec()).await,
                Err(WardenChaincodeError::Access(
                    WardenAccessError::PermissionDenied { .. }
                ))
            ));
        }

        let stranger = Caller::new(resolve(b"mallory"), None);
        assert!(matches!(
            store.query(&stranger, "k").await,
            Err(WardenChaincodeError::Access(
                WardenAccessError::PermissionDenied { .. }
            ))
        ));

        assert_eq!(ledger.reads(), 0);
        assert_eq!(ledger.writes(), 0);
        Ok(())
    }
}
