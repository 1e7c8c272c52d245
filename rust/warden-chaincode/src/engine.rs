use std::sync::Arc;

use tokio::sync::Mutex;
use warden_storage::{LedgerState, LedgerTransaction};

use crate::{Chaincode, Invocation, InvocationContext, Response};

/// Drives a [Chaincode] over a shared [LedgerState] the way an execution
/// platform would.
///
/// Invocations are serialized: each one holds the backend for its whole
/// read-check-write sequence. Each runs inside a [LedgerTransaction] whose
/// writes reach the backend only if the response is a success, handed over
/// as one [LedgerState::put_states] batch. If that batch fails the response
/// becomes an error. Whether a failed batch can leave part of it applied is
/// up to the backend. [warden_storage::MemoryLedger] cannot fail part way.
/// [warden_storage::FileSystemLedger] applies nothing when staging fails, but
/// a rename failing after every value is staged leaves the earlier renames
/// in place.
#[derive(Debug)]
pub struct Engine<Backend>
where
    Backend: LedgerState,
{
    chaincode: Chaincode,
    backend: Arc<Mutex<Backend>>,
}

impl<Backend> Clone for Engine<Backend>
where
    Backend: LedgerState,
{
    fn clone(&self) -> Self {
        Self {
            chaincode: self.chaincode.clone(),
            backend: self.backend.clone(),
        }
    }
}

impl<Backend> Engine<Backend>
where
    Backend: LedgerState,
{
    /// Serve `chaincode` over `backend`
    pub fn new(chaincode: Chaincode, backend: Backend) -> Self {
        Self {
            chaincode,
            backend: Arc::new(Mutex::new(backend)),
        }
    }

    /// Run [Chaincode::init] for the party presenting `creator`
    pub async fn init(&self, creator: Option<Vec<u8>>) -> Response {
        self.execute(creator, None).await
    }

    /// Run [Chaincode::invoke] for the party presenting `creator`
    pub async fn invoke(&self, creator: Option<Vec<u8>>, invocation: &Invocation) -> Response {
        self.execute(creator, Some(invocation)).await
    }

    async fn execute(&self, creator: Option<Vec<u8>>, invocation: Option<&Invocation>) -> Response {
        let mut backend = self.backend.lock().await;
        let mut context = InvocationContext::new(creator, LedgerTransaction::new(&mut *backend));

        let response = match invocation {
            Some(invocation) => self.chaincode.invoke(&mut context, invocation).await,
            None => self.chaincode.init(&mut context).await,
        };

        let transaction = context.into_ledger();
        if !response.is_success() {
            transaction.rollback();
            return response;
        }

        match transaction.commit().await {
            Ok(_) => response,
            Err(error) => {
                tracing::error!(%error, "Failed to commit invocation");
                Response::error(error)
            }
        }
    }
}
