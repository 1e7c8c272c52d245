use warden_access::{Principal, WardenAccessError};
use warden_common::ConditionalSend;
use warden_storage::LedgerState;

/// What the chaincode may touch during one invocation: the caller's
/// credential (through [Principal]) and the invocation's ledger state.
pub trait Context: Principal + ConditionalSend {
    /// The ledger state visible to this invocation
    type Ledger: LedgerState;

    /// Borrow the ledger state
    fn ledger(&mut self) -> &mut Self::Ledger;
}

/// A plain [Context] assembled from a credential and a ledger.
///
/// A missing credential makes every identity-dependent operation fail with
/// [WardenAccessError::IdentityUnavailable].
#[derive(Debug)]
pub struct InvocationContext<Ledger>
where
    Ledger: LedgerState,
{
    creator: Option<Vec<u8>>,
    ledger: Ledger,
}

impl<Ledger> InvocationContext<Ledger>
where
    Ledger: LedgerState,
{
    /// Pair the caller's credential (if the platform supplied one) with the
    /// invocation's ledger state
    pub fn new(creator: Option<Vec<u8>>, ledger: Ledger) -> Self {
        Self { creator, ledger }
    }

    /// Give back the ledger state
    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }
}

impl<Ledger> Principal for InvocationContext<Ledger>
where
    Ledger: LedgerState,
{
    fn credential(&self) -> Result<Vec<u8>, WardenAccessError> {
        self.creator.clone().ok_or_else(|| {
            WardenAccessError::IdentityUnavailable("the invocation carries no creator".into())
        })
    }
}

impl<Ledger> Context for InvocationContext<Ledger>
where
    Ledger: LedgerState,
{
    type Ledger = Ledger;

    fn ledger(&mut self) -> &mut Self::Ledger {
        &mut self.ledger
    }
}
