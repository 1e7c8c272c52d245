use thiserror::Error;
use warden_access::{Identity, WardenAccessError};
use warden_storage::WardenStorageError;

/// Everything that can fail an invocation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WardenChaincodeError {
    /// An operation received the wrong number of arguments
    #[error("Incorrect number of arguments for {operation}: expected {expected}, got {actual}")]
    InvalidArgumentCount {
        /// The operation name as invoked
        operation: String,
        /// How many arguments the operation takes
        expected: usize,
        /// How many arguments were supplied
        actual: usize,
    },

    /// `init` was invoked on a ledger that already has an owner
    #[error("Ledger is already initialized with owner {owner}")]
    AlreadyInitialized {
        /// The existing owner
        owner: Identity,
    },

    /// An operation name was not recognized and strict operations are on
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Caller resolution or an access decision failed
    #[error(transparent)]
    Access(#[from] WardenAccessError),

    /// The ledger could not be read or written
    #[error(transparent)]
    Storage(#[from] WardenStorageError),
}
