use thiserror::Error;
use warden_storage::WardenStorageError;

use crate::{Action, Identity};

/// Errors raised while resolving callers or making access decisions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WardenAccessError {
    /// The caller's credential could not be obtained from the invocation
    #[error("Identity unavailable: {0}")]
    IdentityUnavailable(String),

    /// The caller's role does not permit the requested action, or the
    /// caller has no role at all
    #[error("Permission denied: {identity} may not {action}")]
    PermissionDenied {
        /// The caller that was denied
        identity: Identity,
        /// What the caller attempted
        action: Action,
    },

    /// The target of a role assignment is the owner
    #[error("Cannot modify the role of the owner")]
    CannotModifyOwner,

    /// A stored identity is not a valid identity string
    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),

    /// The ledger could not be read or written
    #[error(transparent)]
    Storage(#[from] WardenStorageError),
}
