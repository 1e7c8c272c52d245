#![warn(missing_docs)]

//! Key-value state for the warden chaincode.
//!
//! The chaincode never owns its storage. It is handed something that
//! implements [LedgerState]: a flat mapping from string keys to byte values
//! with `get_state` / `put_state`. This crate defines that seam along with a
//! few implementations of it:
//!
//! - [MemoryLedger] keeps everything in a map and never persists
//! - [FileSystemLedger] stores one file per key under a root directory
//! - [LedgerTransaction] buffers writes over another ledger and applies them
//!   on [LedgerTransaction::commit]
//! - [MeasuredLedger] counts reads and writes against a wrapped ledger
//!
//! Keys handed to a ledger are produced by [StateKey], which keeps role
//! records, the owner record and application data in separate key spaces
//! even though they share one substrate:
//!
//! ```rust
//! use warden_storage::StateKey;
//!
//! assert_eq!(StateKey::Owner.to_string(), "meta:owner");
//! assert_eq!(StateKey::Data("owner").to_string(), "data:owner");
//! ```

mod error;
pub use error::*;

mod key;
pub use key::*;

mod ledger;
pub use ledger::*;

#[cfg(any(test, feature = "helpers"))]
mod helpers;
#[cfg(any(test, feature = "helpers"))]
pub use helpers::*;
