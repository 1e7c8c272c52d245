#![warn(missing_docs)]

//! The invocation surface of a warden ledger.
//!
//! A [Chaincode] answers two entry points. [Chaincode::init] runs once, when
//! the ledger is instantiated, and makes the invoking identity its owner.
//! [Chaincode::invoke] runs a named operation with string arguments:
//!
//! | operation | arguments | who may call it |
//! |-----------|-----------|-----------------|
//! | `role-assign` (or `chmod`) | target identity, role | admins; never targeting the owner |
//! | `save` | key, value | admins |
//! | `query` | key | admins and clients |
//!
//! Both entry points receive a [Context]: the credential of the caller plus
//! the ledger state of the current invocation. Every outcome is a
//! [Response]. The chaincode keeps nothing between invocations.
//!
//! The chaincode expects whoever drives it to apply an invocation's writes
//! only if it succeeds. [Engine] is a driver that does exactly that over any
//! [warden_storage::LedgerState]:
//!
//! ```rust
//! # async fn example() {
//! use warden_chaincode::{Chaincode, Engine, Invocation};
//! use warden_storage::MemoryLedger;
//!
//! let engine = Engine::new(Chaincode::default(), MemoryLedger::default());
//! let alice = Some(b"alice".to_vec());
//!
//! assert!(engine.init(alice.clone()).await.is_success());
//! assert!(
//!     engine
//!         .invoke(alice, &Invocation::new("save", ["k", "v"]))
//!         .await
//!         .is_success()
//! );
//! # }
//! ```

mod error;
pub use error::*;

mod settings;
pub use settings::*;

mod context;
pub use context::*;

mod invocation;
pub use invocation::*;

mod operation;
pub use operation::*;

mod response;
pub use response::*;

mod data;
pub use data::*;

mod chaincode;
pub use chaincode::*;

mod engine;
pub use engine::*;
