#![warn(missing_docs)]

//! Who may do what on a warden ledger.
//!
//! Every caller is known by an [Identity], a stable string derived from the
//! opaque credential the execution platform attaches to an invocation. Each
//! identity may have a [Role] recorded in the ledger through the
//! [RoleStore]. The decision functions in [policy] map a role onto the
//! actions it permits:
//!
//! | role | assign roles | write data | read data |
//! |------|--------------|------------|-----------|
//! | `admin` | yes | yes | yes |
//! | `client` | no | no | yes |
//! | any other label, or none | no | no | no |
//!
//! One identity is the owner. It is made `admin` when the ledger is
//! bootstrapped and its role can never be changed afterwards.

mod error;
pub use error::*;

mod identity;
pub use identity::*;

mod role;
pub use role::*;

pub mod policy;
pub use policy::Action;

mod caller;
pub use caller::*;

mod store;
pub use store::*;
