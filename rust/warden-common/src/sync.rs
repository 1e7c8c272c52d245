//! Send/Sync bounds that relax on `wasm32`
//!
//! Ledger backends are shared across tasks on native targets, so the traits
//! in the storage and chaincode crates ask for `Send`/`Sync`. On
//! `wasm32-unknown-unknown` there is a single thread and the same traits
//! impose no bound at all.

#[allow(missing_docs)]
#[cfg(not(target_arch = "wasm32"))]
pub trait ConditionalSend: Send {}

#[cfg(not(target_arch = "wasm32"))]
impl<T> ConditionalSend for T where T: Send {}

#[allow(missing_docs)]
#[cfg(not(target_arch = "wasm32"))]
pub trait ConditionalSync: Send + Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T> ConditionalSync for T where T: Send + Sync {}

#[allow(missing_docs)]
#[cfg(target_arch = "wasm32")]
pub trait ConditionalSend {}

#[cfg(target_arch = "wasm32")]
impl<T> ConditionalSend for T {}

#[allow(missing_docs)]
#[cfg(target_arch = "wasm32")]
pub trait ConditionalSync {}

#[cfg(target_arch = "wasm32")]
impl<T> ConditionalSync for T {}
