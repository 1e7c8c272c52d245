#![warn(missing_docs)]

//! Light weight helpers shared by every warden crate. This crate has no
//! dependencies of its own.

mod sync;
pub use sync::*;
