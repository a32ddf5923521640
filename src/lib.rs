//! Arbitrary-precision signed integers in sign-magnitude form.
//!
//! See [`BigInt`] for the public surface. The small-number cache in
//! [`cache`] must be [`cache::init`]ialized before parsing, formatting, or
//! any operation that goes through the parser/formatter's fast paths; see
//! that module for the lifecycle contract.


mod bigint;
mod cache;
mod error;

pub use bigint::BigInt;
pub use cache::{init, teardown};
pub use error::{Error, MalformedReason, Result};
