//! Account and session stores consulted by the gateway.
//!
//! The traits in [`store`] are the seams to whatever user database and
//! session backend the host application already runs; the in-memory
//! implementations back the sidecar binary and the tests.

pub mod error;
pub mod store;
