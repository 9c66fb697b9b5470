//! Identity reconciliation and cache policy.
//!
//! ## Module Organization
//!
//! - `cache`: Response cacheability for requests carrying an asserted identity
//! - `credential`: Random initial credentials for provisioned accounts, hashed with Argon2
//! - `reconcile`: Decides login, provisioning, logout or anonymous fallback per request

pub mod cache;
pub mod credential;
pub mod reconcile;

pub use cache::{CachePolicy, cache_policy, is_cacheable};
pub use reconcile::{Notice, NoticeLevel, Outcome, Reconciliation, reconcile};
