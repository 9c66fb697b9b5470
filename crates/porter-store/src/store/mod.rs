use std::future::Future;
use std::pin::Pin;

use porter_core::account::{Account, NewAccount};

use crate::error::StoreResult;

pub mod memory;
pub mod session;

pub use memory::MemoryAccountStore;
pub use session::{MemorySessionStore, Session};

pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = StoreResult<T>> + Send + 'a>>;

/// ## Summary
/// Lookup and creation of local accounts.
///
/// Implementations may perform blocking or remote I/O; failures are returned,
/// not retried.
pub trait AccountStore: Send + Sync {
    /// Finds an account by its exact name.
    fn find_by_name<'a>(&'a self, name: &'a str) -> StoreFuture<'a, Option<Account>>;

    /// ## Summary
    /// Inserts a new account.
    ///
    /// ## Errors
    /// Returns `StoreError::Conflict` if an account with the same name exists.
    fn create(&self, new_account: NewAccount) -> StoreFuture<'_, Account>;
}

/// ## Summary
/// Local session backend.
///
/// `start` finalizes a login for an account and `end` logs the session out.
pub trait SessionStore: Send + Sync {
    fn start<'a>(&'a self, account: &'a Account) -> StoreFuture<'a, Session>;

    fn get<'a>(&'a self, session_id: &'a str) -> StoreFuture<'a, Option<Session>>;

    /// Ends a session. Returns whether a session was actually removed.
    fn end<'a>(&'a self, session_id: &'a str) -> StoreFuture<'a, bool>;
}
