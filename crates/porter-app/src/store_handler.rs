use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use porter_core::error::CoreError;
use porter_store::store::{AccountStore, SessionStore};

pub type SharedAccountStore = Arc<dyn AccountStore + Send + Sync>;
pub type SharedSessionStore = Arc<dyn SessionStore + Send + Sync>;

#[derive(Clone)]
pub struct StoreHandler {
    pub accounts: SharedAccountStore,
    pub sessions: SharedSessionStore,
}

#[async_trait]
impl salvo::Handler for StoreHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(self.accounts.clone());
        depot.inject(self.sessions.clone());
    }
}

/// ## Summary
/// Retrieves the account store from the depot.
///
/// ## Errors
/// Returns an error if the account store is not found in the depot.
pub fn get_accounts_from_depot(depot: &salvo::Depot) -> AppResult<SharedAccountStore> {
    depot
        .obtain::<SharedAccountStore>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Account store not found in depot").into())
}

/// ## Summary
/// Retrieves the session store from the depot.
///
/// ## Errors
/// Returns an error if the session store is not found in the depot.
pub fn get_sessions_from_depot(depot: &salvo::Depot) -> AppResult<SharedSessionStore> {
    depot
        .obtain::<SharedSessionStore>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Session store not found in depot").into())
}
