//! Depot keys and helpers for the identity resolved by `IdentityMiddleware`.

use porter_core::{account::Account, identity::AssertedIdentity};
use porter_service::auth::Notice;

pub mod depot_keys {
    pub const AUTHENTICATED_ACCOUNT: &str = "__authenticated_account";
    pub const ASSERTED_IDENTITY: &str = "__asserted_identity";
    pub const NOTICES: &str = "__notices";
}

/// Who the current request is acting as after reconciliation.
#[derive(Debug, Clone)]
pub enum DepotUser {
    Account(Account),
    Anonymous,
}

/// Get the account the request is logged in as, if any.
#[must_use]
pub fn get_account_from_depot(depot: &salvo::Depot) -> Option<&Account> {
    match depot.get::<DepotUser>(depot_keys::AUTHENTICATED_ACCOUNT) {
        Ok(DepotUser::Account(account)) => Some(account),
        Ok(DepotUser::Anonymous) | Err(_) => None,
    }
}

#[must_use]
pub fn get_asserted_identity_from_depot(depot: &salvo::Depot) -> Option<&AssertedIdentity> {
    depot
        .get::<AssertedIdentity>(depot_keys::ASSERTED_IDENTITY)
        .ok()
}

/// Notices produced while reconciling; empty when there were none.
#[must_use]
pub fn get_notices_from_depot(depot: &salvo::Depot) -> &[Notice] {
    depot
        .get::<Vec<Notice>>(depot_keys::NOTICES)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
