use salvo::prelude::Json;
use salvo::{Depot, Router, handler};
use serde_json::json;

use crate::depot::{get_account_from_depot, get_asserted_identity_from_depot, get_notices_from_depot};

/// ## Summary
/// Returns the account the request resolved to, the identity the upstream
/// webserver asserted, and any notices from reconciliation.
#[handler]
async fn whoami(depot: &Depot) -> Json<serde_json::Value> {
    let account = get_account_from_depot(depot);
    let status = if account.is_some() {
        "authenticated"
    } else {
        "anonymous"
    };

    Json(json!({
        "status": status,
        "account": account,
        "asserted": get_asserted_identity_from_depot(depot),
        "notices": get_notices_from_depot(depot),
    }))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("whoami").get(whoami)
}
