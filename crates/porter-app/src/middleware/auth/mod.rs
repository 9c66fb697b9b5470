use salvo::Depot;
use salvo::http::StatusCode;
use salvo::prelude::Json;
use serde_json::json;
use tracing::error;

use crate::{
    config::get_config_from_depot,
    depot::{DepotUser, depot_keys},
    error::AppError,
    middleware::{
        identity::asserted_identity_from_request,
        session::{current_session, end_session, local_session, session_cookie},
    },
    store_handler::{get_accounts_from_depot, get_sessions_from_depot},
};
use porter_service::auth::{Outcome, reconcile};

/// ## Summary
/// Reconciles the asserted identity with the local session on every request.
///
/// ## Side Effects
/// - Inserts the asserted identity, notices and resulting `DepotUser` into the depot
/// - Starts or ends sessions and sets or clears the session cookie
/// - May provision an account for an unknown asserted username
///
/// ## Errors
/// Responds 403 when the visitor is logged out and refused, 503 when the
/// account store is unreachable and 500 for any other failure.
#[salvo::async_trait]
impl salvo::Handler for IdentityMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        tracing::trace!("Reconciling asserted identity");

        match resolve_identity(req, depot, res).await {
            Ok(Access::Proceed) => {}
            Ok(Access::Denied) => ctrl.skip_rest(),
            Err(err) => {
                error!(error = ?err, "Identity reconciliation failed");
                res.status_code(err.status_code());
                res.render(Json(json!({ "error": err.public_message() })));
                ctrl.skip_rest();
            }
        }
    }
}

/// ## Summary
/// Middleware handler that establishes who the request is acting as.
/// Use this as a hoop on routes that need the visitor's account.
pub struct IdentityMiddleware;

enum Access {
    Proceed,
    Denied,
}

async fn resolve_identity(
    req: &salvo::Request,
    depot: &mut Depot,
    res: &mut salvo::Response,
) -> Result<Access, AppError> {
    let config = get_config_from_depot(depot)?;
    let accounts = get_accounts_from_depot(depot)?;
    let sessions = get_sessions_from_depot(depot)?;

    let asserted = asserted_identity_from_request(req, &config.proxy);
    tracing::debug!(
        asserted = asserted.username().unwrap_or_default(),
        secure_channel = asserted.secure_channel(),
        "Asserted identity"
    );
    depot.insert(depot_keys::ASSERTED_IDENTITY, asserted.clone());

    let session = current_session(req, &config.session, sessions.as_ref()).await?;
    let snapshot = local_session(session.as_ref());

    let reconciliation =
        reconcile(&asserted, &snapshot, &config.gateway, accounts.as_ref()).await?;
    let notices = reconciliation.notices;
    let mut access = Access::Proceed;

    match reconciliation.outcome {
        Outcome::LoginAs(account) => {
            if let Some(previous) = &session {
                sessions.end(&previous.id).await?;
            }
            let started = sessions.start(&account).await?;
            res.add_cookie(session_cookie(&config.session, &started));
            tracing::info!(account_id = %account.id, "Logged in");
            depot.insert(depot_keys::AUTHENTICATED_ACCOUNT, DepotUser::Account(account));
        }
        Outcome::NoChange(account) => {
            depot.insert(depot_keys::AUTHENTICATED_ACCOUNT, DepotUser::Account(account));
        }
        Outcome::RemainAnonymous => {
            if session.is_some() {
                end_session(session.as_ref(), &config.session, sessions.as_ref(), res).await?;
            }
            depot.insert(depot_keys::AUTHENTICATED_ACCOUNT, DepotUser::Anonymous);
        }
        Outcome::LogoutAndDeny => {
            end_session(session.as_ref(), &config.session, sessions.as_ref(), res).await?;
            tracing::info!("Visitor logged out and refused");
            res.status_code(StatusCode::FORBIDDEN);
            res.render(Json(json!({
                "error": "Access denied",
                "notices": notices,
                "logout_url": config.gateway.logout_url(),
            })));
            access = Access::Denied;
        }
    }

    depot.insert(depot_keys::NOTICES, notices);

    Ok(access)
}
