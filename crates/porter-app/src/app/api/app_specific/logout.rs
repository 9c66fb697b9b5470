use salvo::http::StatusCode;
use salvo::http::header::{HeaderValue, LOCATION};
use salvo::prelude::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde_json::json;

use crate::{
    config::get_config_from_depot,
    error::AppResult,
    middleware::session::{current_session, end_session},
    store_handler::get_sessions_from_depot,
};
use porter_core::constants::LOGOUT_ROUTE_COMPONENT;

/// ## Summary
/// Ends the local session and sends the visitor to the single sign-on logout page.
///
/// ## Side Effects
/// - Removes the session from the session store and clears the cookie
#[handler]
async fn logout(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match end_local_session(req, depot, res).await {
        Ok(logout_url) => match HeaderValue::from_str(&logout_url) {
            Ok(location) => {
                tracing::info!(%logout_url, "Redirecting to single sign-on logout");
                res.status_code(StatusCode::FOUND);
                res.headers_mut().insert(LOCATION, location);
            }
            Err(e) => {
                tracing::error!(error = %e, %logout_url, "Logout URL is not a valid header value");
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
                res.render(Json(json!({ "error": "Internal Server Error" })));
            }
        },
        Err(err) => {
            tracing::error!(error = ?err, "Failed to end session");
            res.status_code(err.status_code());
            res.render(Json(json!({ "error": err.public_message() })));
        }
    }
}

async fn end_local_session(
    req: &Request,
    depot: &Depot,
    res: &mut Response,
) -> AppResult<String> {
    let config = get_config_from_depot(depot)?;
    let sessions = get_sessions_from_depot(depot)?;

    let session = current_session(req, &config.session, sessions.as_ref()).await?;
    end_session(session.as_ref(), &config.session, sessions.as_ref(), res).await?;

    Ok(config.gateway.logout_url())
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(LOGOUT_ROUTE_COMPONENT).get(logout)
}
