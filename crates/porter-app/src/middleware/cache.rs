use salvo::Depot;
use salvo::http::header::{CACHE_CONTROL, HeaderValue};
use tracing::error;

use crate::{
    config::get_config_from_depot,
    middleware::identity::{asserted_identity_from_request, carries_user_header},
};
use porter_service::auth::{CachePolicy, cache_policy};

pub const NO_STORE: &str = "private, no-store";

/// ## Summary
/// Keeps responses rendered for an asserted identity out of shared caches.
///
/// The decision is taken before the rest of the chain runs, so it holds even
/// when the request is later refused. A user header that cannot be decoded
/// still counts as an asserted identity.
#[salvo::async_trait]
impl salvo::Handler for CacheGuardMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(path = %req.uri().path()))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        let policy = match get_config_from_depot(depot) {
            Ok(config) if carries_user_header(req, &config.proxy) => CachePolicy::Deny,
            Ok(config) => cache_policy(&asserted_identity_from_request(req, &config.proxy)),
            Err(e) => {
                error!(error = ?e, "Failed to get config from depot, refusing to cache");
                CachePolicy::Deny
            }
        };

        ctrl.call_next(req, depot, res).await;

        if policy == CachePolicy::Deny {
            tracing::trace!("Marking response as not cacheable");
            res.headers_mut()
                .insert(CACHE_CONTROL, HeaderValue::from_static(NO_STORE));
        }
    }
}

pub struct CacheGuardMiddleware;
