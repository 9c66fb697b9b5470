use salvo::Router;

use crate::middleware::{auth::IdentityMiddleware, cache::CacheGuardMiddleware};
use porter_core::constants::APP_ROUTE_COMPONENT;

mod healthcheck;
mod logout;
mod whoami;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(APP_ROUTE_COMPONENT)
        .push(healthcheck::routes())
        .push(
            Router::new()
                .hoop(CacheGuardMiddleware)
                .push(logout::routes())
                .push(
                    Router::new()
                        .hoop(IdentityMiddleware)
                        .push(whoami::routes()),
                ),
        )
}
