mod app_specific;

use salvo::Router;

// Re-export route constants from core
pub use porter_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, APP_ROUTE_COMPONENT, APP_ROUTE_PREFIX,
    LOGOUT_ROUTE_COMPONENT, LOGOUT_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the API router.
///
/// Identity and cache middleware are attached per route group in
/// `app_specific`; the healthcheck is reachable without either.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT).push(app_specific::routes())
}
