/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const APP_ROUTE_COMPONENT: &str = "app";
pub const APP_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", APP_ROUTE_COMPONENT);

pub const LOGOUT_ROUTE_COMPONENT: &str = "logout";
pub const LOGOUT_ROUTE_PREFIX: &str =
    const_str::concat!(APP_ROUTE_PREFIX, "/", LOGOUT_ROUTE_COMPONENT);

/// Upstream header defaults. The webserver exports `REDIRECT_REMOTE_USER`
/// after internal redirects, so it is consulted before `REMOTE_USER`.
pub const DEFAULT_REDIRECT_USER_HEADER: &str = "Redirect-Remote-User";
pub const DEFAULT_USER_HEADER: &str = "Remote-User";
pub const DEFAULT_REALM_HEADER: &str = "Remote-Realm";
pub const DEFAULT_FRIEND_REALM: &str = "friend";
pub const DEFAULT_SECURE_HEADER: &str = "Protossl";
pub const DEFAULT_SECURE_VALUE: &str = "s";
pub const FORWARDED_PROTO_HEADER: &str = "X-Forwarded-Proto";

pub const DEFAULT_SESSION_COOKIE: &str = "porter_session";

/// Eight hours, a working day behind the single sign-on portal.
pub const DEFAULT_SESSION_TTL_SECONDS: u64 = 8 * 60 * 60;
