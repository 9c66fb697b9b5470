//! Reads the upstream-asserted identity from request headers.

use porter_core::{
    config::ProxyConfig, constants::FORWARDED_PROTO_HEADER, identity::AssertedIdentity,
};
use salvo::http::HeaderMap;

/// Header value as UTF-8. Upstream webservers pass names with non-ASCII
/// characters through as raw bytes.
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
}

/// ## Summary
/// Builds the asserted identity for a request.
///
/// User headers are consulted in configured order and the first non-blank
/// value wins. Values that are not valid UTF-8 are skipped here; see
/// [`carries_user_header`].
#[must_use]
pub fn asserted_identity_from_request(
    req: &salvo::Request,
    proxy: &ProxyConfig,
) -> AssertedIdentity {
    let headers = req.headers();

    let username = proxy.user_headers.iter().find_map(|name| {
        header_str(headers, name).filter(|value| !value.trim().is_empty())
    });

    let friend_realm = header_str(headers, &proxy.realm_header)
        .is_some_and(|realm| realm.trim().eq_ignore_ascii_case(&proxy.friend_realm));

    AssertedIdentity::new(username, friend_realm, is_secure_channel(req, proxy))
}

/// ## Summary
/// Whether any configured user header carries a non-blank value, decodable or not.
///
/// A header that cannot be read as a username still marks the request as
/// made on behalf of someone.
#[must_use]
pub fn carries_user_header(req: &salvo::Request, proxy: &ProxyConfig) -> bool {
    let headers = req.headers();
    proxy.user_headers.iter().any(|name| {
        headers
            .get(name)
            .is_some_and(|value| !value.as_bytes().trim_ascii().is_empty())
    })
}

/// ## Summary
/// Whether the request reached the upstream webserver over an encrypted transport.
#[must_use]
pub fn is_secure_channel(req: &salvo::Request, proxy: &ProxyConfig) -> bool {
    let headers = req.headers();

    header_str(headers, &proxy.secure_header).is_some_and(|v| v.trim() == proxy.secure_value)
        || header_str(headers, FORWARDED_PROTO_HEADER)
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("https"))
        || req.uri().scheme_str() == Some("https")
}
