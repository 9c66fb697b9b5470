//! Page cache policy for requests that carry an asserted identity.
//!
//! A response rendered for an authenticated visitor must never land in a
//! shared cache, where it could later be served to an unprivileged one. The
//! decision looks only at whether an identity was asserted, not at how the
//! session was reconciled, so a response is excluded even if the login is
//! later refused.

use porter_core::identity::AssertedIdentity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    Allow,
    Deny,
}

/// Returns true only when no identity was asserted.
#[must_use]
pub const fn is_cacheable(asserted: &AssertedIdentity) -> bool {
    !asserted.is_present()
}

#[must_use]
pub const fn cache_policy(asserted: &AssertedIdentity) -> CachePolicy {
    if is_cacheable(asserted) {
        CachePolicy::Allow
    } else {
        CachePolicy::Deny
    }
}
