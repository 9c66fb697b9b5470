//! Upstream-asserted identity and the local session snapshot it is reconciled against.

use serde::Serialize;

/// ## Summary
/// Identity asserted by the upstream webserver for a single request.
///
/// Built fresh per request and never persisted. An absent or blank remote
/// user is represented as `None`, never as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssertedIdentity {
    username: Option<String>,
    friend_realm: bool,
    secure_channel: bool,
}

impl AssertedIdentity {
    /// ## Summary
    /// Creates an asserted identity. Blank usernames are treated as absent;
    /// any other name is kept verbatim and compared byte for byte.
    #[must_use]
    pub fn new(username: Option<&str>, friend_realm: bool, secure_channel: bool) -> Self {
        let username = username
            .filter(|name| !name.trim().is_empty())
            .map(str::to_owned);

        Self {
            username,
            friend_realm,
            secure_channel,
        }
    }

    /// ## Summary
    /// A request that carried no identity at all.
    #[must_use]
    pub fn anonymous(secure_channel: bool) -> Self {
        Self::new(None, false, secure_channel)
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.username.is_some()
    }

    /// Whether the upstream realm marked this identity as a friend (guest) account.
    #[must_use]
    pub const fn friend_realm(&self) -> bool {
        self.friend_realm
    }

    #[must_use]
    pub const fn secure_channel(&self) -> bool {
        self.secure_channel
    }

    /// ## Summary
    /// Friend classification of the asserted username. Always false when no
    /// username was asserted.
    #[must_use]
    pub fn is_friend(&self) -> bool {
        self.username
            .as_deref()
            .is_some_and(|name| is_friend_account(name, self.friend_realm))
    }
}

/// ## Summary
/// Classifies a username as a friend (external guest) account.
///
/// An identity is a friend account when the upstream realm says so, or when
/// the username itself is an email-style address.
#[must_use]
pub fn is_friend_account(username: &str, friend_realm: bool) -> bool {
    friend_realm || username.contains('@')
}

/// ## Summary
/// Snapshot of the local session at the start of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalSession {
    active_username: Option<String>,
}

impl LocalSession {
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            active_username: None,
        }
    }

    #[must_use]
    pub fn active(username: impl Into<String>) -> Self {
        Self {
            active_username: Some(username.into()),
        }
    }

    #[must_use]
    pub fn active_username(&self) -> Option<&str> {
        self.active_username.as_deref()
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active_username.is_some()
    }
}
