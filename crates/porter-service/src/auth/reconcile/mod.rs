//! Reconciles the upstream-asserted identity with the local session.
//!
//! The rules run in a fixed order and the first terminal rule wins:
//!
//! 1. An active session for a different name (or for no name) is logged out.
//! 2. Friend accounts are refused unless allowed; the visitor stays anonymous
//!    when anonymous browsing is allowed, otherwise is logged out.
//! 3. A known account with no active session is logged in.
//! 4. An unknown account is created when auto-creation is on, otherwise the
//!    visitor stays anonymous.
//! 5. With no asserted identity the visitor is logged out, or stays anonymous
//!    when anonymous browsing is allowed.
//! 6. Anything else leaves the session untouched.

use porter_core::{
    account::{Account, AccountStatus},
    config::GatewayConfig,
    constants::LOGOUT_ROUTE_PREFIX,
    identity::{AssertedIdentity, LocalSession},
};
use porter_store::store::AccountStore;
use serde::Serialize;

use crate::error::{ServiceError, ServiceResult};

mod provision;

pub use provision::{provision_account, provisioned_email};

pub const ANONYMOUS_FALLBACK_MESSAGE: &str = "You do not have a valid single sign-on username. \
     Browsing as anonymous user over a secure channel.";

/// What the caller should do with the local session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Finalize a login for this account, replacing any current session.
    LoginAs(Account),
    /// End any current session and continue as an anonymous visitor.
    RemainAnonymous,
    /// End any current session and refuse the request.
    LogoutAndDeny,
    /// Leave the current session, already bound to this account, as it is.
    NoChange(Account),
}

impl Outcome {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LoginAs(_) => "login_as",
            Self::RemainAnonymous => "remain_anonymous",
            Self::LogoutAndDeny => "logout_and_deny",
            Self::NoChange(_) => "no_change",
        }
    }

    #[must_use]
    pub const fn is_denied(&self) -> bool {
        matches!(self, Self::LogoutAndDeny)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Status,
    Warning,
}

/// A message for the visitor produced while reconciling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn status(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Status,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub outcome: Outcome,
    pub notices: Vec<Notice>,
}

impl Reconciliation {
    #[must_use]
    pub const fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            notices: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }
}

/// ## Summary
/// Decides which local account, if any, should be active for this request.
///
/// The session snapshot is only read; the caller applies the returned
/// `Outcome` to its session backend.
///
/// ## Side Effects
/// - May create an account through `accounts` when auto-creation is enabled
///
/// ## Errors
/// Returns `AccountLookupFailed` if the account store cannot be queried and
/// `AccountCreationFailed` if provisioning is rejected. Neither is retried
/// and neither is turned into an anonymous fallback.
#[tracing::instrument(skip_all, fields(
    asserted = asserted.username().unwrap_or_default(),
    active = session.active_username().unwrap_or_default()
))]
pub async fn reconcile(
    asserted: &AssertedIdentity,
    session: &LocalSession,
    cfg: &GatewayConfig,
    accounts: &dyn AccountStore,
) -> ServiceResult<Reconciliation> {
    if let Some(active) = session.active_username()
        && asserted.username() != Some(active)
    {
        tracing::info!("Session does not match asserted identity, logging out");
        return Ok(Reconciliation::new(Outcome::LogoutAndDeny));
    }

    let Some(username) = asserted.username() else {
        return Ok(anonymous_fallback(cfg));
    };

    if asserted.is_friend() && !cfg.allow_friend_accounts {
        return Ok(friend_not_allowed(username, cfg));
    }

    let existing = accounts
        .find_by_name(username)
        .await
        .map_err(|source| ServiceError::AccountLookupFailed {
            username: username.to_string(),
            source,
        })?;

    let reconciliation = match existing {
        Some(account) if account.status == AccountStatus::Blocked => {
            tracing::warn!(account_id = %account.id, "Asserted identity maps to a blocked account");
            Reconciliation::new(Outcome::LogoutAndDeny).with_notice(Notice::warning(format!(
                "The account {} has been blocked.",
                account.name
            )))
        }
        Some(account) if !session.is_active() => {
            tracing::info!(account_id = %account.id, "Logging in asserted identity");
            Reconciliation::new(Outcome::LoginAs(account))
        }
        Some(account) => Reconciliation::new(Outcome::NoChange(account)),
        None if cfg.autocreate => {
            let account =
                provision_account(username, asserted.friend_realm(), cfg, accounts).await?;
            Reconciliation::new(Outcome::LoginAs(account))
        }
        None => {
            tracing::debug!("No local account and auto-creation is disabled");
            Reconciliation::new(Outcome::RemainAnonymous)
        }
    };

    tracing::debug!(outcome = reconciliation.outcome.as_str(), "Reconciled");

    Ok(reconciliation)
}

fn anonymous_fallback(cfg: &GatewayConfig) -> Reconciliation {
    if cfg.allow_anons_on_https {
        tracing::debug!("No asserted identity, browsing anonymously");
        Reconciliation::new(Outcome::RemainAnonymous)
            .with_notice(Notice::status(ANONYMOUS_FALLBACK_MESSAGE))
    } else {
        tracing::debug!("No asserted identity and anonymous browsing is disabled");
        Reconciliation::new(Outcome::LogoutAndDeny)
    }
}

fn friend_not_allowed(username: &str, cfg: &GatewayConfig) -> Reconciliation {
    tracing::warn!(
        remote_user = %username,
        "Login attempted with a friend account while friend accounts are disabled"
    );

    let outcome = if cfg.allow_anons_on_https {
        Outcome::RemainAnonymous
    } else {
        Outcome::LogoutAndDeny
    };

    Reconciliation::new(outcome)
        .with_notice(Notice::warning(cfg.friend_account_message.clone()))
        .with_notice(Notice::warning(format!(
            "You might want to log out of single sign-on: {LOGOUT_ROUTE_PREFIX}"
        )))
}
