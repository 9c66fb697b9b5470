use anyhow::Result;
use chrono::TimeDelta;
use config::Config;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_FRIEND_REALM, DEFAULT_REALM_HEADER, DEFAULT_REDIRECT_USER_HEADER,
    DEFAULT_SECURE_HEADER, DEFAULT_SECURE_VALUE, DEFAULT_SESSION_COOKIE,
    DEFAULT_SESSION_TTL_SECONDS, DEFAULT_USER_HEADER,
};
use crate::error::{CoreError, CoreResult};

pub const DEFAULT_FRIEND_ACCOUNT_MESSAGE: &str =
    "Friend accounts are not allowed to log in to this site.";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub proxy: ProxyConfig,
    pub gateway: GatewayConfig,
    pub session: SessionConfig,
    #[serde(default)]
    pub accounts: Vec<SeedAccount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// ## Summary
/// Where the upstream webserver puts the asserted identity.
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyConfig {
    /// Headers holding the remote user, consulted in order; the first non-blank one wins.
    pub user_headers: Vec<String>,
    pub realm_header: String,
    /// Realm value that marks a friend (guest) account. Compared case-insensitively.
    pub friend_realm: String,
    pub secure_header: String,
    pub secure_value: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            user_headers: vec![
                DEFAULT_REDIRECT_USER_HEADER.to_string(),
                DEFAULT_USER_HEADER.to_string(),
            ],
            realm_header: DEFAULT_REALM_HEADER.to_string(),
            friend_realm: DEFAULT_FRIEND_REALM.to_string(),
            secure_header: DEFAULT_SECURE_HEADER.to_string(),
            secure_value: DEFAULT_SECURE_VALUE.to_string(),
        }
    }
}

/// ## Summary
/// Reconciliation policy. Read-only for the lifetime of a request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub allow_friend_accounts: bool,
    pub allow_anons_on_https: bool,
    pub autocreate: bool,
    pub autocreate_email_domain: String,
    pub friend_account_message: String,
    pub logout_path: String,
    pub logout_to: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            allow_friend_accounts: false,
            allow_anons_on_https: false,
            autocreate: false,
            autocreate_email_domain: String::new(),
            friend_account_message: DEFAULT_FRIEND_ACCOUNT_MESSAGE.to_string(),
            logout_path: String::new(),
            logout_to: String::new(),
        }
    }
}

impl GatewayConfig {
    /// ## Summary
    /// Upstream single sign-on logout URL: `logout_path?logout_to`.
    #[must_use]
    pub fn logout_url(&self) -> String {
        format!("{}?{}", self.logout_path, self.logout_to)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,
    /// Sets the `Secure` attribute on the session cookie.
    pub secure_cookie: bool,
    /// Sessions older than this are treated as logged out.
    pub ttl_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_SESSION_COOKIE.to_string(),
            secure_cookie: true,
            ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
        }
    }
}

impl SessionConfig {
    /// Session lifetime, saturating at the largest representable duration.
    #[must_use]
    pub fn ttl(&self) -> TimeDelta {
        i64::try_from(self.ttl_seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX)
    }
}

/// Account loaded into the account store at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedAccount {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub blocked: bool,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    /// Environment variables (prefix `PORTER`, `__` between sections) take precedence.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or validating it fails.
    pub fn load() -> Result<Self> {
        let proxy = ProxyConfig::default();
        let gateway = GatewayConfig::default();
        let session = SessionConfig::default();

        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "debug")?
            .set_default("proxy.user_headers", proxy.user_headers)?
            .set_default("proxy.realm_header", proxy.realm_header)?
            .set_default("proxy.friend_realm", proxy.friend_realm)?
            .set_default("proxy.secure_header", proxy.secure_header)?
            .set_default("proxy.secure_value", proxy.secure_value)?
            .set_default("gateway.allow_friend_accounts", gateway.allow_friend_accounts)?
            .set_default("gateway.allow_anons_on_https", gateway.allow_anons_on_https)?
            .set_default("gateway.autocreate", gateway.autocreate)?
            .set_default("gateway.friend_account_message", gateway.friend_account_message)?
            .set_default("session.cookie_name", session.cookie_name)?
            .set_default("session.secure_cookie", session.secure_cookie)?
            .set_default("session.ttl_seconds", session.ttl_seconds)?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env file and process environment
            .add_source(
                config::Environment::with_prefix("PORTER")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("proxy.user_headers")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;

        Ok(settings)
    }

    /// ## Summary
    /// Rejects settings the gateway cannot safely act on.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` describing the first problem found.
    pub fn validate(&self) -> CoreResult<()> {
        if self.proxy.user_headers.is_empty()
            || self.proxy.user_headers.iter().any(|h| h.trim().is_empty())
        {
            return Err(CoreError::ConfigError(
                "proxy.user_headers must list at least one non-empty header".to_string(),
            ));
        }

        if self.proxy.realm_header.trim().is_empty() || self.proxy.secure_header.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "proxy header names must not be empty".to_string(),
            ));
        }

        if self.gateway.autocreate && self.gateway.autocreate_email_domain.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "gateway.autocreate_email_domain is required when autocreate is enabled"
                    .to_string(),
            ));
        }

        if self.session.cookie_name.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "session.cookie_name must not be empty".to_string(),
            ));
        }

        if self.session.ttl_seconds == 0 {
            return Err(CoreError::ConfigError(
                "session.ttl_seconds must be greater than zero".to_string(),
            ));
        }

        if let Some(seed) = self.accounts.iter().find(|a| a.name.trim().is_empty()) {
            return Err(CoreError::ConfigError(format!(
                "seed account with email {} has an empty name",
                seed.email
            )));
        }

        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(
        accounts = settings.accounts.len(),
        autocreate = settings.gateway.autocreate,
        "Settings loaded"
    );

    Ok(settings)
}
