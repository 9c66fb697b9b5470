//! Fixtures shared by the in-crate handler tests.

use std::sync::Arc;

use chrono::TimeDelta;

use porter_core::config::{
    GatewayConfig, LoggingConfig, ProxyConfig, ServerConfig, SessionConfig, Settings,
};
use porter_store::store::{MemoryAccountStore, MemorySessionStore};

use crate::config::ConfigHandler;
use crate::store_handler::StoreHandler;

pub fn test_settings() -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        proxy: ProxyConfig::default(),
        gateway: gateway(),
        session: SessionConfig::default(),
        accounts: Vec::new(),
    }
}

/// Gateway policy with every switch off and a logout URL of `/sso/logout?/`.
pub fn gateway() -> GatewayConfig {
    GatewayConfig {
        logout_path: "/sso/logout".to_string(),
        logout_to: "/".to_string(),
        ..GatewayConfig::default()
    }
}

pub fn config_handler(gateway: GatewayConfig) -> ConfigHandler {
    ConfigHandler {
        settings: Settings {
            gateway,
            ..test_settings()
        },
    }
}

pub struct Stores {
    pub accounts: Arc<MemoryAccountStore>,
    pub sessions: Arc<MemorySessionStore>,
}

impl Stores {
    pub fn new() -> Self {
        Self::with_session_ttl(SessionConfig::default().ttl())
    }

    pub fn with_session_ttl(ttl: TimeDelta) -> Self {
        Self {
            accounts: Arc::new(MemoryAccountStore::new()),
            sessions: Arc::new(MemorySessionStore::with_ttl(ttl)),
        }
    }

    pub fn handler(&self) -> StoreHandler {
        StoreHandler {
            accounts: self.accounts.clone(),
            sessions: self.sessions.clone(),
        }
    }
}
