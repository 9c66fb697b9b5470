use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};
use porter_core::{account::Account, config::SessionConfig};
use tokio::sync::RwLock;

use super::{SessionStore, StoreFuture};

/// A finalized login bound to one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub account_id: uuid::Uuid,
    pub username: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session has outlived `ttl` at `now`.
    #[must_use]
    pub fn is_expired(&self, ttl: TimeDelta, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.started_at) >= ttl
    }
}

/// ## Summary
/// In-memory session store keyed by opaque session id.
///
/// Sessions expire `ttl` after they start. Expired sessions read as absent
/// and are dropped on lookup and whenever a new session starts.
#[derive(Debug)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: TimeDelta,
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::with_ttl(SessionConfig::default().ttl())
    }
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ttl(ttl: TimeDelta) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    #[tracing::instrument(skip(self, account), fields(username = %account.name))]
    fn start<'a>(&'a self, account: &'a Account) -> StoreFuture<'a, Session> {
        Box::pin(async move {
            let now = Utc::now();
            let session = Session {
                id: uuid::Uuid::new_v4().simple().to_string(),
                account_id: account.id,
                username: account.name.clone(),
                started_at: now,
            };

            let mut sessions = self.sessions.write().await;
            let before = sessions.len();
            sessions.retain(|_, existing| !existing.is_expired(self.ttl, now));
            if sessions.len() < before {
                tracing::debug!(pruned = before - sessions.len(), "Dropped expired sessions");
            }
            sessions.insert(session.id.clone(), session.clone());
            drop(sessions);

            tracing::debug!("Session started");

            Ok(session)
        })
    }

    fn get<'a>(&'a self, session_id: &'a str) -> StoreFuture<'a, Option<Session>> {
        Box::pin(async move {
            let now = Utc::now();
            let session = self.sessions.read().await.get(session_id).cloned();

            match session {
                Some(session) if session.is_expired(self.ttl, now) => {
                    let mut sessions = self.sessions.write().await;
                    if sessions
                        .get(session_id)
                        .is_some_and(|current| current.is_expired(self.ttl, now))
                    {
                        sessions.remove(session_id);
                        tracing::debug!(username = %session.username, "Session expired");
                    }
                    Ok(None)
                }
                session => Ok(session),
            }
        })
    }

    #[tracing::instrument(skip(self, session_id))]
    fn end<'a>(&'a self, session_id: &'a str) -> StoreFuture<'a, bool> {
        Box::pin(async move {
            let removed = self.sessions.write().await.remove(session_id);
            if let Some(session) = &removed {
                tracing::debug!(username = %session.username, "Session ended");
            }
            Ok(removed.is_some())
        })
    }
}
