use std::collections::HashMap;

use porter_core::account::{Account, NewAccount};
use tokio::sync::RwLock;

use super::{AccountStore, StoreFuture};
use crate::error::StoreError;

#[derive(Debug, Clone)]
struct StoredAccount {
    account: Account,
    password_hash: String,
}

/// ## Summary
/// In-memory account store keyed by account name.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<String, StoredAccount>>,
}

impl MemoryAccountStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }

    /// Returns the stored credential hash for an account.
    pub async fn password_hash(&self, name: &str) -> Option<String> {
        self.accounts
            .read()
            .await
            .get(name)
            .map(|stored| stored.password_hash.clone())
    }
}

impl AccountStore for MemoryAccountStore {
    #[tracing::instrument(skip(self))]
    fn find_by_name<'a>(&'a self, name: &'a str) -> StoreFuture<'a, Option<Account>> {
        Box::pin(async move {
            let accounts = self.accounts.read().await;
            Ok(accounts.get(name).map(|stored| stored.account.clone()))
        })
    }

    #[tracing::instrument(skip(self, new_account), fields(name = %new_account.name))]
    fn create(&self, new_account: NewAccount) -> StoreFuture<'_, Account> {
        Box::pin(async move {
            // Check and insert under one write lock so concurrent creations collide cleanly
            let mut accounts = self.accounts.write().await;
            if accounts.contains_key(&new_account.name) {
                return Err(StoreError::Conflict(new_account.name));
            }

            let account = Account {
                id: uuid::Uuid::now_v7(),
                name: new_account.name.clone(),
                email: new_account.email,
                status: new_account.status,
                created_at: chrono::Utc::now(),
            };

            accounts.insert(
                new_account.name,
                StoredAccount {
                    account: account.clone(),
                    password_hash: new_account.password_hash,
                },
            );

            tracing::debug!(account_id = %account.id, "Account stored");

            Ok(account)
        })
    }
}
