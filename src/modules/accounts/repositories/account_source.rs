use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::core::Result;
use crate::modules::accounts::models::CorporateAccount;

/// External source of corporate accounts.
#[async_trait]
pub trait CorporateAccountSource: Send + Sync {
    async fn find(&self, account_id: &str) -> Result<Option<CorporateAccount>>;
}

/// In-memory account store, used as the reference implementation and in
/// tests.
pub struct InMemoryAccountSource {
    accounts: RwLock<HashMap<String, CorporateAccount>>,
}

impl InMemoryAccountSource {
    pub fn new(accounts: Vec<CorporateAccount>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|account| (account.id.clone(), account))
            .collect();
        Self {
            accounts: RwLock::new(accounts),
        }
    }
}

#[async_trait]
impl CorporateAccountSource for InMemoryAccountSource {
    async fn find(&self, account_id: &str) -> Result<Option<CorporateAccount>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(account_id).cloned())
    }
}
