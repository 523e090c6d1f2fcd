use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::model::Wallet;

/// Keyed persistence for wallets.
#[async_trait]
pub trait WalletStore: Send + Sync {
    async fn load(&self, user_id: &str) -> anyhow::Result<Option<Wallet>>;
    async fn save(&self, wallet: &Wallet) -> anyhow::Result<()>;
}

/// In-memory `WalletStore`.
#[derive(Default)]
pub struct MemoryWalletStore {
    inner: Mutex<HashMap<String, Wallet>>,
}

impl MemoryWalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with one wallet, for tests that need a specific
    /// starting balance.
    pub async fn with_wallet(wallet: Wallet) -> Self {
        let store = Self::new();
        store
            .inner
            .lock()
            .await
            .insert(wallet.user_id.clone(), wallet);
        store
    }
}

#[async_trait]
impl WalletStore for MemoryWalletStore {
    async fn load(&self, user_id: &str) -> anyhow::Result<Option<Wallet>> {
        Ok(self.inner.lock().await.get(user_id).cloned())
    }

    async fn save(&self, wallet: &Wallet) -> anyhow::Result<()> {
        self.inner
            .lock()
            .await
            .insert(wallet.user_id.clone(), wallet.clone());
        Ok(())
    }
}
