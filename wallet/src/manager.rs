//! WalletManager
//!
//! Serializes every balance mutation for a user behind one lock and writes
//! through to the store, so debits can never interleave and double-spend.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::error::WalletError;
use crate::model::{Transaction, TxKind, Wallet};
use crate::store::WalletStore;

/// The demo runs single-user; wallets for other ids are still supported.
pub const DEFAULT_USER: &str = "default_user";

/// Every wallet opens with this balance on first access.
pub const DEFAULT_OPENING_BALANCE: u64 = 50_000;

pub struct WalletManager<S: WalletStore> {
    wallets: Mutex<HashMap<String, Wallet>>,
    store: Arc<S>,
}

impl<S: WalletStore> WalletManager<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            wallets: Mutex::new(HashMap::new()),
            store,
        }
    }

    /// Current balance, creating the wallet lazily on first access.
    pub async fn balance(&self, user_id: &str) -> Result<u64, WalletError> {
        let mut wallets = self.wallets.lock().await;
        let wallet = self.load_or_create(&mut wallets, user_id).await?;
        Ok(wallet.balance)
    }

    /// Deduct `amount`, recording a debit transaction. Fails without side
    /// effects when the balance is short.
    pub async fn debit(
        &self,
        user_id: &str,
        amount: u64,
        description: impl Into<String>,
        now_ms: u64,
    ) -> Result<u64, WalletError> {
        if amount == 0 {
            return Err(WalletError::InvalidAmount);
        }

        let mut wallets = self.wallets.lock().await;
        let wallet = self.load_or_create(&mut wallets, user_id).await?;

        if wallet.balance < amount {
            return Err(WalletError::InsufficientBalance {
                required: amount,
                available: wallet.balance,
            });
        }

        wallet.balance -= amount;
        wallet.transactions.push(Transaction {
            kind: TxKind::Debit,
            amount,
            description: description.into(),
            at_ms: now_ms,
        });

        self.store.save(wallet).await?;
        info!(user_id, amount, balance = wallet.balance, "wallet debited");

        Ok(wallet.balance)
    }

    /// Add `amount` (top-up), recording a credit transaction.
    pub async fn credit(
        &self,
        user_id: &str,
        amount: u64,
        description: impl Into<String>,
        now_ms: u64,
    ) -> Result<u64, WalletError> {
        if amount == 0 {
            return Err(WalletError::InvalidAmount);
        }

        let mut wallets = self.wallets.lock().await;
        let wallet = self.load_or_create(&mut wallets, user_id).await?;

        wallet.balance += amount;
        wallet.transactions.push(Transaction {
            kind: TxKind::Credit,
            amount,
            description: description.into(),
            at_ms: now_ms,
        });

        self.store.save(wallet).await?;
        info!(user_id, amount, balance = wallet.balance, "wallet credited");

        Ok(wallet.balance)
    }

    /// The latest `limit` transactions, newest first.
    pub async fn recent_transactions(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<Transaction>, WalletError> {
        let mut wallets = self.wallets.lock().await;
        let wallet = self.load_or_create(&mut wallets, user_id).await?;

        Ok(wallet
            .transactions
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn load_or_create<'a>(
        &self,
        wallets: &'a mut HashMap<String, Wallet>,
        user_id: &str,
    ) -> Result<&'a mut Wallet, WalletError> {
        match wallets.entry(user_id.to_string()) {
            Entry::Occupied(occupied) => Ok(occupied.into_mut()),
            Entry::Vacant(vacant) => {
                let wallet = match self.store.load(user_id).await? {
                    Some(existing) => existing,
                    None => {
                        let fresh = Wallet::new(user_id, DEFAULT_OPENING_BALANCE);
                        self.store.save(&fresh).await?;
                        fresh
                    }
                };
                Ok(vacant.insert(wallet))
            }
        }
    }
}
