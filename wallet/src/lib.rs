//! Simulated wallet: a single balance per user with a transaction history.

pub mod error;
pub mod manager;
pub mod model;
pub mod store;

pub use error::WalletError;
pub use manager::{DEFAULT_OPENING_BALANCE, DEFAULT_USER, WalletManager};
pub use model::{Transaction, TxKind, Wallet};
pub use store::{MemoryWalletStore, WalletStore};
