use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxKind {
    Credit,
    Debit,
}

impl std::fmt::Display for TxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TxKind::Credit => "credit",
            TxKind::Debit => "debit",
        };
        f.write_str(s)
    }
}

/// One ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TxKind,
    pub amount: u64,
    pub description: String,
    pub at_ms: u64,
}

/// A user wallet. The balance and history only change through
/// `WalletManager`, which keeps them consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub user_id: String,
    pub balance: u64,
    pub transactions: Vec<Transaction>,
}

impl Wallet {
    pub fn new(user_id: impl Into<String>, opening_balance: u64) -> Self {
        Self {
            user_id: user_id.into(),
            balance: opening_balance,
            transactions: Vec::new(),
        }
    }
}
