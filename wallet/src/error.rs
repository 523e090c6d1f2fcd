use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("insufficient wallet balance: required {required}, available {available}")]
    InsufficientBalance { required: u64, available: u64 },

    #[error("amount must be positive")]
    InvalidAmount,

    #[error("wallet storage failed: {0}")]
    Storage(#[from] anyhow::Error),
}
