use thiserror::Error;

use wallet::WalletError;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("flight not found: {0}")]
    FlightNotFound(String),

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error("booking storage failed: {0}")]
    Storage(#[from] anyhow::Error),
}
