//! Wallet Service Collaborator
//!
//! The wallet lives outside this engine: balances are stored and topped up
//! by the payments side of the product. The engine only calls `top_up` and
//! re-reads the balance for display; it never computes a balance itself.

use async_trait::async_trait;
use eco_core::UserKey;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wallet collaborator failure
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct WalletError {
    pub reason: String,
}

impl WalletError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Wallet balance snapshot, for display only
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub balance_credits: i64,
}

/// External wallet service
#[async_trait]
pub trait WalletService: Send + Sync {
    /// Read the current balance
    async fn balance(&self, user: &UserKey) -> Result<WalletBalance, WalletError>;

    /// Credit the wallet
    async fn top_up(&self, user: &UserKey, credits: i64) -> Result<(), WalletError>;
}
