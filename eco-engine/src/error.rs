//! Eco-Rewards Engine Error Types
//!
//! Wraps the domain and store errors and adds the orchestration-boundary
//! failures (external wallet call, reservation source, and the acknowledged
//! credited-but-unrecorded window).

use eco_core::EcoError;
use eco_store::StoreError;
use thiserror::Error;

/// Engine Result type
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine Error
#[derive(Debug, Error)]
pub enum EngineError {
    /// Domain rejection, surfaced verbatim
    #[error(transparent)]
    Core(#[from] EcoError),

    /// Ledger store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// [ECO-ENGINE-001] External wallet top-up failed; nothing was written
    #[error("[ECO-ENGINE-001] Wallet top-up failed: {reason}")]
    WalletTopUpFailed { reason: String },

    /// [ECO-ENGINE-002] Reservation source failed; nothing was written
    #[error("[ECO-ENGINE-002] Reservation source unavailable: {reason}")]
    ReservationSourceUnavailable { reason: String },

    /// [ECO-ENGINE-003] Wallet credit granted but the matching ledger record
    /// could not be appended; bookkeeping may be behind the wallet
    #[error("[ECO-ENGINE-003] Wallet credited {credits} credits but ledger append failed: {reason}")]
    LedgerBehindWallet { credits: i64, reason: String },
}

impl EngineError {
    /// Short user-facing message for rendering in a UI
    pub fn user_message(&self) -> String {
        match self {
            EngineError::Core(err) => err.user_message(),
            EngineError::Store(_) => "Could not reach your rewards history.".to_string(),
            EngineError::WalletTopUpFailed { .. } => {
                "Wallet top-up failed, no points were spent.".to_string()
            }
            EngineError::ReservationSourceUnavailable { .. } => {
                "Could not load your trips right now.".to_string()
            }
            EngineError::LedgerBehindWallet { .. } => {
                "Credit was added but your history may take a moment to catch up.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_rejections_pass_through_verbatim() {
        let err = EngineError::from(EcoError::MonthlyCapExceeded {
            requested: 600,
            remaining: 500,
        });
        assert_eq!(err.to_string(), "[ECO-GUARD-004] Requested 600 points, only 500 left this month");
        assert_eq!(err.user_message(), "Monthly conversion limit reached.");
    }

    #[test]
    fn test_top_up_failure_has_own_code() {
        let err = EngineError::WalletTopUpFailed {
            reason: "gateway timeout".to_string(),
        };
        assert!(err.to_string().starts_with("[ECO-ENGINE-001]"));
    }
}
