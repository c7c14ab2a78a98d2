//! Eco-Rewards Error Codes Registry
//!
//! Error code format: ECO-{module}-{sequence}
//! - ECO-GUARD: Conversion guard rejections
//! - ECO-REWARD: Reward catalog errors
//! - ECO-TIER: Tier ladder configuration errors
//!
//! Every rejection carries a stable code in its display string and maps to a
//! short user-facing message via [`EcoError::user_message`], so callers can
//! render a specific message instead of a generic failure string.

use thiserror::Error;

/// Eco-Rewards Result type
pub type EcoResult<T> = Result<T, EcoError>;

/// Eco-Rewards Error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcoError {
    // ============================================================
    // Guard Errors (ECO-GUARD-*)
    // ============================================================
    /// [ECO-GUARD-001] Conversion eligibility gate failed
    #[error("[ECO-GUARD-001] Not eligible for conversion: {trip_count} trips, {available_points} points available")]
    NotEligible {
        trip_count: u32,
        available_points: i64,
    },

    /// [ECO-GUARD-002] Requested amount below the conversion minimum
    #[error("[ECO-GUARD-002] Requested {requested} points, minimum is {minimum}")]
    BelowMinimum { requested: i64, minimum: i64 },

    /// [ECO-GUARD-003] Requested amount exceeds the available balance
    #[error("[ECO-GUARD-003] Requested {requested} points, only {available} available")]
    InsufficientPoints { requested: i64, available: i64 },

    /// [ECO-GUARD-004] Requested amount exceeds the monthly headroom
    #[error("[ECO-GUARD-004] Requested {requested} points, only {remaining} left this month")]
    MonthlyCapExceeded { requested: i64, remaining: i64 },

    /// [ECO-GUARD-005] Requested amount not a whole number of credits
    #[error("[ECO-GUARD-005] Requested {requested} points, must be a multiple of {increment}")]
    NotAnIncrement { requested: i64, increment: i64 },

    // ============================================================
    // Reward Errors (ECO-REWARD-*)
    // ============================================================
    /// [ECO-REWARD-001] Reward not present in the catalog
    #[error("[ECO-REWARD-001] Reward {reward_id} not found in catalog")]
    RewardNotFound { reward_id: String },

    // ============================================================
    // Tier Errors (ECO-TIER-*)
    // ============================================================
    /// [ECO-TIER-001] Tier ladder configuration invalid
    #[error("[ECO-TIER-001] Invalid tier ladder: {reason}")]
    InvalidLadder { reason: String },
}

impl EcoError {
    /// Short user-facing message for rendering in a UI.
    ///
    /// Rejections are structured values, never opaque failures; each one has
    /// exactly one specific message.
    pub fn user_message(&self) -> String {
        match self {
            EcoError::NotEligible { .. } => {
                "Complete more trips to unlock point conversion.".to_string()
            }
            EcoError::BelowMinimum { minimum, .. } => {
                format!("Minimum {minimum} points to convert.")
            }
            EcoError::InsufficientPoints { .. } => "Not enough points available.".to_string(),
            EcoError::MonthlyCapExceeded { .. } => "Monthly conversion limit reached.".to_string(),
            EcoError::NotAnIncrement { increment, .. } => {
                format!("Amount must be a multiple of {increment} points.")
            }
            EcoError::RewardNotFound { .. } => "That reward is no longer available.".to_string(),
            EcoError::InvalidLadder { .. } => "Rewards are temporarily unavailable.".to_string(),
        }
    }

    /// Stable code for the error, without the bracket decoration
    pub fn code(&self) -> &'static str {
        match self {
            EcoError::NotEligible { .. } => "ECO-GUARD-001",
            EcoError::BelowMinimum { .. } => "ECO-GUARD-002",
            EcoError::InsufficientPoints { .. } => "ECO-GUARD-003",
            EcoError::MonthlyCapExceeded { .. } => "ECO-GUARD-004",
            EcoError::NotAnIncrement { .. } => "ECO-GUARD-005",
            EcoError::RewardNotFound { .. } => "ECO-REWARD-001",
            EcoError::InvalidLadder { .. } => "ECO-TIER-001",
        }
    }
}
