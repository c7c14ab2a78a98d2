//! Rewards Coordinator
//!
//! Orchestrates redemptions across the domain core, the ledger, and the
//! external wallet. The ordering is the central correctness guarantee:
//! validate first, then the external top-up, and only after the top-up
//! succeeds append to the ledger. A guard rejection makes no external call
//! and writes nothing; a top-up failure leaves the ledger untouched.
//!
//! Account state is recomputed from its sources on every call. Nothing here
//! caches an "available points" counter, so the ledger invariants hold by
//! construction.

use crate::error::{EngineError, EngineResult};
use crate::reservations::ReservationSource;
use crate::wallet::{WalletBalance, WalletService};
use chrono::Utc;
use eco_core::{
    ActivitySummarizer, ConversionGuard, ConversionPolicy, ConversionRequest, EarningRates,
    EcoError, PointsCalculator, RedemptionRecord, RewardCatalog, RewardId, TierEngine,
    TierStanding, UserKey,
};
use eco_store::RedemptionLedger;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// On-demand view of a user's rewards account
#[derive(Clone, Debug, Serialize)]
pub struct AccountSnapshot {
    pub summary: eco_core::ActivitySummary,
    /// Points ever redeemed, from the ledger fold
    pub redeemed_points: i64,
    /// Total earned minus total redeemed
    pub available_points: i64,
    pub standing: TierStanding,
    /// Wallet-conversion points consumed this calendar month
    pub converted_this_month: i64,
    /// Pre-fill for the conversion dialog, when one makes sense
    pub suggested_conversion: Option<i64>,
}

/// Outcome of a wallet conversion
#[derive(Clone, Debug, Serialize)]
pub struct ConversionOutcome {
    pub record: RedemptionRecord,
    /// Refreshed balance; absent when the post-conversion read failed
    pub balance: Option<WalletBalance>,
}

/// Rewards coordinator
pub struct RewardsCoordinator {
    summarizer: ActivitySummarizer,
    guard: ConversionGuard,
    tiers: TierEngine,
    ledger: RedemptionLedger,
    wallet: Arc<dyn WalletService>,
    reservations: Arc<dyn ReservationSource>,
}

impl RewardsCoordinator {
    /// Create a coordinator with default rates, policy, and ladder
    pub fn new(
        ledger: RedemptionLedger,
        wallet: Arc<dyn WalletService>,
        reservations: Arc<dyn ReservationSource>,
    ) -> Self {
        Self {
            summarizer: ActivitySummarizer::default(),
            guard: ConversionGuard::default_v1(),
            tiers: TierEngine::default_v1(),
            ledger,
            wallet,
            reservations,
        }
    }

    /// Override the scoring rates
    pub fn with_rates(mut self, rates: EarningRates) -> Self {
        self.summarizer = ActivitySummarizer::new(PointsCalculator::new(rates));
        self
    }

    /// Override the conversion policy
    pub fn with_policy(mut self, policy: ConversionPolicy) -> Self {
        self.guard = ConversionGuard::new(policy);
        self
    }

    /// Override the tier engine
    pub fn with_tier_engine(mut self, tiers: TierEngine) -> Self {
        self.tiers = tiers;
        self
    }

    /// Recompute the full account view from the reservation history and the
    /// ledger. Pure derivation: calling this twice without an intervening
    /// redemption yields the same snapshot.
    pub async fn account_snapshot(&self, user: &UserKey) -> EngineResult<AccountSnapshot> {
        let facts = self.reservations.facts_for(user).await.map_err(|e| {
            EngineError::ReservationSourceUnavailable { reason: e.reason }
        })?;
        let summary = self.summarizer.summarize(&facts);
        let redeemed_points = self.ledger.redeemed_points(user).await?;
        let available_points = summary.total_points - redeemed_points;
        let converted_this_month = self
            .ledger
            .wallet_points_in_month(user, Utc::now())
            .await?;
        let standing = self.tiers.standing_for(available_points);
        let suggested_conversion = self
            .guard
            .suggest_amount(available_points, converted_this_month);

        Ok(AccountSnapshot {
            summary,
            redeemed_points,
            available_points,
            standing,
            converted_this_month,
            suggested_conversion,
        })
    }

    /// Convert points into wallet credit.
    ///
    /// Sequence: fresh snapshot -> guard -> external top-up -> ledger append
    /// -> balance refresh. Steps run strictly in order and never
    /// concurrently; once the top-up has been issued the operation runs to
    /// completion or failure.
    pub async fn convert_to_wallet(
        &self,
        user: &UserKey,
        points_to_convert: i64,
    ) -> EngineResult<ConversionOutcome> {
        let snapshot = self.account_snapshot(user).await?;
        let request = ConversionRequest {
            points_to_convert,
            available_points: snapshot.available_points,
            trip_count: snapshot.summary.trip_count,
            already_converted_this_month: snapshot.converted_this_month,
        };
        self.guard.validate(&request).into_result()?;

        let credits = self.guard.policy().credits_for(points_to_convert);
        self.wallet
            .top_up(user, credits)
            .await
            .map_err(|e| EngineError::WalletTopUpFailed { reason: e.reason })?;

        // Credit is granted from here on; the matching record must land.
        let record = RedemptionRecord::wallet(points_to_convert, credits, Utc::now());
        if let Err(error) = self.ledger.append(user, record.clone()).await {
            warn!(user = %user, credits, error = %error, "Wallet credited but ledger append failed");
            return Err(EngineError::LedgerBehindWallet {
                credits,
                reason: error.to_string(),
            });
        }

        info!(user = %user, points = points_to_convert, credits, "Converted points to wallet credit");

        let balance = match self.wallet.balance(user).await {
            Ok(balance) => Some(balance),
            Err(error) => {
                warn!(user = %user, error = %error, "Balance refresh failed after conversion");
                None
            }
        };

        Ok(ConversionOutcome { record, balance })
    }

    /// Claim a catalog reward against an already-derived available balance.
    ///
    /// No wallet call on this path; the ledger append is the only effect.
    pub async fn redeem_reward(
        &self,
        user: &UserKey,
        reward_id: &RewardId,
        catalog: &RewardCatalog,
        available_points: i64,
    ) -> EngineResult<RedemptionRecord> {
        let reward = catalog.find(reward_id).ok_or_else(|| EcoError::RewardNotFound {
            reward_id: reward_id.to_string(),
        })?;
        if reward.points > available_points {
            return Err(EcoError::InsufficientPoints {
                requested: reward.points,
                available: available_points,
            }
            .into());
        }

        let record = RedemptionRecord::reward(reward.points, reward.title.clone(), Utc::now());
        self.ledger.append(user, record.clone()).await?;
        info!(user = %user, reward = %reward_id, points = reward.points, "Reward redeemed");

        Ok(record)
    }

    /// Get ledger reference
    pub fn ledger(&self) -> &RedemptionLedger {
        &self.ledger
    }
}
