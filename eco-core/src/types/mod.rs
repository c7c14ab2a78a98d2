//! Eco-Rewards Core Types

mod activity;
mod common;
mod redemption;
mod tier;

pub use activity::{
    ActivityItem, ActivityKind, ActivitySummary, PointsBreakdown, ReservationFact,
};
pub use common::{RewardId, UserKey};
pub use redemption::{RedemptionKind, RedemptionRecord, RewardCatalog, RewardItem};
pub use tier::{TierLadder, TierLevel, TierStanding};
