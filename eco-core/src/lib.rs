//! Eco-Rewards Core - Points Economy Domain Layer
//!
//! Converts raw parking-trip data into loyalty points, maintains the tiered
//! status ladder, and guards redemption of points into wallet credit or
//! catalog rewards under monthly caps and eligibility gates.
//!
//! # Hard Invariants
//!
//! 1. **Derived, never stored**: available points are always recomputed as
//!    `total earned - total redeemed`; there is no cached counter to drift.
//! 2. **Append-only ledger**: redemption records are never mutated or
//!    deleted; corrections happen by appending.
//! 3. **Guard before spend**: no redemption that would drive the available
//!    balance negative ever reaches the ledger.
//! 4. **Exact credits**: wallet records satisfy
//!    `points = credits * points_per_credit` with no remainder.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Orchestration (eco-engine)                  │
//! │        validate -> external wallet top-up -> ledger append   │
//! ├─────────────────────────────────────────────────────────────┤
//! │                  Persistence (eco-store)                     │
//! │        keyed store, append-only redemption ledger            │
//! ├─────────────────────────────────────────────────────────────┤
//! │                  Domain Core (this crate)                    │
//! │   scoring, activity summary, tier ladder, conversion guard   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Core Types
//!
//! - [`ReservationFact`]: raw trip input from the reservation source
//! - [`PointsBreakdown`]: per-trip scoring output, recomputed on every read
//! - [`ActivitySummary`]: totals plus a capped recent-activity feed
//! - [`RedemptionRecord`]: one point-consuming event in the ledger
//! - [`TierStanding`]: ladder position with progress to the next tier
//! - [`ConversionRequest`]: proposed conversion with its derived balances
//!
//! Everything in this crate is pure and synchronous; I/O lives in the
//! sibling crates.

pub mod activity;
pub mod error;
pub mod guard;
pub mod points;
pub mod tier;
pub mod types;

// Re-export error types
pub use error::{EcoError, EcoResult};

pub use types::{
    // Identifiers
    RewardId, UserKey,
    // Trips and activity
    ActivityItem, ActivityKind, ActivitySummary, PointsBreakdown, ReservationFact,
    // Redemption
    RedemptionKind, RedemptionRecord, RewardCatalog, RewardItem,
    // Tiers
    TierLadder, TierLevel, TierStanding,
};

pub use activity::{ActivitySummarizer, RECENT_ACTIVITY_LIMIT};
pub use guard::{ConversionGuard, ConversionPolicy, ConversionRequest, GuardCheckResult};
pub use points::{EarningRates, PointsCalculator};
pub use tier::TierEngine;
