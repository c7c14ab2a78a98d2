//! Redemption Records and the Reward Catalog
//!
//! A redemption is any point-consuming event: a wallet-credit conversion or a
//! catalog-reward claim. Records are immutable once created; the full set for
//! a user forms the append-only redemption ledger.

use super::common::RewardId;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Redemption record kind
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedemptionKind {
    /// Points converted into wallet credit
    Wallet,
    /// Points claimed against a catalog reward
    Reward,
}

/// One point-consuming event.
///
/// Wallet-kind records satisfy `points = credits * points_per_credit`
/// exactly; the guard enforces this before a record is ever created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionRecord {
    /// Unique record ID
    pub id: String,
    pub kind: RedemptionKind,
    /// Points consumed, always positive
    pub points: i64,
    /// Wallet credits granted (wallet kind only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<i64>,
    /// Reward title (reward kind only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Creation time, RFC 3339 UTC
    pub timestamp_iso: String,
}

impl RedemptionRecord {
    /// Create a wallet-conversion record
    pub fn wallet(points: i64, credits: i64, at: DateTime<Utc>) -> Self {
        Self {
            id: format!("redemption:{}", uuid::Uuid::new_v4()),
            kind: RedemptionKind::Wallet,
            points,
            credits: Some(credits),
            title: None,
            timestamp_iso: at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// Create a catalog-reward record
    pub fn reward(points: i64, title: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            id: format!("redemption:{}", uuid::Uuid::new_v4()),
            kind: RedemptionKind::Reward,
            points,
            credits: None,
            title: Some(title.into()),
            timestamp_iso: at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Catalog reward definition
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardItem {
    pub id: RewardId,
    pub title: String,
    /// Points required to claim
    pub points: i64,
}

impl RewardItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, points: i64) -> Self {
        Self {
            id: RewardId::new(id),
            title: title.into(),
            points,
        }
    }
}

/// Fixed reward catalog, supplied as configuration and never mutated here
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardCatalog {
    pub items: Vec<RewardItem>,
}

impl RewardCatalog {
    pub fn new(items: Vec<RewardItem>) -> Self {
        Self { items }
    }

    /// Look up a reward by ID
    pub fn find(&self, id: &RewardId) -> Option<&RewardItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Built-in catalog shipped with the product
    pub fn default_v1() -> Self {
        Self::new(vec![
            RewardItem::new("free-hour", "1 hour free parking", 300),
            RewardItem::new("car-wash", "Car wash voucher", 600),
            RewardItem::new("ev-charge", "EV charging credit", 900),
        ])
    }
}
