//! Tier Ladder Types
//!
//! The ladder is configuration, not a runtime entity: an ordered threshold
//! table mapping available points to a named loyalty level.

use crate::error::{EcoError, EcoResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One loyalty level
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLevel {
    pub name: String,
    /// Inclusive points threshold
    pub min_points: i64,
    /// Display color
    pub color: String,
}

impl TierLevel {
    pub fn new(name: impl Into<String>, min_points: i64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_points,
            color: color.into(),
        }
    }
}

/// Ordered tier threshold table, ascending by `min_points`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLadder {
    pub levels: Vec<TierLevel>,
}

impl TierLadder {
    pub fn new(levels: Vec<TierLevel>) -> Self {
        Self { levels }
    }

    /// Verify ladder invariant: non-empty, strictly ascending, base at zero
    pub fn verify_ascending(&self) -> EcoResult<()> {
        if self.levels.is_empty() {
            return Err(EcoError::InvalidLadder {
                reason: "ladder has no levels".to_string(),
            });
        }
        if self.levels[0].min_points != 0 {
            return Err(EcoError::InvalidLadder {
                reason: "base level must start at zero points".to_string(),
            });
        }
        for pair in self.levels.windows(2) {
            if pair[1].min_points <= pair[0].min_points {
                return Err(EcoError::InvalidLadder {
                    reason: format!(
                        "{} threshold {} not above {} threshold {}",
                        pair[1].name, pair[1].min_points, pair[0].name, pair[0].min_points
                    ),
                });
            }
        }
        Ok(())
    }
}

impl Default for TierLadder {
    fn default() -> Self {
        Self::new(vec![
            TierLevel::new("Bronze", 0, "#cd7f32"),
            TierLevel::new("Silver", 400, "#c0c0c0"),
            TierLevel::new("Gold", 900, "#ffd700"),
            TierLevel::new("Platinum", 1600, "#e5e4e2"),
        ])
    }
}

/// Where an available-points balance sits on the ladder
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierStanding {
    /// Selected level: the greatest threshold not exceeding the balance
    pub tier: TierLevel,
    /// Level immediately above, absent at the top of the ladder
    pub next_tier: Option<TierLevel>,
    /// Progress toward `next_tier`, clamped to [0, 100]; 100 at the top
    pub progress_pct: Decimal,
}
