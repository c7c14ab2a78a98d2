//! Tier Engine
//!
//! Maps an available-points balance onto the tier ladder. Selection scans
//! from the highest threshold downward: the greatest tier not exceeding the
//! balance wins, so no tier above the true tier is ever chosen.

use crate::error::EcoResult;
use crate::types::{TierLadder, TierStanding};
use rust_decimal::Decimal;

/// Tier engine
pub struct TierEngine {
    ladder: TierLadder,
}

impl TierEngine {
    /// Create a new engine over a validated ladder
    pub fn new(ladder: TierLadder) -> EcoResult<Self> {
        ladder.verify_ascending()?;
        Ok(Self { ladder })
    }

    /// Create an engine over the built-in ladder
    pub fn default_v1() -> Self {
        // The built-in ladder always passes its own validation
        Self {
            ladder: TierLadder::default(),
        }
    }

    /// Resolve the standing for an available-points balance.
    ///
    /// Balances below the base threshold clamp to the base tier at 0%.
    pub fn standing_for(&self, available_points: i64) -> TierStanding {
        let levels = &self.ladder.levels;

        let index = levels
            .iter()
            .rposition(|level| level.min_points <= available_points)
            .unwrap_or(0);
        let tier = levels[index].clone();
        let next_tier = levels.get(index + 1).cloned();

        let progress_pct = match &next_tier {
            None => Decimal::new(100, 0),
            Some(next) => {
                let span = Decimal::from(next.min_points - tier.min_points);
                let gained = Decimal::from(available_points - tier.min_points);
                (gained * Decimal::new(100, 0) / span)
                    .clamp(Decimal::ZERO, Decimal::new(100, 0))
            }
        };

        TierStanding {
            tier,
            next_tier,
            progress_pct,
        }
    }

    /// Get ladder reference
    pub fn ladder(&self) -> &TierLadder {
        &self.ladder
    }
}

impl Default for TierEngine {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TierLevel;

    #[test]
    fn test_threshold_selection() {
        let engine = TierEngine::default_v1();

        assert_eq!(engine.standing_for(0).tier.name, "Bronze");
        assert_eq!(engine.standing_for(399).tier.name, "Bronze");
        assert_eq!(engine.standing_for(400).tier.name, "Silver");
        assert_eq!(engine.standing_for(899).tier.name, "Silver");
        assert_eq!(engine.standing_for(900).tier.name, "Gold");
        assert_eq!(engine.standing_for(1600).tier.name, "Platinum");
        assert_eq!(engine.standing_for(50_000).tier.name, "Platinum");
    }

    #[test]
    fn test_selected_tier_never_exceeds_balance() {
        let engine = TierEngine::default_v1();
        for points in [0, 1, 399, 400, 650, 899, 900, 1599, 1600, 9999] {
            let standing = engine.standing_for(points);
            assert!(standing.tier.min_points <= points);
        }
    }

    #[test]
    fn test_progress_toward_next_tier() {
        let engine = TierEngine::default_v1();

        // halfway from Bronze (0) to Silver (400)
        let standing = engine.standing_for(200);
        assert_eq!(standing.next_tier.as_ref().unwrap().name, "Silver");
        assert_eq!(standing.progress_pct, Decimal::new(50, 0));

        // top of the ladder pins at 100 with no next tier
        let standing = engine.standing_for(2000);
        assert!(standing.next_tier.is_none());
        assert_eq!(standing.progress_pct, Decimal::new(100, 0));
    }

    #[test]
    fn test_negative_balance_clamps_to_base() {
        let engine = TierEngine::default_v1();
        let standing = engine.standing_for(-250);
        assert_eq!(standing.tier.name, "Bronze");
        assert_eq!(standing.progress_pct, Decimal::ZERO);
    }

    #[test]
    fn test_rejects_invalid_ladder() {
        let ladder = TierLadder::new(vec![
            TierLevel::new("Bronze", 0, "#cd7f32"),
            TierLevel::new("Silver", 0, "#c0c0c0"),
        ]);
        assert!(TierEngine::new(ladder).is_err());
    }
}
