//! Points-to-Credit Conversion Rules

use super::GuardCheckResult;
use crate::error::EcoError;
use serde::{Deserialize, Serialize};

/// Conversion policy constants
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionPolicy {
    /// Smallest convertible amount, points
    pub min_convert_points: i64,
    /// Points per wallet credit; amounts must be whole multiples
    pub points_per_credit: i64,
    /// Wallet-conversion cap per calendar month, points
    pub monthly_conversion_limit: i64,
    /// Completed trips required before converting at all
    pub min_trips_for_conversion: u32,
}

impl ConversionPolicy {
    /// Credits granted for a validated amount; exact by the increment rule
    pub fn credits_for(&self, points: i64) -> i64 {
        points / self.points_per_credit
    }
}

impl Default for ConversionPolicy {
    fn default() -> Self {
        Self {
            min_convert_points: 500,
            points_per_credit: 100,
            monthly_conversion_limit: 2000,
            min_trips_for_conversion: 3,
        }
    }
}

/// A proposed conversion with the freshly derived balances it runs against
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionRequest {
    pub points_to_convert: i64,
    pub available_points: i64,
    pub trip_count: u32,
    pub already_converted_this_month: i64,
}

/// Conversion guard
pub struct ConversionGuard {
    policy: ConversionPolicy,
}

impl ConversionGuard {
    /// Create new guard with policy
    pub fn new(policy: ConversionPolicy) -> Self {
        Self { policy }
    }

    /// Create guard with default policy
    pub fn default_v1() -> Self {
        Self::new(ConversionPolicy::default())
    }

    /// Validate a proposed conversion.
    ///
    /// The eligibility gate runs first and is independent of the requested
    /// amount; amount checks follow in a fixed order and the first violated
    /// rule is the rejection reason.
    pub fn validate(&self, request: &ConversionRequest) -> GuardCheckResult {
        let monthly_remaining =
            self.policy.monthly_conversion_limit - request.already_converted_this_month;

        // 1. Eligibility gate: trips, balance floor, headroom for one credit
        let eligible = request.trip_count >= self.policy.min_trips_for_conversion
            && request.available_points >= self.policy.min_convert_points
            && monthly_remaining >= self.policy.points_per_credit;
        if !eligible {
            return GuardCheckResult::fail(EcoError::NotEligible {
                trip_count: request.trip_count,
                available_points: request.available_points,
            });
        }

        // 2. Amount floor
        if request.points_to_convert < self.policy.min_convert_points {
            return GuardCheckResult::fail(EcoError::BelowMinimum {
                requested: request.points_to_convert,
                minimum: self.policy.min_convert_points,
            });
        }

        // 3. Available balance
        if request.points_to_convert > request.available_points {
            return GuardCheckResult::fail(EcoError::InsufficientPoints {
                requested: request.points_to_convert,
                available: request.available_points,
            });
        }

        // 4. Monthly cap
        if request.points_to_convert > monthly_remaining {
            return GuardCheckResult::fail(EcoError::MonthlyCapExceeded {
                requested: request.points_to_convert,
                remaining: monthly_remaining,
            });
        }

        // 5. Whole credits only
        if request.points_to_convert % self.policy.points_per_credit != 0 {
            return GuardCheckResult::fail(EcoError::NotAnIncrement {
                requested: request.points_to_convert,
                increment: self.policy.points_per_credit,
            });
        }

        GuardCheckResult::pass()
    }

    /// Pre-fill amount for the conversion dialog.
    ///
    /// UX convenience only, not part of the validation contract: the largest
    /// whole-credit amount within both the balance and the monthly headroom,
    /// offered only once the balance clears the conversion minimum.
    pub fn suggest_amount(&self, available_points: i64, already_converted_this_month: i64) -> Option<i64> {
        if available_points < self.policy.min_convert_points {
            return None;
        }
        let monthly_remaining =
            (self.policy.monthly_conversion_limit - already_converted_this_month).max(0);
        let step = self.policy.points_per_credit;
        let amount = available_points.min(monthly_remaining) / step * step;
        (amount > 0).then_some(amount)
    }

    /// Get policy reference
    pub fn policy(&self) -> &ConversionPolicy {
        &self.policy
    }
}

impl Default for ConversionGuard {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(points: i64, available: i64, trips: u32, converted: i64) -> ConversionRequest {
        ConversionRequest {
            points_to_convert: points,
            available_points: available,
            trip_count: trips,
            already_converted_this_month: converted,
        }
    }

    #[test]
    fn test_valid_conversion_passes() {
        let guard = ConversionGuard::default_v1();
        let result = guard.validate(&request(500, 1200, 5, 0));
        assert!(result.passed);
        assert_eq!(guard.policy().credits_for(500), 5);
    }

    #[test]
    fn test_trip_floor_rejects_regardless_of_amount() {
        let guard = ConversionGuard::default_v1();
        for points in [100, 500, 2000] {
            let result = guard.validate(&request(points, 500, 2, 0));
            assert_eq!(
                result.into_result(),
                Err(EcoError::NotEligible {
                    trip_count: 2,
                    available_points: 500,
                })
            );
        }
    }

    #[test]
    fn test_balance_floor_gates_eligibility() {
        let guard = ConversionGuard::default_v1();
        let result = guard.validate(&request(400, 499, 5, 0));
        assert!(matches!(
            result.error,
            Some(EcoError::NotEligible { .. })
        ));
    }

    #[test]
    fn test_exhausted_headroom_gates_eligibility() {
        // headroom of 50 cannot fund a single credit
        let guard = ConversionGuard::default_v1();
        let result = guard.validate(&request(100, 1200, 5, 1950));
        assert!(matches!(
            result.error,
            Some(EcoError::NotEligible { .. })
        ));
    }

    #[test]
    fn test_below_minimum_amount() {
        let guard = ConversionGuard::default_v1();
        let result = guard.validate(&request(300, 1200, 5, 0));
        assert_eq!(
            result.into_result(),
            Err(EcoError::BelowMinimum {
                requested: 300,
                minimum: 500,
            })
        );
    }

    #[test]
    fn test_insufficient_balance_for_amount() {
        let guard = ConversionGuard::default_v1();
        let result = guard.validate(&request(1300, 1200, 5, 0));
        assert_eq!(
            result.into_result(),
            Err(EcoError::InsufficientPoints {
                requested: 1300,
                available: 1200,
            })
        );
    }

    #[test]
    fn test_monthly_cap_rejects_oversized_amount() {
        // 500 points of headroom left, 600 requested
        let guard = ConversionGuard::default_v1();
        let result = guard.validate(&request(600, 1200, 5, 1500));
        assert_eq!(
            result.into_result(),
            Err(EcoError::MonthlyCapExceeded {
                requested: 600,
                remaining: 500,
            })
        );
    }

    #[test]
    fn test_rejects_non_increment_even_when_everything_else_holds() {
        let guard = ConversionGuard::default_v1();
        let result = guard.validate(&request(550, 1200, 5, 0));
        assert_eq!(
            result.into_result(),
            Err(EcoError::NotAnIncrement {
                requested: 550,
                increment: 100,
            })
        );
    }

    #[test]
    fn test_suggest_amount_respects_balance_and_headroom() {
        let guard = ConversionGuard::default_v1();

        // balance-bound: 1250 floors to 1200
        assert_eq!(guard.suggest_amount(1250, 0), Some(1200));
        // headroom-bound: only 500 left this month
        assert_eq!(guard.suggest_amount(1250, 1500), Some(500));
        // below the conversion minimum: no suggestion
        assert_eq!(guard.suggest_amount(499, 0), None);
        // cap fully consumed: nothing sensible to suggest
        assert_eq!(guard.suggest_amount(1250, 2000), None);
    }
}
