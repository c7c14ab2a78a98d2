//! Conversion Guard
//!
//! Every points-to-credit conversion must pass through the guard before any
//! external call is made:
//! - eligibility gate: trip floor, balance floor, monthly headroom
//! - amount checks: minimum, available balance, monthly cap, credit increment

mod conversion;

pub use conversion::{ConversionGuard, ConversionPolicy, ConversionRequest};

use crate::error::{EcoError, EcoResult};

/// Guard check result
#[derive(Clone, Debug)]
pub struct GuardCheckResult {
    pub passed: bool,
    pub error: Option<EcoError>,
}

impl GuardCheckResult {
    pub fn pass() -> Self {
        Self {
            passed: true,
            error: None,
        }
    }

    pub fn fail(error: EcoError) -> Self {
        Self {
            passed: false,
            error: Some(error),
        }
    }

    /// Convert into a `Result`, surfacing the rejection reason verbatim
    pub fn into_result(self) -> EcoResult<()> {
        match self.error {
            None => Ok(()),
            Some(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_converts_to_ok() {
        assert!(GuardCheckResult::pass().into_result().is_ok());
    }

    #[test]
    fn test_fail_carries_reason_verbatim() {
        let result = GuardCheckResult::fail(EcoError::NotEligible {
            trip_count: 2,
            available_points: 500,
        });
        assert!(!result.passed);
        assert_eq!(
            result.into_result(),
            Err(EcoError::NotEligible {
                trip_count: 2,
                available_points: 500,
            })
        );
    }
}
