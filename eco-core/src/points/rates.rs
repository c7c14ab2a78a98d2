//! Earning Rates Configuration

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Scoring constants for the points pipeline.
///
/// The baseline models the average solo car commute a parked trip replaces;
/// savings are always measured against it, never against other trips.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EarningRates {
    /// Baseline commute distance, km
    pub baseline_distance_km: Decimal,
    /// Emission factor, grams CO2 per km
    pub emission_factor_g_per_km: Decimal,
    /// Grams of CO2 savings per point
    pub co2_points_divisor: Decimal,
    /// Points per km of distance saved
    pub distance_points_per_km: Decimal,
    /// Flat bonus for off-peak starts
    pub off_peak_bonus_points: i64,
    /// Hour at which the evening off-peak window opens (inclusive)
    pub off_peak_start_hour: u32,
    /// Hour at which the morning off-peak window closes (exclusive)
    pub off_peak_end_hour: u32,
}

impl EarningRates {
    /// Baseline commute CO2, grams
    pub fn baseline_co2_grams(&self) -> Decimal {
        self.baseline_distance_km * self.emission_factor_g_per_km
    }

    /// Whether a local start hour falls in the off-peak window
    pub fn is_off_peak_hour(&self, hour: u32) -> bool {
        hour < self.off_peak_end_hour || hour >= self.off_peak_start_hour
    }
}

impl Default for EarningRates {
    fn default() -> Self {
        Self {
            baseline_distance_km: Decimal::new(5, 0),
            emission_factor_g_per_km: Decimal::new(250, 0),
            co2_points_divisor: Decimal::new(10, 0),
            distance_points_per_km: Decimal::new(15, 0),
            off_peak_bonus_points: 50,
            off_peak_start_hour: 19,
            off_peak_end_hour: 7,
        }
    }
}
