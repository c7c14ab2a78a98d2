//! Points Calculator
//!
//! Implements the trip scoring pipeline:
//! 1. Derive trip CO2 from the estimate, else from distance, else baseline
//! 2. Distance savings against the baseline commute
//! 3. CO2 savings against the baseline commute
//! 4. Off-peak bonus from the trip's local start hour
//! 5. Round and floor at zero
//!
//! Pure: identical input yields identical output across calls, and a trip
//! with no distance or CO2 data scores zero savings rather than a penalty.

use super::EarningRates;
use crate::types::{PointsBreakdown, ReservationFact};
use chrono::{DateTime, NaiveDateTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Points calculator
pub struct PointsCalculator {
    /// Scoring rates
    rates: EarningRates,
}

impl PointsCalculator {
    /// Create new calculator with rates
    pub fn new(rates: EarningRates) -> Self {
        Self { rates }
    }

    /// Create calculator with default rates
    pub fn default_v1() -> Self {
        Self::new(EarningRates::default())
    }

    /// Score a single trip
    pub fn compute(&self, fact: &ReservationFact) -> PointsBreakdown {
        let baseline_co2 = self.rates.baseline_co2_grams();

        // Step 1: derive trip CO2. No data at all means the trip is assumed
        // to match the baseline, yielding zero savings.
        let derived_co2 = match (fact.co2_estimated_grams, fact.distance_km) {
            (Some(grams), _) => grams,
            (None, Some(km)) => km * self.rates.emission_factor_g_per_km,
            (None, None) => baseline_co2,
        };

        // Step 2: distance savings against the baseline commute
        let distance_savings_km = fact
            .distance_km
            .map(|km| (self.rates.baseline_distance_km - km).max(Decimal::ZERO))
            .unwrap_or(Decimal::ZERO);

        // Step 3: CO2 savings against the baseline commute
        let co2_savings_grams = (baseline_co2 - derived_co2).max(Decimal::ZERO);

        // Step 4: off-peak bonus; an unparseable start time earns none
        let off_peak_bonus = match local_start_hour(&fact.start_time) {
            Some(hour) if self.rates.is_off_peak_hour(hour) => self.rates.off_peak_bonus_points,
            _ => 0,
        };

        // Step 5: round half away from zero, floor at zero
        let raw = co2_savings_grams / self.rates.co2_points_divisor
            + distance_savings_km * self.rates.distance_points_per_km
            + Decimal::from(off_peak_bonus);
        let points = raw
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .unwrap_or(0)
            .max(0);

        PointsBreakdown {
            points,
            co2_savings_grams,
            distance_km: fact.distance_km,
            off_peak_bonus,
        }
    }

    /// Score a sequence of trips in input order
    pub fn compute_batch(&self, facts: &[ReservationFact]) -> Vec<PointsBreakdown> {
        facts.iter().map(|fact| self.compute(fact)).collect()
    }

    /// Get rates reference
    pub fn rates(&self) -> &EarningRates {
        &self.rates
    }
}

impl Default for PointsCalculator {
    fn default() -> Self {
        Self::default_v1()
    }
}

/// Parse a trip start time into the trip's own local clock.
///
/// RFC 3339 timestamps keep their own offset; timestamps without an offset
/// are read as-is. Anything else yields `None`.
pub(crate) fn parse_trip_time(start_time: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(start_time) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(start_time, "%Y-%m-%dT%H:%M:%S").ok()
}

/// Extract the trip's local start hour
pub(crate) fn local_start_hour(start_time: &str) -> Option<u32> {
    parse_trip_time(start_time).map(|dt| dt.hour())
}
