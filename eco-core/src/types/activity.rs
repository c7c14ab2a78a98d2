//! Trip Facts and Activity Summaries

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw trip input, supplied per reservation by the reservation source.
///
/// Immutable once fetched. `start_time` is carried verbatim from the source
/// and may not parse; distance and CO2 estimates are optional. Missing or
/// malformed fields are data, not errors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReservationFact {
    /// Trip start timestamp, RFC 3339 with the trip's local offset
    pub start_time: String,
    /// Trip distance in kilometers
    #[serde(default)]
    pub distance_km: Option<Decimal>,
    /// Pre-computed CO2 estimate in grams, overrides the distance derivation
    #[serde(default)]
    pub co2_estimated_grams: Option<Decimal>,
}

impl ReservationFact {
    pub fn new(start_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            distance_km: None,
            co2_estimated_grams: None,
        }
    }

    pub fn with_distance_km(mut self, km: Decimal) -> Self {
        self.distance_km = Some(km);
        self
    }

    pub fn with_co2_grams(mut self, grams: Decimal) -> Self {
        self.co2_estimated_grams = Some(grams);
        self
    }
}

/// Per-trip scoring output.
///
/// Derived, never stored: recomputed from the [`ReservationFact`] on every
/// read, so it has no lifecycle of its own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    /// Points earned by the trip
    pub points: i64,
    /// CO2 saved relative to the baseline commute, grams
    pub co2_savings_grams: Decimal,
    /// Trip distance, echoed from the fact
    pub distance_km: Option<Decimal>,
    /// Off-peak bonus component of `points`
    pub off_peak_bonus: i64,
}

impl PointsBreakdown {
    /// Verify breakdown invariant: all components non-negative
    pub fn verify_invariant(&self) -> bool {
        self.points >= 0 && self.co2_savings_grams >= Decimal::ZERO && self.off_peak_bonus >= 0
    }
}

/// Activity entry classification, in priority order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Trip started outside peak hours
    OffPeak,
    /// Trip saved CO2 relative to the baseline
    EcoFriendly,
    /// Everything else
    Smart,
}

impl ActivityKind {
    /// Fixed display label
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::OffPeak => "Off-peak booking",
            ActivityKind::EcoFriendly => "Eco-friendly booking",
            ActivityKind::Smart => "Smart booking",
        }
    }
}

/// One recent-activity line
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    /// Short formatted trip date, empty when the start time does not parse
    pub occurred_on: String,
    /// Points the trip earned
    pub points: i64,
}

/// Aggregated view over a user's reservation history.
///
/// Recomputed whenever the reservation list changes; no persistence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub total_points: i64,
    pub trip_count: u32,
    /// Total CO2 savings, kilograms
    pub total_savings_kg: Decimal,
    /// First trips in input order, capped
    pub recent_activity: Vec<ActivityItem>,
}

impl ActivitySummary {
    /// All-zero summary for an empty history
    pub fn empty() -> Self {
        Self {
            total_points: 0,
            trip_count: 0,
            total_savings_kg: Decimal::ZERO,
            recent_activity: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_kind_labels() {
        assert_eq!(ActivityKind::OffPeak.label(), "Off-peak booking");
        assert_eq!(ActivityKind::EcoFriendly.label(), "Eco-friendly booking");
        assert_eq!(ActivityKind::Smart.label(), "Smart booking");
    }

    #[test]
    fn test_empty_summary() {
        let summary = ActivitySummary::empty();
        assert_eq!(summary.total_points, 0);
        assert_eq!(summary.trip_count, 0);
        assert_eq!(summary.total_savings_kg, Decimal::ZERO);
        assert!(summary.recent_activity.is_empty());
    }

    #[test]
    fn test_breakdown_invariant() {
        let breakdown = PointsBreakdown {
            points: 120,
            co2_savings_grams: Decimal::new(750, 0),
            distance_km: Some(Decimal::new(2, 0)),
            off_peak_bonus: 0,
        };
        assert!(breakdown.verify_invariant());

        let negative = PointsBreakdown {
            points: -1,
            ..breakdown
        };
        assert!(!negative.verify_invariant());
    }
}
