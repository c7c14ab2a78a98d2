//! Activity Summarizer
//!
//! Folds a user's reservation history into totals plus a capped
//! recent-activity feed. Stateless: the summary is recomputed from the
//! reservation list on every call, never cached.

use crate::points::{parse_trip_time, PointsCalculator};
use crate::types::{ActivityItem, ActivityKind, ActivitySummary, ReservationFact};
use rust_decimal::Decimal;

/// Entries shown in the recent-activity feed
pub const RECENT_ACTIVITY_LIMIT: usize = 3;

/// Activity summarizer
pub struct ActivitySummarizer {
    calculator: PointsCalculator,
}

impl ActivitySummarizer {
    pub fn new(calculator: PointsCalculator) -> Self {
        Self { calculator }
    }

    /// Summarize a reservation history in input order.
    ///
    /// The first [`RECENT_ACTIVITY_LIMIT`] trips become the recent-activity
    /// feed; both the order and the cap are fixed contract behavior.
    pub fn summarize(&self, facts: &[ReservationFact]) -> ActivitySummary {
        let mut summary = ActivitySummary::empty();
        let mut total_savings_grams = Decimal::ZERO;

        for fact in facts {
            let breakdown = self.calculator.compute(fact);
            summary.total_points += breakdown.points;
            total_savings_grams += breakdown.co2_savings_grams;
            summary.trip_count += 1;

            if summary.recent_activity.len() < RECENT_ACTIVITY_LIMIT {
                let kind = if breakdown.off_peak_bonus > 0 {
                    ActivityKind::OffPeak
                } else if breakdown.co2_savings_grams > Decimal::ZERO {
                    ActivityKind::EcoFriendly
                } else {
                    ActivityKind::Smart
                };
                summary.recent_activity.push(ActivityItem {
                    kind,
                    occurred_on: short_date(&fact.start_time),
                    points: breakdown.points,
                });
            }
        }

        summary.total_savings_kg = total_savings_grams / Decimal::new(1000, 0);
        summary
    }

    /// Get calculator reference
    pub fn calculator(&self) -> &PointsCalculator {
        &self.calculator
    }
}

impl Default for ActivitySummarizer {
    fn default() -> Self {
        Self::new(PointsCalculator::default_v1())
    }
}

/// Short display date for a trip, empty when the start time does not parse
fn short_date(start_time: &str) -> String {
    parse_trip_time(start_time)
        .map(|dt| dt.format("%b %-d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(start_time: &str, distance_km: i64) -> ReservationFact {
        ReservationFact::new(start_time).with_distance_km(Decimal::new(distance_km, 0))
    }

    #[test]
    fn test_empty_history_yields_zero_summary() {
        let summary = ActivitySummarizer::default().summarize(&[]);
        assert_eq!(summary, ActivitySummary::empty());
    }

    #[test]
    fn test_totals_accumulate_across_trips() {
        let summarizer = ActivitySummarizer::default();
        let facts = vec![
            trip("2025-03-05T08:00:00+01:00", 2),
            trip("2025-03-06T20:00:00+01:00", 2),
        ];
        let summary = summarizer.summarize(&facts);

        assert_eq!(summary.trip_count, 2);
        assert_eq!(summary.total_points, 290);
        // 750 g twice
        assert_eq!(summary.total_savings_kg, Decimal::new(15, 1));
    }

    #[test]
    fn test_recent_activity_caps_at_first_three() {
        let summarizer = ActivitySummarizer::default();
        let facts = vec![
            trip("2025-03-01T08:00:00+01:00", 2),
            trip("2025-03-02T08:00:00+01:00", 2),
            trip("2025-03-03T08:00:00+01:00", 2),
            trip("2025-03-04T08:00:00+01:00", 2),
        ];
        let summary = summarizer.summarize(&facts);

        assert_eq!(summary.trip_count, 4);
        assert_eq!(summary.recent_activity.len(), 3);
        assert_eq!(summary.recent_activity[0].occurred_on, "Mar 1");
        assert_eq!(summary.recent_activity[2].occurred_on, "Mar 3");
    }

    #[test]
    fn test_labels_prefer_off_peak_over_eco() {
        let summarizer = ActivitySummarizer::default();
        let facts = vec![
            // off-peak and eco at once: off-peak wins
            trip("2025-03-05T20:00:00+01:00", 2),
            // eco only
            trip("2025-03-05T08:00:00+01:00", 2),
            // no data at all
            ReservationFact::new("2025-03-05T08:00:00+01:00"),
        ];
        let summary = summarizer.summarize(&facts);

        assert_eq!(summary.recent_activity[0].kind, ActivityKind::OffPeak);
        assert_eq!(summary.recent_activity[1].kind, ActivityKind::EcoFriendly);
        assert_eq!(summary.recent_activity[2].kind, ActivityKind::Smart);
    }

    #[test]
    fn test_unparseable_date_leaves_label_blank() {
        let summarizer = ActivitySummarizer::default();
        let summary = summarizer.summarize(&[ReservationFact::new("whenever")]);
        assert_eq!(summary.recent_activity[0].occurred_on, "");
    }
}
