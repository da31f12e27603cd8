//! Confidence scoring for album suggestions.
//!
//! A suggestion's confidence is the sum of four independently capped
//! components. The exact thresholds are part of the contract: tests and the
//! UI ranking both depend on them bit-for-bit, so tuning them is a breaking
//! change.

use serde::{Deserialize, Serialize};

/// Component breakdown of a suggestion's 0-100 confidence rating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConfidenceScore {
    /// More photos, more confidence. Capped at 30.
    pub photo_count: u8,
    /// Named location beats bare coordinates. Capped at 25.
    pub location: u8,
    /// Tight date ranges look like real trips. Capped at 25.
    pub date_range: u8,
    /// Shots per day. Capped at 20.
    pub density: u8,
}

impl ConfidenceScore {
    /// Score a cluster from its observable facts.
    ///
    /// `day_span` is the whole-day difference between the first and last
    /// capture date (0 when everything was shot on the same calendar day).
    pub fn evaluate(
        photo_count: usize,
        has_location_name: bool,
        has_coordinates: bool,
        day_span: i64,
    ) -> Self {
        let count_points = if photo_count >= 20 {
            30
        } else if photo_count >= 10 {
            25
        } else if photo_count >= 5 {
            20
        } else {
            15
        };

        let location_points = if has_location_name {
            25
        } else if has_coordinates {
            15
        } else {
            0
        };

        let range_points = if day_span <= 7 {
            25
        } else if day_span <= 14 {
            20
        } else if day_span <= 30 {
            15
        } else {
            10
        };

        let per_day = photo_count as f64 / (day_span + 1) as f64;
        let density_points = if per_day >= 5.0 {
            20
        } else if per_day >= 3.0 {
            15
        } else if per_day >= 1.0 {
            10
        } else {
            5
        };

        Self {
            photo_count: count_points,
            location: location_points,
            date_range: range_points,
            density: density_points,
        }
    }

    /// Total confidence, clamped to 100.
    pub fn total(&self) -> u8 {
        let sum = u16::from(self.photo_count)
            + u16::from(self.location)
            + u16::from(self.date_range)
            + u16::from(self.density);
        sum.min(100) as u8
    }

    /// Human-readable confidence band.
    pub fn category(&self) -> &'static str {
        match self.total() {
            t if t >= 80 => "Strong",
            t if t >= 60 => "Good",
            t if t >= 40 => "Fair",
            _ => "Weak",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_count_bands() {
        assert_eq!(ConfidenceScore::evaluate(25, false, false, 0).photo_count, 30);
        assert_eq!(ConfidenceScore::evaluate(20, false, false, 0).photo_count, 30);
        assert_eq!(ConfidenceScore::evaluate(12, false, false, 0).photo_count, 25);
        assert_eq!(ConfidenceScore::evaluate(5, false, false, 0).photo_count, 20);
        assert_eq!(ConfidenceScore::evaluate(3, false, false, 0).photo_count, 15);
    }

    #[test]
    fn test_location_bands() {
        assert_eq!(ConfidenceScore::evaluate(3, true, true, 0).location, 25);
        assert_eq!(ConfidenceScore::evaluate(3, false, true, 0).location, 15);
        assert_eq!(ConfidenceScore::evaluate(3, false, false, 0).location, 0);
    }

    #[test]
    fn test_date_range_bands() {
        assert_eq!(ConfidenceScore::evaluate(3, false, false, 0).date_range, 25);
        assert_eq!(ConfidenceScore::evaluate(3, false, false, 7).date_range, 25);
        assert_eq!(ConfidenceScore::evaluate(3, false, false, 8).date_range, 20);
        assert_eq!(ConfidenceScore::evaluate(3, false, false, 14).date_range, 20);
        assert_eq!(ConfidenceScore::evaluate(3, false, false, 30).date_range, 15);
        assert_eq!(ConfidenceScore::evaluate(3, false, false, 31).date_range, 10);
    }

    #[test]
    fn test_density_bands() {
        // 10 photos in one day: 10/day.
        assert_eq!(ConfidenceScore::evaluate(10, false, false, 0).density, 20);
        // 10 photos over 3 days (span 2): ~3.3/day.
        assert_eq!(ConfidenceScore::evaluate(10, false, false, 2).density, 15);
        // 10 photos over 8 days (span 7): 1.25/day.
        assert_eq!(ConfidenceScore::evaluate(10, false, false, 7).density, 10);
        // 3 photos over 10 days (span 9): 0.3/day.
        assert_eq!(ConfidenceScore::evaluate(3, false, false, 9).density, 5);
    }

    #[test]
    fn test_total_is_component_sum_capped_at_100() {
        // Best case across all components sums to exactly 100.
        let best = ConfidenceScore::evaluate(20, true, true, 0);
        assert_eq!(best.total(), 100);

        let weak = ConfidenceScore::evaluate(3, false, false, 45);
        assert_eq!(weak.total(), 15 + 0 + 10 + 5);
    }

    #[test]
    fn test_categories() {
        assert_eq!(ConfidenceScore::evaluate(20, true, true, 0).category(), "Strong");
        assert_eq!(ConfidenceScore::evaluate(5, false, true, 3).category(), "Good");
        assert_eq!(ConfidenceScore::evaluate(3, false, false, 10).category(), "Fair");
        assert_eq!(ConfidenceScore::evaluate(3, false, false, 45).category(), "Weak");
    }
}
