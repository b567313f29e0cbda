//! Normalization Utilities
//!
//! Converts raw category quantities into the 0-100 scores and the
//! benchmark comparisons shown next to every result.

use serde::{Deserialize, Serialize};

/// Clamp a score into [0, 100]
///
/// NaN collapses to 0 so a score is always displayable.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}

/// Linear score falling from 100 at `best` to 0 at `worst`
///
/// Values better than `best` stay at 100; worse than `worst` stay at 0.
pub fn linear_decay_score(value: f64, best: f64, worst: f64) -> f64 {
    let span = worst - best;
    if span <= 0.0 {
        return if value <= best { 100.0 } else { 0.0 };
    }
    clamp_score(100.0 - (value - best) / span * 100.0)
}

/// `part / whole × 100`, defined as 0 when `whole` is 0
pub fn share_percent(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Which side of the benchmark a value falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonDirection {
    Above,
    Below,
}

/// Comparison of a value against a fixed peer benchmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerComparison {
    /// Value being compared (same unit as the benchmark)
    pub value: f64,
    pub benchmark: f64,
    /// |value − benchmark| / benchmark × 100, unrounded
    pub percentage: f64,
    pub direction: ComparisonDirection,
}

impl PeerComparison {
    /// Compare `value` to `benchmark`
    ///
    /// A value equal to the benchmark reads as "0% above average".
    pub fn against(value: f64, benchmark: f64) -> Self {
        let direction = if value >= benchmark {
            ComparisonDirection::Above
        } else {
            ComparisonDirection::Below
        };

        Self {
            value,
            benchmark,
            percentage: share_percent((value - benchmark).abs(), benchmark),
            direction,
        }
    }

    pub fn is_above(&self) -> bool {
        self.direction == ComparisonDirection::Above
    }

    /// Presentation label, e.g. "12% below average"
    pub fn label(&self) -> String {
        let side = match self.direction {
            ComparisonDirection::Above => "above",
            ComparisonDirection::Below => "below",
        };
        format!("{}% {} average", self.percentage.round() as i64, side)
    }

    /// Progress toward the benchmark, capped at 100
    pub fn progress(&self) -> f64 {
        share_percent(self.value, self.benchmark).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(-5.0), 0.0);
        assert_eq!(clamp_score(150.0), 100.0);
        assert_eq!(clamp_score(42.5), 42.5);
        assert_eq!(clamp_score(f64::NAN), 0.0);
    }

    #[test]
    fn test_linear_decay_score() {
        assert_relative_eq!(linear_decay_score(100.0, 100.0, 300.0), 100.0);
        assert_relative_eq!(linear_decay_score(50.0, 100.0, 300.0), 100.0);
        assert_relative_eq!(linear_decay_score(150.0, 100.0, 300.0), 75.0);
        assert_relative_eq!(linear_decay_score(300.0, 100.0, 300.0), 0.0);
        assert_relative_eq!(linear_decay_score(900.0, 100.0, 300.0), 0.0);
    }

    #[test]
    fn test_share_percent_zero_whole() {
        assert_eq!(share_percent(5.0, 0.0), 0.0);
        assert_relative_eq!(share_percent(11.0, 26.0), 42.307692, epsilon = 1e-5);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.1234, 2), 0.12);
        assert_eq!(round_to(-9.399999, 1), -9.4);
        assert_eq!(round_to(292.5, 0), 293.0);
    }

    #[test]
    fn test_comparison_labels() {
        assert_eq!(PeerComparison::against(450.0, 450.0).label(), "0% above average");
        assert_eq!(PeerComparison::against(540.0, 450.0).label(), "20% above average");
        assert_eq!(PeerComparison::against(360.0, 450.0).label(), "20% below average");

        let c = PeerComparison::against(1638.0, 2300.0);
        assert!(!c.is_above());
        assert_relative_eq!(c.progress(), 1638.0 / 2300.0 * 100.0);
        assert_eq!(PeerComparison::against(5000.0, 2300.0).progress(), 100.0);
    }
}
