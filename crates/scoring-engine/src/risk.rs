//! Risk Tier Banding

use crate::engine::DECISION_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Urgency band derived from the leave probability.
///
/// Variant order is ascending urgency, so tiers compare with `<`/`>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    /// Predicted to stay; no action indicated
    Low,
    /// Predicted to stay, but close enough to warrant watching
    Monitor,
    /// Predicted to leave
    Moderate,
    /// Predicted to leave with high probability
    High,
}

impl RiskTier {
    /// String form used in responses and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Monitor => "monitor",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
        }
    }
}

/// Banding thresholds applied on top of the decision threshold.
///
/// Tiers are monotone in the leave probability and band edges align with
/// [`DECISION_THRESHOLD`], so a tier never contradicts the label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskPolicy {
    /// Probabilities strictly above this band as High
    pub high_floor: f64,
    /// Stay-labeled probabilities strictly above this band as Monitor
    pub monitor_floor: f64,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            high_floor: 0.7,
            monitor_floor: 0.3,
        }
    }
}

impl RiskPolicy {
    /// Band a leave probability into a tier
    pub fn tier(&self, probability: f64) -> RiskTier {
        if probability > self.high_floor {
            RiskTier::High
        } else if probability >= DECISION_THRESHOLD {
            RiskTier::Moderate
        } else if probability > self.monitor_floor {
            RiskTier::Monitor
        } else {
            RiskTier::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_bands() {
        let policy = RiskPolicy::default();

        assert_eq!(policy.tier(0.82), RiskTier::High);
        assert_eq!(policy.tier(0.55), RiskTier::Moderate);
        assert_eq!(policy.tier(0.35), RiskTier::Monitor);
        assert_eq!(policy.tier(0.10), RiskTier::Low);
    }

    #[test]
    fn test_band_edges() {
        let policy = RiskPolicy::default();

        // Floors are exclusive; the decision threshold is inclusive.
        assert_eq!(policy.tier(0.7), RiskTier::Moderate);
        assert_eq!(policy.tier(0.5), RiskTier::Moderate);
        assert_eq!(policy.tier(0.3), RiskTier::Low);
    }

    #[test]
    fn test_custom_policy() {
        let policy = RiskPolicy {
            high_floor: 0.9,
            monitor_floor: 0.1,
        };

        assert_eq!(policy.tier(0.85), RiskTier::Moderate);
        assert_eq!(policy.tier(0.2), RiskTier::Monitor);
        assert_eq!(policy.tier(0.05), RiskTier::Low);
    }

    #[test]
    fn test_tiers_are_monotone() {
        let policy = RiskPolicy::default();

        let mut last = policy.tier(0.0);
        for step in 1..=100 {
            let tier = policy.tier(step as f64 / 100.0);
            assert!(tier >= last, "tier regressed at p={}", step as f64 / 100.0);
            last = tier;
        }
    }
}
