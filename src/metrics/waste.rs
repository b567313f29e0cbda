//! WASTE: landfill emissions net of diversion credits
//!
//! weekly = landfill × 0.5 − recycled × 2.0 − compost × 0.3 (reference
//! factors). The net can go negative when diversion outweighs landfill; such
//! households are reported as having saved CO₂e rather than shown a bare
//! negative number.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_quantity, EngineResult};
use crate::metrics::{default_household_size, WEEKS_PER_YEAR};
use crate::utils::breakdown::build_breakdown;
use crate::utils::normalization::share_percent;
use crate::utils::{BreakdownEntry, EngineConfig, WasteStream};

/// Weekly waste by destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteInput {
    #[serde(default)]
    pub landfill_kg_week: f64,
    #[serde(default)]
    pub recycled_kg_week: f64,
    #[serde(default)]
    pub compost_kg_week: f64,
    #[serde(default = "default_household_size")]
    pub household_size: u32,
}

impl WasteInput {
    pub fn new(landfill_kg_week: f64, recycled_kg_week: f64, compost_kg_week: f64, household_size: u32) -> Self {
        Self {
            landfill_kg_week,
            recycled_kg_week,
            compost_kg_week,
            household_size,
        }
    }

    pub fn diverted_kg_week(&self) -> f64 {
        self.recycled_kg_week + self.compost_kg_week
    }

    pub fn total_kg_week(&self) -> f64 {
        self.landfill_kg_week + self.diverted_kg_week()
    }

    /// Share of waste kept out of landfill (0-100), 0 when nothing is reported
    pub fn recycling_rate(&self) -> f64 {
        share_percent(self.diverted_kg_week(), self.total_kg_week())
    }

    /// kg per person per week, `None` when household size is 0
    pub fn waste_per_person(&self) -> Option<f64> {
        (self.household_size > 0).then(|| self.total_kg_week() / self.household_size as f64)
    }
}

/// Direction of the net waste figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetImpact {
    Emitted,
    Saved,
}

impl NetImpact {
    pub fn from_net(net_kg: f64) -> Self {
        if net_kg < 0.0 {
            NetImpact::Saved
        } else {
            NetImpact::Emitted
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NetImpact::Emitted => "emitted",
            NetImpact::Saved => "saved",
        }
    }
}

/// Recycling rate at or above this is rated Excellent (%)
const EXCELLENT_MIN_RATE: f64 = 70.0;
/// Recycling rate at or above this is rated Good (%)
const GOOD_MIN_RATE: f64 = 40.0;

/// Qualitative band for the share of waste kept out of landfill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiversionRating {
    Excellent,
    Good,
    NeedsImprovement,
}

impl DiversionRating {
    pub fn from_rate(recycling_rate: f64) -> Self {
        if recycling_rate >= EXCELLENT_MIN_RATE {
            DiversionRating::Excellent
        } else if recycling_rate >= GOOD_MIN_RATE {
            DiversionRating::Good
        } else {
            DiversionRating::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiversionRating::Excellent => "Excellent waste management!",
            DiversionRating::Good => "Good progress, room for improvement",
            DiversionRating::NeedsImprovement => "Consider increasing recycling and composting",
        }
    }
}

/// Result of the waste calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteResult {
    /// Signed kg CO₂e per week (negative = net saving)
    pub weekly_emissions_kg: f64,
    /// Signed kg CO₂e per year
    pub annual_emissions_kg: f64,
    pub net_impact: NetImpact,
    /// |annual|, for display next to `net_impact`
    pub annual_magnitude_kg: f64,
    /// 0-100
    pub recycling_rate: f64,
    pub diversion_rating: DiversionRating,
    pub waste_per_person_kg: f64,
    pub diverted_kg_week: f64,
    /// Landfill, Recycling, Compost (annual, credits negative)
    pub breakdown: Vec<BreakdownEntry>,
}

impl WasteResult {
    /// e.g. "489 kg CO₂e saved per year"
    pub fn summary_label(&self) -> String {
        format!(
            "{} kg CO₂e {} per year",
            self.annual_magnitude_kg.round() as i64,
            self.net_impact.label()
        )
    }
}

/// Calculate waste emissions
///
/// Returns `Ok(None)` when landfill weight or household size is 0.
pub fn calculate_waste(input: &WasteInput, config: &EngineConfig) -> EngineResult<Option<WasteResult>> {
    let landfill = ensure_quantity("landfill_kg_week", input.landfill_kg_week)?;
    let recycled = ensure_quantity("recycled_kg_week", input.recycled_kg_week)?;
    let compost = ensure_quantity("compost_kg_week", input.compost_kg_week)?;

    let waste_per_person_kg = match input.waste_per_person() {
        Some(per_person) if landfill > 0.0 => per_person,
        _ => {
            tracing::debug!(
                "Waste input incomplete (landfill={}, household_size={})",
                landfill,
                input.household_size
            );
            return Ok(None);
        }
    };

    let factors = &config.factors;
    let landfill_weekly = landfill * factors.waste(WasteStream::Landfill)?;
    let recycling_weekly = recycled * factors.waste(WasteStream::Recycling)?;
    let compost_weekly = compost * factors.waste(WasteStream::Compost)?;

    let weekly_emissions_kg = landfill_weekly + recycling_weekly + compost_weekly;
    let annual_emissions_kg = weekly_emissions_kg * WEEKS_PER_YEAR;

    let recycling_rate = input.recycling_rate();
    // Shares of Σ|amount|: credits are negative, so the signed net can be 0
    let breakdown = build_breakdown(&[
        ("Landfill", landfill_weekly * WEEKS_PER_YEAR),
        ("Recycling", recycling_weekly * WEEKS_PER_YEAR),
        ("Compost", compost_weekly * WEEKS_PER_YEAR),
    ]);

    Ok(Some(WasteResult {
        weekly_emissions_kg,
        annual_emissions_kg,
        net_impact: NetImpact::from_net(weekly_emissions_kg),
        annual_magnitude_kg: annual_emissions_kg.abs(),
        recycling_rate,
        diversion_rating: DiversionRating::from_rate(recycling_rate),
        waste_per_person_kg,
        diverted_kg_week: input.diverted_kg_week(),
        breakdown,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn calc(landfill: f64, recycled: f64, compost: f64, household: u32) -> Option<WasteResult> {
        calculate_waste(&WasteInput::new(landfill, recycled, compost, household), &EngineConfig::default())
            .unwrap()
    }

    #[test]
    fn test_diverting_household_saves() {
        let result = calc(15.0, 8.0, 3.0, 2).unwrap();
        assert_relative_eq!(result.weekly_emissions_kg, -9.4, epsilon = 1e-9);
        assert_eq!(result.annual_emissions_kg.round(), -489.0);
        assert_eq!(result.net_impact, NetImpact::Saved);
        assert_eq!(result.summary_label(), "489 kg CO₂e saved per year");
        assert_eq!(result.recycling_rate.round(), 42.0);
        assert_relative_eq!(result.waste_per_person_kg, 13.0);
        assert_relative_eq!(result.diverted_kg_week, 11.0);
    }

    #[test]
    fn test_no_diversion_has_no_credit() {
        for landfill in [0.5, 1.0, 7.3, 15.0, 42.0] {
            let result = calc(landfill, 0.0, 0.0, 1).unwrap();
            assert_eq!(result.weekly_emissions_kg, landfill * 0.5);
            assert_eq!(result.net_impact, NetImpact::Emitted);
            assert_eq!(result.recycling_rate, 0.0);
        }
    }

    #[test]
    fn test_breakdown_matches_net_total() {
        let result = calc(15.0, 8.0, 3.0, 2).unwrap();
        let total: f64 = result.breakdown.iter().map(|e| e.amount).sum();
        assert_relative_eq!(total, result.annual_emissions_kg, epsilon = 1e-6);
        assert!(result.breakdown[1].amount < 0.0);
        let pct: f64 = result.breakdown.iter().map(|e| e.percentage_of_total).sum();
        assert_eq!(pct, 100.0);
    }

    #[test]
    fn test_net_zero_household_keeps_gross_shares() {
        let result = calc(4.0, 1.0, 0.0, 1).unwrap();
        assert_eq!(result.weekly_emissions_kg, 0.0);
        assert_eq!(result.annual_emissions_kg, 0.0);
        assert_eq!(result.net_impact, NetImpact::Emitted);

        let pct: Vec<f64> = result.breakdown.iter().map(|e| e.percentage_of_total).collect();
        assert_eq!(pct, vec![50.0, 50.0, 0.0]);
        assert_eq!(result.breakdown[0].amount, 104.0);
        assert_eq!(result.breakdown[1].amount, -104.0);
    }

    #[test]
    fn test_diversion_rating_bands() {
        assert_eq!(DiversionRating::from_rate(39.9), DiversionRating::NeedsImprovement);
        assert_eq!(DiversionRating::from_rate(40.0), DiversionRating::Good);
        assert_eq!(DiversionRating::from_rate(69.9), DiversionRating::Good);
        assert_eq!(DiversionRating::from_rate(70.0), DiversionRating::Excellent);

        // 11 of 26 kg diverted
        assert_eq!(calc(15.0, 8.0, 3.0, 2).unwrap().diversion_rating, DiversionRating::Good);
        // 8 of 10 kg diverted
        let result = calc(2.0, 6.0, 2.0, 2).unwrap();
        assert_eq!(result.diversion_rating.label(), "Excellent waste management!");
        assert_eq!(
            calc(20.0, 1.0, 0.0, 1).unwrap().diversion_rating.label(),
            "Consider increasing recycling and composting"
        );
    }

    #[test]
    fn test_incomplete_input() {
        assert!(calc(0.0, 5.0, 1.0, 2).is_none());
        assert!(calc(10.0, 5.0, 1.0, 0).is_none());
    }

    #[test]
    fn test_recycling_rate_zero_denominator() {
        let input = WasteInput::new(0.0, 0.0, 0.0, 1);
        assert_eq!(input.recycling_rate(), 0.0);
    }
}
