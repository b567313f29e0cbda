//! Footprint Scorer - main coordinator for a household assessment
//!
//! Runs each calculator whose input is present, ranks suggestions for the same
//! categories and rolls the results into a `FootprintSummary`. Categories are
//! independent: an incomplete electricity input does not stop transport from
//! being scored.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::EngineResult;
use crate::metrics::*;
use crate::suggestions::{merge_ranked, rank_electricity, rank_transport, rank_waste, rank_water, Suggestion};
use crate::summary::FootprintSummary;
use crate::utils::EngineConfig;

/// Everything a household reported; any category may be left out
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseholdInput {
    pub electricity: Option<ElectricityInput>,
    pub transport: Option<TransportInput>,
    pub water: Option<WaterInput>,
    pub waste: Option<WasteInput>,
}

/// Full assessment for one household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdReport {
    pub electricity: Option<ElectricityResult>,
    pub transport: Option<TransportResult>,
    pub water: Option<WaterResult>,
    pub waste: Option<WasteResult>,
    pub summary: FootprintSummary,
    /// Merged across categories, most important first
    pub suggestions: Vec<Suggestion>,
}

/// Main footprint scorer
#[derive(Debug, Clone, Default)]
pub struct FootprintScorer {
    config: EngineConfig,
}

impl FootprintScorer {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score one household
    ///
    /// Suggestions are ranked for every category that has an input, even when
    /// the calculator returned no result for it.
    pub fn assess(&self, input: &HouseholdInput) -> EngineResult<HouseholdReport> {
        let config = &self.config;
        let mut ranked: Vec<Vec<Suggestion>> = Vec::with_capacity(4);

        let electricity = match &input.electricity {
            Some(e) => {
                let result = calculate_electricity(e, config)?;
                ranked.push(rank_electricity(e, result.as_ref())?);
                result
            }
            None => None,
        };

        let transport = match &input.transport {
            Some(t) => {
                let result = calculate_transport(t, config)?;
                ranked.push(rank_transport(t, config)?);
                Some(result)
            }
            None => None,
        };

        let water = match &input.water {
            Some(w) => {
                let result = calculate_water(w, config)?;
                ranked.push(rank_water(w, result.as_ref(), config)?);
                result
            }
            None => None,
        };

        let waste = match &input.waste {
            Some(w) => {
                let result = calculate_waste(w, config)?;
                ranked.push(rank_waste(w, config)?);
                result
            }
            None => None,
        };

        let summary = FootprintSummary::from_results(
            electricity.as_ref(),
            transport.as_ref(),
            water.as_ref(),
            waste.as_ref(),
        );
        let suggestions = merge_ranked(ranked);

        debug!(
            categories = summary.categories_reported,
            suggestions = suggestions.len(),
            "household assessed"
        );
        info!(
            total_kg = summary.total_annual_kg,
            dominant = ?summary.dominant_category,
            "footprint total"
        );

        Ok(HouseholdReport {
            electricity,
            transport,
            water,
            waste,
            summary,
            suggestions,
        })
    }
}

/// One-shot assessment with an explicit configuration
pub fn assess_household(input: &HouseholdInput, config: &EngineConfig) -> EngineResult<HouseholdReport> {
    FootprintScorer::new(config.clone()).assess(input)
}

/// Household suggestions only, merged across categories
pub fn rank_all(input: &HouseholdInput, config: &EngineConfig) -> EngineResult<Vec<Suggestion>> {
    Ok(assess_household(input, config)?.suggestions)
}
