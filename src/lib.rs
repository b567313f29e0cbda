//! Household Footprint Engine
//!
//! Estimates a household's annual carbon footprint from four self-reported
//! categories and ranks actions that would reduce it.
//!
//! Layout:
//! - `utils/`: emission factor table, benchmarks and configuration, scoring and breakdown helpers
//! - `metrics/`: one calculator per category (electricity, transport, water, waste)
//! - `suggestions/`: per-category rule tables and the household merge
//! - `what_if`: marginal savings of changing one weekly quantity
//! - `summary` / `scorer`: household roll-up and the main entry point
//!
//! All amounts are kg CO₂e unless a name says otherwise. Rounding happens
//! only when a value is turned into a label.

pub mod error;
pub mod utils;
pub mod metrics;
pub mod suggestions;
pub mod what_if;
pub mod summary;
pub mod scorer;

// Re-export commonly used types
pub use error::{EngineError, EngineResult};
pub use utils::{Benchmarks, Category, EngineConfig, EnergySource, FactorTable, TransportMode, WasteStream};
pub use metrics::*;
pub use suggestions::{merge_ranked, rank_electricity, rank_transport, rank_waste, rank_water, top_n, Suggestion};
pub use what_if::{evaluate_what_if, WhatIfOutcome, WhatIfScenario};
pub use summary::{CategoryShare, FootprintSummary};
pub use scorer::{assess_household, rank_all, FootprintScorer, HouseholdInput, HouseholdReport};
