//! Utility modules shared by the category calculators
//!
//! - Factors: emission factor table and typed subtypes
//! - Config: benchmarks and factor overrides loaded from JSON
//! - Normalization: score clamping and peer comparison
//! - Breakdown: per-subtype shares that sum to 100

pub mod factors;
pub mod config;
pub mod normalization;
pub mod breakdown;

// Re-export commonly used types
pub use factors::{Category, EnergySource, FactorTable, TransportMode, WasteStream};
pub use config::{Benchmarks, EngineConfig};
pub use normalization::{clamp_score, share_percent, ComparisonDirection, PeerComparison};
pub use breakdown::{build_breakdown, BreakdownEntry};
