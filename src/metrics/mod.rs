//! Category calculators
//!
//! Each category is implemented in its own module and shares one shape:
//! `&Input` + `&EngineConfig` → result. Calculators that have required fields
//! return `Ok(None)` when those fields are missing.

pub mod electricity;
pub mod transport;
pub mod water;
pub mod waste;

// Re-export calculator functions
pub use electricity::{calculate_electricity, renewable_switch_savings, EfficiencyRating, ElectricityInput, ElectricityResult};
pub use transport::{calculate_transport, TransportInput, TransportResult};
pub use water::{calculate_water, WaterInput, WaterResult};
pub use waste::{calculate_waste, DiversionRating, NetImpact, WasteInput, WasteResult};

pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

pub(crate) fn default_household_size() -> u32 {
    1
}
