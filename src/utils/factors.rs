//! Emission Factor Tables
//!
//! Maps `category.subtype` keys (e.g. `electricity.coal`, `transport.car`) to
//! kg CO₂e per unit of activity. Units per category:
//! - electricity: per kWh
//! - transport: per km, flights per flight hour
//! - water: per 1000 L treated and pumped
//! - waste: per kg; diversion credits are negative
//!
//! Subtype strings coming from the presentation layer are parsed into typed
//! enums before any computation runs, so an unknown source fails fast instead
//! of silently borrowing another factor.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Footprint category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electricity,
    Transport,
    Water,
    Waste,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Electricity,
        Category::Transport,
        Category::Water,
        Category::Waste,
    ];

    /// Table key prefix
    pub fn key(&self) -> &'static str {
        match self {
            Category::Electricity => "electricity",
            Category::Transport => "transport",
            Category::Water => "water",
            Category::Waste => "waste",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Electricity => "Electricity",
            Category::Transport => "Transport",
            Category::Water => "Water",
            Category::Waste => "Waste",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Normalize a user-supplied subtype string for matching
fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

/// Electricity generation source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergySource {
    Coal,
    Gas,
    Renewable,
    Mixed,
}

impl EnergySource {
    pub const ALL: [EnergySource; 4] = [
        EnergySource::Coal,
        EnergySource::Gas,
        EnergySource::Renewable,
        EnergySource::Mixed,
    ];

    pub fn subtype(&self) -> &'static str {
        match self {
            EnergySource::Coal => "coal",
            EnergySource::Gas => "gas",
            EnergySource::Renewable => "renewable",
            EnergySource::Mixed => "mixed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EnergySource::Coal => "Coal",
            EnergySource::Gas => "Natural Gas",
            EnergySource::Renewable => "Renewable (Solar/Wind)",
            EnergySource::Mixed => "Mixed Grid (Average)",
        }
    }
}

impl FromStr for EnergySource {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "coal" => Ok(EnergySource::Coal),
            "gas" | "natural_gas" => Ok(EnergySource::Gas),
            "renewable" => Ok(EnergySource::Renewable),
            "mixed" => Ok(EnergySource::Mixed),
            _ => Err(EngineError::unknown_subtype(Category::Electricity.key(), s)),
        }
    }
}

/// Mode of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Car,
    Bike,
    PublicTransport,
    /// Factor is per flight hour, not per km
    Flight,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Car,
        TransportMode::Bike,
        TransportMode::PublicTransport,
        TransportMode::Flight,
    ];

    pub fn subtype(&self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Bike => "bike",
            TransportMode::PublicTransport => "public_transport",
            TransportMode::Flight => "flight",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TransportMode::Car => "Car",
            TransportMode::Bike => "Bike",
            TransportMode::PublicTransport => "Public Transport",
            TransportMode::Flight => "Flights",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            TransportMode::Flight => "hours/year",
            _ => "km/week",
        }
    }
}

impl FromStr for TransportMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "car" => Ok(TransportMode::Car),
            "bike" | "bicycle" => Ok(TransportMode::Bike),
            "public" | "public_transport" | "publictransport" => Ok(TransportMode::PublicTransport),
            "flight" | "flights" => Ok(TransportMode::Flight),
            _ => Err(EngineError::unknown_subtype(Category::Transport.key(), s)),
        }
    }
}

/// Destination of household waste
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteStream {
    Landfill,
    Recycling,
    Compost,
}

impl WasteStream {
    pub const ALL: [WasteStream; 3] = [
        WasteStream::Landfill,
        WasteStream::Recycling,
        WasteStream::Compost,
    ];

    pub fn subtype(&self) -> &'static str {
        match self {
            WasteStream::Landfill => "landfill",
            WasteStream::Recycling => "recycling",
            WasteStream::Compost => "compost",
        }
    }

    /// Diversion streams carry a credit (negative factor)
    pub fn is_credit(&self) -> bool {
        !matches!(self, WasteStream::Landfill)
    }
}

impl FromStr for WasteStream {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "landfill" => Ok(WasteStream::Landfill),
            "recycling" | "recycled" => Ok(WasteStream::Recycling),
            "compost" | "composted" => Ok(WasteStream::Compost),
            _ => Err(EngineError::unknown_subtype(Category::Waste.key(), s)),
        }
    }
}

/// Only water subtype: treatment and pumping, per 1000 L
pub const WATER_TREATMENT: &str = "treatment";

/// Reference factors (kg CO₂e per unit)
const REFERENCE_FACTORS: [(&str, f64); 12] = [
    ("electricity.coal", 0.82),
    ("electricity.gas", 0.49),
    ("electricity.renewable", 0.05),
    ("electricity.mixed", 0.65),
    ("transport.car", 0.21),
    ("transport.bike", 0.0),
    ("transport.public_transport", 0.05),
    ("transport.flight", 90.0),
    ("water.treatment", 0.4),
    ("waste.landfill", 0.5),
    ("waste.recycling", -2.0),
    ("waste.compost", -0.3),
];

/// Immutable emission factor lookup table
///
/// Serializes as a flat map of `category.subtype` → factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorTable {
    factors: FxHashMap<String, f64>,
}

impl Default for FactorTable {
    fn default() -> Self {
        Self::reference()
    }
}

impl FactorTable {
    /// Table with the reference factors
    pub fn reference() -> Self {
        let factors = REFERENCE_FACTORS
            .iter()
            .map(|(key, value)| (key.to_string(), *value))
            .collect();
        Self { factors }
    }

    /// Reference table with selected entries replaced
    ///
    /// Overrides may add new keys; validation is left to `validate`.
    pub fn with_overrides(overrides: &FxHashMap<String, f64>) -> Self {
        let mut table = Self::reference();
        for (key, value) in overrides {
            table.factors.insert(key.clone(), *value);
        }
        table
    }

    /// Look up a factor by category and raw subtype key
    pub fn factor_for(&self, category: Category, subtype: &str) -> EngineResult<f64> {
        let key = format!("{}.{}", category.key(), subtype);
        self.factors
            .get(&key)
            .copied()
            .ok_or_else(|| EngineError::unknown_subtype(category.key(), subtype))
    }

    pub fn electricity(&self, source: EnergySource) -> EngineResult<f64> {
        self.factor_for(Category::Electricity, source.subtype())
    }

    pub fn transport(&self, mode: TransportMode) -> EngineResult<f64> {
        self.factor_for(Category::Transport, mode.subtype())
    }

    pub fn water(&self) -> EngineResult<f64> {
        self.factor_for(Category::Water, WATER_TREATMENT)
    }

    /// Signed factor: landfill positive, diversion credits negative
    pub fn waste(&self, stream: WasteStream) -> EngineResult<f64> {
        self.factor_for(Category::Waste, stream.subtype())
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Check sign invariants for every known key
    ///
    /// Emission rates must be finite and ≥ 0; waste diversion credits ≤ 0.
    /// Keys outside the known categories are rejected.
    pub fn validate(&self) -> EngineResult<()> {
        for (key, value) in &self.factors {
            if !value.is_finite() {
                return Err(EngineError::Config(format!("factor {} is not finite", key)));
            }

            let (category, subtype) = key
                .split_once('.')
                .ok_or_else(|| EngineError::Config(format!("malformed factor key '{}'", key)))?;

            let is_credit = match category {
                "electricity" | "transport" | "water" => false,
                "waste" => subtype.parse::<WasteStream>()?.is_credit(),
                _ => {
                    return Err(EngineError::Config(format!(
                        "unknown factor category in key '{}'",
                        key
                    )))
                }
            };

            if is_credit && *value > 0.0 {
                return Err(EngineError::Config(format!(
                    "credit factor {} must be <= 0, got {}",
                    key, value
                )));
            }
            if !is_credit && *value < 0.0 {
                return Err(EngineError::Config(format!(
                    "emission factor {} must be >= 0, got {}",
                    key, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        let table = FactorTable::reference();
        assert_eq!(table.len(), 12);
        assert_eq!(table.electricity(EnergySource::Coal).unwrap(), 0.82);
        assert_eq!(table.electricity(EnergySource::Gas).unwrap(), 0.49);
        assert_eq!(table.electricity(EnergySource::Renewable).unwrap(), 0.05);
        assert_eq!(table.electricity(EnergySource::Mixed).unwrap(), 0.65);
        assert_eq!(table.transport(TransportMode::Car).unwrap(), 0.21);
        assert_eq!(table.transport(TransportMode::Bike).unwrap(), 0.0);
        assert_eq!(table.transport(TransportMode::PublicTransport).unwrap(), 0.05);
        assert_eq!(table.transport(TransportMode::Flight).unwrap(), 90.0);
        assert_eq!(table.water().unwrap(), 0.4);
        assert_eq!(table.waste(WasteStream::Landfill).unwrap(), 0.5);
        assert_eq!(table.waste(WasteStream::Recycling).unwrap(), -2.0);
        assert_eq!(table.waste(WasteStream::Compost).unwrap(), -0.3);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_lookup_miss_is_error() {
        let table = FactorTable::reference();
        let err = table.factor_for(Category::Electricity, "nuclear").unwrap_err();
        assert_eq!(err, EngineError::unknown_subtype("electricity", "nuclear"));
    }

    #[test]
    fn test_parse_subtypes() {
        assert_eq!("coal".parse::<EnergySource>().unwrap(), EnergySource::Coal);
        assert_eq!(" Renewable ".parse::<EnergySource>().unwrap(), EnergySource::Renewable);
        assert_eq!("natural-gas".parse::<EnergySource>().unwrap(), EnergySource::Gas);
        assert!("".parse::<EnergySource>().is_err());
        assert!("wind".parse::<EnergySource>().is_err());

        assert_eq!("public-transport".parse::<TransportMode>().unwrap(), TransportMode::PublicTransport);
        assert_eq!("publicTransport".parse::<TransportMode>().unwrap(), TransportMode::PublicTransport);
        assert_eq!("public".parse::<TransportMode>().unwrap(), TransportMode::PublicTransport);
        assert!("boat".parse::<TransportMode>().is_err());

        assert_eq!("compost".parse::<WasteStream>().unwrap(), WasteStream::Compost);
    }

    #[test]
    fn test_overrides_and_validation() {
        let mut overrides = FxHashMap::default();
        overrides.insert("electricity.mixed".to_string(), 0.4);
        let table = FactorTable::with_overrides(&overrides);
        assert_eq!(table.electricity(EnergySource::Mixed).unwrap(), 0.4);
        assert!(table.validate().is_ok());

        overrides.insert("transport.car".to_string(), -0.1);
        assert!(FactorTable::with_overrides(&overrides).validate().is_err());

        let mut credit = FxHashMap::default();
        credit.insert("waste.recycling".to_string(), 1.0);
        assert!(FactorTable::with_overrides(&credit).validate().is_err());

        let mut stray = FxHashMap::default();
        stray.insert("food.beef".to_string(), 27.0);
        assert!(FactorTable::with_overrides(&stray).validate().is_err());
    }

    #[test]
    fn test_json_round_trip_shape() {
        let json = r#"{"electricity.coal": 0.9, "transport.car": 0.2}"#;
        let table: FactorTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.electricity(EnergySource::Coal).unwrap(), 0.9);
        assert!(table.electricity(EnergySource::Gas).is_err());
    }
}
