//! TRANSPORT: weekly ground travel plus annual flight hours
//!
//! Ground modes are weekly km × factor(mode). Flights are entered per year and
//! folded into the weekly figure as hours × factor / 52. The Flights breakdown
//! line reports hours × factor directly so it carries no re-annualization
//! drift.
//!
//! Eco-score is the sustainable share of ground km (bike + public transport);
//! flights are excluded from that ratio.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_quantity, EngineResult};
use crate::metrics::WEEKS_PER_YEAR;
use crate::utils::breakdown::build_breakdown;
use crate::utils::normalization::{clamp_score, share_percent};
use crate::utils::{BreakdownEntry, EngineConfig, PeerComparison, TransportMode};

/// Travel habits; every field is optional and 0 is meaningful
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportInput {
    pub car_km_week: f64,
    pub bike_km_week: f64,
    pub public_transport_km_week: f64,
    pub flight_hours_year: f64,
}

impl TransportInput {
    /// Weekly quantity for a mode (flights in hours per year)
    pub fn quantity(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Car => self.car_km_week,
            TransportMode::Bike => self.bike_km_week,
            TransportMode::PublicTransport => self.public_transport_km_week,
            TransportMode::Flight => self.flight_hours_year,
        }
    }

    pub fn ground_km_week(&self) -> f64 {
        self.car_km_week + self.bike_km_week + self.public_transport_km_week
    }

    pub fn sustainable_km_week(&self) -> f64 {
        self.bike_km_week + self.public_transport_km_week
    }
}

/// Result of the transport calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportResult {
    /// kg CO₂e per week, flights included
    pub weekly_emissions_kg: f64,
    /// kg CO₂e per year (weekly × 52)
    pub annual_emissions_kg: f64,
    /// Car, Bike, Public Transport, Flights (annual kg)
    pub breakdown: Vec<BreakdownEntry>,
    /// Sustainable share of ground km (0-100, HIGH = GOOD)
    pub eco_score: f64,
    /// Annual emissions against the average person
    pub comparison: PeerComparison,
}

/// Calculate transport emissions
///
/// Never incomplete: an all-zero input is a valid zero-emission result.
pub fn calculate_transport(input: &TransportInput, config: &EngineConfig) -> EngineResult<TransportResult> {
    let car_km = ensure_quantity("car_km_week", input.car_km_week)?;
    let bike_km = ensure_quantity("bike_km_week", input.bike_km_week)?;
    let public_km = ensure_quantity("public_transport_km_week", input.public_transport_km_week)?;
    let flight_hours = ensure_quantity("flight_hours_year", input.flight_hours_year)?;

    let factors = &config.factors;
    let flight_factor = factors.transport(TransportMode::Flight)?;

    let car_weekly = car_km * factors.transport(TransportMode::Car)?;
    let bike_weekly = bike_km * factors.transport(TransportMode::Bike)?;
    let public_weekly = public_km * factors.transport(TransportMode::PublicTransport)?;
    let flight_annual = flight_hours * flight_factor;
    let flight_weekly = flight_annual / WEEKS_PER_YEAR;

    let weekly_emissions_kg = car_weekly + bike_weekly + public_weekly + flight_weekly;
    let annual_emissions_kg = weekly_emissions_kg * WEEKS_PER_YEAR;

    let breakdown = build_breakdown(&[
        (TransportMode::Car.display_name(), car_weekly * WEEKS_PER_YEAR),
        (TransportMode::Bike.display_name(), bike_weekly * WEEKS_PER_YEAR),
        (TransportMode::PublicTransport.display_name(), public_weekly * WEEKS_PER_YEAR),
        (TransportMode::Flight.display_name(), flight_annual),
    ]);

    let eco_score = clamp_score(share_percent(input.sustainable_km_week(), input.ground_km_week()));
    let comparison = PeerComparison::against(annual_emissions_kg, config.benchmarks.transport_kg_year);

    Ok(TransportResult {
        weekly_emissions_kg,
        annual_emissions_kg,
        breakdown,
        eco_score,
        comparison,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn calc(car: f64, bike: f64, public: f64, flights: f64) -> TransportResult {
        let input = TransportInput {
            car_km_week: car,
            bike_km_week: bike,
            public_transport_km_week: public,
            flight_hours_year: flights,
        };
        calculate_transport(&input, &EngineConfig::default()).unwrap()
    }

    fn percentage_sum(result: &TransportResult) -> f64 {
        result.breakdown.iter().map(|e| e.percentage_of_total).sum()
    }

    #[test]
    fn test_car_only_commuter() {
        let result = calc(150.0, 0.0, 0.0, 0.0);
        assert_relative_eq!(result.weekly_emissions_kg, 31.5, epsilon = 1e-9);
        assert_eq!(result.annual_emissions_kg.round(), 1638.0);
        assert_eq!(result.eco_score, 0.0);
        assert_eq!(result.breakdown[0].label, "Car");
        assert_eq!(result.breakdown[0].percentage_of_total, 100.0);
        assert!(!result.comparison.is_above());
    }

    #[test]
    fn test_all_zero_is_valid_and_empty() {
        let result = calc(0.0, 0.0, 0.0, 0.0);
        assert_eq!(result.weekly_emissions_kg, 0.0);
        assert_eq!(result.annual_emissions_kg, 0.0);
        assert_eq!(result.eco_score, 0.0);
        assert_eq!(result.breakdown.len(), 4);
        assert!(result.breakdown.iter().all(|e| e.percentage_of_total == 0.0));
    }

    #[test]
    fn test_flights_reported_directly() {
        let result = calc(0.0, 0.0, 0.0, 7.0);
        let flights = &result.breakdown[3];
        assert_eq!(flights.label, "Flights");
        assert_eq!(flights.amount, 630.0);
        assert_relative_eq!(result.annual_emissions_kg, 630.0, epsilon = 1e-9);
        assert_eq!(flights.percentage_of_total, 100.0);
        // Flights do not count toward the ground eco-score
        assert_eq!(result.eco_score, 0.0);
    }

    #[test]
    fn test_mixed_modes_percentages_sum_to_100() {
        for (car, bike, public, flights) in [
            (120.0, 30.0, 60.0, 12.0),
            (1.0, 1.0, 1.0, 1.0),
            (33.3, 0.0, 66.6, 0.5),
            (0.0, 200.0, 0.0, 0.0),
        ] {
            let result = calc(car, bike, public, flights);
            if result.annual_emissions_kg > 0.0 {
                assert_eq!(percentage_sum(&result), 100.0);
            } else {
                assert_eq!(percentage_sum(&result), 0.0);
            }
        }
    }

    #[test]
    fn test_breakdown_amounts_sum_to_annual() {
        let result = calc(120.0, 30.0, 60.0, 12.0);
        let total: f64 = result.breakdown.iter().map(|e| e.amount).sum();
        assert_relative_eq!(total, result.annual_emissions_kg, epsilon = 1e-6);
    }

    #[test]
    fn test_eco_score() {
        assert_relative_eq!(calc(50.0, 25.0, 25.0, 40.0).eco_score, 50.0);
        assert_eq!(calc(0.0, 10.0, 0.0, 0.0).eco_score, 100.0);
    }

    #[test]
    fn test_comparison_against_average_person() {
        let result = calc(250.0, 0.0, 0.0, 0.0);
        // 250 × 0.21 × 52 = 2730
        assert!(result.comparison.is_above());
        assert_eq!(result.comparison.label(), "19% above average");
    }

    #[test]
    fn test_negative_distance_rejected() {
        let input = TransportInput { car_km_week: -1.0, ..Default::default() };
        assert!(calculate_transport(&input, &EngineConfig::default()).is_err());
    }
}
