use crate::error::{ensure_quantity, EngineResult};
use crate::metrics::{TransportInput, WEEKS_PER_YEAR};
use crate::suggestions::rules::{evaluate_rules, Rule};
use crate::suggestions::types::{CostTier, Difficulty, ImpactTier, Suggestion};
use crate::utils::{Category, EngineConfig, TransportMode};

/// Share of car emissions removed by sharing rides
const CARPOOL_REDUCTION: f64 = 0.5;
/// Share of flight emissions replaced by video calls
const VIDEO_CALL_REDUCTION: f64 = 0.5;

/// Values the transport rules look at
#[derive(Debug, Clone, Copy)]
pub struct TransportSignals {
    pub car_km_week: f64,
    pub bike_km_week: f64,
    pub public_transport_km_week: f64,
    pub flight_hours_year: f64,
    pub car_factor: f64,
    pub public_transport_factor: f64,
    pub flight_factor: f64,
}

impl TransportSignals {
    pub fn new(input: &TransportInput, config: &EngineConfig) -> EngineResult<Self> {
        let factors = &config.factors;
        Ok(Self {
            car_km_week: ensure_quantity("car_km_week", input.car_km_week)?,
            bike_km_week: ensure_quantity("bike_km_week", input.bike_km_week)?,
            public_transport_km_week: ensure_quantity(
                "public_transport_km_week",
                input.public_transport_km_week,
            )?,
            flight_hours_year: ensure_quantity("flight_hours_year", input.flight_hours_year)?,
            car_factor: factors.transport(TransportMode::Car)?,
            public_transport_factor: factors.transport(TransportMode::PublicTransport)?,
            flight_factor: factors.transport(TransportMode::Flight)?,
        })
    }
}

fn heavy_driving(s: &TransportSignals) -> bool {
    s.car_km_week > 100.0
}

fn driving_without_transit(s: &TransportSignals) -> bool {
    s.car_km_week > 50.0 && s.public_transport_km_week < 50.0
}

fn frequent_flyer(s: &TransportSignals) -> bool {
    s.flight_hours_year > 10.0
}

fn little_cycling(s: &TransportSignals) -> bool {
    s.bike_km_week < 20.0
}

fn carpooling(s: &TransportSignals) -> Suggestion {
    Suggestion::new(Category::Transport, "Try Carpooling")
        .impact(ImpactTier::High)
        .difficulty(Difficulty::Medium)
        .cost(CostTier::Free)
        .savings(s.car_km_week * s.car_factor * CARPOOL_REDUCTION * WEEKS_PER_YEAR)
        .headline("Reduce car emissions by 50%")
        .description("Share your regular drives with colleagues or neighbours.")
}

fn public_transport(s: &TransportSignals) -> Suggestion {
    let per_km = (s.car_factor - s.public_transport_factor).max(0.0);
    Suggestion::new(Category::Transport, "Use Public Transport")
        .impact(ImpactTier::High)
        .difficulty(Difficulty::Medium)
        .cost(CostTier::Medium)
        .savings(s.car_km_week * per_km * WEEKS_PER_YEAR)
        .headline("75% less emissions than driving")
        .description("Replace car trips with bus or train for your regular commute.")
}

fn video_calls(s: &TransportSignals) -> Suggestion {
    Suggestion::new(Category::Transport, "Consider Video Calls")
        .impact(ImpactTier::High)
        .difficulty(Difficulty::Hard)
        .cost(CostTier::Free)
        .savings(s.flight_hours_year * s.flight_factor * VIDEO_CALL_REDUCTION)
        .headline("Replace business flights")
        .description("Swap some flights for remote meetings.")
}

fn short_trip_cycling(_: &TransportSignals) -> Suggestion {
    Suggestion::new(Category::Transport, "Bike for Short Trips")
        .impact(ImpactTier::Medium)
        .difficulty(Difficulty::Easy)
        .cost(CostTier::Low)
        .savings(50.0)
        .headline("Zero emissions + health benefits")
        .description("Cycle trips under 5 km instead of driving.")
}

pub const TRANSPORT_RULES: [Rule<TransportSignals>; 4] = [
    Rule { id: "transport.carpool", base_priority: 1, applies: heavy_driving, build: carpooling },
    Rule { id: "transport.public_transport", base_priority: 1, applies: driving_without_transit, build: public_transport },
    Rule { id: "transport.video_calls", base_priority: 2, applies: frequent_flyer, build: video_calls },
    Rule { id: "transport.bike", base_priority: 3, applies: little_cycling, build: short_trip_cycling },
];

/// Rank transport suggestions
///
/// Savings figures use the same factors as the transport calculator.
/// Returns an empty list when no threshold is crossed.
pub fn rank_transport(input: &TransportInput, config: &EngineConfig) -> EngineResult<Vec<Suggestion>> {
    let signals = TransportSignals::new(input, config)?;
    Ok(evaluate_rules(&TRANSPORT_RULES, &signals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use approx::assert_relative_eq;

    fn rank(car: f64, bike: f64, public: f64, flights: f64) -> Vec<Suggestion> {
        let input = TransportInput {
            car_km_week: car,
            bike_km_week: bike,
            public_transport_km_week: public,
            flight_hours_year: flights,
        };
        rank_transport(&input, &EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_heavy_driver() {
        let list = rank(150.0, 0.0, 0.0, 0.0);
        let titles: Vec<&str> = list.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Try Carpooling", "Use Public Transport", "Bike for Short Trips"]);

        assert_relative_eq!(list[0].annual_savings_kg, 150.0 * 0.21 * 0.5 * 52.0, epsilon = 1e-9);
        assert_eq!(list[0].savings_label(), "819 kg CO₂/year");
        assert_relative_eq!(list[1].annual_savings_kg, 150.0 * 0.16 * 52.0, epsilon = 1e-9);
    }

    #[test]
    fn test_frequent_flyer_savings() {
        let list = rank(0.0, 30.0, 0.0, 20.0);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title, "Consider Video Calls");
        assert_eq!(list[0].annual_savings_kg, 900.0);
        assert_eq!(list[0].priority, 2);
    }

    #[test]
    fn test_sustainable_commuter_gets_nothing() {
        assert!(rank(10.0, 40.0, 80.0, 2.0).is_empty());
    }

    #[test]
    fn test_transit_user_skips_public_transport_tip() {
        let list = rank(80.0, 25.0, 60.0, 0.0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_negative_distance_rejected() {
        let input = TransportInput { bike_km_week: -5.0, ..Default::default() };
        let err = rank_transport(&input, &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { field: "bike_km_week", .. }));
    }

    #[test]
    fn test_thresholds_are_strict() {
        let list = rank(100.0, 20.0, 50.0, 10.0);
        assert!(list.is_empty());
    }
}
