use serde::{Deserialize, Serialize};

use crate::utils::Category;

/// Qualitative size of a suggestion's effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactTier {
    High,
    Medium,
    Low,
}

/// How much effort a suggestion asks of the household
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Rough up-front cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostTier {
    Free,
    Low,
    Medium,
    High,
}

/// A ranked recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub category: Category,
    pub impact: ImpactTier,
    pub difficulty: Difficulty,
    pub cost: CostTier,
    /// Estimated kg CO₂e avoided per year
    pub annual_savings_kg: f64,
    /// 1 = most important
    pub priority: u8,
    pub headline: String,   // "Reduce car emissions by 50%"
    pub description: String,
}

impl Suggestion {
    /// Start a suggestion with neutral tiers; rules fill in the rest
    pub fn new(category: Category, title: &str) -> Self {
        Self {
            title: title.to_string(),
            category,
            impact: ImpactTier::Medium,
            difficulty: Difficulty::Medium,
            cost: CostTier::Low,
            annual_savings_kg: 0.0,
            priority: 0,
            headline: String::new(),
            description: String::new(),
        }
    }

    pub fn impact(mut self, impact: ImpactTier) -> Self {
        self.impact = impact;
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn cost(mut self, cost: CostTier) -> Self {
        self.cost = cost;
        self
    }

    pub fn savings(mut self, annual_savings_kg: f64) -> Self {
        self.annual_savings_kg = annual_savings_kg;
        self
    }

    pub fn headline(mut self, headline: &str) -> Self {
        self.headline = headline.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// e.g. "331 kg CO₂/year"
    pub fn savings_label(&self) -> String {
        format!("{} kg CO₂/year", self.annual_savings_kg.round() as i64)
    }
}
