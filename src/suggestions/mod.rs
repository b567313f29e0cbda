//! Suggestion Ranker
//!
//! Each category owns an ordered rule table (see `rules`). Ranking a category
//! evaluates its table against signals derived from the input (and, for the
//! electricity and water savings figures, the calculator result).

pub mod types;
pub mod rules;
pub mod electricity;
pub mod transport;
pub mod water;
pub mod waste;

pub use types::{CostTier, Difficulty, ImpactTier, Suggestion};
pub use rules::{evaluate_rules, Rule};
pub use electricity::rank_electricity;
pub use transport::rank_transport;
pub use water::rank_water;
pub use waste::rank_waste;

/// Merge per-category lists into one household list
///
/// Ordered by priority, then larger savings first, then input order.
pub fn merge_ranked(lists: Vec<Vec<Suggestion>>) -> Vec<Suggestion> {
    let mut merged: Vec<Suggestion> = lists.into_iter().flatten().collect();
    merged.sort_by(|a, b| {
        a.priority.cmp(&b.priority).then_with(|| {
            b.annual_savings_kg
                .partial_cmp(&a.annual_savings_kg)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });
    merged
}

/// Keep the `n` most important suggestions
pub fn top_n(mut suggestions: Vec<Suggestion>, n: usize) -> Vec<Suggestion> {
    suggestions.truncate(n);
    suggestions
}
