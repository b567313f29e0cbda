//! Ordered rule tables
//!
//! A rule pairs a predicate over a category's signals with a builder and a
//! base priority. Tables are evaluated top to bottom; the fired suggestions
//! are then stably sorted by priority, so table order breaks ties.

use smallvec::SmallVec;

use crate::suggestions::types::Suggestion;

/// One threshold check in a category's rule table
pub struct Rule<S> {
    /// Stable identifier used in logs
    pub id: &'static str,
    pub base_priority: u8,
    pub applies: fn(&S) -> bool,
    pub build: fn(&S) -> Suggestion,
}

/// Predicate for unconditional tips
pub fn always<S>(_: &S) -> bool {
    true
}

/// Evaluate a rule table against one set of signals
pub fn evaluate_rules<S>(rules: &[Rule<S>], signals: &S) -> Vec<Suggestion> {
    // Tables hold a handful of rules
    let mut fired: SmallVec<[Suggestion; 4]> = SmallVec::new();

    for rule in rules {
        if (rule.applies)(signals) {
            tracing::debug!("Suggestion rule fired: {}", rule.id);
            let mut suggestion = (rule.build)(signals);
            suggestion.priority = rule.base_priority;
            fired.push(suggestion);
        }
    }

    fired.sort_by_key(|s| s.priority);
    fired.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Category;

    struct Level(f64);

    fn high(s: &Level) -> bool {
        s.0 > 10.0
    }

    fn build_a(_: &Level) -> Suggestion {
        Suggestion::new(Category::Water, "A")
    }

    fn build_b(_: &Level) -> Suggestion {
        Suggestion::new(Category::Water, "B")
    }

    fn build_c(_: &Level) -> Suggestion {
        Suggestion::new(Category::Water, "C")
    }

    const RULES: [Rule<Level>; 3] = [
        Rule { id: "a", base_priority: 3, applies: always, build: build_a },
        Rule { id: "b", base_priority: 1, applies: high, build: build_b },
        Rule { id: "c", base_priority: 3, applies: always, build: build_c },
    ];

    #[test]
    fn test_sorted_by_priority_then_table_order() {
        let titles: Vec<String> = evaluate_rules(&RULES, &Level(20.0)).into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_priority_assigned_from_rule() {
        let fired = evaluate_rules(&RULES, &Level(0.0));
        assert_eq!(fired.len(), 2);
        assert!(fired.iter().all(|s| s.priority == 3));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(evaluate_rules(&RULES, &Level(15.0)), evaluate_rules(&RULES, &Level(15.0)));
    }
}
