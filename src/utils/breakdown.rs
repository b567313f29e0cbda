//! Per-subtype breakdown of a category total
//!
//! Percentages are whole numbers assigned by largest remainder, so they sum
//! to exactly 100 whenever there is anything to apportion.

use serde::{Deserialize, Serialize};

/// One line of a breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub label: String,
    /// Annual kg CO₂e; negative for diversion credits
    pub amount: f64,
    /// Whole-number share of the gross total
    pub percentage_of_total: f64,
}

/// Build breakdown entries from `(label, annual amount)` pairs
///
/// Shares are taken of the gross magnitude Σ|amount|, which equals the
/// signed total whenever no entry is a credit.
pub fn build_breakdown(items: &[(&str, f64)]) -> Vec<BreakdownEntry> {
    let magnitudes: Vec<f64> = items.iter().map(|(_, amount)| amount.abs()).collect();
    let shares = apportion_percentages(&magnitudes);

    items
        .iter()
        .zip(shares)
        .map(|((label, amount), share)| BreakdownEntry {
            label: label.to_string(),
            amount: *amount,
            percentage_of_total: share as f64,
        })
        .collect()
}

/// Largest-remainder rounding of non-negative weights to whole percentages
///
/// Returns all zeros when the weights sum to 0. Ties on the remainder go to
/// the earlier entry.
pub fn apportion_percentages(weights: &[f64]) -> Vec<u32> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return vec![0; weights.len()];
    }

    let exact: Vec<f64> = weights.iter().map(|w| w / total * 100.0).collect();
    let mut shares: Vec<u32> = exact.iter().map(|e| e.floor() as u32).collect();
    let assigned: u32 = shares.iter().sum();
    let remaining = 100u32.saturating_sub(assigned) as usize;

    let mut order: Vec<usize> = (0..weights.len()).collect();
    // Stable sort keeps input order among equal remainders
    order.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.partial_cmp(&ra).unwrap_or(std::cmp::Ordering::Equal)
    });

    for &idx in order.iter().take(remaining) {
        shares[idx] += 1;
    }
    shares
}
