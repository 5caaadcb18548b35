//! Solution scoring.
//!
//! Reduces a metrics object to one comparable number. Pure: the score
//! depends on the metrics alone, never on the raw assignments, so two
//! rosters with identical metrics always score identically.
//!
//! # Policy
//!
//! Starting from [`BASE_SCORE`], each missing head-hour costs
//! `GAP_WEIGHT * (1 + criticality)` points (a hole in a critical area
//! hurts more) and each hour of paid-hours standard deviation costs
//! [`FAIRNESS_WEIGHT`] points. The result is floored at zero. The exact
//! weights are tunable policy; what is load-bearing is monotonicity:
//! more missing coverage or a wider hours spread never raises the score.

use crate::models::Metrics;

/// Score of a roster with full coverage and perfectly even hours.
pub const BASE_SCORE: f64 = 1000.0;

/// Points lost per missing head-hour, scaled by `1 + criticality`.
pub const GAP_WEIGHT: f64 = 2.0;

/// Points lost per hour of paid-hours standard deviation.
pub const FAIRNESS_WEIGHT: f64 = 5.0;

/// Scores a metrics object. Higher is better; floored at 0.
pub fn score_solution(metrics: &Metrics) -> f64 {
    let gap_penalty: f64 = metrics
        .gaps
        .iter()
        .map(|g| g.missing as f64 * GAP_WEIGHT * (1.0 + g.criticality as f64))
        .sum();
    let fairness_penalty = FAIRNESS_WEIGHT * metrics.fairness_std_dev;
    (BASE_SCORE - gap_penalty - fairness_penalty).max(0.0)
}
