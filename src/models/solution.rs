//! Solution model: assignments, coverage metrics, gaps, score.
//!
//! A solution is created once per generation call and immutable
//! thereafter; the caller ranks, stores, or discards it. All aggregate
//! maps are ordered (`BTreeMap`) so iteration, comparison, and
//! serialization are reproducible; an absent entry means zero.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::engine::ShiftModel;

/// Per-bucket, per-area headcount grid.
///
/// Outer key: hour bucket (`day_index * 24 + hour`). Inner key: area id.
pub type CoverageGrid = BTreeMap<usize, BTreeMap<String, u32>>;

/// One person working one shift in one area on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned person.
    pub person_id: String,
    /// Day of the week (0 = Monday .. 6 = Sunday).
    pub day_index: usize,
    /// Area worked.
    pub area_id: String,
    /// Shift code worked.
    pub shift_code: String,
    /// Whether this is a half-day (first half of the shift window).
    pub half: bool,
}

/// A staffing shortfall: coverage below requirement in one bucket/area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gap {
    /// Hour bucket of the shortfall.
    pub bucket: usize,
    /// Affected area.
    pub area_id: String,
    /// Criticality of the affected area, carried so scoring needs no
    /// lookup beyond the metrics themselves.
    pub criticality: u8,
    /// Headcount missing (`required - coverage`, always positive).
    pub missing: u32,
}

/// Everything measured about a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Actual headcount per bucket per area, derived from assignments.
    pub coverage: CoverageGrid,
    /// Required headcount per bucket per area, derived from area minimums.
    pub required: CoverageGrid,
    /// All shortfalls, ascending by bucket then area id.
    pub gaps: Vec<Gap>,
    /// Population standard deviation of paid hours across all people.
    pub fairness_std_dev: f64,
    /// Paid hours per person over the horizon.
    pub hours_by_person: BTreeMap<String, f64>,
    /// Count of Saturday assignments per person.
    pub saturday_loads: BTreeMap<String, u32>,
}

impl Metrics {
    /// Coverage at a bucket/area; absent means zero.
    pub fn coverage_at(&self, bucket: usize, area_id: &str) -> u32 {
        grid_at(&self.coverage, bucket, area_id)
    }

    /// Requirement at a bucket/area; absent means zero.
    pub fn required_at(&self, bucket: usize, area_id: &str) -> u32 {
        grid_at(&self.required, bucket, area_id)
    }

    /// Coverage divided by requirement, for heatmap banding.
    ///
    /// Returns `None` where nothing is required (unconstrained bucket).
    pub fn coverage_ratio(&self, bucket: usize, area_id: &str) -> Option<f64> {
        let required = self.required_at(bucket, area_id);
        if required == 0 {
            return None;
        }
        Some(self.coverage_at(bucket, area_id) as f64 / required as f64)
    }

    /// Total missing headcount-hours across all gaps.
    pub fn total_missing(&self) -> u32 {
        self.gaps.iter().map(|g| g.missing).sum()
    }
}

fn grid_at(grid: &CoverageGrid, bucket: usize, area_id: &str) -> u32 {
    grid.get(&bucket)
        .and_then(|areas| areas.get(area_id))
        .copied()
        .unwrap_or(0)
}

/// A complete generated roster with its metrics and score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// Unique solution id. Identity only — never part of determinism
    /// comparisons.
    pub id: String,
    /// Shift model the roster was generated under.
    pub model: ShiftModel,
    /// One assignment per person per worked day.
    pub assignments: Vec<Assignment>,
    /// Measured coverage, gaps, and fairness.
    pub metrics: Metrics,
    /// Single comparable quality score (higher is better).
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metrics() -> Metrics {
        let mut coverage: CoverageGrid = BTreeMap::new();
        coverage
            .entry(6)
            .or_default()
            .insert("floor".to_string(), 2);
        let mut required: CoverageGrid = BTreeMap::new();
        required
            .entry(6)
            .or_default()
            .insert("floor".to_string(), 3);
        required
            .entry(7)
            .or_default()
            .insert("floor".to_string(), 3);

        Metrics {
            coverage,
            required,
            gaps: vec![
                Gap {
                    bucket: 6,
                    area_id: "floor".into(),
                    criticality: 1,
                    missing: 1,
                },
                Gap {
                    bucket: 7,
                    area_id: "floor".into(),
                    criticality: 1,
                    missing: 3,
                },
            ],
            fairness_std_dev: 0.0,
            hours_by_person: BTreeMap::new(),
            saturday_loads: BTreeMap::new(),
        }
    }

    #[test]
    fn test_absent_means_zero() {
        let m = sample_metrics();
        assert_eq!(m.coverage_at(6, "floor"), 2);
        assert_eq!(m.coverage_at(7, "floor"), 0);
        assert_eq!(m.coverage_at(6, "icu"), 0);
        assert_eq!(m.required_at(99, "floor"), 0);
    }

    #[test]
    fn test_coverage_ratio() {
        let m = sample_metrics();
        let ratio = m.coverage_ratio(6, "floor").unwrap();
        assert!((ratio - 2.0 / 3.0).abs() < 1e-10);
        // Nothing required at bucket 5 → unconstrained
        assert!(m.coverage_ratio(5, "floor").is_none());
    }

    #[test]
    fn test_total_missing() {
        assert_eq!(sample_metrics().total_missing(), 4);
    }
}
